//! Spherical orbit camera around the scene origin.
//!
//! Left-drag orbits, the wheel zooms, and the camera always looks at the
//! origin. The pose is stored as spherical coordinates so the clamps are
//! trivial to state: the polar angle keeps a margin away from both poles
//! and the radius stays inside a fixed band.

use std::f32::consts::PI;

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

/// Tuning for orbit and zoom input.
#[derive(Resource)]
pub struct CameraConfig {
    /// Where the camera sits before any input.
    pub start_position: Vec3,
    /// Radians of orbit per pixel of drag.
    pub orbit_sensitivity: f32,
    /// World units of dolly per pixel of scroll.
    pub zoom_sensitivity: f32,
    /// Pixels represented by one line-unit wheel tick.
    pub line_scroll_px: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    /// Keep-out margin around the poles for the polar angle.
    pub polar_margin: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            start_position: Vec3::new(0.0, 50.0, 80.0),
            orbit_sensitivity: 0.01,
            zoom_sensitivity: 0.1,
            line_scroll_px: 100.0,
            min_radius: 20.0,
            max_radius: 200.0,
            polar_margin: 0.1,
        }
    }
}

/// Camera pose in spherical coordinates around the origin.
#[derive(Component)]
pub struct OrbitCamera {
    pub radius: f32,
    /// Azimuth around +Y, measured from +Z.
    pub yaw: f32,
    /// Polar angle down from +Y, clamped away from the poles.
    pub polar: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_position(CameraConfig::default().start_position)
    }
}

impl OrbitCamera {
    /// Pose that looks at the origin from `position`.
    pub fn from_position(position: Vec3) -> Self {
        let radius = position.length();
        Self {
            radius,
            yaw: position.x.atan2(position.z),
            polar: (position.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    /// Apply a drag delta in pixels.
    pub fn orbit(&mut self, delta: Vec2, config: &CameraConfig) {
        self.yaw -= delta.x * config.orbit_sensitivity;
        self.polar = (self.polar + delta.y * config.orbit_sensitivity)
            .clamp(config.polar_margin, PI - config.polar_margin);
    }

    /// Apply a scroll amount in pixels; positive dollies out.
    pub fn zoom(&mut self, scroll_px: f32, config: &CameraConfig) {
        self.radius = (self.radius + scroll_px * config.zoom_sensitivity)
            .clamp(config.min_radius, config.max_radius);
    }

    /// Cartesian position for the current pose.
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.radius * self.polar.sin() * self.yaw.sin(),
            self.radius * self.polar.cos(),
            self.radius * self.polar.sin() * self.yaw.cos(),
        )
    }
}

/// Plugin for the orbit camera controls.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraConfig>()
            .add_systems(Update, orbit_camera_controller);
    }
}

/// Drag to orbit, scroll to zoom, then re-aim the camera at the origin.
pub fn orbit_camera_controller(
    mut contexts: EguiContexts,
    config: Res<CameraConfig>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    mut wheel: EventReader<MouseWheel>,
    mut query: Query<(&mut Transform, &mut OrbitCamera)>,
) {
    let Ok((mut transform, mut camera)) = query.single_mut() else {
        return;
    };

    let ui_owns_pointer = contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_pointer_input())
        .unwrap_or(false);
    if ui_owns_pointer {
        motion.clear();
        wheel.clear();
        return;
    }

    if buttons.pressed(MouseButton::Left) {
        let mut drag = Vec2::ZERO;
        for event in motion.read() {
            drag += event.delta;
        }
        if drag != Vec2::ZERO {
            camera.orbit(drag, &config);
        }
    } else {
        motion.clear();
    }

    for event in wheel.read() {
        let scroll_px = match event.unit {
            MouseScrollUnit::Line => event.y * config.line_scroll_px,
            MouseScrollUnit::Pixel => event.y,
        };
        // Scrolling up moves the camera in.
        camera.zoom(-scroll_px, &config);
    }

    *transform = Transform::from_translation(camera.position()).looking_at(Vec3::ZERO, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pose_matches_the_starting_position() {
        let config = CameraConfig::default();
        let camera = OrbitCamera::default();
        let position = camera.position();
        assert!((position - config.start_position).length() < 1e-3);
        assert!((camera.radius - config.start_position.length()).abs() < 1e-3);
        assert!(camera.yaw.abs() < 1e-6);
    }

    #[test]
    fn polar_angle_never_reaches_the_poles() {
        let config = CameraConfig::default();
        let mut camera = OrbitCamera::default();
        for _ in 0..200 {
            camera.orbit(Vec2::new(13.0, 10_000.0), &config);
            assert!(camera.polar >= config.polar_margin);
            assert!(camera.polar <= PI - config.polar_margin);
            camera.orbit(Vec2::new(-7.0, -10_000.0), &config);
            assert!(camera.polar >= config.polar_margin);
            assert!(camera.polar <= PI - config.polar_margin);
        }
    }

    #[test]
    fn radius_stays_inside_the_zoom_band() {
        let config = CameraConfig::default();
        let mut camera = OrbitCamera::default();
        for _ in 0..200 {
            camera.zoom(100_000.0, &config);
            assert!(camera.radius <= config.max_radius);
            camera.zoom(-100_000.0, &config);
            assert!(camera.radius >= config.min_radius);
        }
    }

    #[test]
    fn pose_never_degenerates_under_mixed_input() {
        let config = CameraConfig::default();
        let mut camera = OrbitCamera::default();
        for step in 0..500 {
            let wiggle = (step % 17) as f32 - 8.0;
            camera.orbit(Vec2::new(wiggle * 40.0, wiggle * 90.0), &config);
            camera.zoom(wiggle * 5_000.0, &config);
            let position = camera.position();
            assert!(position.is_finite());
            assert!((position.length() - camera.radius).abs() < camera.radius * 1e-4);
            assert!(position.length() >= config.min_radius - 1e-3);
        }
    }

    #[test]
    fn yaw_drag_moves_the_camera_sideways() {
        let config = CameraConfig::default();
        let mut camera = OrbitCamera::from_position(Vec3::new(0.0, 0.1, 100.0));
        camera.orbit(Vec2::new(50.0, 0.0), &config);
        // Dragging right swings the camera toward -X.
        assert!(camera.position().x < 0.0);
    }
}
