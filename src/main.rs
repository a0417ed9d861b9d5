//! Interactive solar system viewer: an orbiting camera over a sun,
//! eight planets and a star backdrop, with a Mission Control panel.

use anyhow::Context;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin};
use bevy_egui::EguiPlugin;

mod camera;
mod catalog;
mod picking;
mod scene;
mod sim;
mod ui;

use camera::{CameraConfig, CameraPlugin, OrbitCamera};
use picking::PickingPlugin;
use scene::ScenePlugin;
use sim::SimPlugin;
use ui::{Notice, UiPlugin};

fn main() -> anyhow::Result<AppExit> {
    catalog::validate(catalog::PLANETS).context("invalid body catalog")?;

    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Solar System".to_string(),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }),
    );

    app.add_plugins(EguiPlugin {
        enable_multipass_for_primary_context: true,
    });
    app.add_plugins(MeshPickingPlugin);

    app.add_plugins(ScenePlugin);
    app.add_plugins(SimPlugin);
    app.add_plugins(CameraPlugin);
    app.add_plugins(PickingPlugin);
    app.add_plugins(UiPlugin);
    app.add_systems(Startup, (setup_camera, greet));

    Ok(app.run())
}

fn setup_camera(mut commands: Commands, config: Res<CameraConfig>) {
    let orbit = OrbitCamera::from_position(config.start_position);
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 75.0_f32.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        Camera {
            // Near-black deep blue behind the starfield.
            clear_color: ClearColorConfig::Custom(Color::srgb_u8(0x00, 0x00, 0x11)),
            ..default()
        },
        Tonemapping::TonyMcMapface,
        Transform::from_translation(orbit.position()).looking_at(Vec3::ZERO, Vec3::Y),
        orbit,
    ));
}

/// One-time startup notice.
fn greet(mut notices: EventWriter<Notice>) {
    info!("solar system scene ready");
    notices.write(Notice::new(
        "Solar System initialized! Click and drag to explore, scroll to zoom.",
    ));
}
