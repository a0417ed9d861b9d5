//! Per-frame body motion: orbital advance, self-rotation and the
//! selection pulse.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::picking::SelectedBody;
use crate::scene::Planet;
use crate::sim::clock::SimClock;
use crate::sim::resources::OrbitSpeeds;

/// Tuning for body motion.
#[derive(Resource)]
pub struct MotionConfig {
    /// Converts a speed multiplier into radians per second.
    pub angular_scale: f32,
    /// Self-rotation rate of the sun (rad/s).
    pub sun_spin: f32,
    /// Self-rotation rate of every planet (rad/s).
    pub planet_spin: f32,
    /// Angular frequency of the selection pulse (rad/s).
    pub pulse_rate: f32,
    /// Scale amplitude of the selection pulse.
    pub pulse_amplitude: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            angular_scale: 0.1,
            sun_spin: 0.5,
            planet_spin: 2.0,
            pulse_rate: 5.0,
            pulse_amplitude: 0.1,
        }
    }
}

/// Orbital state for one body: a phase angle on a circular track.
#[derive(Component)]
pub struct Orbit {
    pub distance: f32,
    pub angle: f32,
}

impl Orbit {
    /// Advance the phase angle, wrapping into `[0, 2π)`.
    pub fn advance(&mut self, delta_angle: f32) {
        self.angle = (self.angle + delta_angle).rem_euclid(TAU);
    }

    /// World-space position on the orbit track.
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.angle.cos() * self.distance,
            0.0,
            self.angle.sin() * self.distance,
        )
    }
}

/// Constant self-rotation about +Y, in rad/s.
#[derive(Component)]
pub struct Spin(pub f32);

/// Move each body along its orbit track by its current speed multiplier.
pub fn advance_orbits(
    clock: Res<SimClock>,
    speeds: Res<OrbitSpeeds>,
    config: Res<MotionConfig>,
    mut bodies: Query<(&mut Transform, &mut Orbit, &Planet)>,
) {
    let delta = clock.delta();
    if delta == 0.0 {
        return;
    }
    for (mut transform, mut orbit, planet) in &mut bodies {
        orbit.advance(speeds.get(planet.index) * delta * config.angular_scale);
        transform.translation = orbit.position();
    }
}

/// Rotate spinning bodies about their own axis.
pub fn spin_bodies(clock: Res<SimClock>, mut spinners: Query<(&mut Transform, &Spin)>) {
    let delta = clock.delta();
    if delta == 0.0 {
        return;
    }
    for (mut transform, spin) in &mut spinners {
        transform.rotate_y(spin.0 * delta);
    }
}

/// Pulse the selected body's scale; everything else sits at unit scale.
///
/// The pulse runs on the animation clock, so it freezes in place while
/// paused and picks up where it left off on resume.
pub fn pulse_selected(
    clock: Res<SimClock>,
    selected: Res<SelectedBody>,
    config: Res<MotionConfig>,
    mut bodies: Query<(&mut Transform, &Planet)>,
) {
    let scale = pulse_scale(clock.elapsed(), config.pulse_rate, config.pulse_amplitude);
    for (mut transform, planet) in &mut bodies {
        let target = if selected.0 == Some(planet.index) {
            scale
        } else {
            1.0
        };
        transform.scale = Vec3::splat(target);
    }
}

/// Sinusoidal scale factor around 1.0.
pub fn pulse_scale(elapsed: f64, rate: f32, amplitude: f32) -> f32 {
    1.0 + (elapsed as f32 * rate).sin() * amplitude
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_into_one_turn() {
        let mut orbit = Orbit {
            distance: 10.0,
            angle: 0.0,
        };
        orbit.advance(TAU + 1.0);
        assert!((orbit.angle - 1.0).abs() < 1e-5);
        orbit.advance(-2.0);
        assert!(orbit.angle >= 0.0 && orbit.angle < TAU);
        assert!((orbit.angle - (TAU - 1.0)).abs() < 1e-5);
    }

    #[test]
    fn many_small_steps_match_one_large_step() {
        let mut fine = Orbit {
            distance: 10.0,
            angle: 0.3,
        };
        let mut coarse = Orbit {
            distance: 10.0,
            angle: 0.3,
        };
        let rate = 0.47;
        for _ in 0..1000 {
            fine.advance(rate * 0.01);
        }
        coarse.advance(rate * 10.0);
        assert!((fine.angle - coarse.angle).abs() < 1e-3);
    }

    #[test]
    fn position_stays_on_the_track() {
        let mut orbit = Orbit {
            distance: 20.0,
            angle: 0.0,
        };
        for _ in 0..100 {
            orbit.advance(0.37);
            let position = orbit.position();
            assert!((position.length() - 20.0).abs() < 1e-4);
            assert_eq!(position.y, 0.0);
        }
    }

    #[test]
    fn pulse_stays_within_amplitude() {
        for step in 0..1000 {
            let scale = pulse_scale(step as f64 * 0.013, 5.0, 0.1);
            assert!(scale >= 0.9 - 1e-6 && scale <= 1.1 + 1e-6);
        }
    }

    #[test]
    fn pulse_period_matches_rate() {
        let period = f64::from(TAU / 5.0);
        let a = pulse_scale(0.4, 5.0, 0.1);
        let b = pulse_scale(0.4 + period, 5.0, 0.1);
        assert!((a - b).abs() < 1e-4);
    }
}
