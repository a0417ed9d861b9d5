//! Simulation state and per-frame motion.

use bevy::prelude::*;

pub mod clock;
pub mod motion;
pub mod resources;

pub use clock::{SimClock, advance_sim_clock};
pub use motion::{MotionConfig, Orbit, Spin, advance_orbits, pulse_selected, spin_bodies};
pub use resources::OrbitSpeeds;

/// Plugin owning the animation clock, the speed state and the motion
/// systems.
pub struct SimPlugin;

impl Plugin for SimPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimClock>()
            .init_resource::<OrbitSpeeds>()
            .init_resource::<MotionConfig>()
            .add_systems(
                Update,
                (
                    advance_sim_clock,
                    advance_orbits.after(advance_sim_clock),
                    spin_bodies.after(advance_sim_clock),
                    pulse_selected.after(advance_sim_clock),
                ),
            );
    }
}
