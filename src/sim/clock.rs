//! Pause-aware animation clock.

use bevy::prelude::*;

/// Animation clock decoupled from the engine's frame clock.
///
/// `delta` is zero while paused and `elapsed` accumulates unpaused time
/// only, so resuming never produces a catch-up step. The engine already
/// bounds the frame delta fed in here, so a stalled window cannot inject
/// a huge jump either.
#[derive(Resource, Default)]
pub struct SimClock {
    pub paused: bool,
    delta: f32,
    elapsed: f64,
}

impl SimClock {
    /// Animation timestep for the current frame, zero while paused.
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Seconds of unpaused animation time since startup.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Feed one frame of wall time into the clock.
    pub fn tick(&mut self, frame_delta: f32) {
        if self.paused {
            self.delta = 0.0;
        } else {
            self.delta = frame_delta;
            self.elapsed += f64::from(frame_delta);
        }
    }

    /// Flip the paused flag and report the new state.
    pub fn toggle_paused(&mut self) -> bool {
        self.paused = !self.paused;
        if self.paused {
            self.delta = 0.0;
        }
        self.paused
    }
}

/// Advance the animation clock from the engine's frame time.
pub fn advance_sim_clock(time: Res<Time>, mut clock: ResMut<SimClock>) {
    clock.tick(time.delta_secs());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticking_accumulates_elapsed_time() {
        let mut clock = SimClock::default();
        clock.tick(0.5);
        clock.tick(0.25);
        assert_eq!(clock.delta(), 0.25);
        assert!((clock.elapsed() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn paused_clock_ignores_wall_time() {
        let mut clock = SimClock::default();
        clock.tick(1.0);
        assert!(clock.toggle_paused());
        clock.tick(100.0);
        clock.tick(100.0);
        assert_eq!(clock.delta(), 0.0);
        assert!((clock.elapsed() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn resume_continues_without_a_jump() {
        let mut clock = SimClock::default();
        clock.tick(1.0);
        clock.toggle_paused();
        clock.tick(500.0);
        assert!(!clock.toggle_paused());
        clock.tick(0.016);
        assert_eq!(clock.delta(), 0.016);
        assert!((clock.elapsed() - 1.016).abs() < 1e-6);
    }
}
