//! Mutable speed state shared between the UI and the motion systems.

use bevy::prelude::*;

use crate::catalog::{self, PLANETS};

/// Per-body speed multipliers, index-aligned with [`PLANETS`].
///
/// Written by the control panel, read by the orbit system every frame.
/// Writes are clamped here so no caller can smuggle in an out-of-range
/// value.
#[derive(Resource)]
pub struct OrbitSpeeds(Vec<f32>);

impl Default for OrbitSpeeds {
    fn default() -> Self {
        Self(PLANETS.iter().map(|body| body.base_speed).collect())
    }
}

impl OrbitSpeeds {
    /// Multiplier for the body at `index`, 1.0 for an unknown index.
    pub fn get(&self, index: usize) -> f32 {
        self.0.get(index).copied().unwrap_or(1.0)
    }

    /// Set the multiplier for `index`, clamped to the control range.
    pub fn set(&mut self, index: usize, value: f32) {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = catalog::clamp_speed(value);
        }
    }

    /// Restore every multiplier to its catalog default.
    pub fn reset(&mut self) {
        for (slot, body) in self.0.iter_mut().zip(PLANETS) {
            *slot = body.base_speed;
        }
    }
}
