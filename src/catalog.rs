//! Static catalog of the bodies in the scene.
//!
//! Sizes, distances and speeds are display-tuned values, not physical ones.
//! Everything else in the crate is driven by this table: scene spawning,
//! speed controls and selection all index into [`PLANETS`].

use anyhow::{Result, bail};
use bevy::prelude::*;

/// Smallest speed multiplier the controls allow.
pub const MIN_SPEED: f32 = 0.1;
/// Largest speed multiplier the controls allow.
pub const MAX_SPEED: f32 = 10.0;
/// Slider increment for speed multipliers.
pub const SPEED_STEP: f64 = 0.1;

/// Immutable descriptor for one orbiting body.
pub struct BodyRecord {
    pub name: &'static str,
    pub rgb: [u8; 3],
    /// Mesh radius in world units.
    pub radius: f32,
    /// Orbit track radius in world units.
    pub distance: f32,
    /// Default speed multiplier.
    pub base_speed: f32,
    pub blurb: &'static str,
}

impl BodyRecord {
    /// Display color of the body.
    pub fn color(&self) -> Color {
        Color::srgb_u8(self.rgb[0], self.rgb[1], self.rgb[2])
    }
}

/// The eight orbiting bodies, ordered outward from the sun.
pub const PLANETS: &[BodyRecord] = &[
    BodyRecord {
        name: "Mercury",
        rgb: [0x8c, 0x78, 0x53],
        radius: 0.4,
        distance: 8.0,
        base_speed: 4.7,
        blurb: "Closest to the Sun",
    },
    BodyRecord {
        name: "Venus",
        rgb: [0xff, 0xc6, 0x49],
        radius: 0.9,
        distance: 11.0,
        base_speed: 3.5,
        blurb: "Hottest planet",
    },
    BodyRecord {
        name: "Earth",
        rgb: [0x6b, 0x93, 0xd6],
        radius: 1.0,
        distance: 15.0,
        base_speed: 3.0,
        blurb: "Our home planet",
    },
    BodyRecord {
        name: "Mars",
        rgb: [0xcd, 0x5c, 0x5c],
        radius: 0.5,
        distance: 20.0,
        base_speed: 2.4,
        blurb: "The red planet",
    },
    BodyRecord {
        name: "Jupiter",
        rgb: [0xd8, 0xca, 0x9d],
        radius: 2.5,
        distance: 28.0,
        base_speed: 1.3,
        blurb: "Largest planet",
    },
    BodyRecord {
        name: "Saturn",
        rgb: [0xfa, 0xd5, 0xa5],
        radius: 2.1,
        distance: 38.0,
        base_speed: 0.9,
        blurb: "Planet with rings",
    },
    BodyRecord {
        name: "Uranus",
        rgb: [0x4f, 0xd0, 0xe7],
        radius: 1.6,
        distance: 48.0,
        base_speed: 0.7,
        blurb: "Tilted ice giant",
    },
    BodyRecord {
        name: "Neptune",
        rgb: [0x4b, 0x70, 0xdd],
        radius: 1.5,
        distance: 58.0,
        base_speed: 0.5,
        blurb: "Windiest planet",
    },
];

/// Clamp a requested multiplier to the supported control range.
pub fn clamp_speed(value: f32) -> f32 {
    value.clamp(MIN_SPEED, MAX_SPEED)
}

/// Check catalog invariants. Called once before the app starts; a bad
/// table is a programming error and aborts startup.
pub fn validate(catalog: &[BodyRecord]) -> Result<()> {
    if catalog.is_empty() {
        bail!("body catalog is empty");
    }
    for (index, body) in catalog.iter().enumerate() {
        if body.name.is_empty() {
            bail!("body at index {} has an empty name", index);
        }
        if body.radius <= 0.0 || !body.radius.is_finite() {
            bail!("{}: radius must be positive, got {}", body.name, body.radius);
        }
        if body.distance <= 0.0 || !body.distance.is_finite() {
            bail!(
                "{}: orbit distance must be positive, got {}",
                body.name,
                body.distance
            );
        }
        if !(MIN_SPEED..=MAX_SPEED).contains(&body.base_speed) {
            bail!(
                "{}: base speed {} outside control range {}..={}",
                body.name,
                body.base_speed,
                MIN_SPEED,
                MAX_SPEED
            );
        }
        if catalog[..index].iter().any(|other| other.name == body.name) {
            bail!("duplicate body name {:?}", body.name);
        }
    }
    Ok(())
}
