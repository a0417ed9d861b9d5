//! Starfield backdrop built as a single point-list mesh.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use rand::Rng;

/// Number of stars in the backdrop.
pub const STAR_COUNT: usize = 10_000;
/// Half-extent of the cubical scatter volume in world units.
pub const STAR_HALF_EXTENT: f32 = 1000.0;

/// Marker for the starfield batch entity.
#[derive(Component)]
pub struct Starfield;

/// Scatter star positions uniformly inside the backdrop volume.
pub fn scatter_stars(rng: &mut impl Rng, count: usize) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-STAR_HALF_EXTENT..STAR_HALF_EXTENT),
                rng.gen_range(-STAR_HALF_EXTENT..STAR_HALF_EXTENT),
                rng.gen_range(-STAR_HALF_EXTENT..STAR_HALF_EXTENT),
            )
        })
        .collect()
}

/// Pack star positions into one mesh so the whole field is a single
/// draw call.
pub fn build_starfield_mesh(positions: Vec<Vec3>) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn stars_fill_the_backdrop_volume() {
        let mut rng = StdRng::seed_from_u64(7);
        let stars = scatter_stars(&mut rng, STAR_COUNT);
        assert_eq!(stars.len(), STAR_COUNT);
        for star in &stars {
            assert!(star.x.abs() <= STAR_HALF_EXTENT);
            assert!(star.y.abs() <= STAR_HALF_EXTENT);
            assert!(star.z.abs() <= STAR_HALF_EXTENT);
        }
    }

    #[test]
    fn seeded_scatter_is_reproducible() {
        let a = scatter_stars(&mut StdRng::seed_from_u64(42), 100);
        let b = scatter_stars(&mut StdRng::seed_from_u64(42), 100);
        assert_eq!(a, b);
    }

    #[test]
    fn mesh_carries_every_star() {
        let mut rng = StdRng::seed_from_u64(3);
        let mesh = build_starfield_mesh(scatter_stars(&mut rng, 256));
        assert_eq!(mesh.count_vertices(), 256);
    }
}
