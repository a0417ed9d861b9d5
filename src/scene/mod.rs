//! Scene construction: sun, planets, orbit guides, starfield and
//! lighting.

use std::f32::consts::{FRAC_PI_2, TAU};

use bevy::pbr::NotShadowCaster;
use bevy::picking::Pickable;
use bevy::prelude::*;
use rand::Rng;

use crate::catalog::PLANETS;
use crate::sim::{MotionConfig, Orbit, Spin};

pub mod starfield;

pub use starfield::{STAR_COUNT, Starfield, build_starfield_mesh, scatter_stars};

/// Sun mesh radius in world units.
pub const SUN_RADIUS: f32 = 3.0;
const SUN_RGB: [u8; 3] = [0xff, 0xd7, 0x00];
const SUN_EMISSIVE_INTENSITY: f32 = 0.3;
const RING_HALF_WIDTH: f32 = 0.1;
const RING_SEGMENTS: u32 = 64;

/// Marker for orbiting body meshes; `index` points into [`PLANETS`].
#[derive(Component)]
pub struct Planet {
    pub index: usize,
}

/// Marker for the central sun mesh.
#[derive(Component)]
pub struct Sun;

/// Marker for the orbit guide rings.
#[derive(Component)]
pub struct OrbitRing;

/// Plugin spawning the static scene at startup.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_scene);
    }
}

/// Draw a starting phase angle in `[0, 2π)`.
fn initial_phase(rng: &mut impl Rng) -> f32 {
    rng.gen_range(0.0..TAU)
}

/// Build the whole scene: lights, sun, one body plus guide ring per
/// catalog entry, and the star backdrop.
fn spawn_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<MotionConfig>,
) {
    let mut rng = rand::thread_rng();

    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.25, 0.25, 0.25),
        brightness: 80.0,
        ..default()
    });
    commands.spawn((
        PointLight {
            intensity: 2_000_000.0,
            range: 200.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::default(),
        Name::new("Sunlight"),
    ));

    let sun_color = Color::srgb_u8(SUN_RGB[0], SUN_RGB[1], SUN_RGB[2]);
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(SUN_RADIUS).mesh().ico(4).unwrap())),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: sun_color,
            emissive: sun_color.to_linear() * SUN_EMISSIVE_INTENSITY,
            ..default()
        })),
        Transform::default(),
        Sun,
        Spin(config.sun_spin),
        // The sun encloses the point light, so it must not occlude it.
        NotShadowCaster,
        Pickable::IGNORE,
        Name::new("Sun"),
    ));

    let ring_material = materials.add(StandardMaterial {
        base_color: Color::srgba_u8(0x44, 0x44, 0x44, 51),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    for (index, body) in PLANETS.iter().enumerate() {
        let orbit = Orbit {
            distance: body.distance,
            angle: initial_phase(&mut rng),
        };
        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(body.radius).mesh().ico(4).unwrap())),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: body.color(),
                perceptual_roughness: 1.0,
                ..default()
            })),
            Transform::from_translation(orbit.position()),
            orbit,
            Spin(config.planet_spin),
            Planet { index },
            Name::new(body.name),
        ));
        commands.spawn((
            Mesh3d(meshes.add(
                Annulus::new(
                    body.distance - RING_HALF_WIDTH,
                    body.distance + RING_HALF_WIDTH,
                )
                .mesh()
                .resolution(RING_SEGMENTS),
            )),
            MeshMaterial3d(ring_material.clone()),
            Transform::from_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
            OrbitRing,
            NotShadowCaster,
            Pickable::IGNORE,
        ));
    }

    let stars = scatter_stars(&mut rng, STAR_COUNT);
    commands.spawn((
        Mesh3d(meshes.add(build_starfield_mesh(stars))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        })),
        Transform::default(),
        Starfield,
        NotShadowCaster,
        Pickable::IGNORE,
        Name::new("Starfield"),
    ));
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn spawned_app() -> App {
        let mut app = App::new();
        app.init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<MotionConfig>()
            .add_systems(Startup, spawn_scene);
        app.update();
        app
    }

    #[test]
    fn scene_contains_one_entity_per_role() {
        let mut app = spawned_app();
        let mut planets = app.world_mut().query_filtered::<(), With<Planet>>();
        assert_eq!(planets.iter(app.world()).count(), PLANETS.len());
        let mut rings = app.world_mut().query_filtered::<(), With<OrbitRing>>();
        assert_eq!(rings.iter(app.world()).count(), PLANETS.len());
        let mut suns = app.world_mut().query_filtered::<(), With<Sun>>();
        assert_eq!(suns.iter(app.world()).count(), 1);
        let mut backdrops = app.world_mut().query_filtered::<(), With<Starfield>>();
        assert_eq!(backdrops.iter(app.world()).count(), 1);
    }

    #[test]
    fn bodies_start_on_their_tracks_with_wrapped_angles() {
        let mut app = spawned_app();
        let mut bodies = app.world_mut().query::<(&Orbit, &Transform, &Planet)>();
        for (orbit, transform, planet) in bodies.iter(app.world()) {
            let expected = PLANETS[planet.index].distance;
            assert!(orbit.angle >= 0.0 && orbit.angle < TAU);
            assert_eq!(orbit.distance, expected);
            assert!((transform.translation.length() - expected).abs() < 1e-3);
            assert_eq!(transform.translation.y, 0.0);
        }
    }

    #[test]
    fn starting_phases_are_wrapped_and_reproducible() {
        let mut first = StdRng::seed_from_u64(11);
        let mut second = StdRng::seed_from_u64(11);
        for _ in 0..64 {
            let phase = initial_phase(&mut first);
            assert!(phase >= 0.0 && phase < TAU);
            assert_eq!(phase, initial_phase(&mut second));
        }
    }

    #[test]
    fn spin_rates_come_from_the_motion_config() {
        let mut app = spawned_app();
        let config = MotionConfig::default();
        let mut planets = app.world_mut().query_filtered::<&Spin, With<Planet>>();
        for spin in planets.iter(app.world()) {
            assert_eq!(spin.0, config.planet_spin);
        }
        let mut suns = app.world_mut().query_filtered::<&Spin, With<Sun>>();
        assert_eq!(suns.single(app.world()).unwrap().0, config.sun_spin);
    }

    #[test]
    fn decorations_do_not_take_picks() {
        let mut app = spawned_app();
        let mut decorations = app
            .world_mut()
            .query_filtered::<&Pickable, Or<(With<Sun>, With<OrbitRing>, With<Starfield>)>>();
        let found = decorations.iter(app.world()).count();
        assert_eq!(found, PLANETS.len() + 2);
        for pickable in decorations.iter(app.world()) {
            assert!(!pickable.is_hoverable);
        }
    }

    #[test]
    fn starfield_mesh_holds_every_star() {
        let mut app = spawned_app();
        let mut backdrops = app.world_mut().query_filtered::<&Mesh3d, With<Starfield>>();
        let handle = backdrops.single(app.world()).unwrap().0.clone();
        let meshes = app.world().resource::<Assets<Mesh>>();
        assert_eq!(meshes.get(&handle).unwrap().count_vertices(), STAR_COUNT);
    }
}
