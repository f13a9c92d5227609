//! Entity spawn factories for setting up the simulation world.

use glam::DVec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gravity_core::components::*;
use gravity_core::constants::*;
use gravity_core::types::{Position, Velocity};

/// Spawn the subject with its kinematic and orientation components.
pub fn spawn_subject(world: &mut World, position: DVec2, velocity: DVec2) -> hecs::Entity {
    world.spawn((
        Subject,
        Position(position),
        Velocity(velocity),
        Heading {
            forward: velocity.normalize_or_zero(),
        },
        Orientation::default(),
    ))
}

/// Spawn a gravity point. The radius is assumed validated by the caller.
pub fn spawn_gravity_point(world: &mut World, position: DVec2, radius: f64) -> hecs::Entity {
    world.spawn((
        Position(position),
        GravityPoint {
            radius_of_effect: radius,
        },
    ))
}

/// Spawn `count` gravity points at random positions and radii.
pub fn spawn_random_field(world: &mut World, rng: &mut ChaCha8Rng, count: usize) {
    for _ in 0..count {
        let x = rng.gen_range(-RANDOM_FIELD_HALF_EXTENT..RANDOM_FIELD_HALF_EXTENT);
        let y = rng.gen_range(-RANDOM_FIELD_HALF_EXTENT..RANDOM_FIELD_HALF_EXTENT);
        let radius = rng.gen_range(RANDOM_FIELD_MIN_RADIUS..RANDOM_FIELD_MAX_RADIUS);
        spawn_gravity_point(world, DVec2::new(x, y), radius);
    }
}
