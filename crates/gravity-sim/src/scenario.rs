//! Scenario definitions — hardcoded world layouts.
//!
//! Each scenario places gravity points and launches the subject.

use glam::DVec2;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use gravity_core::constants::{RANDOM_FIELD_HALF_EXTENT, SCENARIO_LAUNCH_SPEED};
use gravity_core::enums::ScenarioId;

use crate::world_setup::{spawn_gravity_point, spawn_random_field, spawn_subject};

/// Populate `world` for `scenario`. Returns the subject entity.
pub fn build(world: &mut World, scenario: ScenarioId, rng: &mut ChaCha8Rng) -> Entity {
    match scenario {
        ScenarioId::TwoWells => build_two_wells(world),
        ScenarioId::Corridor => build_corridor(world),
        ScenarioId::RandomField { count } => build_random_field(world, rng, count as usize),
    }
}

/// "Two Wells"
/// A wide well above the x axis and a narrow one below it. The subject
/// crosses from the left and is captured by the wide one.
fn build_two_wells(world: &mut World) -> Entity {
    spawn_gravity_point(world, DVec2::new(0.0, 5.0), 10.0);
    spawn_gravity_point(world, DVec2::new(0.0, -5.0), 3.0);
    spawn_subject(
        world,
        DVec2::new(-12.0, 0.0),
        DVec2::new(SCENARIO_LAUNCH_SPEED, 0.0),
    )
}

/// "Corridor"
/// Five small wells alternating above and below the flight line.
fn build_corridor(world: &mut World) -> Entity {
    for i in 0..5 {
        let y = if i % 2 == 0 { 6.0 } else { -6.0 };
        spawn_gravity_point(world, DVec2::new(i as f64 * 15.0, y), 8.0);
    }
    spawn_subject(
        world,
        DVec2::new(-10.0, 0.0),
        DVec2::new(SCENARIO_LAUNCH_SPEED, 0.0),
    )
}

/// "Random Field"
/// `count` wells scattered over the field; the subject enters from the left edge.
fn build_random_field(world: &mut World, rng: &mut ChaCha8Rng, count: usize) -> Entity {
    spawn_random_field(world, rng, count);
    spawn_subject(
        world,
        DVec2::new(-RANDOM_FIELD_HALF_EXTENT, 0.0),
        DVec2::new(SCENARIO_LAUNCH_SPEED, 0.0),
    )
}
