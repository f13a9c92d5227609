//! Tests for the simulation engine, registry, systems and scenarios.

use glam::DVec2;
use hecs::World;

use gravity_core::commands::SimCommand;
use gravity_core::components::Heading;
use gravity_core::config::InfluenceConfig;
use gravity_core::constants::SCENARIO_LAUNCH_SPEED;
use gravity_core::enums::*;
use gravity_core::events::{TransitionEffect, TransitionEvent};
use gravity_core::state::SimSnapshot;
use gravity_core::types::{GravitySource, Position, SourceId, Velocity};

use crate::engine::{GravitySimulation, SimConfig};
use crate::registry::{entity_of, source_id, GravitySourceRegistry};
use crate::systems::{forces, movement};
use crate::world_setup;

fn started(config: SimConfig) -> GravitySimulation {
    let mut sim = GravitySimulation::new(config).expect("valid config");
    sim.queue_command(SimCommand::Start);
    sim
}

fn source_at(snapshot: &SimSnapshot, x: f64, y: f64) -> SourceId {
    snapshot
        .sources
        .iter()
        .find(|s| s.position == DVec2::new(x, y))
        .map(|s| s.id)
        .expect("source should be registered")
}

/// Tick until a snapshot carries at least one transition.
fn run_until_transition(sim: &mut GravitySimulation, max_ticks: usize) -> SimSnapshot {
    for _ in 0..max_ticks {
        let snap = sim.tick();
        if !snap.transitions.is_empty() {
            return snap;
        }
    }
    panic!("no transition within {max_ticks} ticks");
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let config = SimConfig {
        seed: 12345,
        scenario: ScenarioId::RandomField { count: 25 },
        ..Default::default()
    };
    let mut sim_a = started(config.clone());
    let mut sim_b = started(config);

    for _ in 0..600 {
        let json_a = serde_json::to_string(&sim_a.tick()).unwrap();
        let json_b = serde_json::to_string(&sim_b.tick()).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let scenario = ScenarioId::RandomField { count: 25 };
    let mut sim_a = started(SimConfig {
        seed: 111,
        scenario,
        ..Default::default()
    });
    let mut sim_b = started(SimConfig {
        seed: 222,
        scenario,
        ..Default::default()
    });

    let json_a = serde_json::to_string(&sim_a.tick().sources).unwrap();
    let json_b = serde_json::to_string(&sim_b.tick().sources).unwrap();
    assert_ne!(json_a, json_b, "Different seeds should produce different fields");
}

#[test]
fn test_random_field_spawns_requested_count() {
    let mut sim = started(SimConfig {
        scenario: ScenarioId::RandomField { count: 17 },
        ..Default::default()
    });
    let snap = sim.tick();
    assert_eq!(snap.sources.len(), 17);
    for source in &snap.sources {
        assert!(source.radius_of_effect >= 4.0 && source.radius_of_effect < 14.0);
        assert!(source.position.x.abs() <= 40.0 && source.position.y.abs() <= 40.0);
    }
}

// ---- Tick timing / phases ----

#[test]
fn test_tick_timing_60_ticks_one_second() {
    let mut sim = started(SimConfig::default());
    for _ in 0..60 {
        sim.tick();
    }
    assert_eq!(sim.time().tick, 60);
    assert!(
        (sim.time().elapsed_secs - 1.0).abs() < 1e-10,
        "60 ticks should equal 1.0 seconds, got {}",
        sim.time().elapsed_secs
    );
}

#[test]
fn test_idle_does_not_advance() {
    let mut sim = GravitySimulation::new(SimConfig::default()).unwrap();
    let snap = sim.tick();
    assert_eq!(snap.phase, SimPhase::Idle);
    assert_eq!(snap.time.tick, 0);
    assert!(snap.sources.is_empty());
    assert!(sim.subject().is_none());
}

#[test]
fn test_pause_stops_simulation() {
    let mut sim = started(SimConfig::default());
    for _ in 0..10 {
        sim.tick();
    }
    assert_eq!(sim.time().tick, 10);
    assert_eq!(sim.phase(), SimPhase::Running);

    sim.queue_command(SimCommand::Pause);
    let paused_at = sim.tick().subject.position;
    for _ in 0..10 {
        let snap = sim.tick();
        assert_eq!(snap.subject.position, paused_at, "Subject moved while paused");
    }
    assert_eq!(sim.time().tick, 10, "Time should not advance while paused");
    assert_eq!(sim.phase(), SimPhase::Paused);

    sim.queue_command(SimCommand::Resume);
    for _ in 0..10 {
        sim.tick();
    }
    assert_eq!(sim.time().tick, 20);
    assert_eq!(sim.phase(), SimPhase::Running);
}

#[test]
fn test_second_start_is_ignored_while_running() {
    let mut sim = started(SimConfig::default());
    for _ in 0..5 {
        sim.tick();
    }
    let subject = sim.subject();
    sim.queue_command(SimCommand::Start);
    sim.tick();
    assert_eq!(sim.time().tick, 6);
    assert_eq!(sim.subject(), subject);
}

#[test]
fn test_time_scale_clamped_and_validated() {
    let mut sim = started(SimConfig::default());
    sim.queue_command(SimCommand::SetTimeScale { scale: 10.0 });
    sim.tick();
    assert_eq!(sim.time_scale(), 4.0);

    sim.queue_command(SimCommand::SetTimeScale { scale: -1.0 });
    sim.queue_command(SimCommand::SetTimeScale { scale: f64::NAN });
    sim.tick();
    assert_eq!(sim.time_scale(), 4.0, "Invalid scales should be ignored");

    sim.queue_command(SimCommand::SetTimeScale { scale: 0.0 });
    let before = sim.tick().time.elapsed_secs;
    let after = sim.tick().time.elapsed_secs;
    assert_eq!(before, after, "Zero time scale freezes simulation time");
}

#[test]
fn test_new_rejects_invalid_config() {
    let bad_influence = SimConfig {
        influence: InfluenceConfig {
            inactive_buffer_duration: -1.0,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(GravitySimulation::new(bad_influence).is_err());

    let bad_scale = SimConfig {
        time_scale: f64::INFINITY,
        ..Default::default()
    };
    assert!(GravitySimulation::new(bad_scale).is_err());
}

#[test]
fn test_sim_config_from_json() {
    let config: SimConfig = serde_json::from_str(
        r#"{ "seed": 9, "scenario": { "kind": "Corridor" }, "influence": { "rotation_speed": 45.0 } }"#,
    )
    .unwrap();
    assert_eq!(config.seed, 9);
    assert_eq!(config.scenario, ScenarioId::Corridor);
    assert_eq!(config.influence.rotation_speed, 45.0);
    assert_eq!(config.time_scale, 1.0);
}

// ---- Influence in the world ----

#[test]
fn test_two_wells_captured_by_wide_well() {
    let mut sim = started(SimConfig::default());
    let snap = run_until_transition(&mut sim, 200);

    let wide = source_at(&snap, 0.0, 5.0);
    let event = snap.transitions[0];
    assert!(event.entering);
    assert_eq!(event.source, wide);
    assert!(snap.influence.overridden);
    assert_eq!(snap.influence.dominant_source, Some(wide));
    // Instant rotation: applied angle equals the gravity angle.
    assert_eq!(snap.influence.current_angle, snap.influence.gravity_angle);
    assert_eq!(snap.subject.angle, snap.influence.current_angle);

    for _ in 0..120 {
        let snap = sim.tick();
        assert_eq!(snap.influence.dominant_source, Some(wide));
    }
}

#[test]
fn test_reset_mode_clears_velocity_on_transition() {
    let mut sim = started(SimConfig::default());
    let snap = run_until_transition(&mut sim, 200);
    assert_eq!(snap.transitions[0].effect, TransitionEffect::ResetMotion);
    assert_eq!(snap.subject.velocity, DVec2::ZERO);

    // Attraction keeps pulling the subject toward the well.
    let wide = DVec2::new(0.0, 5.0);
    let before = snap.subject.position.distance(wide);
    let mut last = snap;
    for _ in 0..60 {
        last = sim.tick();
    }
    assert!(last.subject.position.distance(wide) < before);
}

#[test]
fn test_nothing_mode_preserves_speed() {
    let mut sim = started(SimConfig {
        influence: InfluenceConfig {
            transition_mode: TransitionMode::Nothing,
            ..Default::default()
        },
        ..Default::default()
    });

    let mut transitions = 0;
    for _ in 0..300 {
        let snap = sim.tick();
        for event in &snap.transitions {
            assert_eq!(event.effect, TransitionEffect::Unchanged);
            transitions += 1;
        }
        let speed = snap.subject.velocity.length();
        assert!(
            (speed - SCENARIO_LAUNCH_SPEED).abs() < 1e-9,
            "Nothing mode must keep accumulated speed, got {speed}"
        );
    }
    assert!(transitions > 0, "Subject should have entered a well");
}

#[test]
fn test_adapt_mode_rotates_velocity() {
    let mut sim = started(SimConfig {
        influence: InfluenceConfig {
            transition_mode: TransitionMode::Adapt,
            ..Default::default()
        },
        ..Default::default()
    });
    let snap = run_until_transition(&mut sim, 200);
    assert!(matches!(
        snap.transitions[0].effect,
        TransitionEffect::RotateMotion { .. }
    ));
    let speed = snap.subject.velocity.length();
    assert!((speed - SCENARIO_LAUNCH_SPEED).abs() < 1e-9, "got {speed}");
}

#[test]
fn test_disabled_subject_flies_straight() {
    let mut sim = GravitySimulation::new(SimConfig::default()).unwrap();
    sim.queue_commands([
        SimCommand::SetSubjectToGravity { enabled: false },
        SimCommand::Start,
    ]);
    let mut last = sim.tick();
    for _ in 0..299 {
        last = sim.tick();
        assert!(!last.influence.overridden);
        assert!(last.transitions.is_empty());
    }
    assert_eq!(last.subject.velocity, DVec2::new(SCENARIO_LAUNCH_SPEED, 0.0));
    assert!(last.subject.position.y.abs() < 1e-12);
    assert!((last.subject.position.x - 8.0).abs() < 1e-6, "got {:?}", last.subject.position);
}

#[test]
fn test_switch_between_corridor_wells() {
    let mut sim = started(SimConfig {
        scenario: ScenarioId::Corridor,
        ..Default::default()
    });
    let first = sim.tick();
    let well0 = source_at(&first, 0.0, 6.0);
    let well1 = source_at(&first, 15.0, -6.0);
    // Let the initial buffer run out so the first capture is announced.
    for _ in 0..12 {
        sim.tick();
    }

    sim.queue_command(SimCommand::Teleport {
        x: 0.0,
        y: 4.0,
        vx: 0.0,
        vy: 0.0,
    });
    let snap = run_until_transition(&mut sim, 60);
    assert_eq!(snap.transitions[0].source, well0);

    sim.queue_command(SimCommand::Teleport {
        x: 15.0,
        y: -4.0,
        vx: 0.0,
        vy: 0.0,
    });
    // Within the buffer the old well is kept, so the switch may take a few ticks.
    let snap = run_until_transition(&mut sim, 60);
    let event = snap.transitions[0];
    assert!(event.entering);
    assert_eq!(event.source, well1);
    assert_eq!(snap.influence.dominant_source, Some(well1));
}

#[test]
fn test_moving_source_away_exits_influence() {
    let mut sim = started(SimConfig::default());
    let snap = run_until_transition(&mut sim, 200);
    let wide = source_at(&snap, 0.0, 5.0);

    sim.queue_command(SimCommand::MoveGravityPoint {
        id: wide,
        x: 500.0,
        y: 500.0,
    });
    let snap = run_until_transition(&mut sim, 60);
    let event = snap.transitions[0];
    assert!(!event.entering);
    assert_eq!(event.source, wide);
    assert!(!snap.influence.overridden);
    assert_eq!(snap.influence.dominant_source, None);
}

// ---- Registry ----

#[test]
fn test_spawn_visible_only_after_rebuild() {
    let mut sim = started(SimConfig::default());
    assert_eq!(sim.tick().sources.len(), 2);

    sim.queue_command(SimCommand::SpawnGravityPoint {
        x: 100.0,
        y: 100.0,
        radius: 5.0,
    });
    assert_eq!(sim.tick().sources.len(), 2, "Spawn must wait for a rebuild");

    sim.queue_command(SimCommand::RebuildRegistry);
    let snap = sim.tick();
    assert_eq!(snap.sources.len(), 3);
    let new_id = source_at(&snap, 100.0, 100.0);

    sim.queue_command(SimCommand::RemoveGravityPoint { id: new_id });
    let snap = sim.tick();
    assert_eq!(snap.sources.len(), 2, "Despawned handles are skipped");
    assert_eq!(sim.registry().len(), 3, "Handle stays until the next rebuild");

    sim.queue_command(SimCommand::RebuildRegistry);
    sim.tick();
    assert_eq!(sim.registry().len(), 2);
}

#[test]
fn test_invalid_spawn_and_unknown_ids_ignored() {
    let mut sim = started(SimConfig::default());
    sim.tick();
    let subject = sim.subject().unwrap();

    sim.queue_commands([
        SimCommand::SpawnGravityPoint {
            x: 1.0,
            y: 1.0,
            radius: 0.0,
        },
        SimCommand::SpawnGravityPoint {
            x: 1.0,
            y: 1.0,
            radius: f64::NAN,
        },
        // The subject is not a gravity point and must survive.
        SimCommand::RemoveGravityPoint {
            id: source_id(subject),
        },
        SimCommand::RemoveGravityPoint { id: SourceId(0) },
        SimCommand::RebuildRegistry,
    ]);
    let snap = sim.tick();
    assert_eq!(snap.sources.len(), 2);
    assert!(sim.world().contains(subject));
}

#[test]
fn test_non_finite_commands_ignored() {
    let mut sim = started(SimConfig::default());
    let first = sim.tick();
    let wide = source_at(&first, 0.0, 5.0);
    let subject_before = first.subject;

    sim.queue_commands([
        SimCommand::SpawnGravityPoint {
            x: f64::NAN,
            y: 0.0,
            radius: 5.0,
        },
        SimCommand::SpawnGravityPoint {
            x: 0.0,
            y: f64::INFINITY,
            radius: 5.0,
        },
        SimCommand::MoveGravityPoint {
            id: wide,
            x: f64::NEG_INFINITY,
            y: 0.0,
        },
        SimCommand::Teleport {
            x: f64::NAN,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
        },
        SimCommand::Teleport {
            x: 0.0,
            y: 0.0,
            vx: f64::INFINITY,
            vy: 0.0,
        },
        SimCommand::RebuildRegistry,
    ]);
    let snap = sim.tick();
    assert_eq!(snap.sources.len(), 2);
    let moved = snap.sources.iter().find(|s| s.id == wide).unwrap();
    assert_eq!(moved.position, DVec2::new(0.0, 5.0), "Non-finite move should be dropped");
    assert_eq!(snap.subject.velocity, subject_before.velocity);
    assert!(
        (snap.subject.position - subject_before.position).length() < 0.1,
        "Teleport should have been dropped"
    );

    for _ in 0..120 {
        let snap = sim.tick();
        assert!(snap.subject.position.is_finite());
        assert!(snap.subject.angle.is_finite());
    }
}

#[test]
fn test_registry_order_is_stable() {
    let mut world = World::new();
    for i in 0..8 {
        world_setup::spawn_gravity_point(&mut world, DVec2::new(i as f64, 0.0), 1.0);
    }
    let mut registry = GravitySourceRegistry::default();
    let first: Vec<_> = registry.rebuild(&world).to_vec();
    let second: Vec<_> = registry.rebuild(&world).to_vec();
    assert_eq!(first, second);
    assert_eq!(registry.current(), second.as_slice());
    assert!(first.windows(2).all(|w| w[0].to_bits() < w[1].to_bits()));
}

#[test]
fn test_registry_gather_reads_fresh_positions() {
    let mut world = World::new();
    let point = world_setup::spawn_gravity_point(&mut world, DVec2::new(1.0, 2.0), 3.0);
    let mut registry = GravitySourceRegistry::default();
    registry.rebuild(&world);

    world.get::<&mut Position>(point).unwrap().0 = DVec2::new(-4.0, 0.5);
    let mut gathered: Vec<GravitySource> = Vec::new();
    registry.gather(&world, &mut gathered);
    assert_eq!(gathered.len(), 1);
    assert_eq!(gathered[0].position, DVec2::new(-4.0, 0.5));
    assert_eq!(gathered[0].radius_of_effect, 3.0);
    assert_eq!(entity_of(gathered[0].id), Some(point));
}

#[test]
fn test_empty_registry_is_valid() {
    let world = World::new();
    let mut registry = GravitySourceRegistry::default();
    assert!(registry.rebuild(&world).is_empty());
    assert!(registry.is_empty());
}

// ---- Systems ----

#[test]
fn test_movement_integration() {
    let mut world = World::new();
    let e = world_setup::spawn_subject(&mut world, DVec2::ZERO, DVec2::new(6.0, -3.0));
    movement::run(&mut world, 0.5);
    let pos = world.get::<&Position>(e).unwrap();
    assert_eq!(pos.0, DVec2::new(3.0, -1.5));
}

#[test]
fn test_forces_apply_effects_in_order() {
    let mut world = World::new();
    let e = world_setup::spawn_subject(&mut world, DVec2::ZERO, DVec2::new(2.0, 0.0));
    let event = |effect: TransitionEffect| TransitionEvent {
        entering: true,
        source: SourceId(1),
        gravity_angle: 0.0,
        mode: TransitionMode::Adapt,
        effect,
    };

    forces::run(
        &mut world,
        e,
        &[event(TransitionEffect::RotateMotion { degrees: 90.0 })],
    );
    {
        let vel = world.get::<&Velocity>(e).unwrap();
        assert!((vel.0 - DVec2::new(0.0, 2.0)).length() < 1e-9);
        let heading = world.get::<&Heading>(e).unwrap();
        assert!((heading.forward - DVec2::Y).length() < 1e-9);
    }

    forces::run(
        &mut world,
        e,
        &[
            event(TransitionEffect::Unchanged),
            event(TransitionEffect::ResetMotion),
        ],
    );
    assert_eq!(world.get::<&Velocity>(e).unwrap().0, DVec2::ZERO);
}

#[test]
fn test_snapshot_size_reasonable() {
    let mut sim = started(SimConfig {
        scenario: ScenarioId::RandomField { count: 100 },
        ..Default::default()
    });
    let snapshot = sim.tick();
    let json = serde_json::to_string(&snapshot).unwrap();
    let size_kb = json.len() as f64 / 1024.0;
    assert!(size_kb < 32.0, "Snapshot with 100 sources was {size_kb:.1}KB");
}
