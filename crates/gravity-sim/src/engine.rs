//! Simulation engine — the host for the influence pipeline.
//!
//! `GravitySimulation` owns the hecs ECS world, processes host commands at
//! tick boundaries, runs all systems, and produces `SimSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use gravity_core::commands::SimCommand;
use gravity_core::components::{GravityPoint, Heading};
use gravity_core::config::{validate_finite, validate_radius, InfluenceConfig};
use gravity_core::constants::{DT, MAX_TIME_SCALE};
use gravity_core::enums::{ScenarioId, SimPhase};
use gravity_core::error::{ConfigError, ConfigResult};
use gravity_core::events::TransitionEvent;
use gravity_core::state::SimSnapshot;
use gravity_core::types::{GravitySource, Position, SimTime, Velocity};
use gravity_influence::InfluenceController;

use crate::registry::{entity_of, GravitySourceRegistry};
use crate::systems;
use crate::{scenario, world_setup};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub scenario: ScenarioId,
    pub influence: InfluenceConfig,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            scenario: ScenarioId::default(),
            influence: InfluenceConfig::default(),
            time_scale: 1.0,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct GravitySimulation {
    world: World,
    time: SimTime,
    phase: SimPhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    scenario: ScenarioId,
    subject: Option<Entity>,
    registry: GravitySourceRegistry,
    controller: InfluenceController,
    command_queue: VecDeque<SimCommand>,
    transitions: Vec<TransitionEvent>,
    source_buffer: Vec<GravitySource>,
}

impl GravitySimulation {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> ConfigResult<Self> {
        let time_scale = validate_time_scale(config.time_scale)?;
        let controller = InfluenceController::new(config.influence)?;
        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: SimPhase::default(),
            time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            scenario: config.scenario,
            subject: None,
            registry: GravitySourceRegistry::default(),
            controller,
            command_queue: VecDeque::new(),
            transitions: Vec::new(),
            source_buffer: Vec::new(),
        })
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SimSnapshot {
        self.process_commands();

        if self.phase == SimPhase::Running {
            let dt = DT * self.time_scale;
            self.run_systems(dt);
            self.time.advance_by(dt);
        }

        let transitions = std::mem::take(&mut self.transitions);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.subject,
            &self.registry,
            &self.controller,
            transitions,
        )
    }

    /// Get the current simulation phase.
    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The subject entity, once the scenario has been built.
    pub fn subject(&self) -> Option<Entity> {
        self.subject
    }

    pub fn registry(&self) -> &GravitySourceRegistry {
        &self.registry
    }

    pub fn controller(&self) -> &InfluenceController {
        &self.controller
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command. Commands that cannot apply are dropped with a warning.
    fn handle_command(&mut self, command: SimCommand) {
        match command {
            SimCommand::Start => {
                if self.phase == SimPhase::Idle {
                    self.world.clear();
                    let subject = scenario::build(&mut self.world, self.scenario, &mut self.rng);
                    self.subject = Some(subject);
                    self.registry.rebuild(&self.world);
                    // Fresh influence state for the new subject.
                    self.controller.reset_state();
                    self.time = SimTime::default();
                    self.phase = SimPhase::Running;
                    info!("simulation started: {:?}", self.scenario);
                }
            }
            SimCommand::Pause => {
                if self.phase == SimPhase::Running {
                    self.phase = SimPhase::Paused;
                }
            }
            SimCommand::Resume => {
                if self.phase == SimPhase::Paused {
                    self.phase = SimPhase::Running;
                }
            }
            SimCommand::SetTimeScale { scale } => match validate_time_scale(scale) {
                Ok(scale) => self.time_scale = scale,
                Err(e) => warn!("ignoring time scale: {e}"),
            },
            SimCommand::SpawnGravityPoint { x, y, radius } => {
                match validate_finite("position", x, y)
                    .and_then(|pos| validate_radius(radius).map(|radius| (pos, radius)))
                {
                    Ok((pos, radius)) => {
                        let entity =
                            world_setup::spawn_gravity_point(&mut self.world, pos, radius);
                        info!("spawned gravity point {entity:?}; visible after registry rebuild");
                    }
                    Err(e) => warn!("ignoring gravity point spawn: {e}"),
                }
            }
            SimCommand::MoveGravityPoint { id, x, y } => {
                let Some(entity) = entity_of(id).filter(|e| self.is_gravity_point(*e)) else {
                    warn!("move: no gravity point with id {}", id.0);
                    return;
                };
                let target = match validate_finite("position", x, y) {
                    Ok(target) => target,
                    Err(e) => {
                        warn!("ignoring gravity point move: {e}");
                        return;
                    }
                };
                if let Ok(mut pos) = self.world.get::<&mut Position>(entity) {
                    pos.0 = target;
                }
            }
            SimCommand::RemoveGravityPoint { id } => {
                let Some(entity) = entity_of(id).filter(|e| self.is_gravity_point(*e)) else {
                    warn!("remove: no gravity point with id {}", id.0);
                    return;
                };
                // The registry keeps the stale handle until the next rebuild;
                // gathering skips it.
                let _ = self.world.despawn(entity);
            }
            SimCommand::RebuildRegistry => {
                self.registry.rebuild(&self.world);
            }
            SimCommand::SetInfluenceConfig { config } => {
                if let Err(e) = self.controller.set_config(config) {
                    warn!("ignoring influence config: {e}");
                }
            }
            SimCommand::SetSubjectToGravity { enabled } => {
                let config = InfluenceConfig {
                    subject_to_gravity: enabled,
                    ..*self.controller.config()
                };
                if let Err(e) = self.controller.set_config(config) {
                    warn!("ignoring subject_to_gravity change: {e}");
                }
            }
            SimCommand::SetTransitionMode { mode } => {
                let config = InfluenceConfig {
                    transition_mode: mode,
                    ..*self.controller.config()
                };
                if let Err(e) = self.controller.set_config(config) {
                    warn!("ignoring transition mode change: {e}");
                }
            }
            SimCommand::Teleport { x, y, vx, vy } => {
                let Some(subject) = self.subject else {
                    warn!("teleport: no subject before Start");
                    return;
                };
                let (position, velocity) = match validate_finite("position", x, y)
                    .and_then(|pos| validate_finite("velocity", vx, vy).map(|vel| (pos, vel)))
                {
                    Ok(pair) => pair,
                    Err(e) => {
                        warn!("ignoring teleport: {e}");
                        return;
                    }
                };
                if let Ok(mut pos) = self.world.get::<&mut Position>(subject) {
                    pos.0 = position;
                }
                if let Ok(mut vel) = self.world.get::<&mut Velocity>(subject) {
                    vel.0 = velocity;
                }
                if let Ok(mut heading) = self.world.get::<&mut Heading>(subject) {
                    heading.forward = velocity.normalize_or_zero();
                }
            }
        }
    }

    fn is_gravity_point(&self, entity: Entity) -> bool {
        self.world.get::<&GravityPoint>(entity).is_ok()
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        let Some(subject) = self.subject else {
            return;
        };
        // 1. Movement integration
        systems::movement::run(&mut self.world, dt);
        // 2. Influence (select, smooth, displace)
        systems::influence::run(
            &mut self.world,
            subject,
            &self.registry,
            &mut self.controller,
            self.time.elapsed_secs,
            dt,
            &mut self.source_buffer,
            &mut self.transitions,
        );
        // 3. Transition forces
        systems::forces::run(&mut self.world, subject, &self.transitions);
    }
}

fn validate_time_scale(scale: f64) -> ConfigResult<f64> {
    if scale.is_finite() && scale >= 0.0 {
        Ok(scale.min(MAX_TIME_SCALE))
    } else {
        Err(ConfigError::TimeScale(scale))
    }
}
