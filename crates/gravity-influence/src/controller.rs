//! Per-tick influence controller.
//!
//! Sequences selection, smoothing, displacement and transition
//! notification for one subject. `tick` is a plain function over
//! `(state, config, input)`, callable from any scheduler;
//! `InfluenceController` bundles the config and state for hosts.

use glam::DVec2;
use log::debug;

use gravity_core::config::{AttractionModel, InfluenceConfig};
use gravity_core::constants::ATTRACTION_MIN_DISTANCE;
use gravity_core::enums::RotationDirection;
use gravity_core::error::ConfigResult;
use gravity_core::events::TransitionEvent;
use gravity_core::math::gravity_angle;
use gravity_core::types::{GravitySource, SourceId};

use crate::{selector, smoother, transition};

/// Mutable influence state carried from one tick to the next.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfluenceState {
    /// Whether a source currently dominates.
    pub overridden: bool,
    /// Target angle derived from the dominant source (degrees).
    pub override_angle: f64,
    /// Smoothed angle actually applied (degrees).
    pub current_angle: f64,
    /// Dominant source, with the position seen on the last tick it was present.
    pub last_source: Option<GravitySource>,
    /// Time of the last accepted source change (seconds).
    pub last_switch_secs: f64,
    /// Sense of the last smoothing step, for the 180° tie-break.
    pub rotation_direction: RotationDirection,
    /// Angle remembered by the Adapt transition mode (degrees).
    pub previous_transition_angle: f64,
}

/// Everything the controller reads from the host for one tick.
#[derive(Debug, Clone, Copy)]
pub struct TickInput<'a> {
    /// Monotonic time (seconds).
    pub now: f64,
    /// Tick duration (seconds).
    pub dt: f64,
    pub position: DVec2,
    pub forward: DVec2,
    /// Gravity sources in stable order.
    pub sources: &'a [GravitySource],
}

/// Everything the controller writes back to the host for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutput {
    pub position: DVec2,
    pub forward: DVec2,
    /// Orientation angle to apply (degrees).
    pub angle: f64,
    pub displacement: DVec2,
    /// Transitions accepted this tick, for the movement subsystem.
    pub transitions: Vec<TransitionEvent>,
}

impl InfluenceState {
    /// The angle gravity currently points at: override if overridden, default otherwise.
    pub fn gravity_angle(&self, config: &InfluenceConfig) -> f64 {
        if self.overridden {
            self.override_angle
        } else {
            config.default_angle
        }
    }

    /// Id of the dominant source, if any.
    pub fn dominant_source(&self) -> Option<SourceId> {
        self.last_source.map(|s| s.id)
    }

    fn mark_switch(&mut self, now: f64) {
        self.last_switch_secs = self.last_switch_secs.max(now);
    }
}

/// Run the influence pipeline for one tick.
pub fn tick(state: &mut InfluenceState, config: &InfluenceConfig, input: &TickInput) -> TickOutput {
    let mut output = TickOutput {
        position: input.position,
        forward: input.forward,
        angle: state.current_angle,
        displacement: DVec2::ZERO,
        transitions: Vec::new(),
    };

    if !config.subject_to_gravity {
        return output;
    }

    // Positions belong to the source owners; pick up this tick's value.
    if let Some(last) = state.last_source.as_mut() {
        if let Some(fresh) = input.sources.iter().find(|s| s.id == last.id) {
            *last = *fresh;
        }
    }

    // 1. Selection with hysteresis
    let buffer_elapsed = input.now - state.last_switch_secs >= config.inactive_buffer_duration;
    let mut pending = Vec::new();

    match selector::select(input.position, input.sources) {
        None => {
            if state.overridden && buffer_elapsed {
                if let Some(last) = state.last_source {
                    debug!("leaving gravity source {:?}", last.id);
                    pending.push(notify(state, config, false, last, input.position));
                }
                state.overridden = false;
                state.last_source = None;
                state.mark_switch(input.now);
            }
        }
        Some(selected) => {
            // Inside the buffer a fresh entry still takes over, but silently.
            let mut candidate = state.last_source.unwrap_or(selected);
            let changed = state.last_source.map_or(true, |last| last.id != selected.id);
            if changed && buffer_elapsed {
                debug!(
                    "entering gravity source {:?} (previous {:?})",
                    selected.id,
                    state.dominant_source()
                );
                pending.push(notify(state, config, true, selected, input.position));
                candidate = selected;
                state.mark_switch(input.now);
            }

            state.override_angle = gravity_angle(candidate.position - input.position);
            state.overridden = true;
            state.last_source = Some(candidate);
        }
    }

    // 2. Orientation
    let target = state.gravity_angle(config);
    state.current_angle = smoother::advance(
        state.current_angle,
        target,
        config.rotation_speed,
        input.dt,
        &mut state.rotation_direction,
    );
    output.angle = state.current_angle;

    // 3. Displacement
    if state.overridden {
        if let Some(dominant) = state.last_source {
            let (displacement, forward) = attract(config.attraction, input, dominant.position);
            output.displacement = displacement;
            output.position = input.position + displacement;
            output.forward = forward;
        }
    }

    // 4. Notification
    output.transitions = pending;
    output
}

fn notify(
    state: &mut InfluenceState,
    config: &InfluenceConfig,
    entering: bool,
    source: GravitySource,
    subject: DVec2,
) -> TransitionEvent {
    let outcome = transition::evaluate(
        config.transition_mode,
        entering,
        source.position - subject,
        config.default_angle,
        &mut state.previous_transition_angle,
    );
    TransitionEvent {
        entering,
        source: source.id,
        gravity_angle: outcome.gravity_angle,
        mode: config.transition_mode,
        effect: outcome.effect,
    }
}

/// Displacement and new forward direction for one tick of attraction.
fn attract(model: AttractionModel, input: &TickInput, source: DVec2) -> (DVec2, DVec2) {
    match model {
        AttractionModel::None => (DVec2::ZERO, input.forward),
        AttractionModel::InverseDistance { strength } => {
            let to_source = source - input.position;
            let distance = to_source.length();
            let magnitude = strength / distance.max(ATTRACTION_MIN_DISTANCE);
            // Never carry the subject past the source in one tick.
            let step = (magnitude * input.dt).min(distance);
            let displacement = to_source.normalize_or_zero() * step;

            let blended = (to_source - input.forward).normalize_or_zero();
            let forward = if blended == DVec2::ZERO {
                input.forward
            } else {
                blended
            };
            (displacement, forward)
        }
        AttractionModel::PositionNudge { factor } => {
            (source * input.dt * factor, input.forward)
        }
    }
}

/// Influence configuration and state for one subject.
#[derive(Debug, Clone)]
pub struct InfluenceController {
    config: InfluenceConfig,
    state: InfluenceState,
}

impl InfluenceController {
    /// Create a controller with fresh state. Rejects invalid configuration.
    pub fn new(config: InfluenceConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: InfluenceState::default(),
        })
    }

    /// Replace the configuration between ticks. State is kept.
    pub fn set_config(&mut self, config: InfluenceConfig) -> ConfigResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &InfluenceConfig {
        &self.config
    }

    pub fn state(&self) -> &InfluenceState {
        &self.state
    }

    /// Effective gravity angle (degrees).
    pub fn gravity_angle(&self) -> f64 {
        self.state.gravity_angle(&self.config)
    }

    /// Forget all carried state, as for a newly initialized subject.
    pub fn reset_state(&mut self) {
        self.state = InfluenceState::default();
    }

    /// Run one tick.
    pub fn tick(&mut self, input: &TickInput) -> TickOutput {
        tick(&mut self.state, &self.config, input)
    }
}
