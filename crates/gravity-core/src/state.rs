//! Simulation snapshot — the complete visible state produced each tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::TransitionEvent;
use crate::types::{SimTime, SourceId};

/// Complete simulation state returned after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub phase: SimPhase,
    pub subject: SubjectView,
    pub influence: InfluenceView,
    pub sources: Vec<SourceView>,
    /// Transitions that happened during this tick, in emission order.
    pub transitions: Vec<TransitionEvent>,
}

/// The subject's kinematic state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubjectView {
    pub position: DVec2,
    pub velocity: DVec2,
    /// Unit forward direction.
    pub forward: DVec2,
    /// Applied orientation angle (degrees).
    pub angle: f64,
}

/// Influence pipeline status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InfluenceView {
    pub overridden: bool,
    /// Effective gravity angle: override angle if overridden, default otherwise.
    pub gravity_angle: f64,
    pub current_angle: f64,
    pub dominant_source: Option<SourceId>,
    pub transition_mode: TransitionMode,
}

/// A registered gravity point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceView {
    pub id: SourceId,
    pub position: DVec2,
    pub radius_of_effect: f64,
    /// Whether the subject is inside this source's zone right now.
    pub in_range: bool,
}
