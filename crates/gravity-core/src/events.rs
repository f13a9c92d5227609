//! Events emitted by the influence pipeline for the movement subsystem.

use serde::{Deserialize, Serialize};

use crate::enums::TransitionMode;
use crate::types::SourceId;

/// What the movement subsystem should do with the subject's accumulated motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TransitionEffect {
    /// Leave accumulated motion untouched.
    Unchanged,
    /// Clear accumulated motion.
    ResetMotion,
    /// Rotate accumulated motion counterclockwise by `degrees`.
    RotateMotion { degrees: f64 },
}

/// Emitted when the subject enters or leaves a gravity source's influence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionEvent {
    /// True when a source became dominant, false when influence was lost.
    pub entering: bool,
    /// Source entered, or the source that was left.
    pub source: SourceId,
    /// Gravity angle implied by the direction toward `source` (degrees).
    pub gravity_angle: f64,
    pub mode: TransitionMode,
    pub effect: TransitionEffect,
}

impl TransitionEffect {
    /// Rotation to apply, if any. `Unchanged` and `ResetMotion` carry none.
    pub fn rotation_degrees(&self) -> Option<f64> {
        match self {
            TransitionEffect::RotateMotion { degrees } => Some(*degrees),
            TransitionEffect::Unchanged | TransitionEffect::ResetMotion => None,
        }
    }
}
