//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// What happens to the subject's accumulated motion when it enters or
/// leaves a gravity source's influence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionMode {
    /// Accumulated motion is cleared by the movement subsystem.
    #[default]
    Reset,
    /// Accumulated motion is rotated to follow the new gravity angle.
    Adapt,
    /// Accumulated motion is left untouched.
    Nothing,
}

/// Remembered sense of the last orientation step, used to break the
/// 180° tie when current and target angles are exactly opposite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationDirection {
    /// No step taken yet.
    #[default]
    Unset,
    /// Last step increased the angle.
    Increasing,
    /// Last step decreased the angle.
    Decreasing,
}

/// Host simulation phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    #[default]
    Idle,
    Running,
    Paused,
}

/// Built-in world layouts for the host simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ScenarioId {
    /// Two overlapping wells stacked vertically around the subject.
    #[default]
    TwoWells,
    /// A row of small wells the subject flies past.
    Corridor,
    /// Seeded random field of `count` wells.
    RandomField { count: u32 },
}

impl RotationDirection {
    /// Direction of a signed step. Zero keeps the previous direction.
    pub fn from_step(step: f64, previous: RotationDirection) -> Self {
        if step > 0.0 {
            RotationDirection::Increasing
        } else if step < 0.0 {
            RotationDirection::Decreasing
        } else {
            previous
        }
    }
}
