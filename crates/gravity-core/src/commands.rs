//! Host commands sent to the simulation.
//!
//! Commands are queued and processed at the next tick boundary, so a tick
//! never observes a half-applied change.

use serde::{Deserialize, Serialize};

use crate::config::InfluenceConfig;
use crate::enums::*;
use crate::types::SourceId;

/// All possible host actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    // --- Simulation control ---
    /// Build the scenario world and start ticking.
    Start,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Set time scale (1.0 = normal, 2.0 = double, 0.0 = frozen).
    SetTimeScale { scale: f64 },

    // --- Gravity points ---
    /// Spawn a gravity point. It is not seen by the subject until the next rebuild.
    SpawnGravityPoint { x: f64, y: f64, radius: f64 },
    /// Move an existing gravity point. Takes effect on the next tick.
    MoveGravityPoint { id: SourceId, x: f64, y: f64 },
    /// Despawn a gravity point.
    RemoveGravityPoint { id: SourceId },
    /// Re-scan the world for gravity points.
    RebuildRegistry,

    // --- Subject ---
    /// Replace the whole influence configuration.
    SetInfluenceConfig { config: InfluenceConfig },
    /// Toggle whether the subject is affected by gravity points.
    SetSubjectToGravity { enabled: bool },
    /// Change the transition policy.
    SetTransitionMode { mode: TransitionMode },
    /// Move the subject and set its velocity.
    Teleport { x: f64, y: f64, vx: f64, vy: f64 },
}
