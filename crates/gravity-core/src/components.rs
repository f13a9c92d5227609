//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Marks the subject entity (the point-mass influenced by gravity points).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Subject;

/// A gravity point: attracts the subject while it is within `radius_of_effect`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GravityPoint {
    pub radius_of_effect: f64,
}

/// Forward direction of the subject (unit vector, or zero before first motion).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Heading {
    pub forward: DVec2,
}

/// Applied orientation angle of the subject (degrees, z rotation).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Orientation {
    pub degrees: f64,
}
