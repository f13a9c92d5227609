//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in simulation space (world units).
/// x = right, y = up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec2);

/// 2D velocity in simulation space (units/s).
/// This is the subject's accumulated motion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec2);

/// Stable handle identifying a gravity source across ticks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct SourceId(pub u64);

/// A gravity source as seen by the influence pipeline for one tick.
///
/// Positions are read fresh from the owner every tick; the id is the only
/// thing that persists between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GravitySource {
    pub id: SourceId,
    pub position: DVec2,
    /// Radius within which this source can dominate the subject.
    pub radius_of_effect: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Velocity {
    /// Speed magnitude (units/s).
    pub fn speed(&self) -> f64 {
        self.0.length()
    }
}

impl GravitySource {
    pub fn new(id: SourceId, position: DVec2, radius_of_effect: f64) -> Self {
        Self {
            id,
            position,
            radius_of_effect,
        }
    }

    /// Whether `point` lies inside this source's zone of effect (boundary inclusive).
    pub fn covers(&self, point: DVec2) -> bool {
        crate::math::distance(self.position, point) <= self.radius_of_effect
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick of `dt` seconds.
    pub fn advance_by(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }

    /// Advance by one tick at the default tick rate.
    pub fn advance(&mut self) {
        self.advance_by(self.dt());
    }
}
