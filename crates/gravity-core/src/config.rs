//! Influence configuration.
//!
//! Tunables are set at construction and may be replaced between ticks.
//! They are read-only while a tick runs; the per-tick mutable data lives in
//! `InfluenceState` instead.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::TransitionMode;
use crate::error::{ConfigError, ConfigResult};

/// How the subject is displaced toward the dominant source each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model")]
pub enum AttractionModel {
    /// No displacement; only orientation follows the source.
    None,
    /// Move toward the source by `strength / distance * dt`.
    InverseDistance { strength: f64 },
    /// Translate by the source's absolute position scaled by `factor * dt`.
    PositionNudge { factor: f64 },
}

impl Default for AttractionModel {
    fn default() -> Self {
        AttractionModel::InverseDistance {
            strength: ATTRACTION_STRENGTH,
        }
    }
}

/// Configuration for one subject's gravity influence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfluenceConfig {
    /// If false, the subject ignores gravity points entirely.
    pub subject_to_gravity: bool,
    /// Angular speed toward the target angle (degrees/s). 0 snaps instantly.
    pub rotation_speed: f64,
    /// Minimum time between accepted source changes (seconds).
    pub inactive_buffer_duration: f64,
    pub transition_mode: TransitionMode,
    /// Gravity angle used when no source dominates (degrees).
    pub default_angle: f64,
    pub attraction: AttractionModel,
}

impl Default for InfluenceConfig {
    fn default() -> Self {
        Self {
            subject_to_gravity: true,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            inactive_buffer_duration: DEFAULT_INACTIVE_BUFFER_SECS,
            transition_mode: TransitionMode::default(),
            default_angle: DEFAULT_GRAVITY_ANGLE,
            attraction: AttractionModel::default(),
        }
    }
}

impl InfluenceConfig {
    /// Check every tunable, returning the first violation.
    pub fn validate(&self) -> ConfigResult<()> {
        if !is_non_negative(self.rotation_speed) {
            return Err(ConfigError::RotationSpeed(self.rotation_speed));
        }
        if !is_non_negative(self.inactive_buffer_duration) {
            return Err(ConfigError::BufferDuration(self.inactive_buffer_duration));
        }
        if !self.default_angle.is_finite() {
            return Err(ConfigError::DefaultAngle(self.default_angle));
        }
        match self.attraction {
            AttractionModel::None => {}
            AttractionModel::InverseDistance { strength } => {
                if !is_non_negative(strength) {
                    return Err(ConfigError::Attraction {
                        name: "strength",
                        value: strength,
                    });
                }
            }
            AttractionModel::PositionNudge { factor } => {
                if !is_non_negative(factor) {
                    return Err(ConfigError::Attraction {
                        name: "factor",
                        value: factor,
                    });
                }
            }
        }
        Ok(())
    }

    /// Clamp out-of-range tunables to their nearest valid value instead of
    /// rejecting them. Non-finite values fall back to the defaults.
    pub fn sanitized(mut self) -> Self {
        self.rotation_speed = clamp_non_negative(self.rotation_speed, DEFAULT_ROTATION_SPEED);
        self.inactive_buffer_duration = clamp_non_negative(
            self.inactive_buffer_duration,
            DEFAULT_INACTIVE_BUFFER_SECS,
        );
        if !self.default_angle.is_finite() {
            self.default_angle = DEFAULT_GRAVITY_ANGLE;
        }
        self.attraction = match self.attraction {
            AttractionModel::None => AttractionModel::None,
            AttractionModel::InverseDistance { strength } => AttractionModel::InverseDistance {
                strength: clamp_non_negative(strength, ATTRACTION_STRENGTH),
            },
            AttractionModel::PositionNudge { factor } => AttractionModel::PositionNudge {
                factor: clamp_non_negative(factor, POSITION_NUDGE_FACTOR),
            },
        };
        self
    }

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json_str(text: &str) -> ConfigResult<Self> {
        let config: InfluenceConfig =
            serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Validate a gravity point radius of effect.
pub fn validate_radius(radius: f64) -> ConfigResult<f64> {
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(ConfigError::Radius(radius))
    }
}

/// Validate a 2D value taken from a host command.
pub fn validate_finite(name: &'static str, x: f64, y: f64) -> ConfigResult<DVec2> {
    if x.is_finite() && y.is_finite() {
        Ok(DVec2::new(x, y))
    } else {
        Err(ConfigError::NonFinite { name, x, y })
    }
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn clamp_non_negative(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        fallback
    }
}
