//! Configuration error hierarchy.
//!
//! Errors are raised when configuration is built or replaced, never from
//! inside a tick.

use thiserror::Error;

/// Root error type for rejected configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Rotation speed is negative or not finite.
    #[error("rotation speed must be finite and >= 0, got {0}")]
    RotationSpeed(f64),

    /// Inactive buffer duration is negative or not finite.
    #[error("inactive buffer duration must be finite and >= 0 seconds, got {0}")]
    BufferDuration(f64),

    /// Default gravity angle is not finite.
    #[error("default angle must be finite, got {0}")]
    DefaultAngle(f64),

    /// Attraction parameter is negative or not finite.
    #[error("attraction {name} must be finite and >= 0, got {value}")]
    Attraction { name: &'static str, value: f64 },

    /// Gravity point radius is not strictly positive.
    #[error("radius of effect must be finite and > 0, got {0}")]
    Radius(f64),

    /// A command carried a non-finite coordinate or velocity.
    #[error("{name} must be finite, got ({x}, {y})")]
    NonFinite { name: &'static str, x: f64, y: f64 },

    /// Time scale is negative or not finite.
    #[error("time scale must be finite and >= 0, got {0}")]
    TimeScale(f64),

    /// Configuration text could not be parsed.
    #[error("config parse error: {0}")]
    Parse(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
