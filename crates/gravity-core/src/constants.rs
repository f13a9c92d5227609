//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Orientation ---

/// Gravity angle applied when no source dominates (degrees).
pub const DEFAULT_GRAVITY_ANGLE: f64 = 0.0;

/// Default rotation speed (degrees per second). 0 means instant snap.
pub const DEFAULT_ROTATION_SPEED: f64 = 0.0;

/// Nudge applied to the current angle when the target is exactly antipodal (degrees).
pub const ANTIPODAL_NUDGE_DEGREES: f64 = 0.1;

// --- Switching ---

/// Minimum time between two accepted dominant-source changes (seconds).
pub const DEFAULT_INACTIVE_BUFFER_SECS: f64 = 0.1;

// --- Attraction ---

/// Inverse-distance attraction constant `k` in `k / distance`.
pub const ATTRACTION_STRENGTH: f64 = 6.678;

/// Distance floor for the attraction formula. Caps the magnitude at
/// `ATTRACTION_STRENGTH / ATTRACTION_MIN_DISTANCE` when the subject sits on a source.
pub const ATTRACTION_MIN_DISTANCE: f64 = 0.01;

/// Scale for the absolute-position nudge model (`position += source * dt * factor`).
pub const POSITION_NUDGE_FACTOR: f64 = 0.005;

// --- Host ---

/// Largest time scale accepted by the host engine.
pub const MAX_TIME_SCALE: f64 = 4.0;

/// Subject launch speed used by the built-in scenarios (units/s).
pub const SCENARIO_LAUNCH_SPEED: f64 = 4.0;

/// Half-extent of the square area used for random gravity fields (world units).
pub const RANDOM_FIELD_HALF_EXTENT: f64 = 40.0;

/// Radius range for random gravity fields (world units).
pub const RANDOM_FIELD_MIN_RADIUS: f64 = 4.0;
pub const RANDOM_FIELD_MAX_RADIUS: f64 = 14.0;
