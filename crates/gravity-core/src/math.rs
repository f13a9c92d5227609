//! 2D angle and distance helpers.
//!
//! Angles are in degrees. The gravity convention measures the angle of a
//! direction clockwise from the up axis and reports `180 - angle`, so a
//! source straight below the subject yields 0 (the default "down" gravity)
//! and a source straight above yields 180.

use glam::DVec2;

/// The up axis of the world.
pub const UP: DVec2 = DVec2::Y;

/// Clockwise angle from `from` to `to`, in degrees within `[0, 360)`.
///
/// Returns 0 when either vector has zero length.
pub fn angle_between(from: DVec2, to: DVec2) -> f64 {
    let denom = (from.length_squared() * to.length_squared()).sqrt();
    if denom < 1e-15 {
        return 0.0;
    }
    let cos = (from.dot(to) / denom).clamp(-1.0, 1.0);
    let angle = cos.acos().to_degrees();
    if from.perp_dot(to) > 0.0 {
        360.0 - angle
    } else {
        angle
    }
}

/// Gravity angle implied by a direction pointing from the subject to a source.
pub fn gravity_angle(direction: DVec2) -> f64 {
    180.0 - angle_between(UP, direction)
}

/// Shortest signed difference from `current` to `target`, in `(-180, 180]`.
pub fn delta_angle(current: f64, target: f64) -> f64 {
    let delta = (target - current).rem_euclid(360.0);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

/// Euclidean distance between two points.
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    a.distance(b)
}

/// Rotate a vector counterclockwise by `degrees`.
pub fn rotate_degrees(v: DVec2, degrees: f64) -> DVec2 {
    DVec2::from_angle(degrees.to_radians()).rotate(v)
}
