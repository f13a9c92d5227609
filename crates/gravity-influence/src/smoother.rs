//! Orientation smoothing.
//!
//! Moves an angle toward a target at a bounded angular speed along the
//! shortest arc. When the target is exactly opposite, the remembered
//! rotation direction decides which way to go.

use gravity_core::constants::ANTIPODAL_NUDGE_DEGREES;
use gravity_core::enums::RotationDirection;
use gravity_core::math::delta_angle;

/// Advance `current` toward `target` by at most `max_speed * dt` degrees.
///
/// A `max_speed` of 0 snaps straight to the target. `direction` is read for
/// the 180° tie-break and updated with the sign of the step taken.
pub fn advance(
    current: f64,
    target: f64,
    max_speed: f64,
    dt: f64,
    direction: &mut RotationDirection,
) -> f64 {
    if max_speed == 0.0 {
        return target;
    }

    let mut current = current;
    if delta_angle(current, target) == 180.0 {
        current %= 360.0;
        current += match direction {
            RotationDirection::Increasing => ANTIPODAL_NUDGE_DEGREES,
            RotationDirection::Decreasing | RotationDirection::Unset => -ANTIPODAL_NUDGE_DEGREES,
        };
    }

    let delta = delta_angle(current, target);
    let max_step = max_speed * dt;

    if delta.abs() <= max_step {
        *direction = RotationDirection::from_step(delta, *direction);
        target
    } else {
        let step = max_step.copysign(delta);
        *direction = RotationDirection::from_step(step, *direction);
        current + step
    }
}

/// Upper bound on the ticks `advance` needs to reach any target.
pub fn max_ticks_to_converge(max_speed: f64, dt: f64) -> Option<u64> {
    let step = max_speed * dt;
    if step > 0.0 {
        Some((180.0 / step).ceil() as u64)
    } else {
        None
    }
}
