//! Transition policy for accumulated motion.
//!
//! Pure function of the mode, the event and the angle remembered from the
//! previous transition. The policy never touches motion itself; it reports
//! an effect for the movement subsystem to apply.

use glam::DVec2;

use gravity_core::enums::TransitionMode;
use gravity_core::events::TransitionEffect;
use gravity_core::math::gravity_angle;

/// Result of one policy evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionOutcome {
    /// Gravity angle implied by the transition direction (degrees).
    pub gravity_angle: f64,
    pub effect: TransitionEffect,
}

/// Evaluate the policy for entering (`entering = true`) or leaving a source.
///
/// `direction` points from the subject to the source. Only `Adapt` reads or
/// writes `previous_angle`.
pub fn evaluate(
    mode: TransitionMode,
    entering: bool,
    direction: DVec2,
    default_angle: f64,
    previous_angle: &mut f64,
) -> TransitionOutcome {
    let angle = gravity_angle(direction);

    let effect = match mode {
        TransitionMode::Nothing => TransitionEffect::Unchanged,
        TransitionMode::Reset => TransitionEffect::ResetMotion,
        TransitionMode::Adapt => {
            let degrees = if entering {
                *previous_angle - angle
            } else {
                angle - default_angle
            };
            *previous_angle = if entering { angle } else { default_angle };
            TransitionEffect::RotateMotion { degrees }
        }
    };

    TransitionOutcome {
        gravity_angle: angle,
        effect,
    }
}
