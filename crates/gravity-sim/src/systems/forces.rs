//! Transition force system — the movement side of the transition policy.
//!
//! The influence pipeline only reports what should happen to accumulated
//! motion; this system applies it to the subject's velocity and heading.

use glam::DVec2;
use hecs::{Entity, World};
use log::debug;

use gravity_core::components::Heading;
use gravity_core::events::{TransitionEffect, TransitionEvent};
use gravity_core::math::rotate_degrees;
use gravity_core::types::Velocity;

/// Apply each event's effect to the subject, in emission order.
pub fn run(world: &mut World, subject: Entity, events: &[TransitionEvent]) {
    for event in events {
        match event.effect {
            TransitionEffect::Unchanged => {}
            TransitionEffect::ResetMotion => {
                if let Ok(mut vel) = world.get::<&mut Velocity>(subject) {
                    vel.0 = DVec2::ZERO;
                }
                debug!("motion reset on transition (entering={})", event.entering);
            }
            TransitionEffect::RotateMotion { degrees } => {
                if let Ok(mut vel) = world.get::<&mut Velocity>(subject) {
                    vel.0 = rotate_degrees(vel.0, degrees);
                }
                if let Ok(mut heading) = world.get::<&mut Heading>(subject) {
                    heading.forward = rotate_degrees(heading.forward, degrees);
                }
                debug!("motion rotated by {degrees:.2} degrees");
            }
        }
    }
}
