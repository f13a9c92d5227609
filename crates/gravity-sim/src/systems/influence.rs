//! Influence system — runs the gravity pipeline for the subject.
//!
//! Reads the subject and this tick's gravity sources out of the world,
//! calls the controller from gravity-influence, then writes the new
//! position, heading and orientation back.

use hecs::{Entity, World};

use gravity_core::components::{Heading, Orientation};
use gravity_core::events::TransitionEvent;
use gravity_core::types::{GravitySource, Position, Velocity};
use gravity_influence::{InfluenceController, TickInput};

use crate::registry::GravitySourceRegistry;

/// Run the influence pipeline once. Accepted transitions are appended to `transitions`.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    subject: Entity,
    registry: &GravitySourceRegistry,
    controller: &mut InfluenceController,
    now: f64,
    dt: f64,
    sources: &mut Vec<GravitySource>,
    transitions: &mut Vec<TransitionEvent>,
) {
    sources.clear();
    registry.gather(world, sources);

    let (position, forward) = match (
        world.get::<&Position>(subject),
        world.get::<&Heading>(subject),
    ) {
        (Ok(pos), Ok(heading)) => (pos.0, heading.forward),
        _ => return,
    };

    let output = controller.tick(&TickInput {
        now,
        dt,
        position,
        forward,
        sources: sources.as_slice(),
    });

    if let Ok(mut pos) = world.get::<&mut Position>(subject) {
        pos.0 = output.position;
    }
    if let Ok(mut heading) = world.get::<&mut Heading>(subject) {
        heading.forward = output.forward;
    }
    if let Ok(mut orientation) = world.get::<&mut Orientation>(subject) {
        orientation.degrees = output.angle;
    }
    // The subject travels along its forward direction; steering keeps speed.
    if output.forward != forward {
        if let Ok(mut vel) = world.get::<&mut Velocity>(subject) {
            vel.0 = output.forward * vel.speed();
        }
    }

    transitions.extend(output.transitions);
}
