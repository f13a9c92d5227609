//! Snapshot builder — reads the world and influence state into a `SimSnapshot`.

use hecs::{Entity, World};

use gravity_core::components::{Heading, Orientation};
use gravity_core::enums::SimPhase;
use gravity_core::events::TransitionEvent;
use gravity_core::state::*;
use gravity_core::types::{GravitySource, Position, SimTime, Velocity};
use gravity_influence::InfluenceController;

use crate::registry::GravitySourceRegistry;

/// Build a complete snapshot of the current simulation state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: SimPhase,
    subject: Option<Entity>,
    registry: &GravitySourceRegistry,
    controller: &InfluenceController,
    transitions: Vec<TransitionEvent>,
) -> SimSnapshot {
    let subject_view = subject
        .map(|entity| build_subject_view(world, entity))
        .unwrap_or_default();

    let mut sources: Vec<GravitySource> = Vec::with_capacity(registry.len());
    registry.gather(world, &mut sources);
    let source_views = sources
        .iter()
        .map(|source| SourceView {
            id: source.id,
            position: source.position,
            radius_of_effect: source.radius_of_effect,
            in_range: subject.is_some() && source.covers(subject_view.position),
        })
        .collect();

    let state = controller.state();
    let influence = InfluenceView {
        overridden: state.overridden,
        gravity_angle: controller.gravity_angle(),
        current_angle: state.current_angle,
        dominant_source: state.dominant_source(),
        transition_mode: controller.config().transition_mode,
    };

    SimSnapshot {
        time: *time,
        phase,
        subject: subject_view,
        influence,
        sources: source_views,
        transitions,
    }
}

fn build_subject_view(world: &World, entity: Entity) -> SubjectView {
    let mut view = SubjectView::default();
    if let Ok(pos) = world.get::<&Position>(entity) {
        view.position = pos.0;
    }
    if let Ok(vel) = world.get::<&Velocity>(entity) {
        view.velocity = vel.0;
    }
    if let Ok(heading) = world.get::<&Heading>(entity) {
        view.forward = heading.forward;
    }
    if let Ok(orientation) = world.get::<&Orientation>(entity) {
        view.angle = orientation.degrees;
    }
    view
}
