//! Gravity source registry.
//!
//! Holds handles to the gravity point entities the subject can see. The
//! set only changes on `rebuild`, which the engine runs at tick boundaries.
//! Positions are not cached: `gather` reads them fresh every tick.

use hecs::{Entity, World};
use log::{debug, info};

use gravity_core::components::GravityPoint;
use gravity_core::types::{GravitySource, Position, SourceId};

/// Registered gravity points, in ascending handle order.
#[derive(Debug, Default)]
pub struct GravitySourceRegistry {
    handles: Vec<Entity>,
}

impl GravitySourceRegistry {
    /// Re-scan the world and replace the held set.
    pub fn rebuild(&mut self, world: &World) -> &[Entity] {
        self.handles.clear();
        self.handles
            .extend(world.query::<&GravityPoint>().iter().map(|(entity, _)| entity));
        // World iteration order is unspecified; selection ties need a stable one.
        self.handles.sort_by_key(|entity| entity.to_bits());
        info!("gravity registry rebuilt with {} sources", self.handles.len());
        &self.handles
    }

    /// The live set of handles.
    pub fn current(&self) -> &[Entity] {
        &self.handles
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Append this tick's view of every registered source to `out`.
    /// Handles whose entity no longer exists are skipped.
    pub fn gather(&self, world: &World, out: &mut Vec<GravitySource>) {
        for &entity in &self.handles {
            let (Ok(position), Ok(point)) = (
                world.get::<&Position>(entity),
                world.get::<&GravityPoint>(entity),
            ) else {
                debug!("registered gravity point {entity:?} is gone, skipping");
                continue;
            };
            out.push(GravitySource::new(
                source_id(entity),
                position.0,
                point.radius_of_effect,
            ));
        }
    }
}

/// Stable id for a gravity point entity.
pub fn source_id(entity: Entity) -> SourceId {
    SourceId(entity.to_bits().get())
}

/// Entity behind a source id, if the id is well formed.
pub fn entity_of(id: SourceId) -> Option<Entity> {
    Entity::from_bits(id.0)
}
