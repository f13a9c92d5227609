//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! They do not own state; the engine passes in what they need.

pub mod forces;
pub mod influence;
pub mod movement;
pub mod snapshot;
