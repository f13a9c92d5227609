//! Headless gravity simulation.
//!
//! Owns the hecs ECS world, keeps the gravity source registry, runs the
//! influence pipeline for the subject at a fixed tick rate and produces
//! `SimSnapshot`s.

pub mod engine;
pub mod registry;
pub mod scenario;
pub mod systems;
pub mod world_setup;

pub use engine::{GravitySimulation, SimConfig};
pub use gravity_core as core;
pub use registry::GravitySourceRegistry;

#[cfg(test)]
mod tests;
