//! Gravity influence pipeline.
//!
//! Implements dominant-source selection, orientation smoothing, the
//! transition policy and the per-tick controller that sequences them.
//! No ECS dependency — operates on plain data.

pub mod controller;
pub mod selector;
pub mod smoother;
pub mod transition;

pub use controller::{InfluenceController, InfluenceState, TickInput, TickOutput};
pub use gravity_core as core;
