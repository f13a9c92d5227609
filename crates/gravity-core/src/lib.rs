//! Core types and definitions for the gravity influence workspace.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometric types, configuration, commands, snapshots, events, ECS
//! components and the 2D angle math. It has no dependency on the ECS
//! runtime or any host framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod math;
pub mod state;
pub mod types;
