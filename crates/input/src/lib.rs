//! Terminal input module (engine-facing).
//!
//! This crate is independent of any UI framework. It maps `crossterm` key
//! events into [`Command`]s and turns press/release streams into the
//! per-frame [`ActionSet`](crate::types::ActionSet) of just-pressed actions
//! the game core consumes (including terminals without key-release events).

pub mod map;
pub mod tracker;

pub use blockfall_types as types;

pub use map::{map_key, should_quit, Command};
pub use tracker::KeyTracker;
