//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::ViewAction`]s and
//! rebuilds a [`crate::types::InputState`] once per poll cycle, for terminals
//! with or without key-release events.

pub mod handler;
pub mod map;

pub use tui_voxel_types as types;

pub use handler::InputHandler;
pub use map::{map_key_event, should_quit};
