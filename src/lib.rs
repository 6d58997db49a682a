//! TUI Voxel (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_voxel::{core, input, term, types}`
//! and adds the config file loader used by the binary.

pub mod config;

pub use tui_voxel_core as core;
pub use tui_voxel_input as input;
pub use tui_voxel_term as term;
pub use tui_voxel_types as types;

pub use config::{Config, LoadError};
