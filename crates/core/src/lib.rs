//! Rendering core - pure voxel ray casting with no terminal I/O
//!
//! Turns a camera [`Pose`](crate::types::Pose) and a [`VoxelGrid`] into a
//! [`Frame`] of labels, one per pixel:
//!
//! - [`directions`]: per-pixel unit view directions for the field of view
//! - [`raytrace`]: face-to-face grid stepping that reports the first hit
//! - [`frame`]: the label buffer and the [`Renderer`] that fills it
//! - [`world`] and [`player`]: world setup and the per-tick pose update
//!
//! # Examples
//!
//! ```
//! use tui_voxel_core::{Frame, Renderer, WorldBuilder};
//! use tui_voxel_core::types::Label;
//!
//! let world = WorldBuilder::default();
//! let grid = world.build().unwrap();
//! let pose = world.spawn_pose();
//!
//! let mut renderer = Renderer::default();
//! let mut frame = Frame::new(60, 20);
//! renderer.render(&pose, &grid, &mut frame);
//!
//! // Level view: sky on the top row, ground somewhere below.
//! assert!(frame.row(0).unwrap().iter().all(|l| l.is_empty()));
//! assert!(frame.count(Label(b'@')) > 0);
//! ```

pub mod directions;
pub mod error;
pub mod frame;
pub mod grid;
pub mod player;
pub mod raytrace;
pub mod settings;
pub mod world;

pub use tui_voxel_types as types;

// Re-export commonly used types for convenience
pub use directions::{DirectionField, ScreenBasis};
pub use error::{ConfigError, GridError};
pub use frame::{render, Frame, Renderer};
pub use grid::{CellPos, VoxelGrid};
pub use player::{keep_inside, update_pose};
pub use raytrace::{on_block_border, Hit, RayTracer};
pub use settings::{ControlSettings, RenderSettings, WorldSettings};
pub use world::WorldBuilder;
