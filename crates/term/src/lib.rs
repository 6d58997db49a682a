//! Terminal output for the voxel view.
//!
//! Rendering is split in two so the interesting part stays testable:
//! - [`frame_view`] turns a label [`core::Frame`] into a styled
//!   [`FrameBuffer`] (pure, no I/O)
//! - [`renderer`] flushes framebuffers to the terminal with crossterm,
//!   rewriting only the cells that changed since the previous frame

pub mod fb;
pub mod frame_view;
pub mod renderer;

pub use tui_voxel_core as core;
pub use tui_voxel_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use frame_view::{FrameView, Palette, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
