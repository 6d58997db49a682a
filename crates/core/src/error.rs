//! Error types for world setup and settings validation.

use thiserror::Error;

/// Errors raised while building a [`crate::VoxelGrid`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid extents must be positive, got {x}x{y}x{z}")]
    ZeroExtent { x: usize, y: usize, z: usize },

    #[error("grid of {x}x{y}x{z} cells is too large")]
    TooLarge { x: usize, y: usize, z: usize },
}

/// A settings value that cannot be used.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error(transparent)]
    Grid(#[from] GridError),
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
