//! Config file loading.
//!
//! A TOML file with optional sections; anything left out keeps its default:
//!
//! ```toml
//! [frame]
//! width = 160        # omit to follow the terminal size
//! interval_ms = 20
//! show_hud = true
//!
//! [world]
//! x_blocks = 20
//! slab_material = "#"
//!
//! [camera]
//! position = [5.0, 5.0, 5.5]
//! theta = -0.2
//!
//! [render]
//! fov_horizontal = 1.2
//!
//! [controls]
//! tilt_step = 0.05
//! key_hold_ms = 60
//!
//! [colors]
//! material = [80, 220, 120]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{ConfigError, ControlSettings, RenderSettings, WorldBuilder, WorldSettings};
use crate::term::Palette;
use crate::types::{Pose, Vector3, ViewAngles, FRAME_INTERVAL_MS};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Output size and pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameSettings {
    /// Pixels per row; `None` follows the terminal width.
    pub width: Option<u16>,
    /// Rows; `None` follows the terminal height.
    pub height: Option<u16>,
    /// Tick interval in milliseconds.
    pub interval_ms: u32,
    /// Draw the pose/help status line on the bottom row.
    pub show_hud: bool,
}

impl Default for FrameSettings {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            interval_ms: FRAME_INTERVAL_MS,
            show_hud: false,
        }
    }
}

/// Starting pose. Without a position the camera spawns on the slab.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub position: Option<[f32; 3]>,
    pub theta: f32,
    pub phi: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub frame: FrameSettings,
    pub world: WorldSettings,
    pub camera: CameraSettings,
    pub render: RenderSettings,
    pub controls: ControlSettings,
    pub colors: Palette,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, LoadError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.world.validate()?;
        self.render.validate()?;
        self.controls.validate()?;

        if self.frame.interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "frame.interval_ms",
                reason: "must be at least 1".into(),
            });
        }
        for (field, v) in [("frame.width", self.frame.width), ("frame.height", self.frame.height)] {
            if v == Some(0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be at least 1 (omit to follow the terminal)".into(),
                });
            }
        }
        let camera_finite = self.camera.theta.is_finite()
            && self.camera.phi.is_finite()
            && self
                .camera
                .position
                .map_or(true, |p| Vector3::from(p).is_finite());
        if !camera_finite {
            return Err(ConfigError::Invalid {
                field: "camera",
                reason: "position and angles must be finite".into(),
            });
        }
        Ok(())
    }

    /// Starting pose: configured position or the world's spawn point.
    pub fn spawn_pose(&self, world: &WorldBuilder) -> Pose {
        let position = match self.camera.position {
            Some(p) => Vector3::from(p),
            None => world.spawn_pose().position,
        };
        Pose::new(position, ViewAngles::new(self.camera.theta, self.camera.phi))
    }

    /// Frame size for a terminal of `term_w` × `term_h`.
    pub fn frame_size(&self, term_w: u16, term_h: u16) -> (u16, u16) {
        (
            self.frame.width.unwrap_or(term_w),
            self.frame.height.unwrap_or(term_h),
        )
    }
}
