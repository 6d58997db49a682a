//! Tunable parameters for the renderer, the world, and the controls.
//!
//! Every struct deserializes with `#[serde(default)]`, so a config file only
//! needs to name the values it changes.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{
    Label, BLOCK_BORDER_SIZE, EYE_HEIGHT, FOV_HORIZONTAL, FOV_VERTICAL, MOVE_STEP,
    RAY_STEP_EPSILON, SLAB_HEIGHT, SLAB_MATERIAL, TILT_STEP, X_BLOCKS, Y_BLOCKS, Z_BLOCKS,
};

/// Ray casting parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Vertical field of view (radians).
    pub fov_vertical: f32,
    /// Horizontal field of view (radians).
    pub fov_horizontal: f32,
    /// Edge highlight tolerance.
    pub border_size: f32,
    /// Face push distance and parallel-axis cutoff.
    pub step_epsilon: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            fov_vertical: FOV_VERTICAL,
            fov_horizontal: FOV_HORIZONTAL,
            border_size: BLOCK_BORDER_SIZE,
            step_epsilon: RAY_STEP_EPSILON,
        }
    }
}

impl RenderSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("render.fov_vertical", self.fov_vertical)?;
        positive("render.fov_horizontal", self.fov_horizontal)?;
        non_negative("render.border_size", self.border_size)?;
        positive("render.step_epsilon", self.step_epsilon)?;
        if self.border_size >= 0.5 {
            return Err(ConfigError::invalid(
                "render.border_size",
                "must be below 0.5 or every hit becomes an edge",
            ));
        }
        // A 1-wide step would skip whole cells.
        if self.step_epsilon >= 1.0 {
            return Err(ConfigError::invalid("render.step_epsilon", "must be below 1.0"));
        }
        Ok(())
    }
}

/// Layout of the generated world: a box of empty cells with a ground slab.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    pub x_blocks: usize,
    pub y_blocks: usize,
    pub z_blocks: usize,
    /// Slab covers z in `[0, slab_height)`.
    pub slab_height: usize,
    pub slab_material: char,
    /// Camera height above the slab top at spawn.
    pub eye_height: f32,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            x_blocks: X_BLOCKS,
            y_blocks: Y_BLOCKS,
            z_blocks: Z_BLOCKS,
            slab_height: SLAB_HEIGHT,
            slab_material: SLAB_MATERIAL as char,
            eye_height: EYE_HEIGHT,
        }
    }
}

impl WorldSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, n) in [
            ("world.x_blocks", self.x_blocks),
            ("world.y_blocks", self.y_blocks),
            ("world.z_blocks", self.z_blocks),
        ] {
            if n == 0 {
                return Err(ConfigError::invalid(field, "must be at least 1"));
            }
        }
        // The camera spawns above the slab, so at least one layer stays empty.
        if self.slab_height >= self.z_blocks {
            return Err(ConfigError::invalid(
                "world.slab_height",
                format!(
                    "{} leaves no room above it in world.z_blocks ({})",
                    self.slab_height, self.z_blocks
                ),
            ));
        }
        self.material()?;
        non_negative("world.eye_height", self.eye_height)?;
        Ok(())
    }

    /// The slab material as a label. Empty and edge characters are reserved.
    pub fn material(&self) -> Result<Label, ConfigError> {
        let label = Label::from_char(self.slab_material).ok_or_else(|| {
            ConfigError::invalid("world.slab_material", "must be a printable ASCII character")
        })?;
        if !label.is_material() {
            return Err(ConfigError::invalid(
                "world.slab_material",
                format!("{:?} is reserved", self.slab_material),
            ));
        }
        Ok(label)
    }
}

/// Per-tick camera increments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlSettings {
    /// Radians added to or removed from an angle per tick.
    pub tilt_step: f32,
    /// World units moved per tick.
    pub move_step: f32,
    /// How long a key stays held after its last press or repeat event.
    /// 0 means a key only counts during the poll cycle it was read in.
    pub key_hold_ms: u32,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            tilt_step: TILT_STEP,
            move_step: MOVE_STEP,
            key_hold_ms: 0,
        }
    }
}

impl ControlSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("controls.tilt_step", self.tilt_step)?;
        non_negative("controls.move_step", self.move_step)?;
        Ok(())
    }
}

fn positive(field: &'static str, v: f32) -> Result<(), ConfigError> {
    if !v.is_finite() || v <= 0.0 {
        return Err(ConfigError::invalid(field, format!("{v} must be a positive number")));
    }
    Ok(())
}

fn non_negative(field: &'static str, v: f32) -> Result<(), ConfigError> {
    if !v.is_finite() || v < 0.0 {
        return Err(ConfigError::invalid(field, format!("{v} must be zero or positive")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        RenderSettings::default().validate().unwrap();
        WorldSettings::default().validate().unwrap();
        ControlSettings::default().validate().unwrap();
    }

    #[test]
    fn reserved_materials_are_rejected() {
        for c in [' ', '-', '\t'] {
            let world = WorldSettings {
                slab_material: c,
                ..WorldSettings::default()
            };
            assert!(
                matches!(
                    world.validate(),
                    Err(ConfigError::Invalid {
                        field: "world.slab_material",
                        ..
                    })
                ),
                "{c:?}"
            );
        }
    }

    #[test]
    fn bad_numbers_are_rejected() {
        let render = RenderSettings {
            fov_vertical: f32::NAN,
            ..RenderSettings::default()
        };
        assert!(render.validate().is_err());

        let render = RenderSettings {
            step_epsilon: 0.0,
            ..RenderSettings::default()
        };
        assert!(render.validate().is_err());

        let world = WorldSettings {
            slab_height: 11,
            ..WorldSettings::default()
        };
        assert!(world.validate().is_err());

        let world = WorldSettings {
            slab_height: 10,
            ..WorldSettings::default()
        };
        assert!(matches!(
            world.validate(),
            Err(ConfigError::Invalid {
                field: "world.slab_height",
                ..
            })
        ));

        let world = WorldSettings {
            y_blocks: 0,
            ..WorldSettings::default()
        };
        assert!(world.validate().is_err());
    }
}
