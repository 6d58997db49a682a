//! World setup: builds the voxel grid and the spawn pose from settings.

use log::debug;

use crate::error::ConfigError;
use crate::grid::VoxelGrid;
use crate::settings::WorldSettings;
use crate::types::{Pose, Vector3, ViewAngles};

/// Builds the flat-slab world described by [`WorldSettings`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBuilder {
    settings: WorldSettings,
}

impl WorldBuilder {
    pub fn new(settings: WorldSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &WorldSettings {
        &self.settings
    }

    /// Allocate the grid and fill the ground slab.
    pub fn build(&self) -> Result<VoxelGrid, ConfigError> {
        self.settings.validate()?;
        let s = &self.settings;
        let material = s.material()?;

        let mut grid = VoxelGrid::new(s.x_blocks, s.y_blocks, s.z_blocks)?;
        let filled = grid.fill_box(
            [0, 0, 0],
            [s.x_blocks as i32, s.y_blocks as i32, s.slab_height as i32],
            material,
        );

        debug!(
            "built {}x{}x{} world, slab of {:?} ({} cells)",
            s.x_blocks, s.y_blocks, s.z_blocks, s.slab_material, filled
        );
        Ok(grid)
    }

    /// Camera standing on the slab at (5, 5), clamped into small worlds,
    /// looking level along +x.
    pub fn spawn_pose(&self) -> Pose {
        let s = &self.settings;
        let inside = |v: f32, extent: usize| v.min(extent as f32 / 2.0);
        let z = (s.slab_height as f32 + s.eye_height).min(s.z_blocks as f32 - 0.5);
        Pose::new(
            Vector3::new(inside(5.0, s.x_blocks), inside(5.0, s.y_blocks), z),
            ViewAngles::default(),
        )
    }
}

impl Default for WorldBuilder {
    fn default() -> Self {
        Self::new(WorldSettings::default())
    }
}
