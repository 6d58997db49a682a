//! Ray tracer - grid stepping through the voxel world
//!
//! A ray starts at the camera and hops from cell face to cell face:
//!
//! 1. Outside the grid: report [`Label::EMPTY`].
//! 2. Inside a non-empty cell: report [`Label::EDGE`] when the hit point is
//!    within `border_size` of an integer on two or more axes, otherwise the
//!    cell's material.
//! 3. Otherwise find, per axis, the distance along the ray to the next
//!    integer boundary in the direction of travel (axes with
//!    `|d| <= step_epsilon` are parallel and skipped), take the minimum,
//!    advance by `min + step_epsilon`, and repeat.
//!
//! Every step crosses at least one cell face on a steppable axis, so a ray
//! takes at most about `X + Y + Z` steps before leaving the grid.

use crate::grid::{CellPos, VoxelGrid};
use crate::settings::RenderSettings;
use crate::types::{Label, Vector3};

/// Slack on top of `X + Y + Z` before a ray is abandoned.
const STEP_SLACK: usize = 8;

/// Result of tracing one ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub label: Label,
    /// Where the ray stopped.
    pub point: Vector3,
    /// The solid cell that was hit, if any.
    pub cell: Option<CellPos>,
    /// Number of face crossings taken.
    pub steps: u32,
}

impl Hit {
    fn miss(point: Vector3, steps: u32) -> Self {
        Self {
            label: Label::EMPTY,
            point,
            cell: None,
            steps,
        }
    }
}

/// Steps rays through a [`VoxelGrid`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayTracer {
    border_size: f32,
    step_epsilon: f32,
}

impl Default for RayTracer {
    fn default() -> Self {
        Self::from_settings(&RenderSettings::default())
    }
}

impl RayTracer {
    pub fn new(border_size: f32, step_epsilon: f32) -> Self {
        Self {
            border_size,
            step_epsilon,
        }
    }

    pub fn from_settings(settings: &RenderSettings) -> Self {
        Self::new(settings.border_size, settings.step_epsilon)
    }

    /// Label seen along `dir` from `origin`.
    #[inline]
    pub fn trace(&self, grid: &VoxelGrid, origin: Vector3, dir: Vector3) -> Label {
        self.trace_detailed(grid, origin, dir).label
    }

    /// Face crossings a ray may take in `grid` before it is abandoned.
    pub fn max_steps(grid: &VoxelGrid) -> u32 {
        (grid.extent_sum() + STEP_SLACK) as u32
    }

    pub fn trace_detailed(&self, grid: &VoxelGrid, origin: Vector3, dir: Vector3) -> Hit {
        let max_steps = Self::max_steps(grid);
        let mut pos = origin;
        let mut steps = 0u32;

        loop {
            let Some(cell) = grid.cell_at(pos) else {
                return Hit::miss(pos, steps);
            };

            let label = grid.get(cell[0], cell[1], cell[2]);
            if !label.is_empty() {
                let label = if on_block_border(pos, self.border_size) {
                    Label::EDGE
                } else {
                    label
                };
                return Hit {
                    label,
                    point: pos,
                    cell: Some(cell),
                    steps,
                };
            }

            if steps >= max_steps {
                return Hit::miss(pos, steps);
            }

            // No steppable axis: the ray cannot leave this cell.
            let Some(dist) = self.distance_to_next_face(pos, dir) else {
                return Hit::miss(pos, steps);
            };

            pos = pos + (dist + self.step_epsilon) * dir;
            steps += 1;
        }
    }

    /// Distance along `dir` to the nearest integer boundary ahead, over the
    /// axes whose direction component exceeds `step_epsilon` in magnitude.
    #[inline(always)]
    pub fn distance_to_next_face(&self, pos: Vector3, dir: Vector3) -> Option<f32> {
        let mut best: Option<f32> = None;
        for axis in 0..3 {
            let p = pos.axis(axis);
            let d = dir.axis(axis);
            let dist = if d > self.step_epsilon {
                (p.floor() + 1.0 - p) / d
            } else if d < -self.step_epsilon {
                (p.floor() - p) / d
            } else {
                continue;
            };
            best = Some(match best {
                Some(b) => b.min(dist),
                None => dist,
            });
        }
        best
    }
}

/// True if `pos` is within `border_size` of an integer on at least two axes,
/// i.e. on or near a voxel edge.
#[inline(always)]
pub fn on_block_border(pos: Vector3, border_size: f32) -> bool {
    let near = |v: f32| (v - v.round()).abs() < border_size;
    let aligned = near(pos.x) as u8 + near(pos.y) as u8 + near(pos.z) as u8;
    aligned >= 2
}
