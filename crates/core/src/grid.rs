//! Grid module - the voxel world
//!
//! The world is an X×Y×Z box of cells, each holding a [`Label`].
//! Uses one flat allocation; index mapping is `x + X * (y + Y * z)`.
//! Coordinates: x and y span the ground plane, z points up.
//! Anything outside `[0, extent)` on any axis is "out of grid", which is a
//! normal answer rather than an error.

use crate::error::GridError;
use crate::types::{Label, Vector3};

/// Integer cell coordinate `[x, y, z]`.
pub type CellPos = [i32; 3];

/// Fixed-size 3D array of labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoxelGrid {
    x_blocks: usize,
    y_blocks: usize,
    z_blocks: usize,
    /// Flat array of cells, x fastest.
    cells: Vec<Label>,
}

impl VoxelGrid {
    /// Create an all-empty grid.
    pub fn new(x_blocks: usize, y_blocks: usize, z_blocks: usize) -> Result<Self, GridError> {
        if x_blocks == 0 || y_blocks == 0 || z_blocks == 0 {
            return Err(GridError::ZeroExtent {
                x: x_blocks,
                y: y_blocks,
                z: z_blocks,
            });
        }
        // Cells are addressed with i32 coordinates.
        let too_large = || GridError::TooLarge {
            x: x_blocks,
            y: y_blocks,
            z: z_blocks,
        };
        if [x_blocks, y_blocks, z_blocks]
            .iter()
            .any(|&n| n > i32::MAX as usize)
        {
            return Err(too_large());
        }
        let len = x_blocks
            .checked_mul(y_blocks)
            .and_then(|n| n.checked_mul(z_blocks))
            .ok_or_else(too_large)?;

        Ok(Self {
            x_blocks,
            y_blocks,
            z_blocks,
            cells: vec![Label::EMPTY; len],
        })
    }

    /// `(x_blocks, y_blocks, z_blocks)`
    pub fn extents(&self) -> (usize, usize, usize) {
        (self.x_blocks, self.y_blocks, self.z_blocks)
    }

    /// Sum of the three extents; bounds the number of faces a ray can cross.
    pub fn extent_sum(&self) -> usize {
        self.x_blocks + self.y_blocks + self.z_blocks
    }

    pub fn cells(&self) -> &[Label] {
        &self.cells
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        if !self.in_bounds(x, y, z) {
            return None;
        }
        let (x, y, z) = (x as usize, y as usize, z as usize);
        Some(x + self.x_blocks * (y + self.y_blocks * z))
    }

    /// True iff `0 <= x < X`, `0 <= y < Y` and `0 <= z < Z`.
    #[inline(always)]
    pub fn in_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as usize) < self.x_blocks
            && (y as usize) < self.y_blocks
            && (z as usize) < self.z_blocks
    }

    /// Label at an integer cell. Out-of-grid cells read as [`Label::EMPTY`].
    #[inline(always)]
    pub fn get(&self, x: i32, y: i32, z: i32) -> Label {
        match self.index(x, y, z) {
            Some(i) => self.cells[i],
            None => Label::EMPTY,
        }
    }

    /// Set a cell. Returns false if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, z: i32, label: Label) -> bool {
        match self.index(x, y, z) {
            Some(i) => {
                self.cells[i] = label;
                true
            }
            None => false,
        }
    }

    /// Fill every in-bounds cell of the half-open box `[min, max)`.
    ///
    /// Returns the number of cells written.
    pub fn fill_box(&mut self, min: CellPos, max: CellPos, label: Label) -> usize {
        let lo = |axis: usize| min[axis].max(0);
        let hi = |axis: usize, extent: usize| max[axis].min(extent as i32);

        let mut written = 0;
        for z in lo(2)..hi(2, self.z_blocks) {
            for y in lo(1)..hi(1, self.y_blocks) {
                for x in lo(0)..hi(0, self.x_blocks) {
                    if self.set(x, y, z, label) {
                        written += 1;
                    }
                }
            }
        }
        written
    }

    /// True iff a continuous point lies inside the grid box.
    #[inline(always)]
    pub fn contains_point(&self, p: Vector3) -> bool {
        p.x >= 0.0
            && p.y >= 0.0
            && p.z >= 0.0
            && p.x < self.x_blocks as f32
            && p.y < self.y_blocks as f32
            && p.z < self.z_blocks as f32
    }

    /// The cell a continuous point occupies, or `None` outside the grid.
    #[inline(always)]
    pub fn cell_at(&self, p: Vector3) -> Option<CellPos> {
        if !self.contains_point(p) {
            return None;
        }
        let cell = [p.x.floor() as i32, p.y.floor() as i32, p.z.floor() as i32];
        // Guards the f32 rounding case where `p < extent` but floor(p) == extent.
        if self.in_bounds(cell[0], cell[1], cell[2]) {
            Some(cell)
        } else {
            None
        }
    }

    /// Number of non-empty cells.
    pub fn solid_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}
