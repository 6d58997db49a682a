//! Screen direction field - one view ray per output pixel
//!
//! The screen is described by four boundary directions obtained by moving
//! the view angles half a field of view up, down, left and right. Pixel
//! directions interpolate bilinearly between them:
//!
//! ```text
//! dir(x, y) = center_hori + to_left + to_up
//!           - (2x / (W - 1)) * to_left
//!           - (2y / (H - 1)) * to_up
//! ```
//!
//! and are then normalized. x runs left to right, y top to bottom.

use crate::types::{Vector3, ViewAngles};

/// The boundary vectors of the screen for one view orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenBasis {
    pub up: Vector3,
    pub down: Vector3,
    pub left: Vector3,
    pub right: Vector3,
    /// Midpoint of `up` and `down`.
    pub center_vert: Vector3,
    /// Midpoint of `left` and `right`.
    pub center_hori: Vector3,
    /// `left - center_hori`
    pub to_left: Vector3,
    /// `up - center_vert`
    pub to_up: Vector3,
}

impl ScreenBasis {
    pub fn new(view: ViewAngles, fov_vertical: f32, fov_horizontal: f32) -> Self {
        let half_v = fov_vertical / 2.0;
        let half_h = fov_horizontal / 2.0;

        let down = Vector3::from_spherical(view.theta - half_v, view.phi);
        let up = Vector3::from_spherical(view.theta + half_v, view.phi);
        let left = Vector3::from_spherical(view.theta, view.phi - half_h);
        let right = Vector3::from_spherical(view.theta, view.phi + half_h);

        let center_vert = Vector3::scale(0.5, up + down);
        let center_hori = Vector3::scale(0.5, left + right);

        Self {
            up,
            down,
            left,
            right,
            center_vert,
            center_hori,
            to_left: left - center_hori,
            to_up: up - center_vert,
        }
    }

    /// Unit direction at interpolation factors `fx`, `fy` in `[0, 2]`
    /// (0 = left/top edge, 1 = centre, 2 = right/bottom edge).
    #[inline(always)]
    pub fn direction(&self, fx: f32, fy: f32) -> Vector3 {
        let top_left = self.center_hori + self.to_left + self.to_up;
        (top_left - fx * self.to_left - fy * self.to_up).normalize()
    }
}

/// Interpolation factor `2i / (n - 1)`. A single pixel sits at the centre.
#[inline(always)]
pub fn axis_factor(i: u16, n: u16) -> f32 {
    if n <= 1 {
        return 1.0;
    }
    2.0 * (i as f32) / ((n - 1) as f32)
}

/// Per-pixel unit view directions, row-major, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionField {
    width: u16,
    height: u16,
    dirs: Vec<Vector3>,
}

impl DirectionField {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            dirs: vec![Vector3::ZERO; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the field, keeping the allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.dirs.resize(len, Vector3::ZERO);
    }

    /// Recompute every direction for the given view.
    pub fn compute(&mut self, view: ViewAngles, fov_vertical: f32, fov_horizontal: f32) {
        let basis = ScreenBasis::new(view, fov_vertical, fov_horizontal);
        let w = self.width as usize;
        if w == 0 {
            return;
        }
        for (y, row) in self.dirs.chunks_exact_mut(w).enumerate() {
            let fy = axis_factor(y as u16, self.height);
            for (x, dir) in row.iter_mut().enumerate() {
                *dir = basis.direction(axis_factor(x as u16, self.width), fy);
            }
        }
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Vector3> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.dirs[(y as usize) * (self.width as usize) + (x as usize)])
    }

    pub fn as_slice(&self) -> &[Vector3] {
        &self.dirs
    }
}
