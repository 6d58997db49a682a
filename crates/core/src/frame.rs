//! Frame module - the rendered character grid and the renderer that fills it
//!
//! A [`Frame`] holds one [`Label`] per pixel, row-major, top row first.
//! [`Renderer::render`] recomputes the direction field for the pose and
//! traces one ray per pixel into a caller-owned frame, so a frame allocated
//! once can be reused forever.

use std::fmt;

use log::trace;

use crate::directions::DirectionField;
use crate::grid::VoxelGrid;
use crate::raytrace::RayTracer;
use crate::settings::RenderSettings;
use crate::types::{Label, Pose};

/// 2D array of labels, one per output pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<Label>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Label::EMPTY; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the frame.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Label::EMPTY);
    }

    pub fn cells(&self) -> &[Label] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Label> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, label: Label) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = label;
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Label::EMPTY);
    }

    /// One row of labels.
    pub fn row(&self, y: u16) -> Option<&[Label]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = (y as usize) * w;
        Some(&self.cells[start..start + w])
    }

    /// Number of pixels showing `label`.
    pub fn count(&self, label: Label) -> usize {
        self.cells.iter().filter(|&&c| c == label).count()
    }
}

impl fmt::Display for Frame {
    /// Rows of plain characters separated by newlines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                f.write_str("\n")?;
            }
            for label in self.row(y).unwrap_or(&[]) {
                write!(f, "{}", label.as_char())?;
            }
        }
        Ok(())
    }
}

/// Fills frames by casting one ray per pixel.
///
/// Owns the per-frame direction field so repeated renders do not allocate.
#[derive(Debug, Clone)]
pub struct Renderer {
    settings: RenderSettings,
    tracer: RayTracer,
    field: DirectionField,
}

impl Renderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            tracer: RayTracer::from_settings(&settings),
            field: DirectionField::new(0, 0),
        }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn tracer(&self) -> &RayTracer {
        &self.tracer
    }

    /// Directions used by the most recent render.
    pub fn field(&self) -> &DirectionField {
        &self.field
    }

    /// Render `grid` as seen from `pose` into `out`, sized as `out` already is.
    pub fn render(&mut self, pose: &Pose, grid: &VoxelGrid, out: &mut Frame) {
        self.field.resize(out.width(), out.height());
        self.field.compute(
            pose.view,
            self.settings.fov_vertical,
            self.settings.fov_horizontal,
        );

        let w = out.width() as usize;
        if w == 0 || out.height() == 0 {
            return;
        }

        #[cfg(not(feature = "parallel"))]
        self.trace_rows_sequential(pose, grid, w, out);
        #[cfg(feature = "parallel")]
        self.trace_rows_parallel(pose, grid, w, out);

        trace!(
            "rendered {}x{} frame from ({:.2}, {:.2}, {:.2}) theta={:.2} phi={:.2}",
            out.width(),
            out.height(),
            pose.position.x,
            pose.position.y,
            pose.position.z,
            pose.view.theta,
            pose.view.phi
        );
    }

    #[cfg(any(test, not(feature = "parallel")))]
    fn trace_rows_sequential(&self, pose: &Pose, grid: &VoxelGrid, w: usize, out: &mut Frame) {
        let tracer = self.tracer;
        let origin = pose.position;
        for (row, dirs) in out
            .cells
            .chunks_exact_mut(w)
            .zip(self.field.as_slice().chunks_exact(w))
        {
            for (px, dir) in row.iter_mut().zip(dirs) {
                *px = tracer.trace(grid, origin, *dir);
            }
        }
    }

    /// Same output as the sequential loop, one rayon task per row.
    #[cfg(feature = "parallel")]
    fn trace_rows_parallel(&self, pose: &Pose, grid: &VoxelGrid, w: usize, out: &mut Frame) {
        use rayon::prelude::*;

        let tracer = self.tracer;
        let origin = pose.position;
        out.cells
            .par_chunks_exact_mut(w)
            .zip(self.field.as_slice().par_chunks_exact(w))
            .for_each(|(row, dirs)| {
                for (px, dir) in row.iter_mut().zip(dirs) {
                    *px = tracer.trace(grid, origin, *dir);
                }
            });
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderSettings::default())
    }
}

/// Convenience helper that allocates a new renderer and frame.
pub fn render(
    pose: &Pose,
    grid: &VoxelGrid,
    settings: RenderSettings,
    width: u16,
    height: u16,
) -> Frame {
    let mut frame = Frame::new(width, height);
    Renderer::new(settings).render(pose, grid, &mut frame);
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Vector3, ViewAngles};

    #[test]
    fn display_joins_rows() {
        let mut f = Frame::new(3, 2);
        f.set(0, 0, Label(b'a'));
        f.set(2, 1, Label(b'z'));
        assert_eq!(f.to_string(), "a  \n  z");
    }

    #[test]
    fn set_out_of_bounds_is_ignored() {
        let mut f = Frame::new(2, 2);
        f.set(2, 0, Label(b'#'));
        f.set(0, 5, Label(b'#'));
        assert_eq!(f.count(Label::EMPTY), 4);
        assert_eq!(f.row(2), None);
    }

    #[test]
    fn empty_frame_renders_without_panicking() {
        let grid = VoxelGrid::new(2, 2, 2).unwrap();
        let mut frame = Frame::new(0, 0);
        Renderer::default().render(&Pose::default(), &grid, &mut frame);
        assert!(frame.cells().is_empty());
    }

    #[test]
    fn looking_down_fills_the_frame_with_ground() {
        let mut grid = VoxelGrid::new(20, 20, 10).unwrap();
        grid.fill_box([0, 0, 0], [20, 20, 4], Label(b'@'));
        let pose = Pose::new(
            Vector3::new(10.3, 10.3, 5.5),
            ViewAngles::new(-std::f32::consts::FRAC_PI_2 + 0.1, 0.0),
        );
        let frame = render(&pose, &grid, RenderSettings::default(), 16, 8);
        assert_eq!(frame.count(Label::EMPTY), 0);
        assert!(frame.count(Label(b'@')) > 0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_rows_match_the_sequential_loop() {
        let mut grid = VoxelGrid::new(20, 20, 10).unwrap();
        grid.fill_box([0, 0, 0], [20, 20, 4], Label(b'@'));
        grid.fill_box([9, 2, 4], [11, 18, 7], Label(b'#'));
        let pose = Pose::new(Vector3::new(7.3, 4.1, 6.2), ViewAngles::new(-0.4, 0.9));

        let mut renderer = Renderer::default();
        let mut parallel = Frame::new(120, 36);
        renderer.render(&pose, &grid, &mut parallel);

        // The field is still the one the parallel render used.
        let mut sequential = Frame::new(120, 36);
        renderer.trace_rows_sequential(&pose, &grid, 120, &mut sequential);

        assert_eq!(parallel, sequential);
        assert!(parallel.count(Label(b'#')) > 0);
    }
}
