//! FrameView: maps a rendered `core::Frame` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write as _;

use arrayvec::ArrayString;
use serde::{Deserialize, Serialize};

use crate::core::Frame;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Label, Pose};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Colors for the three kinds of pixel, plus the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Solid voxel faces.
    pub material: Rgb,
    /// Voxel edges.
    pub edge: Rgb,
    /// Background behind everything.
    pub background: Rgb,
    /// Status line text.
    pub hud: Rgb,
}

impl Default for Palette {
    /// Cyan on black.
    fn default() -> Self {
        Self {
            material: Rgb::new(0, 205, 205),
            edge: Rgb::new(0, 205, 205),
            background: Rgb::new(0, 0, 0),
            hud: Rgb::new(220, 220, 220),
        }
    }
}

/// Status line capacity; longer text is cut.
const HUD_CAPACITY: usize = 96;

/// Turns label frames into styled terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameView {
    palette: Palette,
    show_hud: bool,
}

impl Default for FrameView {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

impl FrameView {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            show_hud: false,
        }
    }

    pub fn with_hud(mut self, show_hud: bool) -> Self {
        self.show_hud = show_hud;
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn style_for(&self, label: Label) -> CellStyle {
        let p = &self.palette;
        if label == Label::EDGE {
            CellStyle {
                bold: true,
                ..CellStyle::plain(p.edge, p.background)
            }
        } else if label.is_empty() {
            CellStyle::plain(p.background, p.background)
        } else {
            CellStyle::plain(p.material, p.background)
        }
    }

    /// Draw `frame` into an existing framebuffer sized to `viewport`.
    ///
    /// The frame is anchored top-left and clipped to the viewport. This is
    /// the allocation-free hot path: callers reuse the framebuffer across
    /// frames and it only reallocates when the viewport grows.
    pub fn render_into(
        &self,
        frame: &Frame,
        pose: Option<&Pose>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(self.style_for(Label::EMPTY).into_cell(' '));

        let w = frame.width().min(viewport.width);
        let h = frame.height().min(viewport.height);
        for y in 0..h {
            let Some(row) = frame.row(y) else { break };
            for (x, label) in row.iter().take(w as usize).enumerate() {
                fb.put_char(x as u16, y, label.as_char(), self.style_for(*label));
            }
        }

        if self.show_hud {
            if let Some(pose) = pose {
                self.draw_hud(fb, pose);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &Frame, pose: Option<&Pose>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, pose, viewport, &mut fb);
        fb
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, pose: &Pose) {
        let mut text = ArrayString::<HUD_CAPACITY>::new();
        let p = pose.position;
        let v = pose.view;
        // Overflow only truncates the status line.
        let _ = write!(
            text,
            " pos {:.2} {:.2} {:.2}  theta {:+.2}  phi {:+.2}  [wasd look, arrows move, q quit] ",
            p.x, p.y, p.z, v.theta, v.phi
        );
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(self.palette.hud, self.palette.background)
        };
        let y = fb.height().saturating_sub(1);
        fb.put_str(0, y, &text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> Frame {
        let mut f = Frame::new(4, 2);
        f.set(0, 0, Label(b'@'));
        f.set(1, 0, Label::EDGE);
        f.set(3, 1, Label(b'@'));
        f
    }

    #[test]
    fn labels_map_to_palette_styles() {
        let view = FrameView::default();
        let fb = view.render(&sample_frame(), None, Viewport::new(4, 2));

        let solid = fb.get(0, 0).unwrap();
        assert_eq!(solid.ch, '@');
        assert_eq!(solid.style.fg, Palette::default().material);

        let edge = fb.get(1, 0).unwrap();
        assert_eq!(edge.ch, '-');
        assert!(edge.style.bold);

        let empty = fb.get(2, 0).unwrap();
        assert_eq!(empty.ch, ' ');
        assert_eq!(empty.style.bg, Palette::default().background);
    }

    #[test]
    fn frame_is_clipped_to_viewport() {
        let view = FrameView::default();
        let fb = view.render(&sample_frame(), None, Viewport::new(2, 1));
        assert_eq!(fb.width(), 2);
        assert_eq!(fb.height(), 1);
        assert_eq!(fb.row_text(0), "@-");
    }

    #[test]
    fn smaller_frame_leaves_background_around_it() {
        let view = FrameView::default();
        let fb = view.render(&sample_frame(), None, Viewport::new(6, 3));
        assert_eq!(fb.row_text(0), "@-    ");
        assert_eq!(fb.row_text(1), "   @  ");
        assert_eq!(fb.row_text(2), "      ");
    }

    #[test]
    fn hud_goes_on_the_last_row() {
        let view = FrameView::default().with_hud(true);
        let frame = Frame::new(60, 3);
        let fb = view.render(&frame, Some(&Pose::default()), Viewport::new(60, 3));
        let text = fb.row_text(2);
        assert!(text.starts_with(" pos 5.00 5.00 5.50  theta +0.00"), "{text}");
        assert_eq!(fb.row_text(0).trim(), "");
    }
}
