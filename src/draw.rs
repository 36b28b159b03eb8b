//! The drawing contract shared by every framebuffer.
//!
//! [`Draw`] is what sprite, font and shader code is written against. It is
//! object safe and takes abstract [`RgbColor`]s, so consumers can hold a
//! `&mut dyn Draw` without knowing the pixel format. No call can fail:
//! out-of-bounds or degenerate geometry is clipped or dropped silently.

use crate::basics::{saturate_coord, PixelSignedT, PixelT};
use crate::blend::BlendMode;
use crate::circle::QuadrantSteps;
use crate::color::RgbColor;

/// Clipped drawing primitives over one frame.
///
/// Coordinates are logical (after the frame's rotation and mirroring) and
/// signed, so shapes may start or end off-screen.
pub trait Draw {
    /// Logical frame width.
    fn frame_width(&self) -> PixelT;

    /// Logical frame height.
    fn frame_height(&self) -> PixelT;

    /// Bits per pixel of the underlying format.
    fn color_depth(&self) -> u8;

    fn is_monochrome(&self) -> bool;

    /// Packed frame bytes ready for the display bus, or `None` when no buffer
    /// is attached.
    fn frame_buffer(&self) -> Option<&[u8]>;

    /// Clear the next section of the frame. Returns `true` once the whole
    /// frame has been cleared, after which the next call starts a new cycle.
    fn clear_frame_buffer(&mut self) -> bool;

    fn pixel(&mut self, color: RgbColor, x: PixelSignedT, y: PixelSignedT);

    /// Blend one pixel with `mode`.
    fn pixel_blend_mode(&mut self, color: RgbColor, x: PixelSignedT, y: PixelSignedT, mode: BlendMode);

    /// 50/50 mix with the existing pixel.
    fn pixel_blend(&mut self, color: RgbColor, x: PixelSignedT, y: PixelSignedT) {
        self.pixel_blend_mode(color, x, y, BlendMode::Average);
    }

    fn pixel_blend_alpha(&mut self, color: RgbColor, x: PixelSignedT, y: PixelSignedT, alpha: u8) {
        self.pixel_blend_mode(color, x, y, BlendMode::Alpha(alpha));
    }

    fn pixel_blend_add(&mut self, color: RgbColor, x: PixelSignedT, y: PixelSignedT) {
        self.pixel_blend_mode(color, x, y, BlendMode::Add);
    }

    fn pixel_blend_subtract(&mut self, color: RgbColor, x: PixelSignedT, y: PixelSignedT) {
        self.pixel_blend_mode(color, x, y, BlendMode::Subtract);
    }

    fn pixel_blend_multiply(&mut self, color: RgbColor, x: PixelSignedT, y: PixelSignedT) {
        self.pixel_blend_mode(color, x, y, BlendMode::Multiply);
    }

    fn pixel_blend_screen(&mut self, color: RgbColor, x: PixelSignedT, y: PixelSignedT) {
        self.pixel_blend_mode(color, x, y, BlendMode::Screen);
    }

    fn line(
        &mut self,
        color: RgbColor,
        x1: PixelSignedT,
        y1: PixelSignedT,
        x2: PixelSignedT,
        y2: PixelSignedT,
    );

    /// Outline of the rectangle with inclusive corners `(x1, y1)` (top left)
    /// and `(x2, y2)` (bottom right). Inverted corners draw nothing.
    fn rectangle(
        &mut self,
        color: RgbColor,
        x1: PixelSignedT,
        y1: PixelSignedT,
        x2: PixelSignedT,
        y2: PixelSignedT,
    );

    /// Filled rectangle; same corner rules as [`rectangle`](Draw::rectangle).
    fn rectangle_fill(
        &mut self,
        color: RgbColor,
        x1: PixelSignedT,
        y1: PixelSignedT,
        x2: PixelSignedT,
        y2: PixelSignedT,
    );

    /// Triangle outline, one clipped line per edge.
    #[allow(clippy::too_many_arguments)]
    fn triangle(
        &mut self,
        color: RgbColor,
        x1: PixelSignedT,
        y1: PixelSignedT,
        x2: PixelSignedT,
        y2: PixelSignedT,
        x3: PixelSignedT,
        y3: PixelSignedT,
    ) {
        self.line(color, x1, y1, x2, y2);
        self.line(color, x2, y2, x3, y3);
        self.line(color, x3, y3, x1, y1);
    }

    #[allow(clippy::too_many_arguments)]
    fn triangle_fill(
        &mut self,
        color: RgbColor,
        x1: PixelSignedT,
        y1: PixelSignedT,
        x2: PixelSignedT,
        y2: PixelSignedT,
        x3: PixelSignedT,
        y3: PixelSignedT,
    );

    /// Paint the whole frame.
    fn fill(&mut self, color: RgbColor);

    /// Circle outline of radius `r` around `(cx, cy)`. Negative radii draw
    /// nothing.
    fn circle(&mut self, color: RgbColor, cx: PixelSignedT, cy: PixelSignedT, r: PixelSignedT) {
        if r < 0 {
            return;
        }
        let (cx, cy) = (cx as i32, cy as i32);
        for (dx, dy) in QuadrantSteps::new(r as i32) {
            self.pixel(color, saturate_coord(cx + dx), saturate_coord(cy + dy));
            self.pixel(color, saturate_coord(cx + dx), saturate_coord(cy - dy));
            self.pixel(color, saturate_coord(cx - dx), saturate_coord(cy - dy));
            self.pixel(color, saturate_coord(cx - dx), saturate_coord(cy + dy));
        }
    }

    /// Filled circle, one horizontal span per row.
    fn circle_fill(&mut self, color: RgbColor, cx: PixelSignedT, cy: PixelSignedT, r: PixelSignedT) {
        if r < 0 {
            return;
        }
        let (cx, cy) = (cx as i32, cy as i32);
        let span = |this: &mut Self, half: i32, y: i32| {
            this.line(
                color,
                saturate_coord(cx - half),
                saturate_coord(y),
                saturate_coord(cx + half),
                saturate_coord(y),
            );
        };
        // dx only grows while dy climbs toward 0, so the last dx seen on a
        // row is that row's half width.
        let mut row: Option<(i32, i32)> = None;
        for (dx, dy) in QuadrantSteps::new(r as i32) {
            if let Some((dx0, dy0)) = row {
                if dy != dy0 {
                    span(self, dx0, cy + dy0);
                    span(self, dx0, cy - dy0);
                }
            }
            row = Some((dx, dy));
        }
        if let Some((dx0, dy0)) = row {
            span(self, dx0, cy + dy0);
        }
    }
}
