//! 8-bit grayscale painter (one luminance byte per pixel), for SSD1322-style
//! panels.

use crate::basics::PixelT;
use crate::blend::{blend_channel, BlendMode};
use crate::color_converter::Grayscale8Converter;
use crate::painter::{pixel_offset, FramePainter, RawTarget, RawView, Sealed};

const BPP: usize = 1;

/// Painter for [`Grayscale8Converter`] frames.
#[derive(Debug, Clone)]
pub struct Grayscale8Painter {
    width: PixelT,
    height: PixelT,
}

impl Sealed for Grayscale8Painter {}

impl FramePainter for Grayscale8Painter {
    type Converter = Grayscale8Converter;

    fn new(width: PixelT, height: PixelT) -> Self {
        Self { width, height }
    }

    fn width(&self) -> PixelT {
        self.width
    }

    fn height(&self) -> PixelT {
        self.height
    }

    #[inline]
    fn pixel_raw(&mut self, target: &mut RawTarget<'_>, color: u8, x: PixelT, y: PixelT) {
        target.bytes_mut()[pixel_offset(self.width, BPP, x, y)] = color;
    }

    #[inline]
    fn pixel_raw_read(&self, view: RawView<'_>, x: PixelT, y: PixelT) -> u8 {
        view.bytes()[pixel_offset(self.width, BPP, x, y)]
    }

    fn pixel_raw_blend(
        &mut self,
        target: &mut RawTarget<'_>,
        color: u8,
        x: PixelT,
        y: PixelT,
        mode: BlendMode,
    ) {
        let p = &mut target.bytes_mut()[pixel_offset(self.width, BPP, x, y)];
        *p = blend_channel(mode, color, *p, 8);
    }

    fn line_horizontal_raw(
        &mut self,
        target: &mut RawTarget<'_>,
        color: u8,
        x1: PixelT,
        x2: PixelT,
        y: PixelT,
    ) {
        let start = pixel_offset(self.width, BPP, x1, y);
        let end = pixel_offset(self.width, BPP, x2, y);
        target.bytes_mut()[start..=end].fill(color);
    }

    fn line_vertical_raw(
        &mut self,
        target: &mut RawTarget<'_>,
        color: u8,
        x: PixelT,
        y1: PixelT,
        y2: PixelT,
    ) {
        let stride = self.width as usize * BPP;
        let start = pixel_offset(self.width, BPP, x, y1);
        let end = pixel_offset(self.width, BPP, x, y2);
        for p in target.bytes_mut()[start..=end].iter_mut().step_by(stride) {
            *p = color;
        }
    }

    /// Full-width rectangles are one contiguous run.
    fn rectangle_fill_raw(
        &mut self,
        target: &mut RawTarget<'_>,
        color: u8,
        x1: PixelT,
        y1: PixelT,
        x2: PixelT,
        y2: PixelT,
    ) {
        if x1 == 0 && x2 + 1 == self.width {
            let start = pixel_offset(self.width, BPP, 0, y1);
            let end = pixel_offset(self.width, BPP, x2, y2);
            target.bytes_mut()[start..=end].fill(color);
        } else {
            for y in y1..=y2 {
                self.line_horizontal_raw(target, color, x1, x2, y);
            }
        }
    }

    fn fill_raw(&mut self, target: &mut RawTarget<'_>, color: u8) {
        target.bytes_mut().fill(color);
    }
}
