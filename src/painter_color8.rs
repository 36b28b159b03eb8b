//! 8-bit 3-3-2 color painter (`RRRGGGBB`, one byte per pixel).
//!
//! A single byte holds the whole pixel, so spans and fills are plain
//! `memset`s. Blends work on the native 3-bit red/green and 2-bit blue
//! channels.

use crate::basics::PixelT;
use crate::blend::{blend_channel, BlendMode};
use crate::color_converter::Color8Converter;
use crate::painter::{pixel_offset, FramePainter, RawTarget, RawView, Sealed};

const BPP: usize = 1;

/// Painter for [`Color8Converter`] frames.
#[derive(Debug, Clone)]
pub struct Color8Painter {
    width: PixelT,
    height: PixelT,
}

impl Color8Painter {
    /// Blend two packed 3-3-2 values channel by channel.
    #[inline]
    fn blend(mode: BlendMode, src: u8, dst: u8) -> u8 {
        let r = blend_channel(mode, src >> 5, dst >> 5, 3);
        let g = blend_channel(mode, (src >> 2) & 0x07, (dst >> 2) & 0x07, 3);
        let b = blend_channel(mode, src & 0x03, dst & 0x03, 2);
        (r << 5) | (g << 2) | b
    }
}

impl Sealed for Color8Painter {}

impl FramePainter for Color8Painter {
    type Converter = Color8Converter;

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
        *p = Self::blend(mode, color, *p);
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

    fn fill_raw(&mut self, target: &mut RawTarget<'_>, color: u8) {
        target.bytes_mut().fill(color);
    }
}
