//! 1-bit painter for monochrome OLED controllers (SSD1306, SH1106 and kin).
//!
//! The buffer is split into bands of eight rows. Each band stores one byte
//! per column; bit `y % 8` of byte `width * (y / 8) + x` is pixel (x, y),
//! with bit 0 the band's top row. Blends that need partial intensity are
//! dithered with an [`AlphaRng`].

use crate::basics::PixelT;
use crate::blend::{blend_bit, BlendMode};
use crate::color_converter::BinaryConverter;
use crate::dither::AlphaRng;
use crate::painter::{FramePainter, RawTarget, RawView, Sealed};

/// Painter for [`BinaryConverter`] frames.
#[derive(Debug, Clone)]
pub struct BinaryPainter {
    width: PixelT,
    height: PixelT,
    rng: AlphaRng,
}

impl BinaryPainter {
    #[inline]
    fn offset(&self, x: PixelT, y: PixelT) -> usize {
        self.width as usize * (y as usize >> 3) + x as usize
    }

    /// Bits of band byte covering rows `y1..=y2`, both inside the same band.
    #[inline]
    fn band_mask(y1: PixelT, y2: PixelT) -> u8 {
        let lo = (y1 & 7) as u32;
        let hi = (y2 & 7) as u32;
        ((0xFFu32 << lo) & (0xFFu32 >> (7 - hi))) as u8
    }

    #[inline]
    fn apply(byte: &mut u8, mask: u8, on: bool) {
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }
}

impl Sealed for BinaryPainter {}

impl FramePainter for BinaryPainter {
    type Converter = BinaryConverter;

    fn new(width: PixelT, height: PixelT) -> Self {
        Self {
            width,
            height,
            rng: AlphaRng::default(),
        }
    }

    fn width(&self) -> PixelT {
        self.width
    }

    fn height(&self) -> PixelT {
        self.height
    }

    fn set_dither_seed(&mut self, seed: u16) {
        self.rng.reseed(seed);
    }

    #[inline]
    fn pixel_raw(&mut self, target: &mut RawTarget<'_>, color: bool, x: PixelT, y: PixelT) {
        let offset = self.offset(x, y);
        Self::apply(&mut target.bytes_mut()[offset], 1 << (y & 7), color);
    }

    #[inline]
    fn pixel_raw_read(&self, view: RawView<'_>, x: PixelT, y: PixelT) -> bool {
        view.bytes()[self.offset(x, y)] & (1 << (y & 7)) != 0
    }

    fn pixel_raw_blend(
        &mut self,
        target: &mut RawTarget<'_>,
        color: bool,
        x: PixelT,
        y: PixelT,
        mode: BlendMode,
    ) {
        let dst = self.pixel_raw_read(target.view(), x, y);
        let rng = &mut self.rng;
        let out = blend_bit(mode, color, dst, |chance| rng.chance(chance));
        if out != dst {
            self.pixel_raw(target, out, x, y);
        }
    }

    fn line_horizontal_raw(
        &mut self,
        target: &mut RawTarget<'_>,
        color: bool,
        x1: PixelT,
        x2: PixelT,
        y: PixelT,
    ) {
        let start = self.offset(x1, y);
        let end = self.offset(x2, y);
        let mask = 1u8 << (y & 7);
        for byte in &mut target.bytes_mut()[start..=end] {
            Self::apply(byte, mask, color);
        }
    }

    fn line_vertical_raw(
        &mut self,
        target: &mut RawTarget<'_>,
        color: bool,
        x: PixelT,
        y1: PixelT,
        y2: PixelT,
    ) {
        let bytes = target.bytes_mut();
        let mut y = y1;
        loop {
            let band_end = (y | 7).min(y2);
            let offset = self.offset(x, y);
            Self::apply(&mut bytes[offset], Self::band_mask(y, band_end), color);
            if band_end == y2 {
                break;
            }
            y = band_end + 1;
        }
    }

    /// Whole bands are written one byte per column instead of one bit per pixel.
    fn rectangle_fill_raw(
        &mut self,
        target: &mut RawTarget<'_>,
        color: bool,
        x1: PixelT,
        y1: PixelT,
        x2: PixelT,
        y2: PixelT,
    ) {
        let bytes = target.bytes_mut();
        let mut y = y1;
        loop {
            let band_end = (y | 7).min(y2);
            let mask = Self::band_mask(y, band_end);
            let start = self.offset(x1, y);
            let end = self.offset(x2, y);
            for byte in &mut bytes[start..=end] {
                Self::apply(byte, mask, color);
            }
            if band_end == y2 {
                break;
            }
            y = band_end + 1;
        }
    }

    fn fill_raw(&mut self, target: &mut RawTarget<'_>, color: bool) {
        target.bytes_mut().fill(if color { 0xFF } else { 0x00 });
    }
}
