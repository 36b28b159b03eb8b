//! 16-bit RGB565 painter for the common SPI color controllers (ST7735,
//! ST7789, SSD1351, GC9A01).
//!
//! Pixels are stored big-endian, which is the byte order these controllers
//! expect on the bus, so the buffer can be pushed without swapping. Blends
//! run on the native 5/6/5-bit channels.

use crate::basics::PixelT;
use crate::blend::{blend_channel, BlendMode};
use crate::color_converter::Color16Converter;
use crate::painter::{pixel_offset, FramePainter, RawTarget, RawView, Sealed};

const BPP: usize = 2;

/// Painter for [`Color16Converter`] frames.
#[derive(Debug, Clone)]
pub struct Color16Painter {
    width: PixelT,
    height: PixelT,
}

impl Color16Painter {
    #[inline]
    fn blend(mode: BlendMode, src: u16, dst: u16) -> u16 {
        let r = blend_channel(mode, (src >> 11) as u8, (dst >> 11) as u8, 5);
        let g = blend_channel(mode, ((src >> 5) & 0x3F) as u8, ((dst >> 5) & 0x3F) as u8, 6);
        let b = blend_channel(mode, (src & 0x1F) as u8, (dst & 0x1F) as u8, 5);
        ((r as u16) << 11) | ((g as u16) << 5) | b as u16
    }

    #[inline]
    fn write_run(bytes: &mut [u8], color: u16) {
        let [hi, lo] = color.to_be_bytes();
        if hi == lo {
            bytes.fill(hi);
        } else {
            for px in bytes.chunks_exact_mut(BPP) {
                px[0] = hi;
                px[1] = lo;
            }
        }
    }
}

impl Sealed for Color16Painter {}

impl FramePainter for Color16Painter {
    type Converter = Color16Converter;

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
    fn pixel_raw(&mut self, target: &mut RawTarget<'_>, color: u16, x: PixelT, y: PixelT) {
        let offset = pixel_offset(self.width, BPP, x, y);
        target.bytes_mut()[offset..offset + BPP].copy_from_slice(&color.to_be_bytes());
    }

    #[inline]
    fn pixel_raw_read(&self, view: RawView<'_>, x: PixelT, y: PixelT) -> u16 {
        let offset = pixel_offset(self.width, BPP, x, y);
        let bytes = view.bytes();
        u16::from_be_bytes([bytes[offset], bytes[offset + 1]])
    }

    fn pixel_raw_blend(
        &mut self,
        target: &mut RawTarget<'_>,
        color: u16,
        x: PixelT,
        y: PixelT,
        mode: BlendMode,
    ) {
        let dst = self.pixel_raw_read(target.view(), x, y);
        self.pixel_raw(target, Self::blend(mode, color, dst), x, y);
    }

    fn line_horizontal_raw(
        &mut self,
        target: &mut RawTarget<'_>,
        color: u16,
        x1: PixelT,
        x2: PixelT,
        y: PixelT,
    ) {
        let start = pixel_offset(self.width, BPP, x1, y);
        let end = pixel_offset(self.width, BPP, x2, y) + BPP;
        Self::write_run(&mut target.bytes_mut()[start..end], color);
    }

    fn line_vertical_raw(
        &mut self,
        target: &mut RawTarget<'_>,
        color: u16,
        x: PixelT,
        y1: PixelT,
        y2: PixelT,
    ) {
        let stride = self.width as usize * BPP;
        let start = pixel_offset(self.width, BPP, x, y1);
        let end = pixel_offset(self.width, BPP, x, y2) + BPP;
        let [hi, lo] = color.to_be_bytes();
        let bytes = &mut target.bytes_mut()[start..end];
        let mut offset = 0;
        while offset < bytes.len() {
            bytes[offset] = hi;
            bytes[offset + 1] = lo;
            offset += stride;
        }
    }

    fn fill_raw(&mut self, target: &mut RawTarget<'_>, color: u16) {
        Self::write_run(target.bytes_mut(), color);
    }
}
