//! 32-bit painter: one `0x00RRGGBB` word per pixel, stored little-endian.
//!
//! Mostly used for host-side previews and RGB888 panels. Blends operate on
//! the three 8-bit channels; the top byte is taken from the source.

use crate::basics::PixelT;
use crate::blend::{blend_channel, BlendMode};
use crate::color_converter::Color32Converter;
use crate::painter::{pixel_offset, FramePainter, RawTarget, RawView, Sealed};

const BPP: usize = 4;

/// Painter for [`Color32Converter`] frames.
#[derive(Debug, Clone)]
pub struct Color32Painter {
    width: PixelT,
    height: PixelT,
}

impl Color32Painter {
    #[inline]
    fn blend(mode: BlendMode, src: u32, dst: u32) -> u32 {
        let [sb, sg, sr, sx] = src.to_le_bytes();
        let [db, dg, dr, _] = dst.to_le_bytes();
        u32::from_le_bytes([
            blend_channel(mode, sb, db, 8),
            blend_channel(mode, sg, dg, 8),
            blend_channel(mode, sr, dr, 8),
            sx,
        ])
    }

    #[inline]
    fn write_run(bytes: &mut [u8], color: u32) {
        let word = color.to_le_bytes();
        if word.iter().all(|&b| b == word[0]) {
            bytes.fill(word[0]);
        } else {
            for px in bytes.chunks_exact_mut(BPP) {
                px.copy_from_slice(&word);
            }
        }
    }
}

impl Sealed for Color32Painter {}

impl FramePainter for Color32Painter {
    type Converter = Color32Converter;

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
    fn pixel_raw(&mut self, target: &mut RawTarget<'_>, color: u32, x: PixelT, y: PixelT) {
        let offset = pixel_offset(self.width, BPP, x, y);
        target.bytes_mut()[offset..offset + BPP].copy_from_slice(&color.to_le_bytes());
    }

    #[inline]
    fn pixel_raw_read(&self, view: RawView<'_>, x: PixelT, y: PixelT) -> u32 {
        let offset = pixel_offset(self.width, BPP, x, y);
        let b = view.bytes();
        u32::from_le_bytes([b[offset], b[offset + 1], b[offset + 2], b[offset + 3]])
    }

    fn pixel_raw_blend(
        &mut self,
        target: &mut RawTarget<'_>,
        color: u32,
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
        color: u32,
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
        color: u32,
        x: PixelT,
        y1: PixelT,
        y2: PixelT,
    ) {
        let stride = self.width as usize * BPP;
        let start = pixel_offset(self.width, BPP, x, y1);
        let end = pixel_offset(self.width, BPP, x, y2) + BPP;
        let word = color.to_le_bytes();
        for px in target.bytes_mut()[start..end].chunks_mut(stride) {
            px[..BPP].copy_from_slice(&word);
        }
    }

    fn fill_raw(&mut self, target: &mut RawTarget<'_>, color: u32) {
        Self::write_run(target.bytes_mut(), color);
    }
}
