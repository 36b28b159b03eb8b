//! Raw pixel painters: the layer that touches buffer bytes.
//!
//! A [`FramePainter`] knows one packed pixel layout and writes pixels, spans
//! and blends straight into the buffer. Raw operations do no bounds checking
//! of their own: coordinates must already be clipped to the painter's
//! physical frame. To keep that contract internal, every raw operation takes
//! a [`RawTarget`], which only this crate can construct; consumers reach the
//! painters exclusively through the checked [`Framebuffer`](crate::framebuffer::Framebuffer).
//!
//! Out-of-range raw calls index past the slice and panic; they cannot corrupt
//! memory.

use crate::basics::PixelT;
use crate::blend::BlendMode;
use crate::color_converter::ColorConverter;

mod sealed {
    pub trait Sealed {}
}

pub(crate) use sealed::Sealed;

/// Raw color type of painter `P`.
pub type RawColor<P> = <<P as FramePainter>::Converter as ColorConverter>::Raw;

// ============================================================================
// RawTarget / RawView
// ============================================================================

/// Exclusive access to a frame's bytes, handed to raw painter operations.
///
/// The slice is exactly [`ColorConverter::buffer_size`] bytes long.
pub struct RawTarget<'b> {
    bytes: &'b mut [u8],
}

impl<'b> RawTarget<'b> {
    #[inline]
    pub(crate) fn new(bytes: &'b mut [u8]) -> Self {
        Self { bytes }
    }

    /// Read-only view of the same bytes.
    #[inline]
    pub(crate) fn view(&self) -> RawView<'_> {
        RawView::new(&*self.bytes)
    }

    #[inline]
    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut *self.bytes
    }
}

/// Shared access to a frame's bytes, for raw reads.
#[derive(Clone, Copy)]
pub struct RawView<'b> {
    bytes: &'b [u8],
}

impl<'b> RawView<'b> {
    #[inline]
    pub(crate) fn new(bytes: &'b [u8]) -> Self {
        Self { bytes }
    }

    #[inline]
    pub(crate) fn bytes(&self) -> &'b [u8] {
        self.bytes
    }
}

// ============================================================================
// FramePainter
// ============================================================================

/// Format-specific raw drawing on a packed byte buffer.
///
/// Coordinates are physical (after mirroring and rotation) and are trusted.
/// Spans are inclusive on both ends with `x1 <= x2` / `y1 <= y2`.
pub trait FramePainter: Sealed + Sized {
    type Converter: ColorConverter;

    /// Create a painter for a `width` x `height` physical frame.
    fn new(width: PixelT, height: PixelT) -> Self;

    fn width(&self) -> PixelT;

    fn height(&self) -> PixelT;

    /// Reseed the dither generator, for formats that have one.
    fn set_dither_seed(&mut self, _seed: u16) {}

    /// Write one pixel.
    fn pixel_raw(&mut self, target: &mut RawTarget<'_>, color: RawColor<Self>, x: PixelT, y: PixelT);

    /// Read one pixel.
    fn pixel_raw_read(&self, view: RawView<'_>, x: PixelT, y: PixelT) -> RawColor<Self>;

    /// Read-modify-write one pixel with `mode`.
    fn pixel_raw_blend(
        &mut self,
        target: &mut RawTarget<'_>,
        color: RawColor<Self>,
        x: PixelT,
        y: PixelT,
        mode: BlendMode,
    );

    /// Write pixels `x1..=x2` of row `y`.
    fn line_horizontal_raw(
        &mut self,
        target: &mut RawTarget<'_>,
        color: RawColor<Self>,
        x1: PixelT,
        x2: PixelT,
        y: PixelT,
    );

    /// Write pixels `y1..=y2` of column `x`.
    fn line_vertical_raw(
        &mut self,
        target: &mut RawTarget<'_>,
        color: RawColor<Self>,
        x: PixelT,
        y1: PixelT,
        y2: PixelT,
    );

    /// Fill the inclusive rectangle row by row.
    fn rectangle_fill_raw(
        &mut self,
        target: &mut RawTarget<'_>,
        color: RawColor<Self>,
        x1: PixelT,
        y1: PixelT,
        x2: PixelT,
        y2: PixelT,
    ) {
        for y in y1..=y2 {
            self.line_horizontal_raw(target, color, x1, x2, y);
        }
    }

    /// Fill the whole frame.
    fn fill_raw(&mut self, target: &mut RawTarget<'_>, color: RawColor<Self>);

    /// Zero (or, when `inverted`, set to all ones) section `index` of
    /// `sections` equal slices of the buffer. The sections partition the
    /// buffer exactly even when `sections` does not divide its length.
    fn clear_raw(&mut self, target: &mut RawTarget<'_>, inverted: bool, sections: usize, index: usize) {
        let bytes = target.bytes_mut();
        let (start, end) = section_bounds(bytes.len(), sections, index);
        bytes[start..end].fill(if inverted { 0xFF } else { 0x00 });
    }
}

/// Byte range `[start, end)` of section `index` out of `sections`.
#[inline]
pub(crate) fn section_bounds(len: usize, sections: usize, index: usize) -> (usize, usize) {
    (len * index / sections, len * (index + 1) / sections)
}

// ============================================================================
// Shared helpers for byte-per-channel-group formats
// ============================================================================

/// Byte offset of pixel (x, y) in a row-major buffer with `bpp` bytes per pixel.
#[inline]
pub(crate) fn pixel_offset(width: PixelT, bpp: usize, x: PixelT, y: PixelT) -> usize {
    (bpp * width as usize) * y as usize + bpp * x as usize
}
