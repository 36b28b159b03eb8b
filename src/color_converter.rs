//! Conversion from [`RgbColor`] to the packed per-format pixel value, and
//! buffer sizing for each format.
//!
//! Converters are stateless unit types; a pixel format names its converter
//! through [`FramePainter::Converter`](crate::painter::FramePainter::Converter).

use core::fmt::Debug;
use core::ops::Not;

use crate::basics::PixelT;
use crate::color::RgbColor;

/// Maps abstract colors to one packed pixel encoding.
pub trait ColorConverter {
    /// Native pixel value stored in the buffer (`color_t`).
    type Raw: Copy + PartialEq + Eq + Debug + Not<Output = Self::Raw>;

    /// Bits per pixel.
    const COLOR_DEPTH: u8;

    /// `true` for single-channel formats (binary and grayscale).
    const MONOCHROME: bool;

    /// Pack `color` into the native representation. Total: every input is valid.
    fn raw_color(color: RgbColor) -> Self::Raw;

    /// Expand a raw value back to 8-bit channels. Channels narrower than
    /// 8 bits are widened by bit replication, so the high bits of the
    /// original channel are recovered exactly.
    fn rgb_color(raw: Self::Raw) -> RgbColor;

    /// Bytes needed for a `width` x `height` frame.
    fn buffer_size(width: PixelT, height: PixelT) -> usize;
}

#[inline]
const fn widen(v: u8, bits: u32) -> u8 {
    let mut out = (v as u32) << (8 - bits);
    let mut filled = bits;
    while filled < 8 {
        out |= out >> filled;
        filled *= 2;
    }
    out as u8
}

// ============================================================================
// 1-bit
// ============================================================================

/// 1 bit per pixel: any non-zero channel lights the pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BinaryConverter;

impl ColorConverter for BinaryConverter {
    type Raw = bool;
    const COLOR_DEPTH: u8 = 1;
    const MONOCHROME: bool = true;

    #[inline]
    fn raw_color(color: RgbColor) -> bool {
        !color.is_black()
    }

    fn rgb_color(raw: bool) -> RgbColor {
        if raw {
            RgbColor::WHITE
        } else {
            RgbColor::BLACK
        }
    }

    /// Pixels are packed in bands of eight rows, one byte per column per band.
    fn buffer_size(width: PixelT, height: PixelT) -> usize {
        width as usize * (height as usize).div_ceil(8)
    }
}

// ============================================================================
// 8-bit 3-3-2
// ============================================================================

/// One byte per pixel, `RRRGGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color8Converter;

impl ColorConverter for Color8Converter {
    type Raw = u8;
    const COLOR_DEPTH: u8 = 8;
    const MONOCHROME: bool = false;

    #[inline]
    fn raw_color(color: RgbColor) -> u8 {
        (color.r() & 0xE0) | ((color.g() >> 5) << 2) | (color.b() >> 6)
    }

    fn rgb_color(raw: u8) -> RgbColor {
        RgbColor::new(
            widen(raw >> 5, 3),
            widen((raw >> 2) & 0x07, 3),
            widen(raw & 0x03, 2),
        )
    }

    fn buffer_size(width: PixelT, height: PixelT) -> usize {
        width as usize * height as usize
    }
}

// ============================================================================
// 8-bit grayscale
// ============================================================================

/// One byte of luminance per pixel (ITU-R BT.709 integer weights).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Grayscale8Converter;

impl ColorConverter for Grayscale8Converter {
    type Raw = u8;
    const COLOR_DEPTH: u8 = 8;
    const MONOCHROME: bool = true;

    #[inline]
    fn raw_color(color: RgbColor) -> u8 {
        ((55u32 * color.r() as u32 + 184u32 * color.g() as u32 + 18u32 * color.b() as u32) >> 8)
            as u8
    }

    fn rgb_color(raw: u8) -> RgbColor {
        RgbColor::new(raw, raw, raw)
    }

    fn buffer_size(width: PixelT, height: PixelT) -> usize {
        width as usize * height as usize
    }
}

// ============================================================================
// 16-bit 5-6-5
// ============================================================================

/// Two bytes per pixel, RGB565.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color16Converter;

impl ColorConverter for Color16Converter {
    type Raw = u16;
    const COLOR_DEPTH: u8 = 16;
    const MONOCHROME: bool = false;

    #[inline]
    fn raw_color(color: RgbColor) -> u16 {
        ((color.r() as u16 >> 3) << 11) | ((color.g() as u16 >> 2) << 5) | (color.b() as u16 >> 3)
    }

    fn rgb_color(raw: u16) -> RgbColor {
        RgbColor::from_rgb565(raw)
    }

    fn buffer_size(width: PixelT, height: PixelT) -> usize {
        width as usize * height as usize * 2
    }
}

// ============================================================================
// 32-bit 8-8-8
// ============================================================================

/// Four bytes per pixel, `0x00RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color32Converter;

impl ColorConverter for Color32Converter {
    type Raw = u32;
    const COLOR_DEPTH: u8 = 32;
    const MONOCHROME: bool = false;

    #[inline]
    fn raw_color(color: RgbColor) -> u32 {
        color.into_u32()
    }

    fn rgb_color(raw: u32) -> RgbColor {
        RgbColor::from_u32(raw)
    }

    fn buffer_size(width: PixelT, height: PixelT) -> usize {
        width as usize * height as usize * 4
    }
}
