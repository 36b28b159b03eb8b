//! Blend modes and the integer channel arithmetic behind them.
//!
//! Channels are blended in the format's native width (3, 5, 6 or 8 bits)
//! with shifts instead of divisions. Additive and subtractive modes saturate
//! explicitly; no mode can wrap around.

use crate::basics::{max_value, min_value};

/// How a source color is combined with the pixel already in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendMode {
    /// 50/50 mix of source and destination.
    Average,
    /// Source weighted by alpha (0 keeps the destination, 255 replaces it).
    Alpha(u8),
    /// Saturating sum.
    Add,
    /// Destination minus source, floored at zero.
    Subtract,
    /// Channel product, normalised to the channel range.
    Multiply,
    /// Inverse of the product of inverses; brightens.
    Screen,
}

impl Default for BlendMode {
    fn default() -> Self {
        BlendMode::Average
    }
}

/// Largest value of a `bits`-wide channel.
#[inline]
pub const fn channel_max(bits: u32) -> u32 {
    (1 << bits) - 1
}

/// Alpha rescaled from `0..=255` to `0..=256` so full alpha is exact.
#[inline]
const fn widen_alpha(alpha: u8) -> i32 {
    alpha as i32 + (alpha as i32 >> 7)
}

#[inline]
fn multiply(s: u32, d: u32, bits: u32) -> u32 {
    (s * (d + 1)) >> bits
}

/// Blend one `bits`-wide channel. `src` and `dst` must already be within
/// `0..=channel_max(bits)`; the result is too.
#[inline]
pub fn blend_channel(mode: BlendMode, src: u8, dst: u8, bits: u32) -> u8 {
    let s = src as u32;
    let d = dst as u32;
    let max = channel_max(bits);
    let out = match mode {
        BlendMode::Average => (s + d) >> 1,
        BlendMode::Alpha(alpha) => {
            let delta = (s as i32 - d as i32) * widen_alpha(alpha);
            (d as i32 + (delta >> 8)) as u32
        }
        BlendMode::Add => min_value(s + d, max),
        BlendMode::Subtract => max_value(d as i32 - s as i32, 0) as u32,
        BlendMode::Multiply => multiply(s, d, bits),
        BlendMode::Screen => max - multiply(max - s, max - d, bits),
    };
    out as u8
}

/// Blend a 1-bit pixel. `coin` decides probabilistic modes: it is asked with
/// the chance (0..=255) that the source bit wins.
#[inline]
pub fn blend_bit(mode: BlendMode, src: bool, dst: bool, coin: impl FnOnce(u8) -> bool) -> bool {
    match mode {
        BlendMode::Average => {
            if src == dst {
                dst
            } else if coin(128) {
                src
            } else {
                dst
            }
        }
        BlendMode::Alpha(alpha) => {
            if src == dst {
                dst
            } else if coin(alpha) {
                src
            } else {
                dst
            }
        }
        BlendMode::Add | BlendMode::Screen => src | dst,
        BlendMode::Subtract => dst & !src,
        BlendMode::Multiply => src & dst,
    }
}
