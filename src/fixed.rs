//! Fixed-point sub-pixel arithmetic for the triangle rasterizer.
//!
//! All precision decisions of the fill live here: values carry
//! [`FRAC_BITS`] fractional bits, ratios are quantised by flooring, and
//! conversion back to pixels rounds half up. Flooring to 1/2^FRAC_BITS and
//! then rounding half up gives the same pixel as rounding the exact rational,
//! which is what keeps the fill pixel-exact.

use core::ops::{Add, AddAssign, Sub, SubAssign};

/// Number of fractional bits.
pub const FRAC_BITS: u32 = 8;
/// One whole pixel in fixed-point units.
pub const FRAC_SCALE: i32 = 1 << FRAC_BITS;
/// Mask selecting the fractional part.
pub const FRAC_MASK: i32 = FRAC_SCALE - 1;
const HALF: i32 = FRAC_SCALE >> 1;

/// Signed fixed-point number with [`FRAC_BITS`] fractional bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fixed(i32);

impl Fixed {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(FRAC_SCALE);

    #[inline]
    pub const fn from_int(v: i32) -> Self {
        Self(v << FRAC_BITS)
    }

    /// `num / den`, floored to the fixed-point grid. `den` must be positive.
    #[inline]
    pub fn from_ratio(num: i64, den: i64) -> Self {
        debug_assert!(den > 0);
        Self(((num << FRAC_BITS).div_euclid(den)) as i32)
    }

    /// Largest integer not above the value.
    #[inline]
    pub const fn floor_to_int(self) -> i32 {
        self.0 >> FRAC_BITS
    }

    /// Nearest integer, halves rounding up.
    #[inline]
    pub const fn round_to_int(self) -> i32 {
        Self(self.0 + HALF).floor_to_int()
    }

    /// Fractional part in `0..FRAC_SCALE`.
    #[inline]
    pub const fn fraction(self) -> i32 {
        self.0 & FRAC_MASK
    }

    /// Position of the value inside the rounding cell of
    /// [`round_to_int`](Self::round_to_int): 0 at the cell's left boundary
    /// (`n - 0.5`), approaching [`FRAC_SCALE`] at its right boundary.
    #[inline]
    pub const fn rounding_offset(self) -> i32 {
        (self.0 + HALF) & FRAC_MASK
    }
}

impl Add for Fixed {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Fixed {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Fixed {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Fixed {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}
