//! Foundation types shared by every layer: coordinates, points, rectangles
//! and the saturating helpers used by the blend arithmetic.

// ============================================================================
// Coordinates
// ============================================================================

/// Unsigned pixel coordinate / frame dimension.
pub type PixelT = u16;

/// Signed pixel coordinate. Drawing calls accept these so shapes may start
/// or end off-screen; clipping brings them back into the frame.
pub type PixelSignedT = i16;

/// Largest accepted frame dimension. Every on-screen coordinate must also be
/// representable as a [`PixelSignedT`].
pub const MAX_PIXEL_SIZE: PixelT = PixelSignedT::MAX as PixelT;

// ============================================================================
// Point
// ============================================================================

/// A pixel position. `i32` is wide enough to hold any mirrored or rotated
/// [`PixelSignedT`] without overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(PixelSignedT, PixelSignedT)> for Point {
    fn from((x, y): (PixelSignedT, PixelSignedT)) -> Self {
        Self::new(x as i32, y as i32)
    }
}

// ============================================================================
// Rect
// ============================================================================

/// A rectangle defined by two inclusive corner points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect<T: Copy> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T: Copy + PartialOrd> Rect<T> {
    pub const fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Shrink to the intersection with `r`. Returns `false` when nothing
    /// is left.
    pub fn clip(&mut self, r: &Self) -> bool {
        self.x1 = max_value(self.x1, r.x1);
        self.y1 = max_value(self.y1, r.y1);
        self.x2 = min_value(self.x2, r.x2);
        self.y2 = min_value(self.y2, r.y2);
        self.is_valid()
    }

    /// Corners are ordered, so the rectangle covers at least one pixel.
    pub fn is_valid(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    /// Inclusive containment.
    pub fn hit_test(&self, x: T, y: T) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
}

/// Rectangle with `i32` coordinates.
pub type RectI = Rect<i32>;

// ============================================================================
// Saturation
// ============================================================================

/// Smaller of two values.
#[inline]
pub fn min_value<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Larger of two values.
#[inline]
pub fn max_value<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Clamp `v` into `[lo, hi]`.
#[inline]
pub fn clamp_value<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    min_value(max_value(v, lo), hi)
}

/// Narrow an `i32` coordinate to [`PixelSignedT`], saturating at the type's
/// bounds. Saturated values are still far outside any frame, so clipping
/// treats them the same as the original.
#[inline]
pub fn saturate_coord(v: i32) -> PixelSignedT {
    clamp_value(v, PixelSignedT::MIN as i32, PixelSignedT::MAX as i32) as PixelSignedT
}
