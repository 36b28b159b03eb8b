//! Display orientation: rotation and mirroring from logical drawing
//! coordinates to physical panel coordinates.
//!
//! Rotation is applied first (clockwise), then mirroring on the physical
//! axes. The composition is kept as an integer affine matrix, so any
//! orientation maps a point with two multiply-adds per axis, and shapes whose
//! rasterization depends only on vertex positions (lines, triangles) can be
//! mapped vertex by vertex before clipping.

use crate::basics::{PixelT, Point};

// ============================================================================
// Mirror / Rotation
// ============================================================================

/// Coordinate reflection applied after rotation, on the physical axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mirror {
    #[default]
    None,
    X,
    Y,
    XY,
}

impl Mirror {
    #[inline]
    pub const fn flips_x(self) -> bool {
        matches!(self, Mirror::X | Mirror::XY)
    }

    #[inline]
    pub const fn flips_y(self) -> bool {
        matches!(self, Mirror::Y | Mirror::XY)
    }
}

/// Clockwise panel rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Whether the logical frame is the panel turned on its side.
    #[inline]
    pub const fn swaps_axes(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

// ============================================================================
// Orientation
// ============================================================================

/// Logical-to-physical mapping for one panel.
///
/// Stored like an affine matrix with `{-1, 0, 1}` components:
///
/// ```text
///   px = x*sx  + y*shx + tx
///   py = x*shy + y*sy  + ty
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orientation {
    sx: i32,
    shy: i32,
    shx: i32,
    sy: i32,
    tx: i32,
    ty: i32,
    physical_width: PixelT,
    physical_height: PixelT,
}

impl Orientation {
    /// Build the mapping for a `physical_width` x `physical_height` panel.
    pub const fn new(
        physical_width: PixelT,
        physical_height: PixelT,
        rotation: Rotation,
        mirror: Mirror,
    ) -> Self {
        let pw = physical_width as i32 - 1;
        let ph = physical_height as i32 - 1;
        let (sx, shy, shx, sy, tx, ty) = match rotation {
            Rotation::Deg0 => (1, 0, 0, 1, 0, 0),
            // (x, y) -> (pw - y, x)
            Rotation::Deg90 => (0, 1, -1, 0, pw, 0),
            // (x, y) -> (pw - x, ph - y)
            Rotation::Deg180 => (-1, 0, 0, -1, pw, ph),
            // (x, y) -> (y, ph - x)
            Rotation::Deg270 => (0, -1, 1, 0, 0, ph),
        };
        let mut o = Self {
            sx,
            shy,
            shx,
            sy,
            tx,
            ty,
            physical_width,
            physical_height,
        };
        if mirror.flips_x() {
            o.sx = -o.sx;
            o.shx = -o.shx;
            o.tx = pw - o.tx;
        }
        if mirror.flips_y() {
            o.shy = -o.shy;
            o.sy = -o.sy;
            o.ty = ph - o.ty;
        }
        o
    }

    #[inline]
    pub const fn physical_width(&self) -> PixelT {
        self.physical_width
    }

    #[inline]
    pub const fn physical_height(&self) -> PixelT {
        self.physical_height
    }

    /// Width of the frame as seen by drawing calls.
    #[inline]
    pub const fn logical_width(&self) -> PixelT {
        if self.sx == 0 {
            self.physical_height
        } else {
            self.physical_width
        }
    }

    /// Height of the frame as seen by drawing calls.
    #[inline]
    pub const fn logical_height(&self) -> PixelT {
        if self.sx == 0 {
            self.physical_width
        } else {
            self.physical_height
        }
    }

    /// Map a logical point to physical coordinates. Points outside the frame
    /// map to points outside the panel.
    #[inline]
    pub const fn map(&self, p: Point) -> Point {
        Point::new(
            p.x * self.sx + p.y * self.shx + self.tx,
            p.x * self.shy + p.y * self.sy + self.ty,
        )
    }
}
