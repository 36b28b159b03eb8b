//! Clipping of lines and rectangles against the frame.
//!
//! Lines use Cohen-Sutherland: each endpoint gets a 4-bit outcode saying on
//! which side of the clip box it lies; segments are trivially accepted,
//! trivially rejected, or shortened one boundary at a time with exact
//! integer intersection.

use crate::basics::{Point, RectI};

// ============================================================================
// Outcodes
// ============================================================================

pub const OUT_INSIDE: u8 = 0;
pub const OUT_LEFT: u8 = 1;
pub const OUT_RIGHT: u8 = 2;
pub const OUT_TOP: u8 = 4;
pub const OUT_BOTTOM: u8 = 8;

/// Cohen-Sutherland outcode of `p` against the inclusive `clip_box`.
///
/// ```text
///        |        |
///  0101  |  0100  | 0110
///        |        |
/// -------+--------+-------- clip_box.y1
///        |        |
///  0001  |  0000  | 0010
///        |        |
/// -------+--------+-------- clip_box.y2
///        |        |
///  1001  |  1000  | 1010
///        |        |
///  clip_box.x1  clip_box.x2
/// ```
#[inline]
pub fn outcode(p: Point, clip_box: &RectI) -> u8 {
    let mut code = OUT_INSIDE;
    if p.x < clip_box.x1 {
        code |= OUT_LEFT;
    } else if p.x > clip_box.x2 {
        code |= OUT_RIGHT;
    }
    if p.y < clip_box.y1 {
        code |= OUT_TOP;
    } else if p.y > clip_box.y2 {
        code |= OUT_BOTTOM;
    }
    code
}

/// `a + (b - a) * num / den`, with a 64-bit intermediate. Truncates toward
/// `a`, so the result always lies between `a` and `b`.
#[inline]
fn interpolate(a: i32, b: i32, num: i32, den: i32) -> i32 {
    a + ((b as i64 - a as i64) * num as i64 / den as i64) as i32
}

/// Clip the segment `p0`-`p1` to `clip_box` in place.
///
/// Returns `false` when no part of the segment is inside; the points are then
/// left in an unspecified state. Segments already inside are not modified.
pub fn clip_line(p0: &mut Point, p1: &mut Point, clip_box: &RectI) -> bool {
    let mut code0 = outcode(*p0, clip_box);
    let mut code1 = outcode(*p1, clip_box);

    // Each pass pins one endpoint to one boundary; four passes always suffice.
    for _ in 0..8 {
        if code0 | code1 == OUT_INSIDE {
            return true;
        }
        if code0 & code1 != OUT_INSIDE {
            return false;
        }

        let first = code0 != OUT_INSIDE;
        let code = if first { code0 } else { code1 };
        let (a, b) = (*p0, *p1);
        let dx = b.x - a.x;
        let dy = b.y - a.y;

        let clipped = if code & (OUT_TOP | OUT_BOTTOM) != 0 {
            if dy == 0 {
                return false;
            }
            let y = if code & OUT_TOP != 0 { clip_box.y1 } else { clip_box.y2 };
            Point::new(interpolate(a.x, b.x, y - a.y, dy), y)
        } else {
            if dx == 0 {
                return false;
            }
            let x = if code & OUT_LEFT != 0 { clip_box.x1 } else { clip_box.x2 };
            Point::new(x, interpolate(a.y, b.y, x - a.x, dx))
        };

        if first {
            *p0 = clipped;
            code0 = outcode(clipped, clip_box);
        } else {
            *p1 = clipped;
            code1 = outcode(clipped, clip_box);
        }
    }
    false
}

/// Clip the inclusive rectangle `top_left`-`bottom_right` to `clip_box`.
///
/// Returns `false` for inverted corners or a rectangle entirely outside on
/// either axis. Otherwise clamps both corners into the box and returns `true`.
pub fn clip_rectangle(top_left: &mut Point, bottom_right: &mut Point, clip_box: &RectI) -> bool {
    let mut r = RectI::new(top_left.x, top_left.y, bottom_right.x, bottom_right.y);
    if !r.is_valid() || !r.clip(clip_box) {
        return false;
    }
    *top_left = Point::new(r.x1, r.y1);
    *bottom_right = Point::new(r.x2, r.y2);
    true
}
