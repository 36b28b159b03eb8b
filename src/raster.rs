//! Shape rasterization in physical panel coordinates.
//!
//! [`Raster`] is the unchecked half of the framebuffer: it is built only by
//! [`Framebuffer`](crate::framebuffer::Framebuffer) after clipping and
//! orientation mapping, and turns lines, rectangles and triangles into
//! sequences of raw painter calls. Lines and rectangles must arrive fully on
//! the panel. Triangles may extend past it; they are clipped per scanline.
//!
//! The triangle fill is a scanline decomposition into flat-bottom and
//! flat-top halves. Each edge is tracked exactly (integer accumulator over a
//! positive denominator) and converted to [`Fixed`] per row, and span ends
//! are rounded half up, so the result is pixel-exact and every row belongs
//! to exactly one half.

use crate::basics::{max_value, min_value, PixelT, Point};
use crate::blend::BlendMode;
use crate::fixed::{Fixed, FRAC_BITS, FRAC_MASK};
use crate::framebuffer::AntiAliasing;
use crate::painter::{FramePainter, RawColor, RawTarget};

// ============================================================================
// EdgeTracker
// ============================================================================

/// Exact x position of a non-horizontal edge, advanced one scanline at a time.
#[derive(Debug, Clone, Copy)]
struct EdgeTracker {
    x0: i32,
    dx: i64,
    dy: i64,
    /// `(row - from.y) * dx`
    acc: i64,
}

impl EdgeTracker {
    /// Edge `from`-`to` with `from.y < to.y`, positioned at scanline `row`.
    #[inline]
    fn new(from: Point, to: Point, row: i32) -> Self {
        debug_assert!(from.y < to.y);
        let dx = (to.x - from.x) as i64;
        Self {
            x0: from.x,
            dx,
            dy: (to.y - from.y) as i64,
            acc: (row - from.y) as i64 * dx,
        }
    }

    #[inline]
    fn x(&self) -> Fixed {
        Fixed::from_int(self.x0) + Fixed::from_ratio(self.acc, self.dy)
    }

    #[inline]
    fn step(&mut self) {
        self.acc += self.dx;
    }
}

#[inline]
fn sort_by_y(a: Point, b: Point, c: Point) -> (Point, Point, Point) {
    let (mut a, mut b, mut c) = (a, b, c);
    if a.y > b.y {
        core::mem::swap(&mut a, &mut b);
    }
    if b.y > c.y {
        core::mem::swap(&mut b, &mut c);
    }
    if a.y > b.y {
        core::mem::swap(&mut a, &mut b);
    }
    (a, b, c)
}

/// Coverage `0..=FRAC_MASK` scaled to a fringe alpha in `0..255`.
#[inline]
fn fringe_alpha(coverage: i32) -> u8 {
    ((coverage * 255) >> FRAC_BITS) as u8
}

// ============================================================================
// Raster
// ============================================================================

/// Raw drawing session over one attached buffer.
pub(crate) struct Raster<'r, P: FramePainter> {
    painter: &'r mut P,
    target: RawTarget<'r>,
    width: i32,
    height: i32,
    anti_aliasing: AntiAliasing,
    /// Colors arrive already complemented and the buffer stores complements.
    inverted: bool,
}

impl<'r, P: FramePainter> Raster<'r, P> {
    /// `bytes` must be exactly the painter's buffer size.
    pub(crate) fn new(
        painter: &'r mut P,
        bytes: &'r mut [u8],
        anti_aliasing: AntiAliasing,
        inverted: bool,
    ) -> Self {
        let width = painter.width() as i32;
        let height = painter.height() as i32;
        Self {
            painter,
            target: RawTarget::new(bytes),
            width,
            height,
            anti_aliasing,
            inverted,
        }
    }

    #[inline]
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    #[inline]
    pub(crate) fn pixel(&mut self, color: RawColor<P>, p: Point) {
        self.painter
            .pixel_raw(&mut self.target, color, p.x as PixelT, p.y as PixelT);
    }

    /// Blend in the drawn color domain. On an inverted buffer the stored
    /// pixel is complemented back, blended with the original color, and the
    /// result complemented again.
    #[inline]
    pub(crate) fn pixel_blend(&mut self, color: RawColor<P>, p: Point, mode: BlendMode) {
        let (x, y) = (p.x as PixelT, p.y as PixelT);
        if !self.inverted {
            self.painter
                .pixel_raw_blend(&mut self.target, color, x, y, mode);
            return;
        }
        let stored = self.painter.pixel_raw_read(self.target.view(), x, y);
        self.painter.pixel_raw(&mut self.target, !stored, x, y);
        self.painter
            .pixel_raw_blend(&mut self.target, !color, x, y, mode);
        let blended = self.painter.pixel_raw_read(self.target.view(), x, y);
        self.painter.pixel_raw(&mut self.target, !blended, x, y);
    }

    /// Blend only if (x, y) is on the panel. Anti-aliasing fringes use this.
    #[inline]
    fn blend_checked(&mut self, color: RawColor<P>, x: i32, y: i32, mode: BlendMode) {
        if self.contains(x, y) {
            self.pixel_blend(color, Point::new(x, y), mode);
        }
    }

    pub(crate) fn fill(&mut self, color: RawColor<P>) {
        self.painter.fill_raw(&mut self.target, color);
    }

    pub(crate) fn clear(&mut self, sections: usize, index: usize) {
        self.painter
            .clear_raw(&mut self.target, self.inverted, sections, index);
    }

    // ------------------------------------------------------------------------
    // Lines and rectangles
    // ------------------------------------------------------------------------

    #[inline]
    pub(crate) fn hline(&mut self, color: RawColor<P>, x1: i32, x2: i32, y: i32) {
        let (l, r) = (min_value(x1, x2), max_value(x1, x2));
        self.painter.line_horizontal_raw(
            &mut self.target,
            color,
            l as PixelT,
            r as PixelT,
            y as PixelT,
        );
    }

    #[inline]
    pub(crate) fn vline(&mut self, color: RawColor<P>, x: i32, y1: i32, y2: i32) {
        let (t, b) = (min_value(y1, y2), max_value(y1, y2));
        self.painter.line_vertical_raw(
            &mut self.target,
            color,
            x as PixelT,
            t as PixelT,
            b as PixelT,
        );
    }

    /// Segment between two on-panel points, degenerating to a pixel or an
    /// axis-aligned run when possible.
    pub(crate) fn line(&mut self, color: RawColor<P>, p0: Point, p1: Point) {
        if p0 == p1 {
            self.pixel(color, p0);
        } else if p0.x == p1.x {
            self.vline(color, p0.x, p0.y, p1.y);
        } else if p0.y == p1.y {
            self.hline(color, p0.x, p1.x, p0.y);
        } else {
            self.bresenham_diagonal(color, p0, p1);
        }
    }

    /// Filled rectangle between two on-panel corners, in any order.
    pub(crate) fn rectangle_fill(&mut self, color: RawColor<P>, a: Point, b: Point) {
        let (x1, x2) = (min_value(a.x, b.x), max_value(a.x, b.x));
        let (y1, y2) = (min_value(a.y, b.y), max_value(a.y, b.y));
        if x1 == x2 || y1 == y2 {
            self.line(color, Point::new(x1, y1), Point::new(x2, y2));
        } else {
            self.painter.rectangle_fill_raw(
                &mut self.target,
                color,
                x1 as PixelT,
                y1 as PixelT,
                x2 as PixelT,
                y2 as PixelT,
            );
        }
    }

    fn bresenham_diagonal(&mut self, color: RawColor<P>, p0: Point, p1: Point) {
        if (p1.x - p0.x).abs() >= (p1.y - p0.y).abs() {
            if p0.x <= p1.x {
                self.bresenham_right(color, p0, p1);
            } else {
                self.bresenham_right(color, p1, p0);
            }
        } else if p0.y <= p1.y {
            self.bresenham_up(color, p0, p1);
        } else {
            self.bresenham_up(color, p1, p0);
        }
    }

    /// x-major walk with `from.x < to.x`; one pixel per column.
    fn bresenham_right(&mut self, color: RawColor<P>, from: Point, to: Point) {
        let dx = to.x - from.x;
        let (dy, step) = if to.y >= from.y {
            (to.y - from.y, 1)
        } else {
            (from.y - to.y, -1)
        };
        let bias = 2 * dy - dx;
        let mut d = bias;
        let mut y = from.y;
        for x in from.x..=to.x {
            self.pixel(color, Point::new(x, y));
            if self.anti_aliasing != AntiAliasing::None {
                // d - bias is 2*dx times the true line's offset from y
                let offset = d - bias;
                if offset != 0 {
                    self.blend_checked(color, x, y + offset.signum() * step, BlendMode::Average);
                }
            }
            if d > 0 {
                y += step;
                d -= 2 * dx;
            }
            d += 2 * dy;
        }
    }

    /// y-major walk with `from.y < to.y`; one pixel per row.
    fn bresenham_up(&mut self, color: RawColor<P>, from: Point, to: Point) {
        let dy = to.y - from.y;
        let (dx, step) = if to.x >= from.x {
            (to.x - from.x, 1)
        } else {
            (from.x - to.x, -1)
        };
        let bias = 2 * dx - dy;
        let mut d = bias;
        let mut x = from.x;
        for y in from.y..=to.y {
            self.pixel(color, Point::new(x, y));
            if self.anti_aliasing != AntiAliasing::None {
                let offset = d - bias;
                if offset != 0 {
                    self.blend_checked(color, x + offset.signum() * step, y, BlendMode::Average);
                }
            }
            if d > 0 {
                x += step;
                d -= 2 * dy;
            }
            d += 2 * dx;
        }
    }

    // ------------------------------------------------------------------------
    // Triangles
    // ------------------------------------------------------------------------

    /// Filled triangle. Vertices may lie anywhere; only on-panel pixels are
    /// written.
    pub(crate) fn triangle_fill(&mut self, color: RawColor<P>, a: Point, b: Point, c: Point) {
        let (top, mid, bottom) = sort_by_y(a, b, c);
        self.triangle_y_ordered_fill(color, top, mid, bottom);
    }

    fn triangle_y_ordered_fill(&mut self, color: RawColor<P>, top: Point, mid: Point, bottom: Point) {
        if top.y == bottom.y {
            if (0..self.height).contains(&top.y) {
                let l = min_value(top.x, min_value(mid.x, bottom.x));
                let r = max_value(top.x, max_value(mid.x, bottom.x));
                self.span(color, Fixed::from_int(l), Fixed::from_int(r), top.y);
            }
        } else if mid.y == bottom.y {
            self.flat_bottom_fill(color, top, mid, bottom, bottom.y);
        } else if top.y == mid.y {
            self.flat_top_fill(color, top, mid, bottom, top.y);
        } else {
            // The long edge top-bottom meets row mid.y at the split vertex.
            // Both halves track that edge from its real endpoints, so the
            // split vertex is never rounded and the halves meet without a seam.
            self.flat_bottom_fill(color, top, mid, bottom, mid.y);
            self.flat_top_fill(color, mid, top, bottom, mid.y + 1);
        }
    }

    /// Rows `apex.y..=last_row` between edges `apex`-`e1` and `apex`-`e2`.
    fn flat_bottom_fill(&mut self, color: RawColor<P>, apex: Point, e1: Point, e2: Point, last_row: i32) {
        let first = max_value(apex.y, 0);
        let last = min_value(last_row, self.height - 1);
        if first > last {
            return;
        }
        let left = EdgeTracker::new(apex, e1, first);
        let right = EdgeTracker::new(apex, e2, first);
        self.fill_rows(color, left, right, first, last);
    }

    /// Rows `first_row..=apex.y` between edges `s1`-`apex` and `s2`-`apex`.
    fn flat_top_fill(&mut self, color: RawColor<P>, s1: Point, s2: Point, apex: Point, first_row: i32) {
        let first = max_value(first_row, 0);
        let last = min_value(apex.y, self.height - 1);
        if first > last {
            return;
        }
        let left = EdgeTracker::new(s1, apex, first);
        let right = EdgeTracker::new(s2, apex, first);
        self.fill_rows(color, left, right, first, last);
    }

    fn fill_rows(&mut self, color: RawColor<P>, mut e1: EdgeTracker, mut e2: EdgeTracker, first: i32, last: i32) {
        for y in first..=last {
            let (x1, x2) = (e1.x(), e2.x());
            if x1 <= x2 {
                self.span(color, x1, x2, y);
            } else {
                self.span(color, x2, x1, y);
            }
            e1.step();
            e2.step();
        }
    }

    /// One scanline between exact edge positions `xl <= xr` on on-panel row
    /// `y`. Spans entirely off either side are skipped.
    fn span(&mut self, color: RawColor<P>, xl: Fixed, xr: Fixed, y: i32) {
        let l = xl.round_to_int();
        let r = xr.round_to_int();
        if r < 0 || l >= self.width {
            return;
        }
        let left_clamped = l < 0;
        let right_clamped = r >= self.width;
        let l = max_value(l, 0);
        let r = min_value(r, self.width - 1);
        if l == r {
            self.pixel(color, Point::new(l, y));
        } else {
            self.hline(color, l, r, y);
        }

        match self.anti_aliasing {
            AntiAliasing::None => {}
            AntiAliasing::EdgeBlend => {
                if !left_clamped {
                    self.blend_checked(color, l - 1, y, BlendMode::Average);
                }
                if !right_clamped {
                    self.blend_checked(color, r + 1, y, BlendMode::Average);
                }
            }
            AntiAliasing::PixelCoverage => {
                // The closer an edge sits to the outer side of its end
                // pixel's rounding cell, the stronger the exterior neighbour.
                // The neighbour is never fully covered, so alpha stays below 255.
                if !left_clamped {
                    let alpha = fringe_alpha(FRAC_MASK - xl.rounding_offset());
                    if alpha > 0 {
                        self.blend_checked(color, l - 1, y, BlendMode::Alpha(alpha));
                    }
                }
                if !right_clamped {
                    let alpha = fringe_alpha(xr.rounding_offset());
                    if alpha > 0 {
                        self.blend_checked(color, r + 1, y, BlendMode::Alpha(alpha));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_converter::{ColorConverter, Grayscale8Converter};
    use crate::painter_gray8::Grayscale8Painter;
    use proptest::prelude::*;

    const ON: u8 = 255;

    fn canvas(w: PixelT, h: PixelT) -> (Grayscale8Painter, Vec<u8>) {
        (
            Grayscale8Painter::new(w, h),
            vec![0u8; Grayscale8Converter::buffer_size(w, h)],
        )
    }

    fn draw(w: PixelT, h: PixelT, aa: AntiAliasing, f: impl FnOnce(&mut Raster<'_, Grayscale8Painter>)) -> Vec<u8> {
        let (mut painter, mut buf) = canvas(w, h);
        {
            let mut raster = Raster::new(&mut painter, &mut buf, aa, false);
            f(&mut raster);
        }
        buf
    }

    fn lit(buf: &[u8]) -> usize {
        buf.iter().filter(|&&b| b == ON).count()
    }

    /// Independent scan conversion: per row, round every edge crossing half
    /// up (both ends for horizontal edges) and span min..=max.
    fn reference(pts: [Point; 3], w: i32, h: i32) -> Vec<u8> {
        let mut out = vec![0u8; (w * h) as usize];
        let edges = [(pts[0], pts[1]), (pts[1], pts[2]), (pts[2], pts[0])];
        for y in 0..h {
            let mut xs = Vec::new();
            for (a, b) in edges {
                if a.y == b.y {
                    if a.y == y {
                        xs.push(a.x as i64);
                        xs.push(b.x as i64);
                    }
                    continue;
                }
                let (a, b) = if a.y < b.y { (a, b) } else { (b, a) };
                if (a.y..=b.y).contains(&y) {
                    let num = (y - a.y) as i64 * (b.x - a.x) as i64;
                    let den = (b.y - a.y) as i64;
                    xs.push(a.x as i64 + (2 * num + den).div_euclid(2 * den));
                }
            }
            let (Some(&l), Some(&r)) = (xs.iter().min(), xs.iter().max()) else {
                continue;
            };
            for x in max_value(l, 0)..=min_value(r, w as i64 - 1) {
                out[(y * w) as usize + x as usize] = ON;
            }
        }
        out
    }

    fn at(buf: &[u8], w: usize, x: usize, y: usize) -> u8 {
        buf[y * w + x]
    }

    #[test]
    fn test_diagonal_staircase() {
        let buf = draw(8, 8, AntiAliasing::None, |r| {
            r.line(ON, Point::new(0, 0), Point::new(7, 7))
        });
        assert_eq!(lit(&buf), 8);
        for i in 0..8 {
            assert_eq!(at(&buf, 8, i, i), ON);
        }
    }

    #[test]
    fn test_shallow_line_one_pixel_per_column() {
        let buf = draw(10, 4, AntiAliasing::None, |r| {
            r.line(ON, Point::new(9, 3), Point::new(0, 0))
        });
        assert_eq!(lit(&buf), 10);
        let mut last_y = 0;
        for x in 0..10 {
            let ys: Vec<usize> = (0..4).filter(|&y| at(&buf, 10, x, y) == ON).collect();
            assert_eq!(ys.len(), 1, "column {}", x);
            assert!(ys[0] >= last_y);
            last_y = ys[0];
        }
        assert_eq!(at(&buf, 10, 0, 0), ON);
        assert_eq!(at(&buf, 10, 9, 3), ON);
    }

    #[test]
    fn test_steep_line_one_pixel_per_row() {
        let buf = draw(4, 10, AntiAliasing::None, |r| {
            r.line(ON, Point::new(3, 0), Point::new(0, 9))
        });
        assert_eq!(lit(&buf), 10);
        for y in 0..10 {
            assert_eq!((0..4).filter(|&x| at(&buf, 4, x, y) == ON).count(), 1);
        }
        assert_eq!(at(&buf, 4, 3, 0), ON);
        assert_eq!(at(&buf, 4, 0, 9), ON);
    }

    #[test]
    fn test_line_edge_blend() {
        let buf = draw(8, 4, AntiAliasing::EdgeBlend, |r| {
            r.line(ON, Point::new(0, 0), Point::new(7, 2))
        });
        assert_eq!(lit(&buf), 8);
        let fringe = buf.iter().filter(|&&b| b == ON / 2).count();
        assert!(fringe > 0);
        assert!(buf.iter().all(|&b| b == 0 || b == ON || b == ON / 2));
    }

    #[test]
    fn test_exact_diagonal_has_no_fringe() {
        let buf = draw(6, 6, AntiAliasing::EdgeBlend, |r| {
            r.line(ON, Point::new(0, 5), Point::new(5, 0))
        });
        assert_eq!(lit(&buf), 6);
        assert_eq!(buf.iter().filter(|&&b| b != 0).count(), 6);
    }

    #[test]
    fn test_rectangle_fill_degenerates() {
        let buf = draw(6, 6, AntiAliasing::None, |r| {
            r.rectangle_fill(ON, Point::new(4, 1), Point::new(1, 3));
            r.rectangle_fill(ON, Point::new(5, 5), Point::new(5, 5));
            r.rectangle_fill(ON, Point::new(0, 5), Point::new(3, 5));
        });
        assert_eq!(lit(&buf), 12 + 1 + 4);
    }

    #[test]
    fn test_triangle_lower_left() {
        let buf = draw(8, 8, AntiAliasing::None, |r| {
            r.triangle_fill(ON, Point::new(0, 0), Point::new(7, 0), Point::new(0, 7))
        });
        assert_eq!(lit(&buf), 36);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(at(&buf, 8, x, y) == ON, x + y <= 7, "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_triangle_vertex_order_irrelevant() {
        let pts = [Point::new(1, 2), Point::new(13, 6), Point::new(4, 14)];
        let orders = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
        let first = draw(16, 16, AntiAliasing::None, |r| r.triangle_fill(ON, pts[0], pts[1], pts[2]));
        for [a, b, c] in orders {
            let buf = draw(16, 16, AntiAliasing::None, |r| r.triangle_fill(ON, pts[a], pts[b], pts[c]));
            assert_eq!(buf, first);
        }
        assert_eq!(first, reference(pts, 16, 16));
    }

    #[test]
    fn test_degenerate_triangles() {
        let buf = draw(8, 8, AntiAliasing::None, |r| {
            r.triangle_fill(ON, Point::new(1, 3), Point::new(6, 3), Point::new(4, 3))
        });
        assert_eq!(lit(&buf), 6);

        let buf = draw(8, 8, AntiAliasing::None, |r| {
            r.triangle_fill(ON, Point::new(2, 2), Point::new(2, 2), Point::new(2, 2))
        });
        assert_eq!(lit(&buf), 1);
        assert_eq!(at(&buf, 8, 2, 2), ON);
    }

    #[test]
    fn test_triangle_far_off_panel() {
        let buf = draw(8, 8, AntiAliasing::None, |r| {
            r.triangle_fill(ON, Point::new(-40, -40), Point::new(-20, 30), Point::new(-10, 50));
            r.triangle_fill(ON, Point::new(20, -3), Point::new(40, 4), Point::new(30, 20));
        });
        assert_eq!(lit(&buf), 0);
    }

    #[test]
    fn test_triangle_covering_panel() {
        let buf = draw(8, 8, AntiAliasing::EdgeBlend, |r| {
            r.triangle_fill(ON, Point::new(-100, -100), Point::new(200, -100), Point::new(-100, 200))
        });
        assert_eq!(lit(&buf), 64);
    }

    #[test]
    fn test_triangle_edge_blend_fringe() {
        let buf = draw(16, 16, AntiAliasing::EdgeBlend, |r| {
            r.triangle_fill(ON, Point::new(8, 1), Point::new(14, 13), Point::new(2, 11))
        });
        let pts = [Point::new(8, 1), Point::new(14, 13), Point::new(2, 11)];
        let solid = reference(pts, 16, 16);
        for (i, (&got, &want)) in buf.iter().zip(solid.iter()).enumerate() {
            if want == ON {
                assert_eq!(got, ON, "pixel {}", i);
            } else {
                assert!(got == 0 || got == ON / 2, "pixel {} = {}", i, got);
            }
        }
        assert!(buf.iter().any(|&b| b == ON / 2));
    }

    #[test]
    fn test_triangle_pixel_coverage_alpha() {
        // right edge x = y / 2
        let buf = draw(8, 10, AntiAliasing::PixelCoverage, |r| {
            r.triangle_fill(ON, Point::new(0, 0), Point::new(0, 8), Point::new(4, 8))
        });
        // row 1: edge at 0.5, left boundary of pixel 1's cell: no fringe
        assert_eq!(at(&buf, 8, 2, 1), 0);
        // row 2: edge exactly on pixel 1's center: half coverage
        assert_eq!(at(&buf, 8, 2, 2), 126);
        assert_eq!(at(&buf, 8, 1, 2), ON);
    }

    #[test]
    fn test_pixel_coverage_fringe_never_solid() {
        // left edge x = 4 - y / 2 sits on a half pixel at odd rows
        let buf = draw(8, 10, AntiAliasing::PixelCoverage, |r| {
            r.triangle_fill(ON, Point::new(4, 0), Point::new(4, 8), Point::new(0, 8))
        });
        assert_eq!(at(&buf, 8, 4, 1), ON);
        for (x, y) in [(3, 1), (2, 3), (1, 5), (0, 7)] {
            assert_eq!(at(&buf, 8, x, y), 254, "({x}, {y})");
            assert_eq!(at(&buf, 8, x + 1, y), ON, "({x}, {y})");
        }
    }

    proptest! {
        #[test]
        fn triangle_fill_matches_reference(
            ax in -6i32..22, ay in -6i32..22,
            bx in -6i32..22, by in -6i32..22,
            cx in -6i32..22, cy in -6i32..22,
        ) {
            let pts = [Point::new(ax, ay), Point::new(bx, by), Point::new(cx, cy)];
            let buf = draw(16, 16, AntiAliasing::None, |r| r.triangle_fill(ON, pts[0], pts[1], pts[2]));
            prop_assert_eq!(buf, reference(pts, 16, 16));
        }

        #[test]
        fn lines_touch_both_endpoints(x0 in 0i32..20, y0 in 0i32..12, x1 in 0i32..20, y1 in 0i32..12) {
            let buf = draw(20, 12, AntiAliasing::None, |r| {
                r.line(ON, Point::new(x0, y0), Point::new(x1, y1))
            });
            prop_assert_eq!(at(&buf, 20, x0 as usize, y0 as usize), ON);
            prop_assert_eq!(at(&buf, 20, x1 as usize, y1 as usize), ON);
            let major = max_value((x1 - x0).abs(), (y1 - y0).abs()) as usize + 1;
            prop_assert_eq!(lit(&buf), major);
        }
    }
}
