//! Bresenham stepping around one quadrant of an ellipse.
//!
//! [`QuadrantSteps`] walks the pixel positions of the upper-right quadrant
//! relative to the center, from `(0, -ry)` to `(rx, 0)`, moving at most one
//! pixel on each axis per step. Callers mirror the offsets into the other
//! three quadrants. Error terms are `i64`, so any radius that fits a pixel
//! coordinate is safe.

// ============================================================================
// QuadrantSteps
// ============================================================================

/// Iterator over `(dx, dy)` offsets of one ellipse quadrant, `dy <= 0`.
///
/// The first item is the top point `(0, -ry)` and the last is the first
/// offset reaching `dy == 0`.
#[derive(Debug, Clone)]
pub struct QuadrantSteps {
    rx2: i64,
    ry2: i64,
    inc_x: i64,
    inc_y: i64,
    cur_f: i64,
    dx: i32,
    dy: i32,
    started: bool,
    finished: bool,
}

impl QuadrantSteps {
    /// Quadrant of a circle of radius `r`.
    pub fn new(r: i32) -> Self {
        Self::ellipse(r, r)
    }

    /// Quadrant of an axis-aligned ellipse with radii `rx` and `ry`.
    fn ellipse(rx: i32, ry: i32) -> Self {
        let rx2 = rx as i64 * rx as i64;
        let ry2 = ry as i64 * ry as i64;
        Self {
            rx2,
            ry2,
            inc_x: 0,
            inc_y: -(ry as i64) * (rx2 << 1),
            cur_f: 0,
            dx: 0,
            dy: -ry,
            started: false,
            finished: false,
        }
    }

    /// Take whichever of the x, y or diagonal moves keeps the error term
    /// closest to zero.
    fn advance(&mut self) {
        let fx = self.cur_f + self.inc_x + self.ry2;
        let fy = self.cur_f + self.inc_y + self.rx2;
        let fxy = fx + self.inc_y + self.rx2;

        let (mx, my, mxy) = (fx.abs(), fy.abs(), fxy.abs());
        let x_first = mx <= my;
        let best = if x_first { mx } else { my };

        if best > mxy {
            self.inc_x += self.ry2 << 1;
            self.inc_y += self.rx2 << 1;
            self.cur_f = fxy;
            self.dx += 1;
            self.dy += 1;
        } else if x_first {
            self.inc_x += self.ry2 << 1;
            self.cur_f = fx;
            self.dx += 1;
        } else {
            self.inc_y += self.rx2 << 1;
            self.cur_f = fy;
            self.dy += 1;
        }
    }
}

impl Iterator for QuadrantSteps {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.finished {
            return None;
        }
        if self.started {
            self.advance();
        } else {
            self.started = true;
        }
        if self.dy >= 0 {
            self.finished = true;
        }
        Some((self.dx, self.dy))
    }
}
