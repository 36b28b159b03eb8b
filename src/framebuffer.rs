//! The checked framebuffer: bounds, clipping, orientation and the
//! incremental clear, on top of one raw painter.
//!
//! [`Framebuffer`] borrows a caller-owned byte buffer for `'a`, so the buffer
//! provably outlives every drawing call. Every public operation validates its
//! geometry in logical coordinates, maps it through the panel
//! [`Orientation`], and only then hands physical coordinates to the
//! unchecked [`Raster`] layer.

use core::fmt;

use crate::basics::{PixelSignedT, PixelT, Point, RectI, MAX_PIXEL_SIZE};
use crate::blend::BlendMode;
use crate::clip::{clip_line, clip_rectangle};
use crate::color::RgbColor;
use crate::color_converter::ColorConverter;
use crate::draw::Draw;
use crate::error::Error;
use crate::orientation::{Mirror, Orientation, Rotation};
use crate::painter::{FramePainter, RawColor, RawView};
use crate::painter_binary::BinaryPainter;
use crate::painter_color16::Color16Painter;
use crate::painter_color32::Color32Painter;
use crate::painter_color8::Color8Painter;
use crate::painter_gray8::Grayscale8Painter;
use crate::raster::Raster;

/// Largest accepted [`FramebufferOptions::clear_divisor_power`].
pub const MAX_CLEAR_DIVISOR_POWER: u8 = 10;

// ============================================================================
// Options
// ============================================================================

/// Edge treatment for lines and triangle fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AntiAliasing {
    #[default]
    None,
    /// Average the exterior neighbour of each edge pixel with the color.
    EdgeBlend,
    /// Alpha-blend the exterior neighbour by the edge's sub-pixel position.
    PixelCoverage,
}

/// Per-panel configuration, fixed for the lifetime of a [`Framebuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FramebufferOptions {
    /// The buffer is cleared in `2^clear_divisor_power` steps.
    pub clear_divisor_power: u8,
    pub mirror: Mirror,
    pub rotation: Rotation,
    /// Store the bitwise complement of every color.
    pub inverted: bool,
    pub anti_aliasing: AntiAliasing,
    /// Seed for the 1-bit dither generator; 0 selects the default seed.
    pub dither_seed: u16,
}

impl FramebufferOptions {
    pub const fn new() -> Self {
        Self {
            clear_divisor_power: 0,
            mirror: Mirror::None,
            rotation: Rotation::Deg0,
            inverted: false,
            anti_aliasing: AntiAliasing::None,
            dither_seed: 0,
        }
    }

    pub const fn with_clear_divisor_power(mut self, power: u8) -> Self {
        self.clear_divisor_power = power;
        self
    }

    pub const fn with_mirror(mut self, mirror: Mirror) -> Self {
        self.mirror = mirror;
        self
    }

    pub const fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub const fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    pub const fn with_anti_aliasing(mut self, anti_aliasing: AntiAliasing) -> Self {
        self.anti_aliasing = anti_aliasing;
        self
    }

    pub const fn with_dither_seed(mut self, seed: u16) -> Self {
        self.dither_seed = seed;
        self
    }
}

// ============================================================================
// Framebuffer
// ============================================================================

/// Drawing surface over a caller-owned packed pixel buffer.
///
/// `width` and `height` given at construction are the physical panel
/// dimensions; [`Draw::frame_width`]/[`Draw::frame_height`] report the
/// logical frame after rotation.
///
/// ```
/// use oled_raster::{Color16Framebuffer, Draw, FramebufferOptions, RgbColor};
///
/// let mut bytes = [0u8; 16 * 16 * 2];
/// let mut fb = Color16Framebuffer::with_buffer(&mut bytes, 16, 16, FramebufferOptions::new())?;
/// fb.fill(RgbColor::BLACK);
/// fb.rectangle_fill(RgbColor::WHITE, 2, 2, 5, 5);
/// assert_eq!(fb.read_pixel(3, 3), Some(0xFFFF));
/// # Ok::<(), oled_raster::Error>(())
/// ```
pub struct Framebuffer<'a, P: FramePainter> {
    buffer: Option<&'a mut [u8]>,
    painter: P,
    orientation: Orientation,
    options: FramebufferOptions,
    clear_index: usize,
}

pub type BinaryFramebuffer<'a> = Framebuffer<'a, BinaryPainter>;
pub type Color8Framebuffer<'a> = Framebuffer<'a, Color8Painter>;
pub type Grayscale8Framebuffer<'a> = Framebuffer<'a, Grayscale8Painter>;
pub type Color16Framebuffer<'a> = Framebuffer<'a, Color16Painter>;
pub type Color32Framebuffer<'a> = Framebuffer<'a, Color32Painter>;

impl<'a, P: FramePainter> Framebuffer<'a, P> {
    /// Create a detached framebuffer for a `width` x `height` panel. Drawing
    /// is a no-op until a buffer is attached with
    /// [`set_buffer`](Self::set_buffer).
    pub fn new(width: PixelT, height: PixelT, options: FramebufferOptions) -> Result<Self, Error> {
        if width == 0 || height == 0 || width > MAX_PIXEL_SIZE || height > MAX_PIXEL_SIZE {
            return Err(Error::InvalidDimensions {
                width,
                height,
                max: MAX_PIXEL_SIZE,
            });
        }
        if options.clear_divisor_power > MAX_CLEAR_DIVISOR_POWER {
            return Err(Error::ClearDivisorTooLarge {
                power: options.clear_divisor_power,
                max: MAX_CLEAR_DIVISOR_POWER,
            });
        }

        let mut painter = P::new(width, height);
        painter.set_dither_seed(options.dither_seed);
        tracing::debug!(
            width,
            height,
            depth = P::Converter::COLOR_DEPTH,
            ?options,
            "framebuffer created"
        );
        Ok(Self {
            buffer: None,
            painter,
            orientation: Orientation::new(width, height, options.rotation, options.mirror),
            options,
            clear_index: 0,
        })
    }

    /// Create a framebuffer drawing into `buffer`.
    pub fn with_buffer(
        buffer: &'a mut [u8],
        width: PixelT,
        height: PixelT,
        options: FramebufferOptions,
    ) -> Result<Self, Error> {
        let mut fb = Self::new(width, height, options)?;
        fb.set_buffer(buffer)?;
        Ok(fb)
    }

    /// Attach `buffer`, returning the previously attached one. The buffer must
    /// hold at least [`buffer_size`](Self::buffer_size) bytes; only that
    /// prefix is used. Attaching restarts the incremental clear cycle.
    pub fn set_buffer(&mut self, buffer: &'a mut [u8]) -> Result<Option<&'a mut [u8]>, Error> {
        let required = self.buffer_size();
        if buffer.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                actual: buffer.len(),
            });
        }
        tracing::debug!(required, actual = buffer.len(), "frame buffer attached");
        self.clear_index = 0;
        Ok(self.buffer.replace(buffer))
    }

    /// Detach and return the buffer.
    pub fn take_buffer(&mut self) -> Option<&'a mut [u8]> {
        let buffer = self.buffer.take();
        if buffer.is_some() {
            tracing::debug!("frame buffer detached");
        }
        buffer
    }

    /// Bytes needed for one frame in this pixel format.
    pub fn buffer_size(&self) -> usize {
        P::Converter::buffer_size(
            self.orientation.physical_width(),
            self.orientation.physical_height(),
        )
    }

    /// Number of [`clear_frame_buffer`](Draw::clear_frame_buffer) calls per
    /// full clear.
    pub fn clear_steps_count(&self) -> usize {
        1 << self.options.clear_divisor_power
    }

    pub fn options(&self) -> &FramebufferOptions {
        &self.options
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    /// The raw color drawn at logical `(x, y)`, with inversion undone.
    /// `None` when out of bounds or detached.
    pub fn read_pixel(&self, x: PixelSignedT, y: PixelSignedT) -> Option<RawColor<P>> {
        let p = self.orientation.map(self.logical(x, y)?);
        let size = self.buffer_size();
        let bytes = self.buffer.as_deref()?;
        let view = RawView::new(&bytes[..size]);
        let raw = self.painter.pixel_raw_read(view, p.x as PixelT, p.y as PixelT);
        Some(if self.options.inverted { !raw } else { raw })
    }

    // ------------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------------

    /// Raw drawing session over the attached buffer. Compute everything that
    /// needs `&self` first; the session borrows the whole framebuffer.
    fn raster(&mut self) -> Option<Raster<'_, P>> {
        let size = self.buffer_size();
        let anti_aliasing = self.options.anti_aliasing;
        let inverted = self.options.inverted;
        let bytes = self.buffer.as_deref_mut()?;
        Some(Raster::new(&mut self.painter, &mut bytes[..size], anti_aliasing, inverted))
    }

    #[inline]
    fn raw(&self, color: RgbColor) -> RawColor<P> {
        let raw = P::Converter::raw_color(color);
        if self.options.inverted {
            !raw
        } else {
            raw
        }
    }

    /// Logical frame as an inclusive clip box.
    #[inline]
    fn clip_box(&self) -> RectI {
        RectI::new(
            0,
            0,
            self.orientation.logical_width() as i32 - 1,
            self.orientation.logical_height() as i32 - 1,
        )
    }

    #[inline]
    fn logical(&self, x: PixelSignedT, y: PixelSignedT) -> Option<Point> {
        let p = Point::from((x, y));
        self.clip_box().hit_test(p.x, p.y).then_some(p)
    }
}

impl<P: FramePainter> fmt::Debug for Framebuffer<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Framebuffer")
            .field("width", &self.orientation.physical_width())
            .field("height", &self.orientation.physical_height())
            .field("depth", &P::Converter::COLOR_DEPTH)
            .field("attached", &self.buffer.is_some())
            .field("options", &self.options)
            .field("clear_index", &self.clear_index)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Draw
// ============================================================================

impl<P: FramePainter> Draw for Framebuffer<'_, P> {
    fn frame_width(&self) -> PixelT {
        self.orientation.logical_width()
    }

    fn frame_height(&self) -> PixelT {
        self.orientation.logical_height()
    }

    fn color_depth(&self) -> u8 {
        P::Converter::COLOR_DEPTH
    }

    fn is_monochrome(&self) -> bool {
        P::Converter::MONOCHROME
    }

    fn frame_buffer(&self) -> Option<&[u8]> {
        let size = self.buffer_size();
        self.buffer.as_deref().map(|b| &b[..size])
    }

    /// Clearing a detached framebuffer has nothing to do and reports the
    /// cycle as complete without moving the cursor.
    fn clear_frame_buffer(&mut self) -> bool {
        let steps = self.clear_steps_count();
        let index = self.clear_index;
        match self.raster() {
            Some(mut raster) => raster.clear(steps, index),
            None => return true,
        }

        self.clear_index += 1;
        if self.clear_index == steps {
            self.clear_index = 0;
            tracing::trace!(steps, "frame buffer clear complete");
            true
        } else {
            false
        }
    }

    fn pixel(&mut self, color: RgbColor, x: PixelSignedT, y: PixelSignedT) {
        let Some(p) = self.logical(x, y) else {
            return;
        };
        let p = self.orientation.map(p);
        let raw = self.raw(color);
        if let Some(mut raster) = self.raster() {
            raster.pixel(raw, p);
        }
    }

    fn pixel_blend_mode(&mut self, color: RgbColor, x: PixelSignedT, y: PixelSignedT, mode: BlendMode) {
        let Some(p) = self.logical(x, y) else {
            return;
        };
        let p = self.orientation.map(p);
        let raw = self.raw(color);
        if let Some(mut raster) = self.raster() {
            raster.pixel_blend(raw, p, mode);
        }
    }

    fn line(
        &mut self,
        color: RgbColor,
        x1: PixelSignedT,
        y1: PixelSignedT,
        x2: PixelSignedT,
        y2: PixelSignedT,
    ) {
        let mut p0 = Point::from((x1, y1));
        let mut p1 = Point::from((x2, y2));
        if !clip_line(&mut p0, &mut p1, &self.clip_box()) {
            return;
        }
        let (p0, p1) = (self.orientation.map(p0), self.orientation.map(p1));
        let raw = self.raw(color);
        if let Some(mut raster) = self.raster() {
            raster.line(raw, p0, p1);
        }
    }

    fn rectangle(
        &mut self,
        color: RgbColor,
        x1: PixelSignedT,
        y1: PixelSignedT,
        x2: PixelSignedT,
        y2: PixelSignedT,
    ) {
        let clip_box = self.clip_box();
        let mut tl = Point::from((x1, y1));
        let mut br = Point::from((x2, y2));
        if !clip_rectangle(&mut tl, &mut br, &clip_box) {
            return;
        }

        // Edges that were clipped away stay undrawn; corners belong to the
        // horizontal edges.
        let top = y1 as i32 >= clip_box.y1;
        let bottom = y2 as i32 <= clip_box.y2 && !(top && br.y == tl.y);
        let left = x1 as i32 >= clip_box.x1;
        let right = x2 as i32 <= clip_box.x2 && !(left && br.x == tl.x);
        let inner_top = tl.y + top as i32;
        let inner_bottom = br.y - bottom as i32;

        let mut edges: [Option<(Point, Point)>; 4] = [None; 4];
        if top {
            edges[0] = Some((tl, Point::new(br.x, tl.y)));
        }
        if bottom {
            edges[1] = Some((Point::new(tl.x, br.y), br));
        }
        if inner_top <= inner_bottom {
            if left {
                edges[2] = Some((Point::new(tl.x, inner_top), Point::new(tl.x, inner_bottom)));
            }
            if right {
                edges[3] = Some((Point::new(br.x, inner_top), Point::new(br.x, inner_bottom)));
            }
        }

        let orientation = self.orientation;
        let raw = self.raw(color);
        if let Some(mut raster) = self.raster() {
            for (a, b) in edges.into_iter().flatten() {
                raster.line(raw, orientation.map(a), orientation.map(b));
            }
        }
    }

    fn rectangle_fill(
        &mut self,
        color: RgbColor,
        x1: PixelSignedT,
        y1: PixelSignedT,
        x2: PixelSignedT,
        y2: PixelSignedT,
    ) {
        let mut tl = Point::from((x1, y1));
        let mut br = Point::from((x2, y2));
        if !clip_rectangle(&mut tl, &mut br, &self.clip_box()) {
            return;
        }
        let (a, b) = (self.orientation.map(tl), self.orientation.map(br));
        let raw = self.raw(color);
        if let Some(mut raster) = self.raster() {
            raster.rectangle_fill(raw, a, b);
        }
    }

    fn triangle_fill(
        &mut self,
        color: RgbColor,
        x1: PixelSignedT,
        y1: PixelSignedT,
        x2: PixelSignedT,
        y2: PixelSignedT,
        x3: PixelSignedT,
        y3: PixelSignedT,
    ) {
        // Orientation first: it is affine, and the fill clips per scanline in
        // physical space.
        let o = self.orientation;
        let a = o.map(Point::from((x1, y1)));
        let b = o.map(Point::from((x2, y2)));
        let c = o.map(Point::from((x3, y3)));
        let raw = self.raw(color);
        if let Some(mut raster) = self.raster() {
            raster.triangle_fill(raw, a, b, c);
        }
    }

    fn fill(&mut self, color: RgbColor) {
        let raw = self.raw(color);
        if let Some(mut raster) = self.raster() {
            raster.fill(raw);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_converter::{BinaryConverter, Color8Converter, Grayscale8Converter};

    const WHITE_G: u8 = 255;

    fn gray<'a>(w: PixelT, h: PixelT, options: FramebufferOptions) -> (Grayscale8Framebuffer<'a>, usize) {
        let fb = Grayscale8Framebuffer::new(w, h, options).unwrap();
        let size = fb.buffer_size();
        (fb, size)
    }

    fn lit_logical(fb: &Grayscale8Framebuffer<'_>) -> Vec<(i16, i16)> {
        let mut out = Vec::new();
        for y in 0..fb.frame_height() as i16 {
            for x in 0..fb.frame_width() as i16 {
                if fb.read_pixel(x, y) == Some(WHITE_G) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        assert!(matches!(
            Color8Framebuffer::new(0, 8, FramebufferOptions::new()),
            Err(Error::InvalidDimensions { width: 0, height: 8, .. })
        ));
        assert!(matches!(
            Color8Framebuffer::new(8, MAX_PIXEL_SIZE + 1, FramebufferOptions::new()),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_rejects_large_clear_divisor() {
        let options = FramebufferOptions::new().with_clear_divisor_power(11);
        assert_eq!(
            Color8Framebuffer::new(8, 8, options).err(),
            Some(Error::ClearDivisorTooLarge { power: 11, max: 10 })
        );
    }

    #[test]
    fn test_rejects_short_buffer() {
        let mut bytes = [0u8; 7];
        let err = BinaryFramebuffer::with_buffer(&mut bytes, 8, 8, FramebufferOptions::new()).err();
        assert_eq!(err, Some(Error::BufferTooSmall { required: 8, actual: 7 }));
    }

    #[test]
    fn test_longer_buffer_uses_prefix() {
        let mut bytes = [0u8; 20];
        {
            let mut fb = Grayscale8Framebuffer::with_buffer(&mut bytes, 4, 4, FramebufferOptions::new()).unwrap();
            fb.fill(RgbColor::WHITE);
            assert_eq!(fb.frame_buffer().map(<[u8]>::len), Some(16));
        }
        assert!(bytes[..16].iter().all(|&b| b == 255));
        assert!(bytes[16..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_detached_is_noop() {
        let (mut fb, size) = gray(4, 4, FramebufferOptions::new());
        fb.fill(RgbColor::WHITE);
        fb.pixel(RgbColor::WHITE, 1, 1);
        fb.triangle_fill(RgbColor::WHITE, 0, 0, 3, 0, 0, 3);
        assert!(fb.frame_buffer().is_none());
        assert_eq!(fb.read_pixel(1, 1), None);
        assert!(fb.clear_frame_buffer());

        let mut bytes = vec![0u8; size];
        assert!(fb.set_buffer(&mut bytes).unwrap().is_none());
        fb.pixel(RgbColor::WHITE, 1, 1);
        assert_eq!(fb.read_pixel(1, 1), Some(WHITE_G));
        assert!(fb.take_buffer().is_some());
        assert!(fb.take_buffer().is_none());
        assert_eq!(bytes[5], WHITE_G);
    }

    #[test]
    fn test_incremental_clear() {
        let options = FramebufferOptions::new().with_clear_divisor_power(2);
        let mut bytes = vec![0xAAu8; 10];
        let mut fb = Grayscale8Framebuffer::with_buffer(&mut bytes, 5, 2, options).unwrap();
        assert_eq!(fb.clear_steps_count(), 4);
        assert!(!fb.clear_frame_buffer());
        assert_eq!(fb.frame_buffer().unwrap()[..2], [0, 0]);
        assert_eq!(fb.frame_buffer().unwrap()[2], 0xAA);
        assert!(!fb.clear_frame_buffer());
        assert!(!fb.clear_frame_buffer());
        assert!(fb.clear_frame_buffer());
        assert!(fb.frame_buffer().unwrap().iter().all(|&b| b == 0));
        // next cycle starts over
        assert!(!fb.clear_frame_buffer());
    }

    #[test]
    fn test_inverted_clear_and_colors() {
        let options = FramebufferOptions::new().with_inverted(true);
        let mut bytes = vec![0u8; 8];
        let mut fb = BinaryFramebuffer::with_buffer(&mut bytes, 8, 8, options).unwrap();
        assert!(fb.clear_frame_buffer());
        assert!(fb.frame_buffer().unwrap().iter().all(|&b| b == 0xFF));
        fb.pixel(RgbColor::WHITE, 3, 0);
        assert_eq!(fb.read_pixel(3, 0), Some(BinaryConverter::raw_color(RgbColor::WHITE)));
        assert_eq!(fb.frame_buffer().unwrap()[3], 0xFE);
    }

    #[test]
    fn test_pixel_bounds() {
        let (mut fb, size) = gray(4, 3, FramebufferOptions::new());
        let mut bytes = vec![0u8; size];
        fb.set_buffer(&mut bytes).unwrap();
        fb.pixel(RgbColor::WHITE, -1, 0);
        fb.pixel(RgbColor::WHITE, 4, 0);
        fb.pixel(RgbColor::WHITE, 0, 3);
        fb.pixel(RgbColor::WHITE, 3, 2);
        assert_eq!(lit_logical(&fb), vec![(3, 2)]);
        assert_eq!(fb.read_pixel(4, 0), None);
    }

    #[test]
    fn test_mirror_xy_pixel() {
        let options = FramebufferOptions::new().with_mirror(Mirror::XY);
        let (mut fb, size) = gray(6, 4, options);
        let mut bytes = vec![0u8; size];
        fb.set_buffer(&mut bytes).unwrap();
        fb.pixel(RgbColor::WHITE, 1, 0);
        assert_eq!(fb.read_pixel(1, 0), Some(WHITE_G));
        fb.take_buffer();
        // physical (6-1-1, 4-1-0)
        assert_eq!(bytes[3 * 6 + 4], WHITE_G);
    }

    #[test]
    fn test_rotation_swaps_logical_frame() {
        let options = FramebufferOptions::new().with_rotation(Rotation::Deg90);
        let (mut fb, size) = gray(8, 4, options);
        let mut bytes = vec![0u8; size];
        fb.set_buffer(&mut bytes).unwrap();
        assert_eq!((fb.frame_width(), fb.frame_height()), (4, 8));
        fb.line(RgbColor::WHITE, 0, 0, 0, 7);
        assert_eq!(lit_logical(&fb).len(), 8);
        fb.take_buffer();
        // logical column 0 is physical row 0
        assert!(bytes[..8].iter().all(|&b| b == WHITE_G));
        assert!(bytes[8..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_clipped_line() {
        let (mut fb, size) = gray(8, 8, FramebufferOptions::new());
        let mut bytes = vec![0u8; size];
        fb.set_buffer(&mut bytes).unwrap();
        fb.line(RgbColor::WHITE, -4, 3, 20, 3);
        assert_eq!(lit_logical(&fb).len(), 8);
        fb.line(RgbColor::WHITE, -10, -10, -1, 20);
        assert_eq!(lit_logical(&fb).len(), 8);
    }

    #[test]
    fn test_rectangle_outline() {
        let (mut fb, size) = gray(8, 8, FramebufferOptions::new());
        let mut bytes = vec![0u8; size];
        fb.set_buffer(&mut bytes).unwrap();
        fb.rectangle(RgbColor::WHITE, 1, 1, 5, 4);
        let lit = lit_logical(&fb);
        assert_eq!(lit.len(), 2 * 5 + 2 * 2);
        assert!(lit.contains(&(1, 1)) && lit.contains(&(5, 4)));
        assert!(!lit.contains(&(3, 2)));
    }

    #[test]
    fn test_rectangle_outline_partially_off_screen() {
        let (mut fb, size) = gray(8, 8, FramebufferOptions::new());
        let mut bytes = vec![0u8; size];
        fb.set_buffer(&mut bytes).unwrap();
        fb.rectangle(RgbColor::WHITE, -3, 2, 4, 20);
        let lit = lit_logical(&fb);
        // top edge x 0..=4 and right edge y 3..=7, nothing at the frame border
        assert_eq!(lit.len(), 5 + 5);
        assert!(!lit.contains(&(0, 5)));
        assert!(lit.contains(&(4, 7)));
    }

    #[test]
    fn test_rectangle_outline_only_bottom_visible() {
        let (mut fb, size) = gray(8, 8, FramebufferOptions::new());
        let mut bytes = vec![0u8; size];
        fb.set_buffer(&mut bytes).unwrap();
        fb.rectangle(RgbColor::WHITE, 1, -5, 5, 0);
        let lit = lit_logical(&fb);
        assert_eq!(lit, (1..=5).map(|x| (x, 0)).collect::<Vec<_>>());
    }

    #[test]
    fn test_rectangle_inverted_corners_draw_nothing() {
        let (mut fb, size) = gray(8, 8, FramebufferOptions::new());
        let mut bytes = vec![0u8; size];
        fb.set_buffer(&mut bytes).unwrap();
        fb.rectangle(RgbColor::WHITE, 5, 1, 1, 4);
        fb.rectangle_fill(RgbColor::WHITE, 1, 5, 4, 1);
        assert!(lit_logical(&fb).is_empty());
    }

    #[test]
    fn test_rectangle_fill_clipped() {
        let (mut fb, size) = gray(8, 8, FramebufferOptions::new());
        let mut bytes = vec![0u8; size];
        fb.set_buffer(&mut bytes).unwrap();
        fb.rectangle_fill(RgbColor::WHITE, 6, -2, 12, 1);
        assert_eq!(lit_logical(&fb), vec![(6, 0), (7, 0), (6, 1), (7, 1)]);
    }

    #[test]
    fn test_triangle_outline_matches_lines() {
        let (mut a, size) = gray(12, 12, FramebufferOptions::new());
        let (mut b, _) = gray(12, 12, FramebufferOptions::new());
        let mut bytes_a = vec![0u8; size];
        let mut bytes_b = vec![0u8; size];
        a.set_buffer(&mut bytes_a).unwrap();
        b.set_buffer(&mut bytes_b).unwrap();
        a.triangle(RgbColor::WHITE, 1, 1, 10, 3, 4, 11);
        b.line(RgbColor::WHITE, 1, 1, 10, 3);
        b.line(RgbColor::WHITE, 10, 3, 4, 11);
        b.line(RgbColor::WHITE, 4, 11, 1, 1);
        assert_eq!(a.frame_buffer(), b.frame_buffer());
    }

    #[test]
    fn test_triangle_fill_under_every_orientation() {
        for rotation in [Rotation::Deg0, Rotation::Deg90, Rotation::Deg180, Rotation::Deg270] {
            for mirror in [Mirror::None, Mirror::X, Mirror::Y, Mirror::XY] {
                let options = FramebufferOptions::new().with_rotation(rotation).with_mirror(mirror);
                let (mut fb, size) = gray(8, 8, options);
                let mut bytes = vec![0u8; size];
                fb.set_buffer(&mut bytes).unwrap();
                fb.triangle_fill(RgbColor::WHITE, 0, 0, 7, 0, 0, 7);
                let lit = lit_logical(&fb);
                assert_eq!(lit.len(), 36, "{:?} {:?}", rotation, mirror);
                assert!(lit.iter().all(|&(x, y)| x + y <= 7));
            }
        }
    }

    #[test]
    fn test_blend_family() {
        let (mut fb, size) = gray(6, 1, FramebufferOptions::new());
        let mut bytes = vec![0u8; size];
        fb.set_buffer(&mut bytes).unwrap();
        let mid = RgbColor::from((100, 100, 100));
        let level = Grayscale8Converter::raw_color(mid);
        fb.fill(mid);
        fb.pixel_blend(RgbColor::BLACK, 0, 0);
        fb.pixel_blend_alpha(RgbColor::WHITE, 1, 0, 255);
        fb.pixel_blend_add(mid, 2, 0);
        fb.pixel_blend_subtract(mid, 3, 0);
        fb.pixel_blend_multiply(RgbColor::WHITE, 4, 0);
        fb.pixel_blend_screen(RgbColor::BLACK, 5, 0);
        fb.pixel_blend(RgbColor::BLACK, 9, 0);
        assert_eq!(
            fb.frame_buffer().unwrap(),
            &[level / 2, 255, level * 2, 0, level, level][..]
        );
    }

    /// One blend mode per column over a `base`-filled 6x1 frame.
    fn blend_row<P: FramePainter>(
        inverted: bool,
        base: RgbColor,
        src: RgbColor,
    ) -> Vec<Option<RawColor<P>>> {
        let options = FramebufferOptions::new().with_inverted(inverted);
        let mut bytes = vec![0u8; P::Converter::buffer_size(6, 1)];
        let mut fb = Framebuffer::<P>::with_buffer(&mut bytes, 6, 1, options).unwrap();
        fb.fill(base);
        fb.pixel_blend(src, 0, 0);
        fb.pixel_blend_alpha(src, 1, 0, 96);
        fb.pixel_blend_add(src, 2, 0);
        fb.pixel_blend_subtract(src, 3, 0);
        fb.pixel_blend_multiply(src, 4, 0);
        fb.pixel_blend_screen(src, 5, 0);
        (0..6).map(|x| fb.read_pixel(x, 0)).collect()
    }

    #[test]
    fn test_inverted_blends_match_plain_grayscale() {
        let mid = RgbColor::from((100, 100, 100));
        for src in [RgbColor::WHITE, RgbColor::BLACK, RgbColor::from((60, 60, 60))] {
            assert_eq!(
                blend_row::<Grayscale8Painter>(true, mid, src),
                blend_row::<Grayscale8Painter>(false, mid, src),
                "{src:?}"
            );
        }
        let white = blend_row::<Grayscale8Painter>(true, mid, RgbColor::WHITE);
        let black = blend_row::<Grayscale8Painter>(true, mid, RgbColor::BLACK);
        assert_eq!(white[2], Some(255)); // add
        assert_eq!(white[3], Some(0)); // subtract
        assert_eq!(white[4], Some(100)); // multiply
        assert_eq!(black[5], Some(100)); // screen
    }

    #[test]
    fn test_inverted_blends_match_plain_binary() {
        for base in [RgbColor::BLACK, RgbColor::WHITE] {
            for src in [RgbColor::BLACK, RgbColor::WHITE] {
                assert_eq!(
                    blend_row::<BinaryPainter>(true, base, src),
                    blend_row::<BinaryPainter>(false, base, src),
                    "{base:?} {src:?}"
                );
            }
        }
        let add = blend_row::<BinaryPainter>(true, RgbColor::BLACK, RgbColor::WHITE);
        assert_eq!(add[2], Some(true));
    }

    #[test]
    fn test_circle_symmetric() {
        let (mut fb, size) = gray(21, 21, FramebufferOptions::new());
        let mut bytes = vec![0u8; size];
        fb.set_buffer(&mut bytes).unwrap();
        fb.circle(RgbColor::WHITE, 10, 10, 6);
        let lit = lit_logical(&fb);
        for &(x, y) in &lit {
            assert!(lit.contains(&(20 - x, y)));
            assert!(lit.contains(&(x, 20 - y)));
        }
        assert!(lit.contains(&(10, 4)) && lit.contains(&(16, 10)));
        assert!(!lit.contains(&(10, 10)));
    }

    #[test]
    fn test_circle_fill_rows_are_solid() {
        let (mut fb, size) = gray(21, 21, FramebufferOptions::new());
        let mut bytes = vec![0u8; size];
        fb.set_buffer(&mut bytes).unwrap();
        fb.circle_fill(RgbColor::WHITE, 10, 10, 6);
        let lit = lit_logical(&fb);
        assert!(lit.contains(&(10, 10)) && lit.contains(&(4, 10)) && lit.contains(&(10, 16)));
        for y in 4..=16i16 {
            let xs: Vec<i16> = lit.iter().filter(|p| p.1 == y).map(|p| p.0).collect();
            let (lo, hi) = (xs[0], xs[xs.len() - 1]);
            assert_eq!(xs.len() as i16, hi - lo + 1, "row {}", y);
            assert_eq!(lo + hi, 20);
        }
        assert_eq!(lit.len(), lit.iter().filter(|p| (4..=16).contains(&p.1)).count());
    }

    #[test]
    fn test_circle_clipped_at_corner() {
        let (mut fb, size) = gray(8, 8, FramebufferOptions::new());
        let mut bytes = vec![0u8; size];
        fb.set_buffer(&mut bytes).unwrap();
        fb.circle_fill(RgbColor::WHITE, 0, 0, 3);
        fb.circle(RgbColor::WHITE, i16::MAX, i16::MIN, 100);
        let lit = lit_logical(&fb);
        assert!(lit.contains(&(0, 0)) && lit.contains(&(3, 0)) && lit.contains(&(0, 3)));
        assert!(lit.iter().all(|&(x, y)| x <= 3 && y <= 3));
    }

    #[test]
    fn test_reports_format() {
        let fb = Color8Framebuffer::new(8, 8, FramebufferOptions::new()).unwrap();
        assert_eq!(fb.color_depth(), 8);
        assert!(!fb.is_monochrome());
        assert_eq!(fb.buffer_size(), Color8Converter::buffer_size(8, 8));
        let fb = BinaryFramebuffer::new(8, 8, FramebufferOptions::new()).unwrap();
        assert_eq!(fb.color_depth(), 1);
        assert!(fb.is_monochrome());
    }

    #[test]
    fn test_dyn_draw() {
        let mut bytes = vec![0u8; 16];
        let mut fb = Grayscale8Framebuffer::with_buffer(&mut bytes, 4, 4, FramebufferOptions::new()).unwrap();
        let surface: &mut dyn Draw = &mut fb;
        surface.fill(RgbColor::WHITE);
        assert!(surface.frame_buffer().unwrap().iter().all(|&b| b == 255));
    }
}
