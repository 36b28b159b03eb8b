//! `embedded-graphics` integration.
//!
//! Every [`Framebuffer`] is a [`DrawTarget`] over [`Rgb888`], so text, image
//! and primitive drawables from the `embedded-graphics` ecosystem render
//! through the same clipped paths as the native [`Draw`] calls.

use core::convert::Infallible;

use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{OriginDimensions, Size};
use embedded_graphics_core::pixelcolor::{Rgb888, RgbColor as _};
use embedded_graphics_core::primitives::Rectangle;
use embedded_graphics_core::Pixel;

use crate::basics::{saturate_coord, PixelSignedT};
use crate::color::RgbColor;
use crate::draw::Draw;
use crate::framebuffer::Framebuffer;
use crate::painter::FramePainter;

impl From<Rgb888> for RgbColor {
    #[inline]
    fn from(c: Rgb888) -> Self {
        RgbColor::new(c.r(), c.g(), c.b())
    }
}

impl From<RgbColor> for Rgb888 {
    #[inline]
    fn from(c: RgbColor) -> Self {
        Rgb888::new(c.r(), c.g(), c.b())
    }
}

impl<P: FramePainter> OriginDimensions for Framebuffer<'_, P> {
    fn size(&self) -> Size {
        Size::new(self.frame_width() as u32, self.frame_height() as u32)
    }
}

impl<P: FramePainter> DrawTarget for Framebuffer<'_, P> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            // anything past the coordinate range is off-frame anyway
            let (Ok(x), Ok(y)) = (PixelSignedT::try_from(point.x), PixelSignedT::try_from(point.y))
            else {
                continue;
            };
            self.pixel(color.into(), x, y);
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        if let Some(br) = area.bottom_right() {
            let tl = area.top_left;
            self.rectangle_fill(
                color.into(),
                saturate_coord(tl.x),
                saturate_coord(tl.y),
                saturate_coord(br.x),
                saturate_coord(br.y),
            );
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.into());
        Ok(())
    }
}
