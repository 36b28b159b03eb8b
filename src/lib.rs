//! # oled-raster
//!
//! Integer-only framebuffer rasterizer for small OLED and LCD panels.
//!
//! Drawing calls take abstract 24-bit [`RgbColor`]s and signed logical
//! coordinates; a [`Framebuffer`] converts the color once per call, clips the
//! shape against the frame, maps it through the panel's rotation and
//! mirroring, and writes packed pixels into a caller-owned byte buffer that
//! can be pushed to the display bus as-is.
//!
//! ## Pixel formats
//!
//! | Alias                     | Bits | Layout                                  |
//! |---------------------------|------|-----------------------------------------|
//! | [`BinaryFramebuffer`]     | 1    | vertical pages, LSB at the top          |
//! | [`Color8Framebuffer`]     | 8    | RGB332                                  |
//! | [`Grayscale8Framebuffer`] | 8    | luma                                    |
//! | [`Color16Framebuffer`]    | 16   | RGB565, big-endian                      |
//! | [`Color32Framebuffer`]    | 32   | `0x00RRGGBB`, little-endian word        |
//!
//! ## Pipeline
//!
//! 1. **Draw** - the object-safe [`Draw`] trait, logical coordinates
//! 2. **Clip** - Cohen-Sutherland lines, rectangle clamping
//! 3. **Orient** - logical to physical mapping
//! 4. **Raster** - Bresenham lines, scanline triangle fill, optional
//!    anti-aliasing
//! 5. **Paint** - a sealed [`FramePainter`] per format packs the pixels
//!
//! The crate is `no_std` and never allocates.

#![cfg_attr(not(test), no_std)]

// Foundation types
pub mod basics;
pub mod color;
pub mod error;
pub mod fixed;

// Pixel formats
pub mod blend;
pub mod color_converter;
pub mod dither;
pub mod painter;
pub mod painter_binary;
pub mod painter_color16;
pub mod painter_color32;
pub mod painter_color8;
pub mod painter_gray8;

// Geometry
pub mod circle;
pub mod clip;
pub mod orientation;
mod raster;

// Framebuffer
pub mod draw;
pub mod framebuffer;

#[cfg(feature = "embedded-graphics-core")]
pub mod embedded_graphics;

pub use basics::{PixelSignedT, PixelT, MAX_PIXEL_SIZE};
pub use blend::BlendMode;
pub use color::RgbColor;
pub use color_converter::{
    BinaryConverter, Color16Converter, Color32Converter, Color8Converter, ColorConverter,
    Grayscale8Converter,
};
pub use draw::Draw;
pub use error::Error;
pub use framebuffer::{
    AntiAliasing, BinaryFramebuffer, Color16Framebuffer, Color32Framebuffer, Color8Framebuffer,
    Framebuffer, FramebufferOptions, Grayscale8Framebuffer,
};
pub use orientation::{Mirror, Rotation};
pub use painter::{FramePainter, RawColor};
pub use painter_binary::BinaryPainter;
pub use painter_color16::Color16Painter;
pub use painter_color32::Color32Painter;
pub use painter_color8::Color8Painter;
pub use painter_gray8::Grayscale8Painter;
