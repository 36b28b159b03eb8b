//! Abstract RGB color.
//!
//! [`RgbColor`] is the format-independent color every drawing call takes.
//! It packs three 8-bit channels as `0x00RRGGBB`; a pixel format turns it into
//! its own raw encoding through a [`ColorConverter`](crate::color_converter::ColorConverter).

/// 8-8-8 RGB color packed as `0x00RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RgbColor(u32);

impl RgbColor {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);
    pub const YELLOW: Self = Self::new(255, 255, 0);
    pub const CYAN: Self = Self::new(0, 255, 255);
    pub const MAGENTA: Self = Self::new(255, 0, 255);
    pub const GRAY: Self = Self::new(128, 128, 128);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Build from a packed `0x00RRGGBB` value; the top byte is ignored.
    pub const fn from_u32(v: u32) -> Self {
        Self(v & 0x00FF_FFFF)
    }

    /// Expand a 5-6-5 value, replicating the high bits into the low ones so
    /// that full-scale channels stay full-scale.
    pub const fn from_rgb565(v: u16) -> Self {
        let r5 = ((v >> 11) & 0x1F) as u8;
        let g6 = ((v >> 5) & 0x3F) as u8;
        let b5 = (v & 0x1F) as u8;
        Self::new(
            (r5 << 3) | (r5 >> 2),
            (g6 << 2) | (g6 >> 4),
            (b5 << 3) | (b5 >> 2),
        )
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub const fn into_u32(self) -> u32 {
        self.0
    }

    /// `true` for pure black.
    #[inline]
    pub const fn is_black(self) -> bool {
        self.0 == 0
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}
