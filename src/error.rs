//! Errors raised while constructing a framebuffer or attaching its buffer.
//!
//! Drawing itself never fails: out-of-range geometry is clipped or dropped.

use crate::basics::PixelT;

/// Reasons a framebuffer configuration or buffer is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("frame dimensions {width}x{height} must be within 1..={max}")]
    InvalidDimensions {
        width: PixelT,
        height: PixelT,
        max: PixelT,
    },
    #[error("buffer holds {actual} bytes but the frame needs {required}")]
    BufferTooSmall { required: usize, actual: usize },
    #[error("clear divisor power {power} exceeds the limit of {max}")]
    ClearDivisorTooLarge { power: u8, max: u8 },
}
