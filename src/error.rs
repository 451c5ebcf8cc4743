//! Error type shared by the rasterizer, pixel buffer and PNG encoder

use std::fmt;
use std::io;

/// Everything that can go wrong while rendering or encoding an icon
#[derive(Debug)]
pub enum IconError {
    /// Requested icon edge or supersample factor is zero, or the
    /// supersampled canvas would not fit in memory
    InvalidSize { size: u32, supersample: u32 },
    /// Image dimensions the operation cannot represent
    InvalidDimensions { width: u32, height: u32 },
    /// RGBA data length does not equal `width * height * 4`
    BufferSizeMismatch { expected: usize, actual: usize },
    /// The zlib stream could not be produced
    Compress(io::Error),
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size, supersample } => write!(
                f,
                "invalid icon size {} at supersample {} (both must be positive)",
                size, supersample
            ),
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid image dimensions {}x{}", width, height)
            },
            Self::BufferSizeMismatch { expected, actual } => write!(
                f,
                "rgba length mismatch: expected {} bytes, got {}",
                expected, actual
            ),
            Self::Compress(e) => write!(f, "failed to compress scanlines: {}", e),
        }
    }
}

impl std::error::Error for IconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Compress(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for IconError {
    fn from(e: io::Error) -> Self {
        Self::Compress(e)
    }
}

/// Byte length of an RGBA buffer, or `None` if it overflows `usize`
pub(crate) fn rgba_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(4)
}
