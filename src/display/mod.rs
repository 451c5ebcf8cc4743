mod pixel_buffer;

pub use pixel_buffer::PixelBuffer;

/// Edge lengths of the two store icon variants
pub const ICON_SIZES: [u32; 2] = [80, 144];

/// Supersampling factor used when none is requested
pub const DEFAULT_SUPERSAMPLE: u32 = 4;
