use crate::color::Color;
use crate::error::{rgba_len, IconError};

// ============================================================================
// Utility Functions
// ============================================================================

/// Write an RGBA color to a 4-byte slice
#[inline]
fn write_pixel(dest: &mut [u8], c: Color) {
    dest[0] = c.r;
    dest[1] = c.g;
    dest[2] = c.b;
    dest[3] = c.a;
}

#[inline]
fn read_pixel(src: &[u8]) -> Color {
    Color::rgba(src[0], src[1], src[2], src[3])
}

// ============================================================================
// PixelBuffer
// ============================================================================

/// Row-major RGBA pixel buffer
///
/// Bytes are stored in R, G, B, A order, the layout the PNG encoder expects.
/// The length is always exactly `width * height * 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Create a zeroed (transparent black) buffer
    pub fn with_size(width: u32, height: u32) -> Result<Self, IconError> {
        let len = rgba_len(width, height).ok_or(IconError::InvalidDimensions { width, height })?;
        Ok(Self {
            pixels: vec![0; len],
            width,
            height,
        })
    }

    /// Wrap existing RGBA data, rejecting any length other than `width * height * 4`
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, IconError> {
        let expected =
            rgba_len(width, height).ok_or(IconError::InvalidDimensions { width, height })?;
        if data.len() != expected {
            return Err(IconError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            pixels: data,
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Calculate byte offset for pixel at (x, y)
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Fill every pixel with one color
    pub fn fill(&mut self, c: Color) {
        for px in self.pixels.chunks_exact_mut(4) {
            write_pixel(px, c);
        }
    }

    /// Set a single pixel (bounds checked)
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, c: Color) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x, y);
            write_pixel(&mut self.pixels[idx..idx + 4], c);
        }
    }

    /// Read a pixel (bounds checked)
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x, y);
            Some(read_pixel(&self.pixels[idx..idx + 4]))
        } else {
            None
        }
    }

    /// Mutable access to one row of RGBA bytes
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let stride = self.width as usize * 4;
        let start = y as usize * stride;
        &mut self.pixels[start..start + stride]
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    // ========================================================================
    // Resampling
    // ========================================================================

    /// Box-filter down by an integer factor
    ///
    /// Each output pixel is the per-channel mean of the `factor * factor`
    /// source pixels it covers, truncated toward zero. Both dimensions must
    /// be multiples of `factor`.
    pub fn downsample(&self, factor: u32) -> Result<Self, IconError> {
        if factor == 0 || self.width % factor != 0 || self.height % factor != 0 {
            return Err(IconError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if factor == 1 {
            return Ok(self.clone());
        }

        let out_w = self.width / factor;
        let out_h = self.height / factor;
        let mut out = Self::with_size(out_w, out_h)?;
        let n = u64::from(factor) * u64::from(factor);
        let stride = self.width as usize * 4;
        let block = factor as usize * 4;

        for oy in 0..out_h {
            for ox in 0..out_w {
                let mut sum = [0u64; 4];
                let x0 = ox as usize * block;
                for sy in 0..factor {
                    let row = (oy * factor + sy) as usize * stride;
                    for px in self.pixels[row + x0..row + x0 + block].chunks_exact(4) {
                        for (acc, &v) in sum.iter_mut().zip(px) {
                            *acc += u64::from(v);
                        }
                    }
                }
                let idx = out.pixel_index(ox, oy);
                for (dst, acc) in out.pixels[idx..idx + 4].iter_mut().zip(sum) {
                    *dst = (acc / n) as u8;
                }
            }
        }

        Ok(out)
    }
}
