//! Minimal PNG encoder: 8-bit RGBA, no filtering, no interlace
//!
//! Output is the smallest legal PNG: signature, `IHDR`, a single `IDAT`
//! holding the zlib-compressed scanlines, and an empty `IEND`.

mod chunk;

pub use chunk::{chunk_crc, write_chunk, IDAT, IEND, IHDR};

use crate::display::PixelBuffer;
use crate::error::{rgba_len, IconError};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use log::debug;
use std::io::Write;

/// PNG file signature
pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

const BIT_DEPTH: u8 = 8;
/// Truecolor with alpha
const COLOR_TYPE_RGBA: u8 = 6;
/// Scanline filter type "None"
const FILTER_NONE: u8 = 0;
/// Largest width/height the format allows
const MAX_DIMENSION: u32 = i32::MAX as u32;

/// IHDR payload for an 8-bit RGBA image
fn header(width: u32, height: u32) -> [u8; 13] {
    let mut h = [0u8; 13];
    h[0..4].copy_from_slice(&width.to_be_bytes());
    h[4..8].copy_from_slice(&height.to_be_bytes());
    h[8] = BIT_DEPTH;
    h[9] = COLOR_TYPE_RGBA;
    // compression, filter method, interlace all 0
    h
}

/// Prefix every row with the "None" filter byte
pub fn scanlines(width: u32, height: u32, rgba: &[u8]) -> Vec<u8> {
    let stride = width as usize * 4;
    let mut raw = Vec::with_capacity((stride + 1) * height as usize);
    for row in rgba.chunks_exact(stride.max(1)).take(height as usize) {
        raw.push(FILTER_NONE);
        raw.extend_from_slice(row);
    }
    raw
}

/// zlib-compress at maximum effort
pub fn compress(raw: &[u8]) -> Result<Vec<u8>, IconError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(raw)?;
    Ok(encoder.finish()?)
}

/// Encode raw RGBA bytes as a PNG file
pub fn encode(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>, IconError> {
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(IconError::InvalidDimensions { width, height });
    }
    let expected = rgba_len(width, height).ok_or(IconError::InvalidDimensions { width, height })?;
    if rgba.len() != expected {
        return Err(IconError::BufferSizeMismatch {
            expected,
            actual: rgba.len(),
        });
    }

    let raw = scanlines(width, height, rgba);
    let compressed = compress(&raw)?;
    debug!(
        "encoding {}x{} png: {} scanline bytes -> {} compressed",
        width,
        height,
        raw.len(),
        compressed.len()
    );

    let mut png = Vec::with_capacity(SIGNATURE.len() + 3 * 12 + 13 + compressed.len());
    png.extend_from_slice(&SIGNATURE);
    write_chunk(&mut png, IHDR, &header(width, height));
    write_chunk(&mut png, IDAT, &compressed);
    write_chunk(&mut png, IEND, &[]);
    Ok(png)
}

/// Encode a pixel buffer as a PNG file
pub fn encode_buffer(buffer: &PixelBuffer) -> Result<Vec<u8>, IconError> {
    encode(buffer.width(), buffer.height(), buffer.as_bytes())
}
