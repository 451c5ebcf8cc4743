//! Length/tag/payload/CRC chunk framing

/// Chunk type tags used by the encoder
pub const IHDR: &[u8; 4] = b"IHDR";
pub const IDAT: &[u8; 4] = b"IDAT";
pub const IEND: &[u8; 4] = b"IEND";

/// CRC-32 (IEEE) over the tag followed by the payload
pub fn chunk_crc(tag: &[u8; 4], data: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(tag);
    hasher.update(data);
    hasher.finalize()
}

/// Append one framed chunk to `out`
///
/// Payloads larger than `u32::MAX` cannot be framed; callers keep IDAT well
/// under that by construction (dimensions are capped at 2^31 - 1 and the
/// buffer must fit in memory).
pub fn write_chunk(out: &mut Vec<u8>, tag: &[u8; 4], data: &[u8]) {
    out.reserve(12 + data.len());
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(data);
    out.extend_from_slice(&chunk_crc(tag, data).to_be_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iend_crc_is_fixed() {
        assert_eq!(chunk_crc(IEND, &[]), 0xAE42_6082);
    }

    #[test]
    fn test_chunk_layout() {
        let mut out = Vec::new();
        write_chunk(&mut out, b"tEST", &[1, 2, 3]);
        assert_eq!(out.len(), 12 + 3);
        assert_eq!(&out[0..4], &[0, 0, 0, 3]);
        assert_eq!(&out[4..8], b"tEST");
        assert_eq!(&out[8..11], &[1, 2, 3]);
        assert_eq!(&out[11..15], &chunk_crc(b"tEST", &[1, 2, 3]).to_be_bytes());
    }

    #[test]
    fn test_crc_matches_known_vector() {
        // CRC-32 check value for "123456789"
        assert_eq!(chunk_crc(b"1234", b"56789"), 0xCBF4_3926);
    }
}
