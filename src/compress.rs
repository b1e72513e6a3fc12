//! Optional payload compression.
//!
//! Qt `qCompress` framing: a 4-byte big-endian uncompressed length followed by
//! a zlib stream at level 9. An empty input is just the four zero bytes.
//! Disabled builds (`--no-default-features`) reject the compress flag instead
//! of silently ignoring it.

use crate::error::CrypterError;
use crate::secret::SecretBuffer;

/// Length of the big-endian size prefix.
#[cfg(feature = "compression")]
const PREFIX_LEN: usize = 4;

/// Deflate cannot expand beyond ~1032:1; a larger size prefix is a corrupt
/// stream.
#[cfg(feature = "compression")]
const MAX_RATIO: usize = 1032;

#[cfg(feature = "compression")]
pub fn compress(data: &[u8]) -> Result<Vec<u8>, CrypterError> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;
    use std::io::Write;

    let len = u32::try_from(data.len()).map_err(|_| {
        CrypterError::Crypto("payload too large to compress (size prefix is 32-bit)".into())
    })?;
    if data.is_empty() {
        return Ok(vec![0u8; PREFIX_LEN]);
    }

    let mut out = Vec::with_capacity(PREFIX_LEN + data.len() / 2 + 16);
    out.extend_from_slice(&len.to_be_bytes());
    let mut encoder = ZlibEncoder::new(out, Compression::best());
    encoder
        .write_all(data)
        .map_err(|e| CrypterError::Crypto(format!("zlib compression failed: {e}")))?;
    encoder
        .finish()
        .map_err(|e| CrypterError::Crypto(format!("zlib compression failed: {e}")))
}

#[cfg(feature = "compression")]
pub fn decompress(data: &[u8]) -> Result<SecretBuffer, CrypterError> {
    use flate2::read::ZlibDecoder;
    use std::io::Read;
    use zeroize::Zeroizing;

    let prefix: [u8; PREFIX_LEN] = data
        .get(..PREFIX_LEN)
        .and_then(|p| p.try_into().ok())
        .ok_or_else(|| CrypterError::CorruptData("missing uncompressed-size prefix".into()))?;
    let claimed = u32::from_be_bytes(prefix) as usize;
    let body = &data[PREFIX_LEN..];

    if body.is_empty() {
        return if claimed == 0 {
            Ok(SecretBuffer::new(Vec::new()))
        } else {
            Err(CrypterError::CorruptData("missing zlib stream".into()))
        };
    }
    if claimed > body.len().saturating_mul(MAX_RATIO).saturating_add(16) {
        return Err(CrypterError::CorruptData(format!(
            "size prefix {claimed} impossible for {} compressed bytes",
            body.len()
        )));
    }

    // Exact capacity: overlong streams are rejected before they are appended,
    // so the buffer never reallocates.
    let mut plain = SecretBuffer::new(Vec::with_capacity(claimed));
    let mut chunk = Zeroizing::new([0u8; 4096]);
    let mut decoder = ZlibDecoder::new(body);
    loop {
        let n = decoder
            .read(&mut chunk[..])
            .map_err(|e| CrypterError::CorruptData(format!("zlib decompression failed: {e}")))?;
        if n == 0 {
            break;
        }
        if plain.len() + n > claimed {
            return Err(CrypterError::CorruptData(format!(
                "zlib stream longer than size prefix {claimed}"
            )));
        }
        plain.extend_from_slice(&chunk[..n]);
    }

    if plain.len() != claimed {
        return Err(CrypterError::CorruptData(format!(
            "size prefix {claimed} does not match {} decompressed bytes",
            plain.len()
        )));
    }
    Ok(plain)
}

#[cfg(not(feature = "compression"))]
pub fn compress(_data: &[u8]) -> Result<Vec<u8>, CrypterError> {
    Err("compression support not compiled in".into())
}

#[cfg(not(feature = "compression"))]
pub fn decompress(_data: &[u8]) -> Result<SecretBuffer, CrypterError> {
    Err("compression support not compiled in".into())
}

#[cfg(all(test, feature = "compression"))]
mod tests {
    use super::*;

    #[test]
    fn repetitive_data_shrinks() {
        let data = vec![b'a'; 4096];
        let packed = compress(&data).unwrap();
        assert!(packed.len() < 200);
        assert_eq!(&packed[..4], &4096u32.to_be_bytes());
        assert_eq!(decompress(&packed).unwrap().expose_secret(), &data[..]);
    }

    #[test]
    fn empty_payload_is_four_zero_bytes() {
        let packed = compress(b"").unwrap();
        assert_eq!(packed, [0u8; 4]);
        assert!(decompress(&packed).unwrap().is_empty());
    }

    #[test]
    fn qcompress_frame_decodes() {
        // qCompress("hello vault", 9)
        let frame = [
            0x00, 0x00, 0x00, 0x0b, 0x78, 0xda, 0xcb, 0x48, 0xcd, 0xc9, 0xc9, 0x57, 0x28, 0x4b,
            0x2c, 0xcd, 0x29, 0x01, 0x00, 0x19, 0xe7, 0x04, 0x61,
        ];
        assert_eq!(decompress(&frame).unwrap().expose_secret(), b"hello vault");

        // Encoders may pick different deflate blocks; only the frame is fixed.
        let ours = compress(b"hello vault").unwrap();
        assert_eq!(&ours[..5], &frame[..5]);
        assert_eq!(decompress(&ours).unwrap().expose_secret(), b"hello vault");
    }

    #[test]
    fn garbage_is_corrupt_data() {
        let err = decompress(&[0x7F, 0xFF, 0xFF, 0xFF, 1, 2, 3]).unwrap_err();
        assert!(matches!(err, CrypterError::CorruptData(_)));

        let err = decompress(&[0x00, 0x00, 0x00, 0x03, 1, 2, 3]).unwrap_err();
        assert!(matches!(err, CrypterError::CorruptData(_)));

        let err = decompress(&[0x01, 0x00]).unwrap_err();
        assert!(matches!(err, CrypterError::CorruptData(_)));

        let err = decompress(&[0x00, 0x00, 0x00, 0x05]).unwrap_err();
        assert!(matches!(err, CrypterError::CorruptData(_)));
    }

    #[test]
    fn wrong_size_prefix_is_corrupt_data() {
        let mut packed = compress(b"hello hello hello hello").unwrap();
        for delta in [-1i8, 1] {
            packed[3] = 23u8.wrapping_add_signed(delta);
            assert!(matches!(
                decompress(&packed).unwrap_err(),
                CrypterError::CorruptData(_)
            ));
        }
    }
}
