//! src/decryptor/read.rs
//! Fixed-size field reads from an in-memory blob.
//!
//! The blob is consumed through a `&mut &[u8]` cursor. Every read either
//! yields the whole field or fails with [`CrypterError::Truncated`]; nothing is
//! ever silently shortened.

use secure_gate::RevealSecretMut;
use crate::aliases::SpanBuffer;
use crate::error::CrypterError;
use crate::header::FormatVersion;
use crate::utils::split_checked;

/// Split the next `len` bytes off `input`.
#[inline]
pub fn read_span<'a>(
    input: &mut &'a [u8],
    len: usize,
    field: &'static str,
) -> Result<&'a [u8], CrypterError> {
    let data: &'a [u8] = *input;
    let (head, rest) = split_checked(data, len).ok_or(CrypterError::Truncated {
        field,
        expected: len,
        actual: data.len(),
    })?;
    *input = rest;
    Ok(head)
}

/// Read the next `N` bytes into a secure fixed-size buffer.
///
/// Returns `SpanBuffer<N>` (alias to `secure_gate::Fixed<[u8; N]>`).
#[inline]
pub fn read_exact_span<const N: usize>(
    input: &mut &[u8],
    field: &'static str,
) -> Result<SpanBuffer<N>, CrypterError> {
    let mut buf = SpanBuffer::new([0u8; N]);
    buf.expose_secret_mut()
        .copy_from_slice(read_span(input, N, field)?);
    Ok(buf)
}

/// Consume the format flag and map it to its version.
#[inline]
pub fn read_format_flag(input: &mut &[u8]) -> Result<FormatVersion, CrypterError> {
    let flag = read_span(input, 1, "format flag")?;
    FormatVersion::from_flag(flag[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use secure_gate::RevealSecret;

    #[test]
    fn reads_advance_cursor() {
        let data = [1u8, 2, 3, 4, 5];
        let mut input = &data[..];
        assert_eq!(read_span(&mut input, 2, "a").unwrap(), &[1, 2]);
        let rest: SpanBuffer<3> = read_exact_span(&mut input, "b").unwrap();
        assert_eq!(rest.expose_secret(), &[3, 4, 5]);
        assert!(input.is_empty());
    }

    #[test]
    fn short_read_reports_field() {
        let data = [0u8; 10];
        let mut input = &data[..];
        let Err(err) = read_exact_span::<32>(&mut input, "outer salt") else {
            panic!("10 bytes cannot hold a 32-byte field");
        };
        assert_eq!(
            err,
            CrypterError::Truncated {
                field: "outer salt",
                expected: 32,
                actual: 10
            }
        );
        // Cursor untouched on failure.
        assert_eq!(input.len(), 10);
    }
}
