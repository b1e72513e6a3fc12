//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! Every public operation returns [`Result<T, CrypterError>`](CrypterError); no
//! operation panics on malformed input and no partial result is ever returned.

use thiserror::Error;

/// The error type for all envelope operations.
///
/// The first five variants classify failures of a blob; the remaining ones
/// report misuse of the lower-level primitives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CrypterError {
    /// The leading format-flag byte is not a known format version.
    ///
    /// The blob was produced by another scheme or by an incompatible future
    /// version. The contained value is the flag that was read.
    #[error("Format error: unknown format flag 0x{0:02x}")]
    Format(u8),

    /// The blob ended before a fixed-size field was complete.
    #[error("Truncated input: {field} needs {expected} bytes, {actual} available")]
    Truncated {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A decrypted fixed-size structure did not have its expected size.
    ///
    /// Always fatal. This signals a programming error or catastrophic
    /// corruption, never a wrong master password.
    #[error("Internal consistency error: {0}")]
    InternalConsistency(String),

    /// Padding validation of the payload layer failed.
    ///
    /// In practice this is the signal for a wrong master password (or a
    /// tampered ciphertext).
    #[error("Decryption error: payload padding is invalid (wrong master password?)")]
    Decryption,

    /// Decompression failed after successful decryption.
    #[error("Corrupt data: {0}")]
    CorruptData(String),

    /// Invalid key-derivation parameters (zero iterations, zero output length).
    #[error("KDF error: {0}")]
    Kdf(String),

    /// Invalid input to a cipher primitive (key/IV length, unaligned block data).
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// The operating system's random source failed.
    #[error("RNG error: {0}")]
    Rng(String),
}

impl CrypterError {
    /// `true` for the errors a caller should present as "wrong master password".
    #[must_use]
    pub const fn is_wrong_password(&self) -> bool {
        matches!(self, CrypterError::Decryption)
    }
}

impl From<&'static str> for CrypterError {
    fn from(msg: &'static str) -> Self {
        CrypterError::Crypto(msg.to_string())
    }
}
