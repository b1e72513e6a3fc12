// src/crypto/rng.rs
//! Secure randomness for fixed-size secrets.
//!
//! Adds `T::random()` to every [`SpanBuffer`](crate::aliases::SpanBuffer) type
//! (`Salt32`, `Iv16`, `Kgk64`, …), drawing straight from the operating
//! system's CSPRNG. `OsRng` holds no state, so concurrent callers never share
//! or replay a stream.

use secure_gate::RevealSecretMut;
use crate::aliases::{Iv16, Kgk64, Salt32};
use crate::error::CrypterError;
use rand::{rngs::OsRng, TryRngCore};
use secure_gate::Fixed;

/// Extension trait – gives `.random()` to all fixed-size secret types
pub trait SecureRandomExt: Sized {
    /// Generate a cryptographically secure random instance of this type
    fn random() -> Result<Self, CrypterError>;
}

/// Blanket impl – every `Fixed<[u8; N]>` gets `.random()`
impl<const N: usize> SecureRandomExt for Fixed<[u8; N]> {
    #[inline]
    fn random() -> Result<Self, CrypterError> {
        let mut out = Fixed::new([0u8; N]);
        fill_random(out.expose_secret_mut())?;
        Ok(out)
    }
}

/// Fill `dest` from the OS random source.
///
/// Failure is reported, never swallowed: a blob encoded with a predictable
/// inner salt or IV would silently lose its semantic security.
#[inline]
pub fn fill_random(dest: &mut [u8]) -> Result<(), CrypterError> {
    OsRng
        .try_fill_bytes(dest)
        .map_err(|e| CrypterError::Rng(format!("OS random source failed: {e}")))
}

/// A fresh 64-byte key-generation key.
pub fn generate_kgk() -> Result<Kgk64, CrypterError> {
    Kgk64::random()
}

/// A fresh 32-byte salt (outer or inner).
pub fn generate_salt() -> Result<Salt32, CrypterError> {
    Salt32::random()
}

/// A fresh 16-byte CBC IV.
pub fn generate_iv() -> Result<Iv16, CrypterError> {
    Iv16::random()
}

#[cfg(test)]
mod tests {
    use super::*;
    use secure_gate::RevealSecret;

    #[test]
    fn draws_differ() {
        let a = generate_kgk().unwrap();
        let b = generate_kgk().unwrap();
        assert_ne!(a.expose_secret(), b.expose_secret());
    }

    #[test]
    fn salt_is_not_all_zero() {
        // 2^-256 false-failure probability.
        let salt = generate_salt().unwrap();
        assert_ne!(salt.expose_secret(), &[0u8; 32]);
    }
}
