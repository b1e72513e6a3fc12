//! src/crypto/kdf/pbkdf2.rs

use secure_gate::{RevealSecret, RevealSecretMut};
use crate::aliases::{Aes256Key32, DomainKeyMaterial48, HmacSha256, HmacSha384, HmacSha512};
use crate::aliases::{Iv16, Salt32};
use crate::consts::{AES_BLOCK_SIZE, AES_KEY_SIZE, PBKDF2_MIN_ITER};
use crate::crypto::kdf::{HashAlgorithm, KdfConfig};
use crate::error::CrypterError;
use crate::secret::SecretBuffer;

use pbkdf2::pbkdf2;

/// Derive `out.len()` bytes of PBKDF2-HMAC output directly into `out`.
///
/// Output blocks are concatenated and the last one truncated exactly as
/// RFC 8018 prescribes, so any conforming implementation reproduces the bytes.
#[inline]
pub fn derive_into(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    hash: HashAlgorithm,
    out: &mut [u8],
) -> Result<(), CrypterError> {
    if iterations < PBKDF2_MIN_ITER {
        return Err(CrypterError::Kdf("PBKDF2 iterations must be ≥1".into()));
    }
    if out.is_empty() {
        return Err(CrypterError::Kdf("PBKDF2 output length must be ≥1".into()));
    }

    let result = match hash {
        HashAlgorithm::Sha256 => pbkdf2::<HmacSha256>(password, salt, iterations, out),
        HashAlgorithm::Sha384 => pbkdf2::<HmacSha384>(password, salt, iterations, out),
        HashAlgorithm::Sha512 => pbkdf2::<HmacSha512>(password, salt, iterations, out),
    };
    result.map_err(|e| CrypterError::Kdf(format!("PBKDF2 failed: {e}")))
}

/// Stretch `password` into a fresh secret of `output_len` bytes.
///
/// Empty passwords and empty salts are accepted and give deterministic output.
pub fn derive(
    password: &SecretBuffer,
    salt: &[u8],
    iterations: u32,
    hash: HashAlgorithm,
    output_len: usize,
) -> Result<SecretBuffer, CrypterError> {
    let mut out = SecretBuffer::zeroed(output_len);
    derive_into(
        password.expose_secret(),
        salt,
        iterations,
        hash,
        out.expose_secret_mut(),
    )?;
    Ok(out)
}

/// Derive with one of the named configurations.
#[inline]
pub fn derive_with(
    config: &KdfConfig,
    password: &SecretBuffer,
    salt: &[u8],
) -> Result<SecretBuffer, CrypterError> {
    derive(password, salt, config.iterations, config.hash, config.output_len)
}

/// Master password + outer salt → (outer key, outer IV), domain configuration.
///
/// This is the derivation a caller runs before `encode`; `decode` runs it
/// internally.
pub fn derive_domain_key_and_iv(
    password: &SecretBuffer,
    salt: &Salt32,
) -> Result<(Aes256Key32, Iv16), CrypterError> {
    let config = KdfConfig::DOMAIN;
    let mut material = DomainKeyMaterial48::new([0u8; 48]);
    derive_into(
        password.expose_secret(),
        salt.expose_secret(),
        config.iterations,
        config.hash,
        material.expose_secret_mut(),
    )?;

    let mut key = Aes256Key32::new([0u8; AES_KEY_SIZE]);
    let mut iv = Iv16::new([0u8; AES_BLOCK_SIZE]);
    key.expose_secret_mut()
        .copy_from_slice(&material.expose_secret()[..AES_KEY_SIZE]);
    iv.expose_secret_mut()
        .copy_from_slice(&material.expose_secret()[AES_KEY_SIZE..]);
    Ok((key, iv))
}

/// KGK + inner salt → blob key, blob configuration.
pub fn derive_blob_key(kgk: &[u8], inner_salt: &Salt32) -> Result<Aes256Key32, CrypterError> {
    let config = KdfConfig::BLOB;
    let mut key = Aes256Key32::new([0u8; AES_KEY_SIZE]);
    derive_into(
        kgk,
        inner_salt.expose_secret(),
        config.iterations,
        config.hash,
        key.expose_secret_mut(),
    )?;
    Ok(key)
}
