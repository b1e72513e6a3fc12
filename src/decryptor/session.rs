//! src/decryptor/session.rs
//! Key-block unwrapping — mirror of `encryptor/session.rs`.
//!
//! Decrypts the EEK with the outer key/IV (no padding) and splits the result
//! into inner salt, inner IV and KGK. The no-padding path has no self-check:
//! a wrong master password yields a garbage KGK here, and only the payload
//! layer's padding validation reveals it.

use secure_gate::{RevealSecret, RevealSecretMut};
use crate::aliases::{Aes256Key32, Iv16, Kgk64, Salt32};
use crate::consts::{AES_BLOCK_SIZE, EEK_SIZE, KGK_SIZE, SALT_SIZE};
use crate::crypto::cbc::{self, Padding};
use crate::error::CrypterError;
use std::fmt;

/// The decrypted EEK, split into its fields.
pub struct KeyBlock {
    pub inner_salt: Salt32,
    pub inner_iv: Iv16,
    pub kgk: Kgk64,
}

impl fmt::Debug for KeyBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyBlock([REDACTED])")
    }
}

/// Decrypt and split the 112-byte EEK.
///
/// # Errors
///
/// - [`CrypterError::Crypto`] if `eek` is not block-aligned
/// - [`CrypterError::InternalConsistency`] if the decrypted structure is not
///   exactly 112 bytes (fatal; never a wrong-password signal)
pub fn decrypt_key_block(
    outer_key: &Aes256Key32,
    outer_iv: &Iv16,
    eek: &[u8],
) -> Result<KeyBlock, CrypterError> {
    let inner = cbc::decrypt(
        outer_key.expose_secret(),
        outer_iv.expose_secret(),
        eek,
        Padding::NoPadding,
    )?;

    if inner.len() != EEK_SIZE {
        return Err(CrypterError::InternalConsistency(format!(
            "decrypted key block is {} bytes, expected {EEK_SIZE}",
            inner.len()
        )));
    }

    let bytes = inner.expose_secret();
    let mut block = KeyBlock {
        inner_salt: Salt32::new([0u8; SALT_SIZE]),
        inner_iv: Iv16::new([0u8; AES_BLOCK_SIZE]),
        kgk: Kgk64::new([0u8; KGK_SIZE]),
    };
    block
        .inner_salt
        .expose_secret_mut()
        .copy_from_slice(&bytes[..SALT_SIZE]);
    block
        .inner_iv
        .expose_secret_mut()
        .copy_from_slice(&bytes[SALT_SIZE..SALT_SIZE + AES_BLOCK_SIZE]);
    block
        .kgk
        .expose_secret_mut()
        .copy_from_slice(&bytes[SALT_SIZE + AES_BLOCK_SIZE..]);

    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encryptor::encrypt_key_block;

    #[test]
    fn mirrors_encrypt_key_block() {
        let key = Aes256Key32::new([0x11; 32]);
        let iv = Iv16::new([0x22; 16]);
        let kgk = Kgk64::new(core::array::from_fn(|i| i as u8));

        let eek = encrypt_key_block(
            &key,
            &iv,
            &Salt32::new([0x33; 32]),
            &Iv16::new([0x44; 16]),
            &kgk,
        )
        .unwrap();
        let block = decrypt_key_block(&key, &iv, eek.expose_secret()).unwrap();

        assert_eq!(block.inner_salt.expose_secret(), &[0x33; 32]);
        assert_eq!(block.inner_iv.expose_secret(), &[0x44; 16]);
        assert_eq!(block.kgk.expose_secret(), kgk.expose_secret());
    }

    #[test]
    fn wrong_sized_block_is_internal_consistency_error() {
        let key = Aes256Key32::new([0x11; 32]);
        let iv = Iv16::new([0x22; 16]);
        let err = decrypt_key_block(&key, &iv, &[0u8; 96]).unwrap_err();
        assert!(matches!(err, CrypterError::InternalConsistency(_)));
    }

    #[test]
    fn wrong_key_gives_garbage_not_error() {
        let kgk = Kgk64::new([0xAB; 64]);
        let eek = encrypt_key_block(
            &Aes256Key32::new([1; 32]),
            &Iv16::new([2; 16]),
            &Salt32::new([3; 32]),
            &Iv16::new([4; 16]),
            &kgk,
        )
        .unwrap();

        let wrong_key = Aes256Key32::new([9; 32]);
        let block = decrypt_key_block(&wrong_key, &Iv16::new([2; 16]), eek.expose_secret()).unwrap();
        assert_ne!(block.kgk.expose_secret(), kgk.expose_secret());
    }
}
