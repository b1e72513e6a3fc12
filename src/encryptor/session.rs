//! src/encryptor/session.rs
//! Key-block wrapping for the v1 envelope.
//!
//! This module is the **exact mirror** of `decryptor/session.rs`. It builds the
//! 112-byte inner structure (inner salt ‖ inner IV ‖ KGK) and encrypts it
//! under the outer key/IV with AES-256-CBC and no padding, producing the EEK.
//!
//! This is a pure crypto primitive — no I/O.

use secure_gate::{RevealSecret, RevealSecretMut};
use crate::aliases::{Aes256Key32, EncryptedKeyBlock112, InnerBlock112, Iv16, Kgk64, Salt32};
use crate::consts::{AES_BLOCK_SIZE, EEK_SIZE, SALT_SIZE};
use crate::crypto::cbc::{self, Padding};
use crate::error::CrypterError;

const IV_OFFSET: usize = SALT_SIZE;
const KGK_OFFSET: usize = SALT_SIZE + AES_BLOCK_SIZE;

/// Assemble the plaintext key block: inner salt ‖ inner IV ‖ KGK.
#[inline]
pub fn build_key_block(inner_salt: &Salt32, inner_iv: &Iv16, kgk: &Kgk64) -> InnerBlock112 {
    let mut block = InnerBlock112::new([0u8; EEK_SIZE]);
    let bytes = block.expose_secret_mut();
    bytes[..IV_OFFSET].copy_from_slice(inner_salt.expose_secret());
    bytes[IV_OFFSET..KGK_OFFSET].copy_from_slice(inner_iv.expose_secret());
    bytes[KGK_OFFSET..].copy_from_slice(kgk.expose_secret());
    block
}

/// Encrypt the key block under the outer key/IV, producing the EEK.
///
/// # Errors
///
/// [`CrypterError::InternalConsistency`] if the cipher output is not exactly
/// 112 bytes. With no padding on a block-aligned input that cannot happen short
/// of a broken cipher wrapper.
pub fn encrypt_key_block(
    outer_key: &Aes256Key32,
    outer_iv: &Iv16,
    inner_salt: &Salt32,
    inner_iv: &Iv16,
    kgk: &Kgk64,
) -> Result<EncryptedKeyBlock112, CrypterError> {
    let block = build_key_block(inner_salt, inner_iv, kgk);

    let eek = cbc::encrypt(
        outer_key.expose_secret(),
        outer_iv.expose_secret(),
        block.expose_secret(),
        Padding::NoPadding,
    )?;

    let eek: [u8; EEK_SIZE] = eek.as_slice().try_into().map_err(|_| {
        CrypterError::InternalConsistency(format!(
            "EEK is {} bytes, expected {EEK_SIZE}",
            eek.len()
        ))
    })?;
    Ok(EncryptedKeyBlock112::new(eek))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_salt_iv_kgk() {
        let block = build_key_block(
            &Salt32::new([1; 32]),
            &Iv16::new([2; 16]),
            &Kgk64::new([3; 64]),
        );
        let bytes = block.expose_secret();
        assert!(bytes[..32].iter().all(|&b| b == 1));
        assert!(bytes[32..48].iter().all(|&b| b == 2));
        assert!(bytes[48..].iter().all(|&b| b == 3));
    }

    #[test]
    fn eek_is_112_bytes_and_not_plaintext() {
        let kgk = Kgk64::new([0u8; 64]);
        let eek = encrypt_key_block(
            &Aes256Key32::new([9; 32]),
            &Iv16::new([8; 16]),
            &Salt32::new([7; 32]),
            &Iv16::new([6; 16]),
            &kgk,
        )
        .unwrap();
        assert_eq!(eek.expose_secret().len(), EEK_SIZE);
        assert_ne!(&eek.expose_secret()[48..], &[0u8; 64][..]);
    }
}
