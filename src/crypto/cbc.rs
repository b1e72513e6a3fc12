//! src/crypto/cbc.rs
//! AES-256-CBC with a choice of no padding or PKCS#7 padding.
//!
//! The only cipher of the envelope format. Chaining is done block by block on
//! `aes` with secure-gate scratch buffers, so no plaintext block outlives the
//! call except in the returned buffer. The expanded key schedules are wiped on
//! drop (`aes` `zeroize` feature), and the working `aes::Block` is wiped after
//! every use.
//!
//! - [`Padding::NoPadding`] is used for the fixed 112-byte EEK structure. It
//!   has no self-check: decrypting with a wrong key silently yields garbage.
//! - [`Padding::Pkcs7`] is used for the payload. Decryption validates and
//!   strips the padding and fails with [`CrypterError::Decryption`].

use secure_gate::{RevealSecret, RevealSecretMut};
use crate::aliases::Block16;
use crate::consts::{AES_BLOCK_SIZE, AES_KEY_SIZE};
use crate::error::CrypterError;
use crate::secret::SecretBuffer;
use crate::utils::xor_blocks;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes256Dec, Aes256Enc, Block as AesBlock};
use zeroize::Zeroize;

/// Block padding scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// Input must already be a multiple of the block size.
    NoPadding,
    /// PKCS#7: 1..=16 bytes, each holding the padding length.
    Pkcs7,
}

#[inline]
fn check_iv(iv: &[u8]) -> Result<Block16, CrypterError> {
    let iv: [u8; AES_BLOCK_SIZE] = iv
        .try_into()
        .map_err(|_| CrypterError::Crypto(format!("IV must be {AES_BLOCK_SIZE} bytes")))?;
    Ok(Block16::new(iv))
}

#[inline]
fn key_error() -> CrypterError {
    CrypterError::Crypto(format!("AES-256 key must be {AES_KEY_SIZE} bytes"))
}

/// Encrypt one block in CBC mode: `out ← E(block ⊕ prev)`, `prev ← out`.
#[inline(always)]
fn encrypt_chained(
    cipher: &Aes256Enc,
    plain: &[u8],
    prev: &mut Block16,
    scratch: &mut Block16,
    out: &mut Vec<u8>,
) {
    xor_blocks(plain, prev.expose_secret(), scratch.expose_secret_mut());
    let mut aes_block = AesBlock::from(*scratch.expose_secret());
    cipher.encrypt_block(&mut aes_block);
    out.extend_from_slice(aes_block.as_slice());
    prev.expose_secret_mut().copy_from_slice(aes_block.as_slice());
    aes_block.as_mut_slice().zeroize();
}

/// Encrypt `plaintext` under `key`/`iv`.
///
/// With [`Padding::Pkcs7`] the output is always one to sixteen bytes longer
/// than the input; with [`Padding::NoPadding`] it has the input's length.
pub fn encrypt(
    key: &[u8],
    iv: &[u8],
    plaintext: &[u8],
    padding: Padding,
) -> Result<Vec<u8>, CrypterError> {
    let cipher = Aes256Enc::new_from_slice(key).map_err(|_| key_error())?;
    let mut prev = check_iv(iv)?;

    let remainder = plaintext.len() % AES_BLOCK_SIZE;
    let pad_len = match padding {
        Padding::NoPadding if remainder != 0 => {
            return Err(CrypterError::Crypto(format!(
                "unpadded input must be a multiple of {AES_BLOCK_SIZE} bytes, got {}",
                plaintext.len()
            )));
        }
        Padding::NoPadding => 0,
        Padding::Pkcs7 => AES_BLOCK_SIZE - remainder,
    };

    let mut out = Vec::with_capacity(plaintext.len() + pad_len);
    let mut scratch = Block16::new([0u8; AES_BLOCK_SIZE]);

    let blocks = plaintext.chunks_exact(AES_BLOCK_SIZE);
    let tail = blocks.remainder();
    for chunk in blocks {
        encrypt_chained(&cipher, chunk, &mut prev, &mut scratch, &mut out);
    }

    if padding == Padding::Pkcs7 {
        let mut last = Block16::new([pad_len as u8; AES_BLOCK_SIZE]);
        last.expose_secret_mut()[..tail.len()].copy_from_slice(tail);
        encrypt_chained(&cipher, last.expose_secret(), &mut prev, &mut scratch, &mut out);
    }

    Ok(out)
}

/// Decrypt `ciphertext` under `key`/`iv`.
///
/// The plaintext comes back in a [`SecretBuffer`]. On the PKCS#7 path, an
/// empty or misaligned ciphertext and malformed padding all map to
/// [`CrypterError::Decryption`].
pub fn decrypt(
    key: &[u8],
    iv: &[u8],
    ciphertext: &[u8],
    padding: Padding,
) -> Result<SecretBuffer, CrypterError> {
    let cipher = Aes256Dec::new_from_slice(key).map_err(|_| key_error())?;
    let mut prev = check_iv(iv)?;

    if ciphertext.len() % AES_BLOCK_SIZE != 0 {
        return Err(match padding {
            Padding::NoPadding => CrypterError::Crypto(format!(
                "ciphertext must be a multiple of {AES_BLOCK_SIZE} bytes, got {}",
                ciphertext.len()
            )),
            Padding::Pkcs7 => CrypterError::Decryption,
        });
    }
    if padding == Padding::Pkcs7 && ciphertext.is_empty() {
        return Err(CrypterError::Decryption);
    }

    // Exact capacity: extending never reallocates, so no stray copies.
    let mut plain = SecretBuffer::new(Vec::with_capacity(ciphertext.len()));
    let mut scratch = Block16::new([0u8; AES_BLOCK_SIZE]);

    for chunk in ciphertext.chunks_exact(AES_BLOCK_SIZE) {
        let mut aes_block = *AesBlock::from_slice(chunk);
        cipher.decrypt_block(&mut aes_block);
        xor_blocks(
            aes_block.as_slice(),
            prev.expose_secret(),
            scratch.expose_secret_mut(),
        );
        aes_block.as_mut_slice().zeroize();
        plain.extend_from_slice(scratch.expose_secret());
        prev.expose_secret_mut().copy_from_slice(chunk);
    }

    if padding == Padding::Pkcs7 {
        let pad_len = pkcs7_padding_len(plain.expose_secret()).ok_or(CrypterError::Decryption)?;
        let keep = plain.len() - pad_len;
        plain.truncate(keep);
    }

    Ok(plain)
}

/// Length of valid PKCS#7 padding at the end of `data`, or `None`.
///
/// Inspects all sixteen trailing bytes regardless of the claimed length.
fn pkcs7_padding_len(data: &[u8]) -> Option<usize> {
    let last_block = data.get(data.len().checked_sub(AES_BLOCK_SIZE)?..)?;
    let pad = last_block[AES_BLOCK_SIZE - 1];
    let pad_len = usize::from(pad);

    let mut bad = u8::from(pad_len == 0 || pad_len > AES_BLOCK_SIZE);
    for (i, &byte) in last_block.iter().rev().enumerate() {
        let in_padding = u8::from(i < pad_len);
        bad |= in_padding & u8::from(byte != pad);
    }

    (bad == 0).then_some(pad_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; 32] = [0x42; 32];
    const IV: [u8; 16] = [0x24; 16];

    #[test]
    fn key_schedules_wipe_on_drop() {
        fn wipes_on_drop<T: zeroize::ZeroizeOnDrop>() {}
        wipes_on_drop::<Aes256Enc>();
        wipes_on_drop::<Aes256Dec>();
    }

    #[test]
    fn pkcs7_adds_full_block_when_aligned() {
        let ct = encrypt(&KEY, &IV, &[0u8; 32], Padding::Pkcs7).unwrap();
        assert_eq!(ct.len(), 48);
    }

    #[test]
    fn pkcs7_empty_plaintext_is_one_block() {
        let ct = encrypt(&KEY, &IV, b"", Padding::Pkcs7).unwrap();
        assert_eq!(ct.len(), 16);
        let pt = decrypt(&KEY, &IV, &ct, Padding::Pkcs7).unwrap();
        assert!(pt.is_empty());
    }

    #[test]
    fn no_padding_keeps_length() {
        let ct = encrypt(&KEY, &IV, &[7u8; 112], Padding::NoPadding).unwrap();
        assert_eq!(ct.len(), 112);
        let pt = decrypt(&KEY, &IV, &ct, Padding::NoPadding).unwrap();
        assert_eq!(pt.expose_secret(), &[7u8; 112]);
    }

    #[test]
    fn no_padding_rejects_unaligned_input() {
        let err = encrypt(&KEY, &IV, &[0u8; 15], Padding::NoPadding).unwrap_err();
        assert!(matches!(err, CrypterError::Crypto(_)));
    }

    #[test]
    fn wrong_key_length_rejected() {
        let err = encrypt(&[0u8; 16], &IV, b"x", Padding::Pkcs7).unwrap_err();
        assert!(matches!(err, CrypterError::Crypto(_)));
    }

    #[test]
    fn wrong_iv_length_rejected() {
        let err = decrypt(&KEY, &[0u8; 8], &[0u8; 16], Padding::NoPadding).unwrap_err();
        assert!(matches!(err, CrypterError::Crypto(_)));
    }

    #[test]
    fn pkcs7_rejects_misaligned_and_empty() {
        assert_eq!(
            decrypt(&KEY, &IV, &[0u8; 17], Padding::Pkcs7).unwrap_err(),
            CrypterError::Decryption
        );
        assert_eq!(
            decrypt(&KEY, &IV, &[], Padding::Pkcs7).unwrap_err(),
            CrypterError::Decryption
        );
    }

    #[test]
    fn padding_validation() {
        let mut block = [0u8; 16];
        block[15] = 0;
        assert_eq!(pkcs7_padding_len(&block), None);

        block[15] = 17;
        assert_eq!(pkcs7_padding_len(&block), None);

        block = [4u8; 16];
        block[11] = 3;
        assert_eq!(pkcs7_padding_len(&block), Some(4));
        block[12] = 3;
        assert_eq!(pkcs7_padding_len(&block), None);

        assert_eq!(pkcs7_padding_len(&[16u8; 16]), Some(16));
        assert_eq!(pkcs7_padding_len(&[1u8; 8]), None);
    }
}
