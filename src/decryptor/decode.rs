//! src/decryptor/decode.rs
//! Envelope decoding — no partial results, every secret wiped on every path.

use secure_gate::RevealSecret;
use crate::aliases::{Kgk64, Salt32};
use crate::compress;
use crate::consts::SALT_SIZE;
use crate::crypto::cbc::{self, Padding};
use crate::crypto::kdf::pbkdf2::{derive_blob_key, derive_domain_key_and_iv};
use crate::decryptor::read::{read_exact_span, read_format_flag, read_span};
use crate::decryptor::session::decrypt_key_block;
use crate::error::CrypterError;
use crate::header::{FormatParams, FormatVersion};
use crate::secret::SecretBuffer;
use std::fmt;

/// Everything `decode` recovers from a blob.
pub struct DecodedBlob {
    /// The key-generation key carried in the EEK.
    pub kgk: Kgk64,
    /// The payload, decompressed if requested.
    pub payload: SecretBuffer,
}

impl fmt::Debug for DecodedBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedBlob")
            .field("kgk", &"[REDACTED; 64]")
            .field("payload", &self.payload)
            .finish()
    }
}

/// Recover the KGK and payload from a blob, given the master password.
///
/// The format flag and both fixed-size fields are checked before any key is
/// derived, so a foreign or truncated blob is rejected without spending the
/// domain-KDF iterations.
///
/// # Errors
///
/// - [`CrypterError::Format`] - unknown format flag
/// - [`CrypterError::Truncated`] - blob shorter than flag ‖ salt ‖ EEK
/// - [`CrypterError::InternalConsistency`] - decrypted EEK has the wrong size
/// - [`CrypterError::Decryption`] - payload padding invalid; in practice a
///   wrong master password
/// - [`CrypterError::CorruptData`] - decompression failed
///
/// There is no MAC: padding validation is the only integrity check, so a
/// tampered ciphertext whose padding happens to stay valid decodes to wrong
/// bytes instead of an error.
pub fn decode(
    password: &SecretBuffer,
    blob: &[u8],
    uncompress: bool,
) -> Result<DecodedBlob, CrypterError> {
    let mut input = blob;
    let version = read_format_flag(&mut input).inspect_err(|e| {
        tracing::debug!(error = %e, "rejecting blob before key derivation");
    })?;

    match version {
        FormatVersion::V1 => decode_v1(password, version.params(), input, uncompress),
    }
}

fn decode_v1(
    password: &SecretBuffer,
    params: &FormatParams,
    mut input: &[u8],
    uncompress: bool,
) -> Result<DecodedBlob, CrypterError> {
    let outer_salt: Salt32 = read_exact_span::<SALT_SIZE>(&mut input, "outer salt")?;
    let eek = read_span(&mut input, params.eek_len, "encrypted key block")?;
    let ciphertext = input;
    tracing::debug!(
        ciphertext_len = ciphertext.len(),
        uncompress,
        "decoding v1 vault blob"
    );

    let (outer_key, outer_iv) = derive_domain_key_and_iv(password, &outer_salt)?;
    let key_block = decrypt_key_block(&outer_key, &outer_iv, eek)?;
    drop((outer_key, outer_iv));

    let blob_key = derive_blob_key(key_block.kgk.expose_secret(), &key_block.inner_salt)?;

    let plain = cbc::decrypt(
        blob_key.expose_secret(),
        key_block.inner_iv.expose_secret(),
        ciphertext,
        Padding::Pkcs7,
    )
    .inspect_err(|e| {
        if e.is_wrong_password() {
            tracing::debug!("payload padding invalid: wrong master password or tampered blob");
        }
    })?;

    let payload = if uncompress {
        compress::decompress(plain.expose_secret())?
    } else {
        plain
    };

    tracing::debug!(payload_len = payload.len(), "vault blob decoded");
    Ok(DecodedBlob {
        kgk: key_block.kgk,
        payload,
    })
}
