//! src/encryptor/encode.rs
//! Envelope encoding — every intermediate secret lives in a wiping buffer.

use secure_gate::RevealSecret;
use crate::aliases::{Aes256Key32, Iv16, Kgk64, Salt32};
use crate::compress;
use crate::crypto::cbc::{self, Padding};
use crate::crypto::kdf::pbkdf2::{derive_blob_key, derive_domain_key_and_iv};
use crate::crypto::rng::SecureRandomExt;
use crate::encryptor::session::encrypt_key_block;
use crate::error::CrypterError;
use crate::header::FormatVersion;
use crate::secret::SecretBuffer;
use zeroize::Zeroizing;

/// Encrypt `data` and the KGK into one v1 blob.
///
/// `outer_key`/`outer_iv` must be derived from the master password and
/// `outer_salt` with the domain configuration (see
/// [`derive_domain_key_and_iv`]); the salt is embedded verbatim so that
/// [`decode`](crate::decode) can repeat that derivation. A fresh inner salt and
/// inner IV are drawn on every call, so two calls with identical inputs never
/// produce the same bytes.
///
/// Output: `0x01 ‖ outer salt (32) ‖ EEK (112) ‖ AES-256-CBC/PKCS#7(payload)`.
///
/// # Example
///
/// ```
/// use sesam_crypter::{decode, encode, derive_domain_key_and_iv, generate_kgk, generate_salt};
/// use sesam_crypter::SecretBuffer;
///
/// let password = SecretBuffer::from("correct horse battery staple");
/// let salt = generate_salt()?;
/// let (key, iv) = derive_domain_key_and_iv(&password, &salt)?;
/// let kgk = generate_kgk()?;
///
/// let blob = encode(&key, &iv, &salt, &kgk, b"hello vault", false)?;
/// let decoded = decode(&password, &blob, false)?;
/// assert_eq!(decoded.payload.expose_secret(), b"hello vault");
/// # Ok::<(), sesam_crypter::CrypterError>(())
/// ```
pub fn encode(
    outer_key: &Aes256Key32,
    outer_iv: &Iv16,
    outer_salt: &Salt32,
    kgk: &Kgk64,
    data: &[u8],
    compress: bool,
) -> Result<Vec<u8>, CrypterError> {
    let inner_salt = Salt32::random()?;
    let inner_iv = Iv16::random()?;
    encode_with_fixed_inner(
        outer_key,
        outer_iv,
        outer_salt,
        kgk,
        &inner_salt,
        &inner_iv,
        data,
        compress,
    )
}

/// [`encode`] with caller-chosen inner salt and inner IV.
///
/// Deterministic, for reproducible fixtures and cross-implementation vectors.
/// Never reuse an inner salt/IV pair for real data.
#[allow(clippy::too_many_arguments)]
pub fn encode_with_fixed_inner(
    outer_key: &Aes256Key32,
    outer_iv: &Iv16,
    outer_salt: &Salt32,
    kgk: &Kgk64,
    inner_salt: &Salt32,
    inner_iv: &Iv16,
    data: &[u8],
    compress: bool,
) -> Result<Vec<u8>, CrypterError> {
    let params = FormatVersion::LATEST.params();
    tracing::debug!(
        payload_len = data.len(),
        compress,
        version = ?FormatVersion::LATEST,
        "encoding vault blob"
    );

    let eek = encrypt_key_block(outer_key, outer_iv, inner_salt, inner_iv, kgk)?;
    let blob_key = derive_blob_key(kgk.expose_secret(), inner_salt)?;

    let compressed;
    let plain: &[u8] = if compress {
        compressed = Zeroizing::new(compress::compress(data)?);
        tracing::trace!(compressed_len = compressed.len(), "payload compressed");
        &compressed
    } else {
        data
    };

    let ciphertext = cbc::encrypt(
        blob_key.expose_secret(),
        inner_iv.expose_secret(),
        plain,
        Padding::Pkcs7,
    )?;

    let mut blob = Vec::with_capacity(params.header_len() + ciphertext.len());
    blob.push(params.flag);
    blob.extend_from_slice(outer_salt.expose_secret());
    blob.extend_from_slice(eek.expose_secret());
    blob.extend_from_slice(&ciphertext);

    tracing::debug!(blob_len = blob.len(), "vault blob encoded");
    Ok(blob)
}

/// Derive the outer key/IV from `password` under a fresh random outer salt,
/// then [`encode`].
pub fn encode_with_password(
    password: &SecretBuffer,
    kgk: &Kgk64,
    data: &[u8],
    compress: bool,
) -> Result<Vec<u8>, CrypterError> {
    let outer_salt = Salt32::random()?;
    let (outer_key, outer_iv) = derive_domain_key_and_iv(password, &outer_salt)?;
    encode(&outer_key, &outer_iv, &outer_salt, kgk, data, compress)
}
