//! # Secure-Gate Type Aliases
//!
//! Fixed-size secret types built on [`secure-gate`](https://github.com/Slurp9187/secure-gate).
//! All of them wipe their storage on drop and require an explicit
//! `.expose_secret()` / `.expose_secret_mut()` to reach the bytes.
//!
//! Variable-length secrets (passwords, derived keys, decrypted payloads) use
//! [`SecretBuffer`](crate::secret::SecretBuffer) instead.
//!
//! ## Type Categories
//!
//! ### HMAC Primitives
//! - [`HmacSha256`] - PRF of the blob (KGK) derivation
//! - [`HmacSha384`] - PRF of the domain (master password) derivation
//! - [`HmacSha512`] - available to custom derivations
//!
//! ### Fixed-Size Secrets
//! - [`Aes256Key32`] - outer key, blob key
//! - [`Iv16`] - outer IV, inner IV
//! - [`Salt32`] - outer salt, inner salt
//! - [`Kgk64`] - key-generation key
//! - [`InnerBlock112`] - plaintext EEK structure (inner salt ‖ inner IV ‖ KGK)
//! - [`EncryptedKeyBlock112`] - the EEK as it appears on the wire
//! - [`DomainKeyMaterial48`] - outer key ‖ outer IV straight out of PBKDF2

use hmac::Hmac;
use sha2::{Sha256, Sha384, Sha512};

use crate::consts::{
    AES_BLOCK_SIZE, AES_KEY_SIZE, DOMAIN_KEY_MATERIAL_SIZE, EEK_SIZE, KGK_SIZE, SALT_SIZE,
};

// ─────────────────────────────────────────────────────────────────────────────
// HMAC primitives
// ─────────────────────────────────────────────────────────────────────────────
pub type HmacSha256 = Hmac<Sha256>;
pub type HmacSha384 = Hmac<Sha384>;
pub type HmacSha512 = Hmac<Sha512>;

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer — generic secure stack buffer (direct alias to secure-gate's Fixed)
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

pub type Block16 = SpanBuffer<AES_BLOCK_SIZE>; // one AES block

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size concrete secrets — alphabetical order
// ─────────────────────────────────────────────────────────────────────────────
pub type Aes256Key32 = SpanBuffer<AES_KEY_SIZE>;
pub type DomainKeyMaterial48 = SpanBuffer<DOMAIN_KEY_MATERIAL_SIZE>;
pub type EncryptedKeyBlock112 = SpanBuffer<EEK_SIZE>;
pub type InnerBlock112 = SpanBuffer<EEK_SIZE>;
pub type Iv16 = SpanBuffer<AES_BLOCK_SIZE>;
pub type Kgk64 = SpanBuffer<KGK_SIZE>;
pub type Salt32 = SpanBuffer<SALT_SIZE>;
