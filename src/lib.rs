// src/lib.rs

//! # sesam-crypter
//!
//! Layered envelope encryption of a password-vault blob under a master
//! password.
//!
//! A 64-byte key-generation key (KGK) and an arbitrary payload are sealed into
//! one self-describing blob:
//!
//! ```text
//! 0x01 ‖ outer salt (32) ‖ EEK (112) ‖ AES-256-CBC/PKCS#7(payload)
//! ```
//!
//! - the EEK is `inner salt ‖ inner IV ‖ KGK`, encrypted without padding under
//!   a key and IV stretched from the master password (PBKDF2-HMAC-SHA384,
//!   32 768 iterations);
//! - the payload is encrypted under a key stretched from the KGK and inner
//!   salt (PBKDF2-HMAC-SHA256, 1 024 iterations) with the inner IV.
//!
//! All secrets live in wiping buffers ([`SecretBuffer`] and the fixed-size
//! types in [`aliases`]).
//!
//! ## Features
//!
//! | Feature | Description | Default |
//! |:--------|:------------|:-------:|
//! | `compression` | `qCompress`-framed zlib payload compression via `flate2` | Yes |
//! | `batch-ops` | Parallel `encode_batch` / `decode_batch` via `rayon` | No |

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod compress;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod header;
pub mod secret;
pub mod utils;

// High-level API
pub use decryptor::{decode, DecodedBlob};
pub use encryptor::{encode, encode_with_fixed_inner, encode_with_password};
pub use error::CrypterError;
pub use secret::SecretBuffer;

// Key derivation and fresh randomness needed around `encode`.
pub use builders::kdf_builder::KdfBuilder;
pub use crypto::kdf::pbkdf2::{derive, derive_blob_key, derive_domain_key_and_iv};
pub use crypto::kdf::{HashAlgorithm, KdfConfig};
pub use crypto::rng::{generate_iv, generate_kgk, generate_salt};

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decode_batch, encode_batch};

pub use header::{read_format_version, FormatVersion};
