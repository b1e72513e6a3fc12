// src/crypto/kdf/mod.rs

//! Password-based key derivation.
//!
//! One stretching function (PBKDF2-HMAC) in two fixed configurations:
//!
//! | Config | PRF | Iterations | Output |
//! |---|---|---|---|
//! | [`KdfConfig::DOMAIN`] | HMAC-SHA384 | 32 768 | outer key ‖ outer IV (48 bytes) |
//! | [`KdfConfig::BLOB`] | HMAC-SHA256 | 1 024 | blob key (32 bytes) |

pub mod pbkdf2;

use crate::consts::{AES_KEY_SIZE, DOMAIN_ITERATIONS, DOMAIN_KEY_MATERIAL_SIZE, KGK_ITERATIONS};

/// Hash function behind the HMAC pseudo-random function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// Digest size in bytes (one PBKDF2 output block).
    #[must_use]
    pub const fn output_size(self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
        }
    }
}

/// A named parameter set of the key-stretching function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfConfig {
    pub hash: HashAlgorithm,
    pub iterations: u32,
    pub output_len: usize,
}

impl KdfConfig {
    /// Master password → outer key and IV.
    pub const DOMAIN: Self = Self {
        hash: HashAlgorithm::Sha384,
        iterations: DOMAIN_ITERATIONS,
        output_len: DOMAIN_KEY_MATERIAL_SIZE,
    };

    /// KGK → blob key.
    pub const BLOB: Self = Self {
        hash: HashAlgorithm::Sha256,
        iterations: KGK_ITERATIONS,
        output_len: AES_KEY_SIZE,
    };
}
