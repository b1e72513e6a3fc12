//! src/builders/kdf_builder.rs
//! PBKDF2-HMAC builder over the crate's `derive`.

use secure_gate::RevealSecret;
use crate::aliases::Salt32;
use crate::crypto::kdf::pbkdf2::derive;
use crate::crypto::kdf::{HashAlgorithm, KdfConfig};
use crate::crypto::rng::SecureRandomExt;
use crate::error::CrypterError;
use crate::secret::SecretBuffer;

/// PBKDF2-HMAC key derivation builder
///
/// Defaults: the blob configuration (HMAC-SHA256, 1 024 iterations, 32 bytes)
/// and a fresh random 32-byte salt.
///
/// # Thread Safety
///
/// `Send + Sync`; every derivation is a pure function of the builder's fields.
#[derive(Debug, Clone)]
pub struct KdfBuilder {
    hash: HashAlgorithm,
    iterations: u32,
    output_len: usize,
    salt: Vec<u8>,
}

impl KdfBuilder {
    /// Create a builder with the blob configuration and a random salt.
    pub fn new() -> Result<Self, CrypterError> {
        let salt = Salt32::random()?;
        Ok(Self::from_config(&KdfConfig::BLOB).with_salt(salt.expose_secret()))
    }

    /// Start from a named configuration with an empty salt.
    #[must_use]
    pub fn from_config(config: &KdfConfig) -> Self {
        Self {
            hash: config.hash,
            iterations: config.iterations,
            output_len: config.output_len,
            salt: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_hash(mut self, hash: HashAlgorithm) -> Self {
        self.hash = hash;
        self
    }

    /// Set custom iteration count (minimum 1)
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations.max(1);
        self
    }

    #[must_use]
    pub fn with_output_len(mut self, output_len: usize) -> Self {
        self.output_len = output_len;
        self
    }

    #[must_use]
    pub fn with_salt(mut self, salt: &[u8]) -> Self {
        self.salt = salt.to_vec();
        self
    }

    #[must_use]
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    #[must_use]
    pub const fn hash(&self) -> HashAlgorithm {
        self.hash
    }

    #[must_use]
    pub const fn output_len(&self) -> usize {
        self.output_len
    }

    /// Derive a fresh secret from `password`.
    pub fn derive(&self, password: &SecretBuffer) -> Result<SecretBuffer, CrypterError> {
        derive(
            password,
            &self.salt,
            self.iterations,
            self.hash,
            self.output_len,
        )
    }
}
