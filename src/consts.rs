//! # Constants
//!
//! Sizes, iteration counts and the format flag of the version-1 envelope.
//! These are fixed by the wire format: every implementation must agree on them
//! for blobs to round-trip. [`crate::header::FormatParams`] groups them per
//! format version.

/// Format flag of the "AES-256 encrypted master-key format v1" envelope.
pub const AES256_ENCRYPTED_MASTERKEY_FORMAT: u8 = 0x01;

/// Length of the format-flag field.
pub const FORMAT_FLAG_SIZE: usize = 1;

/// Outer and inner salt size (32 bytes).
pub const SALT_SIZE: usize = 32;

/// AES-256 key size (32 bytes).
pub const AES_KEY_SIZE: usize = 256 / 8;

/// AES block size; also the IV size for CBC (16 bytes).
pub const AES_BLOCK_SIZE: usize = 16;

/// Key-generation key size (64 bytes).
pub const KGK_SIZE: usize = 64;

/// Encrypted-encryption-key size: inner salt ‖ inner IV ‖ KGK (112 bytes).
pub const EEK_SIZE: usize = SALT_SIZE + AES_BLOCK_SIZE + KGK_SIZE;

/// Length of the fixed-size envelope header (flag ‖ outer salt ‖ EEK).
pub const HEADER_SIZE: usize = FORMAT_FLAG_SIZE + SALT_SIZE + EEK_SIZE;

/// PBKDF2 iterations for the master password → outer key/IV derivation.
pub const DOMAIN_ITERATIONS: u32 = 32_768;

/// PBKDF2 iterations for the KGK → blob key derivation.
///
/// The KGK is already high entropy, so this count stays low.
pub const KGK_ITERATIONS: u32 = 1_024;

/// Output length of the domain derivation: outer key ‖ outer IV (48 bytes).
pub const DOMAIN_KEY_MATERIAL_SIZE: usize = AES_KEY_SIZE + AES_BLOCK_SIZE;

/// Minimum allowed PBKDF2 iteration count.
pub const PBKDF2_MIN_ITER: u32 = 1;

// The EEK structure must stay block-aligned for the no-padding path.
const _: () = assert!(EEK_SIZE % AES_BLOCK_SIZE == 0);
const _: () = assert!(EEK_SIZE == 112);
const _: () = assert!(HEADER_SIZE == 145);
