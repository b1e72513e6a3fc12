//! # Envelope Header
//!
//! The format flag at offset 0 selects a [`FormatVersion`], and each version
//! owns one [`FormatParams`] table: field sizes and both KDF configurations.
//! `encode` takes the flag and header length from the table, and `decode`
//! dispatches on the version and reads the EEK span by the table's length.
//! Fixed-width fields (salt, IV, KGK) are typed buffers sized by the constants
//! the v1 table is built from, so a future version with other sizes is a new
//! variant, a new table and its own decode function.
//!
//! # Header Format (v1)
//!
//! | Offset | Length | Field |
//! |---|---|---|
//! | 0 | 1 | format flag (`0x01`) |
//! | 1 | 32 | outer salt |
//! | 33 | 112 | EEK (inner salt ‖ inner IV ‖ KGK, encrypted) |
//! | 145 | n | padded ciphertext of the payload |

use crate::consts::{
    AES256_ENCRYPTED_MASTERKEY_FORMAT, AES_BLOCK_SIZE, AES_KEY_SIZE, EEK_SIZE, FORMAT_FLAG_SIZE,
    KGK_SIZE, SALT_SIZE,
};
use crate::crypto::kdf::KdfConfig;
use crate::error::CrypterError;

/// Known envelope versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FormatVersion {
    /// AES-256 encrypted master-key format, version 1.
    V1,
}

/// Sizes and derivation parameters of one format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatParams {
    pub flag: u8,
    pub salt_len: usize,
    pub iv_len: usize,
    pub key_len: usize,
    pub kgk_len: usize,
    pub eek_len: usize,
    /// Master password → outer key ‖ outer IV.
    pub domain_kdf: KdfConfig,
    /// KGK → blob key.
    pub blob_kdf: KdfConfig,
}

impl FormatParams {
    /// Bytes before the payload ciphertext.
    #[must_use]
    pub const fn header_len(&self) -> usize {
        FORMAT_FLAG_SIZE + self.salt_len + self.eek_len
    }
}

const V1_PARAMS: FormatParams = FormatParams {
    flag: AES256_ENCRYPTED_MASTERKEY_FORMAT,
    salt_len: SALT_SIZE,
    iv_len: AES_BLOCK_SIZE,
    key_len: AES_KEY_SIZE,
    kgk_len: KGK_SIZE,
    eek_len: EEK_SIZE,
    domain_kdf: KdfConfig::DOMAIN,
    blob_kdf: KdfConfig::BLOB,
};

impl FormatVersion {
    /// The version produced by `encode`.
    pub const LATEST: Self = Self::V1;

    #[must_use]
    pub const fn params(self) -> &'static FormatParams {
        match self {
            Self::V1 => &V1_PARAMS,
        }
    }

    #[must_use]
    pub const fn flag(self) -> u8 {
        self.params().flag
    }

    /// Map a flag byte to its version.
    pub fn from_flag(flag: u8) -> Result<Self, CrypterError> {
        match flag {
            AES256_ENCRYPTED_MASTERKEY_FORMAT => Ok(Self::V1),
            other => Err(CrypterError::Format(other)),
        }
    }
}

/// Read the format version of a blob without deriving any key.
///
/// # Errors
///
/// - [`CrypterError::Truncated`] - the blob is empty
/// - [`CrypterError::Format`] - the flag byte is unknown
///
/// # Example
///
/// ```
/// use sesam_crypter::header::{read_format_version, FormatVersion};
///
/// assert_eq!(read_format_version(&[0x01, 0xAA])?, FormatVersion::V1);
/// assert!(read_format_version(&[0x02]).is_err());
/// # Ok::<(), sesam_crypter::CrypterError>(())
/// ```
pub fn read_format_version(blob: &[u8]) -> Result<FormatVersion, CrypterError> {
    let flag = *blob.first().ok_or(CrypterError::Truncated {
        field: "format flag",
        expected: FORMAT_FLAG_SIZE,
        actual: 0,
    })?;
    FormatVersion::from_flag(flag)
}
