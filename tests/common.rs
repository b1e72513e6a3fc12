//! tests/common.rs
//! Common constants and fixtures shared across test files

#![allow(dead_code)] // Each test crate uses a different subset

use sesam_crypter::aliases::{Aes256Key32, Iv16, Kgk64, Salt32};
use sesam_crypter::{derive_domain_key_and_iv, SecretBuffer};

/// Master password of the concrete scenarios
pub const TEST_PASSWORD: &str = "correct horse battery staple";

pub const WRONG_PASSWORD: &str = "Tr0ub4dor&3";

pub const TEST_PAYLOAD: &[u8] = b"hello vault";

/// 27 bytes → two cipher blocks, last block padded with five 0x05 bytes
pub const TWO_BLOCK_PAYLOAD: &[u8] = b"twenty-seven byte payload!!";

pub const OUTER_SALT: [u8; 32] = [0x5A; 32];
pub const INNER_SALT: [u8; 32] = [0xC3; 32];
pub const INNER_IV: [u8; 16] = [0x3C; 16];

/// PBKDF2-HMAC-SHA384(`TEST_PASSWORD`, `OUTER_SALT`, 32 768) → outer key ‖ outer IV
pub const OUTER_KEY_IV_HEX: &str = "653519e5b1718a312d2d5b0833bdc998afe9d57702b36172d8e6ee075b4ba345\
c1991d0bc21f6866539a4627f754095c";

/// `TEST_PAYLOAD` sealed with `counting_kgk()`, `INNER_SALT` and `INNER_IV`, uncompressed
pub const GOLDEN_BLOB_HEX: &str = "01\
5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a\
ffc4485cd4b5d012505453ea9c6613e806445009b83157596dfc191a62f7c1e4\
c22d44ee8639259a89157a7a9e8980ccff7508dc74e393d82eaca21407a36120\
af5ad4c2d9e6e3a1ba590696078134faa687e340881c773456f1a14ff10a2f03\
a25c7f116f60c37c1769db7514621cf8\
1ec3c31e07f64e7f938b7cee067bf33c";

/// Same inputs, payload framed as `qCompress(TEST_PAYLOAD, 9)` (zlib level 9)
pub const GOLDEN_COMPRESSED_BLOB_HEX: &str = "01\
5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a5a\
ffc4485cd4b5d012505453ea9c6613e806445009b83157596dfc191a62f7c1e4\
c22d44ee8639259a89157a7a9e8980ccff7508dc74e393d82eaca21407a36120\
af5ad4c2d9e6e3a1ba590696078134faa687e340881c773456f1a14ff10a2f03\
a25c7f116f60c37c1769db7514621cf8\
e4dd1a44d1a5560f5b9354d63780b52a4b91369db04d3e2b45cf7caed55b13c3";

pub fn password() -> SecretBuffer {
    SecretBuffer::from(TEST_PASSWORD)
}

pub fn zero_kgk() -> Kgk64 {
    Kgk64::new([0u8; 64])
}

pub fn counting_kgk() -> Kgk64 {
    Kgk64::new(core::array::from_fn(|i| i as u8))
}

/// Outer key/IV for `TEST_PASSWORD` under `OUTER_SALT`
pub fn outer_key_iv() -> (Aes256Key32, Iv16, Salt32) {
    let salt = Salt32::new(OUTER_SALT);
    let (key, iv) = derive_domain_key_and_iv(&password(), &salt).unwrap();
    (key, iv, salt)
}
