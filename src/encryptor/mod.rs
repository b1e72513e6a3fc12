// src/encryptor/mod.rs

//! Envelope encoding.
//!
//! Core API: `encode(&key, &iv, &salt, &kgk, data, compress)?`.
//! Helpers: `encode_with_password` derives the outer key itself;
//! `encode_with_fixed_inner` is the deterministic variant for fixtures.

pub(crate) mod encode;
pub(crate) mod session;

pub use encode::{encode, encode_with_fixed_inner, encode_with_password};
pub use session::{build_key_block, encrypt_key_block};
