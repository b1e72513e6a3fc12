// src/crypto/mod.rs

//! Low-level crypto primitives: key derivation, AES-256-CBC, randomness.
//!
//! Sub-modules for primitives; see crate root for re-exports.
//! HMAC types are defined in `aliases.rs`.

pub mod cbc;
pub mod kdf;
pub mod rng;
