//! # Builders
//!
//! Builder patterns for constructing cryptographic operations.
//!
//! ## Modules
//!
//! - [`kdf_builder`] - Builder for custom PBKDF2-HMAC derivations
//!
//! ## Usage
//!
//! Builders provide a fluent API with the blob configuration as defaults and
//! optional customization of hash, iterations, salt and output length.

pub mod kdf_builder;
