// src/decryptor/mod.rs

//! Envelope decoding.
//!
//! Core API: `decode(&password, blob, uncompress)?` → [`DecodedBlob`].
//! Helpers: field readers and key-block unwrapping for custom flows.

pub(crate) mod decode;
pub(crate) mod read;
pub(crate) mod session;

pub use decode::{decode, DecodedBlob};
pub use read::{read_exact_span, read_format_flag, read_span};
pub use session::{decrypt_key_block, KeyBlock};
