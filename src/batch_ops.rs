//! Parallel encode/decode of independent blobs (`batch-ops` feature).
//!
//! Each call is stateless, so blobs are processed on rayon's pool with no
//! shared mutable state. Results are all-or-nothing: the first error aborts
//! the batch and every already-decoded secret is dropped (and wiped).

use rayon::prelude::*;

use crate::aliases::Kgk64;
use crate::decryptor::DecodedBlob;
use crate::secret::SecretBuffer;
use crate::{decode, encode_with_password, CrypterError};

/// Encode each payload under `password`, each with its own random outer salt.
pub fn encode_batch<P>(
    password: &SecretBuffer,
    kgk: &Kgk64,
    payloads: &[P],
    compress: bool,
) -> Result<Vec<Vec<u8>>, CrypterError>
where
    P: AsRef<[u8]> + Sync,
{
    payloads
        .par_iter()
        .map(|data| encode_with_password(password, kgk, data.as_ref(), compress))
        .collect()
}

/// Decode each blob under `password`, preserving input order.
pub fn decode_batch<B>(
    password: &SecretBuffer,
    blobs: &[B],
    uncompress: bool,
) -> Result<Vec<DecodedBlob>, CrypterError>
where
    B: AsRef<[u8]> + Sync,
{
    blobs
        .par_iter()
        .map(|blob| decode(password, blob.as_ref(), uncompress))
        .collect()
}
