// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Utility functions used across the library.

/// XORs two 16-byte blocks and writes the result to `output`.
///
/// Used by the CBC chaining in [`crate::crypto::cbc`].
///
/// # Panics (by contract)
///
/// Panics if any of `block_a`, `block_b` or `output` is shorter than 16 bytes.
/// All callers pass exact-size blocks (`chunks_exact(16)` or `Block16`).
#[inline(always)]
pub const fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8]) {
    let mut i = 0;
    while i < 16 {
        output[i] = block_a[i] ^ block_b[i];
        i += 1;
    }
}

/// Split `data` at `mid` without panicking.
///
/// Returns `None` when `data` is shorter than `mid`.
#[inline]
pub fn split_checked(data: &[u8], mid: usize) -> Option<(&[u8], &[u8])> {
    (data.len() >= mid).then(|| data.split_at(mid))
}
