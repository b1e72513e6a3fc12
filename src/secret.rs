//! # Secret Buffer
//!
//! Variable-length container for passwords, derived keys and decrypted
//! payloads. The backing storage is a [`secure_gate::Dynamic`] vector that is
//! overwritten with zeros whenever it is released: on drop, on [`truncate`],
//! on [`clear`], and when growing forces a reallocation.
//!
//! The buffer is move-only. There is no `Clone`; copy explicitly with
//! [`SecretBuffer::from_slice`] when a second owner is really needed.
//!
//! [`truncate`]: SecretBuffer::truncate
//! [`clear`]: SecretBuffer::clear

use secure_gate::{RevealSecret, RevealSecretMut};
use secure_gate::Dynamic;
use std::fmt;
use zeroize::Zeroize;

/// Owned secret bytes, wiped before release.
pub struct SecretBuffer {
    inner: Dynamic<Vec<u8>>,
}

impl SecretBuffer {
    /// Take ownership of `bytes`. The vector is moved, not copied.
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            inner: Dynamic::new(bytes),
        }
    }

    /// A zero-filled buffer of `len` bytes, used as a KDF/cipher output target.
    #[must_use]
    pub fn zeroed(len: usize) -> Self {
        Self::new(vec![0u8; len])
    }

    /// Copy `bytes` into a fresh secret buffer.
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }

    #[inline(always)]
    pub fn expose_secret(&self) -> &[u8] {
        self.inner.expose_secret().as_slice()
    }

    #[inline(always)]
    pub fn expose_secret_mut(&mut self) -> &mut [u8] {
        self.inner.expose_secret_mut().as_mut_slice()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.expose_secret().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append `bytes`.
    ///
    /// If the current allocation is too small, the contents move to a new
    /// allocation and the old one is wiped before it is freed.
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        let vec = self.inner.expose_secret_mut();
        if vec.capacity() - vec.len() >= bytes.len() {
            vec.extend_from_slice(bytes);
            return;
        }

        let mut grown = Vec::with_capacity((vec.len() + bytes.len()).next_power_of_two());
        grown.extend_from_slice(vec);
        grown.extend_from_slice(bytes);
        // Old allocation is zeroized by the Drop of the replaced buffer.
        let old = std::mem::replace(self, Self::new(grown));
        drop(old);
    }

    /// Shrink to `len` bytes, wiping the discarded tail.
    pub fn truncate(&mut self, len: usize) {
        let vec = self.inner.expose_secret_mut();
        if len >= vec.len() {
            return;
        }
        vec[len..].zeroize();
        vec.truncate(len);
    }

    /// Wipe and empty the buffer, keeping the allocation.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Move the bytes out into a vector the caller now owns.
    ///
    /// The caller takes over responsibility for wiping the returned vector.
    #[must_use]
    pub fn into_vec(mut self) -> Vec<u8> {
        std::mem::take(self.inner.expose_secret_mut())
    }
}

impl Drop for SecretBuffer {
    fn drop(&mut self) {
        // `Vec::zeroize` also wipes spare capacity.
        self.inner.expose_secret_mut().zeroize();
    }
}

impl From<&str> for SecretBuffer {
    fn from(s: &str) -> Self {
        Self::from_slice(s.as_bytes())
    }
}

impl From<String> for SecretBuffer {
    fn from(s: String) -> Self {
        Self::new(s.into_bytes())
    }
}

impl From<Vec<u8>> for SecretBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Debug for SecretBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBuffer([REDACTED; {}])", self.len())
    }
}
