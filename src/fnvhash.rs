//! FNV-1a hashing.
//!
//! FNV-1a is **not** a cryptographic hash function. It is cheap, has no
//! state beyond the running hash and distributes short keys well enough for
//! the default key hashing of [`FHashTable`](crate::FHashTable).
//!
//! Reference: <https://en.wikipedia.org/wiki/Fowler–Noll–Vo_hash_function>

use core::hash::BuildHasherDefault;
use core::hash::Hasher;

const FNV_OFFSET_BASIS_32: u32 = 0x811c_9dc5;
const FNV_PRIME_32: u32 = 0x0100_0193;

const FNV_OFFSET_BASIS_64: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME_64: u64 = 0x0000_0100_0000_01b3;

/// Returns the FNV-1a 32-bit hash of `bytes`.
///
/// # Examples
///
/// ```rust
/// use fcontainers::fnvhash::fnvhash_32;
///
/// assert_eq!(fnvhash_32(b""), 0x811c9dc5);
/// assert_eq!(fnvhash_32(b"a"), 0xe40c292c);
/// ```
#[inline]
pub const fn fnvhash_32(bytes: &[u8]) -> u32 {
    let mut hash = FNV_OFFSET_BASIS_32;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u32;
        hash = hash.wrapping_mul(FNV_PRIME_32);
        i += 1;
    }
    hash
}

/// Returns the FNV-1a 64-bit hash of `bytes`.
///
/// # Examples
///
/// ```rust
/// use fcontainers::fnvhash::fnvhash_64;
///
/// assert_eq!(fnvhash_64(b"a"), 0xaf63dc4c8601ec8c);
/// ```
#[inline]
pub const fn fnvhash_64(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS_64;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(FNV_PRIME_64);
        i += 1;
    }
    hash
}

/// Returns the FNV-1a 32-bit hash of a NUL-terminated byte string.
///
/// Hashing stops at the first `0` byte, or at the end of the slice if there
/// is none, so `b"abc\0def"` and `b"abc"` hash identically.
#[inline]
pub fn fnvhash_32_str(bytes: &[u8]) -> u32 {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    fnvhash_32(&bytes[..end])
}

cfg_if::cfg_if! {
    if #[cfg(target_pointer_width = "64")] {
        /// Returns the FNV-1a hash of `bytes` at the target's pointer width.
        #[inline]
        pub const fn fnvhash_usize(bytes: &[u8]) -> usize {
            fnvhash_64(bytes) as usize
        }
    } else {
        /// Returns the FNV-1a hash of `bytes` at the target's pointer width.
        #[inline]
        pub const fn fnvhash_usize(bytes: &[u8]) -> usize {
            fnvhash_32(bytes) as usize
        }
    }
}

/// A streaming 64-bit FNV-1a [`Hasher`].
///
/// Feeding the same bytes through any sequence of `write` calls yields the
/// same result as a single [`fnvhash_64`] call over their concatenation.
#[derive(Debug, Clone, Copy)]
pub struct FnvHasher {
    hash: u64,
}

impl FnvHasher {
    /// Creates a hasher initialised with the 64-bit offset basis.
    pub const fn new() -> Self {
        Self {
            hash: FNV_OFFSET_BASIS_64,
        }
    }
}

impl Default for FnvHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for FnvHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.hash ^= byte as u64;
            self.hash = self.hash.wrapping_mul(FNV_PRIME_64);
        }
    }
}

/// Builder for [`FnvHasher`]; the default hash strategy of
/// [`FHashTable`](crate::FHashTable).
pub type FnvBuildHasher = BuildHasherDefault<FnvHasher>;
