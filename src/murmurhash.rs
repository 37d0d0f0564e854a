//! MurmurHash3, 32-bit variant.
//!
//! An alternative to [`fnvhash`](crate::fnvhash) with better avalanche on
//! long keys. Blocks are read little-endian, so hashes are identical across
//! platforms.
//!
//! Reference: <https://en.wikipedia.org/wiki/MurmurHash#Algorithm>

use core::hash::BuildHasher;
use core::hash::Hasher;

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;

#[inline(always)]
fn scramble(k: u32) -> u32 {
    k.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2)
}

#[inline(always)]
fn mix_block(h: u32, k: u32) -> u32 {
    (h ^ scramble(k))
        .rotate_left(13)
        .wrapping_mul(5)
        .wrapping_add(0xe654_6b64)
}

#[inline(always)]
fn finalize(mut h: u32, tail: &[u8], len: usize) -> u32 {
    let mut k = 0u32;
    for &byte in tail.iter().rev() {
        k <<= 8;
        k |= byte as u32;
    }
    h ^= scramble(k);

    h ^= len as u32;
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

/// The 64-bit Murmur3 finalizer. Every input bit reaches every output bit,
/// and zero maps to zero.
#[inline(always)]
pub(crate) const fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51_afd7_ed55_8ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    k ^= k >> 33;
    k
}

/// Returns the Murmur3 32-bit hash of `bytes` under `seed`.
///
/// # Examples
///
/// ```rust
/// use fcontainers::murmurhash::murmur3_32;
///
/// assert_eq!(murmur3_32(b"", 0), 0);
/// assert_eq!(murmur3_32(b"", 1), 0x514e28b7);
/// ```
pub fn murmur3_32(bytes: &[u8], seed: u32) -> u32 {
    let mut h = seed;
    let mut blocks = bytes.chunks_exact(4);
    for block in &mut blocks {
        h = mix_block(h, u32::from_le_bytes([block[0], block[1], block[2], block[3]]));
    }
    finalize(h, blocks.remainder(), bytes.len())
}

/// A streaming Murmur3 (32-bit) [`Hasher`].
///
/// Partial blocks are buffered between `write` calls, so the result only
/// depends on the concatenation of the written bytes.
#[derive(Debug, Clone, Copy)]
pub struct Murmur3Hasher {
    h: u32,
    tail: [u8; 4],
    tail_len: usize,
    len: usize,
}

impl Murmur3Hasher {
    /// Creates a hasher with the given seed.
    pub const fn with_seed(seed: u32) -> Self {
        Self {
            h: seed,
            tail: [0; 4],
            tail_len: 0,
            len: 0,
        }
    }
}

impl Default for Murmur3Hasher {
    fn default() -> Self {
        Self::with_seed(0)
    }
}

impl Hasher for Murmur3Hasher {
    fn finish(&self) -> u64 {
        finalize(self.h, &self.tail[..self.tail_len], self.len) as u64
    }

    fn write(&mut self, mut bytes: &[u8]) {
        self.len += bytes.len();

        if self.tail_len > 0 {
            let take = (4 - self.tail_len).min(bytes.len());
            self.tail[self.tail_len..self.tail_len + take].copy_from_slice(&bytes[..take]);
            self.tail_len += take;
            bytes = &bytes[take..];
            if self.tail_len < 4 {
                return;
            }
            self.h = mix_block(self.h, u32::from_le_bytes(self.tail));
            self.tail_len = 0;
        }

        let mut blocks = bytes.chunks_exact(4);
        for block in &mut blocks {
            self.h = mix_block(
                self.h,
                u32::from_le_bytes([block[0], block[1], block[2], block[3]]),
            );
        }
        let rest = blocks.remainder();
        self.tail[..rest.len()].copy_from_slice(rest);
        self.tail_len = rest.len();
    }
}

/// Builds [`Murmur3Hasher`]s sharing one seed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Murmur3BuildHasher {
    seed: u32,
}

impl Murmur3BuildHasher {
    /// Creates a builder whose hashers all start from `seed`.
    pub const fn with_seed(seed: u32) -> Self {
        Self { seed }
    }
}

impl BuildHasher for Murmur3BuildHasher {
    type Hasher = Murmur3Hasher;

    fn build_hasher(&self) -> Self::Hasher {
        Murmur3Hasher::with_seed(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: u32 = 0x9747_b28c;

    #[test]
    fn known_vectors() {
        assert_eq!(murmur3_32(b"", 0), 0);
        assert_eq!(murmur3_32(b"", 1), 0x514e_28b7);
        assert_eq!(murmur3_32(b"", 0xffff_ffff), 0x81f1_6f39);
        assert_eq!(murmur3_32(b"Hello, world!", SEED), 0x2488_4cba);
        assert_eq!(
            murmur3_32(b"The quick brown fox jumps over the lazy dog", SEED),
            0x2fa8_26cd
        );
    }

    #[test]
    fn streaming_matches_one_shot() {
        let input = b"The quick brown fox jumps over the lazy dog";
        for split_a in 0..input.len() {
            for split_b in split_a..input.len() {
                let mut hasher = Murmur3Hasher::with_seed(SEED);
                hasher.write(&input[..split_a]);
                hasher.write(&input[split_a..split_b]);
                hasher.write(&input[split_b..]);
                assert_eq!(
                    hasher.finish(),
                    murmur3_32(input, SEED) as u64,
                    "splits {split_a}/{split_b}"
                );
            }
        }
    }

    #[test]
    fn seed_changes_hash() {
        let a = Murmur3BuildHasher::with_seed(1);
        let b = Murmur3BuildHasher::with_seed(2);
        assert_ne!(a.hash_one(7u32), b.hash_one(7u32));
        assert_eq!(a.hash_one(7u32), a.hash_one(7u32));
    }

    #[test]
    fn fmix64_vectors() {
        assert_eq!(fmix64(0), 0);
        assert_eq!(fmix64(1), 0xb456_bcfc_34c2_cb2c);
        assert_eq!(fmix64(0xdead_beef), 0xd24b_d59f_862a_1dac);
    }
}
