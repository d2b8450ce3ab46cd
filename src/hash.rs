//! 64-bit hash tailored for short byte strings
//!
//! A two-lane scheme derived from MurmurHash3-x64-128: two 64-bit lanes mix
//! one 16-byte block per round, the tail folds up to 15 remaining bytes into
//! the same rotate-multiply discipline, and the result is `h1 + h2`. The
//! final avalanche step of the original construction is deliberately omitted;
//! for hash-table style workloads over multi-word strings the block mixing
//! alone distributes well, and skipping the avalanche keeps short-string
//! hashing cheap. This is not a cryptographic hash and there is no streaming
//! variant.
//!
//! All loads are little-endian regardless of host byte order, so identical
//! inputs hash identically on every platform and at every buffer alignment.

use std::hash::{BuildHasher, Hasher};

use crate::bits::load_u64_le;

const C1: u64 = 0x87c3_7b91_1142_53d5;
const C2: u64 = 0x4cf5_ad43_2745_937f;

/// Serial 64-bit hash of a byte string.
pub fn hash_serial(text: &[u8]) -> u64 {
    let mut h1 = text.len() as u64;
    let mut h2 = text.len() as u64;

    let mut offset = 0;
    let mut remaining = text.len();
    while remaining >= 16 {
        let mut k1 = load_u64_le(text, offset);
        let mut k2 = load_u64_le(text, offset + 8);

        k1 = k1.wrapping_mul(C1);
        k1 = k1.rotate_left(31);
        k1 = k1.wrapping_mul(C2);
        h1 ^= k1;

        h1 = h1.rotate_left(27);
        h1 = h1.wrapping_add(h2);
        h1 = h1.wrapping_mul(5).wrapping_add(0x52dc_e729);

        k2 = k2.wrapping_mul(C2);
        k2 = k2.rotate_left(33);
        k2 = k2.wrapping_mul(C1);
        h2 ^= k2;

        h2 = h2.rotate_left(31);
        h2 = h2.wrapping_add(h1);
        h2 = h2.wrapping_mul(5).wrapping_add(0x3849_5ab5);

        offset += 16;
        remaining -= 16;
    }

    let tail = &text[offset..];
    if tail.len() > 8 {
        let mut lanes = [0u8; 8];
        lanes[..tail.len() - 8].copy_from_slice(&tail[8..]);
        let mut k2 = u64::from_le_bytes(lanes);
        k2 = k2.wrapping_mul(C2);
        k2 = k2.rotate_left(33);
        k2 = k2.wrapping_mul(C1);
        h2 ^= k2;
    }
    if !tail.is_empty() {
        let take = tail.len().min(8);
        let mut lanes = [0u8; 8];
        lanes[..take].copy_from_slice(&tail[..take]);
        let mut k1 = u64::from_le_bytes(lanes);
        k1 = k1.wrapping_mul(C1);
        k1 = k1.rotate_left(31);
        k1 = k1.wrapping_mul(C2);
        h1 ^= k1;
    }

    h1.wrapping_add(h2)
}

/// Hash using the best backend compiled in.
#[inline]
pub fn hash(text: &[u8]) -> u64 {
    hash_serial(text)
}

/// `BuildHasher` plugging the crate hash into std collections.
///
/// ```rust
/// use std::collections::HashMap;
/// use bytelanes::BytesHash;
///
/// let mut map: HashMap<&[u8], u32, BytesHash> = HashMap::with_hasher(BytesHash);
/// map.insert(b"key", 1);
/// assert_eq!(map.get(b"key".as_slice()), Some(&1));
/// ```
#[derive(Clone, Copy, Default)]
pub struct BytesHash;

impl BuildHasher for BytesHash {
    type Hasher = BytesHasher;

    fn build_hasher(&self) -> Self::Hasher {
        BytesHasher { state: 0 }
    }
}

/// Hasher implementation backed by [`hash`].
pub struct BytesHasher {
    state: u64,
}

impl Hasher for BytesHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        self.state = hash(bytes);
    }

    fn write_u64(&mut self, value: u64) {
        self.state = value;
    }
}
