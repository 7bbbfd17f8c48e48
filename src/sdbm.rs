//! sdbm hashing: deterministic 64-bit hashes of byte spans, integers and
//! NUL-terminated strings.
//!
//! Every step folds one unit `c` into the running hash with
//! `h = c + (h << 6) + (h << 16) - h` (wrapping). The `hash_*` entry points
//! never return [`EMPTY_HASH`]; the `raw_*` variants expose the plain
//! recurrence, where 0 is reachable (for example on empty input).

use core::ffi::CStr;
use core::hash::{BuildHasher, Hasher};

/// Hash value reserved to mean "no entry". Never produced by `hash_*`.
pub const EMPTY_HASH: u64 = 0;

#[inline]
fn step(h: u64, c: u64) -> u64 {
    c.wrapping_add(h << 6)
        .wrapping_add(h << 16)
        .wrapping_sub(h)
}

/// Remap the reserved empty value to 1; every other hash passes through.
#[inline]
pub fn avoid_sentinel(h: u64) -> u64 {
    if h == EMPTY_HASH {
        1
    } else {
        h
    }
}

/// Fold `bytes` (as unsigned octets) into `seed`.
#[inline]
fn fold_bytes(seed: u64, bytes: &[u8]) -> u64 {
    bytes.iter().fold(seed, |h, &b| step(h, b as u64))
}

pub fn raw_bytes(bytes: &[u8]) -> u64 {
    fold_bytes(0, bytes)
}

/// Folds the high half of `n` (masked in place, not shifted down) and then
/// the low half.
pub fn raw_u64(n: u64) -> u64 {
    fold_u64(0, n)
}

#[inline]
fn fold_u64(seed: u64, n: u64) -> u64 {
    let h = step(seed, n & 0xFFFF_FFFF_0000_0000);
    step(h, n & 0x0000_0000_FFFF_FFFF)
}

/// Hashes the bytes before the terminating NUL.
pub fn raw_cstr(s: &CStr) -> u64 {
    fold_bytes(0, s.to_bytes())
}

pub fn hash_bytes(bytes: &[u8]) -> u64 {
    avoid_sentinel(raw_bytes(bytes))
}

pub fn hash_u64(n: u64) -> u64 {
    avoid_sentinel(raw_u64(n))
}

pub fn hash_cstr(s: &CStr) -> u64 {
    avoid_sentinel(raw_cstr(s))
}

/// Streaming sdbm hasher. A `u64` folds as two halves like [`raw_u64`];
/// other integers are fed through their native-endian bytes, so hashing a
/// `u32` key matches `raw_bytes` over its memory.
///
/// `finish` returns the raw recurrence; [`crate::FixedHashMap`] applies
/// [`avoid_sentinel`] on top.
#[derive(Clone, Copy, Debug, Default)]
pub struct SdbmHasher {
    state: u64,
}

impl SdbmHasher {
    pub const fn new() -> Self {
        Self { state: 0 }
    }
}

impl Hasher for SdbmHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.state = fold_bytes(self.state, bytes);
    }

    #[inline]
    fn write_u64(&mut self, n: u64) {
        self.state = fold_u64(self.state, n);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.state
    }
}

/// Builds [`SdbmHasher`]s. Stateless, so every instance hashes identically.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BuildSdbmHasher;

impl BuildHasher for BuildSdbmHasher {
    type Hasher = SdbmHasher;

    #[inline]
    fn build_hasher(&self) -> SdbmHasher {
        SdbmHasher::new()
    }
}
