//! KeyHash: how a key type turns into the hash a `FixedHashMap` files it
//! under.
//!
//! Byte-string keys (`str`, `[u8]`, `CStr` and their owned forms) feed only
//! their bytes to the hasher, with no length prefix or terminator, so under
//! sdbm a `str` key hashes exactly like [`crate::hash_cstr`] over the same
//! text. Integer keys go through their `Hash` impl; under sdbm a `u64` key
//! hashes like [`crate::hash_u64`].
//!
//! Other key types implement the trait directly, usually by delegating to
//! `build.hash_one(self)`.

use core::ffi::CStr;
use core::hash::{BuildHasher, Hasher};
use std::ffi::CString;

pub trait KeyHash {
    /// Raw hash of `self` under `build`. May be 0; the table remaps it.
    fn key_hash<S: BuildHasher>(&self, build: &S) -> u64;
}

#[inline]
fn hash_raw_bytes<S: BuildHasher>(build: &S, bytes: &[u8]) -> u64 {
    let mut h = build.build_hasher();
    h.write(bytes);
    h.finish()
}

impl KeyHash for [u8] {
    #[inline]
    fn key_hash<S: BuildHasher>(&self, build: &S) -> u64 {
        hash_raw_bytes(build, self)
    }
}

impl KeyHash for Vec<u8> {
    #[inline]
    fn key_hash<S: BuildHasher>(&self, build: &S) -> u64 {
        hash_raw_bytes(build, self)
    }
}

impl KeyHash for str {
    #[inline]
    fn key_hash<S: BuildHasher>(&self, build: &S) -> u64 {
        hash_raw_bytes(build, self.as_bytes())
    }
}

impl KeyHash for String {
    #[inline]
    fn key_hash<S: BuildHasher>(&self, build: &S) -> u64 {
        hash_raw_bytes(build, self.as_bytes())
    }
}

impl KeyHash for CStr {
    #[inline]
    fn key_hash<S: BuildHasher>(&self, build: &S) -> u64 {
        hash_raw_bytes(build, self.to_bytes())
    }
}

impl KeyHash for CString {
    #[inline]
    fn key_hash<S: BuildHasher>(&self, build: &S) -> u64 {
        hash_raw_bytes(build, self.to_bytes())
    }
}

macro_rules! key_hash_via_hash {
    ($($t:ty),* $(,)?) => {
        $(
            impl KeyHash for $t {
                #[inline]
                fn key_hash<S: BuildHasher>(&self, build: &S) -> u64 {
                    build.hash_one(self)
                }
            }
        )*
    };
}

key_hash_via_hash!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdbm::{raw_bytes, raw_cstr, raw_u64, BuildSdbmHasher};

    /// Invariant: every byte-string form hashes its bytes alone, so the
    /// same text agrees across representations.
    #[test]
    fn byte_strings_agree() {
        let b = BuildSdbmHasher;
        let expected = raw_cstr(c"alpha");
        assert_eq!("alpha".key_hash(&b), expected);
        assert_eq!(String::from("alpha").key_hash(&b), expected);
        assert_eq!(b"alpha"[..].key_hash(&b), expected);
        assert_eq!(b"alpha".to_vec().key_hash(&b), expected);
        assert_eq!(c"alpha".key_hash(&b), expected);
        assert_eq!(CString::from(c"alpha").key_hash(&b), expected);
        assert_eq!("".key_hash(&b), raw_bytes(&[]));
    }

    /// Invariant: `u64` keys use the integer recurrence under sdbm.
    #[test]
    fn u64_uses_integer_hash() {
        let b = BuildSdbmHasher;
        for n in [0u64, 7, 0x0000_0001_0000_0005, u64::MAX] {
            assert_eq!(n.key_hash(&b), raw_u64(n));
        }
    }
}
