//! probekit: small single-threaded in-memory containers for native
//! programs that size their data up front.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a handful of leaf containers with precise contracts, plus one
//!   non-trivial piece: a fixed-capacity open-addressing hash table with
//!   backward-shift deletion.
//! - Containers:
//!   - GrowableBuffer<T>: stretchy buffer; capacity grows to
//!     `max(2 * cap, len + additional)` and grown slots are zero-filled.
//!   - DynamicArray<T>: heap array with doubling growth from 1 and an
//!     explicitly tracked capacity.
//!   - FixedList<T, N>: inline list with the bound in the type; no
//!     allocation, swap-with-last removal.
//!   - FixedHashMap<K, V, S>: open addressing keyed by the key's hash,
//!     linear probing, backward-shift deletion, slot count
//!     `ceil(N * 16 / 13)` for an expected maximum of N entries.
//! - Supporting modules: `sdbm` (hashing), `key_hash` (how key types feed
//!   a hasher; string keys hash their bytes alone), `probe` (probe
//!   sequences and cyclic interval arithmetic).
//!
//! Constraints
//! - Single-threaded; no locking or atomics. `FixedHashMap` is
//!   `!Send`/`!Sync` through its debug reentrancy tracker.
//! - Fixed capacities never grow: overflowing a FixedList or filling a
//!   FixedHashMap is a caller bug and panics. `try_*` variants report
//!   the same conditions as values for callers that prefer it.
//! - Not-found is an ordinary outcome: `Option` or `bool`.
//!
//! Hash-as-key
//! - FixedHashMap never stores keys. An entry is identified by its
//!   (non-zero) hash, so two keys with equal hashes are the same entry
//!   and inserting the second panics. Pick a hasher and sizing that make
//!   collisions between distinct live keys impossible in practice.
//!
//! Deletion
//! - Removing an entry walks the rest of its run and moves every entry
//!   whose home does not lie in `(hole, here]` back into the hole. No
//!   tombstones exist, so lookups may stop at the first empty slot and
//!   probe lengths do not degrade with churn.
//!
//! Aliasing
//! - Growth in GrowableBuffer and DynamicArray may move the storage. The
//!   borrow checker ends slice borrows at every `&mut self` call; raw
//!   pointers from `as_ptr` must be re-fetched after any push.

pub mod dynamic_array;
pub mod fixed_hash_map;
mod fixed_hash_map_proptest;
pub mod fixed_list;
pub mod growable_buffer;
pub mod key_hash;
pub mod probe;
mod reentrancy;
pub mod sdbm;

// Public surface
pub use dynamic_array::DynamicArray;
pub use fixed_hash_map::{FixedHashMap, InsertError};
pub use fixed_list::{CapacityError, FixedList};
pub use growable_buffer::GrowableBuffer;
pub use key_hash::KeyHash;
pub use sdbm::{hash_bytes, hash_cstr, hash_u64, BuildSdbmHasher, SdbmHasher};
