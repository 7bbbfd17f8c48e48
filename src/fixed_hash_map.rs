//! FixedHashMap: fixed-capacity open addressing keyed by hash, with linear
//! probing and backward-shift deletion.
//!
//! Key-based entry points hash through [`KeyHash`] and run under the debug
//! reentrancy guard. The `*_hashed` entry points take a precomputed hash,
//! call no user code, and are not guarded.

use crate::key_hash::KeyHash;
use crate::probe::{home_slot, within_cyclic, Probe};
use crate::reentrancy::DebugReentrancy;
use crate::sdbm::{avoid_sentinel, BuildSdbmHasher};
use core::fmt;
use core::hash::BuildHasher;
use core::marker::PhantomData;

#[derive(Clone, Debug)]
enum Slot<V> {
    Empty,
    Occupied { hash: u64, value: V },
}

impl<V> Slot<V> {
    #[inline]
    fn hash(&self) -> Option<u64> {
        match self {
            Slot::Empty => None,
            Slot::Occupied { hash, .. } => Some(*hash),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InsertError {
    /// An entry with the same hash is already stored.
    DuplicateHash,
    /// Every slot is occupied.
    TableFull,
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertError::DuplicateHash => f.write_str("hash already present in table"),
            InsertError::TableFull => f.write_str("hash table is full"),
        }
    }
}

impl std::error::Error for InsertError {}

/// Slot count for a table expected to hold at most `expected_max` entries:
/// `ceil(expected_max * 16 / 13)`, at least 1. Keeps the load factor at or
/// below 13/16.
pub fn slots_for(expected_max: usize) -> usize {
    let scaled = expected_max
        .checked_mul(16)
        .expect("capacity overflow");
    scaled.div_ceil(13).max(1)
}

/// Open-addressing table with a slot count fixed at construction.
///
/// Entries are identified by the hash of their key alone; the key itself is
/// never stored. Two keys with equal hashes are the same entry as far as
/// the table is concerned, so inserting a second one is a precondition
/// violation. Size the table and pick the hasher accordingly.
///
/// Invariants:
/// - every occupied slot holds a hash that differs from all others;
/// - every occupied slot lies on the probe sequence from its home slot,
///   with no empty slot between home and it;
/// - `len()` equals the number of occupied slots.
pub struct FixedHashMap<K: ?Sized, V, S = BuildSdbmHasher> {
    hasher: S,
    slots: Box<[Slot<V>]>,
    count: usize,
    reentrancy: DebugReentrancy,
    _key: PhantomData<fn(&K)>,
}

impl<K: ?Sized, V> FixedHashMap<K, V>
where
    K: KeyHash,
{
    /// Table for up to `expected_max` entries, hashed with sdbm.
    pub fn new(expected_max: usize) -> Self {
        Self::with_hasher(expected_max, BuildSdbmHasher)
    }

    /// Table with exactly `slots` slots, hashed with sdbm.
    pub fn with_slots(slots: usize) -> Self {
        Self::with_slots_and_hasher(slots, BuildSdbmHasher)
    }
}

/// Iterator over occupied slots in slot order.
pub struct Iter<'a, V> {
    it: core::slice::Iter<'a, Slot<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (u64, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.by_ref().find_map(|s| match s {
            Slot::Empty => None,
            Slot::Occupied { hash, value } => Some((*hash, value)),
        })
    }
}

/// Mutable iterator over occupied slots in slot order.
pub struct IterMut<'a, V> {
    it: core::slice::IterMut<'a, Slot<V>>,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (u64, &'a mut V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.by_ref().find_map(|s| match s {
            Slot::Empty => None,
            Slot::Occupied { hash, value } => Some((*hash, value)),
        })
    }
}

impl<K: ?Sized, V, S> FixedHashMap<K, V, S>
where
    K: KeyHash,
    S: BuildHasher,
{
    pub fn with_hasher(expected_max: usize, hasher: S) -> Self {
        Self::with_slots_and_hasher(slots_for(expected_max), hasher)
    }

    /// Panics if `slots` is zero.
    pub fn with_slots_and_hasher(slots: usize, hasher: S) -> Self {
        assert!(slots > 0, "hash table needs at least one slot");
        Self {
            hasher,
            slots: (0..slots).map(|_| Slot::Empty).collect(),
            count: 0,
            reentrancy: DebugReentrancy::new(),
            _key: PhantomData,
        }
    }

    #[inline]
    fn make_hash(&self, key: &K) -> u64 {
        avoid_sentinel(key.key_hash(&self.hasher))
    }

    /// The hash the table files `key` under. Never 0.
    pub fn hash_key(&self, key: &K) -> u64 {
        let _g = self.reentrancy.enter("hash_key");
        self.make_hash(key)
    }

    pub fn len(&self) -> usize {
        self.count
    }
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of slots. Never changes.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slot index of the entry stored under `hash`, following the probe
    /// sequence and stopping at the first empty slot.
    fn find_slot(&self, hash: u64) -> Option<usize> {
        let cap = self.slots.len();
        for i in Probe::new(home_slot(hash, cap), cap) {
            match self.slots[i].hash() {
                None => return None,
                Some(h) if h == hash => return Some(i),
                Some(_) => {}
            }
        }
        None
    }

    fn insert_slot(&mut self, hash: u64, value: V) -> Result<(), InsertError> {
        let cap = self.slots.len();
        for i in Probe::new(home_slot(hash, cap), cap) {
            match self.slots[i].hash() {
                Some(h) if h == hash => return Err(InsertError::DuplicateHash),
                Some(_) => {}
                None => {
                    self.slots[i] = Slot::Occupied { hash, value };
                    self.count += 1;
                    return Ok(());
                }
            }
        }
        Err(InsertError::TableFull)
    }

    /// Vacate the slot holding `hash` and close the gap by shifting later
    /// entries of the run backward.
    fn remove_slot(&mut self, hash: u64) -> Option<V> {
        let start = self.find_slot(hash)?;
        let cap = self.slots.len();

        // `hole` always holds the entry being removed; it moves forward as
        // displaced entries are swapped back into place.
        let mut hole = start;
        for i in Probe::new(start, cap).skip(1) {
            let Some(h) = self.slots[i].hash() else {
                break;
            };
            // An entry may fill the hole unless its home lies in (hole, i]:
            // moving it there would put it before its home.
            if !within_cyclic(home_slot(h, cap), hole, i) {
                self.slots.swap(hole, i);
                hole = i;
            }
        }

        self.count -= 1;
        match core::mem::replace(&mut self.slots[hole], Slot::Empty) {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Empty => unreachable!("removed slot must be occupied"),
        }
    }

    /// Insert `value` under the hash of `key`.
    ///
    /// Panics if an entry with the same hash exists or the table is full.
    pub fn insert(&mut self, key: &K, value: V) {
        if let Err(e) = self.try_insert(key, value) {
            panic!("FixedHashMap::insert: {e}");
        }
    }

    /// Like `insert`, but reports a violated precondition instead of
    /// panicking. The table is unchanged on error.
    pub fn try_insert(&mut self, key: &K, value: V) -> Result<(), InsertError> {
        let hash = {
            let _g = self.reentrancy.enter("insert");
            self.make_hash(key)
        };
        self.insert_slot(hash, value)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let _g = self.reentrancy.enter("get");
        let hash = self.make_hash(key);
        self.get_hashed(hash)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let hash = {
            let _g = self.reentrancy.enter("get_mut");
            self.make_hash(key)
        };
        self.get_hashed_mut(hash)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Remove the entry for `key`. Returns whether one was present.
    pub fn remove(&mut self, key: &K) -> bool {
        self.take(key).is_some()
    }

    /// Remove the entry for `key` and return its value.
    pub fn take(&mut self, key: &K) -> Option<V> {
        let hash = {
            let _g = self.reentrancy.enter("take");
            self.make_hash(key)
        };
        self.take_hashed(hash)
    }

    /// Insert under a precomputed hash; 0 is filed as 1.
    ///
    /// Panics if the hash is present or the table is full.
    pub fn insert_hashed(&mut self, hash: u64, value: V) {
        if let Err(e) = self.try_insert_hashed(hash, value) {
            panic!("FixedHashMap::insert_hashed: {e}");
        }
    }

    pub fn try_insert_hashed(&mut self, hash: u64, value: V) -> Result<(), InsertError> {
        self.insert_slot(avoid_sentinel(hash), value)
    }

    pub fn get_hashed(&self, hash: u64) -> Option<&V> {
        let i = self.find_slot(avoid_sentinel(hash))?;
        match &self.slots[i] {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Empty => None,
        }
    }

    pub fn get_hashed_mut(&mut self, hash: u64) -> Option<&mut V> {
        let i = self.find_slot(avoid_sentinel(hash))?;
        match &mut self.slots[i] {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Empty => None,
        }
    }

    pub fn remove_hashed(&mut self, hash: u64) -> bool {
        self.take_hashed(hash).is_some()
    }

    pub fn take_hashed(&mut self, hash: u64) -> Option<V> {
        self.remove_slot(avoid_sentinel(hash))
    }

    /// Slot currently holding the entry for `hash`.
    pub fn slot_of_hashed(&self, hash: u64) -> Option<usize> {
        self.find_slot(avoid_sentinel(hash))
    }

    /// Drop every entry; the slot count is kept.
    pub fn clear(&mut self) {
        for s in self.slots.iter_mut() {
            *s = Slot::Empty;
        }
        self.count = 0;
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            it: self.slots.iter(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            it: self.slots.iter_mut(),
        }
    }

    /// Assert every structural invariant of the table.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        let cap = self.slots.len();
        let occupied: Vec<(usize, u64)> = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.hash().map(|h| (i, h)))
            .collect();
        assert_eq!(occupied.len(), self.count, "count parity");

        let mut seen = std::collections::HashSet::new();
        for &(i, h) in &occupied {
            assert_ne!(h, crate::sdbm::EMPTY_HASH, "sentinel stored at slot {i}");
            assert!(seen.insert(h), "duplicate hash {h} at slot {i}");
            // Walk from home to i: no empty slot may interrupt the run.
            for j in Probe::new(home_slot(h, cap), cap) {
                if j == i {
                    break;
                }
                assert!(
                    self.slots[j].hash().is_some(),
                    "hash {h} at slot {i} unreachable: slot {j} is empty"
                );
            }
        }
    }
}

impl<K: ?Sized, V, S> fmt::Debug for FixedHashMap<K, V, S>
where
    K: KeyHash,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
