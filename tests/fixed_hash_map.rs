// FixedHashMap integration suite.
//
// Each test documents what behavior is being verified. The core
// invariants exercised:
// - Round trip: every inserted key is retrievable with its value.
// - Removal: after remove(k), k is gone, len drops by one, and all other
//   keys stay reachable, including keys displaced along a shared run.
// - Hash-as-key: equal hashes are one entry; inserting twice is fatal.
// - Fixed capacity: a full table rejects inserts and never grows.
use probekit::{hash_bytes, FixedHashMap, InsertError};
use std::hash::{BuildHasher, Hasher};

// Files a u64 key under its own value.
#[derive(Clone, Copy, Default)]
struct Identity;
struct IdentityHasher(u64);
impl BuildHasher for Identity {
    type Hasher = IdentityHasher;
    fn build_hasher(&self) -> IdentityHasher {
        IdentityHasher(0)
    }
}
impl Hasher for IdentityHasher {
    fn write(&mut self, bytes: &[u8]) {
        let mut buf = [0u8; 8];
        buf[..bytes.len()].copy_from_slice(bytes);
        self.0 = u64::from_ne_bytes(buf);
    }
    fn write_u64(&mut self, n: u64) {
        self.0 = n;
    }
    fn finish(&self) -> u64 {
        self.0
    }
}

// Test: the three-way collision scenario on 8 slots.
// Assumes: hashes 1, 9, 17 all have home slot 1.
// Verifies: they land in slots 1, 2, 3; removing 9 shifts 17 back into
// slot 2, slot 3 becomes free, and 17 stays reachable.
#[test]
fn backward_shift_three_way_collision() {
    let mut m: FixedHashMap<u64, &str, Identity> = FixedHashMap::with_slots_and_hasher(8, Identity);
    m.insert(&1, "one");
    m.insert(&9, "nine");
    m.insert(&17, "seventeen");
    assert_eq!(m.slot_of_hashed(1), Some(1));
    assert_eq!(m.slot_of_hashed(9), Some(2));
    assert_eq!(m.slot_of_hashed(17), Some(3));

    assert!(m.remove(&9));
    assert_eq!(m.len(), 2);
    assert_eq!(m.get(&9), None);
    assert_eq!(m.slot_of_hashed(17), Some(2));
    assert_eq!(m.get(&17), Some(&"seventeen"));
    assert_eq!(m.get(&1), Some(&"one"));

    // Slot 3 is free again: a fresh key homed there lands in it.
    m.insert(&3, "three");
    assert_eq!(m.slot_of_hashed(3), Some(3));
}

// Test: removing the head of a run.
// Verifies: every later member of the run moves back one slot.
#[test]
fn remove_run_head_shifts_whole_run() {
    let mut m: FixedHashMap<u64, u32, Identity> = FixedHashMap::with_slots_and_hasher(8, Identity);
    for (i, h) in [4u64, 12, 20, 28].into_iter().enumerate() {
        m.insert(&h, i as u32);
    }
    assert!(m.remove(&4));
    assert_eq!(m.slot_of_hashed(12), Some(4));
    assert_eq!(m.slot_of_hashed(20), Some(5));
    assert_eq!(m.slot_of_hashed(28), Some(6));
    assert_eq!(m.get(&28), Some(&3));
}

// Test: string keys round trip with the default sdbm hasher.
// Verifies: get returns each value; count matches; misses report None.
#[test]
fn string_round_trip() {
    let words = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta"];
    let mut m: FixedHashMap<str, usize> = FixedHashMap::new(words.len());
    assert_eq!(m.capacity(), 9);
    for (i, w) in words.iter().enumerate() {
        m.insert(w, i);
    }
    assert_eq!(m.len(), words.len());
    for (i, w) in words.iter().enumerate() {
        assert_eq!(m.get(w), Some(&i));
    }
    assert_eq!(m.get("theta"), None);
}

// Test: removal keeps the rest reachable with the default hasher.
#[test]
fn remove_each_key_in_turn() {
    let keys: Vec<u32> = (0..50).map(|i| i * 7919).collect();
    let mut m: FixedHashMap<u32, u32> = FixedHashMap::new(keys.len());
    for &k in &keys {
        m.insert(&k, k + 1);
    }
    for (n, &k) in keys.iter().enumerate() {
        assert!(m.remove(&k));
        assert!(!m.remove(&k), "second remove must miss");
        assert_eq!(m.len(), keys.len() - n - 1);
        for &rest in &keys[n + 1..] {
            assert_eq!(m.get(&rest), Some(&(rest + 1)));
        }
    }
    assert!(m.is_empty());
}

// Test: hash-based entry points agree with sdbm hashes of the key bytes.
#[test]
fn precomputed_hash_access() {
    let mut m: FixedHashMap<[u8], &str> = FixedHashMap::new(4);
    let h = hash_bytes(b"key");
    m.insert_hashed(h, "v");
    assert_eq!(m.get_hashed(h), Some(&"v"));
    assert_eq!(m.try_insert_hashed(h, "w"), Err(InsertError::DuplicateHash));
    assert!(m.remove_hashed(h));
    assert_eq!(m.take_hashed(h), None);
}

// Test: hash 0 is filed as 1, so the two address the same entry.
#[test]
fn zero_hash_is_remapped() {
    let mut m: FixedHashMap<u64, char, Identity> = FixedHashMap::with_slots_and_hasher(4, Identity);
    m.insert(&0, 'z');
    assert_eq!(m.hash_key(&0), 1);
    assert_eq!(m.get(&1), Some(&'z'));
    assert_eq!(m.try_insert(&1, 'o'), Err(InsertError::DuplicateHash));
}

#[test]
#[should_panic(expected = "hash already present")]
fn duplicate_key_is_fatal() {
    let mut m: FixedHashMap<str, i32> = FixedHashMap::new(4);
    m.insert("dup", 1);
    m.insert("dup", 2);
}

#[test]
#[should_panic(expected = "hash table is full")]
fn full_table_is_fatal() {
    let mut m: FixedHashMap<u64, i32, Identity> = FixedHashMap::with_slots_and_hasher(3, Identity);
    for h in 1..=4u64 {
        m.insert(&h, 0);
    }
}

// Test: a full table never grows and still answers misses.
#[test]
fn full_table_rejects_and_answers_misses() {
    let mut m: FixedHashMap<u64, i32, Identity> = FixedHashMap::with_slots_and_hasher(3, Identity);
    for h in 1..=3u64 {
        m.insert(&h, h as i32);
    }
    assert_eq!(m.try_insert(&4, 4), Err(InsertError::TableFull));
    assert_eq!(m.capacity(), 3);
    assert_eq!(m.get(&4), None);
    assert!(!m.remove(&4));
    assert_eq!(m.len(), 3);
}

#[test]
fn insert_error_displays() {
    assert_eq!(InsertError::DuplicateHash.to_string(), "hash already present in table");
    assert_eq!(InsertError::TableFull.to_string(), "hash table is full");
}
