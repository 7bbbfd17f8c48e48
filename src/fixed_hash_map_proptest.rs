#![cfg(test)]

// Property tests for FixedHashMap kept inside the crate so they can call
// the internal invariant checker after every step.

use crate::fixed_hash_map::{FixedHashMap, InsertError};
use hashbrown::HashMap;
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::hash::{BuildHasher, Hasher};

// Hasher that files a u64 key under its own value, so generated keys pick
// their home slots directly and collide on purpose.
#[derive(Clone, Copy, Default)]
struct IdentityBuildHasher;
struct IdentityHasher(u64);
impl BuildHasher for IdentityBuildHasher {
    type Hasher = IdentityHasher;
    fn build_hasher(&self) -> Self::Hasher {
        IdentityHasher(0)
    }
}
impl Hasher for IdentityHasher {
    fn write(&mut self, _bytes: &[u8]) {
        unreachable!("identity hasher only takes u64 keys")
    }
    fn write_u64(&mut self, n: u64) {
        self.0 = n;
    }
    fn finish(&self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug)]
enum Op {
    Insert(u64, i32),
    Remove(u64),
    Take(u64),
    Get(u64),
    Mutate(u64, i32),
    Iterate,
    Clear,
}

// Keys start at 1: key 0 would be filed as 1 and alias key 1.
fn arb_ops(key_space: u64) -> impl Strategy<Value = Vec<Op>> {
    let key = 1..=key_space;
    let op = prop_oneof![
        6 => (key.clone(), any::<i32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        3 => key.clone().prop_map(Op::Remove),
        1 => key.clone().prop_map(Op::Take),
        3 => key.clone().prop_map(Op::Get),
        1 => (key, any::<i32>()).prop_map(|(k, d)| Op::Mutate(k, d)),
        1 => Just(Op::Iterate),
        1 => Just(Op::Clear),
    ];
    proptest::collection::vec(op, 1..120)
}

// Property: state-machine equivalence against hashbrown::HashMap.
// Invariants exercised across random operation sequences:
// - insert succeeds iff the hash is absent and a slot is free; failures
//   leave the table untouched and report the right InsertError.
// - get/remove/take agree with the model, including misses that run
//   into wrapped, fully occupied runs.
// - after every op, each entry is reachable from its home slot without
//   crossing an empty slot (backward shift kept runs contiguous), hashes
//   are unique, and len matches the model.
proptest! {
    #![proptest_config(ProptestConfig { cases: 256, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine(slots in 1usize..=16, key_space in 1u64..=48, ops in arb_ops(48)) {
        let mut sut: FixedHashMap<u64, i32, IdentityBuildHasher> =
            FixedHashMap::with_slots_and_hasher(slots, IdentityBuildHasher);
        let mut model: HashMap<u64, i32> = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    let k = (k - 1) % key_space + 1;
                    let res = sut.try_insert(&k, v);
                    if model.contains_key(&k) {
                        prop_assert_eq!(res, Err(InsertError::DuplicateHash));
                    } else if model.len() == slots {
                        prop_assert_eq!(res, Err(InsertError::TableFull));
                    } else {
                        prop_assert_eq!(res, Ok(()));
                        model.insert(k, v);
                    }
                }
                Op::Remove(k) => {
                    prop_assert_eq!(sut.remove(&k), model.remove(&k).is_some());
                }
                Op::Take(k) => {
                    prop_assert_eq!(sut.take(&k), model.remove(&k));
                }
                Op::Get(k) => {
                    prop_assert_eq!(sut.get(&k), model.get(&k));
                    prop_assert_eq!(sut.contains_key(&k), model.contains_key(&k));
                }
                Op::Mutate(k, d) => {
                    match (sut.get_mut(&k), model.get_mut(&k)) {
                        (Some(s), Some(m)) => {
                            *s = s.wrapping_add(d);
                            *m = m.wrapping_add(d);
                        }
                        (None, None) => {}
                        (s, m) => prop_assert!(false, "presence mismatch for {}: {:?} vs {:?}", k, s, m),
                    }
                }
                Op::Iterate => {
                    let s: BTreeSet<(u64, i32)> = sut.iter().map(|(h, v)| (h, *v)).collect();
                    let m: BTreeSet<(u64, i32)> = model.iter().map(|(k, v)| (*k, *v)).collect();
                    prop_assert_eq!(s, m);
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                }
            }

            sut.check_invariants();
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
        }

        // Every surviving entry is still reachable.
        for (k, v) in &model {
            prop_assert_eq!(sut.get(k), Some(v));
        }
    }
}

// Property: inserting a set of distinct keys and then removing a subset in
// arbitrary order keeps every other key reachable, with the default sdbm
// hasher and a table sized for exactly that many keys.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_remove_keeps_others_reachable(
        keys in proptest::collection::btree_set("[a-z]{1,6}", 1..40),
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 0..40),
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let mut sut: FixedHashMap<str, usize> = FixedHashMap::new(keys.len());
        // Distinct strings may still share an sdbm hash; keep the first.
        let mut live: Vec<&str> = Vec::new();
        for (i, k) in keys.iter().enumerate() {
            if sut.try_insert(k, i).is_ok() {
                live.push(k);
            }
        }

        for p in picks {
            if live.is_empty() {
                break;
            }
            let victim = live.swap_remove(p.index(live.len()));
            let before = sut.len();
            prop_assert!(sut.remove(victim));
            prop_assert_eq!(sut.len(), before - 1);
            prop_assert!(sut.get(victim).is_none());
            for k in &live {
                prop_assert!(sut.contains_key(k), "lost {} after removing {}", k, victim);
            }
            sut.check_invariants();
        }
    }
}
