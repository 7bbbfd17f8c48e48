use probekit::{DynamicArray, GrowableBuffer};
use proptest::prelude::*;

// Capacity changes across the observed sequence, i.e. how many times the
// storage was reallocated.
fn reallocations(caps: &[usize]) -> usize {
    caps.windows(2).filter(|w| w[0] != w[1]).count()
}

fn log2_ceil(n: usize) -> usize {
    (usize::BITS - n.saturating_sub(1).leading_zeros()) as usize
}

proptest! {
    // Growth preserves contents and capacity never trails length.
    #[test]
    fn prop_growable_buffer_preserves_pushes(values in proptest::collection::vec(any::<u32>(), 0..300)) {
        let mut b = GrowableBuffer::new();
        let mut caps = vec![b.capacity()];
        for &v in &values {
            b.push(v);
            prop_assert!(b.capacity() >= b.len());
            prop_assert!(b.capacity() >= *caps.last().unwrap(), "capacity shrank");
            caps.push(b.capacity());
        }
        prop_assert_eq!(b.as_slice(), values.as_slice());
        prop_assert!(reallocations(&caps) <= log2_ceil(values.len()) + 1);
    }

    #[test]
    fn prop_dynamic_array_preserves_pushes(values in proptest::collection::vec(any::<i64>(), 0..300)) {
        let mut a = DynamicArray::new();
        let mut caps = vec![a.capacity()];
        for &v in &values {
            a.push(v);
            prop_assert!(a.capacity() >= a.len());
            caps.push(a.capacity());
        }
        prop_assert_eq!(a.as_slice(), values.as_slice());
        prop_assert!(reallocations(&caps) <= log2_ceil(values.len()) + 1);
        // Popping everything hands the values back in reverse.
        let mut popped = Vec::new();
        while let Some(v) = a.try_pop() {
            popped.push(v);
        }
        popped.reverse();
        prop_assert_eq!(popped, values);
    }

    // Bulk appends grow at most once each and keep earlier contents.
    #[test]
    fn prop_growable_buffer_bulk_appends(chunks in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..40), 0..20)) {
        let mut b: GrowableBuffer<u8> = GrowableBuffer::new();
        let mut expected = Vec::new();
        for chunk in &chunks {
            let before = b.capacity();
            b.extend_from_slice(chunk);
            expected.extend_from_slice(chunk);
            if expected.len() > before {
                prop_assert_eq!(b.capacity(), (2 * before).max(expected.len()));
            } else {
                prop_assert_eq!(b.capacity(), before);
            }
        }
        prop_assert_eq!(&b[..], &expected[..]);
    }
}
