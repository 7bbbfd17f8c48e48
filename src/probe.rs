//! Linear probe sequences and cyclic slot arithmetic for open addressing.

/// Returns whether slot `x` lies in the cyclic half-open interval `(a, b]`,
/// walking forward from `a` in probe direction and wrapping at the table
/// end. `a == b` is the empty interval.
///
/// All three indices must be below the table capacity.
#[inline]
pub fn within_cyclic(x: usize, a: usize, b: usize) -> bool {
    if a <= b {
        a < x && x <= b
    } else {
        x > a || x <= b
    }
}

/// Home slot of `hash` in a table of `capacity` slots.
#[inline]
pub fn home_slot(hash: u64, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    (hash % capacity as u64) as usize
}

/// Iterator over the linear probe sequence `home, home + 1, ...` modulo
/// `capacity`. Yields each slot at most once, so it ends after `capacity`
/// indices.
#[derive(Clone, Debug)]
pub struct Probe {
    index: usize,
    capacity: usize,
    remaining: usize,
}

impl Probe {
    pub fn new(home: usize, capacity: usize) -> Self {
        debug_assert!(capacity == 0 || home < capacity);
        Self {
            index: home,
            capacity,
            remaining: capacity,
        }
    }
}

impl Iterator for Probe {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = self.index;
        self.index += 1;
        if self.index == self.capacity {
            self.index = 0;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Probe {}
