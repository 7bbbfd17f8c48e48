//! FixedList: inline list with a capacity fixed by the type.
//!
//! Storage is a `[T; N]` embedded in the value; nothing is ever allocated
//! or reallocated. Exceeding `N` is a caller bug: `push` and `pop` panic,
//! while `try_push`/`try_pop` hand the failure back.

use core::fmt;
use core::ops::{Deref, DerefMut};

/// Returned by [`FixedList::try_push`] when the list is full; carries the
/// rejected element.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CapacityError<T>(pub T);

impl<T> CapacityError<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fixed list is full")
    }
}

impl<T: fmt::Debug> std::error::Error for CapacityError<T> {}

#[derive(Clone)]
pub struct FixedList<T, const N: usize> {
    data: [T; N],
    count: usize,
}

impl<T: Default, const N: usize> FixedList<T, N> {
    pub fn new() -> Self {
        Self {
            data: core::array::from_fn(|_| T::default()),
            count: 0,
        }
    }

    /// Remove and return the last element. Panics if empty.
    pub fn pop(&mut self) -> T {
        self.try_pop().expect("pop from empty fixed list")
    }

    pub fn try_pop(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        self.count -= 1;
        Some(core::mem::take(&mut self.data[self.count]))
    }

    /// Remove element `i` by moving the last element into its place. O(1);
    /// order is not preserved. Panics if `i >= len()`.
    pub fn remove_at(&mut self, i: usize) -> T {
        assert!(
            i < self.count,
            "remove_at index {i} out of bounds for length {}",
            self.count
        );
        self.count -= 1;
        self.data.swap(i, self.count);
        core::mem::take(&mut self.data[self.count])
    }

    pub fn clear(&mut self) {
        for slot in &mut self.data[..self.count] {
            *slot = T::default();
        }
        self.count = 0;
    }
}

impl<T, const N: usize> FixedList<T, N> {
    /// Append `value` and return a reference to where it was stored.
    /// Panics if the list already holds `N` elements.
    pub fn push(&mut self, value: T) -> &mut T {
        match self.try_push(value) {
            Ok(slot) => slot,
            Err(_) => panic!("push onto full fixed list (capacity {})", N),
        }
    }

    pub fn try_push(&mut self, value: T) -> Result<&mut T, CapacityError<T>> {
        if self.count == N {
            return Err(CapacityError(value));
        }
        let i = self.count;
        self.data[i] = value;
        self.count += 1;
        Ok(&mut self.data[i])
    }

    pub fn len(&self) -> usize {
        self.count
    }
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
    pub fn is_full(&self) -> bool {
        self.count == N
    }
    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.count]
    }
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[..self.count]
    }
}

impl<T: Default, const N: usize> Default for FixedList<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Deref for FixedList<T, N> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> DerefMut for FixedList<T, N> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedList<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
