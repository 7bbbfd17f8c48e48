//! DynamicArray: heap array with doubling growth and explicit capacity.

use core::ops::{Deref, DerefMut};

/// Heap-backed array. Capacity doubles (starting at 1) whenever a push
/// would exceed it and is tracked here, independent of the allocator.
///
/// Growth may move the elements; `push` takes `&mut self`, so no slice
/// borrowed before it can be used after it.
#[derive(Clone, Debug)]
pub struct DynamicArray<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T> DynamicArray<T> {
    /// Empty array. Allocates nothing until the first push.
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            capacity: 0,
        }
    }

    pub fn push(&mut self, value: T) {
        if self.data.len() + 1 > self.capacity {
            let new_capacity = self
                .capacity
                .checked_mul(2)
                .expect("capacity overflow")
                .max(1);
            self.data.reserve_exact(new_capacity - self.data.len());
            self.capacity = new_capacity;
        }
        self.data.push(value);
    }

    /// Remove and return the last element. Panics if empty.
    pub fn pop(&mut self) -> T {
        self.try_pop().expect("pop from empty dynamic array")
    }

    pub fn try_pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Drop every element; the capacity is kept.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.push(x);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut a = Self::new();
        a.extend(iter);
        a
    }
}
