//! GrowableBuffer: owned stretchy buffer with explicit length/capacity and
//! zero-filled growth.
//!
//! Capacity grows to `max(2 * capacity, len + additional)` whenever a push
//! or `fit` would exceed it, so N pushes cost O(N) copies overall and
//! reallocate O(log N) times. Capacity never shrinks.
//!
//! Every slot up to `capacity()` is initialized: newly exposed slots hold
//! `T::default()` (zero for numeric types), so grown memory never shows
//! stale contents.
//!
//! Aliasing: growth may move the storage. `push`, `fit` and
//! `extend_from_slice` take `&mut self`, which ends every outstanding slice
//! borrow; raw pointers from [`GrowableBuffer::as_ptr`] are invalidated by
//! any of them and must not be dereferenced afterwards.

use core::ops::{Deref, DerefMut};

#[derive(Clone, Debug)]
pub struct GrowableBuffer<T> {
    length: usize,
    // `data.len()` is the capacity; slots past `length` hold defaults.
    data: Box<[T]>,
}

impl<T> GrowableBuffer<T> {
    /// Empty buffer. Allocates nothing until the first push.
    pub fn new() -> Self {
        Self {
            length: 0,
            data: Box::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.length
    }
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.length]
    }
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[..self.length]
    }

    /// Pointer to the first element. Invalidated by any growth.
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Release the storage. Ownership makes later use a compile error.
    pub fn free(self) {}
}

impl<T: Default> GrowableBuffer<T> {
    /// Capacity the buffer grows to when `additional` more slots are needed.
    fn grown_capacity(&self, additional: usize) -> usize {
        let needed = self
            .length
            .checked_add(additional)
            .expect("capacity overflow");
        self.capacity().saturating_mul(2).max(needed)
    }

    fn grow(&mut self, additional: usize) {
        let new_capacity = self.grown_capacity(additional);
        let mut v = core::mem::take(&mut self.data).into_vec();
        v.reserve_exact(new_capacity - v.len());
        v.resize_with(new_capacity, T::default);
        self.data = v.into_boxed_slice();
    }

    /// Ensure room for `additional` more elements without further growth.
    pub fn fit(&mut self, additional: usize) {
        if additional > self.capacity() - self.length {
            self.grow(additional);
        }
    }

    pub fn push(&mut self, value: T) {
        self.fit(1);
        self.data[self.length] = value;
        self.length += 1;
    }

    /// Forget the contents and reset the used slots to defaults. Keeps the
    /// capacity.
    pub fn clear(&mut self) {
        for slot in &mut self.data[..self.length] {
            *slot = T::default();
        }
        self.length = 0;
    }
}

impl<T: Default + Clone> GrowableBuffer<T> {
    /// Append all of `items`, growing at most once.
    pub fn extend_from_slice(&mut self, items: &[T]) {
        self.fit(items.len());
        self.data[self.length..self.length + items.len()].clone_from_slice(items);
        self.length += items.len();
    }
}

impl<T> Default for GrowableBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for GrowableBuffer<T> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for GrowableBuffer<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Default> Extend<T> for GrowableBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.fit(iter.size_hint().0);
        for x in iter {
            self.push(x);
        }
    }
}

impl<T: Default> FromIterator<T> for GrowableBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut b = Self::new();
        b.extend(iter);
        b
    }
}
