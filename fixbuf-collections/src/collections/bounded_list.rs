// fixbuf - fixbuf-collections
// Module: BoundedList - Inline-storage ordered list
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Ordered list with inline storage and compile-time capacity.
//!
//! `BoundedList<T, N>` keeps its elements contiguous in `[0, len)`. Appends
//! are O(1); insertion and removal at an index shift the tail by one slot.
//!
//! # Characteristics
//!
//! - **Zero allocation**: storage is an inline [`FixedBuffer`]
//! - **Value semantics**: copying the list copies all `N` slots and `len`
//! - **Two error tiers**: `add`/`insert`/`remove_at` return `Result`,
//!   `try_*` variants return `bool`/`Option` and never report an error
//! - **No partial mutation**: a failed call leaves the list untouched

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut};
use core::slice;

use fixbuf_error::{Error, Result};

use super::fixed_buffer::FixedBuffer;
use crate::limits::DEFAULT_CAPACITY;

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
const NAME: &str = "BoundedList";

/// A list with compile-time capacity and inline storage.
///
/// # Invariants
///
/// 1. `len <= N` always holds
/// 2. Slots `[0, len)` are initialized and hold the elements in order
/// 3. Slots `[len, N)` are never read
///
/// # Examples
///
/// ```
/// use fixbuf_collections::BoundedList;
///
/// let mut list = BoundedList::<u32>::new();
/// list.add(1)?;
/// list.add(3)?;
/// list.insert(1, 2)?;
///
/// assert_eq!(list.as_slice(), &[1, 2, 3]);
/// assert_eq!(list.remove_at(0)?, 1);
/// assert_eq!(list.len(), 2);
/// # Ok::<(), fixbuf_error::Error>(())
/// ```
#[derive(Clone, Copy)]
pub struct BoundedList<T: Copy, const N: usize = DEFAULT_CAPACITY> {
    /// Inline storage; only `[0, len)` is live
    buffer: FixedBuffer<T, N>,

    /// Number of elements
    /// Invariant: len <= N
    len: usize,
}

impl<T: Copy, const N: usize> BoundedList<T, N> {
    /// Maximum number of elements.
    pub const CAPACITY: usize = N;

    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: FixedBuffer::new(),
            len: 0,
        }
    }

    /// Creates a list holding a copy of `items`.
    ///
    /// # Errors
    ///
    /// Returns a capacity error if `items.len() > N`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixbuf_collections::BoundedList;
    ///
    /// let list = BoundedList::<u8, 4>::from_slice(&[1, 2, 3])?;
    /// assert_eq!(list.len(), 3);
    /// assert!(BoundedList::<u8, 4>::from_slice(&[0; 5]).is_err());
    /// # Ok::<(), fixbuf_error::Error>(())
    /// ```
    pub fn from_slice(items: &[T]) -> Result<Self> {
        crate::enter_span!(crate::tracing::CollectionTrace::from_slice(NAME, items.len(), N));
        if items.len() > N {
            let error = Error::sequence_too_long("BoundedList initial sequence exceeds capacity");
            crate::trace_rejected!(NAME, "from_slice", items.len(), N, error);
            return Err(error);
        }

        let mut list = Self::new();
        list.buffer.write_slice(0, items);
        list.len = items.len();
        Ok(list)
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the list holds `N` elements.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns the compile-time capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns how many more elements fit.
    #[inline]
    #[must_use]
    pub const fn remaining_capacity(&self) -> usize {
        N - self.len
    }

    /// Appends an element. O(1).
    ///
    /// # Errors
    ///
    /// Returns a capacity error if the list is full.
    #[inline]
    pub fn add(&mut self, item: T) -> Result<()> {
        if self.try_add(item) {
            Ok(())
        } else {
            let error = Error::capacity_exceeded("BoundedList capacity exceeded");
            crate::trace_rejected!(NAME, "add", self.len, N, error);
            Err(error)
        }
    }

    /// Appends an element, returning `false` if the list is full.
    #[inline]
    pub fn try_add(&mut self, item: T) -> bool {
        if self.len >= N {
            return false;
        }

        // SAFETY: len < N
        unsafe { self.buffer.write_unchecked(self.len, item) };
        self.len += 1;
        true
    }

    /// Appends every element of `items`, or none of them.
    ///
    /// # Errors
    ///
    /// Returns a capacity error, leaving the list unchanged, if
    /// `len + items.len() > N`.
    pub fn add_range(&mut self, items: &[T]) -> Result<()> {
        crate::enter_span!(crate::tracing::CollectionTrace::add_range(NAME, self.len, items.len()));
        if items.len() > self.remaining_capacity() {
            let error = Error::range_exceeds_capacity("BoundedList range exceeds capacity");
            crate::trace_rejected!(NAME, "add_range", self.len, N, error);
            return Err(error);
        }

        self.buffer.write_slice(self.len, items);
        self.len += items.len();
        Ok(())
    }

    /// Inserts `item` at `index`, shifting `[index, len)` one slot right.
    /// O(len - index).
    ///
    /// # Errors
    ///
    /// - Bounds error if `index > len`
    /// - Capacity error if the list is full
    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        if index > self.len {
            let error = Error::insert_position_out_of_range("BoundedList insert position out of range");
            crate::trace_rejected!(NAME, "insert", self.len, N, error);
            return Err(error);
        }
        if self.len >= N {
            let error = Error::capacity_exceeded("BoundedList capacity exceeded");
            crate::trace_rejected!(NAME, "insert", self.len, N, error);
            return Err(error);
        }

        self.insert_unchecked(index, item);
        Ok(())
    }

    /// Inserts `item` at `index`, returning `false` if `index > len` or the
    /// list is full.
    #[inline]
    pub fn try_insert(&mut self, index: usize, item: T) -> bool {
        if index > self.len || self.len >= N {
            return false;
        }

        self.insert_unchecked(index, item);
        true
    }

    // Requires index <= len < N.
    #[inline]
    fn insert_unchecked(&mut self, index: usize, item: T) {
        self.buffer.shift_right(index, self.len);
        // SAFETY: index <= len < N
        unsafe { self.buffer.write_unchecked(index, item) };
        self.len += 1;
    }

    /// Removes and returns the element at `index`, shifting `[index + 1,
    /// len)` one slot left. O(len - index).
    ///
    /// # Errors
    ///
    /// Returns a bounds error if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        match self.try_remove_at(index) {
            Some(item) => Ok(item),
            None => {
                let error = Error::index_out_of_range("BoundedList index out of range");
                crate::trace_rejected!(NAME, "remove_at", self.len, N, error);
                Err(error)
            }
        }
    }

    /// Removes and returns the element at `index`, or `None` if
    /// `index >= len`.
    #[inline]
    pub fn try_remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }

        // SAFETY: index < len, so the slot is initialized
        let item = unsafe { self.buffer.read_unchecked(index) };
        self.buffer.shift_left(index, self.len);
        self.len -= 1;
        Some(item)
    }

    /// Removes the first element equal to `item`. Returns whether one was
    /// found.
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(item) {
            Some(index) => self.try_remove_at(index).is_some(),
            None => false,
        }
    }

    /// Returns the index of the first element equal to `item`.
    #[must_use]
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|candidate| candidate == item)
    }

    /// Returns `true` if some element equals `item`.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(item)
    }

    /// Returns a reference to the element at `index`, or `None` if
    /// `index >= len`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if
    /// `index >= len`.
    #[inline]
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns a reference to the element at `index` without any check.
    ///
    /// # Safety
    ///
    /// `index < len`
    #[inline]
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: index < len <= N, and [0, len) is initialized
        unsafe { self.buffer.get_unchecked(index) }
    }

    /// Returns a mutable reference to the element at `index` without any
    /// check. Writes through it land directly in the backing slot.
    ///
    /// # Safety
    ///
    /// `index < len`
    #[inline]
    #[must_use]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: index < len <= N, and [0, len) is initialized
        unsafe { self.buffer.get_unchecked_mut(index) }
    }

    /// Overwrites the element at `index` without any check.
    ///
    /// # Safety
    ///
    /// `index < len`
    #[inline]
    pub unsafe fn set_unchecked(&mut self, index: usize, item: T) {
        // SAFETY: index < len <= N
        unsafe { self.buffer.write_unchecked(index, item) };
    }

    /// Removes every element. O(1): slots are abandoned, not cleared.
    #[inline]
    pub fn clear(&mut self) {
        crate::enter_span!(crate::tracing::CollectionTrace::clear(NAME, self.len));
        self.len = 0;
    }

    /// Views the elements `[0, len)` as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [0, len) is initialized and len <= N
        unsafe { self.buffer.as_slice(self.len) }
    }

    /// Views the elements `[0, len)` as a mutable slice, e.g. for sorting.
    #[inline]
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: [0, len) is initialized and len <= N
        unsafe { self.buffer.as_mut_slice(self.len) }
    }

    /// Returns an iterator from index 0 to `len - 1`.
    ///
    /// The borrow checker rules out mutating the list while the iterator is
    /// alive.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator yielding mutable references in index order.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: Copy, const N: usize> Default for BoundedList<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for BoundedList<T, N> {
    type Error = Error;

    fn try_from(items: &[T]) -> Result<Self> {
        Self::from_slice(items)
    }
}

impl<T: Copy, const N: usize> Index<usize> for BoundedList<T, N> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len`, like slice indexing.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T: Copy, const N: usize> IndexMut<usize> for BoundedList<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: Copy, const N: usize> AsRef<[T]> for BoundedList<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Copy, const N: usize> AsMut<[T]> for BoundedList<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Copy + fmt::Debug, const N: usize> fmt::Debug for BoundedList<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Equality and hashing look at the logical contents only.
impl<T: Copy + PartialEq, const N: usize> PartialEq for BoundedList<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Copy + Eq, const N: usize> Eq for BoundedList<T, N> {}

impl<T: Copy + Hash, const N: usize> Hash for BoundedList<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<'a, T: Copy, const N: usize> IntoIterator for &'a BoundedList<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Copy, const N: usize> IntoIterator for &'a mut BoundedList<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: Copy, const N: usize> IntoIterator for BoundedList<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
            front: 0,
            back: self.len,
        }
    }
}

/// Owning iterator over a [`BoundedList`], in index order.
#[derive(Clone)]
pub struct IntoIter<T: Copy, const N: usize> {
    list: BoundedList<T, N>,
    front: usize,
    back: usize,
}

impl<T: Copy, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        // SAFETY: front < back <= len
        let item = unsafe { self.list.buffer.read_unchecked(self.front) };
        self.front += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Copy, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: front <= back < len
        Some(unsafe { self.list.buffer.read_unchecked(self.back) })
    }
}

impl<T: Copy, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

// ============================================================================
// KANI Formal Verification
// ============================================================================

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_insert_then_remove_restores_order() {
        let mut list: BoundedList<u8, 4> = BoundedList::new();
        list.add(1).unwrap();
        list.add(2).unwrap();
        list.add(3).unwrap();

        let index: usize = kani::any();
        kani::assume(index <= 3);

        list.insert(index, 9).unwrap();
        assert!(list.len() == 4);
        assert!(list.remove_at(index).unwrap() == 9);
        assert!(list.as_slice() == [1, 2, 3]);
    }

    #[kani::proof]
    fn verify_capacity_enforcement() {
        let mut list: BoundedList<u8, 2> = BoundedList::new();
        assert!(list.try_add(1));
        assert!(list.try_add(2));
        assert!(!list.try_add(3));
        assert!(list.add(3).is_err());
        assert!(list.len() == 2);
    }
}

// ============================================================================
// Tests
// ============================================================================
