// fixbuf - fixbuf-collections
// Module: BoundedQueue - Inline-storage FIFO circular buffer
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! FIFO queue over a circular buffer with inline storage.
//!
//! `BoundedQueue<T, N>` enqueues at `tail` and dequeues at `head`; both wrap
//! around the end of the buffer, so neither operation ever shifts elements.
//!
//! # Characteristics
//!
//! - **Zero allocation**: storage is an inline [`FixedBuffer`]
//! - **Const-time operations**: `enqueue()`, `dequeue()` and `peek()` are O(1)
//! - **Mask-based wraparound**: `N` must be a power of two, so `i % N` is
//!   computed as `i & (N - 1)`; other capacities fail to compile
//! - **Value semantics**: copying the queue copies every slot plus `head`,
//!   `tail` and `len`

use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::{Chain, FusedIterator};
use core::slice;

use fixbuf_error::{Error, Result};

use super::fixed_buffer::FixedBuffer;
use crate::limits::{CapacityCheck, DEFAULT_CAPACITY};

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
const NAME: &str = "BoundedQueue";

/// A FIFO queue with compile-time, power-of-two capacity and inline storage.
///
/// # Invariants
///
/// 1. `len <= N` always holds
/// 2. `head` and `tail` are always < N
/// 3. `tail == (head + len) & (N - 1)`
/// 4. The logical sequence occupies slots `(head + i) & (N - 1)` for
///    `i in 0..len`, and those slots are initialized
///
/// # Examples
///
/// ```
/// use fixbuf_collections::BoundedQueue;
///
/// let mut queue = BoundedQueue::<u32, 4>::new();
/// queue.enqueue(1)?;
/// queue.enqueue(2)?;
/// queue.enqueue(3)?;
///
/// assert_eq!(queue.dequeue()?, 1);
/// assert_eq!(queue.dequeue()?, 2);
/// assert_eq!(queue.len(), 1);
/// # Ok::<(), fixbuf_error::Error>(())
/// ```
#[derive(Clone, Copy)]
pub struct BoundedQueue<T: Copy, const N: usize = DEFAULT_CAPACITY> {
    /// Inline storage for elements (circular buffer)
    buffer: FixedBuffer<T, N>,

    /// Index of the first element (head)
    head: usize,

    /// Index where next element will be inserted (tail)
    tail: usize,

    /// Number of elements currently in the queue
    /// Invariant: len <= N
    len: usize,
}

impl<T: Copy, const N: usize> BoundedQueue<T, N> {
    /// Maximum number of elements.
    pub const CAPACITY: usize = N;

    /// Wraparound mask. Evaluating it rejects non-power-of-two capacities at
    /// compile time.
    const MASK: usize = CapacityCheck::<N>::MASK;

    /// Creates a new empty queue.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        let () = CapacityCheck::<N>::POWER_OF_TWO;
        Self {
            buffer: FixedBuffer::new(),
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Physical slot of the `offset`-th logical element.
    #[inline]
    const fn slot(&self, offset: usize) -> usize {
        (self.head + offset) & Self::MASK
    }

    /// Returns the current length.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the queue is full.
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

    /// Physical index of the front element.
    #[inline]
    #[must_use]
    pub const fn head_slot(&self) -> usize {
        self.head
    }

    /// Physical index the next enqueue writes to.
    #[inline]
    #[must_use]
    pub const fn tail_slot(&self) -> usize {
        self.tail
    }

    /// Adds an element at the back of the queue.
    ///
    /// # Errors
    ///
    /// Returns a capacity error if the queue is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixbuf_collections::BoundedQueue;
    ///
    /// let mut queue = BoundedQueue::<u32, 2>::new();
    /// queue.enqueue(1)?;
    /// queue.enqueue(2)?;
    /// assert!(queue.enqueue(3).is_err()); // Full
    /// # Ok::<(), fixbuf_error::Error>(())
    /// ```
    #[inline]
    pub fn enqueue(&mut self, item: T) -> Result<()> {
        if self.try_enqueue(item) {
            Ok(())
        } else {
            let error = Error::capacity_exceeded("BoundedQueue full");
            crate::trace_rejected!(NAME, "enqueue", self.len, N, error);
            Err(error)
        }
    }

    /// Adds an element at the back, returning `false` if the queue is full.
    #[inline]
    pub fn try_enqueue(&mut self, item: T) -> bool {
        if self.len >= N {
            return false;
        }

        // SAFETY: tail < N (maintained by the mask)
        unsafe { self.buffer.write_unchecked(self.tail, item) };

        // Circular wraparound
        self.tail = (self.tail + 1) & Self::MASK;
        self.len += 1;
        true
    }

    /// Removes and returns the element at the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns an empty collection error if the queue is empty.
    #[inline]
    pub fn dequeue(&mut self) -> Result<T> {
        match self.try_dequeue() {
            Some(item) => Ok(item),
            None => {
                let error = Error::empty_collection("BoundedQueue empty");
                crate::trace_rejected!(NAME, "dequeue", self.len, N, error);
                Err(error)
            }
        }
    }

    /// Removes and returns the front element, or `None` if the queue is
    /// empty.
    #[inline]
    pub fn try_dequeue(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        // SAFETY: head < N, and the element is initialized
        let item = unsafe { self.buffer.read_unchecked(self.head) };

        // Circular wraparound
        self.head = (self.head + 1) & Self::MASK;
        self.len -= 1;
        Some(item)
    }

    /// Returns a reference to the front element without removing it.
    ///
    /// # Errors
    ///
    /// Returns an empty collection error if the queue is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T> {
        match self.try_peek() {
            Some(item) => Ok(item),
            None => {
                let error = Error::empty_collection("BoundedQueue empty");
                crate::trace_rejected!(NAME, "peek", self.len, N, error);
                Err(error)
            }
        }
    }

    /// Returns a mutable reference to the front element, so it can be
    /// updated where it sits.
    ///
    /// # Errors
    ///
    /// Returns an empty collection error if the queue is empty.
    #[inline]
    pub fn peek_mut(&mut self) -> Result<&mut T> {
        if self.len == 0 {
            let error = Error::empty_collection("BoundedQueue empty");
            crate::trace_rejected!(NAME, "peek_mut", self.len, N, error);
            return Err(error);
        }

        // SAFETY: head < N, and the element is initialized
        Ok(unsafe { self.buffer.get_unchecked_mut(self.head) })
    }

    /// Returns a reference to the front element, or `None` if the queue is
    /// empty.
    #[inline]
    #[must_use]
    pub fn try_peek(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }

        // SAFETY: head < N, and the element is initialized
        Some(unsafe { self.buffer.get_unchecked(self.head) })
    }

    /// Returns `true` if some element equals `item`.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        let (first, second) = self.as_slices();
        first.contains(item) || second.contains(item)
    }

    /// Removes every element and rewinds `head` and `tail` to slot 0.
    ///
    /// O(1): only `[head, head + len)` is ever read, so stale slot contents
    /// do not need clearing.
    #[inline]
    pub fn clear(&mut self) {
        crate::enter_span!(crate::tracing::CollectionTrace::clear(NAME, self.len));
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    /// Lengths of the two physical runs holding the logical sequence: from
    /// `head` to the end of the buffer, then from slot 0.
    #[inline]
    const fn run_lengths(&self) -> (usize, usize) {
        let to_end = N - self.head;
        if self.len <= to_end {
            (self.len, 0)
        } else {
            (to_end, self.len - to_end)
        }
    }

    /// Returns the queue contents as two slices in physical storage.
    ///
    /// Concatenating the first and second slice gives the logical order. The
    /// second slice is empty unless the sequence wraps past the end of the
    /// buffer.
    #[inline]
    #[must_use]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let (first, second) = self.run_lengths();
        // SAFETY: both runs lie inside the buffer and cover exactly the
        // initialized logical sequence
        unsafe {
            (
                self.buffer.slice_unchecked(self.head, first),
                self.buffer.slice_unchecked(0, second),
            )
        }
    }

    /// Mutable counterpart of [`as_slices`](Self::as_slices).
    #[inline]
    #[must_use]
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let (first, second) = self.run_lengths();
        // SAFETY: head + first <= N; when second > 0 the sequence wrapped,
        // so second == tail <= head. Both runs are initialized.
        unsafe { self.buffer.wrapped_runs_mut(self.head, first, second) }
    }

    /// Returns an iterator over the queue.
    ///
    /// Elements are yielded in FIFO order (front to back).
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter {
            queue: self,
            front: 0,
            back: self.len,
        }
    }

    /// Returns an iterator yielding mutable references, front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (first, second) = self.as_mut_slices();
        IterMut {
            inner: first.iter_mut().chain(second.iter_mut()),
        }
    }
}

impl<T: Copy, const N: usize> Default for BoundedQueue<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + fmt::Debug, const N: usize> fmt::Debug for BoundedQueue<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Two queues are equal when they hold the same logical sequence, wherever
// it sits in the buffer.
impl<T: Copy + PartialEq, const N: usize> PartialEq for BoundedQueue<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Copy + Eq, const N: usize> Eq for BoundedQueue<T, N> {}

impl<T: Copy + Hash, const N: usize> Hash for BoundedQueue<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

/// Borrowing iterator over a [`BoundedQueue`], front to back.
///
/// Each step maps the logical offset to a physical slot with
/// `(head + offset) & (N - 1)`.
#[derive(Clone)]
pub struct Iter<'a, T: Copy, const N: usize> {
    queue: &'a BoundedQueue<T, N>,
    /// Logical offset of the next element from the front
    front: usize,
    /// One past the logical offset of the next element from the back
    back: usize,
}

impl<'a, T: Copy, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        // Calculate actual position in circular buffer
        let slot = self.queue.slot(self.front);
        self.front += 1;
        // SAFETY: front < len, so the slot is part of the live sequence
        Some(unsafe { self.queue.buffer.get_unchecked(slot) })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Copy, const N: usize> DoubleEndedIterator for Iter<'_, T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        let slot = self.queue.slot(self.back);
        // SAFETY: back < len, so the slot is part of the live sequence
        Some(unsafe { self.queue.buffer.get_unchecked(slot) })
    }
}

impl<T: Copy, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}

impl<T: Copy, const N: usize> FusedIterator for Iter<'_, T, N> {}

/// Mutable iterator over a [`BoundedQueue`], front to back.
pub struct IterMut<'a, T> {
    inner: Chain<slice::IterMut<'a, T>, slice::IterMut<'a, T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

/// Owning iterator over a [`BoundedQueue`], yielding elements in dequeue
/// order.
#[derive(Clone)]
pub struct IntoIter<T: Copy, const N: usize> {
    queue: BoundedQueue<T, N>,
}

impl<T: Copy, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.queue.try_dequeue()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len, Some(self.queue.len))
    }
}

impl<T: Copy, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<'a, T: Copy, const N: usize> IntoIterator for &'a BoundedQueue<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Copy, const N: usize> IntoIterator for &'a mut BoundedQueue<T, N> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: Copy, const N: usize> IntoIterator for BoundedQueue<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

// ============================================================================
// KANI Formal Verification
// ============================================================================

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    fn verify_fifo_order() {
        let mut queue: BoundedQueue<u8, 4> = BoundedQueue::new();

        // Push in order
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        queue.enqueue(3).unwrap();

        // Pop maintains FIFO order
        assert!(queue.dequeue().unwrap() == 1);
        assert!(queue.dequeue().unwrap() == 2);
        assert!(queue.dequeue().unwrap() == 3);
        assert!(queue.dequeue().is_err());
    }

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_circular_wraparound() {
        let mut queue: BoundedQueue<u32, 4> = BoundedQueue::new();
        let shift: usize = kani::any();
        kani::assume(shift <= 4);

        // Move head to an arbitrary slot
        for _ in 0..shift {
            queue.enqueue(0).unwrap();
            queue.dequeue().unwrap();
        }

        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        queue.enqueue(3).unwrap();

        assert!(queue.tail_slot() == (queue.head_slot() + queue.len()) & 3);
        assert!(queue.dequeue().unwrap() == 1);
        assert!(queue.dequeue().unwrap() == 2);
        assert!(queue.dequeue().unwrap() == 3);
    }

    #[kani::proof]
    fn verify_capacity_enforcement() {
        let mut queue: BoundedQueue<u8, 2> = BoundedQueue::new();

        assert!(queue.enqueue(1).is_ok());
        assert!(queue.enqueue(2).is_ok());
        assert!(queue.enqueue(3).is_err()); // Should fail

        assert!(queue.len() == 2);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use fixbuf_error::ErrorKind;

    use super::*;

    #[test]
    fn test_new() {
        let queue: BoundedQueue<u32> = BoundedQueue::new();
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.capacity(), 32);
        assert!(queue.is_empty());
        assert_eq!(queue.head_slot(), 0);
        assert_eq!(queue.tail_slot(), 0);
    }

    #[test]
    fn test_enqueue_dequeue_fifo() -> Result<()> {
        let mut queue = BoundedQueue::<u32, 8>::new();

        queue.enqueue(1)?;
        queue.enqueue(2)?;
        queue.enqueue(3)?;

        assert_eq!(queue.dequeue()?, 1);
        assert_eq!(queue.dequeue()?, 2);
        assert_eq!(queue.dequeue()?, 3);
        assert_eq!(queue.try_dequeue(), None);

        Ok(())
    }

    #[test]
    fn test_circular_buffer() -> Result<()> {
        let mut queue = BoundedQueue::<u32, 4>::new();

        // Fill
        for i in 1..=4 {
            queue.enqueue(i)?;
        }

        // Pop 2
        assert_eq!(queue.dequeue()?, 1);
        assert_eq!(queue.dequeue()?, 2);

        // Push 2 more (wraparound)
        queue.enqueue(5)?;
        queue.enqueue(6)?;
        assert_eq!(queue.head_slot(), 2);
        assert_eq!(queue.tail_slot(), 2);

        // Verify order
        assert_eq!(queue.dequeue()?, 3);
        assert_eq!(queue.dequeue()?, 4);
        assert_eq!(queue.dequeue()?, 5);
        assert_eq!(queue.dequeue()?, 6);

        Ok(())
    }

    #[test]
    fn test_full_and_empty_errors() -> Result<()> {
        let mut queue = BoundedQueue::<u32, 2>::new();

        assert_eq!(queue.dequeue().unwrap_err().kind(), ErrorKind::EmptyCollection);
        assert_eq!(queue.peek().unwrap_err().kind(), ErrorKind::EmptyCollection);
        assert!(queue.peek_mut().is_err());

        queue.enqueue(1)?;
        queue.enqueue(2)?;
        let err = queue.enqueue(3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CapacityExceeded);
        assert_eq!(err.message, "BoundedQueue full");
        assert!(!queue.try_enqueue(3));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.tail_slot(), 0);

        Ok(())
    }

    #[test]
    fn test_peek() -> Result<()> {
        let mut queue = BoundedQueue::<u32, 8>::new();
        queue.enqueue(42)?;
        queue.enqueue(100)?;

        assert_eq!(queue.peek()?, &42);
        assert_eq!(queue.peek()?, &42); // Doesn't remove
        *queue.peek_mut()? = 7;
        assert_eq!(queue.dequeue()?, 7);
        assert_eq!(queue.try_peek(), Some(&100));

        Ok(())
    }

    #[test]
    fn test_clear_rewinds_indices() -> Result<()> {
        let mut queue = BoundedQueue::<u32, 4>::new();
        queue.enqueue(1)?;
        queue.enqueue(2)?;
        queue.enqueue(3)?;
        queue.dequeue()?;

        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.head_slot(), 0);
        assert_eq!(queue.tail_slot(), 0);

        queue.enqueue(9)?;
        assert_eq!(queue.dequeue()?, 9);
        Ok(())
    }

    #[test]
    fn test_iter_across_wrap() -> Result<()> {
        let mut queue = BoundedQueue::<u32, 4>::new();
        for i in 0..4 {
            queue.enqueue(i)?;
        }
        queue.dequeue()?;
        queue.dequeue()?;
        queue.enqueue(4)?;

        let mut iter = queue.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);

        let (first, second) = queue.as_slices();
        assert_eq!(first, &[2, 3]);
        assert_eq!(second, &[4]);

        Ok(())
    }

    #[test]
    fn test_iter_mut_across_wrap() -> Result<()> {
        let mut queue = BoundedQueue::<u32, 4>::new();
        for i in 0..4 {
            queue.enqueue(i)?;
        }
        queue.dequeue()?;
        queue.enqueue(4)?;

        for item in &mut queue {
            *item *= 10;
        }

        assert_eq!(queue.iter_mut().len(), 4);
        for expected in [10, 20, 30, 40] {
            assert_eq!(queue.dequeue()?, expected);
        }
        Ok(())
    }

    #[test]
    fn test_equality_ignores_physical_position() -> Result<()> {
        let mut shifted = BoundedQueue::<u32, 4>::new();
        shifted.enqueue(0)?;
        shifted.enqueue(0)?;
        shifted.dequeue()?;
        shifted.dequeue()?;
        shifted.enqueue(1)?;
        shifted.enqueue(2)?;

        let mut fresh = BoundedQueue::<u32, 4>::new();
        fresh.enqueue(1)?;
        fresh.enqueue(2)?;

        assert_ne!(shifted.head_slot(), fresh.head_slot());
        assert_eq!(shifted, fresh);
        Ok(())
    }

    #[test]
    fn test_owning_iterator_yields_dequeue_order() -> Result<()> {
        let mut queue = BoundedQueue::<u32, 4>::new();
        queue.enqueue(3)?;
        queue.enqueue(1)?;
        queue.enqueue(2)?;

        let mut iter = queue.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(3));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next(), None);
        Ok(())
    }
}
