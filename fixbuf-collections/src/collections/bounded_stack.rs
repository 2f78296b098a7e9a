// fixbuf - fixbuf-collections
// Module: BoundedStack - Inline-storage LIFO stack
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! LIFO stack with inline storage and compile-time capacity.
//!
//! Same physical shape as [`BoundedList`](super::BoundedList), but growth and
//! shrinkage only happen at the top (`len - 1`), so every mutation is O(1).
//!
//! # Iteration order
//!
//! The two read-back views deliberately disagree:
//!
//! - [`iter`](BoundedStack::iter) walks **top to bottom** (the order `pop`
//!   would produce)
//! - [`as_slice`](BoundedStack::as_slice) is in **insertion order**: index 0
//!   is the oldest element, the last index is the top

use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::Rev;
use core::slice;

use fixbuf_error::{Error, Result};

use super::fixed_buffer::FixedBuffer;
use crate::limits::DEFAULT_CAPACITY;

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
const NAME: &str = "BoundedStack";

/// A LIFO stack with compile-time capacity and inline storage.
///
/// # Invariants
///
/// 1. `len <= N` always holds
/// 2. Slots `[0, len)` are initialized, oldest first
/// 3. The top element is slot `len - 1`
///
/// # Examples
///
/// ```
/// use fixbuf_collections::BoundedStack;
///
/// let mut stack = BoundedStack::<char>::new();
/// stack.push('a')?;
/// stack.push('b')?;
/// stack.push('c')?;
///
/// assert_eq!(stack.pop()?, 'c');
/// assert_eq!(stack.iter().copied().collect::<String>(), "ba");
/// assert_eq!(stack.as_slice(), &['a', 'b']);
/// # Ok::<(), fixbuf_error::Error>(())
/// ```
#[derive(Clone, Copy)]
pub struct BoundedStack<T: Copy, const N: usize = DEFAULT_CAPACITY> {
    /// Inline storage; only `[0, len)` is live
    buffer: FixedBuffer<T, N>,

    /// Number of elements
    /// Invariant: len <= N
    len: usize,
}

impl<T: Copy, const N: usize> BoundedStack<T, N> {
    /// Maximum number of elements.
    pub const CAPACITY: usize = N;

    /// Creates an empty stack.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: FixedBuffer::new(),
            len: 0,
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the stack holds `N` elements.
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

    /// Pushes an element on top.
    ///
    /// # Errors
    ///
    /// Returns a capacity error if the stack is full.
    #[inline]
    pub fn push(&mut self, item: T) -> Result<()> {
        if self.try_push(item) {
            Ok(())
        } else {
            let error = Error::capacity_exceeded("BoundedStack full");
            crate::trace_rejected!(NAME, "push", self.len, N, error);
            Err(error)
        }
    }

    /// Pushes an element on top, returning `false` if the stack is full.
    #[inline]
    pub fn try_push(&mut self, item: T) -> bool {
        if self.len >= N {
            return false;
        }

        // SAFETY: len < N
        unsafe { self.buffer.write_unchecked(self.len, item) };
        self.len += 1;
        true
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    ///
    /// Returns an empty collection error if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Result<T> {
        match self.try_pop() {
            Some(item) => Ok(item),
            None => {
                let error = Error::empty_collection("BoundedStack empty");
                crate::trace_rejected!(NAME, "pop", self.len, N, error);
                Err(error)
            }
        }
    }

    /// Removes and returns the top element, or `None` if the stack is empty.
    #[inline]
    pub fn try_pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: the old top slot `len` is initialized
        Some(unsafe { self.buffer.read_unchecked(self.len) })
    }

    /// Returns a reference to the top element.
    ///
    /// # Errors
    ///
    /// Returns an empty collection error if the stack is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T> {
        match self.try_peek() {
            Some(item) => Ok(item),
            None => {
                let error = Error::empty_collection("BoundedStack empty");
                crate::trace_rejected!(NAME, "peek", self.len, N, error);
                Err(error)
            }
        }
    }

    /// Returns a mutable reference to the top element, so it can be updated
    /// in place without a pop/push pair.
    ///
    /// # Errors
    ///
    /// Returns an empty collection error if the stack is empty.
    #[inline]
    pub fn peek_mut(&mut self) -> Result<&mut T> {
        if self.len == 0 {
            let error = Error::empty_collection("BoundedStack empty");
            crate::trace_rejected!(NAME, "peek_mut", self.len, N, error);
            return Err(error);
        }

        // SAFETY: len > 0, so slot len - 1 is initialized
        Ok(unsafe { self.buffer.get_unchecked_mut(self.len - 1) })
    }

    /// Returns a reference to the top element, or `None` if the stack is
    /// empty.
    #[inline]
    #[must_use]
    pub fn try_peek(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns `true` if some element equals `item`.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(item)
    }

    /// Removes every element. O(1).
    #[inline]
    pub fn clear(&mut self) {
        crate::enter_span!(crate::tracing::CollectionTrace::clear(NAME, self.len));
        self.len = 0;
    }

    /// Views the elements in **insertion order** (bottom first, top last).
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [0, len) is initialized and len <= N
        unsafe { self.buffer.as_slice(self.len) }
    }

    /// Mutable view of the elements in insertion order.
    #[inline]
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: [0, len) is initialized and len <= N
        unsafe { self.buffer.as_mut_slice(self.len) }
    }

    /// Returns an iterator from the top of the stack to the bottom.
    #[inline]
    pub fn iter(&self) -> Rev<slice::Iter<'_, T>> {
        self.as_slice().iter().rev()
    }

    /// Returns a mutable iterator from the top of the stack to the bottom.
    #[inline]
    pub fn iter_mut(&mut self) -> Rev<slice::IterMut<'_, T>> {
        self.as_mut_slice().iter_mut().rev()
    }
}

impl<T: Copy, const N: usize> Default for BoundedStack<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + fmt::Debug, const N: usize> fmt::Debug for BoundedStack<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: Copy + PartialEq, const N: usize> PartialEq for BoundedStack<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Copy + Eq, const N: usize> Eq for BoundedStack<T, N> {}

impl<T: Copy + Hash, const N: usize> Hash for BoundedStack<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<'a, T: Copy, const N: usize> IntoIterator for &'a BoundedStack<T, N> {
    type Item = &'a T;
    type IntoIter = Rev<slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Copy, const N: usize> IntoIterator for &'a mut BoundedStack<T, N> {
    type Item = &'a mut T;
    type IntoIter = Rev<slice::IterMut<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: Copy, const N: usize> IntoIterator for BoundedStack<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { stack: self }
    }
}

/// Owning iterator over a [`BoundedStack`], yielding elements in pop order.
#[derive(Clone)]
pub struct IntoIter<T: Copy, const N: usize> {
    stack: BoundedStack<T, N>,
}

impl<T: Copy, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.stack.try_pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len, Some(self.stack.len))
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
    fn verify_lifo_order() {
        let mut stack: BoundedStack<u8, 4> = BoundedStack::new();
        let a: u8 = kani::any();
        let b: u8 = kani::any();

        stack.push(a).unwrap();
        stack.push(b).unwrap();

        assert!(stack.pop().unwrap() == b);
        assert!(stack.pop().unwrap() == a);
        assert!(stack.pop().is_err());
        assert!(stack.len() == 0);
    }

    #[kani::proof]
    fn verify_full_push_is_rejected() {
        let mut stack: BoundedStack<u8, 1> = BoundedStack::new();
        assert!(stack.try_push(1));
        assert!(!stack.try_push(2));
        assert!(*stack.peek().unwrap() == 1);
    }
}

// ============================================================================
// Tests
// ============================================================================
