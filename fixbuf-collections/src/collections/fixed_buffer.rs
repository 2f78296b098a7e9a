// fixbuf - fixbuf-collections
// Module: FixedBuffer - Inline element storage
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Raw inline storage shared by every container.
//!
//! `FixedBuffer<T, N>` is `N` contiguous slots of `T` held by value. It keeps
//! no length and performs no bookkeeping: the embedding container decides
//! which slots hold live values and only ever reads those.
//!
//! # Safety
//!
//! The `*_unchecked` accessors skip bounds checks and assume the slot was
//! written before. Containers uphold this through their own `len`/`head`
//! invariants; callers of the containers' unchecked APIs take it on
//! themselves.

use core::fmt;
use core::mem::MaybeUninit;
use core::slice;

use crate::limits::{CapacityCheck, DEFAULT_CAPACITY};

/// `N` slots of `T` stored inline.
///
/// Slots start uninitialized. Because `T: Copy`, nothing ever needs dropping,
/// so overwriting or abandoning a slot is always fine and copying the buffer
/// copies all `N` slots.
#[derive(Clone, Copy)]
pub struct FixedBuffer<T: Copy, const N: usize = DEFAULT_CAPACITY> {
    slots: [MaybeUninit<T>; N],
}

impl<T: Copy, const N: usize> FixedBuffer<T, N> {
    /// Number of slots.
    pub const CAPACITY: usize = N;

    /// Creates a buffer with every slot uninitialized.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        let () = CapacityCheck::<N>::IN_RANGE;
        Self {
            slots: [MaybeUninit::uninit(); N],
        }
    }

    /// Returns the number of slots.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns a reference to the value in slot `index`.
    ///
    /// # Safety
    ///
    /// - `index < N`
    /// - slot `index` has been written
    #[inline]
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < N);
        // SAFETY: the caller guarantees the index is in range and initialized.
        unsafe { self.slots.get_unchecked(index).assume_init_ref() }
    }

    /// Returns a mutable reference to the value in slot `index`.
    ///
    /// # Safety
    ///
    /// - `index < N`
    /// - slot `index` has been written
    #[inline]
    #[must_use]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < N);
        // SAFETY: the caller guarantees the index is in range and initialized.
        unsafe { self.slots.get_unchecked_mut(index).assume_init_mut() }
    }

    /// Copies the value out of slot `index`.
    ///
    /// # Safety
    ///
    /// - `index < N`
    /// - slot `index` has been written
    #[inline]
    #[must_use]
    pub unsafe fn read_unchecked(&self, index: usize) -> T {
        // SAFETY: forwarded to the caller.
        unsafe { *self.get_unchecked(index) }
    }

    /// Writes `value` into slot `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index < N`
    #[inline]
    pub unsafe fn write_unchecked(&mut self, index: usize, value: T) {
        debug_assert!(index < N);
        // SAFETY: the caller guarantees the index is in range.
        unsafe {
            self.slots.get_unchecked_mut(index).write(value);
        }
    }

    /// Writes `value` into slot `index`.
    ///
    /// Returns `false` without writing if `index >= N`.
    #[inline]
    pub fn write(&mut self, index: usize, value: T) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                slot.write(value);
                true
            }
            None => false,
        }
    }

    /// Copies `values` into the slots starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + values.len() > N`. Containers check capacity first.
    #[inline]
    pub fn write_slice(&mut self, offset: usize, values: &[T]) {
        let dest = &mut self.slots[offset..offset + values.len()];
        for (slot, value) in dest.iter_mut().zip(values) {
            slot.write(*value);
        }
    }

    /// Moves slots `[index, len)` one position to the right, opening a gap at
    /// `index`. Requires `len < N`.
    #[inline]
    pub fn shift_right(&mut self, index: usize, len: usize) {
        debug_assert!(index <= len && len < N);
        self.slots.copy_within(index..len, index + 1);
    }

    /// Moves slots `[index + 1, len)` one position to the left, closing the
    /// slot at `index`. Requires `index < len <= N`.
    #[inline]
    pub fn shift_left(&mut self, index: usize, len: usize) {
        debug_assert!(index < len && len <= N);
        self.slots.copy_within(index + 1..len, index);
    }

    /// Views slots `[start, start + len)` as initialized values.
    ///
    /// # Safety
    ///
    /// - `start + len <= N`
    /// - every slot in the range has been written
    #[inline]
    #[must_use]
    pub unsafe fn slice_unchecked(&self, start: usize, len: usize) -> &[T] {
        debug_assert!(start + len <= N);
        // SAFETY: `MaybeUninit<T>` has the layout of `T`; the caller
        // guarantees the range is in bounds and initialized.
        unsafe { slice::from_raw_parts(self.slots.as_ptr().add(start).cast::<T>(), len) }
    }

    /// Mutable counterpart of [`slice_unchecked`](Self::slice_unchecked).
    ///
    /// # Safety
    ///
    /// - `start + len <= N`
    /// - every slot in the range has been written
    #[inline]
    #[must_use]
    pub unsafe fn slice_unchecked_mut(&mut self, start: usize, len: usize) -> &mut [T] {
        debug_assert!(start + len <= N);
        // SAFETY: as for `slice_unchecked`, and `&mut self` guarantees
        // exclusive access.
        unsafe { slice::from_raw_parts_mut(self.slots.as_mut_ptr().add(start).cast::<T>(), len) }
    }

    /// Views the initialized prefix `[0, len)`.
    ///
    /// # Safety
    ///
    /// - `len <= N`
    /// - slots `[0, len)` have been written
    #[inline]
    #[must_use]
    pub unsafe fn as_slice(&self, len: usize) -> &[T] {
        // SAFETY: forwarded to the caller.
        unsafe { self.slice_unchecked(0, len) }
    }

    /// Mutable view of the initialized prefix `[0, len)`.
    ///
    /// # Safety
    ///
    /// - `len <= N`
    /// - slots `[0, len)` have been written
    #[inline]
    #[must_use]
    pub unsafe fn as_mut_slice(&mut self, len: usize) -> &mut [T] {
        // SAFETY: forwarded to the caller.
        unsafe { self.slice_unchecked_mut(0, len) }
    }

    /// Splits the buffer into two disjoint mutable runs: `[start, start +
    /// first)` and `[0, second)`. This is the shape of a wrapped circular
    /// sequence.
    ///
    /// # Safety
    ///
    /// - `start + first <= N` and `second <= start`
    /// - every slot in both runs has been written
    #[inline]
    #[must_use]
    pub unsafe fn wrapped_runs_mut(
        &mut self,
        start: usize,
        first: usize,
        second: usize,
    ) -> (&mut [T], &mut [T]) {
        debug_assert!(start + first <= N && second <= start);
        let (front, back) = self.slots.split_at_mut(start);
        // SAFETY: the two halves of `split_at_mut` are disjoint; the caller
        // guarantees the runs are in bounds and initialized.
        unsafe {
            (
                slice::from_raw_parts_mut(back.as_mut_ptr().cast::<T>(), first),
                slice::from_raw_parts_mut(front.as_mut_ptr().cast::<T>(), second),
            )
        }
    }

    /// Raw pointer to slot 0.
    #[inline]
    #[must_use]
    pub const fn as_ptr(&self) -> *const T {
        self.slots.as_ptr().cast::<T>()
    }

    /// Raw mutable pointer to slot 0.
    #[inline]
    #[must_use]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.slots.as_mut_ptr().cast::<T>()
    }
}

impl<T: Copy, const N: usize> Default for FixedBuffer<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// Slot contents may be uninitialized, so only the shape is printed.
impl<T: Copy, const N: usize> fmt::Debug for FixedBuffer<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedBuffer").field("capacity", &N).finish_non_exhaustive()
    }
}

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    fn verify_shift_right_then_left_restores_prefix() {
        let mut buffer: FixedBuffer<u8, 4> = FixedBuffer::new();
        buffer.write_slice(0, &[1, 2, 3]);
        buffer.shift_right(1, 3);
        buffer.shift_left(1, 4);
        // SAFETY: slots 0..3 were written above
        let prefix = unsafe { buffer.as_slice(3) };
        assert!(*prefix == [1, 2, 3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_write_bounds() {
        let mut buffer = FixedBuffer::<u32, 3>::new();

        assert!(buffer.write(0, 10));
        assert!(buffer.write(2, 20));

        assert!(!buffer.write(3, 30));
        assert!(!buffer.write(100, 50));

        unsafe {
            assert_eq!(buffer.read_unchecked(0), 10);
            assert_eq!(buffer.read_unchecked(2), 20);
        }
    }

    #[test]
    fn shift_right_opens_gap() {
        let mut buffer = FixedBuffer::<u32, 8>::new();
        buffer.write_slice(0, &[1, 2, 3, 4]);

        buffer.shift_right(1, 4);
        unsafe { buffer.write_unchecked(1, 99) };

        assert_eq!(unsafe { buffer.as_slice(5) }, &[1, 99, 2, 3, 4]);
    }

    #[test]
    fn shift_left_closes_gap() {
        let mut buffer = FixedBuffer::<u32, 8>::new();
        buffer.write_slice(0, &[1, 2, 3, 4]);

        buffer.shift_left(0, 4);

        assert_eq!(unsafe { buffer.as_slice(3) }, &[2, 3, 4]);
    }

    #[test]
    fn copies_are_independent() {
        let mut original = FixedBuffer::<u32, 4>::new();
        original.write_slice(0, &[1, 2]);

        let mut copy = original;
        unsafe { *copy.get_unchecked_mut(0) = 42 };

        assert_eq!(unsafe { original.read_unchecked(0) }, 1);
        assert_eq!(unsafe { copy.read_unchecked(0) }, 42);
    }

    #[test]
    fn wrapped_runs_are_disjoint() {
        let mut buffer = FixedBuffer::<u32, 8>::new();
        buffer.write_slice(0, &[10, 11, 12, 13, 14, 15, 16, 17]);

        let (first, second) = unsafe { buffer.wrapped_runs_mut(6, 2, 3) };
        assert_eq!(first, &[16, 17]);
        assert_eq!(second, &[10, 11, 12]);
        first[0] = 0;
        second[0] = 1;

        assert_eq!(unsafe { buffer.as_slice(8) }, &[1, 11, 12, 13, 14, 15, 0, 17]);
    }

    #[test]
    fn capacity_matches_const_parameter() {
        let buffer = FixedBuffer::<u8>::new();
        assert_eq!(buffer.capacity(), 32);
        assert_eq!(FixedBuffer::<u8, 16>::CAPACITY, 16);
    }
}
