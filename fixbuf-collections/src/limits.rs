// fixbuf - fixbuf-collections
// Module: Capacity limits
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Compile-time capacity limits for the inline containers.
//!
//! Every container takes its capacity as a const parameter that defaults to
//! [`DEFAULT_CAPACITY`]. Capacities are validated during monomorphization,
//! so an unusable capacity is a compile error rather than a runtime failure.
//!
//! ```rust
//! use fixbuf_collections::{limits, BoundedQueue};
//!
//! let queue = BoundedQueue::<u8>::new();
//! assert_eq!(queue.capacity(), limits::DEFAULT_CAPACITY);
//! ```

/// Capacity used when a container's `N` parameter is omitted.
pub const DEFAULT_CAPACITY: usize = 32;

/// Largest capacity any container accepts.
///
/// Containers live inline (usually on the stack), so capacities are kept
/// small enough that a container of bytes stays well under a page.
pub const MAX_CAPACITY: usize = 4096;

/// Compile-time capacity validator.
///
/// Referencing one of the associated constants forces its assertion to be
/// evaluated for the concrete `N`; a failing assertion aborts compilation.
pub struct CapacityCheck<const N: usize>;

impl<const N: usize> CapacityCheck<N> {
    /// `0 < N <= MAX_CAPACITY`
    pub const IN_RANGE: () = {
        assert!(N > 0, "container capacity must be greater than zero");
        assert!(N <= MAX_CAPACITY, "container capacity exceeds MAX_CAPACITY");
    };

    /// `N` is a power of two, so `i % N == i & (N - 1)`.
    pub const POWER_OF_TWO: () = {
        let () = Self::IN_RANGE;
        assert!(N.is_power_of_two(), "circular buffer capacity must be a power of two");
    };

    /// Wraparound mask for circular indexing. Evaluating it validates `N`.
    pub const MASK: usize = {
        let () = Self::POWER_OF_TWO;
        N - 1
    };

    /// Whether `N` is usable as a circular buffer capacity, without failing
    /// compilation when it is not.
    #[must_use]
    pub const fn is_valid_ring_capacity() -> bool {
        N > 0 && N <= MAX_CAPACITY && N.is_power_of_two()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_is_a_valid_ring_capacity() {
        assert!(CapacityCheck::<DEFAULT_CAPACITY>::is_valid_ring_capacity());
        assert_eq!(CapacityCheck::<DEFAULT_CAPACITY>::MASK, 31);
    }

    #[test]
    fn ring_capacity_rejects_non_powers_of_two() {
        assert!(!CapacityCheck::<0>::is_valid_ring_capacity());
        assert!(!CapacityCheck::<12>::is_valid_ring_capacity());
        assert!(!CapacityCheck::<{ MAX_CAPACITY * 2 }>::is_valid_ring_capacity());
        assert!(CapacityCheck::<1>::is_valid_ring_capacity());
        assert!(CapacityCheck::<64>::is_valid_ring_capacity());
    }
}
