// fixbuf - fixbuf-error
// Module: Error Codes
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for fixbuf
//!
//! Each [`ErrorCategory`](crate::ErrorCategory) owns a range of one thousand
//! codes. The first code of each range is the canonical one.

// Capacity errors (1000-1999)
/// A mutation would grow a container beyond its fixed capacity
pub const CAPACITY_EXCEEDED: u16 = 1000;
/// A bulk append would not fit in the remaining capacity
pub const RANGE_EXCEEDS_CAPACITY: u16 = 1001;
/// An initial sequence is longer than the container capacity
pub const SEQUENCE_TOO_LONG: u16 = 1002;

// State errors (2000-2999)
/// An element was requested from an empty container
pub const EMPTY_COLLECTION: u16 = 2000;

// Bounds errors (3000-3999)
/// An index lies outside the logical range of a container
pub const INDEX_OUT_OF_RANGE: u16 = 3000;
/// An insertion position lies outside `[0, len]`
pub const INSERT_POSITION_OUT_OF_RANGE: u16 = 3001;

// Validation errors (4000-4999)
/// A capacity parameter does not satisfy the container's requirements
pub const INVALID_CAPACITY: u16 = 4000;

/// Inclusive code range owned by each category, indexed by
/// `ErrorCategory as usize - 1`
pub const CATEGORY_RANGES: [(u16, u16); 4] = [(1000, 1999), (2000, 2999), (3000, 3999), (4000, 4999)];
