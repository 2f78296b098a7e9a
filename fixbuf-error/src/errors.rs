// fixbuf - fixbuf-error
// Module: Error Types
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The error type shared by every fixbuf container.
//!
//! Errors are small `Copy` values carrying a category, a numeric code and a
//! static message, so constructing and returning one never allocates.

use core::fmt;

use crate::{codes, kinds::ErrorKind};

/// `Error` categories for container operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// The container has no room left for the requested growth
    Capacity   = 1,
    /// The container is in a state that cannot serve the request (empty)
    State      = 2,
    /// An index is outside the container's logical range
    Bounds     = 3,
    /// A type-level parameter is not acceptable
    Validation = 4,
}

/// Base trait for error sources
pub trait ErrorSource: fmt::Debug + Send + Sync {
    /// Get the error code
    fn code(&self) -> u16;

    /// Get the error message
    fn message(&self) -> &'static str;

    /// Get the error category
    fn category(&self) -> ErrorCategory;
}

/// fixbuf `Error` type
///
/// Every failing container operation returns one of these and leaves the
/// container exactly as it was before the call.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Generic capacity exceeded error
    pub const CAPACITY_EXCEEDED: Self = Self::new(
        ErrorCategory::Capacity,
        codes::CAPACITY_EXCEEDED,
        "Capacity exceeded",
    );
    /// Generic empty collection error
    pub const EMPTY_COLLECTION: Self = Self::new(
        ErrorCategory::State,
        codes::EMPTY_COLLECTION,
        "Collection is empty",
    );
    /// Generic index out of range error
    pub const INDEX_OUT_OF_RANGE: Self = Self::new(
        ErrorCategory::Bounds,
        codes::INDEX_OUT_OF_RANGE,
        "Index out of range",
    );

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    // Factory methods

    /// Create a capacity exceeded error
    #[must_use]
    pub const fn capacity_exceeded(message: &'static str) -> Self {
        Self::new(ErrorCategory::Capacity, codes::CAPACITY_EXCEEDED, message)
    }

    /// Create an error for a bulk append that does not fit
    #[must_use]
    pub const fn range_exceeds_capacity(message: &'static str) -> Self {
        Self::new(ErrorCategory::Capacity, codes::RANGE_EXCEEDS_CAPACITY, message)
    }

    /// Create an error for an initial sequence longer than the capacity
    #[must_use]
    pub const fn sequence_too_long(message: &'static str) -> Self {
        Self::new(ErrorCategory::Capacity, codes::SEQUENCE_TOO_LONG, message)
    }

    /// Create an empty collection error
    #[must_use]
    pub const fn empty_collection(message: &'static str) -> Self {
        Self::new(ErrorCategory::State, codes::EMPTY_COLLECTION, message)
    }

    /// Create an index out of range error
    #[must_use]
    pub const fn index_out_of_range(message: &'static str) -> Self {
        Self::new(ErrorCategory::Bounds, codes::INDEX_OUT_OF_RANGE, message)
    }

    /// Create an error for an insertion position outside `[0, len]`
    #[must_use]
    pub const fn insert_position_out_of_range(message: &'static str) -> Self {
        Self::new(ErrorCategory::Bounds, codes::INSERT_POSITION_OUT_OF_RANGE, message)
    }

    /// Create an invalid capacity error
    #[must_use]
    pub const fn invalid_capacity(message: &'static str) -> Self {
        Self::new(ErrorCategory::Validation, codes::INVALID_CAPACITY, message)
    }

    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::from_code(self.code)
    }

    /// Check if this is a capacity error
    #[must_use]
    pub fn is_capacity_error(&self) -> bool {
        self.category == ErrorCategory::Capacity
    }

    /// Check if this is an empty collection error
    #[must_use]
    pub fn is_empty_error(&self) -> bool {
        self.category == ErrorCategory::State
    }

    /// Check if this is a bounds error
    #[must_use]
    pub fn is_bounds_error(&self) -> bool {
        self.category == ErrorCategory::Bounds
    }

    /// Check that the code lies in the range owned by the category and that
    /// the message is not empty.
    #[must_use]
    pub const fn validate_integrity(&self) -> bool {
        let (low, high) = codes::CATEGORY_RANGES[self.category as usize - 1];
        self.code >= low && self.code <= high && !self.message.is_empty()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

impl ErrorSource for Error {
    fn code(&self) -> u16 {
        self.code
    }

    fn message(&self) -> &'static str {
        self.message
    }

    fn category(&self) -> ErrorCategory {
        self.category
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::CapacityExceeded => Self::CAPACITY_EXCEEDED,
            ErrorKind::EmptyCollection => Self::EMPTY_COLLECTION,
            ErrorKind::IndexOutOfRange => Self::INDEX_OUT_OF_RANGE,
            ErrorKind::InvalidCapacity => Self::invalid_capacity("Invalid capacity"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
