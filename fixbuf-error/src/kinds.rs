// fixbuf - fixbuf-error
// Module: Error Kinds
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error kinds callers match on.
//!
//! A kind groups every code that signals the same precondition violation, so
//! a full list and a full queue report the same [`ErrorKind::CapacityExceeded`]
//! even though their messages differ.

use core::fmt::{self, Display};

use crate::codes;

/// Classification of a container failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Growing the container would exceed its fixed capacity
    CapacityExceeded,
    /// Shrinking or reading from an empty container
    EmptyCollection,
    /// Index outside the container's logical range
    IndexOutOfRange,
    /// Capacity parameter rejected
    InvalidCapacity,
}

impl ErrorKind {
    /// Classify a numeric error code by the range it falls into.
    #[must_use]
    pub const fn from_code(code: u16) -> Self {
        match code {
            1000..=1999 => Self::CapacityExceeded,
            2000..=2999 => Self::EmptyCollection,
            3000..=3999 => Self::IndexOutOfRange,
            _ => Self::InvalidCapacity,
        }
    }

    /// The canonical code for this kind.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::CapacityExceeded => codes::CAPACITY_EXCEEDED,
            Self::EmptyCollection => codes::EMPTY_COLLECTION,
            Self::IndexOutOfRange => codes::INDEX_OUT_OF_RANGE,
            Self::InvalidCapacity => codes::INVALID_CAPACITY,
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded => write!(f, "Capacity exceeded"),
            Self::EmptyCollection => write!(f, "Collection is empty"),
            Self::IndexOutOfRange => write!(f, "Index out of range"),
            Self::InvalidCapacity => write!(f, "Invalid capacity"),
        }
    }
}
