// fixbuf - fixbuf-collections
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity, allocation-free container primitives.
//!
//! This crate provides three containers that hold up to `N` elements (32 by
//! default) entirely inside their own storage, never on the heap:
//!
//! - [`BoundedList`]: ordered list with indexed access and shifting
//!   insert/remove
//! - [`BoundedStack`]: LIFO stack
//! - [`BoundedQueue`]: FIFO circular buffer with mask-based wraparound
//!
//! Each shares the inline [`FixedBuffer`] storage layout.
//!
//! # Error tiers
//!
//! Growth on a full container and shrinkage of an empty one can be reported
//! two ways:
//!
//! - `add`, `insert`, `remove_at`, `push`, `pop`, `peek`, `enqueue`,
//!   `dequeue` return [`Result`] with a [`fixbuf_error::Error`]
//! - `try_add`, `try_insert`, `try_push`, `try_enqueue` return `bool`;
//!   `try_pop`, `try_dequeue`, `try_remove_at`, `try_peek` return `Option`
//!
//! Either way, a failed call leaves the container exactly as it was.
//!
//! # Element requirements
//!
//! Elements must be `Copy`: a container never drops anything, and copying a
//! container duplicates every slot.
//!
//! # Feature Flags
//!
//! - `std`: implements `std::error::Error` for the error type
//! - `tracing`: structured events for rejected operations and spans around
//!   bulk operations
//! - `kani`: formal verification harnesses
//! - Default: pure `no_std`, no allocation, no logging
//!
//! # Safety
//!
//! The `*_unchecked` accessors skip all validation. Passing an index outside
//! the logical range is undefined behavior; the checked accessors and the
//! `try_*` variants are the safe alternatives.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

/// Inline collections
pub mod collections;
/// Compile-time capacity limits
pub mod limits;
/// Structured tracing glue
#[cfg(feature = "tracing")]
pub mod tracing;

pub use collections::{BoundedList, BoundedQueue, BoundedStack, FixedBuffer};
pub use fixbuf_error::{Error, ErrorCategory, ErrorKind};
pub use limits::DEFAULT_CAPACITY;

/// Result type alias for container operations using `fixbuf_error::Error`
pub type Result<T> = core::result::Result<T, Error>;
