// fixbuf - fixbuf-error
// Module: Error Handling
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! fixbuf error handling library
//!
//! Every container in `fixbuf-collections` reports failures through the
//! [`Error`] type defined here. Errors never allocate: each one is a category,
//! a numeric code and a `&'static str` message.
//!
//! # Error Categories
//!
//! ## Capacity Errors (1000-1999)
//! - Growth beyond the fixed capacity
//! - Bulk appends that do not fit
//! - Initial sequences longer than the capacity
//!
//! ## State Errors (2000-2999)
//! - Pop, dequeue or peek on an empty container
//!
//! ## Bounds Errors (3000-3999)
//! - Index outside the logical range
//! - Insertion position outside `[0, len]`
//!
//! ## Validation Errors (4000-4999)
//! - Capacity parameters a container cannot accept
//!
//! # Usage
//!
//! ```
//! use fixbuf_error::{kinds::ErrorKind, Error};
//!
//! let error = Error::capacity_exceeded("BoundedQueue full");
//! assert_eq!(error.kind(), ErrorKind::CapacityExceeded);
//! assert!(error.is_capacity_error());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(clippy::perf)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

#[cfg(feature = "std")]
extern crate std;

/// Error codes for fixbuf
pub mod codes;
/// Error and error handling types
pub mod errors;
/// Error kind definitions
pub mod kinds;

pub use errors::{Error, ErrorCategory, ErrorSource};
pub use kinds::ErrorKind;

/// A specialized `Result` type for container operations.
pub type Result<T> = core::result::Result<T, Error>;
