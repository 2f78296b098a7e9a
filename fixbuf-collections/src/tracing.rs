//! Tracing support for the inline containers
//!
//! Wraps the `tracing` crate. Rejected throwing-tier operations emit a
//! `debug` event through [`trace_rejected!`](crate::trace_rejected), and bulk
//! operations open a `trace` span from [`CollectionTrace`]. Try-variants never
//! emit anything: hitting capacity there is the expected case.

#![cfg(feature = "tracing")]

pub use ::tracing::{debug, trace, warn};
pub use ::tracing::{debug_span, trace_span};
pub use ::tracing::{Level, Span};

/// Span constructors for bulk container operations
#[derive(Debug, Clone)]
pub struct CollectionTrace;

impl CollectionTrace {
    /// Span for building a container from an initial sequence
    #[inline]
    pub fn from_slice(container: &'static str, len: usize, capacity: usize) -> Span {
        trace_span!("from_slice", container = container, len = len, capacity = capacity)
    }

    /// Span for appending a range of elements
    #[inline]
    pub fn add_range(container: &'static str, len: usize, incoming: usize) -> Span {
        trace_span!("add_range", container = container, len = len, incoming = incoming)
    }

    /// Span for resetting a container
    #[inline]
    pub fn clear(container: &'static str, len: usize) -> Span {
        trace_span!("clear", container = container, len = len)
    }
}
