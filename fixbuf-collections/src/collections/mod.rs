// fixbuf - fixbuf-collections
// Module: Inline collections
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity collections with inline storage.
//!
//! - [`FixedBuffer`]: raw slots, no bookkeeping; embedded by the others
//! - [`BoundedList`]: ordered, indexable, insert/remove with shifting
//! - [`BoundedStack`]: LIFO, O(1) push/pop at the top
//! - [`BoundedQueue`]: FIFO circular buffer, O(1) enqueue/dequeue
//!
//! The containers are independent of each other; each one owns its own
//! `FixedBuffer`. All of them are plain `Copy` aggregates, and none is
//! synchronized: share one across threads only behind an external lock.

pub mod bounded_list;
pub mod bounded_queue;
pub mod bounded_stack;
pub mod fixed_buffer;

pub use bounded_list::BoundedList;
pub use bounded_queue::BoundedQueue;
pub use bounded_stack::BoundedStack;
pub use fixed_buffer::FixedBuffer;
