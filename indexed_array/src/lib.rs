// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_indexed_array
//!
//! A resizable, bounds checked array whose first slot lives at a configurable logical
//! starting index. Think of Pascal style arrays such as `array[3..17] of T`: the storage
//! is an ordinary contiguous buffer, and the starting index is purely a view transform
//! applied when you index into it.
//!
//! ```
//! use r3bl_indexed_array::{ArrayError, IndexedArray};
//!
//! let mut array: IndexedArray<i32> = IndexedArray::with_length_and_start(15, 3);
//! assert_eq!(array.bounds().lower_bound(), 3);
//! assert_eq!(array.bounds().upper_bound(), Some(17));
//!
//! array[3] = 42;
//! assert_eq!(array.front().unwrap(), 42);
//!
//! assert!(matches!(array.get(2), Err(ArrayError::OutOfRange { .. })));
//! assert!(matches!(array.get(18), Err(ArrayError::OutOfRange { .. })));
//! assert!(matches!(array.set_size(-1), Err(ArrayError::InvalidArgument { .. })));
//! ```
//!
//! # Value semantics
//!
//! - [`Clone`] is a deep copy of the visible elements. Mutating the clone never affects
//!   the original.
//! - [`Clone::clone_from`] is copy assignment.
//! - A plain Rust move transfers the buffer. To move out of a `&mut` binding use
//!   [`IndexedArray::move_from`] or [`IndexedArray::take`], which leave the source empty.
//!
//! # Resizing
//!
//! [`IndexedArray::set_size`] grows by appending default values and shrinks by hiding
//! the tail. Values hidden by a shrink are never visible again: growing afterwards fills
//! the new slots with default values.
//!
//! # Logging
//!
//! The container emits [`tracing`] events. Use [`TracingConfig`] to install a
//! subscriber that writes them to the display and/or a log file.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod array;
pub mod decl_macros;
pub mod log;

// Re-export.
pub use array::*;
pub use log::*;
