// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors returned by [`crate::IndexedArray`]. Each failure mode is a distinct variant,
//! so callers can tell a bad size request apart from a bad index by matching on the
//! variant rather than parsing the message.

/// Which side of the valid logical range an index fell off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum BoundsViolation {
    /// Index is less than the array's lower bound.
    #[strum(to_string = "below the lower bound")]
    Underflowed,

    /// Index is greater than the array's upper bound.
    #[strum(to_string = "above the upper bound")]
    Overflowed,
}

/// Errors from [`crate::IndexedArray`] operations.
///
/// | Variant             | Raised by                                               |
/// | :------------------ | :------------------------------------------------------ |
/// | [`InvalidArgument`] | [`set_size()`], [`try_new()`] with a negative length    |
/// | [`OutOfRange`]      | [`get()`], [`get_mut()`], [`set()`], [`front()`], [`back()`] |
///
/// Both are recoverable, and neither mutates the array: the check always happens before
/// any storage is touched.
///
/// [`InvalidArgument`]: Self::InvalidArgument
/// [`OutOfRange`]: Self::OutOfRange
/// [`set_size()`]: crate::IndexedArray::set_size
/// [`try_new()`]: crate::IndexedArray::try_new
/// [`get()`]: crate::IndexedArray::get
/// [`get_mut()`]: crate::IndexedArray::get_mut
/// [`set()`]: crate::IndexedArray::set
/// [`front()`]: crate::IndexedArray::front
/// [`back()`]: crate::IndexedArray::back
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ArrayError {
    /// A length less than zero was requested.
    #[error("Array cannot have length less than zero, got {length}")]
    #[diagnostic(
        code(r3bl_indexed_array::invalid_argument),
        help("Pass a length of zero or more")
    )]
    InvalidArgument { length: isize },

    /// A logical index outside the array's bounds was accessed.
    #[error(
        "Index {index} is {violation} of array with size {size} and starting index \
         {starting_index}"
    )]
    #[diagnostic(
        code(r3bl_indexed_array::out_of_range),
        help("Use `IndexedArray::bounds()` to find the valid logical index range")
    )]
    OutOfRange {
        index: isize,
        starting_index: isize,
        size: usize,
        violation: BoundsViolation,
    },
}

pub type ArrayResult<T> = Result<T, ArrayError>;
