// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Translation of logical indices into physical positions, see [`IndexBounds`].
//!
//! # Interval notation
//!
//! For an array with `size > 1` and starting index `s`, the valid logical indices form
//! the closed interval `[s, s + size - 1]`. The logical index `i` lives at physical
//! position `i - s` in the backing buffer.
//!
//! Two boundary cases don't follow that rule:
//! - `size == 0`: the interval is empty. Indices below `s` underflow, every other index
//!   overflows.
//! - `size == 1`: the only valid logical index is `0`, regardless of `s`. It maps to
//!   physical position `0`.

use std::cmp::Ordering;

use super::{ArrayError, ArrayResult, BoundsViolation};

/// Result of range bounds checking `[min, max]`.
///
/// Three states because an index can be below min (underflow), between min and max
/// (within), or above max (overflow).
///
/// ```
/// use r3bl_indexed_array::{IndexBounds, RangeBoundsResult};
///
/// let bounds = IndexBounds::new(3, 15);
/// assert_eq!(bounds.check_index_is_within(2), RangeBoundsResult::Underflowed);
/// assert_eq!(bounds.check_index_is_within(17), RangeBoundsResult::Within);
/// assert_eq!(bounds.check_index_is_within(18), RangeBoundsResult::Overflowed);
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RangeBoundsResult {
    /// Index has underflowed (below minimum bounds).
    Underflowed,

    /// Index is within valid range bounds.
    Within,

    /// Index has overflowed (exceeded maximum bounds).
    Overflowed,
}

/// The logical window of an [`crate::IndexedArray`]: its starting index and size.
///
/// This is a snapshot. It does not borrow the array, so it goes stale once the array is
/// resized or its starting index is changed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct IndexBounds {
    starting_index: isize,
    size: usize,
}

impl IndexBounds {
    #[must_use]
    pub fn new(starting_index: isize, size: usize) -> Self {
        Self {
            starting_index,
            size,
        }
    }

    /// Smallest valid logical index. For a single element array this is `0`. For an
    /// empty array this is the starting index, even though no index is valid.
    #[must_use]
    pub fn lower_bound(&self) -> isize {
        match self.size {
            1 => 0,
            _ => self.starting_index,
        }
    }

    /// Largest valid logical index, or [`None`] if the array is empty (or the bound
    /// doesn't fit in an [`isize`]).
    #[must_use]
    pub fn upper_bound(&self) -> Option<isize> {
        match self.size {
            0 => None,
            1 => Some(0),
            _ => self.starting_index.checked_add_unsigned(self.size - 1),
        }
    }

    #[must_use]
    pub fn check_index_is_within(&self, index: isize) -> RangeBoundsResult {
        match self.size {
            0 => {
                if index < self.starting_index {
                    RangeBoundsResult::Underflowed
                } else {
                    RangeBoundsResult::Overflowed
                }
            }
            1 => match index.cmp(&0) {
                Ordering::Less => RangeBoundsResult::Underflowed,
                Ordering::Equal => RangeBoundsResult::Within,
                Ordering::Greater => RangeBoundsResult::Overflowed,
            },
            _ => {
                if index < self.starting_index {
                    RangeBoundsResult::Underflowed
                } else if index.abs_diff(self.starting_index) >= self.size {
                    RangeBoundsResult::Overflowed
                } else {
                    RangeBoundsResult::Within
                }
            }
        }
    }

    /// Converts a logical index into a position in the backing buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfRange`] if `index` is outside the bounds.
    pub fn try_physical_position(&self, index: isize) -> ArrayResult<usize> {
        match self.check_index_is_within(index) {
            RangeBoundsResult::Within if self.size == 1 => Ok(0),
            RangeBoundsResult::Within => Ok(index.abs_diff(self.starting_index)),
            RangeBoundsResult::Underflowed => {
                Err(self.out_of_range(index, BoundsViolation::Underflowed))
            }
            RangeBoundsResult::Overflowed => {
                Err(self.out_of_range(index, BoundsViolation::Overflowed))
            }
        }
    }

    pub(crate) fn out_of_range(
        &self,
        index: isize,
        violation: BoundsViolation,
    ) -> ArrayError {
        ArrayError::OutOfRange {
            index,
            starting_index: self.starting_index,
            size: self.size,
            violation,
        }
    }
}
