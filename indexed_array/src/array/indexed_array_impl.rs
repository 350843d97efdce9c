// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A resizable array with a configurable logical starting index. See [`IndexedArray`].

use std::{fmt::{Debug, Formatter},
          ops::{Index, IndexMut}};

use tracing::{debug, trace};

use super::{ArrayError, ArrayResult, BoundsViolation, IndexBounds};

/// Owns a contiguous block of `T` values that are addressed by logical index. The first
/// slot lives at [`Self::starting_index`], so an array with size `15` and starting index
/// `3` accepts indices `3..=17`. See [`IndexBounds`] for the exact rules, including the
/// single element case.
///
/// # Fields
///
/// * `internal_storage`: The backing buffer. Its length is always `>= size`; a shrink
///   leaves a hidden tail behind that is never visible through this API.
/// * `size`: The number of addressable slots.
/// * `starting_index`: The logical index of physical slot `0`.
///
/// # Examples
///
/// ```
/// use r3bl_indexed_array::IndexedArray;
///
/// let mut array: IndexedArray<i32> = IndexedArray::with_length(10);
/// for i in 0..10 {
///     array[i] = i as i32;
/// }
/// assert_eq!(array.front().unwrap(), 0);
/// assert_eq!(array.back().unwrap(), 9);
///
/// array.set_size(8).unwrap();
/// assert!(array.get(8).is_err());
/// assert_eq!(array[7], 7);
/// ```
pub struct IndexedArray<T> {
    internal_storage: Vec<T>,
    size: usize,
    starting_index: isize,
}

mod constructor {
    use super::{ArrayError, ArrayResult, IndexedArray, trace};

    impl<T> Default for IndexedArray<T> {
        fn default() -> Self { Self::new() }
    }

    impl<T> IndexedArray<T> {
        /// Empty array with starting index `0`. Does not allocate.
        #[must_use]
        pub fn new() -> Self {
            Self {
                internal_storage: Vec::new(),
                size: 0,
                starting_index: 0,
            }
        }

        /// Takes ownership of `values`, the first of which will live at logical index
        /// `starting_index`.
        #[must_use]
        pub fn from_vec(values: Vec<T>, starting_index: isize) -> Self {
            Self {
                size: values.len(),
                internal_storage: values,
                starting_index,
            }
        }
    }

    impl<T: Default> IndexedArray<T> {
        /// `length` default values, starting index `0`.
        #[must_use]
        pub fn with_length(length: usize) -> Self {
            Self::with_length_and_start(length, 0)
        }

        /// `length` default values, the first at logical index `starting_index`.
        #[must_use]
        pub fn with_length_and_start(length: usize, starting_index: isize) -> Self {
            let mut internal_storage = Vec::with_capacity(length);
            internal_storage.resize_with(length, T::default);
            trace!(length, starting_index, "IndexedArray::with_length_and_start");
            Self {
                internal_storage,
                size: length,
                starting_index,
            }
        }

        /// Same as [`Self::with_length_and_start`], but for callers that hold a signed
        /// length (eg: one computed from logical indices).
        ///
        /// # Errors
        ///
        /// Returns [`ArrayError::InvalidArgument`] if `length` is negative.
        pub fn try_new(length: isize, starting_index: isize) -> ArrayResult<Self> {
            let length = usize::try_from(length)
                .map_err(|_| ArrayError::InvalidArgument { length })?;
            Ok(Self::with_length_and_start(length, starting_index))
        }
    }
}

mod size {
    use super::{ArrayError, ArrayResult, IndexBounds, IndexedArray, debug};

    impl<T> IndexedArray<T> {
        #[must_use]
        pub fn size(&self) -> usize { self.size }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.size == 0 }

        #[must_use]
        pub fn starting_index(&self) -> isize { self.starting_index }

        /// Shifts the logical window without moving any data. There's no validation, any
        /// starting index is accepted.
        pub fn set_starting_index(&mut self, starting_index: isize) {
            self.starting_index = starting_index;
        }

        #[must_use]
        pub fn bounds(&self) -> IndexBounds {
            IndexBounds::new(self.starting_index, self.size)
        }

        /// The visible elements, in physical order.
        pub(crate) fn visible(&self) -> &[T] { &self.internal_storage[..self.size] }
    }

    impl<T: Default> IndexedArray<T> {
        /// Resizes the array to `length` slots.
        ///
        /// - Growing keeps every visible element at its logical position, and fills the
        ///   new slots with `T::default()`.
        /// - Shrinking only lowers the size. The backing buffer is retained as is, and
        ///   the elements past the new size become unreachable. They are dropped on the
        ///   next grow, so regrown slots always hold default values.
        ///
        /// # Errors
        ///
        /// Returns [`ArrayError::InvalidArgument`] if `length` is negative. The array is
        /// left untouched in that case.
        pub fn set_size(&mut self, length: isize) -> ArrayResult<()> {
            let new_size = usize::try_from(length)
                .map_err(|_| ArrayError::InvalidArgument { length })?;

            if new_size > self.size {
                // Drop the hidden tail first, so it's never resurrected by the grow.
                self.internal_storage.truncate(self.size);
                self.internal_storage.resize_with(new_size, T::default);
                debug!(
                    old_size = self.size,
                    new_size, "IndexedArray::set_size -> grow"
                );
            } else {
                debug!(
                    old_size = self.size,
                    new_size, "IndexedArray::set_size -> shrink"
                );
            }

            self.size = new_size;
            Ok(())
        }
    }
}

mod access {
    use super::{ArrayError, ArrayResult, BoundsViolation, Index, IndexMut,
                IndexedArray};

    impl<T> IndexedArray<T> {
        /// # Errors
        ///
        /// Returns [`ArrayError::OutOfRange`] if `index` is outside [`Self::bounds`].
        pub fn get(&self, index: isize) -> ArrayResult<&T> {
            let position = self.bounds().try_physical_position(index)?;
            Ok(&self.internal_storage[position])
        }

        /// The returned reference can be used to read and write the slot.
        ///
        /// # Errors
        ///
        /// Returns [`ArrayError::OutOfRange`] if `index` is outside [`Self::bounds`].
        pub fn get_mut(&mut self, index: isize) -> ArrayResult<&mut T> {
            let position = self.bounds().try_physical_position(index)?;
            Ok(&mut self.internal_storage[position])
        }

        /// # Errors
        ///
        /// Returns [`ArrayError::OutOfRange`] if `index` is outside [`Self::bounds`].
        /// `value` is dropped in that case.
        pub fn set(&mut self, index: isize, value: T) -> ArrayResult<()> {
            *self.get_mut(index)? = value;
            Ok(())
        }

        fn empty_access_error(&self) -> ArrayError {
            self.bounds()
                .out_of_range(self.starting_index, BoundsViolation::Overflowed)
        }
    }

    impl<T: Clone> IndexedArray<T> {
        /// Copy of the element at logical index [`Self::starting_index`], ie physical
        /// slot `0`.
        ///
        /// # Errors
        ///
        /// Returns [`ArrayError::OutOfRange`] if the array is empty.
        pub fn front(&self) -> ArrayResult<T> {
            self.visible()
                .first()
                .cloned()
                .ok_or_else(|| self.empty_access_error())
        }

        /// Copy of the physically last element (slot `size - 1`).
        ///
        /// # Errors
        ///
        /// Returns [`ArrayError::OutOfRange`] if the array is empty.
        pub fn back(&self) -> ArrayResult<T> {
            self.visible()
                .last()
                .cloned()
                .ok_or_else(|| self.empty_access_error())
        }
    }

    impl<T> Index<isize> for IndexedArray<T> {
        type Output = T;

        fn index(&self, index: isize) -> &Self::Output {
            match self.get(index) {
                Ok(it) => it,
                Err(error) => panic!("{error}"),
            }
        }
    }

    impl<T> IndexMut<isize> for IndexedArray<T> {
        fn index_mut(&mut self, index: isize) -> &mut Self::Output {
            match self.get_mut(index) {
                Ok(it) => it,
                Err(error) => panic!("{error}"),
            }
        }
    }
}

mod ownership {
    use super::{Debug, Formatter, IndexedArray, debug};

    impl<T> IndexedArray<T> {
        /// Move assignment. `other`'s buffer is transferred to `self` (no element is
        /// copied), and `other` is left empty with starting index `0`. The buffer that
        /// `self` owned before is dropped.
        pub fn move_from(&mut self, other: &mut Self) {
            debug!(
                size = other.size,
                starting_index = other.starting_index,
                "IndexedArray::move_from"
            );
            *self = std::mem::take(other);
        }

        /// Moves the contents out, leaving `self` empty with starting index `0`.
        #[must_use]
        pub fn take(&mut self) -> Self { std::mem::take(self) }
    }

    /// Deep copy of the visible elements. The hidden tail (if any) is not copied.
    impl<T: Clone> Clone for IndexedArray<T> {
        fn clone(&self) -> Self {
            Self {
                internal_storage: self.visible().to_vec(),
                size: self.size,
                starting_index: self.starting_index,
            }
        }

        /// Copy assignment. Reuses `self`'s allocation where possible.
        fn clone_from(&mut self, source: &Self) {
            self.internal_storage.clear();
            self.internal_storage.extend_from_slice(source.visible());
            self.starting_index = source.starting_index;
            self.size = source.size;
        }
    }

    /// Two arrays are equal if they have the same starting index and size, and their
    /// visible elements are equal.
    impl<T: PartialEq> PartialEq for IndexedArray<T> {
        fn eq(&self, other: &Self) -> bool {
            self.starting_index == other.starting_index
                && self.visible() == other.visible()
        }
    }

    impl<T: Eq> Eq for IndexedArray<T> {}

    impl<T: Debug> Debug for IndexedArray<T> {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("IndexedArray")
                .field("starting_index", &self.starting_index)
                .field("size", &self.size)
                .field("elements", &self.visible())
                .finish()
        }
    }
}
