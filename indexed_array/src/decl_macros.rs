// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Creates an [`crate::IndexedArray`] from a list of values, like [`vec!`]. The starting
/// index is `0` unless it is given with `start: <expr>;`.
///
/// ```
/// use r3bl_indexed_array::{IndexedArray, indexed_array};
///
/// let empty: IndexedArray<i32> = indexed_array![];
/// assert!(empty.is_empty());
///
/// let array = indexed_array![10, 20, 30];
/// assert_eq!(array[0], 10);
///
/// let array = indexed_array![start: -1; "a", "b", "c"];
/// assert_eq!(array.starting_index(), -1);
/// assert_eq!(array[1], "c");
/// ```
#[macro_export]
macro_rules! indexed_array {
    () => {
        $crate::IndexedArray::new()
    };
    (start: $start:expr; $($item:expr),* $(,)?) => {
        $crate::IndexedArray::from_vec(vec![$($item),*], $start)
    };
    ($($item:expr),+ $(,)?) => {
        $crate::IndexedArray::from_vec(vec![$($item),+], 0)
    };
}

/// Wrapper for `pretty_assertions::assert_eq!` macro. The crate using this macro must
/// have `pretty_assertions` as a (dev) dependency.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}
