// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::cmp::ordered_value::OrderedValue;

/// Checks whether `values` is sorted in non-decreasing order under
/// `OrderedValue::compare_to`.
///
/// Returns `true` for empty and single-element slices.
#[inline]
pub fn is_sorted<T>(values: &[T]) -> bool
where
    T: OrderedValue,
{
    values.windows(2).all(|w| w[0].is_less_than_or_equal_to(&w[1]))
}

/// Lower bound search for the first element that does not order before `key`.
///
/// Returns `values.len()` if every element orders before `key`.
///
/// # Panics
///
/// In debug builds, this function will panic if `values` is not sorted.
///
/// # Examples
///
/// ```rust
/// # use ordval_core::algorithm::lower_bound;
/// let values = [1, 3, 3, 5];
/// assert_eq!(lower_bound(&values, &3), 1);
/// assert_eq!(lower_bound(&values, &4), 3);
/// ```
#[inline]
pub fn lower_bound<T>(values: &[T], key: &T) -> usize
where
    T: OrderedValue,
{
    debug_assert!(
        is_sorted(values),
        "called `lower_bound` with values that are not sorted"
    );

    values.partition_point(|v| v.is_less_than(key))
}

/// Upper bound search for the first element that orders after `key`.
///
/// Returns `values.len()` if no element orders after `key`.
///
/// # Panics
///
/// In debug builds, this function will panic if `values` is not sorted.
///
/// # Examples
///
/// ```rust
/// # use ordval_core::algorithm::upper_bound;
/// let values = [1, 3, 3, 5];
/// assert_eq!(upper_bound(&values, &3), 3);
/// assert_eq!(upper_bound(&values, &5), 4);
/// ```
#[inline]
pub fn upper_bound<T>(values: &[T], key: &T) -> usize
where
    T: OrderedValue,
{
    debug_assert!(
        is_sorted(values),
        "called `upper_bound` with values that are not sorted"
    );

    values.partition_point(|v| v.is_less_than_or_equal_to(key))
}

/// Returns the first smallest element, or `None` if `values` is empty.
///
/// The result is one of the yielded references, never a copy.
#[inline]
pub fn min_ref<'a, T, I>(values: I) -> Option<&'a T>
where
    T: OrderedValue + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    values.into_iter().min_by(|a, b| a.compare_to(b))
}

/// Returns the last largest element, or `None` if `values` is empty.
///
/// The result is one of the yielded references, never a copy.
#[inline]
pub fn max_ref<'a, T, I>(values: I) -> Option<&'a T>
where
    T: OrderedValue + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    values.into_iter().max_by(|a, b| a.compare_to(b))
}
