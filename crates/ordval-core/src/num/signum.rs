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
use num_traits::{Signed, Zero};
use std::cmp::Ordering;

/// Interprets a signed comparison result as an `Ordering`.
///
/// Negative values map to `Ordering::Less`, zero to `Ordering::Equal`, and
/// positive values to `Ordering::Greater`. Only the sign matters.
///
/// Floats are accepted as well. Both `+0.0` and `-0.0` are zero and map to
/// `Ordering::Equal`. A NaN has no magnitude, so it is classified by its sign
/// bit: negative NaNs map to `Ordering::Less`, all others to
/// `Ordering::Greater`.
///
/// # Examples
///
/// ```rust
/// # use ordval_core::num::signum::ordering_from_signum;
/// use std::cmp::Ordering;
///
/// assert_eq!(ordering_from_signum(-42i32), Ordering::Less);
/// assert_eq!(ordering_from_signum(0i64), Ordering::Equal);
/// assert_eq!(ordering_from_signum(7i8), Ordering::Greater);
/// assert_eq!(ordering_from_signum(-0.0f64), Ordering::Equal);
/// ```
#[inline]
pub fn ordering_from_signum<S>(value: S) -> Ordering
where
    S: Signed,
{
    // num-traits classifies floats by sign bit, so zero must be checked first.
    if value.is_zero() {
        Ordering::Equal
    } else if value.is_negative() {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Encodes an `Ordering` as `-1`, `0` or `+1`.
///
/// # Examples
///
/// ```rust
/// # use ordval_core::num::signum::ordering_to_signum;
/// use std::cmp::Ordering;
///
/// assert_eq!(ordering_to_signum::<i32>(Ordering::Less), -1);
/// assert_eq!(ordering_to_signum::<i16>(Ordering::Greater), 1);
/// ```
#[inline]
pub fn ordering_to_signum<S>(ordering: Ordering) -> S
where
    S: Signed,
{
    match ordering {
        Ordering::Less => -S::one(),
        Ordering::Equal => S::zero(),
        Ordering::Greater => S::one(),
    }
}

/// Compares `a` with `b` and reports the result as `-1`, `0` or `+1`.
///
/// # Examples
///
/// ```rust
/// # use ordval_core::num::signum::compare_signum;
/// assert_eq!(compare_signum::<_, i32>("a", "b"), -1);
/// assert_eq!(compare_signum::<_, i32>(&3u8, &3u8), 0);
/// ```
#[inline]
pub fn compare_signum<T, S>(a: &T, b: &T) -> S
where
    T: OrderedValue + ?Sized,
    S: Signed,
{
    ordering_to_signum(a.compare_to(b))
}
