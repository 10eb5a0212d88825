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
use std::ops::{Bound, RangeBounds, RangeInclusive};

/// The error returned when a lower bound orders after its upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidBoundsError;

impl std::fmt::Display for InvalidBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid bounds: min must be less than or equal to max"
        )
    }
}

impl std::error::Error for InvalidBoundsError {}

/// A closed range `[min, max]` over an `OrderedValue` type.
///
/// # Invariants
///
/// `min.is_less_than_or_equal_to(&max)` always holds.
///
/// # Examples
///
/// ```rust
/// # use ordval_core::math::bounds::InclusiveBounds;
/// let percent = InclusiveBounds::new(0u8, 100);
/// assert!(percent.contains(&100));
/// assert_eq!(*percent.clamp(&150), 100);
/// assert!(InclusiveBounds::try_new(10u8, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct InclusiveBounds<T> {
    min: T,
    max: T,
}

impl<T> InclusiveBounds<T>
where
    T: OrderedValue,
{
    /// Creates new bounds.
    ///
    /// # Panics
    ///
    /// Panics if `min` orders after `max`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordval_core::math::bounds::InclusiveBounds;
    /// let b = InclusiveBounds::new('a', 'z');
    /// assert_eq!(*b.min(), 'a');
    /// ```
    #[inline]
    pub fn new(min: T, max: T) -> Self {
        assert!(
            min.is_less_than_or_equal_to(&max),
            "Invalid bounds: min must be less than or equal to max"
        );
        Self { min, max }
    }

    /// Creates new bounds, or returns `InvalidBoundsError` if `min` orders
    /// after `max`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordval_core::math::bounds::{InclusiveBounds, InvalidBoundsError};
    /// assert!(InclusiveBounds::try_new(1, 1).is_ok());
    /// assert_eq!(InclusiveBounds::try_new(2, 1), Err(InvalidBoundsError));
    /// ```
    #[inline]
    pub fn try_new(min: T, max: T) -> Result<Self, InvalidBoundsError> {
        if min.is_less_than_or_equal_to(&max) {
            Ok(Self { min, max })
        } else {
            Err(InvalidBoundsError)
        }
    }

    /// Creates new bounds without checking them in release builds.
    ///
    /// The caller must ensure `min <= max`. A `debug_assert!` catches
    /// violations during development.
    #[inline]
    pub fn new_unchecked(min: T, max: T) -> Self {
        debug_assert!(
            min.is_less_than_or_equal_to(&max),
            "Invalid bounds: min must be less than or equal to max"
        );
        Self { min, max }
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub const fn min(&self) -> &T {
        &self.min
    }

    /// Returns the inclusive upper bound.
    #[inline]
    pub const fn max(&self) -> &T {
        &self.max
    }

    /// Returns `true` if `value` lies within `[min, max]`.
    ///
    /// Ordering is decided by `OrderedValue`, not `PartialOrd`, which is what
    /// sets this apart from `RangeBounds::contains`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        value.is_between(&self.min, &self.max)
    }

    /// Restricts `value` to these bounds.
    ///
    /// Returns a reference to the stored lower or upper bound when `value`
    /// falls outside of them, and `value` itself otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordval_core::math::bounds::InclusiveBounds;
    /// let b = InclusiveBounds::new(5i64, 10);
    /// let inside = 7i64;
    /// assert!(std::ptr::eq(b.clamp(&1), b.min()));
    /// assert!(std::ptr::eq(b.clamp(&inside), &inside));
    /// ```
    #[inline]
    pub fn clamp<'a>(&'a self, value: &'a T) -> &'a T {
        value.clamp_ref(&self.min, &self.max)
    }

    /// Returns `true` if both bounds are equal under `compare_to`, so that
    /// exactly one ordering class is contained.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.min.is_equal_to(&self.max)
    }

    /// Consumes the bounds, returning `(min, max)`.
    #[inline]
    pub fn into_inner(self) -> (T, T) {
        (self.min, self.max)
    }
}

impl<T> TryFrom<RangeInclusive<T>> for InclusiveBounds<T>
where
    T: OrderedValue,
{
    type Error = InvalidBoundsError;

    #[inline]
    fn try_from(range: RangeInclusive<T>) -> Result<Self, Self::Error> {
        let (min, max) = range.into_inner();
        Self::try_new(min, max)
    }
}

impl<T> From<InclusiveBounds<T>> for RangeInclusive<T> {
    #[inline]
    fn from(bounds: InclusiveBounds<T>) -> Self {
        bounds.min..=bounds.max
    }
}

impl<T> RangeBounds<T> for InclusiveBounds<T> {
    #[inline]
    fn start_bound(&self) -> Bound<&T> {
        Bound::Included(&self.min)
    }

    #[inline]
    fn end_bound(&self) -> Bound<&T> {
        Bound::Included(&self.max)
    }
}

impl<T> std::fmt::Display for InclusiveBounds<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let b = InclusiveBounds::new(1, 10);
        assert_eq!(*b.min(), 1);
        assert_eq!(*b.max(), 10);
        assert!(!b.is_degenerate());
    }

    #[test]
    #[should_panic(expected = "Invalid bounds")]
    fn test_new_panic() {
        InclusiveBounds::new(10, 5);
    }

    #[test]
    fn test_try_new() {
        assert!(InclusiveBounds::try_new(0, 0).is_ok());
        assert!(InclusiveBounds::try_new(-3, 3).is_ok());
        assert_eq!(InclusiveBounds::try_new(3, -3), Err(InvalidBoundsError));
    }

    #[test]
    fn test_try_new_uses_total_order_for_floats() {
        // Positive NaN orders above every number under totalOrder.
        let nan = f64::from_bits(0x7ff8_0000_0000_0000);
        assert!(InclusiveBounds::try_new(0.0f64, nan).is_ok());
        assert!(InclusiveBounds::try_new(nan, 0.0f64).is_err());
        assert!(InclusiveBounds::try_new(0.0f64, -0.0f64).is_err());
    }

    #[test]
    fn test_default_is_degenerate() {
        let b: InclusiveBounds<i32> = Default::default();
        assert!(b.is_degenerate());
        assert!(b.contains(&0));
        assert!(!b.contains(&1));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let b = InclusiveBounds::new(5, 10);
        assert!(!b.contains(&4));
        assert!(b.contains(&5));
        assert!(b.contains(&7));
        assert!(b.contains(&10));
        assert!(!b.contains(&11));
    }

    #[test]
    fn test_clamp_returns_stored_bounds() {
        let b = InclusiveBounds::new(5, 10);
        let below = 1;
        let above = 15;
        let inside = 7;

        assert!(std::ptr::eq(b.clamp(&below), b.min()));
        assert!(std::ptr::eq(b.clamp(&above), b.max()));
        assert!(std::ptr::eq(b.clamp(&inside), &inside));
    }

    #[test]
    fn test_strings() {
        let b = InclusiveBounds::new(String::from("b"), String::from("d"));
        assert!(b.contains(&String::from("c")));
        assert_eq!(b.clamp(&String::from("z")), "d");
    }

    #[test]
    fn test_try_from_range() {
        let b = InclusiveBounds::try_from(2..=4).unwrap();
        assert_eq!(b.into_inner(), (2, 4));

        #[allow(clippy::reversed_empty_ranges)]
        let invalid = InclusiveBounds::try_from(4..=2);
        assert_eq!(invalid, Err(InvalidBoundsError));
    }

    #[test]
    fn test_into_range_inclusive() {
        let range: RangeInclusive<u32> = InclusiveBounds::new(1, 3).into();
        assert_eq!(range.collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_range_bounds() {
        let b = InclusiveBounds::new(5, 10);

        match b.start_bound() {
            Bound::Included(&x) => assert_eq!(x, 5),
            _ => panic!("Wrong start bound"),
        }

        match b.end_bound() {
            Bound::Included(&x) => assert_eq!(x, 10),
            _ => panic!("Wrong end bound"),
        }

        let mut values = vec![0, 1, 2, 3, 4];
        let drained: Vec<_> = values.drain(InclusiveBounds::new(1usize, 2)).collect();
        assert_eq!(drained, vec![1, 2]);
        assert_eq!(values, vec![0, 3, 4]);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", InclusiveBounds::new(1, 2)), "[1, 2]");
        assert_eq!(
            format!("{}", InvalidBoundsError),
            "Invalid bounds: min must be less than or equal to max"
        );
    }

    #[test]
    fn test_error_converts_into_boxed_error() {
        fn parse(min: i32, max: i32) -> Result<InclusiveBounds<i32>, Box<dyn std::error::Error>> {
            Ok(InclusiveBounds::try_new(min, max)?)
        }

        assert!(parse(1, 2).is_ok());
        let err = parse(2, 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid bounds: min must be less than or equal to max"
        );
    }
}
