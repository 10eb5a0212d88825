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

//! # Ordered Values
//!
//! `OrderedValue` is the ordering capability at the heart of this crate. A type
//! implements a single three-way comparison, `compare_to`, and receives a family
//! of derived predicates for free: strict and non-strict comparisons, ordering
//! equality, inclusive range membership, identity-preserving clamping, and a
//! combined identity/structural/ordering equality check.
//!
//! ## Three kinds of equality
//!
//! Rust distinguishes several notions of "sameness" and this module keeps them
//! apart on purpose:
//!
//! - identity: both references point at the same value (`std::ptr::eq`),
//! - structural equality: `PartialEq`,
//! - ordering equality: `compare_to` returns `Ordering::Equal`.
//!
//! `is_equal_to` only ever looks at the last one. `is` and `is_not` consult
//! all three, in the order listed above.
//!
//! ## Bounds
//!
//! `is_between`, `is_not_between` and `clamp_ref` trust their bounds. Passing
//! `min > max` is not an error; the result is whatever the individual
//! comparisons yield (for example `is_between` is then always `false`). Use
//! `crate::math::bounds::InclusiveBounds` when the bounds should be validated.

use crate::cmp::comparator::GeneratedComparator;
use std::cmp::Ordering;

/// A type whose values can be ordered against other values of the same type.
///
/// Only [`compare_to`](OrderedValue::compare_to) has to be provided. It must
/// describe a total order: it is transitive, antisymmetric up to
/// `Ordering::Equal`, and `a.compare_to(a)` is always `Ordering::Equal`.
/// Every other method is derived from the sign of `compare_to` and never
/// introduces an ordering of its own.
///
/// Panics raised by `compare_to` propagate through every derived method
/// unchanged.
///
/// # Examples
///
/// ```rust
/// # use ordval_core::cmp::ordered_value::OrderedValue;
/// use std::cmp::Ordering;
///
/// #[derive(Debug, PartialEq)]
/// struct Priority(u8);
///
/// impl OrderedValue for Priority {
///     fn compare_to(&self, other: &Self) -> Ordering {
///         self.0.cmp(&other.0)
///     }
/// }
///
/// let low = Priority(1);
/// let high = Priority(9);
/// assert!(low.is_less_than(&high));
/// assert!(Priority(5).is_between(&low, &high));
/// assert!(std::ptr::eq(Priority(0).clamp_ref(&low, &high), &low));
/// ```
pub trait OrderedValue {
    /// Compares `self` with `other`.
    ///
    /// `Ordering::Less`, `Ordering::Equal` and `Ordering::Greater` stand for a
    /// negative, zero and positive comparison result respectively.
    fn compare_to(&self, other: &Self) -> Ordering;

    /// Returns `true` if `self` orders strictly before `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordval_core::cmp::ordered_value::OrderedValue;
    /// assert!(1i32.is_less_than(&2));
    /// assert!(!2i32.is_less_than(&2));
    /// ```
    #[inline]
    fn is_less_than(&self, other: &Self) -> bool {
        self.compare_to(other) == Ordering::Less
    }

    /// Returns `true` if `self` orders strictly after `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordval_core::cmp::ordered_value::OrderedValue;
    /// assert!(3i32.is_greater_than(&2));
    /// assert!(!2i32.is_greater_than(&2));
    /// ```
    #[inline]
    fn is_greater_than(&self, other: &Self) -> bool {
        self.compare_to(other) == Ordering::Greater
    }

    /// Returns `true` unless `self` orders strictly after `other`.
    #[inline]
    fn is_less_than_or_equal_to(&self, other: &Self) -> bool {
        self.compare_to(other) != Ordering::Greater
    }

    /// Returns `true` unless `self` orders strictly before `other`.
    #[inline]
    fn is_greater_than_or_equal_to(&self, other: &Self) -> bool {
        self.compare_to(other) != Ordering::Less
    }

    /// Returns `true` if `compare_to` reports `Ordering::Equal`.
    ///
    /// This is ordering equality only. It does not look at identity nor at
    /// `PartialEq`, and it is not required to agree with either of them.
    /// See [`is`](OrderedValue::is) for a check that considers all three.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordval_core::cmp::ordered_value::OrderedValue;
    /// // IEEE 754 totalOrder tells the two zeros apart, `==` does not.
    /// assert!(!(-0.0f64).is_equal_to(&0.0));
    /// assert!(-0.0f64 == 0.0);
    /// ```
    #[inline]
    fn is_equal_to(&self, other: &Self) -> bool {
        self.compare_to(other) == Ordering::Equal
    }

    /// Returns `true` if `compare_to` reports anything but `Ordering::Equal`.
    ///
    /// Like [`is_equal_to`](OrderedValue::is_equal_to), this ignores identity
    /// and `PartialEq`. See [`is_not`](OrderedValue::is_not).
    #[inline]
    fn is_not_equal_to(&self, other: &Self) -> bool {
        self.compare_to(other) != Ordering::Equal
    }

    /// Returns `true` if `self` and `other` are the same value, are equal
    /// under `PartialEq`, or are equal under `compare_to`.
    ///
    /// The checks run in exactly that order and stop at the first `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordval_core::cmp::ordered_value::OrderedValue;
    /// let a = 0.0f64;
    /// assert!(a.is(&a));        // identity
    /// assert!(a.is(&-0.0));     // structural equality
    /// assert!(!a.is(&1.0));
    /// ```
    #[inline]
    fn is(&self, other: &Self) -> bool
    where
        Self: PartialEq,
    {
        std::ptr::eq(self, other) || self == other || self.is_equal_to(other)
    }

    /// Returns `true` if `self` and `other` are distinct values that are
    /// unequal under `PartialEq` and unequal under `compare_to`.
    ///
    /// The checks run in exactly that order and stop at the first `false`.
    /// For any type whose three equalities agree, this is the complement of
    /// [`is`](OrderedValue::is).
    #[inline]
    fn is_not(&self, other: &Self) -> bool
    where
        Self: PartialEq,
    {
        !std::ptr::eq(self, other) && self != other && self.is_not_equal_to(other)
    }

    /// Returns `true` if `min <= self <= max`.
    ///
    /// Both bounds are inclusive. The bounds are not validated: with
    /// `min > max` no value is between them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordval_core::cmp::ordered_value::OrderedValue;
    /// assert!(5i32.is_between(&1, &10));
    /// assert!(10i32.is_between(&1, &10));
    /// assert!(!1i32.is_between(&5, &10));
    /// assert!(!5i32.is_between(&10, &1));
    /// ```
    #[inline]
    fn is_between(&self, min: &Self, max: &Self) -> bool {
        self.is_greater_than_or_equal_to(min) && self.is_less_than_or_equal_to(max)
    }

    /// Returns `true` if `self < min` or `self > max`.
    #[inline]
    fn is_not_between(&self, min: &Self, max: &Self) -> bool {
        self.is_less_than(min) || self.is_greater_than(max)
    }

    /// Restricts `self` to the inclusive range `[min, max]`.
    ///
    /// Returns `min` if `self < min`, `max` if `self > max`, and `self`
    /// otherwise. The returned reference is always one of the three inputs;
    /// nothing is copied.
    ///
    /// Named `clamp_ref` so that it does not collide with `Ord::clamp`, which
    /// takes and returns values and panics on `min > max`. This method does
    /// not check its bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordval_core::cmp::ordered_value::OrderedValue;
    /// let (min, max): (i32, i32) = (5, 10);
    /// let below: i32 = 1;
    /// let inside: i32 = 7;
    ///
    /// assert!(std::ptr::eq(below.clamp_ref(&min, &max), &min));
    /// assert!(std::ptr::eq(inside.clamp_ref(&min, &max), &inside));
    /// assert_eq!(*15i32.clamp_ref(&min, &max), 10);
    /// ```
    #[inline]
    fn clamp_ref<'a>(&'a self, min: &'a Self, max: &'a Self) -> &'a Self {
        if self.is_less_than(min) {
            return min;
        }
        if self.is_greater_than(max) {
            return max;
        }
        self
    }

    /// Creates a new comparator that orders values of this type with
    /// [`compare_to`](OrderedValue::compare_to).
    ///
    /// Every call constructs a fresh comparator. Comparators from separate
    /// calls behave identically but are never equal to one another, neither
    /// by address nor under `PartialEq`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordval_core::cmp::ordered_value::OrderedValue;
    /// # use ordval_core::cmp::comparator::Comparator;
    /// let first = i32::generate_comparator();
    /// let second = i32::generate_comparator();
    /// assert_ne!(first, second);
    ///
    /// let mut values = vec![3, 1, 2];
    /// values.sort_by(first.as_fn());
    /// assert_eq!(values, vec![1, 2, 3]);
    /// ```
    #[inline]
    fn generate_comparator() -> GeneratedComparator<Self> {
        GeneratedComparator::new()
    }
}

macro_rules! ordered_value_impl_ord {
    ($t:ty) => {
        impl OrderedValue for $t {
            #[inline(always)]
            fn compare_to(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }
        }
    };
}

macro_rules! ordered_value_impl_float {
    ($t:ty) => {
        impl OrderedValue for $t {
            #[inline(always)]
            fn compare_to(&self, other: &Self) -> Ordering {
                <$t>::total_cmp(self, other)
            }
        }
    };
}

ordered_value_impl_ord!(u8);
ordered_value_impl_ord!(u16);
ordered_value_impl_ord!(u32);
ordered_value_impl_ord!(u64);
ordered_value_impl_ord!(usize);
ordered_value_impl_ord!(u128);

ordered_value_impl_ord!(i8);
ordered_value_impl_ord!(i16);
ordered_value_impl_ord!(i32);
ordered_value_impl_ord!(i64);
ordered_value_impl_ord!(isize);
ordered_value_impl_ord!(i128);

ordered_value_impl_ord!(bool);
ordered_value_impl_ord!(char);
ordered_value_impl_ord!(());
ordered_value_impl_ord!(str);
ordered_value_impl_ord!(String);

// IEEE 754 totalOrder keeps the total-order contract: NaN is ordered and -0.0 < +0.0.
ordered_value_impl_float!(f32);
ordered_value_impl_float!(f64);
