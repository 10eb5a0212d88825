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

//! # Ordval Core
//!
//! Derived comparison operations over a single three-way ordering primitive.
//! A type implements `OrderedValue::compare_to` once and gains strict and
//! non-strict comparisons, ordering equality, a combined identity / structural /
//! ordering equality check, inclusive range membership, identity-preserving
//! clamping, and comparators generated on demand.
//!
//! ## Modules
//!
//! - `cmp`: The `OrderedValue` trait and its primitive implementations, the
//!   `Comparator` trait with `GeneratedComparator`, and `CountingComparator`
//!   for collecting `ComparisonStatistics`.
//! - `math`: `InclusiveBounds<T>`, a validated `[min, max]` range with
//!   `InvalidBoundsError`.
//! - `num`: Conversions between signed integers and `Ordering`.
//! - `algorithm`: Sortedness checks, lower/upper bound searches and
//!   identity-preserving minimum/maximum over `OrderedValue` slices.
//!
//! ## Example
//!
//! ```rust
//! use ordval_core::cmp::ordered_value::OrderedValue;
//! use std::cmp::Ordering;
//!
//! #[derive(Debug, PartialEq)]
//! struct Version(u32, u32);
//!
//! impl OrderedValue for Version {
//!     fn compare_to(&self, other: &Self) -> Ordering {
//!         (self.0, self.1).cmp(&(other.0, other.1))
//!     }
//! }
//!
//! let oldest = Version(1, 0);
//! let newest = Version(2, 4);
//! let candidate = Version(3, 1);
//!
//! assert!(candidate.is_not_between(&oldest, &newest));
//! assert!(std::ptr::eq(candidate.clamp_ref(&oldest, &newest), &newest));
//! ```
//!
//! Refer to each module for detailed APIs and examples.

pub mod algorithm;
pub mod cmp;
pub mod math;
pub mod num;
