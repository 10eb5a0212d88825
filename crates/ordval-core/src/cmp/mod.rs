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

//! # Ordering Capability
//!
//! The ordering side of the crate: the `OrderedValue` trait with its derived
//! predicates, comparators that carry an ordering around as a value, and a
//! counting decorator for observing comparison activity.
//!
//! ## Submodules
//!
//! - `ordered_value`: The `OrderedValue` trait. One required method,
//!   `compare_to`, and derived `is_less_than`, `is_greater_than`,
//!   `is_less_than_or_equal_to`, `is_greater_than_or_equal_to`,
//!   `is_equal_to`, `is_not_equal_to`, `is`, `is_not`, `is_between`,
//!   `is_not_between`, `clamp_ref` and `generate_comparator`. Implemented for
//!   the integer primitives, `bool`, `char`, `()`, `str`, `String`, and the
//!   floats (via IEEE 754 totalOrder).
//! - `comparator`: The `Comparator` trait (also implemented for closures) and
//!   `GeneratedComparator`, whose instances are distinct per construction.
//! - `stats`: `CountingComparator` and `ComparisonStatistics`.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod comparator;
pub mod ordered_value;
pub mod stats;
