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

//! # Numeric Helpers
//!
//! Bridges between signed numbers (integers and floats) and
//! `std::cmp::Ordering`.
//!
//! ## Submodules
//!
//! - `signum`: Generic conversions from a signed comparison result (negative,
//!   zero, positive) to `Ordering` and back, plus `compare_signum`, which
//!   reports an `OrderedValue` comparison as a signed number. Anything
//!   implementing `num_traits::Signed` is accepted; for floats both signed
//!   zeros count as zero and NaN is classified by its sign bit.
//!
//! ## Motivation
//!
//! Many foreign ordering functions, file formats and FFI boundaries encode a
//! three-way comparison as an integer. These helpers convert at the edge so
//! that everything inside stays in terms of `Ordering`.

pub mod signum;
