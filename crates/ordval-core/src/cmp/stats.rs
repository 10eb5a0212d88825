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

//! Comparison statistics
//!
//! `CountingComparator` decorates any `Comparator` and tallies the outcomes
//! it forwards. The tallies are exposed as `ComparisonStatistics`, which
//! renders a small report through `Display`.
//!
//! Counters saturate at `u64::MAX`. They live in `Cell`s so that counting
//! works through `&self`, which also makes the wrapper `!Sync`.

use crate::cmp::comparator::Comparator;
use std::{cell::Cell, cmp::Ordering};

/// Outcome counts recorded by a `CountingComparator`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ComparisonStatistics {
    /// Total comparisons performed.
    pub comparisons: u64,
    /// Comparisons that returned `Ordering::Less`.
    pub less: u64,
    /// Comparisons that returned `Ordering::Equal`.
    pub equal: u64,
    /// Comparisons that returned `Ordering::Greater`.
    pub greater: u64,
}

impl ComparisonStatistics {
    /// Records one comparison with the given outcome.
    #[inline]
    pub fn on_comparison(&mut self, outcome: Ordering) {
        self.comparisons = self.comparisons.saturating_add(1);
        match outcome {
            Ordering::Less => self.less = self.less.saturating_add(1),
            Ordering::Equal => self.equal = self.equal.saturating_add(1),
            Ordering::Greater => self.greater = self.greater.saturating_add(1),
        }
    }
}

impl std::fmt::Display for ComparisonStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Comparison Statistics:")?;
        writeln!(f, "  Comparisons: {}", self.comparisons)?;
        writeln!(f, "  Less:        {}", self.less)?;
        writeln!(f, "  Equal:       {}", self.equal)?;
        writeln!(f, "  Greater:     {}", self.greater)?;
        Ok(())
    }
}

/// A comparator that forwards to an inner comparator and counts the results.
///
/// # Examples
///
/// ```rust
/// # use ordval_core::cmp::ordered_value::OrderedValue;
/// # use ordval_core::cmp::stats::CountingComparator;
/// let counting = CountingComparator::new(u32::generate_comparator());
///
/// let mut values = vec![3u32, 1, 2];
/// values.sort_by(|a, b| counting.compare(a, b));
///
/// let stats = counting.statistics();
/// assert!(stats.comparisons > 0);
/// assert_eq!(stats.comparisons, stats.less + stats.equal + stats.greater);
/// ```
#[derive(Debug, Default)]
pub struct CountingComparator<C> {
    inner: C,
    statistics: Cell<ComparisonStatistics>,
}

impl<C> CountingComparator<C> {
    /// Wraps `inner` with all counters at zero.
    #[inline]
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            statistics: Cell::new(ComparisonStatistics::default()),
        }
    }

    /// Compares `a` with `b` through the inner comparator and records the outcome.
    #[inline]
    pub fn compare<T>(&self, a: &T, b: &T) -> Ordering
    where
        T: ?Sized,
        C: Comparator<T>,
    {
        let outcome = self.inner.compare(a, b);
        let mut statistics = self.statistics.get();
        statistics.on_comparison(outcome);
        self.statistics.set(statistics);
        outcome
    }

    /// Returns a snapshot of the counters.
    #[inline]
    pub fn statistics(&self) -> ComparisonStatistics {
        self.statistics.get()
    }

    /// Sets all counters back to zero.
    #[inline]
    pub fn reset(&self) {
        self.statistics.set(ComparisonStatistics::default());
    }

    /// Returns the wrapped comparator.
    #[inline]
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Consumes the wrapper, returning the wrapped comparator.
    #[inline]
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<T, C> Comparator<T> for CountingComparator<C>
where
    T: ?Sized,
    C: Comparator<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        CountingComparator::compare(self, a, b)
    }
}

impl<C> std::fmt::Display for CountingComparator<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CountingComparator(comparisons: {})",
            self.statistics.get().comparisons
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmp::ordered_value::OrderedValue;

    #[test]
    fn test_counts_each_outcome() {
        let counting = CountingComparator::new(i32::generate_comparator());

        assert_eq!(counting.compare(&1, &2), Ordering::Less);
        assert_eq!(counting.compare(&2, &2), Ordering::Equal);
        assert_eq!(counting.compare(&3, &2), Ordering::Greater);
        assert_eq!(counting.compare(&4, &2), Ordering::Greater);

        assert_eq!(
            counting.statistics(),
            ComparisonStatistics {
                comparisons: 4,
                less: 1,
                equal: 1,
                greater: 2,
            }
        );
    }

    #[test]
    fn test_reset_clears_counters() {
        let counting = CountingComparator::new(|a: &u8, b: &u8| a.cmp(b));
        counting.compare(&1u8, &2u8);
        counting.reset();
        assert_eq!(counting.statistics(), ComparisonStatistics::default());
    }

    #[test]
    fn test_counts_through_comparator_bound() {
        fn sort_with<C: Comparator<i32>>(values: &mut [i32], cmp: &C) {
            values.sort_by(|a, b| cmp.compare(a, b));
        }

        let counting = CountingComparator::new(i32::generate_comparator());
        let mut values = vec![4, 2, 9, 1];
        sort_with(&mut values, &counting);

        assert_eq!(values, vec![1, 2, 4, 9]);
        assert!(counting.statistics().comparisons >= 3);
    }

    #[test]
    fn test_counters_saturate() {
        let mut stats = ComparisonStatistics {
            comparisons: u64::MAX,
            less: u64::MAX,
            equal: 0,
            greater: 0,
        };
        stats.on_comparison(Ordering::Less);
        assert_eq!(stats.comparisons, u64::MAX);
        assert_eq!(stats.less, u64::MAX);
    }

    #[test]
    fn test_into_inner_returns_wrapped_comparator() {
        let cmp = i32::generate_comparator();
        let id = cmp.id();
        let counting = CountingComparator::new(cmp);
        assert_eq!(counting.inner().id(), id);
        assert_eq!(counting.into_inner().id(), id);
    }

    #[test]
    fn test_display() {
        let counting = CountingComparator::new(i32::generate_comparator());
        counting.compare(&1, &1);
        assert_eq!(format!("{}", counting), "CountingComparator(comparisons: 1)");

        let report = format!("{}", counting.statistics());
        assert!(report.starts_with("Comparison Statistics:"));
        assert!(report.contains("Equal:       1"));
    }
}
