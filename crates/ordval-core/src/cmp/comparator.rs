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

//! # Comparators
//!
//! A comparator is an ordering that lives outside the values it orders. This
//! module defines the `Comparator` trait, implements it for plain closures,
//! and provides `GeneratedComparator`, the comparator handed out by
//! `OrderedValue::generate_comparator`.
//!
//! ## Identity of generated comparators
//!
//! Each `GeneratedComparator` carries an id drawn from a process-wide counter.
//! Equality and hashing use that id, so two comparators generated by separate
//! calls are never equal even though they order values identically. Cloning a
//! comparator keeps its id.

use crate::cmp::ordered_value::OrderedValue;
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
    marker::PhantomData,
    sync::atomic::{self, AtomicU64},
};

/// An ordering of values of type `T` that is defined outside of `T`.
///
/// Implementations must describe a total order, with the same laws as
/// `OrderedValue::compare_to`.
///
/// # Examples
///
/// ```rust
/// # use ordval_core::cmp::comparator::Comparator;
/// use std::cmp::Ordering;
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert_eq!(by_len.compare(&"ab", &"abc"), Ordering::Less);
///
/// let mut words = vec!["three", "one", "four"];
/// words.sort_by(by_len.as_fn());
/// assert_eq!(words, vec!["one", "four", "three"]);
/// ```
pub trait Comparator<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Borrows this comparator as a closure, e.g. for `slice::sort_by`.
    #[inline]
    fn as_fn(&self) -> impl Fn(&T, &T) -> Ordering + '_ {
        move |a: &T, b: &T| self.compare(a, b)
    }
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

static NEXT_COMPARATOR_ID: AtomicU64 = AtomicU64::new(0);

/// A comparator that orders values with `OrderedValue::compare_to`.
///
/// Returned by `OrderedValue::generate_comparator`. Holds no state besides its
/// id, and is `Send + Sync` whatever `T` is.
///
/// # Examples
///
/// ```rust
/// # use ordval_core::cmp::comparator::{Comparator, GeneratedComparator};
/// use std::cmp::Ordering;
///
/// let cmp = GeneratedComparator::<u32>::new();
/// assert_eq!(cmp.compare(&1, &2), Ordering::Less);
/// assert_ne!(cmp, GeneratedComparator::<u32>::new());
/// assert_eq!(cmp, cmp.clone());
/// ```
pub struct GeneratedComparator<T: ?Sized> {
    id: u64,
    _marker: PhantomData<fn(&T, &T) -> Ordering>,
}

impl<T: ?Sized> GeneratedComparator<T> {
    /// Creates a new comparator with a fresh id.
    #[inline]
    pub fn new() -> Self {
        Self {
            id: NEXT_COMPARATOR_ID.fetch_add(1, atomic::Ordering::Relaxed),
            _marker: PhantomData,
        }
    }

    /// Returns the id that distinguishes this comparator from every comparator
    /// created by another call.
    #[inline]
    pub const fn id(&self) -> u64 {
        self.id
    }
}

impl<T> Comparator<T> for GeneratedComparator<T>
where
    T: OrderedValue + ?Sized,
{
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.compare_to(b)
    }
}

impl<T: ?Sized> Default for GeneratedComparator<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for GeneratedComparator<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized> PartialEq for GeneratedComparator<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T: ?Sized> Eq for GeneratedComparator<T> {}

impl<T: ?Sized> Hash for GeneratedComparator<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T: ?Sized> std::fmt::Debug for GeneratedComparator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratedComparator")
            .field("id", &self.id)
            .finish()
    }
}

impl<T: ?Sized> std::fmt::Display for GeneratedComparator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GeneratedComparator#{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_comparator_orders_integers() {
        let cmp = i64::generate_comparator();
        let (a, b, c) = (1i64, 2i64, 2i64);

        assert_eq!(cmp.compare(&a, &b), Ordering::Less);
        assert_eq!(cmp.compare(&b, &c), Ordering::Equal);
        assert_eq!(cmp.compare(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_separately_generated_comparators_are_not_equal() {
        let first = i64::generate_comparator();
        let second = i64::generate_comparator();

        assert_ne!(first, second);
        assert_ne!(first.id(), second.id());
        assert!(!std::ptr::eq(&first, &second));

        for (a, b) in [(1i64, 2i64), (2, 2), (2, 1)] {
            assert_eq!(first.compare(&a, &b), second.compare(&a, &b));
        }
    }

    #[test]
    fn test_clone_keeps_id() {
        let cmp = GeneratedComparator::<u8>::new();
        let copy = cmp.clone();

        assert_eq!(cmp, copy);
        assert_eq!(cmp.id(), copy.id());
    }

    #[test]
    fn test_default_is_fresh() {
        let a = GeneratedComparator::<u8>::default();
        let b = GeneratedComparator::<u8>::default();
        assert_ne!(a, b);
    }

    #[test]
    fn test_hash_follows_id() {
        let a = GeneratedComparator::<u8>::new();
        let b = GeneratedComparator::<u8>::new();

        let mut set = HashSet::new();
        set.insert(a.clone());
        set.insert(a.clone());
        set.insert(b);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_unsized_generated_comparator() {
        let cmp = str::generate_comparator();
        assert_eq!(cmp.compare("a", "b"), Ordering::Less);

        let mut words = vec!["pear", "apple", "fig"];
        words.sort_by(|a, b| cmp.compare(a, b));
        assert_eq!(words, vec!["apple", "fig", "pear"]);
    }

    #[test]
    fn test_as_fn_sorts() {
        let cmp = i32::generate_comparator();
        let mut values = vec![5, -1, 3, 3, 0];
        values.sort_by(cmp.as_fn());
        assert_eq!(values, vec![-1, 0, 3, 3, 5]);
    }

    #[test]
    fn test_closure_comparator() {
        let reverse = |a: &i32, b: &i32| b.cmp(a);
        assert_eq!(reverse.compare(&1, &2), Ordering::Greater);

        let mut values = vec![1, 3, 2];
        values.sort_by(reverse.as_fn());
        assert_eq!(values, vec![3, 2, 1]);
    }

    #[test]
    fn test_ids_unique_across_threads() {
        let ids: Vec<u64> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    s.spawn(|| {
                        (0..100)
                            .map(|_| GeneratedComparator::<i32>::new().id())
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        let unique: HashSet<u64> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_display_and_debug() {
        let cmp = GeneratedComparator::<i32>::new();
        assert_eq!(format!("{}", cmp), format!("GeneratedComparator#{}", cmp.id()));
        assert_eq!(
            format!("{:?}", cmp),
            format!("GeneratedComparator {{ id: {} }}", cmp.id())
        );
    }
}
