//! Sort strategies: in-place, stable reordering of a slot array.
//!
//! Strategies work on the store's raw slots, so they must cope with empty
//! slots. Empty slots sink behind every occupied one and are never passed to
//! the ordering rule.

use std::cmp::Ordering;

use quizbank_core::{OrderingError, Question};

use crate::ordering::{ByCategory, OrderingRule};

/// A boxed strategy, chosen at runtime.
pub type DynSort = Box<dyn SortStrategy + Send>;

/// Reorders a slot array in place.
///
/// Implementations must be stable with respect to their rule, must be a
/// no-op on arrays of length 0 or 1, and must leave the slice a permutation
/// of its input even when the rule fails partway through.
pub trait SortStrategy {
    fn sort(&self, slots: &mut [Option<Question>]) -> Result<(), OrderingError>;
}

impl<S: SortStrategy + ?Sized> SortStrategy for Box<S> {
    fn sort(&self, slots: &mut [Option<Question>]) -> Result<(), OrderingError> {
        (**self).sort(slots)
    }
}

/// Insertion sort driven by an [`OrderingRule`].
///
/// O(n²) worst case, about n²/4 comparisons on average. Stores are small and
/// bounded, and the sort is adaptive: an already ordered array costs n - 1
/// comparisons.
#[derive(Debug, Clone, Default)]
pub struct InsertionSort<R = ByCategory> {
    rule: R,
}

impl<R: OrderingRule> InsertionSort<R> {
    pub fn new(rule: R) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// True when `left` must move behind `right`.
    ///
    /// Only a strictly greater left side moves, which keeps equal records in
    /// input order.
    fn comes_after(
        &self,
        left: &Option<Question>,
        right: &Option<Question>,
    ) -> Result<bool, OrderingError> {
        match (left, right) {
            (Some(a), Some(b)) => Ok(self.rule.compare(a, b)? == Ordering::Greater),
            (None, Some(_)) => Ok(true),
            (_, None) => Ok(false),
        }
    }
}

impl<R: OrderingRule> SortStrategy for InsertionSort<R> {
    fn sort(&self, slots: &mut [Option<Question>]) -> Result<(), OrderingError> {
        for i in 1..slots.len() {
            // Walk the held element left by adjacent swaps so it is never
            // outside the slice, even if the rule fails mid-shift.
            let mut j = i;
            while j > 0 && self.comes_after(&slots[j - 1], &slots[j])? {
                slots.swap(j - 1, j);
                j -= 1;
            }
        }
        Ok(())
    }
}
