//! Ordering rules: how two stored questions compare.
//!
//! A rule only ever sees occupied slots. Empty slots are handled by the
//! sort strategy and never reach [`OrderingRule::compare`].

use std::cmp::Ordering;

use quizbank_core::{OrderingError, Question};

/// A comparison between two questions.
///
/// Returning an error means the rule cannot place one of the records. The
/// sort stops and reports it instead of guessing.
pub trait OrderingRule {
    fn compare(&self, a: &Question, b: &Question) -> Result<Ordering, OrderingError>;
}

impl<F> OrderingRule for F
where
    F: Fn(&Question, &Question) -> Result<Ordering, OrderingError>,
{
    fn compare(&self, a: &Question, b: &Question) -> Result<Ordering, OrderingError> {
        self(a, b)
    }
}

/// Orders questions by category declaration order.
///
/// This is the store's canonical rule. Both records must have a category.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByCategory;

impl OrderingRule for ByCategory {
    fn compare(&self, a: &Question, b: &Question) -> Result<Ordering, OrderingError> {
        let lhs = a
            .category()
            .ok_or(OrderingError::UnsetCategory { id: a.id() })?;
        let rhs = b
            .category()
            .ok_or(OrderingError::UnsetCategory { id: b.id() })?;
        Ok(lhs.cmp(&rhs))
    }
}

/// Orders questions from easiest to hardest. Both records must have a difficulty.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByDifficulty;

impl OrderingRule for ByDifficulty {
    fn compare(&self, a: &Question, b: &Question) -> Result<Ordering, OrderingError> {
        let lhs = a
            .difficulty()
            .ok_or(OrderingError::UnsetDifficulty { id: a.id() })?;
        let rhs = b
            .difficulty()
            .ok_or(OrderingError::UnsetDifficulty { id: b.id() })?;
        Ok(lhs.cmp(&rhs))
    }
}
