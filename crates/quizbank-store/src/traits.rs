//! QuestionStore trait: the abstract interface the facade talks to.
//!
//! Reads take `&mut self` because a store is allowed to reorder its storage
//! before answering. Callers that share a store across threads must put the
//! whole call behind one lock.

use quizbank_core::{Category, Question, QuestionId};

use crate::error::Result;

/// Result of inserting a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertResult {
    /// Question was placed in a free slot.
    Inserted,
    /// Every slot is occupied; the question is handed back untouched.
    Full(Question),
}

impl InsertResult {
    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertResult::Inserted)
    }
}

/// The store trait: five record operations plus size queries.
///
/// # Design Notes
///
/// - **Expected misses are values**: a full store, an unknown id or an empty
///   category come back as `Full`, `None` or `false`.
/// - **Errors are contract violations**: `Err` only appears when the ordering
///   rule cannot order what is stored.
pub trait QuestionStore: Send {
    /// Place a question in the first free slot. Does not reorder.
    fn insert(&mut self, question: Question) -> InsertResult;

    /// Reorder, then find the question with the given id.
    fn find_by_id(&mut self, id: &QuestionId) -> Result<Option<Question>>;

    /// Reorder, then collect every question in `category` in slot order.
    ///
    /// Returns `None` when nothing matches.
    fn find_by_category(&mut self, category: Category) -> Result<Option<Vec<Question>>>;

    /// All stored questions in current slot order, or `None` if the store is
    /// empty. Does not reorder.
    fn export_all(&self) -> Option<Vec<Question>>;

    /// Free the slot holding `id`, then reorder.
    ///
    /// Returns `false` and changes nothing when the id is absent. If the
    /// reorder fails the slot stays freed and the error is returned.
    fn delete(&mut self, id: &QuestionId) -> Result<bool>;

    /// Total number of slots.
    fn capacity(&self) -> usize;

    /// Number of occupied slots.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
