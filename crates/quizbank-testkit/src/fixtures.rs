//! Test fixtures and helpers.
//!
//! Common setup code for store tests.

use quizbank_core::{Category, Question, QuestionId};
use quizbank_store::{InsertResult, QuestionStore, RecordStore};

/// A store plus the ids inserted into it, in insertion order.
pub struct StoreFixture {
    pub store: RecordStore,
    pub inserted: Vec<QuestionId>,
}

impl StoreFixture {
    /// Create an empty fixture with the default ordering.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: RecordStore::with_capacity(capacity).expect("fixture capacity must be >= 1"),
            inserted: Vec::new(),
        }
    }

    /// Build a question in `category` with numbered text.
    pub fn make_question(&self, category: Category) -> Question {
        let n = self.inserted.len() + 1;
        Question::new(format!("question {n}"), format!("answer {n}"))
            .expect("fixture text is never blank")
            .with_category(category)
    }

    /// Insert a fresh question in `category`, recording its id on success.
    pub fn insert(&mut self, category: Category) -> InsertResult {
        let question = self.make_question(category);
        let id = question.id();
        let result = self.store.insert(question);
        if result.is_inserted() {
            self.inserted.push(id);
        }
        result
    }

    /// Insert one question per category, in order. Stops at the first refusal.
    pub fn fill(&mut self, categories: &[Category]) -> usize {
        categories
            .iter()
            .take_while(|&&category| self.insert(category).is_inserted())
            .count()
    }
}

impl Default for StoreFixture {
    fn default() -> Self {
        Self {
            store: RecordStore::default(),
            inserted: Vec::new(),
        }
    }
}
