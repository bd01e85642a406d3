//! The question bank: a store behind a lock, plus request handling.
//!
//! The bank is the only place where a store is shared. Every public method
//! holds the lock for the whole store call, so a sort and the scan that
//! follows it are never interleaved with another caller's mutation.

use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use quizbank_core::{Category, Question, QuestionId};
use quizbank_store::{
    ByCategory, ByDifficulty, DynSort, InsertResult, InsertionSort, QuestionStore, RecordStore,
    DEFAULT_CAPACITY,
};

use crate::body::QuestionBody;
use crate::error::{BankError, Result};

/// Which ordering rule the bank's store sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingKind {
    /// Category declaration order.
    #[default]
    Category,
    /// Easiest first.
    Difficulty,
}

impl OrderingKind {
    /// Build the insertion-sort strategy for this rule.
    pub fn strategy(self) -> DynSort {
        match self {
            OrderingKind::Category => Box::new(InsertionSort::new(ByCategory)),
            OrderingKind::Difficulty => Box::new(InsertionSort::new(ByDifficulty)),
        }
    }
}

/// Configuration for the bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankConfig {
    /// Number of slots in the store. Must be at least 1.
    pub capacity: usize,
    /// Ordering used before reads.
    pub ordering: OrderingKind,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            ordering: OrderingKind::default(),
        }
    }
}

impl BankConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| BankError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(BankError::Config("capacity must be at least 1".into()));
        }
        Ok(())
    }
}

/// A thread-safe question bank.
///
/// Provides:
/// - Adding validated questions or raw request bodies
/// - Lookup by id (typed or hex text)
/// - Listing by category and in full
/// - Removal by id
pub struct QuestionBank<S: QuestionStore = RecordStore<DynSort>> {
    store: Mutex<S>,
}

impl QuestionBank {
    /// Build a bank with a fresh store from `config`.
    pub fn open(config: BankConfig) -> Result<Self> {
        config.validate()?;
        let store = RecordStore::new(config.capacity, config.ordering.strategy())?;
        tracing::info!(
            "Opened question bank with {} slots ordered by {:?}",
            config.capacity,
            config.ordering
        );
        Ok(Self::new(store))
    }
}

impl<S: QuestionStore> QuestionBank<S> {
    /// Wrap an existing store.
    pub fn new(store: S) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, S>> {
        self.store
            .lock()
            .map_err(|e| BankError::LockPoisoned(e.to_string()))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Writes
    // ─────────────────────────────────────────────────────────────────────────

    /// Store an already validated question.
    pub fn add(&self, question: Question) -> Result<InsertResult> {
        Ok(self.lock()?.insert(question))
    }

    /// Validate a request body and store the resulting question.
    ///
    /// Returns the new id, or `None` when the bank is full.
    pub fn submit(&self, body: QuestionBody) -> Result<Option<QuestionId>> {
        let question = body.into_question()?;
        let id = question.id();
        match self.add(question)? {
            InsertResult::Inserted => Ok(Some(id)),
            InsertResult::Full(_) => Ok(None),
        }
    }

    /// Remove a question. Returns `false` if no question has this id.
    pub fn remove(&self, id: &QuestionId) -> Result<bool> {
        Ok(self.lock()?.delete(id)?)
    }

    /// Remove a question by its hex id.
    pub fn remove_by_hex(&self, id: &str) -> Result<bool> {
        let id = QuestionId::from_hex(id)?;
        self.remove(&id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────────────────────

    pub fn get(&self, id: &QuestionId) -> Result<Option<Question>> {
        Ok(self.lock()?.find_by_id(id)?)
    }

    /// Look up a question by its hex id.
    pub fn get_by_hex(&self, id: &str) -> Result<Option<Question>> {
        let id = QuestionId::from_hex(id)?;
        self.get(&id)
    }

    /// All questions in `category`, or `None` if there are none.
    pub fn by_category(&self, category: Category) -> Result<Option<Vec<Question>>> {
        Ok(self.lock()?.find_by_category(category)?)
    }

    /// Every stored question, or `None` if the bank is empty.
    pub fn all(&self) -> Result<Option<Vec<Question>>> {
        Ok(self.lock()?.export_all())
    }

    pub fn capacity(&self) -> Result<usize> {
        Ok(self.lock()?.capacity())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }

    /// Take the store back out of the bank.
    pub fn into_inner(self) -> Result<S> {
        self.store
            .into_inner()
            .map_err(|e| BankError::LockPoisoned(e.to_string()))
    }
}
