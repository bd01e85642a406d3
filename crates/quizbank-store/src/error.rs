//! Error types for the store module.

use quizbank_core::OrderingError;
use thiserror::Error;

/// Errors that can occur during store operations.
///
/// A full store, a missing id or an empty category are not errors; they are
/// reported through the operations' return values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Capacity must be at least one slot.
    #[error("invalid capacity {0}: a store needs at least one slot")]
    InvalidCapacity(usize),

    /// The ordering rule could not compare two stored questions.
    #[error("ordering error: {0}")]
    Ordering(#[from] OrderingError),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
