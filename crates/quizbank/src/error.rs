//! Error types for the question bank.

use quizbank_core::{IdError, ValidationError};
use quizbank_store::StoreError;
use thiserror::Error;

/// Errors that can occur during bank operations.
#[derive(Debug, Error)]
pub enum BankError {
    /// A request body did not describe a valid question.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// A question id could not be parsed.
    #[error("invalid question id: {0}")]
    InvalidId(#[from] IdError),

    /// Configuration could not be parsed or is out of range.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A caller panicked while holding the store lock.
    #[error("store lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Result type for bank operations.
pub type Result<T> = std::result::Result<T, BankError>;
