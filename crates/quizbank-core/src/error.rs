//! Error types for Quizbank Core.

use thiserror::Error;

use crate::types::QuestionId;

/// Validation errors raised while building or mutating a question.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("question text must be non-empty and non-blank")]
    BlankQuestion,

    #[error("answer text must be non-empty and non-blank")]
    BlankAnswer,

    #[error("unknown category: {0:?}")]
    UnknownCategory(String),

    #[error("unknown difficulty: {0:?}")]
    UnknownDifficulty(String),
}

/// Errors raised by an ordering rule asked to compare records it cannot order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderingError {
    #[error("question {id} has no category and cannot be ordered by category")]
    UnsetCategory { id: QuestionId },

    #[error("question {id} has no difficulty and cannot be ordered by difficulty")]
    UnsetDifficulty { id: QuestionId },
}

/// Errors parsing a [`QuestionId`] from text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IdError {
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("question id must be {expected} bytes, got {got}")]
    Length { expected: usize, got: usize },
}
