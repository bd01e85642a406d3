//! # Quizbank Core
//!
//! Pure primitives for Quizbank: questions, their identifiers, and the
//! enumerations used to classify and order them.
//!
//! This crate contains no I/O and no storage. Everything here is a value type
//! plus the validation rules that keep those values well-formed.
//!
//! ## Key Types
//!
//! - [`Question`] - A quiz question with its answer, category and difficulty
//! - [`QuestionId`] - Opaque random identifier assigned at construction
//! - [`Category`] - Subject area; declaration order is the canonical sort order
//! - [`Difficulty`] - Difficulty level
//!
//! ## Invariants
//!
//! Question and answer text are never blank. This is checked by
//! [`Question::new`] and by every text mutator, see [`validation`].

pub mod error;
pub mod question;
pub mod types;
pub mod validation;

pub use error::{IdError, OrderingError, ValidationError};
pub use question::{Category, Difficulty, Question};
pub use types::QuestionId;
pub use validation::{validate_answer, validate_question_text};
