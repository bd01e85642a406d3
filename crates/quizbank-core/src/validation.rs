//! Text validation for question and answer fields.
//!
//! Blank means empty or whitespace-only. Both checks run on construction and
//! on every mutation of a [`Question`](crate::Question).

use crate::error::ValidationError;

/// Check that question text is usable.
pub fn validate_question_text(text: &str) -> Result<(), ValidationError> {
    if is_blank(text) {
        return Err(ValidationError::BlankQuestion);
    }
    Ok(())
}

/// Check that answer text is usable.
pub fn validate_answer(text: &str) -> Result<(), ValidationError> {
    if is_blank(text) {
        return Err(ValidationError::BlankAnswer);
    }
    Ok(())
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
