//! Request bodies: untrusted, textual descriptions of a question.
//!
//! Everything arrives as text. [`QuestionBody::into_question`] is the single
//! place where that text is parsed and checked before a [`Question`] exists.

use serde::{Deserialize, Serialize};

use quizbank_core::{Category, Difficulty, Question, ValidationError};

/// The shape of a "create question" request.
///
/// Missing text deserializes as empty and is rejected as blank during
/// conversion, so callers see one kind of error for both cases. A blank
/// category or difficulty counts as unset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuestionBody {
    #[serde(default, alias = "type", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,

    #[serde(default)]
    pub question: String,

    #[serde(default)]
    pub answer: String,
}

impl QuestionBody {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            ..Self::default()
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    /// Validate the body and build a question with a fresh id.
    pub fn into_question(self) -> Result<Question, ValidationError> {
        let mut question = Question::new(self.question, self.answer)?;

        if let Some(category) = non_blank(self.category.as_deref()) {
            question.set_category(Some(category.parse::<Category>()?));
        }
        if let Some(difficulty) = non_blank(self.difficulty.as_deref()) {
            question.set_difficulty(Some(difficulty.parse::<Difficulty>()?));
        }

        Ok(question)
    }
}

impl TryFrom<QuestionBody> for Question {
    type Error = ValidationError;

    fn try_from(body: QuestionBody) -> Result<Self, Self::Error> {
        body.into_question()
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}
