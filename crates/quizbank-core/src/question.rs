//! Question: a quiz question, its answer, and how it is classified.
//!
//! The identifier is fixed at construction. Category and difficulty may be
//! changed or cleared freely; question and answer text may be changed but
//! never to blank text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::types::QuestionId;
use crate::validation::{validate_answer, validate_question_text};

/// The subject area of a question.
///
/// Declaration order is the canonical sort order used by the store, so new
/// variants must be appended deliberately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Programming,
    DataStructures,
    DiscreteMath,
    SoftwareArchitecture,
    SoftwareEngineering,
    Networks,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 6] = [
        Category::Programming,
        Category::DataStructures,
        Category::DiscreteMath,
        Category::SoftwareArchitecture,
        Category::SoftwareEngineering,
        Category::Networks,
    ];

    /// Position in declaration order.
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// The variant name.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Programming => "Programming",
            Category::DataStructures => "DataStructures",
            Category::DiscreteMath => "DiscreteMath",
            Category::SoftwareArchitecture => "SoftwareArchitecture",
            Category::SoftwareEngineering => "SoftwareEngineering",
            Category::Networks => "Networks",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// Parse a variant name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

/// How hard a question is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Every difficulty, in declaration order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Position in declaration order.
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// The variant name.
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownDifficulty(s.to_string()))
    }
}

/// A single quiz question.
///
/// Always holds non-blank question and answer text. Serializes for export,
/// but is never deserialized directly: build one with [`Question::new`] so
/// the text checks run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: QuestionId,
    category: Option<Category>,
    difficulty: Option<Difficulty>,
    question: String,
    answer: String,
}

impl Question {
    /// Create a question with a freshly generated identifier.
    ///
    /// Category and difficulty start unset.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let question = question.into();
        let answer = answer.into();
        validate_question_text(&question)?;
        validate_answer(&answer)?;

        Ok(Self {
            id: QuestionId::generate(),
            category: None,
            difficulty: None,
            question,
            answer,
        })
    }

    /// Set the category, consuming and returning self.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the difficulty, consuming and returning self.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Set or clear the category.
    pub fn set_category(&mut self, category: Option<Category>) {
        self.category = category;
    }

    /// Set or clear the difficulty.
    pub fn set_difficulty(&mut self, difficulty: Option<Difficulty>) {
        self.difficulty = difficulty;
    }

    /// Replace the question text. Blank text is rejected and the old text kept.
    pub fn set_question(&mut self, question: impl Into<String>) -> Result<(), ValidationError> {
        let question = question.into();
        validate_question_text(&question)?;
        self.question = question;
        Ok(())
    }

    /// Replace the answer text. Blank text is rejected and the old text kept.
    pub fn set_answer(&mut self, answer: impl Into<String>) -> Result<(), ValidationError> {
        let answer = answer.into();
        validate_answer(&answer)?;
        self.answer = answer;
        Ok(())
    }
}
