//! Proptest generators for property-based testing.

use proptest::prelude::*;

use quizbank_core::{Category, Difficulty, Question};

/// Generate a Category.
pub fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

/// Generate a Difficulty.
pub fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop::sample::select(Difficulty::ALL.to_vec())
}

/// Generate non-blank question or answer text.
pub fn question_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9?][A-Za-z0-9 ?,.]{0,63}".prop_map(String::from)
}

/// Generate text that validation must reject.
pub fn blank_text() -> impl Strategy<Value = String> {
    "[ \t\n\r]{0,8}".prop_map(String::from)
}

/// Parameters for generating a question.
#[derive(Debug, Clone)]
pub struct QuestionParams {
    pub question: String,
    pub answer: String,
    pub category: Category,
    pub difficulty: Option<Difficulty>,
}

impl Arbitrary for QuestionParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            question_text(),
            question_text(),
            category(),
            proptest::option::of(difficulty()),
        )
            .prop_map(|(question, answer, category, difficulty)| QuestionParams {
                question,
                answer,
                category,
                difficulty,
            })
            .boxed()
    }
}

/// Build a categorised question from parameters.
///
/// Each call yields a fresh id, even for identical parameters.
pub fn question_from_params(params: &QuestionParams) -> Question {
    let mut question = Question::new(params.question.clone(), params.answer.clone())
        .expect("generated text is never blank")
        .with_category(params.category);
    question.set_difficulty(params.difficulty);
    question
}

/// Generate a batch of categorised questions.
pub fn questions(max_len: usize) -> impl Strategy<Value = Vec<Question>> {
    prop::collection::vec(any::<QuestionParams>(), 0..=max_len)
        .prop_map(|params| params.iter().map(question_from_params).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizbank_core::ValidationError;

    proptest! {
        #[test]
        fn test_generated_params_always_build(params: QuestionParams) {
            let question = question_from_params(&params);

            prop_assert_eq!(question.question(), params.question.as_str());
            prop_assert_eq!(question.category(), Some(params.category));
            prop_assert_eq!(question.difficulty(), params.difficulty);
        }

        #[test]
        fn test_blank_text_rejected(text in blank_text(), answer in question_text()) {
            prop_assert_eq!(
                Question::new(text, answer),
                Err(ValidationError::BlankQuestion)
            );
        }

        #[test]
        fn test_category_names_roundtrip(category in category()) {
            prop_assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }
}
