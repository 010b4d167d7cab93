use std::fmt;

use crate::dataset::DatasetError;

/// Rules card a question is written about.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInfo {
    /// Printed card name.
    pub name: String,
    /// Mana cost as a sequence of braced symbols, e.g. `{2}{U}{U}`.
    pub mana_cost: String,
    /// Rules text of the card.
    pub text: String,
    /// Release-notes ruling quoted under the explanation.
    pub ruling: String,
}

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub card: CardInfo,
    /// Text shown as the question prompt.
    pub question: String,
    /// Answer options in canonical order. At least two entries.
    pub options: Vec<String>,
    /// Index in `options` that holds the correct answer.
    pub correct_answer_index: usize,
    /// Shown once the question has been answered.
    pub explanation: String,
}

impl QuizQuestion {
    /// Checks the option invariants for the question at `position` in its dataset.
    ///
    /// # Errors
    /// * [`DatasetError::TooFewOptions`] if fewer than two options are given.
    /// * [`DatasetError::CorrectIndexOutOfRange`] if the correct index does not
    ///   point into `options`.
    pub fn validate(&self, position: usize) -> Result<(), DatasetError> {
        if self.options.len() < 2 {
            return Err(DatasetError::TooFewOptions {
                question: position,
                count: self.options.len(),
            });
        }

        if self.correct_answer_index >= self.options.len() {
            return Err(DatasetError::CorrectIndexOutOfRange {
                question: position,
                index: self.correct_answer_index,
                options: self.options.len(),
            });
        }

        Ok(())
    }

    pub fn is_correct(&self, answer_index: usize) -> bool {
        answer_index == self.correct_answer_index
    }

    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_answer_index]
    }
}

impl fmt::Display for CardInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mana_cost.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} {}", self.name, self.mana_cost)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question() -> QuizQuestion {
        QuizQuestion {
            card: CardInfo {
                name: "Tidewright Adept".to_string(),
                mana_cost: "{1}{U}".to_string(),
                text: "Flash\nWhen Tidewright Adept enters, tap target creature.".to_string(),
                ruling: "The target is chosen as the ability is put on the stack.".to_string(),
            },
            question: "When is the target chosen?".to_string(),
            options: vec![
                "As the spell is cast".to_string(),
                "As the ability is put on the stack".to_string(),
                "As the ability resolves".to_string(),
            ],
            correct_answer_index: 1,
            explanation: "Targets for triggered abilities are chosen when they are put on the stack."
                .to_string(),
        }
    }

    #[test]
    fn valid_question_passes_validation() {
        assert_eq!(sample_question().validate(0), Ok(()));
    }

    #[test]
    fn rejects_single_option() {
        let mut question = sample_question();
        question.options.truncate(1);
        question.correct_answer_index = 0;

        assert_eq!(
            question.validate(3),
            Err(DatasetError::TooFewOptions {
                question: 3,
                count: 1
            })
        );
    }

    #[test]
    fn rejects_correct_index_past_options() {
        let mut question = sample_question();
        question.correct_answer_index = 3;

        assert_eq!(
            question.validate(0),
            Err(DatasetError::CorrectIndexOutOfRange {
                question: 0,
                index: 3,
                options: 3
            })
        );
    }

    #[test]
    fn correctness_uses_canonical_index() {
        let question = sample_question();

        assert!(question.is_correct(1));
        assert!(!question.is_correct(0));
        assert_eq!(question.correct_option(), "As the ability is put on the stack");
    }

    #[test]
    fn display_includes_mana_cost_when_present() {
        let mut card = sample_question().card;
        assert_eq!(card.to_string(), "Tidewright Adept {1}{U}");

        card.mana_cost.clear();
        assert_eq!(card.to_string(), "Tidewright Adept");
    }

    #[test]
    fn parses_camel_case_fields() {
        let json = r#"{
            "card": {
                "name": "Emberline Scout",
                "manaCost": "{R}",
                "text": "Haste",
                "ruling": "Haste lets it attack the turn it enters."
            },
            "question": "Can it attack this turn?",
            "options": ["Yes", "No"],
            "correctAnswerIndex": 0,
            "explanation": "It has haste."
        }"#;

        let parsed: QuizQuestion =
            serde_json::from_str(json).expect("question should parse from camelCase JSON");

        assert_eq!(parsed.card.mana_cost, "{R}");
        assert_eq!(parsed.correct_answer_index, 0);
        assert_eq!(parsed.options.len(), 2);
    }
}
