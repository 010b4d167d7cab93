use std::fs;
use std::path::Path;

use crate::card::QuizQuestion;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("question set must contain at least one question")]
    Empty,
    #[error("question {question} needs at least 2 options but has {count}")]
    TooFewOptions { question: usize, count: usize },
    #[error("question {question} marks option {index} as correct but only has {options} options")]
    CorrectIndexOutOfRange {
        question: usize,
        index: usize,
        options: usize,
    },
    #[error("failed to read question file at {path}: {source}")]
    ReadError {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse question file at {path}: {source}")]
    ParseError {
        path: String,
        source: serde_json::Error,
    },
}

impl PartialEq for DatasetError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Empty, Self::Empty) => true,
            (
                Self::TooFewOptions {
                    question: left_question,
                    count: left_count,
                },
                Self::TooFewOptions {
                    question: right_question,
                    count: right_count,
                },
            ) => left_question == right_question && left_count == right_count,
            (
                Self::CorrectIndexOutOfRange {
                    question: left_question,
                    index: left_index,
                    options: left_options,
                },
                Self::CorrectIndexOutOfRange {
                    question: right_question,
                    index: right_index,
                    options: right_options,
                },
            ) => {
                left_question == right_question
                    && left_index == right_index
                    && left_options == right_options
            }
            (Self::ReadError { path: left, .. }, Self::ReadError { path: right, .. }) => {
                left == right
            }
            (Self::ParseError { path: left, .. }, Self::ParseError { path: right, .. }) => {
                left == right
            }
            _ => false,
        }
    }
}

impl Eq for DatasetError {}

/// Ordered, validated list of questions for one quiz.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuestionSet {
    questions: Vec<QuizQuestion>,
}

impl QuestionSet {
    /// Wraps `questions` after checking every question's invariants.
    ///
    /// # Errors
    /// Returns [`DatasetError::Empty`] for an empty list, or the first
    /// per-question violation reported by [`QuizQuestion::validate`].
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, DatasetError> {
        validate_all(&questions)?;
        Ok(Self { questions })
    }

    /// Parses a `{ "questions": [...] }` document.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        parse_document(json.as_bytes(), "<inline>")
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| DatasetError::ReadError {
            path: path.display().to_string(),
            source,
        })?;

        let set = parse_document(&data, &path.display().to_string())?;
        log::info!(
            "loaded {} questions from {}",
            set.questions.len(),
            path.display()
        );

        Ok(set)
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn into_questions(self) -> Vec<QuizQuestion> {
        self.questions
    }
}

pub(crate) fn validate_all(questions: &[QuizQuestion]) -> Result<(), DatasetError> {
    if questions.is_empty() {
        return Err(DatasetError::Empty);
    }

    for (position, question) in questions.iter().enumerate() {
        question.validate(position)?;
    }

    Ok(())
}

fn parse_document(data: &[u8], path: &str) -> Result<QuestionSet, DatasetError> {
    let parsed: QuestionSet =
        serde_json::from_slice(data).map_err(|source| DatasetError::ParseError {
            path: path.to_string(),
            source,
        })?;

    validate_all(&parsed.questions)?;

    Ok(parsed)
}
