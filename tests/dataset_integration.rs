use std::fs;

use rulequiz::{
    DatasetError, DatasetSource, QuizConfig, QuizError, QuizSession, demo_questions,
};

const DOCUMENT: &str = r#"{
    "questions": [
        {
            "card": {
                "name": "Stormglass Seer",
                "manaCost": "{1}{U}{U}",
                "text": "Scry 2 when it enters.",
                "ruling": "You may put both cards on the bottom in any order."
            },
            "question": "Can you put both scried cards on the bottom?",
            "options": ["Yes", "No"],
            "correctAnswerIndex": 0,
            "explanation": "Scry lets you choose for each card."
        }
    ]
}"#;

#[test]
fn session_starts_from_a_dataset_file() {
    let root = tempfile::tempdir().expect("temporary directory should be created");
    let path = root.path().join("questions.json");
    fs::write(&path, DOCUMENT).expect("dataset should be written");

    let config = QuizConfig::from_args([path.display().to_string()]).expect("valid arguments");
    let questions = config.dataset.load().expect("dataset should load");
    let session = QuizSession::new(questions).expect("dataset is valid");

    assert_eq!(session.total(), 1);
    assert_eq!(session.current_question().card.mana_cost, "{1}{U}{U}");
}

#[test]
fn invalid_dataset_file_is_rejected() {
    let root = tempfile::tempdir().expect("temporary directory should be created");
    let path = root.path().join("questions.json");
    fs::write(&path, DOCUMENT.replace("\"correctAnswerIndex\": 0", "\"correctAnswerIndex\": 2"))
        .expect("dataset should be written");

    let error = DatasetSource::File(path).load().expect_err("index out of range");
    assert_eq!(
        error,
        DatasetError::CorrectIndexOutOfRange {
            question: 0,
            index: 2,
            options: 2
        }
    );
}

#[test]
fn demo_questions_start_a_session() {
    let session = QuizSession::new(demo_questions()).expect("demo set is valid");
    assert_eq!(session.total(), demo_questions().len());
    assert!(!session.is_current_answered());
}

#[test]
fn empty_dataset_cannot_start_a_session() {
    assert_eq!(
        QuizSession::new(Vec::new()),
        Err(QuizError::Dataset(DatasetError::Empty))
    );
}
