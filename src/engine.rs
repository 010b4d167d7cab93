use crate::card::QuizQuestion;
use crate::dataset::{DatasetError, validate_all};
use crate::feedback::Feedback;
use crate::shuffle::QuestionKey;

/// Coarse state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Ongoing,
    Finished,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QuizError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error("answer {index} is out of range for a question with {options} options")]
    AnswerOutOfRange { index: usize, options: usize },
    #[error("a quiz needs at least one question to be scored")]
    EmptyQuiz,
    #[error("score {score} exceeds the number of questions ({total})")]
    ScoreOutOfRange { score: usize, total: usize },
    #[error("session state is inconsistent: {0}")]
    InconsistentState(String),
}

/// Result of [`QuizSession::submit_answer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Recorded { correct: bool },
    /// The question was already answered or the quiz is over.
    Ignored,
}

/// Result of [`QuizSession::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the question at this index.
    Question(usize),
    Finished,
    /// The quiz was already finished.
    Ignored,
}

/// How one option of the current question should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    /// Question not answered yet; the option can be chosen.
    Selectable,
    /// The correct option, revealed after answering.
    Correct,
    /// The option the user picked, when it was wrong.
    Incorrect,
    /// Any other option once the question is locked.
    Dimmed,
}

impl OptionState {
    pub fn is_selectable(self) -> bool {
        self == Self::Selectable
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Selectable => "option option-selectable",
            Self::Correct => "option option-correct",
            Self::Incorrect => "option option-incorrect",
            Self::Dimmed => "option option-dimmed",
        }
    }
}

/// Read-only view handed to the presentation layer on each render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot<'a> {
    pub phase: Phase,
    pub current_index: usize,
    pub current_question: &'a QuizQuestion,
    pub is_current_answered: bool,
    pub selected_answer: Option<usize>,
    pub score: usize,
    pub total: usize,
}

/// Summary of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    pub feedback: Feedback,
}

/// One run through a fixed question sequence.
///
/// All mutation goes through [`submit_answer`](Self::submit_answer),
/// [`advance`](Self::advance) and [`restart`](Self::restart).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "SessionState")]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    current_index: usize,
    answers: Vec<Option<usize>>,
    score: usize,
    phase: Phase,
    generation: u64,
}

impl QuizSession {
    /// Starts a session at the first question with nothing answered.
    ///
    /// # Errors
    /// Returns [`QuizError::Dataset`] if `questions` is empty or any question
    /// has fewer than two options or a correct index outside its options.
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, QuizError> {
        validate_all(&questions)?;
        log::info!("starting quiz with {} questions", questions.len());
        Ok(Self::fresh(questions, 0))
    }

    fn fresh(questions: Vec<QuizQuestion>, generation: u64) -> Self {
        let total = questions.len();
        Self {
            questions,
            current_index: 0,
            answers: vec![None; total],
            score: 0,
            phase: Phase::Ongoing,
            generation,
        }
    }

    /// Records `answer_index` for the current question.
    ///
    /// A second answer to the same question, or any answer after the quiz
    /// has finished, is ignored without touching the score.
    ///
    /// # Errors
    /// Returns [`QuizError::AnswerOutOfRange`] if `answer_index` is not a
    /// valid option of the current question.
    pub fn submit_answer(&mut self, answer_index: usize) -> Result<AnswerOutcome, QuizError> {
        if self.phase == Phase::Finished {
            log::debug!("ignoring answer {answer_index}: quiz already finished");
            return Ok(AnswerOutcome::Ignored);
        }

        let question = &self.questions[self.current_index];
        if answer_index >= question.options.len() {
            return Err(QuizError::AnswerOutOfRange {
                index: answer_index,
                options: question.options.len(),
            });
        }

        if self.answers[self.current_index].is_some() {
            log::debug!(
                "ignoring answer {answer_index}: question {} already answered",
                self.current_index
            );
            return Ok(AnswerOutcome::Ignored);
        }

        let correct = question.is_correct(answer_index);
        self.answers[self.current_index] = Some(answer_index);
        if correct {
            self.score += 1;
        }

        log::debug!(
            "question {} answered with option {answer_index} ({}), score {}/{}",
            self.current_index,
            if correct { "correct" } else { "incorrect" },
            self.score,
            self.total()
        );

        Ok(AnswerOutcome::Recorded { correct })
    }

    /// Moves to the next question, or finishes the quiz from the last one.
    ///
    /// Unanswered questions may be skipped; gating the "next" control on an
    /// answer is left to the caller.
    pub fn advance(&mut self) -> Advance {
        if self.phase == Phase::Finished {
            return Advance::Ignored;
        }

        if self.is_last_question() {
            self.phase = Phase::Finished;
            log::info!("quiz finished with score {}/{}", self.score, self.total());
            return Advance::Finished;
        }

        self.current_index += 1;
        log::debug!("advanced to question {}", self.current_index);
        Advance::Question(self.current_index)
    }

    /// Throws away all progress and starts over from the first question.
    pub fn restart(&mut self) {
        let questions = std::mem::take(&mut self.questions);
        *self = Self::fresh(questions, self.generation.wrapping_add(1));
        log::info!("quiz restarted (generation {})", self.generation);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> &QuizQuestion {
        &self.questions[self.current_index]
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn answer_for(&self, index: usize) -> Option<usize> {
        self.answers.get(index).copied().flatten()
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn is_current_answered(&self) -> bool {
        self.answers[self.current_index].is_some()
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Identity of the question on screen, used to memoize its display order.
    pub fn question_key(&self) -> QuestionKey {
        QuestionKey {
            generation: self.generation,
            index: self.current_index,
        }
    }

    pub fn option_state(&self, original_index: usize) -> OptionState {
        let Some(selected) = self.answers[self.current_index] else {
            return OptionState::Selectable;
        };

        if self.current_question().is_correct(original_index) {
            OptionState::Correct
        } else if original_index == selected {
            OptionState::Incorrect
        } else {
            OptionState::Dimmed
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            phase: self.phase,
            current_index: self.current_index,
            current_question: self.current_question(),
            is_current_answered: self.is_current_answered(),
            selected_answer: self.answers[self.current_index],
            score: self.score,
            total: self.total(),
        }
    }

    /// Final score and feedback; `None` while the quiz is still running.
    pub fn result(&self) -> Option<QuizResult> {
        if self.phase != Phase::Finished {
            return None;
        }

        Feedback::compute(self.score, self.total())
            .ok()
            .map(|feedback| QuizResult {
                score: self.score,
                total: self.total(),
                feedback,
            })
    }
}

/// Unchecked wire form of [`QuizSession`].
#[derive(serde::Deserialize)]
struct SessionState {
    questions: Vec<QuizQuestion>,
    current_index: usize,
    answers: Vec<Option<usize>>,
    score: usize,
    phase: Phase,
    #[serde(default)]
    generation: u64,
}

impl TryFrom<SessionState> for QuizSession {
    type Error = QuizError;

    fn try_from(state: SessionState) -> Result<Self, Self::Error> {
        validate_all(&state.questions)?;

        let total = state.questions.len();
        if state.answers.len() != total {
            return Err(QuizError::InconsistentState(format!(
                "{} answers recorded for {total} questions",
                state.answers.len()
            )));
        }

        if state.current_index >= total {
            return Err(QuizError::InconsistentState(format!(
                "current index {} past the last question",
                state.current_index
            )));
        }

        let mut correct = 0;
        for (position, (question, answer)) in state.questions.iter().zip(&state.answers).enumerate()
        {
            if let Some(answer) = *answer {
                if answer >= question.options.len() {
                    return Err(QuizError::InconsistentState(format!(
                        "answer {answer} to question {position} is not one of its options"
                    )));
                }
                if question.is_correct(answer) {
                    correct += 1;
                }
            }
        }

        if correct != state.score {
            return Err(QuizError::InconsistentState(format!(
                "score {} does not match {correct} correct answers",
                state.score
            )));
        }

        Ok(Self {
            questions: state.questions,
            current_index: state.current_index,
            answers: state.answers,
            score: state.score,
            phase: state.phase,
            generation: state.generation,
        })
    }
}
