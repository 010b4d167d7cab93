pub mod card;
pub mod config;
pub mod console;
pub mod dataset;
pub mod demo;
pub mod engine;
pub mod feedback;
pub mod locale;
pub mod mana;
pub mod shuffle;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use card::{CardInfo, QuizQuestion};
pub use config::{ConfigError, DatasetSource, LOCALE_ENV, QuizConfig};
pub use dataset::{DatasetError, QuestionSet};
pub use demo::demo_questions;
pub use engine::{
    Advance, AnswerOutcome, OptionState, Phase, QuizError, QuizResult, QuizSession,
    SessionSnapshot,
};
pub use feedback::{Feedback, Tier, percentage};
pub use locale::{Locale, UiText, UnknownLocale};
pub use mana::{ManaStyle, ManaSymbol, encode};
pub use shuffle::{DisplayOrderCache, QuestionKey, ShuffledOption, display_order, shuffle_options};
