use std::path::PathBuf;

use crate::card::QuizQuestion;
use crate::dataset::{DatasetError, QuestionSet};
use crate::demo::demo_questions;
use crate::locale::{Locale, UnknownLocale};

/// Environment variable holding the default interface locale.
pub const LOCALE_ENV: &str = "RULEQUIZ_LOCALE";

/// Where the questions for a session come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DatasetSource {
    #[default]
    Demo,
    File(PathBuf),
}

impl DatasetSource {
    pub fn load(&self) -> Result<Vec<QuizQuestion>, DatasetError> {
        match self {
            Self::Demo => QuestionSet::new(demo_questions()).map(QuestionSet::into_questions),
            Self::File(path) => QuestionSet::from_file(path).map(QuestionSet::into_questions),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value for {flag}")]
    MissingValue { flag: String },
    #[error("unknown option `{0}`")]
    UnknownFlag(String),
    #[error("unexpected extra argument `{0}`")]
    UnexpectedArgument(String),
    #[error(transparent)]
    Locale(#[from] UnknownLocale),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizConfig {
    pub dataset: DatasetSource,
    pub locale: Locale,
}

impl QuizConfig {
    /// Parses `[--locale ja|en] [PATH]`, program name excluded.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_env_and_args(None, args)
    }

    /// Like [`from_args`](Self::from_args), with `env_locale` (usually the
    /// value of [`LOCALE_ENV`]) as the default locale. A `--locale` flag
    /// takes precedence.
    pub fn from_env_and_args<I, S>(env_locale: Option<&str>, args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::default();

        if let Some(value) = env_locale.filter(|value| !value.trim().is_empty()) {
            config.locale = value.parse()?;
        }

        let mut args = args.into_iter().map(Into::into);
        let mut path: Option<PathBuf> = None;

        while let Some(arg) = args.next() {
            if let Some(value) = arg.strip_prefix("--locale=") {
                config.locale = value.parse()?;
            } else if arg == "--locale" || arg == "-l" {
                let value = args
                    .next()
                    .ok_or_else(|| ConfigError::MissingValue { flag: arg.clone() })?;
                config.locale = value.parse()?;
            } else if arg.starts_with('-') && arg != "-" {
                return Err(ConfigError::UnknownFlag(arg));
            } else if path.is_some() {
                return Err(ConfigError::UnexpectedArgument(arg));
            } else {
                path = Some(PathBuf::from(arg));
            }
        }

        if let Some(path) = path {
            config.dataset = DatasetSource::File(path);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_demo_in_japanese() {
        let config = QuizConfig::from_args(Vec::<String>::new()).expect("no arguments is valid");

        assert_eq!(config.dataset, DatasetSource::Demo);
        assert_eq!(config.locale, Locale::Ja);
    }

    #[test]
    fn reads_path_and_locale() {
        let config =
            QuizConfig::from_args(["--locale", "en", "questions.json"]).expect("valid arguments");

        assert_eq!(
            config.dataset,
            DatasetSource::File(PathBuf::from("questions.json"))
        );
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn accepts_inline_locale_value() {
        let config = QuizConfig::from_args(["--locale=en"]).expect("valid arguments");
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn flag_overrides_environment() {
        let config =
            QuizConfig::from_env_and_args(Some("en"), ["-l", "ja"]).expect("valid arguments");
        assert_eq!(config.locale, Locale::Ja);

        let config =
            QuizConfig::from_env_and_args(Some("en"), Vec::<String>::new()).expect("valid env");
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn blank_environment_is_ignored() {
        let config =
            QuizConfig::from_env_and_args(Some("  "), Vec::<String>::new()).expect("blank env");
        assert_eq!(config.locale, Locale::Ja);
    }

    #[test]
    fn reports_argument_errors() {
        assert_eq!(
            QuizConfig::from_args(["--locale"]),
            Err(ConfigError::MissingValue {
                flag: "--locale".to_string()
            })
        );
        assert_eq!(
            QuizConfig::from_args(["--verbose"]),
            Err(ConfigError::UnknownFlag("--verbose".to_string()))
        );
        assert_eq!(
            QuizConfig::from_args(["a.json", "b.json"]),
            Err(ConfigError::UnexpectedArgument("b.json".to_string()))
        );
        assert_eq!(
            QuizConfig::from_args(["--locale", "de"]),
            Err(ConfigError::Locale(UnknownLocale("de".to_string())))
        );
    }

    #[test]
    fn demo_source_loads_questions() {
        let questions = DatasetSource::Demo.load().expect("demo set is valid");
        assert!(!questions.is_empty());
    }
}
