use std::fmt;
use std::str::FromStr;

/// Language of the fixed interface copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown locale `{0}` (expected `ja` or `en`)")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ja" | "ja-jp" | "japanese" => Ok(Self::Ja),
            "en" | "en-us" | "en-gb" | "english" => Ok(Self::En),
            _ => Err(UnknownLocale(value.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ja => f.write_str("ja"),
            Self::En => f.write_str("en"),
        }
    }
}

/// Static interface strings for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub footer: &'static str,
    pub explanation_heading: &'static str,
    pub ruling_heading: &'static str,
    pub next_question: &'static str,
    pub see_results: &'static str,
    pub finished_heading: &'static str,
    pub your_score: &'static str,
    pub restart: &'static str,
    pub correct: &'static str,
    pub incorrect: &'static str,
    pub answer_prompt: &'static str,
    pub invalid_choice: &'static str,
}

const JA: UiText = UiText {
    title: "Magic: The Gathering",
    subtitle: "ルールクイズ",
    footer: "架空のカードとリリースノートを基にしたクイズです。",
    explanation_heading: "解説",
    ruling_heading: "関連ルール",
    next_question: "次の問題へ",
    see_results: "結果を見る",
    finished_heading: "クイズ終了",
    your_score: "あなたのスコア:",
    restart: "もう一度挑戦する",
    correct: "正解！",
    incorrect: "不正解",
    answer_prompt: "番号を入力してください",
    invalid_choice: "選択肢の番号を入力してください。",
};

const EN: UiText = UiText {
    title: "Magic: The Gathering",
    subtitle: "Rules Quiz",
    footer: "Questions are based on fictional cards and their release notes.",
    explanation_heading: "Explanation",
    ruling_heading: "Related ruling",
    next_question: "Next question",
    see_results: "See results",
    finished_heading: "Quiz complete",
    your_score: "Your score:",
    restart: "Try again",
    correct: "Correct!",
    incorrect: "Incorrect",
    answer_prompt: "Enter an option number",
    invalid_choice: "Please enter one of the listed option numbers.",
};

impl Locale {
    pub fn text(self) -> &'static UiText {
        match self {
            Self::Ja => &JA,
            Self::En => &EN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_locales() {
        assert_eq!("ja".parse::<Locale>(), Ok(Locale::Ja));
        assert_eq!(" EN ".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("en-US".parse::<Locale>(), Ok(Locale::En));
    }

    #[test]
    fn rejects_unknown_locale() {
        assert_eq!(
            "fr".parse::<Locale>(),
            Err(UnknownLocale("fr".to_string()))
        );
    }

    #[test]
    fn japanese_is_default() {
        assert_eq!(Locale::default(), Locale::Ja);
        assert_eq!(Locale::default().text().see_results, "結果を見る");
    }

    #[test]
    fn display_matches_parse_input() {
        for locale in [Locale::Ja, Locale::En] {
            assert_eq!(locale.to_string().parse::<Locale>(), Ok(locale));
        }
    }
}
