use crate::engine::QuizError;
use crate::locale::Locale;

/// Feedback bucket for a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    Perfect,
    Great,
    Good,
    NeedsImprovement,
}

impl Tier {
    /// First matching threshold wins: 100, then 80, then 50.
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            100.. => Self::Perfect,
            80..=99 => Self::Great,
            50..=79 => Self::Good,
            _ => Self::NeedsImprovement,
        }
    }

    pub fn message(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Ja, Self::Perfect) => "完璧です！あなたは真のルールの達人ですね！",
            (Locale::Ja, Self::Great) => "素晴らしい成績です！あともう一歩！",
            (Locale::Ja, Self::Good) => "良い調子です。もう少しでマスターできます！",
            (Locale::Ja, Self::NeedsImprovement) => {
                "お疲れ様でした。再挑戦してルールをマスターしよう！"
            }
            (Locale::En, Self::Perfect) => "Perfect! You are a true rules master!",
            (Locale::En, Self::Great) => "Excellent result! Just one more step!",
            (Locale::En, Self::Good) => "Nice work. You are close to mastering the rules!",
            (Locale::En, Self::NeedsImprovement) => {
                "Thanks for playing. Try again and master the rules!"
            }
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Perfect => "tier-perfect",
            Self::Great => "tier-great",
            Self::Good => "tier-good",
            Self::NeedsImprovement => "tier-needs-improvement",
        }
    }
}

/// Percentage score and the tier it falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Feedback {
    pub percentage: u8,
    pub tier: Tier,
}

impl Feedback {
    pub fn compute(score: usize, total: usize) -> Result<Self, QuizError> {
        let percentage = percentage(score, total)?;
        Ok(Self {
            percentage,
            tier: Tier::from_percentage(percentage),
        })
    }
}

/// `round(100 * score / total)`, rounding halves away from zero.
///
/// # Errors
/// * [`QuizError::EmptyQuiz`] if `total` is zero.
/// * [`QuizError::ScoreOutOfRange`] if `score` exceeds `total`.
pub fn percentage(score: usize, total: usize) -> Result<u8, QuizError> {
    if total == 0 {
        return Err(QuizError::EmptyQuiz);
    }

    if score > total {
        return Err(QuizError::ScoreOutOfRange { score, total });
    }

    let rounded = (200 * score + total) / (2 * total);
    Ok(rounded as u8)
}
