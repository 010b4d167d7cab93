/// Colour family of a mana symbol, used to pick its badge style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManaStyle {
    White,
    Blue,
    Black,
    Red,
    Green,
    /// Numeric generic cost such as `{2}`.
    Generic,
    /// Anything else: `{X}`, `{C}`, hybrid symbols...
    Other,
}

impl ManaStyle {
    fn of(symbol: &str) -> Self {
        match symbol {
            "W" => Self::White,
            "U" => Self::Blue,
            "B" => Self::Black,
            "R" => Self::Red,
            "G" => Self::Green,
            _ if starts_with_integer(symbol) => Self::Generic,
            _ => Self::Other,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Self::White => "mana mana-white",
            Self::Blue => "mana mana-blue",
            Self::Black => "mana mana-black",
            Self::Red => "mana mana-red",
            Self::Green => "mana mana-green",
            Self::Generic => "mana mana-generic",
            Self::Other => "mana mana-other",
        }
    }
}

/// One `{...}` group of a mana cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManaSymbol {
    /// Upper-cased text between the braces.
    pub symbol: String,
    pub style: ManaStyle,
}

/// Splits a cost string like `{2}{U}{U}` into styled symbols.
///
/// Groups are matched lazily and must have a non-empty body; text outside
/// braces is skipped.
pub fn encode(cost: &str) -> Vec<ManaSymbol> {
    let mut symbols = Vec::new();
    let mut rest = cost;

    while let Some(open) = rest.find('{') {
        let after_open = &rest[open + 1..];

        // The body needs at least one character, which may itself be `}`.
        let Some(first) = after_open.chars().next() else {
            break;
        };
        let Some(close) = after_open[first.len_utf8()..].find('}') else {
            break;
        };
        let body_len = first.len_utf8() + close;

        let symbol = after_open[..body_len].to_uppercase();
        symbols.push(ManaSymbol {
            style: ManaStyle::of(&symbol),
            symbol,
        });

        rest = &after_open[body_len + 1..];
    }

    symbols
}

fn starts_with_integer(text: &str) -> bool {
    let trimmed = text.trim_start();
    let unsigned = trimmed
        .strip_prefix('+')
        .or_else(|| trimmed.strip_prefix('-'))
        .unwrap_or(trimmed);

    unsigned.chars().next().is_some_and(|c| c.is_ascii_digit())
}
