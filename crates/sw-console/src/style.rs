//! Text tinting for terminal output.

use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};

/// The tint applied to a piece of terminal text.
///
/// Covers the small palette the helpers actually use. `Plain` applies no
/// styling at all, which also keeps captured output byte-comparable in
/// tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tint {
    /// No styling.
    #[default]
    Plain,
    /// Red, used for error messages.
    Red,
    /// Green, used for success and progress.
    Green,
    /// Yellow, used for warnings.
    Yellow,
    /// Blue.
    Blue,
}

impl Tint {
    /// Apply the tint to a piece of text.
    ///
    /// `colored` still decides at print time whether to actually emit
    /// escape codes, so tinted text degrades to plain text when output is
    /// piped.
    pub fn apply(self, text: &str) -> ColoredString {
        match self {
            Self::Plain => text.normal(),
            Self::Red => text.red(),
            Self::Green => text.green(),
            Self::Yellow => text.yellow(),
            Self::Blue => text.blue(),
        }
    }

    /// Parse a tint from a user-supplied name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "none" => Some(Self::Plain),
            "red" => Some(Self::Red),
            "green" => Some(Self::Green),
            "yellow" => Some(Self::Yellow),
            "blue" => Some(Self::Blue),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Red => write!(f, "red"),
            Self::Green => write!(f, "green"),
            Self::Yellow => write!(f, "yellow"),
            Self::Blue => write!(f, "blue"),
        }
    }
}
