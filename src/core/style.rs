//! Terminal styling

use colored::{Color, Colorize};
use serde::{Deserialize, Serialize};

/// Named styles applied to the parts of a formatted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// No styling; text passes through untouched.
    Plain,
    Cyan,
    Blue,
    Yellow,
    Red,
    /// Neutral style used for timestamps.
    White,
    /// Muted style used for context data.
    Gray,
}

impl Style {
    pub fn color(&self) -> Option<Color> {
        match self {
            Style::Plain => None,
            Style::Cyan => Some(Color::Cyan),
            Style::Blue => Some(Color::Blue),
            Style::Yellow => Some(Color::Yellow),
            Style::Red => Some(Color::Red),
            Style::White => Some(Color::White),
            Style::Gray => Some(Color::BrightBlack),
        }
    }

    /// Wrap `text` in this style's escape sequences.
    ///
    /// Whether sequences are actually produced also depends on `colored`'s
    /// terminal detection (`NO_COLOR`, `CLICOLOR_FORCE`, tty).
    pub fn apply(&self, text: &str) -> String {
        match self.color() {
            Some(color) => text.color(color).to_string(),
            None => text.to_string(),
        }
    }
}

/// Styling capability bound to a logger's `use_colors` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stylist {
    enabled: bool,
}

impl Stylist {
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint(&self, text: &str, style: Style) -> String {
        if self.enabled {
            style.apply(text)
        } else {
            text.to_string()
        }
    }
}
