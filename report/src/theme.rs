use crossterm::style::{Attribute, Color, Stylize, style};

/// Colors for the rendered report, one per role. `None` disables styling
/// for that role, so rendering stays a pure string transformation that
/// works the same with or without a terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub arena: Option<Color>,
    pub block: Option<Color>,
    pub count: Option<Color>,
    pub gap: Option<Color>,
    pub path: Option<Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            arena: Some(Color::Green),
            block: Some(Color::Magenta),
            count: Some(Color::Cyan),
            gap: Some(Color::Red),
            path: Some(Color::Cyan),
        }
    }
}

impl Theme {
    /// A theme with all styling off.
    pub fn plain() -> Self {
        Theme {
            arena: None,
            block: None,
            count: None,
            gap: None,
            path: None,
        }
    }
}

/// Applies one role color (bold) to a piece of text, or passes it through
/// unchanged when the role is unstyled.
pub fn paint(text: &str, color: Option<Color>) -> String {
    match color {
        Some(color) => style(text)
            .with(color)
            .attribute(Attribute::Bold)
            .to_string(),
        None => text.to_string(),
    }
}
