//! Color themes

mod quizzical;
mod tokyo_night;

pub use quizzical::QUIZZICAL;
pub use tokyo_night::TOKYO_NIGHT;

use ratatui::style::Color;

/// A color theme for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,

    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,

    // Foreground colors
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub fg_muted: Color,

    // Accent colors
    pub accent_primary: Color,

    // Semantic colors
    pub success: Color,
    pub error: Color,

    // UI elements
    pub border: Color,
    pub border_focused: Color,

    // Answer chips
    pub answer_idle: Color,
    pub answer_selected: Color,
    pub answer_correct: Color,
    pub answer_incorrect: Color,
    /// Text drawn on top of a colored chip
    pub answer_text: Color,
}

impl Theme {
    /// Name of the default theme
    pub const QUIZZICAL: &'static str = "Quizzical";

    /// All built-in themes
    pub fn all() -> &'static [Theme] {
        &[QUIZZICAL, TOKYO_NIGHT]
    }

    /// Look up a built-in theme by name (case-insensitive)
    pub fn by_name(name: &str) -> Option<Theme> {
        Self::all().iter().find(|theme| theme.name.eq_ignore_ascii_case(name)).copied()
    }
}

impl Default for Theme {
    fn default() -> Self {
        QUIZZICAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_quizzical() {
        let theme = Theme::default();
        assert_eq!(theme.name, "Quizzical");
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(Theme::by_name("tokyo night"), Some(TOKYO_NIGHT));
        assert_eq!(Theme::by_name("missing"), None);
    }
}
