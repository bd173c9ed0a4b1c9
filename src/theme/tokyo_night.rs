//! Tokyo Night theme implementation

use ratatui::style::Color;

use super::Theme;

/// Tokyo Night color palette
pub const TOKYO_NIGHT: Theme = Theme {
    name: "Tokyo Night",

    // Background colors
    bg_primary: Color::Rgb(26, 27, 38),   // #1a1b26
    bg_secondary: Color::Rgb(36, 40, 59), // #24283b

    // Foreground colors
    fg_primary: Color::Rgb(169, 177, 214),   // #a9b1d6
    fg_secondary: Color::Rgb(192, 202, 245), // #c0caf5
    fg_muted: Color::Rgb(86, 95, 137),       // #565f89

    // Accent colors
    accent_primary: Color::Rgb(122, 162, 247), // #7aa2f7

    // Semantic colors
    success: Color::Rgb(158, 206, 106), // #9ece6a
    error: Color::Rgb(247, 118, 142),   // #f7768e

    // UI elements
    border: Color::Rgb(65, 72, 104),           // #414868
    border_focused: Color::Rgb(122, 162, 247), // #7aa2f7

    // Answer chips
    answer_idle: Color::Rgb(36, 40, 59),        // #24283b
    answer_selected: Color::Rgb(65, 72, 104),   // #414868
    answer_correct: Color::Rgb(158, 206, 106),  // #9ece6a
    answer_incorrect: Color::Rgb(247, 118, 142), // #f7768e
    answer_text: Color::Rgb(26, 27, 38),        // #1a1b26
};
