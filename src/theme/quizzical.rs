//! Light theme matching the original Quizzical web palette

use ratatui::style::Color;

use super::Theme;

pub const QUIZZICAL: Theme = Theme {
    name: Theme::QUIZZICAL,

    bg_primary: Color::Rgb(245, 247, 251),   // #f5f7fb
    bg_secondary: Color::Rgb(235, 238, 248), // #ebeef8

    fg_primary: Color::Rgb(41, 50, 100),    // #293264
    fg_secondary: Color::Rgb(77, 91, 158),  // #4d5b9e
    fg_muted: Color::Rgb(140, 148, 190),    // #8c94be

    accent_primary: Color::Rgb(77, 91, 158), // #4d5b9e

    success: Color::Rgb(55, 140, 80), // #378c50
    error: Color::Rgb(190, 60, 60),   // #be3c3c

    border: Color::Rgb(219, 222, 240),         // #dbdef0
    border_focused: Color::Rgb(77, 91, 158),   // #4d5b9e

    answer_idle: Color::Rgb(245, 247, 251),      // #f5f7fb
    answer_selected: Color::Rgb(214, 219, 245),  // #d6dbf5
    answer_correct: Color::Rgb(148, 215, 162),   // #94d7a2
    answer_incorrect: Color::Rgb(248, 188, 188), // #f8bcbc
    answer_text: Color::Rgb(41, 50, 100),        // #293264
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chips_are_distinguishable() {
        assert_ne!(QUIZZICAL.answer_selected, QUIZZICAL.answer_correct);
        assert_ne!(QUIZZICAL.answer_correct, QUIZZICAL.answer_incorrect);
    }
}
