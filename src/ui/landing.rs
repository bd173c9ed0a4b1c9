//! Landing screen

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
};

use super::layout::fill_background;
use crate::app::state::LandingAnimation;
use crate::theme::Theme;

const TITLE: &str = "Quizzical";
const TAGLINE: &str = "Five questions. One shot. How much trivia do you know?";
const PROMPT: &str = "[Enter] Start quiz    [q] Quit";

/// Title with the not-yet-revealed characters replaced by spaces
///
/// Padding keeps the centered title from shifting while it types out.
fn partial_title(visible: usize) -> String {
    TITLE
        .chars()
        .enumerate()
        .map(|(i, c)| if i < visible { c } else { ' ' })
        .collect()
}

/// Draw the landing screen
pub fn draw(frame: &mut Frame, animation: &LandingAnimation, theme: &Theme) {
    let area = frame.area();
    fill_background(frame, area, theme);

    let title_y = area.y + area.height / 3;
    draw_row(
        frame,
        area,
        title_y,
        partial_title(animation.title_chars(TITLE.chars().count())),
        Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        theme,
    );

    if animation.show_tagline() {
        draw_row(
            frame,
            area,
            title_y + 2,
            TAGLINE.to_string(),
            Style::default().fg(theme.fg_secondary),
            theme,
        );
    }

    // Blinking prompt
    if animation.complete {
        let blink = (animation.start_time.elapsed().as_millis() / 500) % 2 == 0;
        if blink || animation.speed <= 0.0 {
            draw_row(
                frame,
                area,
                title_y + 5,
                PROMPT.to_string(),
                Style::default().fg(theme.accent_primary),
                theme,
            );
        }
    }
}

/// Draw one centered line at row `y`, if it fits
fn draw_row(frame: &mut Frame, area: Rect, y: u16, text: String, style: Style, theme: &Theme) {
    if y >= area.y + area.height {
        return;
    }
    let row = Rect { x: area.x, y, width: area.width, height: 1 };
    let para = Paragraph::new(text).style(style.bg(theme.bg_primary)).alignment(Alignment::Center);
    frame.render_widget(para, row);
}
