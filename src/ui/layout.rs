//! Layout utilities and common components

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Wrap},
};

use crate::theme::Theme;

/// Fill an area with the theme background
pub fn fill_background(frame: &mut Frame, area: Rect, theme: &Theme) {
    frame.render_widget(Paragraph::new("").style(Style::default().bg(theme.bg_primary)), area);
}

/// Draw lines centered horizontally and vertically in `area`
pub fn draw_centered(frame: &mut Frame, area: Rect, lines: Vec<Line<'_>>, theme: &Theme) {
    let height = (lines.len() as u16).min(area.height);
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);

    let para = Paragraph::new(lines)
        .style(Style::default().bg(theme.bg_primary))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(para, middle);
}

/// Create a centered rectangle with the given percentage of width and height
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(80, 60, outer);
        assert_eq!(inner.width, 80);
        assert_eq!(inner.height, 30);
        assert_eq!(inner.x, 10);
        assert_eq!(inner.y, 10);
    }
}
