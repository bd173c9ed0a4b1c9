//! Quiz screen: question cards, answer chips and the results footer

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use textwrap::core::display_width;

use super::layout::{centered_rect, draw_centered, fill_background};
use crate::app::state::{QuizCursor, QuizScreen};
use crate::quiz::{AnswerView, QuestionView, QuizView, RevealColor, ViewPhase};
use crate::theme::Theme;

/// Height of the footer in lines
const FOOTER_HEIGHT: u16 = 3;
/// Columns reserved for the focus gutter
const GUTTER: usize = 2;
/// Columns between answer chips
const CHIP_GAP: usize = 2;

/// Draw the quiz screen for the current session
pub fn draw(frame: &mut Frame, screen: &QuizScreen, theme: &Theme) {
    let area = frame.area();
    fill_background(frame, area, theme);

    let view = screen.controller.view();
    match &view.phase {
        ViewPhase::Loading => draw_loading(frame, area, theme),
        ViewPhase::Error { message, retryable } => {
            draw_error(frame, area, &view, message, *retryable, theme)
        }
        ViewPhase::InProgress | ViewPhase::Revealed(_) => {
            let [cards_area, footer_area] =
                Layout::vertical([Constraint::Min(3), Constraint::Length(FOOTER_HEIGHT)])
                    .areas(area);
            draw_cards(frame, cards_area, &view, screen.cursor, theme);
            draw_footer(frame, footer_area, &view, screen.notice.as_deref(), theme);
        }
    }
}

/// Draw loading state
fn draw_loading(frame: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![Line::from(Span::styled(
        "Loading...",
        Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
    ))];
    draw_centered(frame, area, lines, theme);
}

/// Draw error state
fn draw_error(
    frame: &mut Frame,
    area: Rect,
    view: &QuizView,
    message: &str,
    retryable: bool,
    theme: &Theme,
) {
    let panel = centered_rect(70, 50, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.error))
        .style(Style::default().bg(theme.bg_primary));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let lines = vec![
        Line::from(Span::styled(
            view.status(),
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(message.to_string(), Style::default().fg(theme.fg_muted))),
        Line::from(""),
        Line::from(Span::styled(error_hint(retryable), Style::default().fg(theme.fg_muted))),
    ];
    draw_centered(frame, inner, lines, theme);
}

/// Key hints under an error message
fn error_hint(retryable: bool) -> &'static str {
    if retryable {
        "[Enter] Try again    [Esc] Back to start    [q] Quit"
    } else {
        "[Enter] Back to start    [q] Quit"
    }
}

/// Draw every question card, scrolled so the focused card is visible
fn draw_cards(frame: &mut Frame, area: Rect, view: &QuizView, cursor: QuizCursor, theme: &Theme) {
    let width = (area.width as usize).saturating_sub(GUTTER).max(1);
    let revealed = matches!(view.phase, ViewPhase::Revealed(_));
    let in_progress = view.phase == ViewPhase::InProgress;

    let mut lines = Vec::new();
    let mut focus = (0, 0);

    for (index, question) in view.questions.iter().enumerate() {
        let focused = index == cursor.question;
        let focused_answer = (focused && in_progress).then_some(cursor.answer);

        let start = lines.len();
        for line in card_lines(question, focused_answer, revealed, width, theme) {
            lines.push(with_gutter(line, focused, theme));
        }
        if focused {
            focus = (start, lines.len());
        }

        lines.push(Line::from(Span::styled(
            "\u{2500}".repeat(area.width as usize),
            Style::default().fg(theme.border),
        )));
    }

    let offset = scroll_offset(focus.0, focus.1, lines.len(), area.height as usize);
    let para = Paragraph::new(lines)
        .style(Style::default().bg(theme.bg_primary))
        .scroll((offset as u16, 0));
    frame.render_widget(para, area);
}

/// Lines of one question card (without gutter)
fn card_lines(
    question: &QuestionView,
    focused_answer: Option<usize>,
    revealed: bool,
    width: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];

    if let Some(subtitle) = &question.subtitle {
        lines.push(Line::from(Span::styled(
            truncate(subtitle, width),
            Style::default().fg(theme.fg_muted),
        )));
    }

    let question_style = Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD);
    for row in textwrap::wrap(&question.text, width) {
        lines.push(Line::from(Span::styled(row.into_owned(), question_style)));
    }
    lines.push(Line::from(""));

    let labels: Vec<String> =
        question.answers.iter().map(|answer| chip_label(&answer.text, width)).collect();
    let widths: Vec<usize> = labels.iter().map(|label| display_width(label)).collect();

    for row in chip_rows(&widths, width, CHIP_GAP) {
        let mut spans = Vec::new();
        for (n, index) in row.into_iter().enumerate() {
            if n > 0 {
                spans.push(Span::raw(" ".repeat(CHIP_GAP)));
            }
            let mut style = chip_style(&question.answers[index], revealed, theme);
            if focused_answer == Some(index) {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            spans.push(Span::styled(labels[index].clone(), style));
        }
        lines.push(Line::from(spans));
    }

    lines
}

/// Prefix a card line with the focus marker column
fn with_gutter(line: Line<'static>, focused: bool, theme: &Theme) -> Line<'static> {
    let marker = if focused {
        Span::styled("\u{258e} ", Style::default().fg(theme.border_focused))
    } else {
        Span::raw("  ")
    };
    let mut spans = vec![marker];
    spans.extend(line.spans);
    Line::from(spans)
}

/// Style of an answer chip
fn chip_style(answer: &AnswerView, revealed: bool, theme: &Theme) -> Style {
    if revealed {
        return match answer.reveal {
            Some(RevealColor::Correct) => {
                Style::default().fg(theme.answer_text).bg(theme.answer_correct)
            }
            Some(RevealColor::Incorrect) => {
                Style::default().fg(theme.answer_text).bg(theme.answer_incorrect)
            }
            None => Style::default().fg(theme.fg_muted).bg(theme.answer_idle),
        };
    }

    if answer.selected {
        Style::default().fg(theme.fg_primary).bg(theme.answer_selected).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg_secondary).bg(theme.answer_idle)
    }
}

/// Padded chip text, truncated so it never exceeds `width`
fn chip_label(text: &str, width: usize) -> String {
    truncate(&format!(" {} ", text), width)
}

/// Cut `text` to at most `width` display columns, marking the cut with an ellipsis
fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }

    let mut result = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = display_width(c.encode_utf8(&mut [0; 4]));
        if used + w + 1 > width {
            break;
        }
        result.push(c);
        used += w;
    }
    result.push('\u{2026}');
    result
}

/// Group chips into rows no wider than `max_width`, preserving order
///
/// Returns chip indices per row. A chip wider than the row gets a row of its own.
fn chip_rows(widths: &[usize], max_width: usize, gap: usize) -> Vec<Vec<usize>> {
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    let mut used = 0;

    for (index, &width) in widths.iter().enumerate() {
        let needed = if current.is_empty() { width } else { used + gap + width };
        if !current.is_empty() && needed > max_width {
            rows.push(std::mem::take(&mut current));
            used = width;
        } else {
            used = needed;
        }
        current.push(index);
    }

    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

/// First visible line so that lines `start..end` fit in `height` rows
fn scroll_offset(start: usize, end: usize, total: usize, height: usize) -> usize {
    if total <= height {
        return 0;
    }
    let max = total - height;
    if end - start >= height {
        return start.min(max);
    }
    // Keep the card near the top but show a little of the previous one
    end.saturating_sub(height).max(start.saturating_sub(1)).min(max)
}

/// Draw the status line, submit/play-again button and hints
fn draw_footer(
    frame: &mut Frame,
    area: Rect,
    view: &QuizView,
    notice: Option<&str>,
    theme: &Theme,
) {
    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(area.width as usize),
        Style::default().fg(theme.border),
    ));

    let (button, enabled) = match view.phase {
        ViewPhase::Revealed(_) => (" Play again ", true),
        _ => (" Check answers ", view.can_submit),
    };
    let button_style = if enabled {
        Style::default().fg(theme.bg_primary).bg(theme.accent_primary).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg_muted).bg(theme.bg_secondary)
    };
    let status_style = match view.phase {
        ViewPhase::Revealed(_) => Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        _ => Style::default().fg(theme.fg_primary),
    };

    let status = Line::from(vec![
        Span::styled(format!(" {}  ", view.status()), status_style),
        Span::styled(button, button_style),
    ]);

    let hint = match (notice, &view.phase) {
        (Some(notice), _) => Line::from(Span::styled(
            format!(" {}", notice),
            Style::default().fg(theme.error),
        )),
        (None, ViewPhase::Revealed(_)) => Line::from(Span::styled(
            " [j/k] Review    [Enter] Play again    [q] Quit",
            Style::default().fg(theme.fg_muted),
        )),
        (None, _) => Line::from(Span::styled(
            " [j/k] Question    [h/l] Answer    [Enter] Select    [s] Check answers    [Esc] Home",
            Style::default().fg(theme.fg_muted),
        )),
    };

    let para = Paragraph::new(vec![separator, status, hint])
        .style(Style::default().bg(theme.bg_primary));
    frame.render_widget(para, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{OptionId, QuestionId};

    fn answer(selected: bool, reveal: Option<RevealColor>) -> AnswerView {
        let question = QuestionId::new("q");
        AnswerView {
            id: OptionId::for_position(&question, 0),
            text: "Paris".into(),
            selected,
            reveal,
        }
    }

    #[test]
    fn chips_fit_on_one_row() {
        assert_eq!(chip_rows(&[5, 5, 5], 20, 2), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn chips_wrap_in_order() {
        assert_eq!(chip_rows(&[8, 8, 8, 3], 20, 2), vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn oversized_chip_gets_own_row() {
        assert_eq!(chip_rows(&[4, 30, 4], 20, 2), vec![vec![0], vec![1], vec![2]]);
        assert!(chip_rows(&[], 20, 2).is_empty());
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd\u{2026}");
    }

    #[test]
    fn chip_label_is_padded() {
        assert_eq!(chip_label("Yes", 20), " Yes ");
    }

    #[test]
    fn no_scroll_when_everything_fits() {
        assert_eq!(scroll_offset(10, 15, 20, 30), 0);
    }

    #[test]
    fn scroll_brings_focused_card_into_view() {
        // Card at lines 40..48 of 60, 20 rows visible
        let offset = scroll_offset(40, 48, 60, 20);
        assert!(offset <= 40);
        assert!(offset + 20 >= 48);
    }

    #[test]
    fn scroll_never_passes_end() {
        assert_eq!(scroll_offset(55, 60, 60, 20), 40);
    }

    #[test]
    fn error_hint_offers_retry_only_when_retryable() {
        assert!(error_hint(true).starts_with("[Enter] Try again"));
        assert!(error_hint(false).starts_with("[Enter] Back to start"));
    }

    #[test]
    fn focused_gutter_uses_focus_border_color() {
        let theme = Theme::default();
        let focused = with_gutter(Line::from("Q?"), true, &theme);
        assert_eq!(focused.spans[0].style.fg, Some(theme.border_focused));
        assert_eq!(focused.spans.len(), 2);

        let plain = with_gutter(Line::from("Q?"), false, &theme);
        assert_eq!(plain.spans[0].content, "  ");
    }

    #[test]
    fn selected_chip_uses_selection_color() {
        let theme = Theme::default();
        let style = chip_style(&answer(true, None), false, &theme);
        assert_eq!(style.bg, Some(theme.answer_selected));
    }

    #[test]
    fn revealed_chips_use_result_colors() {
        let theme = Theme::default();
        let wrong = chip_style(&answer(true, Some(RevealColor::Incorrect)), true, &theme);
        assert_eq!(wrong.bg, Some(theme.answer_incorrect));
        let right = chip_style(&answer(false, Some(RevealColor::Correct)), true, &theme);
        assert_eq!(right.bg, Some(theme.answer_correct));
        let other = chip_style(&answer(false, None), true, &theme);
        assert_eq!(other.fg, Some(theme.fg_muted));
    }
}
