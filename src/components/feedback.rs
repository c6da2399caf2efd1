//! Customer feedback form

use crate::action::Action;
use crate::components::button::{render_button_row, Button};
use crate::components::{HitMap, Palette};
use crate::model::ui::UiState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Visible rows of the text area
pub const TEXTAREA_ROWS: u16 = 4;

const PLACEHOLDER: &str = "Your feedback...";

/// Break `text` into lines no wider than `width` cells
///
/// Words are kept whole where possible; a word longer than a line is split.
/// Explicit newlines always start a new line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split(' ') {
            let sep = usize::from(!current.is_empty());
            if current.width() + sep + word.width() <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            for c in word.chars() {
                if !current.is_empty() && current.width() + c.width().unwrap_or(0) > width {
                    lines.push(std::mem::take(&mut current));
                }
                current.push(c);
            }
        }
        lines.push(current);
    }

    lines
}

pub fn render_feedback(
    frame: &mut Frame,
    area: Rect,
    state: &UiState,
    editing: bool,
    palette: &Palette,
    hit_map: &mut HitMap,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(TEXTAREA_ROWS + 2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled("Customer Feedback", palette.heading()))
            .alignment(Alignment::Center),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            "We value your feedback. Let us know how we can improve.",
            palette.muted_style(),
        ))
        .alignment(Alignment::Center),
        chunks[1],
    );

    let form_width = chunks[3].width.saturating_sub(4).min(80);
    let form_x = chunks[3].x + (chunks[3].width - form_width) / 2;
    let textarea = Rect::new(form_x, chunks[3].y, form_width, chunks[3].height);
    render_textarea(frame, textarea, &state.user_feedback, editing, palette);
    hit_map.register(textarea, Action::FocusFeedback);

    let button = if state.is_feedback_submitted {
        Button::new("Thank you!", Action::SubmitFeedback).disabled(true)
    } else {
        Button::new("Submit Feedback", Action::SubmitFeedback)
    };
    render_button_row(frame, chunks[4], &[button], Alignment::Center, palette, hit_map);
}

fn render_textarea(frame: &mut Frame, area: Rect, text: &str, editing: bool, palette: &Palette) {
    let border = if editing { palette.accent } else { palette.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(palette.raised));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = if text.is_empty() && !editing {
        vec![Line::from(Span::styled(PLACEHOLDER, palette.muted_style()))]
    } else {
        // Leave room for the cursor and keep the tail of long input in view
        let wrapped = wrap_text(text, usize::from(inner.width.saturating_sub(1)));
        let skip = wrapped.len().saturating_sub(usize::from(inner.height));
        let last = wrapped.len().saturating_sub(1);
        wrapped
            .into_iter()
            .enumerate()
            .skip(skip)
            .map(|(idx, line)| {
                let mut spans = vec![Span::styled(line, Style::default().fg(palette.text))];
                if editing && idx == last {
                    spans.push(Span::styled(
                        "▏",
                        Style::default().fg(palette.accent).add_modifier(Modifier::SLOW_BLINK),
                    ));
                }
                Line::from(spans)
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ui::{FieldUpdate, Theme};
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_wrap_text_keeps_words_together() {
        assert_eq!(
            wrap_text("great dashboard but slow export", 12),
            vec!["great", "dashboard", "but slow", "export"]
        );
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_text_honours_newlines() {
        assert_eq!(wrap_text("one\ntwo", 20), vec!["one", "two"]);
        assert_eq!(wrap_text("", 20), vec![""]);
    }

    #[test]
    fn test_wrap_text_counts_wide_characters() {
        assert_eq!(wrap_text("测量测量", 4), vec!["测量", "测量"]);
    }

    #[test]
    fn test_submitted_button_is_not_clickable() {
        let mut terminal = Terminal::new(TestBackend::new(100, 12)).unwrap();
        let palette = Palette::for_theme(Theme::Dark);
        let mut state = UiState::default();
        state.set(FieldUpdate::IsFeedbackSubmitted(true));
        let mut hit_map = HitMap::new();

        terminal
            .draw(|frame| {
                render_feedback(frame, frame.area(), &state, false, &palette, &mut hit_map);
            })
            .unwrap();

        // only the text area remains clickable
        assert_eq!(hit_map.len(), 1);
        assert_eq!(hit_map.action_at(50, 5), Some(Action::FocusFeedback));

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Thank you!"));
        assert!(text.contains("Your feedback..."));
    }
}
