//! Help dialog component
//!
//! Displays all keyboard shortcuts available on the page.

use crate::action::Action;
use crate::component::Component;
use crate::components::Palette;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Help dialog showing all keyboard shortcuts
pub struct HelpDialog {
    pub scroll_offset: usize,
    pub palette: Palette,
}

impl HelpDialog {
    pub fn new(palette: Palette) -> Self {
        Self {
            scroll_offset: 0,
            palette,
        }
    }
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::OpenHelp {
            self.scroll_offset = 0;
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let dialog_area = area.inner(Margin {
            vertical: 3,
            horizontal: 6,
        });
        frame.render_widget(Clear, dialog_area);

        let content = build_help_content(&self.palette);
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(Style::default().fg(self.palette.accent).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(self.palette.accent))
                    .style(Style::default().bg(self.palette.surface)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state = ScrollbarState::new(max_scroll).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

/// Build the help content with all keyboard shortcuts
fn build_help_content(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let section_style = Style::default().fg(palette.warning).add_modifier(Modifier::BOLD);
    let rule_style = Style::default().fg(palette.border);
    let key_style = Style::default().fg(palette.accent).add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(palette.text);

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {} ", title), section_style)));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.len() + 2)),
            rule_style,
        )));
    };

    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:14}", key), key_style),
            Span::styled(description.to_string(), text_style),
        ]));
    };

    add_section(&mut lines, "Page");
    add_shortcut(&mut lines, "j / ↓", "Scroll to next section");
    add_shortcut(&mut lines, "k / ↑", "Scroll to previous section");
    add_shortcut(&mut lines, "g / Home", "Jump to top");
    add_shortcut(&mut lines, "G / End", "Jump to footer");
    add_shortcut(&mut lines, "e", "Explore platform (solutions)");
    add_shortcut(&mut lines, "m", "Toggle navigation menu (narrow terminals)");

    add_section(&mut lines, "Solutions");
    add_shortcut(&mut lines, "Tab / →", "Next service");
    add_shortcut(&mut lines, "Shift+Tab / ←", "Previous service");
    add_shortcut(&mut lines, "1 2 3", "Analysis, Optimization, Reporting");
    add_shortcut(&mut lines, "c", "Toggle 2D/3D dashboard");

    add_section(&mut lines, "Live Demo");
    add_shortcut(&mut lines, "d / Enter", "Open the live analysis demo");
    add_shortcut(&mut lines, "s / Enter", "Start analysis (inside demo)");
    add_shortcut(&mut lines, "Esc / c", "Close the demo");

    add_section(&mut lines, "Feedback");
    add_shortcut(&mut lines, "f / i", "Write feedback");
    add_shortcut(&mut lines, "Enter", "Submit feedback");
    add_shortcut(&mut lines, "Esc", "Stop editing");

    add_section(&mut lines, "General");
    add_shortcut(&mut lines, "t", "Toggle dark/light theme");
    add_shortcut(&mut lines, "?", "Show this help");
    add_shortcut(&mut lines, "q", "Quit / Close dialog");
    add_shortcut(&mut lines, "Ctrl+c", "Quit immediately");

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(palette.muted),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ui::Theme;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_scroll_and_close() {
        let mut dialog = HelpDialog::new(Palette::for_theme(Theme::Dark));
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(dialog.handle_key_event(press(KeyCode::Char('j'))).unwrap(), None);
        assert_eq!(dialog.scroll_offset, 1);
        dialog.handle_key_event(press(KeyCode::Up)).unwrap();
        dialog.handle_key_event(press(KeyCode::Up)).unwrap();
        assert_eq!(dialog.scroll_offset, 0);

        assert_eq!(dialog.handle_key_event(press(KeyCode::Esc)).unwrap(), Some(Action::CloseModal));
    }

    #[test]
    fn test_reopening_resets_scroll() {
        let mut dialog = HelpDialog::new(Palette::for_theme(Theme::Light));
        dialog.scroll_offset = 7;
        dialog.update(Action::OpenHelp).unwrap();
        assert_eq!(dialog.scroll_offset, 0);
    }
}
