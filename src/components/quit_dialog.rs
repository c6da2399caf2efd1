//! Quit confirmation dialog component

use crate::action::Action;
use crate::component::Component;
use crate::components::{centered_popup, Palette};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// Quit confirmation dialog
pub struct QuitDialog {
    pub palette: Palette,
}

impl QuitDialog {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

impl Component for QuitDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') => Some(Action::ForceQuit),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let palette = &self.palette;
        let popup_area = centered_popup(area, 44, 7);

        frame.render_widget(Clear, popup_area);

        let content = vec![
            Line::from(""),
            Line::from(Span::styled("Leave MetrologyAI?", palette.heading())),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    " y ",
                    Style::default().fg(palette.positive).add_modifier(Modifier::BOLD),
                ),
                Span::styled("Yes, quit  ", Style::default().fg(palette.text)),
                Span::styled(
                    " n/Esc ",
                    Style::default().fg(palette.warning).add_modifier(Modifier::BOLD),
                ),
                Span::styled("Stay", Style::default().fg(palette.text)),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(palette.warning))
                    .style(Style::default().bg(palette.surface))
                    .title(" Quit? ")
                    .title_style(Style::default().fg(palette.warning).add_modifier(Modifier::BOLD)),
            )
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
