//! Live analysis demo dialog
//!
//! Shows the four pipeline stages and the simulated progress. All values
//! come from `UiState`; the dialog itself holds no state.

use crate::action::Action;
use crate::component::Component;
use crate::components::button::{render_button_row, Button, ButtonVariant};
use crate::components::{centered_popup, HitMap, Palette};
use crate::model::catalog::{Icon, ACTIVE_STAGE_INDEX, PIPELINE_STAGES};
use crate::model::ui::UiState;
use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, Paragraph},
    Frame,
};
use std::time::Duration;

/// Half-period of the "Processing..." pulse
const PULSE_INTERVAL_MS: u128 = 500;

/// Whether pulsing elements are in their bright phase at `clock`
pub fn pulse_on(clock: Duration) -> bool {
    (clock.as_millis() / PULSE_INTERVAL_MS) % 2 == 0
}

/// Context needed for rendering the demo dialog
pub struct DemoRenderContext<'a> {
    pub state: &'a UiState,
    pub palette: &'a Palette,
    pub last_run_at: Option<DateTime<Local>>,
    pub clock: Duration,
}

#[derive(Default)]
pub struct DemoDialog;

impl Component for DemoDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('s') | KeyCode::Enter | KeyCode::Char(' ') => Some(Action::StartAnalysis),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('c') => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Needs page state, see draw_with_state
        Ok(())
    }
}

impl DemoDialog {
    pub fn draw_with_state(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        ctx: &DemoRenderContext,
        hit_map: &mut HitMap,
    ) -> Result<()> {
        let palette = ctx.palette;
        let state = ctx.state;
        let pulse = pulse_on(ctx.clock);

        // The page underneath is not clickable while the demo is up
        hit_map.clear();

        let popup = centered_popup(area, 72, 21);
        frame.render_widget(Clear, popup);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.surface))
            .title(Line::from(vec![
                Span::styled(
                    format!(" {} ", Icon::Activity.glyph()),
                    Style::default().fg(palette.accent),
                ),
                Span::styled("Live Analysis Demo ", palette.heading()),
            ]));
        if state.is_analyzing {
            let modifier = if pulse { Modifier::BOLD } else { Modifier::DIM };
            let style = Style::default().fg(palette.accent).add_modifier(modifier);
            block = block.title(
                Line::from(Span::styled(" Processing... ", style)).alignment(Alignment::Right),
            );
        }
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(10),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner.inner(ratatui::layout::Margin {
                vertical: 0,
                horizontal: 2,
            }));

        render_stages(frame, chunks[1], state.is_analyzing && pulse, palette);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(palette.accent).bg(palette.raised))
            .percent(u16::from(state.demo_progress))
            .label(format!("{}%", state.demo_progress));
        frame.render_widget(gauge, chunks[3]);

        let last_run = match ctx.last_run_at {
            Some(at) => format!("Last run completed {}", at.format("%Y-%m-%d %H:%M:%S")),
            None => "No analysis run yet".to_string(),
        };
        frame.render_widget(
            Paragraph::new(Span::styled(last_run, palette.muted_style())),
            chunks[4],
        );

        let start = if state.is_analyzing {
            Button::new("Processing... ›", Action::StartAnalysis).disabled(true)
        } else {
            Button::new("Start Analysis ›", Action::StartAnalysis)
        };
        render_button_row(frame, chunks[6], &[start], Alignment::Left, palette, hit_map);
        render_button_row(
            frame,
            chunks[6],
            &[Button::new("Close", Action::CloseModal).variant(ButtonVariant::Ghost)],
            Alignment::Right,
            palette,
            hit_map,
        );

        Ok(())
    }
}

/// Two by two grid of stage cards
fn render_stages(frame: &mut Frame, area: Rect, pulse_active: bool, palette: &Palette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(area);

    for (idx, stage) in PIPELINE_STAGES.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .spacing(2)
            .split(rows[idx / 2]);
        let cell = cols[idx % 2];

        let highlighted = idx == ACTIVE_STAGE_INDEX && pulse_active;
        let (border, background) = if highlighted {
            (palette.icon_color(stage.icon), palette.raised)
        } else {
            (palette.border, palette.background)
        };

        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                stage.icon.glyph(),
                Style::default().fg(palette.icon_color(stage.icon)),
            )),
            Line::from(Span::styled(stage.label, Style::default().fg(palette.text))),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(background)),
        );
        frame.render_widget(card, cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ui::{FieldUpdate, Theme};
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(state: &UiState, clock: Duration) -> (String, HitMap) {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let palette = Palette::for_theme(Theme::Dark);
        let mut hit_map = HitMap::new();
        let mut dialog = DemoDialog;

        terminal
            .draw(|frame| {
                let ctx = DemoRenderContext {
                    state,
                    palette: &palette,
                    last_run_at: None,
                    clock,
                };
                dialog
                    .draw_with_state(frame, frame.area(), &ctx, &mut hit_map)
                    .unwrap();
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        (text, hit_map)
    }

    #[test]
    fn test_pulse_alternates_every_half_second() {
        assert!(pulse_on(Duration::from_millis(0)));
        assert!(pulse_on(Duration::from_millis(499)));
        assert!(!pulse_on(Duration::from_millis(500)));
        assert!(pulse_on(Duration::from_millis(1000)));
    }

    #[test]
    fn test_keys() {
        let mut dialog = DemoDialog;
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(dialog.handle_key_event(press(KeyCode::Char('s'))).unwrap(), Some(Action::StartAnalysis));
        assert_eq!(dialog.handle_key_event(press(KeyCode::Esc)).unwrap(), Some(Action::CloseModal));
    }

    #[test]
    fn test_idle_dialog() {
        let (text, hit_map) = render(&UiState::default(), Duration::ZERO);
        assert!(text.contains("Live Analysis Demo"));
        assert!(text.contains("Start Analysis"));
        assert!(!text.contains("Processing..."));
        for stage in PIPELINE_STAGES.iter() {
            assert!(text.contains(stage.label));
        }
        assert_eq!(hit_map.len(), 2);
    }

    #[test]
    fn test_running_dialog_disables_start() {
        let mut state = UiState::default();
        state.set(FieldUpdate::IsAnalyzing(true));
        state.set(FieldUpdate::DemoProgress(50));

        let (text, hit_map) = render(&state, Duration::from_millis(600));
        assert!(text.contains("Processing..."));
        assert!(text.contains("50%"));
        // only Close is clickable
        assert_eq!(hit_map.len(), 1);
    }
}
