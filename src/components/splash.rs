//! Splash screen component
//!
//! Shows the MetrologyAI wordmark briefly before the page appears.

use crate::action::Action;
use crate::component::Component;
use crate::components::Palette;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

const LOGO: [&str; 5] = [
    "█   █ ████ █████ ████   ███  █     ███   ████ █   █     ███  ███",
    "██ ██ █      █   █   █ █   █ █    █   █ █      █ █     █   █  █ ",
    "█ █ █ ███    █   ████  █   █ █    █   █ █  ██   █      █████  █ ",
    "█   █ █      █   █  █  █   █ █    █   █ █   █   █      █   █  █ ",
    "█   █ ████   █   █   █  ███  ████  ███   ███    █      █   █ ███",
];

/// Splash screen component
pub struct SplashComponent {
    /// When the splash screen was shown
    start_time: Option<Instant>,
    /// Duration to show splash before auto-advancing
    duration: Duration,
    pub palette: Palette,
}

impl SplashComponent {
    pub fn new(palette: Palette) -> Self {
        Self {
            start_time: None,
            duration: Duration::from_millis(1500),
            palette,
        }
    }

    /// Check if splash duration has elapsed
    pub fn is_complete(&self) -> bool {
        self.start_time
            .map(|t| t.elapsed() >= self.duration)
            .unwrap_or(false)
    }

    /// Logo rows with a left-to-right accent gradient
    fn logo_lines(&self) -> Vec<Line<'static>> {
        let width = LOGO[0].width().max(2) - 1;
        LOGO.iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .chars()
                    .enumerate()
                    .map(|(col, c)| {
                        let color = self.palette.gradient(col as f64 / width as f64);
                        Span::styled(c.to_string(), Style::default().fg(color))
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

impl Component for SplashComponent {
    fn init(&mut self) -> Result<()> {
        self.start_time = Some(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Any key press skips the splash screen
        match key.code {
            KeyCode::Char('q') => Ok(Some(Action::ForceQuit)),
            _ => Ok(Some(Action::SplashComplete)),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick && self.is_complete() {
            return Ok(Some(Action::SplashComplete));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let palette = self.palette;
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(palette.base()), area);

        let logo_height = LOGO.len() as u16;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(area.height.saturating_sub(logo_height + 4) / 2),
                Constraint::Length(logo_height),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(self.logo_lines()).alignment(Alignment::Center),
            chunks[1],
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    "MetrologyAI ",
                    Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" Enterprise ", palette.badge()),
            ]))
            .alignment(Alignment::Center),
            chunks[3],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Next-generation metrology intelligence",
                palette.muted_style(),
            ))
            .alignment(Alignment::Center),
            chunks[4],
        );

        Ok(())
    }
}
