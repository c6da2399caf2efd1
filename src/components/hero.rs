//! Hero section

use crate::action::Action;
use crate::components::button::{render_button_row, Button, ButtonVariant};
use crate::components::{HitMap, Palette};
use crate::model::ui::Section;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

const HEADLINE_LEAD: &str = "Next-Generation ";
const HEADLINE_GRADIENT: &str = "Metrology Intelligence";
const SUBTITLE: &str = "Transform industrial measurements into actionable insights with \
                        AI-powered analytics and real-time optimization.";

/// Headline with the gradient half coloured character by character
fn headline(palette: &Palette) -> Line<'static> {
    let mut spans = vec![Span::styled(HEADLINE_LEAD, palette.heading())];
    let count = HEADLINE_GRADIENT.chars().count().max(2) - 1;
    spans.extend(HEADLINE_GRADIENT.chars().enumerate().map(|(idx, c)| {
        Span::styled(
            c.to_string(),
            Style::default()
                .fg(palette.gradient(idx as f64 / count as f64))
                .add_modifier(Modifier::BOLD),
        )
    }));
    Line::from(spans)
}

pub fn render_hero(frame: &mut Frame, area: Rect, palette: &Palette, hit_map: &mut HitMap) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(" Quantum-Enhanced Precision ", palette.badge()))
            .alignment(Alignment::Center),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(headline(palette)).alignment(Alignment::Center),
        chunks[3],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(SUBTITLE, palette.muted_style()))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[4],
    );

    let buttons = [
        Button::new("🔍 Explore Platform", Action::JumpTo(Section::Solutions)),
        Button::new("⚡ Watch Demo", Action::OpenDemo).variant(ButtonVariant::Secondary),
    ];
    render_button_row(frame, chunks[6], &buttons, Alignment::Center, palette, hit_map);
}
