//! Page footer

use crate::components::Palette;
use crate::model::catalog::Icon;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Contact Us"];

/// Footer links are not wired to anything
pub fn render_footer(frame: &mut Frame, area: Rect, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.surface));

    let mut links = Vec::new();
    for (idx, link) in LINKS.iter().enumerate() {
        if idx > 0 {
            links.push(Span::raw("    "));
        }
        links.push(Span::styled(
            *link,
            palette.muted_style().add_modifier(Modifier::UNDERLINED),
        ));
    }

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{} ", Icon::Activity.glyph()), Style::default().fg(palette.accent)),
            Span::styled("MetrologyAI Enterprise", palette.heading()),
        ]),
        Line::from(Span::styled(
            "© 2025 MetrologyAI. Enterprise-grade metrology intelligence.",
            palette.muted_style(),
        )),
        Line::from(""),
        Line::from(links),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        area,
    );
}
