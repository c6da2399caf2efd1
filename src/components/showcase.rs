//! Model showcase - the carousel with pointer tilt

use crate::components::Palette;
use crate::model::catalog::{ModelEntry, MODELS};
use crate::model::ui::UiState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const CARD_HEIGHT: u16 = 5;

/// Degrees of tilt per cell of card displacement
const DEGREES_PER_CELL: f64 = 5.0;

/// Move `rect` by (`dx`, `dy`) cells, kept inside `bounds`
fn offset_rect(rect: Rect, dx: i32, dy: i32, bounds: Rect) -> Rect {
    let shift = |pos: u16, delta: i32, len: u16, lo: u16, hi: u16| -> u16 {
        let max = i32::from(hi.saturating_sub(len).max(lo));
        (i32::from(pos) + delta).clamp(i32::from(lo), max) as u16
    };

    Rect {
        x: shift(rect.x, dx, rect.width, bounds.left(), bounds.right()),
        y: shift(rect.y, dy, rect.height, bounds.top(), bounds.bottom()),
        ..rect
    }
}

/// Card displacement in cells for the current tilt
fn tilt_offset(state: &UiState) -> (i32, i32) {
    (
        (state.rotation_y / DEGREES_PER_CELL).round() as i32,
        (state.rotation_x / DEGREES_PER_CELL).round() as i32,
    )
}

fn model_card<'a>(model: &'a ModelEntry, active: bool, palette: &Palette) -> Paragraph<'a> {
    let (border_style, border_type) = if active {
        (
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
            BorderType::Thick,
        )
    } else {
        (Style::default().fg(palette.border), BorderType::Rounded)
    };

    let lines = vec![
        Line::from(Span::styled(model.name, palette.heading())),
        Line::from(vec![
            Span::styled("Accuracy ", palette.muted_style()),
            Span::styled(
                format!("{:.1}%", model.accuracy),
                Style::default().fg(palette.positive),
            ),
        ]),
        Line::from(Span::styled(model.data_points, palette.muted_style())),
    ];

    Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style)
            .style(Style::default().bg(if active { palette.raised } else { palette.surface })),
    )
}

pub fn render_showcase(frame: &mut Frame, area: Rect, state: &UiState, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled("AI Model Showcase", palette.heading()))
            .alignment(Alignment::Center),
        chunks[0],
    );

    let stage = chunks[2].inner(ratatui::layout::Margin {
        vertical: 0,
        horizontal: 2,
    });
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(MODELS.iter().map(|_| Constraint::Ratio(1, MODELS.len() as u32)))
        .spacing(2)
        .split(stage);

    let (dx, dy) = tilt_offset(state);
    for (idx, (model, column)) in MODELS.iter().zip(columns.iter()).enumerate() {
        let active = idx == state.active_model;
        let height = CARD_HEIGHT.min(column.height);
        let top = column.y + column.height.saturating_sub(height) / 2;
        let mut card = Rect::new(column.x, top, column.width, height);
        if active {
            card = offset_rect(card, dx, dy, stage);
        }
        frame.render_widget(model_card(model, active, palette), card);
    }

    let readout = Line::from(vec![
        Span::styled("rotX ", palette.muted_style()),
        Span::styled(format!("{:+.1}°", state.rotation_x), Style::default().fg(palette.accent)),
        Span::styled("  rotY ", palette.muted_style()),
        Span::styled(format!("{:+.1}°", state.rotation_y), Style::default().fg(palette.accent)),
    ]);
    frame.render_widget(Paragraph::new(readout).alignment(Alignment::Center), chunks[3]);
}
