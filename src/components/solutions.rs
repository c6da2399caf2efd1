//! Solutions section - tabbed service showcase and analytics dashboard

use crate::action::Action;
use crate::components::button::{render_button_row, Button, ButtonVariant};
use crate::components::{HitMap, Palette};
use crate::model::catalog::{Metric, ServiceEntry, ServiceKey};
use crate::model::ui::{ChartType, UiState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Bar, BarChart, BarGroup, Block, Borders, Paragraph,
    },
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn render_solutions(
    frame: &mut Frame,
    area: Rect,
    state: &UiState,
    palette: &Palette,
    compact: bool,
    hit_map: &mut HitMap,
) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.surface));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let tabs: Vec<Button> = ServiceKey::all()
        .into_iter()
        .map(|key| {
            let entry = crate::model::catalog::service(key);
            let variant = if key == state.active_tab {
                ButtonVariant::Primary
            } else {
                ButtonVariant::Secondary
            };
            Button::new(format!("{} {}", entry.icon.glyph(), entry.title), Action::SelectTab(key))
                .variant(variant)
        })
        .collect();
    render_button_row(frame, chunks[1], &tabs, Alignment::Center, palette, hit_map);

    let content = chunks[3].inner(ratatui::layout::Margin {
        vertical: 0,
        horizontal: 2,
    });
    let columns = if compact {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(16), Constraint::Min(0)])
            .split(content)
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .spacing(4)
            .split(content)
    };

    let entry = state.active_service();
    render_service_detail(frame, columns[0], entry, palette);
    render_dashboard(frame, columns[1], entry, state.chart_type, palette, hit_map);
}

fn render_service_detail(frame: &mut Frame, area: Rect, entry: &ServiceEntry, palette: &Palette) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", entry.icon.glyph()),
                Style::default().fg(palette.icon_color(entry.icon)),
            ),
            Span::styled(entry.title, palette.heading()),
        ]),
        Line::from(Span::styled(entry.description, palette.muted_style())),
        Line::from(""),
    ];

    let width = area.width as usize;
    lines.extend(entry.metrics.iter().map(|m| metric_line(m, width, palette)));
    lines.push(Line::from(""));
    lines.extend(entry.features.iter().map(|feature| {
        Line::from(vec![
            Span::styled(" ✓ ", Style::default().fg(palette.accent)),
            Span::styled(*feature, Style::default().fg(palette.text)),
        ])
    }));

    frame.render_widget(Paragraph::new(lines), area);
}

/// Label on the left, value and trend on the right
fn metric_line<'a>(metric: &'a Metric, width: usize, palette: &Palette) -> Line<'a> {
    let right = format!("{}  {}", metric.value, metric.trend);
    let used = metric.label.width() + right.width() + 2;
    let padding = width.saturating_sub(used);
    let row = Style::default().bg(palette.raised);

    Line::from(vec![
        Span::styled(" ", row),
        Span::styled(metric.label, row.fg(palette.muted)),
        Span::styled(" ".repeat(padding), row),
        Span::styled(metric.value, row.fg(palette.text).add_modifier(Modifier::BOLD)),
        Span::styled("  ", row),
        Span::styled(metric.trend, row.fg(palette.trend_color(metric.trend_direction()))),
        Span::styled(" ", row),
    ])
}

fn render_dashboard(
    frame: &mut Frame,
    area: Rect,
    entry: &ServiceEntry,
    chart_type: ChartType,
    palette: &Palette,
    hit_map: &mut HitMap,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(" Analytics Dashboard ", palette.heading()))
        .style(Style::default().bg(palette.background));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let toggles: Vec<Button> = ChartType::all()
        .into_iter()
        .map(|chart| {
            let variant = if chart == chart_type {
                ButtonVariant::Primary
            } else {
                ButtonVariant::Secondary
            };
            Button::new(chart.label(), Action::SetChartType(chart)).variant(variant)
        })
        .collect();
    render_button_row(frame, chunks[0], &toggles, Alignment::Right, palette, hit_map);

    match chart_type {
        ChartType::TwoD => render_bar_chart(frame, chunks[1], entry.metrics, palette.accent),
        ChartType::ThreeD => render_ring_chart(frame, chunks[1], entry.metrics, palette),
    }
}

/// Metric values scaled into 0..=100 for drawing
fn chart_values(metrics: &[Metric]) -> Vec<u64> {
    metrics
        .iter()
        .map(|m| m.numeric_value().clamp(0.0, 100.0).round() as u64)
        .collect()
}

fn render_bar_chart(frame: &mut Frame, area: Rect, metrics: &[Metric], color: Color) {
    let bar_count = metrics.len().max(1) as u16;
    let bar_width = (area.width.saturating_sub(bar_count + 1) / bar_count).clamp(1, 12);

    let bars: Vec<Bar> = metrics
        .iter()
        .zip(chart_values(metrics))
        .map(|(metric, value)| {
            Bar::default()
                .value(value)
                .label(Line::from(metric.label))
                .text_value(metric.value.to_string())
                .style(Style::default().fg(color))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .max(100);
    frame.render_widget(chart, area);
}

/// Concentric rings with one spoke per metric, the "3D" view
fn render_ring_chart(frame: &mut Frame, area: Rect, metrics: &[Metric], palette: &Palette) {
    let values = chart_values(metrics);
    let total: u64 = values.iter().sum::<u64>().max(1);
    let colors = [palette.accent_alt, palette.accent, palette.positive, palette.warning];

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-60.0, 60.0])
        .y_bounds([-60.0, 60.0])
        .paint(move |ctx| {
            let mut angle = 0.0_f64;
            for (idx, value) in values.iter().enumerate() {
                let color = colors[idx % colors.len()];
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: 12.0 + 10.0 * idx as f64,
                    color,
                });

                angle += *value as f64 / total as f64 * std::f64::consts::TAU;
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: 0.0,
                    x2: 50.0 * angle.cos(),
                    y2: 50.0 * angle.sin(),
                    color,
                });
            }
        });
    frame.render_widget(canvas, area);
}
