//! Header bar and compact navigation menu

use crate::action::Action;
use crate::components::button::{render_button_row, row_width, Button, ButtonVariant};
use crate::components::{HitMap, Palette};
use crate::model::catalog::Icon;
use crate::model::ui::{NavItem, UiState};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Entry of the compact navigation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Nav(NavItem),
    LiveDemo,
}

impl MenuEntry {
    pub fn label(&self) -> &'static str {
        match self {
            MenuEntry::Nav(item) => item.label(),
            MenuEntry::LiveDemo => "Live Demo",
        }
    }

    pub fn action(&self) -> Action {
        match self {
            MenuEntry::Nav(item) => Action::Navigate(*item),
            MenuEntry::LiveDemo => Action::OpenDemo,
        }
    }
}

pub fn menu_entries() -> Vec<MenuEntry> {
    NavItem::all()
        .into_iter()
        .map(MenuEntry::Nav)
        .chain(std::iter::once(MenuEntry::LiveDemo))
        .collect()
}

pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    compact: bool,
    state: &UiState,
    hit_map: &mut HitMap,
) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.surface));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut brand = vec![
        Span::styled(
            format!(" {} ", Icon::Activity.glyph()),
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled("MetrologyAI ", palette.heading()),
        Span::styled(" Enterprise ", palette.badge()),
    ];
    if !state.notifications.is_empty() {
        brand.push(Span::styled(
            format!("  🔔 {}", state.notifications.len()),
            Style::default().fg(palette.warning),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(brand)), inner);

    let buttons = if compact {
        let label = if state.menu_open { "✕ Close" } else { "☰ Menu" };
        vec![Button::new(label, Action::ToggleMenu).variant(ButtonVariant::Ghost)]
    } else {
        let mut buttons: Vec<Button> = NavItem::all()
            .into_iter()
            .map(|item| Button::new(item.label(), Action::Navigate(item)).variant(ButtonVariant::Ghost))
            .collect();
        buttons.push(Button::new("Live Demo ↗", Action::OpenDemo));
        buttons
    };

    let width = row_width(&buttons).min(inner.width);
    let nav_area = Rect::new(inner.right().saturating_sub(width + 1), inner.y, width, 1);
    render_button_row(frame, nav_area, &buttons, Alignment::Right, palette, hit_map);
}

pub fn render_mobile_menu(
    frame: &mut Frame,
    area: Rect,
    selected: usize,
    palette: &Palette,
    hit_map: &mut HitMap,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.surface));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (idx, entry) in menu_entries().into_iter().enumerate() {
        let row = inner.y + idx as u16;
        if row >= inner.bottom() {
            break;
        }
        let rect = Rect::new(inner.x, row, inner.width, 1);

        let style = if idx == selected {
            Style::default()
                .fg(palette.on_primary)
                .bg(palette.primary_bg)
                .add_modifier(Modifier::BOLD)
        } else if entry == MenuEntry::LiveDemo {
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        };
        let marker = if idx == selected { "▶ " } else { "  " };

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(format!("{}{}", marker, entry.label()), style))),
            rect,
        );
        hit_map.register(rect, Action::MenuPick(idx));
    }
}
