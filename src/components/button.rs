//! Clickable button rows

use crate::action::Action;
use crate::components::{HitMap, Palette};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

const BUTTON_GAP: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Ghost,
}

#[derive(Debug, Clone)]
pub struct Button {
    pub label: String,
    pub action: Action,
    pub variant: ButtonVariant,
    pub disabled: bool,
}

impl Button {
    pub fn new(label: impl Into<String>, action: Action) -> Self {
        Self {
            label: label.into(),
            action,
            variant: ButtonVariant::Primary,
            disabled: false,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Rendered width including one cell of padding on each side
    pub fn width(&self) -> u16 {
        (self.label.width() + 2) as u16
    }

    fn style(&self, palette: &Palette) -> Style {
        let style = match self.variant {
            ButtonVariant::Primary => Style::default()
                .fg(palette.on_primary)
                .bg(palette.primary_bg)
                .add_modifier(Modifier::BOLD),
            ButtonVariant::Secondary => Style::default().fg(palette.text).bg(palette.raised),
            ButtonVariant::Ghost => Style::default().fg(palette.text),
        };
        if self.disabled {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }
}

/// Total width of a row of buttons, gaps included
pub fn row_width(buttons: &[Button]) -> u16 {
    let labels: u16 = buttons.iter().map(Button::width).sum();
    labels + BUTTON_GAP * buttons.len().saturating_sub(1) as u16
}

/// Lay buttons out on the first line of `area` and register their click targets
///
/// Buttons that do not fit are clipped or dropped. Disabled buttons are drawn
/// but not clickable.
pub fn render_button_row(
    frame: &mut Frame,
    area: Rect,
    buttons: &[Button],
    alignment: Alignment,
    palette: &Palette,
    hit_map: &mut HitMap,
) {
    if area.height == 0 {
        return;
    }

    let total = row_width(buttons).min(area.width);
    let mut x = match alignment {
        Alignment::Left => area.x,
        Alignment::Center => area.x + (area.width - total) / 2,
        Alignment::Right => area.x + (area.width - total),
    };

    for button in buttons {
        if x >= area.right() {
            break;
        }
        let width = button.width().min(area.right() - x);
        let rect = Rect::new(x, area.y, width, 1);

        let label = Paragraph::new(Span::styled(
            format!(" {} ", button.label),
            button.style(palette),
        ));
        frame.render_widget(label, rect);

        if !button.disabled {
            hit_map.register(rect, button.action);
        }
        x = x.saturating_add(width + BUTTON_GAP);
    }
}
