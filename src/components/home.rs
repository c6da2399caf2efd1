//! Home component - the landing page
//!
//! Owns scroll position, feedback editing mode and the highlighted entry of
//! the compact menu. Everything else lives in `UiState`.

use crate::action::Action;
use crate::component::Component;
use crate::components::feedback::render_feedback;
use crate::components::footer::render_footer;
use crate::components::header::{menu_entries, render_header, render_mobile_menu};
use crate::components::hero::render_hero;
use crate::components::layout::{calculate_page_layout, is_compact};
use crate::components::showcase::render_showcase;
use crate::components::solutions::render_solutions;
use crate::components::{HitMap, Palette};
use crate::model::catalog::ServiceKey;
use crate::model::ui::{Section, UiState};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

// ═══════════════════════════════════════════════════════════════════════════════
// Home Component
// ═══════════════════════════════════════════════════════════════════════════════

pub struct HomeComponent {
    /// Topmost visible section
    pub first_section: Section,

    /// Whether keys go to the feedback text area
    pub editing_feedback: bool,

    /// Highlighted entry of the compact menu
    pub menu_selected: usize,

    /// Whether the last frame used the compact layout
    pub compact: bool,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        Self {
            first_section: Section::Hero,
            editing_feedback: false,
            menu_selected: 0,
            compact: false,
        }
    }

    pub fn scroll_down(&mut self) {
        self.first_section = self.first_section.next();
    }

    pub fn scroll_up(&mut self) {
        self.first_section = self.first_section.previous();
    }

    pub fn jump_to(&mut self, section: Section) {
        self.first_section = section;
    }

    pub fn menu_up(&mut self) {
        self.menu_selected = self.menu_selected.saturating_sub(1);
    }

    pub fn menu_down(&mut self) {
        let last = menu_entries().len().saturating_sub(1);
        self.menu_selected = (self.menu_selected + 1).min(last);
    }

    /// Keys while the compact menu is open
    pub fn handle_menu_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MenuUp),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MenuDown),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::MenuPick(self.menu_selected)),
            KeyCode::Esc | KeyCode::Char('m') => Some(Action::SetMenuOpen(false)),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            _ => None,
        };
        Ok(action)
    }

    /// Keys while the feedback text area has focus
    fn handle_editing_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => Some(Action::BlurFeedback),
            KeyCode::Enter => Some(Action::SubmitFeedback),
            KeyCode::Backspace => Some(Action::FeedbackBackspace),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::FeedbackInput(c))
            }
            _ => None,
        }
    }
}

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.editing_feedback {
            return Ok(self.handle_editing_key_event(key));
        }

        let action = match key.code {
            // Page navigation
            KeyCode::Char('j') | KeyCode::Down | KeyCode::PageDown => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up | KeyCode::PageUp => Some(Action::ScrollUp),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::JumpTo(Section::Hero)),
            KeyCode::Char('G') | KeyCode::End => Some(Action::JumpTo(Section::Footer)),
            KeyCode::Char('e') => Some(Action::JumpTo(Section::Solutions)),
            KeyCode::Char('m') => Some(Action::ToggleMenu),

            // Solutions
            KeyCode::Tab | KeyCode::Right => Some(Action::NextTab),
            KeyCode::BackTab | KeyCode::Left => Some(Action::PrevTab),
            KeyCode::Char(c @ '1'..='3') => {
                let idx = (c as usize) - ('1' as usize);
                ServiceKey::all().get(idx).copied().map(Action::SelectTab)
            }
            KeyCode::Char('c') => Some(Action::ToggleChartType),

            // Demo, feedback, theme
            KeyCode::Char('d') | KeyCode::Enter => Some(Action::OpenDemo),
            KeyCode::Char('f') | KeyCode::Char('i') => Some(Action::FocusFeedback),
            KeyCode::Char('t') => Some(Action::ToggleTheme),

            // Modals
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),

            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ScrollDown => self.scroll_down(),
            Action::ScrollUp => self.scroll_up(),
            Action::JumpTo(section) => self.jump_to(section),
            Action::MenuUp => self.menu_up(),
            Action::MenuDown => self.menu_down(),
            Action::FocusFeedback => {
                self.editing_feedback = true;
                self.jump_to(Section::Feedback);
            }
            Action::BlurFeedback => self.editing_feedback = false,
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_page which takes full context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the page
pub struct PageRenderContext<'a> {
    pub state: &'a UiState,
    pub palette: &'a Palette,
    pub status_message: Option<&'a str>,
}

/// Draw the page and rebuild the click map
pub fn draw_page(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    ctx: &PageRenderContext,
    hit_map: &mut HitMap,
) -> Result<()> {
    let palette = ctx.palette;
    let state = ctx.state;
    hit_map.clear();

    home.compact = is_compact(area.width);
    let menu_open = home.compact && state.menu_open;
    let menu_rows = menu_open.then(|| menu_entries().len() as u16);
    let layout = calculate_page_layout(area, home.first_section, home.compact, menu_rows);

    frame.render_widget(Block::default().style(palette.base()), area);

    render_header(
        frame,
        layout.header,
        palette,
        home.compact,
        state,
        hit_map,
    );

    for (section, rect) in &layout.sections {
        match section {
            Section::Hero => render_hero(frame, *rect, palette, hit_map),
            Section::Solutions => {
                render_solutions(frame, *rect, state, palette, home.compact, hit_map)
            }
            Section::Showcase => render_showcase(frame, *rect, state, palette),
            Section::Feedback => {
                render_feedback(frame, *rect, state, home.editing_feedback, palette, hit_map)
            }
            Section::Footer => render_footer(frame, *rect, palette),
        }
    }

    // Drawn after the sections so its entries sit on top in the hit map
    if let Some(menu_area) = layout.menu {
        render_mobile_menu(frame, menu_area, home.menu_selected, palette, hit_map);
    }

    render_status_bar(frame, layout.status, home, ctx);
    render_help_bar(frame, layout.help, home, menu_open, palette);

    Ok(())
}

fn render_status_bar(frame: &mut Frame, area: Rect, home: &HomeComponent, ctx: &PageRenderContext) {
    let palette = ctx.palette;
    let state = ctx.state;

    let mut spans = vec![
        Span::styled(
            " MetrologyAI ",
            Style::default()
                .fg(palette.on_primary)
                .bg(palette.primary_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            format!("{} {}", state.active_service().icon.glyph(), state.active_service().title),
            Style::default().fg(palette.text),
        ),
        Span::styled(
            format!("  [{}]  {} theme", state.chart_type.label(), state.theme.name()),
            palette.muted_style(),
        ),
    ];

    if home.editing_feedback {
        spans.push(Span::styled("  ✎ writing feedback", Style::default().fg(palette.accent)));
    }

    if let Some(status) = ctx.status_message {
        spans.push(Span::styled(format!("  {} ", status), Style::default().fg(palette.warning)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.surface)),
        area,
    );
}

fn render_help_bar(
    frame: &mut Frame,
    area: Rect,
    home: &HomeComponent,
    menu_open: bool,
    palette: &Palette,
) {
    let key = |k: &'static str| {
        Span::styled(k, Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
    };
    let label = |l: &'static str| Span::styled(l, palette.muted_style());

    let help_spans = if home.editing_feedback {
        vec![
            key(" Esc "),
            label("Stop editing  "),
            key(" Enter "),
            label("Submit  "),
            key(" ⌫ "),
            label("Delete"),
        ]
    } else if menu_open {
        vec![
            key(" ↑↓ "),
            label("Move  "),
            key(" Enter "),
            label("Open  "),
            key(" Esc "),
            label("Close menu"),
        ]
    } else {
        vec![
            key(" q "),
            label("Quit "),
            key(" j/k "),
            label("Scroll "),
            key(" Tab "),
            label("Service "),
            key(" c "),
            label("Chart "),
            key(" d "),
            label("Demo "),
            key(" f "),
            label("Feedback "),
            key(" t "),
            label("Theme "),
            key(" ? "),
            label("Help"),
        ]
    };

    frame.render_widget(Paragraph::new(Line::from(help_spans)), area);
}
