//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! App coordinates the state store, the timer queue and the two drivers that
//! change state over time; it does not draw anything itself.

use crate::action::Action;
use crate::component::Component;
use crate::components::header::menu_entries;
use crate::components::{
    draw_page, DemoDialog, DemoRenderContext, HelpDialog, HitMap, HomeComponent,
    PageRenderContext, Palette, QuitDialog, SplashComponent,
};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::progress::ProgressState;
use crate::model::ui::{AppMode, FieldUpdate};
use crate::model::{AmbientDriver, ProgressDriver, UiState};
use crate::services::{TimerEvent, TimerId, TimerQueue};
use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use log::{debug, info, warn};
use ratatui::{layout::Rect, Frame};
use std::time::{Duration, Instant};

/// How long the "Thank you!" state lasts after submitting feedback
pub const FEEDBACK_RESET_DELAY: Duration = Duration::from_millis(3000);

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// Interaction state of the page
    pub state: UiState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Pending timers, driven by `advance`
    pub timers: TimerQueue,

    /// Simulated analysis progress
    pub progress: ProgressDriver,

    /// Carousel and pointer tilt
    pub ambient: AmbientDriver,

    pub config: Config,

    /// Whether theme changes are written back to the config file
    persist_config: bool,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: Option<String>,

    /// Wall-clock time the last analysis run finished
    pub last_run_at: Option<DateTime<Local>>,

    /// Terminal size in cells, used to map pointer positions
    pub viewport: (u16, u16),

    /// Click targets of the last frame
    pub hit_map: HitMap,

    /// Wall-clock time zero of the timer clock; `None` leaves the clock to `advance`
    epoch: Option<Instant>,

    /// Timer clock, never behind wall time since `epoch`
    pub clock: Duration,

    /// Pending reset of the feedback "Thank you!" state
    feedback_timer: Option<TimerId>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub home: HomeComponent,
    pub demo_dialog: DemoDialog,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create the app from the config file, falling back to defaults
    pub fn new() -> App {
        match Config::load() {
            Ok(config) => {
                let mut app = Self::with_config(config.unwrap_or_default());
                app.persist_config = true;
                app
            }
            Err(e) => {
                // Leave a broken file alone rather than overwrite it on save
                warn!("ignoring config: {:#}", e);
                let mut app = Self::with_config(Config::default());
                app.status_message = Some(format!("Config ignored: {}", e));
                app
            }
        }
    }

    /// Create the app from an explicit config; nothing is written back to disk
    pub fn with_config(config: Config) -> App {
        let palette = Palette::for_theme(config.theme);
        let mode = if config.show_splash {
            AppMode::Splash
        } else {
            AppMode::Running
        };

        App {
            mode,
            state: UiState::new(config.theme, config.start_tab),
            modals: ModalStack::new(),
            timers: TimerQueue::new(),
            progress: ProgressDriver::new(config.progress_variant),
            ambient: AmbientDriver::new(),
            config,
            persist_config: false,
            should_quit: false,
            status_message: None,
            last_run_at: None,
            viewport: (0, 0),
            hit_map: HitMap::new(),
            epoch: Some(Instant::now()),
            clock: Duration::ZERO,
            feedback_timer: None,
            // Components
            splash: SplashComponent::new(palette),
            home: HomeComponent::new(),
            demo_dialog: DemoDialog,
            quit_dialog: QuitDialog::new(palette),
            help_dialog: HelpDialog::new(palette),
        }
    }

    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.state.theme)
    }

    /// Bring the timer clock up to wall time; timers scheduled next use it as their start
    fn sync_clock(&mut self) {
        if let Some(epoch) = self.epoch {
            self.clock = self.clock.max(epoch.elapsed());
        }
    }

    /// Move the timer clock to `now` and apply every timer that fell due
    pub fn advance(&mut self, now: Duration) {
        self.clock = self.clock.max(now);

        for event in self.timers.advance(self.clock) {
            match event {
                TimerEvent::ProgressCheckpoint { run, index } => {
                    if self.progress.on_checkpoint(run, index, &mut self.state)
                        && self.progress.state() == ProgressState::Done
                    {
                        self.last_run_at = Some(Local::now());
                    }
                }
                TimerEvent::FeedbackReset => {
                    self.feedback_timer = None;
                    self.state.set(FieldUpdate::IsFeedbackSubmitted(false));
                }
                TimerEvent::RotateModel => self.ambient.on_rotate(&mut self.state),
            }
        }
    }

    fn mount_page(&mut self) {
        self.mode = AppMode::Running;
        self.ambient.mount(&mut self.timers, self.clock);
    }

    /// Push the current theme into components that keep their own palette
    fn apply_theme(&mut self) {
        let palette = self.palette();
        self.splash.palette = palette;
        self.quit_dialog.palette = palette;
        self.help_dialog.palette = palette;
    }

    fn submit_feedback(&mut self) {
        if self.state.is_feedback_submitted {
            return;
        }
        if self.state.user_feedback.trim().is_empty() {
            debug!("ignoring empty feedback");
            return;
        }

        self.state.set(FieldUpdate::IsFeedbackSubmitted(true));
        if let Some(id) = self.feedback_timer.take() {
            self.timers.cancel(id);
        }
        self.feedback_timer = Some(self.timers.schedule(
            self.clock,
            FEEDBACK_RESET_DELAY,
            TimerEvent::FeedbackReset,
        ));
        self.home.editing_feedback = false;
        info!("feedback submitted ({} chars)", self.state.user_feedback.chars().count());
    }

    fn toggle_theme(&mut self) {
        let theme = self.state.theme.toggled();
        self.state.set(FieldUpdate::Theme(theme));
        self.apply_theme();

        self.config.theme = theme;
        if self.persist_config {
            if let Err(e) = self.config.save() {
                warn!("failed to save config: {:#}", e);
                self.status_message = Some(format!("Could not save theme: {}", e));
            }
        }
    }

    fn close_modal(&mut self) {
        match self.modals.pop() {
            Some(Modal::Demo) => {
                self.state.set(FieldUpdate::ShowDemo(false));
                if self.config.cancel_analysis_on_close {
                    self.progress.cancel(&mut self.state, &mut self.timers);
                }
            }
            Some(_) | None => {}
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.ambient.unmount(&mut self.timers);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        self.sync_clock();
        if self.mode == AppMode::Running {
            self.mount_page();
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Running => {
                if let Some(modal) = self.modals.top().cloned() {
                    self.handle_modal_key_event(&modal, key)
                } else if !self.home.editing_feedback && self.home.compact && self.state.menu_open {
                    self.home.handle_menu_key_event(key)
                } else {
                    self.home.handle_key_event(key)
                }
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.mode == AppMode::Splash {
            return Ok(match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(Action::SplashComplete),
                _ => None,
            });
        }

        let action = match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                Some(Action::PointerMoved(mouse.column, mouse.row))
            }
            MouseEventKind::Down(MouseButton::Left) if self.hit_map.is_empty() => {
                // Nothing drawn yet, or nothing clickable under the top modal
                self.home.editing_feedback.then_some(Action::BlurFeedback)
            }
            MouseEventKind::Down(MouseButton::Left) => {
                match self.hit_map.action_at(mouse.column, mouse.row) {
                    Some(action) => Some(action),
                    None if self.home.editing_feedback => Some(Action::BlurFeedback),
                    None => None,
                }
            }
            MouseEventKind::ScrollDown if self.modals.is_empty() => Some(Action::ScrollDown),
            MouseEventKind::ScrollUp if self.modals.is_empty() => Some(Action::ScrollUp),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if !matches!(action, Action::Tick | Action::PointerMoved(..)) {
            debug!("action: {}", action);
        }
        self.sync_clock();

        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.mode == AppMode::Splash && self.splash.is_complete() {
                    return Ok(Some(Action::SplashComplete));
                }
                self.advance(self.clock);
            }
            Action::Resize(w, h) => {
                self.viewport = (w, h);
            }
            Action::ForceQuit => {
                self.ambient.unmount(&mut self.timers);
                self.timers.clear();
                self.should_quit = true;
                info!("quitting");
            }
            Action::SplashComplete => {
                if self.mode == AppMode::Splash {
                    self.mount_page();
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Solutions
            // ─────────────────────────────────────────────────────────────────
            Action::SelectTab(key) => {
                self.state.set(FieldUpdate::ActiveTab(key));
            }
            Action::NextTab => {
                self.state.set(FieldUpdate::ActiveTab(self.state.active_tab.next()));
            }
            Action::PrevTab => {
                self.state.set(FieldUpdate::ActiveTab(self.state.active_tab.previous()));
            }
            Action::SetChartType(chart) => {
                self.state.set(FieldUpdate::ChartType(chart));
            }
            Action::ToggleChartType => {
                self.state.set(FieldUpdate::ChartType(self.state.chart_type.toggled()));
            }

            // ─────────────────────────────────────────────────────────────────
            // Page Navigation (delegate to HomeComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::ScrollUp | Action::ScrollDown | Action::JumpTo(_) => {
                // The page is locked while the demo is up
                if !self.state.show_demo {
                    self.home.update(action)?;
                }
            }
            Action::Navigate(item) => match item.anchor() {
                Some(section) => {
                    return Ok(Some(Action::JumpTo(section)));
                }
                None => debug!("{} has no section on this page", item.label()),
            },

            // ─────────────────────────────────────────────────────────────────
            // Mobile Menu
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleMenu => {
                return Ok(Some(Action::SetMenuOpen(!self.state.menu_open)));
            }
            Action::SetMenuOpen(open) => {
                if self.state.set(FieldUpdate::MenuOpen(open)) && open {
                    self.home.menu_selected = 0;
                }
            }
            Action::MenuUp | Action::MenuDown => {
                self.home.update(action)?;
            }
            Action::MenuPick(idx) => {
                self.state.set(FieldUpdate::MenuOpen(false));
                return Ok(menu_entries().get(idx).map(|entry| entry.action()));
            }

            // ─────────────────────────────────────────────────────────────────
            // Live Demo
            // ─────────────────────────────────────────────────────────────────
            Action::OpenDemo => {
                if !self.modals.contains(&Modal::Demo) {
                    self.modals.push(Modal::Demo);
                }
                self.state.set(FieldUpdate::ShowDemo(true));
                self.home.editing_feedback = false;
            }
            Action::StartAnalysis => {
                if self.state.show_demo {
                    self.progress.start(&mut self.state, &mut self.timers, self.clock);
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Feedback
            // ─────────────────────────────────────────────────────────────────
            Action::FocusFeedback | Action::BlurFeedback => {
                self.home.update(action)?;
            }
            Action::FeedbackInput(c) => {
                let mut text = self.state.user_feedback.clone();
                text.push(c);
                self.state.set(FieldUpdate::UserFeedback(text));
            }
            Action::FeedbackBackspace => {
                let mut text = self.state.user_feedback.clone();
                if text.pop().is_some() {
                    self.state.set(FieldUpdate::UserFeedback(text));
                }
            }
            Action::SubmitFeedback => self.submit_feedback(),

            // ─────────────────────────────────────────────────────────────────
            // Ambient
            // ─────────────────────────────────────────────────────────────────
            Action::PointerMoved(column, row) => {
                self.ambient.on_pointer(&mut self.state, column, row, self.viewport);
            }
            Action::ToggleTheme => self.toggle_theme(),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.update(action)?;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => self.close_modal(),
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.viewport = (area.width, area.height);

        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area)?,
            AppMode::Running => {
                let palette = self.palette();
                let ctx = PageRenderContext {
                    state: &self.state,
                    palette: &palette,
                    status_message: self.status_message.as_deref(),
                };
                draw_page(frame, area, &mut self.home, &ctx, &mut self.hit_map)?;

                // Bottom to top, so the topmost modal owns the hit map
                let modals: Vec<Modal> = self.modals.iter().cloned().collect();
                for modal in &modals {
                    self.draw_modal(frame, area, modal)?;
                }
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Demo => self.demo_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::Demo => {
                let palette = self.palette();
                let ctx = DemoRenderContext {
                    state: &self.state,
                    palette: &palette,
                    last_run_at: self.last_run_at,
                    clock: self.clock,
                };
                self.demo_dialog
                    .draw_with_state(frame, area, &ctx, &mut self.hit_map)?;
            }
            Modal::QuitConfirm => {
                self.hit_map.clear();
                self.quit_dialog.draw(frame, area)?;
            }
            Modal::Help => {
                self.hit_map.clear();
                self.help_dialog.draw(frame, area)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::{ServiceKey, MODELS};
    use crate::model::progress::ProgressVariant;
    use crate::model::ui::{NavItem, Section, Theme};
    use ratatui::{backend::TestBackend, Terminal};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn test_config() -> Config {
        Config {
            show_splash: false,
            ..Config::default()
        }
    }

    /// App whose clock moves only through `advance`
    fn running_app(config: Config) -> App {
        let mut app = App::with_config(config);
        app.epoch = None;
        app.init().unwrap();
        app
    }

    /// Pretend the app started `elapsed` ago on the wall clock
    fn started_ago(app: &mut App, elapsed: Duration) {
        app.epoch = Some(
            Instant::now()
                .checked_sub(elapsed)
                .expect("monotonic clock has enough history"),
        );
    }

    /// Apply an action and every follow-up it produces
    fn dispatch(app: &mut App, action: Action) {
        let mut next = Some(action);
        while let Some(a) = next {
            next = app.update(a).unwrap();
        }
    }

    fn render(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.draw(frame, frame.area()).unwrap()).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_starts_on_configured_tab_and_theme() {
        let app = App::with_config(Config {
            theme: Theme::Light,
            start_tab: ServiceKey::Reporting,
            ..test_config()
        });
        assert_eq!(app.mode, AppMode::Running);
        assert_eq!(app.state.theme, Theme::Light);
        assert_eq!(app.state.active_service().title, "Advanced Analytics");
    }

    #[test]
    fn test_splash_mounts_ambient_on_complete() {
        let mut app = App::with_config(Config::default());
        app.init().unwrap();
        assert_eq!(app.mode, AppMode::Splash);
        assert!(!app.ambient.is_mounted());

        dispatch(&mut app, Action::SplashComplete);
        assert_eq!(app.mode, AppMode::Running);
        assert!(app.ambient.is_mounted());
    }

    #[test]
    fn test_carousel_period_starts_when_page_appears() {
        let mut app = App::with_config(Config::default());
        app.init().unwrap();
        started_ago(&mut app, ms(1600));

        // Splash is still up on the wall clock; the page mounts afterwards
        dispatch(&mut app, Action::Tick);
        assert!(app.clock >= ms(1600));
        dispatch(&mut app, Action::SplashComplete);
        let mounted_at = app.clock;
        assert!(mounted_at >= ms(1600));

        app.epoch = None;
        app.advance(mounted_at + ms(1500));
        assert_eq!(app.state.active_model, 0);
        app.advance(mounted_at + ms(2999));
        assert_eq!(app.state.active_model, 0);
        app.advance(mounted_at + ms(3000));
        assert_eq!(app.state.active_model, 1);
    }

    #[test]
    fn test_feedback_reset_counts_from_submit_between_ticks() {
        let mut app = running_app(test_config());
        app.advance(ms(1000));
        dispatch(&mut app, Action::FeedbackInput('!'));

        // Submit lands 90ms after the last tick
        started_ago(&mut app, ms(1090));
        dispatch(&mut app, Action::SubmitFeedback);
        let submitted_at = app.clock;
        assert!(submitted_at >= ms(1090));

        app.epoch = None;
        app.advance(submitted_at + ms(2950));
        assert!(app.state.is_feedback_submitted);
        app.advance(submitted_at + ms(3000));
        assert!(!app.state.is_feedback_submitted);
    }

    #[test]
    fn test_analysis_starts_at_wall_time() {
        let mut app = running_app(test_config());
        started_ago(&mut app, ms(700));
        dispatch(&mut app, Action::OpenDemo);
        dispatch(&mut app, Action::StartAnalysis);
        let started_at = app.clock;
        assert!(started_at >= ms(700));

        app.epoch = None;
        app.advance(started_at);
        assert_eq!(app.state.demo_progress, 25);
        app.advance(started_at + ms(499));
        assert_eq!(app.state.demo_progress, 25);
        app.advance(started_at + ms(500));
        assert_eq!(app.state.demo_progress, 50);
    }

    #[test]
    fn test_tick_advances_timers_from_wall_clock() {
        let mut app = running_app(test_config());
        started_ago(&mut app, ms(3100));
        dispatch(&mut app, Action::Tick);
        assert_eq!(app.state.active_model, 1);
    }

    #[test]
    fn test_select_optimization_tab() {
        let mut app = running_app(test_config());
        dispatch(&mut app, Action::SelectTab(ServiceKey::Optimization));

        let entry = app.state.active_service();
        assert_eq!(entry.title, "Smart Optimization");
        let labels: Vec<&str> = entry.metrics.iter().map(|m| m.label).collect();
        assert_eq!(labels, vec!["Efficiency", "Precision", "ROI", "Downtime"]);
    }

    #[test]
    fn test_tab_cycling_wraps() {
        let mut app = running_app(test_config());
        dispatch(&mut app, Action::PrevTab);
        assert_eq!(app.state.active_tab, ServiceKey::Reporting);
        dispatch(&mut app, Action::NextTab);
        assert_eq!(app.state.active_tab, ServiceKey::Analysis);
    }

    #[test]
    fn test_stepped_progress_sequence() {
        let mut app = running_app(test_config());
        app.advance(ms(1000));
        dispatch(&mut app, Action::OpenDemo);
        dispatch(&mut app, Action::StartAnalysis);
        assert!(app.state.is_analyzing);
        assert_eq!(app.state.demo_progress, 0);

        app.advance(ms(1000));
        assert_eq!(app.state.demo_progress, 25);
        app.advance(ms(1499));
        assert_eq!(app.state.demo_progress, 25);
        app.advance(ms(1500));
        assert_eq!(app.state.demo_progress, 50);
        app.advance(ms(2000));
        assert_eq!(app.state.demo_progress, 75);
        assert!(app.state.is_analyzing);
        assert!(app.last_run_at.is_none());

        app.advance(ms(2500));
        assert_eq!(app.state.demo_progress, 100);
        assert!(!app.state.is_analyzing);
        assert!(app.last_run_at.is_some());
    }

    #[test]
    fn test_simplified_progress_jumps_to_done() {
        let mut app = running_app(Config {
            progress_variant: ProgressVariant::Simplified,
            ..test_config()
        });
        dispatch(&mut app, Action::OpenDemo);
        dispatch(&mut app, Action::StartAnalysis);

        app.advance(ms(1999));
        assert_eq!(app.state.demo_progress, 0);
        assert!(app.state.is_analyzing);
        app.advance(ms(2000));
        assert_eq!(app.state.demo_progress, 100);
        assert!(!app.state.is_analyzing);
    }

    #[test]
    fn test_start_while_analyzing_is_ignored() {
        let mut app = running_app(test_config());
        dispatch(&mut app, Action::OpenDemo);
        dispatch(&mut app, Action::StartAnalysis);
        let pending = app.timers.len();

        app.advance(ms(600));
        dispatch(&mut app, Action::StartAnalysis);
        assert_eq!(app.timers.len(), pending - 2);
        assert_eq!(app.state.demo_progress, 50);
    }

    #[test]
    fn test_start_requires_open_demo() {
        let mut app = running_app(test_config());
        dispatch(&mut app, Action::StartAnalysis);
        assert!(!app.state.is_analyzing);
    }

    #[test]
    fn test_rerun_restarts_from_zero() {
        let mut app = running_app(test_config());
        dispatch(&mut app, Action::OpenDemo);
        dispatch(&mut app, Action::StartAnalysis);
        app.advance(ms(1500));
        assert_eq!(app.state.demo_progress, 100);

        dispatch(&mut app, Action::StartAnalysis);
        assert!(app.state.is_analyzing);
        assert_eq!(app.state.demo_progress, 0);
        app.advance(ms(1500));
        assert_eq!(app.state.demo_progress, 25);
    }

    #[test]
    fn test_closing_demo_keeps_run_alive_by_default() {
        let mut app = running_app(test_config());
        dispatch(&mut app, Action::OpenDemo);
        dispatch(&mut app, Action::StartAnalysis);
        app.advance(ms(500));

        dispatch(&mut app, Action::CloseModal);
        assert!(!app.state.show_demo);
        assert!(app.modals.is_empty());
        assert!(app.state.is_analyzing);

        app.advance(ms(1500));
        assert_eq!(app.state.demo_progress, 100);
        assert!(!app.state.is_analyzing);
    }

    #[test]
    fn test_closing_demo_can_cancel_run() {
        let mut app = running_app(Config {
            cancel_analysis_on_close: true,
            ..test_config()
        });
        dispatch(&mut app, Action::OpenDemo);
        dispatch(&mut app, Action::StartAnalysis);
        app.advance(ms(500));
        assert_eq!(app.state.demo_progress, 50);

        dispatch(&mut app, Action::CloseModal);
        assert!(!app.state.is_analyzing);

        app.advance(ms(5000));
        assert_eq!(app.state.demo_progress, 50);
        assert!(app.last_run_at.is_none());
    }

    #[test]
    fn test_feedback_resets_after_exactly_three_seconds() {
        let mut app = running_app(test_config());
        app.advance(ms(1000));
        dispatch(&mut app, Action::FocusFeedback);
        for c in "Great".chars() {
            dispatch(&mut app, Action::FeedbackInput(c));
        }
        dispatch(&mut app, Action::SubmitFeedback);
        assert!(app.state.is_feedback_submitted);
        assert_eq!(app.state.user_feedback, "Great");

        app.advance(ms(3999));
        assert!(app.state.is_feedback_submitted);
        app.advance(ms(4000));
        assert!(!app.state.is_feedback_submitted);
    }

    #[test]
    fn test_blank_feedback_is_not_submitted() {
        let mut app = running_app(test_config());
        dispatch(&mut app, Action::SubmitFeedback);
        assert!(!app.state.is_feedback_submitted);

        for c in "   ".chars() {
            dispatch(&mut app, Action::FeedbackInput(c));
        }
        dispatch(&mut app, Action::SubmitFeedback);
        assert!(!app.state.is_feedback_submitted);
        assert!(app.timers.len() <= 1);
    }

    #[test]
    fn test_resubmitting_does_not_extend_thank_you() {
        let mut app = running_app(test_config());
        dispatch(&mut app, Action::FeedbackInput('x'));
        dispatch(&mut app, Action::SubmitFeedback);
        app.advance(ms(2000));
        dispatch(&mut app, Action::SubmitFeedback);

        app.advance(ms(3000));
        assert!(!app.state.is_feedback_submitted);
    }

    #[test]
    fn test_backspace_edits_feedback() {
        let mut app = running_app(test_config());
        dispatch(&mut app, Action::FeedbackBackspace);
        assert_eq!(app.state.user_feedback, "");
        dispatch(&mut app, Action::FeedbackInput('o'));
        dispatch(&mut app, Action::FeedbackInput('k'));
        dispatch(&mut app, Action::FeedbackBackspace);
        assert_eq!(app.state.user_feedback, "o");
    }

    #[test]
    fn test_carousel_cycles_every_three_seconds() {
        let mut app = running_app(test_config());
        assert_eq!(app.state.active_model, 0);

        let mut seen = Vec::new();
        for step in 1..=6 {
            app.advance(ms(3000 * step));
            seen.push(app.state.active_model);
        }
        assert_eq!(seen, vec![1, 2, 0, 1, 2, 0]);
        assert!(seen.iter().all(|&idx| idx < MODELS.len()));
    }

    #[test]
    fn test_carousel_stops_after_quit() {
        let mut app = running_app(test_config());
        dispatch(&mut app, Action::ForceQuit);
        assert!(app.should_quit);
        assert!(!app.ambient.is_mounted());

        app.advance(ms(10_000));
        assert_eq!(app.state.active_model, 0);
    }

    #[test]
    fn test_pointer_sets_rotation() {
        let mut app = running_app(test_config());
        dispatch(&mut app, Action::Resize(120, 40));
        dispatch(&mut app, Action::PointerMoved(30, 10));
        assert_eq!(app.state.rotation_y, -5.0);
        assert_eq!(app.state.rotation_x, -5.0);

        dispatch(&mut app, Action::PointerMoved(120, 40));
        assert_eq!(app.state.rotation_y, 10.0);
        assert_eq!(app.state.rotation_x, 10.0);
    }

    #[test]
    fn test_pointer_ignored_before_mount() {
        let mut app = App::with_config(Config::default());
        dispatch(&mut app, Action::Resize(120, 40));
        dispatch(&mut app, Action::PointerMoved(0, 0));
        assert_eq!(app.state.rotation_x, 0.0);
        assert_eq!(app.state.rotation_y, 0.0);
    }

    #[test]
    fn test_menu_open_is_idempotent() {
        let mut app = running_app(test_config());
        dispatch(&mut app, Action::SetMenuOpen(true));
        dispatch(&mut app, Action::SetMenuOpen(true));
        assert!(app.state.menu_open);
        dispatch(&mut app, Action::ToggleMenu);
        assert!(!app.state.menu_open);
    }

    #[test]
    fn test_menu_pick_closes_menu_and_acts() {
        let mut app = running_app(test_config());
        dispatch(&mut app, Action::ToggleMenu);
        assert!(app.state.menu_open);

        dispatch(&mut app, Action::MenuPick(4));
        assert!(!app.state.menu_open);
        assert!(app.state.show_demo);

        dispatch(&mut app, Action::CloseModal);
        dispatch(&mut app, Action::ToggleMenu);
        dispatch(&mut app, Action::MenuPick(3));
        assert!(!app.state.menu_open);
        assert_eq!(app.home.first_section, Section::Feedback);
    }

    #[test]
    fn test_navigation_targets() {
        let mut app = running_app(test_config());
        dispatch(&mut app, Action::Navigate(NavItem::Features));
        assert_eq!(app.home.first_section, Section::Showcase);
        dispatch(&mut app, Action::Navigate(NavItem::Pricing));
        assert_eq!(app.home.first_section, Section::Showcase);
    }

    #[test]
    fn test_scroll_locked_while_demo_open() {
        let mut app = running_app(test_config());
        dispatch(&mut app, Action::OpenDemo);
        dispatch(&mut app, Action::ScrollDown);
        assert_eq!(app.home.first_section, Section::Hero);

        dispatch(&mut app, Action::CloseModal);
        dispatch(&mut app, Action::ScrollDown);
        assert_eq!(app.home.first_section, Section::Solutions);
    }

    #[test]
    fn test_theme_toggle_updates_state_and_config() {
        let mut app = running_app(test_config());
        dispatch(&mut app, Action::ToggleTheme);
        assert_eq!(app.state.theme, Theme::Light);
        assert_eq!(app.config.theme, Theme::Light);
        assert_eq!(app.quit_dialog.palette, Palette::for_theme(Theme::Light));
    }

    #[test]
    fn test_keys_route_to_top_modal() {
        let mut app = running_app(test_config());
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        let action = app.handle_key_event(press(KeyCode::Char('d'))).unwrap();
        assert_eq!(action, Some(Action::OpenDemo));
        dispatch(&mut app, Action::OpenDemo);

        let action = app.handle_key_event(press(KeyCode::Char('s'))).unwrap();
        assert_eq!(action, Some(Action::StartAnalysis));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key_event(ctrl_c).unwrap(), Some(Action::ForceQuit));
    }

    #[test]
    fn test_click_uses_last_frame() {
        let mut app = running_app(test_config());
        render(&mut app, 140, 50);

        let demo_button = (0..140)
            .find(|&x| app.hit_map.action_at(x, 0) == Some(Action::OpenDemo))
            .expect("live demo button on the header row");
        let action = app.handle_mouse_event(click(demo_button, 0)).unwrap();
        assert_eq!(action, Some(Action::OpenDemo));
        dispatch(&mut app, Action::OpenDemo);

        // With the demo up, the header is no longer clickable
        render(&mut app, 140, 50);
        assert_eq!(app.handle_mouse_event(click(demo_button, 0)).unwrap(), None);
    }

    #[test]
    fn test_click_before_first_frame() {
        let mut app = running_app(test_config());
        assert!(app.hit_map.is_empty());
        assert_eq!(app.handle_mouse_event(click(5, 0)).unwrap(), None);

        dispatch(&mut app, Action::FocusFeedback);
        assert_eq!(
            app.handle_mouse_event(click(5, 0)).unwrap(),
            Some(Action::BlurFeedback)
        );
    }

    #[test]
    fn test_draw_smoke() {
        let mut app = running_app(test_config());
        let text = render(&mut app, 140, 60);
        assert!(text.contains("MetrologyAI"));
        assert!(text.contains("Metrology Intelligence"));
        assert_eq!(app.viewport, (140, 60));

        dispatch(&mut app, Action::OpenDemo);
        dispatch(&mut app, Action::StartAnalysis);
        let text = render(&mut app, 140, 60);
        assert!(text.contains("Live Analysis Demo"));
        assert!(text.contains("Processing..."));

        let compact = render(&mut app, 80, 40);
        assert!(compact.contains("Live Analysis Demo"));
    }
}
