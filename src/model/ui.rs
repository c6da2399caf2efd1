//! UI state - the single interaction state store
//!
//! `UiState` is created once when the page mounts and is only ever changed
//! through `UiState::set`, one field at a time.

use super::catalog::{self, ServiceEntry, ServiceKey, MODELS};
use log::debug;
use serde::{Deserialize, Serialize};

/// Colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Dashboard chart mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartType {
    #[default]
    TwoD,
    ThreeD,
}

impl ChartType {
    pub fn all() -> [ChartType; 2] {
        [ChartType::TwoD, ChartType::ThreeD]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartType::TwoD => "2D",
            ChartType::ThreeD => "3D",
        }
    }

    pub fn toggled(&self) -> ChartType {
        match self {
            ChartType::TwoD => ChartType::ThreeD,
            ChartType::ThreeD => ChartType::TwoD,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
}

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Splash,
    Running,
}

/// Page sections, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    Hero,
    Solutions,
    Showcase,
    Feedback,
    Footer,
}

impl Section {
    pub fn all() -> [Section; 5] {
        [
            Section::Hero,
            Section::Solutions,
            Section::Showcase,
            Section::Feedback,
            Section::Footer,
        ]
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(&self) -> Section {
        let all = Self::all();
        all[(self.index() + 1).min(all.len() - 1)]
    }

    pub fn previous(&self) -> Section {
        Self::all()[self.index().saturating_sub(1)]
    }
}

/// Header navigation entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Solutions,
    Features,
    Pricing,
    Support,
}

impl NavItem {
    pub fn all() -> [NavItem; 4] {
        [
            NavItem::Solutions,
            NavItem::Features,
            NavItem::Pricing,
            NavItem::Support,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Solutions => "Solutions",
            NavItem::Features => "Features",
            NavItem::Pricing => "Pricing",
            NavItem::Support => "Support",
        }
    }

    /// Section the item scrolls to; pricing has no section on this page
    pub fn anchor(&self) -> Option<Section> {
        match self {
            NavItem::Solutions => Some(Section::Solutions),
            NavItem::Features => Some(Section::Showcase),
            NavItem::Pricing => None,
            NavItem::Support => Some(Section::Feedback),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// State Store
// ═══════════════════════════════════════════════════════════════════════════════

/// All interaction state of the page
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub active_tab: ServiceKey,
    pub show_demo: bool,
    pub is_analyzing: bool,
    pub menu_open: bool,
    pub theme: Theme,
    pub chart_type: ChartType,
    /// 0..=100
    pub demo_progress: u8,
    pub notifications: Vec<Notification>,
    pub user_feedback: String,
    pub is_feedback_submitted: bool,
    /// Degrees
    pub rotation_x: f64,
    /// Degrees
    pub rotation_y: f64,
    pub active_model: usize,
}

/// A replacement value for exactly one `UiState` field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    ActiveTab(ServiceKey),
    ShowDemo(bool),
    IsAnalyzing(bool),
    MenuOpen(bool),
    Theme(Theme),
    ChartType(ChartType),
    DemoProgress(u8),
    Notifications(Vec<Notification>),
    UserFeedback(String),
    IsFeedbackSubmitted(bool),
    RotationX(f64),
    RotationY(f64),
    ActiveModel(usize),
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(Theme::default(), ServiceKey::default())
    }
}

impl UiState {
    pub fn new(theme: Theme, active_tab: ServiceKey) -> Self {
        Self {
            active_tab,
            show_demo: false,
            is_analyzing: false,
            menu_open: false,
            theme,
            chart_type: ChartType::TwoD,
            demo_progress: 0,
            notifications: Vec::new(),
            user_feedback: String::new(),
            is_feedback_submitted: false,
            rotation_x: 0.0,
            rotation_y: 0.0,
            active_model: 0,
        }
    }

    /// Replace one field, returning whether its value changed
    ///
    /// Progress is clamped to 100 and the model index wraps around the
    /// showcase list.
    pub fn set(&mut self, update: FieldUpdate) -> bool {
        fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
            if *slot == value {
                false
            } else {
                *slot = value;
                true
            }
        }

        let changed = match update.clone() {
            FieldUpdate::ActiveTab(v) => replace(&mut self.active_tab, v),
            FieldUpdate::ShowDemo(v) => replace(&mut self.show_demo, v),
            FieldUpdate::IsAnalyzing(v) => replace(&mut self.is_analyzing, v),
            FieldUpdate::MenuOpen(v) => replace(&mut self.menu_open, v),
            FieldUpdate::Theme(v) => replace(&mut self.theme, v),
            FieldUpdate::ChartType(v) => replace(&mut self.chart_type, v),
            FieldUpdate::DemoProgress(v) => replace(&mut self.demo_progress, v.min(100)),
            FieldUpdate::Notifications(v) => replace(&mut self.notifications, v),
            FieldUpdate::UserFeedback(v) => replace(&mut self.user_feedback, v),
            FieldUpdate::IsFeedbackSubmitted(v) => replace(&mut self.is_feedback_submitted, v),
            FieldUpdate::RotationX(v) => replace(&mut self.rotation_x, v),
            FieldUpdate::RotationY(v) => replace(&mut self.rotation_y, v),
            FieldUpdate::ActiveModel(v) => replace(&mut self.active_model, v % MODELS.len()),
        };

        if changed {
            match update {
                // Pointer and text updates are too chatty for debug
                FieldUpdate::RotationX(_) | FieldUpdate::RotationY(_) | FieldUpdate::UserFeedback(_) => {}
                other => debug!("ui state: {:?}", other),
            }
        }
        changed
    }

    /// Catalog entry for the active tab
    pub fn active_service(&self) -> &'static ServiceEntry {
        catalog::service(self.active_tab)
    }
}
