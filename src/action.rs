//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::catalog::ServiceKey;
use crate::model::ui::{ChartType, NavItem, Section};
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for timers and animations
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,
    /// Transition from splash to the page
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Solutions
    // ─────────────────────────────────────────────────────────────────────────
    /// Show a catalog entry
    SelectTab(ServiceKey),
    /// Move to next tab
    NextTab,
    /// Move to previous tab
    PrevTab,
    /// Pick a dashboard chart mode
    SetChartType(ChartType),
    /// Switch between 2D and 3D dashboard
    ToggleChartType,

    // ─────────────────────────────────────────────────────────────────────────
    // Page Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Scroll up one section
    ScrollUp,
    /// Scroll down one section
    ScrollDown,
    /// Jump to a section
    JumpTo(Section),
    /// Header navigation entry was chosen
    Navigate(NavItem),

    // ─────────────────────────────────────────────────────────────────────────
    // Mobile Menu
    // ─────────────────────────────────────────────────────────────────────────
    /// Open or close the compact navigation menu
    ToggleMenu,
    /// Force the compact menu open or closed
    SetMenuOpen(bool),
    /// Highlight previous menu entry
    MenuUp,
    /// Highlight next menu entry
    MenuDown,
    /// Activate a menu entry by index (closes the menu)
    MenuPick(usize),

    // ─────────────────────────────────────────────────────────────────────────
    // Live Demo
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the live analysis demo
    OpenDemo,
    /// Start the simulated analysis
    StartAnalysis,

    // ─────────────────────────────────────────────────────────────────────────
    // Feedback
    // ─────────────────────────────────────────────────────────────────────────
    /// Start typing into the feedback box
    FocusFeedback,
    /// Stop typing into the feedback box
    BlurFeedback,
    /// Add character to feedback
    FeedbackInput(char),
    /// Remove last character from feedback
    FeedbackBackspace,
    /// Submit feedback
    SubmitFeedback,

    // ─────────────────────────────────────────────────────────────────────────
    // Ambient
    // ─────────────────────────────────────────────────────────────────────────
    /// Mouse moved to (column, row)
    PointerMoved(u16, u16),
    /// Switch between dark and light themes
    ToggleTheme,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::SelectTab(key) => write!(f, "SelectTab({})", key.key()),
            Action::NextTab => write!(f, "NextTab"),
            Action::PrevTab => write!(f, "PrevTab"),
            Action::SetChartType(chart) => write!(f, "SetChartType({})", chart.label()),
            Action::ToggleChartType => write!(f, "ToggleChartType"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::JumpTo(section) => write!(f, "JumpTo({:?})", section),
            Action::Navigate(item) => write!(f, "Navigate({})", item.label()),
            Action::ToggleMenu => write!(f, "ToggleMenu"),
            Action::SetMenuOpen(open) => write!(f, "SetMenuOpen({})", open),
            Action::MenuUp => write!(f, "MenuUp"),
            Action::MenuDown => write!(f, "MenuDown"),
            Action::MenuPick(idx) => write!(f, "MenuPick({})", idx),
            Action::OpenDemo => write!(f, "OpenDemo"),
            Action::StartAnalysis => write!(f, "StartAnalysis"),
            Action::FocusFeedback => write!(f, "FocusFeedback"),
            Action::BlurFeedback => write!(f, "BlurFeedback"),
            Action::FeedbackInput(c) => write!(f, "FeedbackInput('{}')", c),
            Action::FeedbackBackspace => write!(f, "FeedbackBackspace"),
            Action::SubmitFeedback => write!(f, "SubmitFeedback"),
            Action::PointerMoved(x, y) => write!(f, "PointerMoved({}, {})", x, y),
            Action::ToggleTheme => write!(f, "ToggleTheme"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}
