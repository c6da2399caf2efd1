//! Component trait - Interface for the page, the splash and the dialogs
//!
//! Components turn terminal input into `Action`s and only `App` applies them
//! to `UiState`. Apart from the splash countdown, timed behaviour never
//! reaches a component: timers fire in `App::advance` and show up as changed
//! state on the next draw.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// The pattern follows:
/// 1. `handle_key_event` / `handle_mouse_event` - Convert events to Actions
/// 2. `update` - Apply Actions to component-local state (scroll position,
///    menu cursor, help scroll)
/// 3. `draw` - Render the component
///
/// Components that render shared page state (the page itself, the demo
/// dialog) keep `draw` as a no-op and expose a `draw_*` function taking a
/// render context instead.
pub trait Component {
    /// Initialize the component
    ///
    /// Called once before the first frame; the splash starts its timer here.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Handle a key event, returning an optional Action
    ///
    /// This method converts key events into semantic Actions.
    /// The component should not modify state here - just return
    /// the appropriate Action.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Handle a mouse event, returning an optional Action
    ///
    /// Clicks are usually resolved through the frame's `HitMap` by `App`;
    /// motion becomes `Action::PointerMoved`.
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let _ = mouse;
        Ok(None)
    }

    /// Update component state based on an Action
    ///
    /// This is where state changes happen. The method can optionally
    /// return a new Action if the update should trigger another action
    /// (e.g., picking a menu entry returns the entry's own action).
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Draw the component to the frame
    ///
    /// This method should be pure rendering - no state changes.
    /// Use the provided `area` to determine where to draw.
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
