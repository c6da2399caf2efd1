//! Click targets collected while drawing
//!
//! Every frame rebuilds the map. Later registrations sit on top of earlier
//! ones, so overlays drawn last win.

use crate::action::Action;
use ratatui::layout::Rect;

#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Action)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Register a clickable area; empty areas are ignored
    pub fn register(&mut self, area: Rect, action: Action) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, action));
        }
    }

    /// Action under the given cell, topmost first
    pub fn action_at(&self, column: u16, row: u16) -> Option<Action> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| {
                column >= area.left()
                    && column < area.right()
                    && row >= area.top()
                    && row < area.bottom()
            })
            .map(|(_, action)| *action)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_at_respects_bounds() {
        let mut map = HitMap::new();
        map.register(Rect::new(10, 2, 5, 1), Action::OpenDemo);

        assert_eq!(map.action_at(10, 2), Some(Action::OpenDemo));
        assert_eq!(map.action_at(14, 2), Some(Action::OpenDemo));
        assert_eq!(map.action_at(15, 2), None);
        assert_eq!(map.action_at(10, 3), None);
    }

    #[test]
    fn test_last_registered_wins() {
        let mut map = HitMap::new();
        map.register(Rect::new(0, 0, 20, 10), Action::ScrollDown);
        map.register(Rect::new(5, 5, 2, 1), Action::StartAnalysis);

        assert_eq!(map.action_at(5, 5), Some(Action::StartAnalysis));
        assert_eq!(map.action_at(0, 0), Some(Action::ScrollDown));
    }

    #[test]
    fn test_empty_area_is_ignored() {
        let mut map = HitMap::new();
        map.register(Rect::new(0, 0, 0, 3), Action::OpenDemo);
        assert!(map.is_empty());
    }
}
