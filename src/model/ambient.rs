//! Ambient animation - showcase carousel and pointer tilt
//!
//! Purely decorative. The carousel timer and pointer listener exist only
//! between `mount` and `unmount`.

use super::catalog::MODELS;
use super::ui::{FieldUpdate, UiState};
use crate::services::{TimerEvent, TimerId, TimerQueue};
use log::debug;
use std::time::Duration;

/// How often the highlighted model advances
pub const ROTATION_PERIOD: Duration = Duration::from_millis(3000);

/// Full tilt range in degrees across the viewport
pub const TILT_RANGE_DEGREES: f64 = 20.0;

/// Tilt angles in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotation_x: f64,
    pub rotation_y: f64,
}

/// Map a pointer position inside a `width` x `height` viewport to tilt angles
///
/// `rotation_y = (x / width - 0.5) * 20`, `rotation_x = (y / height - 0.5) * 20`.
/// A zero-sized axis yields no tilt on that axis.
pub fn rotation_from_pointer(x: f64, y: f64, width: f64, height: f64) -> Tilt {
    let axis = |pos: f64, extent: f64| {
        if extent > 0.0 {
            (pos / extent - 0.5) * TILT_RANGE_DEGREES
        } else {
            0.0
        }
    };

    Tilt {
        rotation_x: axis(y, height),
        rotation_y: axis(x, width),
    }
}

/// Owns the carousel timer and pointer listener
#[derive(Debug, Default)]
pub struct AmbientDriver {
    rotation_timer: Option<TimerId>,
    listening: bool,
}

impl AmbientDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.rotation_timer.is_some()
    }

    /// Start the carousel timer and pointer listener
    pub fn mount(&mut self, timers: &mut TimerQueue, now: Duration) {
        if self.is_mounted() {
            return;
        }
        self.rotation_timer =
            Some(timers.schedule_repeating(now, ROTATION_PERIOD, TimerEvent::RotateModel));
        self.listening = true;
        debug!("ambient animation mounted");
    }

    /// Stop the carousel timer and pointer listener
    pub fn unmount(&mut self, timers: &mut TimerQueue) {
        if let Some(id) = self.rotation_timer.take() {
            timers.cancel(id);
            debug!("ambient animation unmounted");
        }
        self.listening = false;
    }

    /// Carousel tick
    pub fn on_rotate(&self, ui: &mut UiState) {
        ui.set(FieldUpdate::ActiveModel((ui.active_model + 1) % MODELS.len()));
    }

    /// Pointer moved to (`column`, `row`) in a viewport of `viewport` cells
    pub fn on_pointer(&self, ui: &mut UiState, column: u16, row: u16, viewport: (u16, u16)) -> bool {
        if !self.listening {
            return false;
        }

        let tilt = rotation_from_pointer(
            f64::from(column),
            f64::from(row),
            f64::from(viewport.0),
            f64::from(viewport.1),
        );
        ui.set(FieldUpdate::RotationX(tilt.rotation_x));
        ui.set(FieldUpdate::RotationY(tilt.rotation_y));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_is_linear_in_pointer_position() {
        let tilt = rotation_from_pointer(30.0, 10.0, 120.0, 40.0);
        assert_eq!(tilt.rotation_y, (30.0 / 120.0 - 0.5) * 20.0);
        assert_eq!(tilt.rotation_x, (10.0 / 40.0 - 0.5) * 20.0);
        assert_eq!(tilt.rotation_y, -5.0);
        assert_eq!(tilt.rotation_x, -5.0);

        let center = rotation_from_pointer(60.0, 20.0, 120.0, 40.0);
        assert_eq!(center, Tilt { rotation_x: 0.0, rotation_y: 0.0 });

        let corner = rotation_from_pointer(120.0, 40.0, 120.0, 40.0);
        assert_eq!(corner, Tilt { rotation_x: 10.0, rotation_y: 10.0 });
    }

    #[test]
    fn test_rotation_exact_over_grid() {
        let (w, h) = (97.0, 31.0);
        for x in 0..=97 {
            for y in [0.0, 7.0, 15.5, 31.0] {
                let tilt = rotation_from_pointer(f64::from(x), y, w, h);
                assert_eq!(tilt.rotation_y, (f64::from(x) / w - 0.5) * 20.0);
                assert_eq!(tilt.rotation_x, (y / h - 0.5) * 20.0);
            }
        }
    }

    #[test]
    fn test_zero_viewport_has_no_tilt() {
        let tilt = rotation_from_pointer(5.0, 5.0, 0.0, 0.0);
        assert_eq!(tilt, Tilt { rotation_x: 0.0, rotation_y: 0.0 });
    }

    #[test]
    fn test_carousel_cycles_on_period() {
        let mut driver = AmbientDriver::new();
        let mut timers = TimerQueue::new();
        let mut ui = UiState::default();
        driver.mount(&mut timers, Duration::ZERO);

        let mut seen = vec![ui.active_model];
        for step in 1..=6u32 {
            for event in timers.advance(ROTATION_PERIOD * step) {
                if event == TimerEvent::RotateModel {
                    driver.on_rotate(&mut ui);
                }
            }
            seen.push(ui.active_model);
        }
        assert_eq!(seen, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_unmount_releases_timer_and_listener() {
        let mut driver = AmbientDriver::new();
        let mut timers = TimerQueue::new();
        let mut ui = UiState::default();

        driver.mount(&mut timers, Duration::ZERO);
        driver.mount(&mut timers, Duration::ZERO);
        assert_eq!(timers.len(), 1);
        assert!(driver.on_pointer(&mut ui, 0, 0, (100, 50)));
        assert_eq!(ui.rotation_y, -10.0);

        driver.unmount(&mut timers);
        assert!(timers.is_empty());
        assert!(!driver.is_mounted());
        assert!(!driver.on_pointer(&mut ui, 100, 50, (100, 50)));
        assert_eq!(ui.rotation_y, -10.0);
    }
}
