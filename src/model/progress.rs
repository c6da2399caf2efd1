//! Simulated analysis progress
//!
//! A timer-driven sequencer that walks `demo_progress` through fixed
//! checkpoints to animate the live demo. It performs no real work.

use super::ui::{FieldUpdate, UiState};
use crate::services::{TimerEvent, TimerId, TimerQueue};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const STEPPED_CHECKPOINTS: [u8; 4] = [25, 50, 75, 100];
const SIMPLIFIED_CHECKPOINTS: [u8; 1] = [100];

/// Spacing between stepped checkpoints
pub const STEP_INTERVAL: Duration = Duration::from_millis(500);

/// Single delay used by the simplified variant
pub const SIMPLIFIED_DELAY: Duration = Duration::from_millis(2000);

/// Checkpoint schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressVariant {
    /// 25, 50, 75, 100 at 0, 500, 1000, 1500 ms
    #[default]
    Stepped,
    /// 100 after 2000 ms
    Simplified,
}

impl ProgressVariant {
    pub fn checkpoints(&self) -> &'static [u8] {
        match self {
            ProgressVariant::Stepped => &STEPPED_CHECKPOINTS,
            ProgressVariant::Simplified => &SIMPLIFIED_CHECKPOINTS,
        }
    }

    /// Delay from run start until checkpoint `index` fires
    pub fn delay_for(&self, index: usize) -> Duration {
        match self {
            ProgressVariant::Stepped => STEP_INTERVAL * index as u32,
            ProgressVariant::Simplified => SIMPLIFIED_DELAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressState {
    Idle,
    /// Waiting for checkpoint `n`
    Running(usize),
    Done,
}

/// Drives `is_analyzing` and `demo_progress`
#[derive(Debug)]
pub struct ProgressDriver {
    variant: ProgressVariant,
    state: ProgressState,
    /// Generation of the current run; checkpoints from older runs are ignored
    run: u64,
    pending: Vec<TimerId>,
}

impl Default for ProgressDriver {
    fn default() -> Self {
        Self::new(ProgressVariant::default())
    }
}

impl ProgressDriver {
    pub fn new(variant: ProgressVariant) -> Self {
        Self {
            variant,
            state: ProgressState::Idle,
            run: 0,
            pending: Vec::new(),
        }
    }

    pub fn state(&self) -> ProgressState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, ProgressState::Running(_))
    }

    /// Start a run; a no-op while one is already in flight
    pub fn start(&mut self, ui: &mut UiState, timers: &mut TimerQueue, now: Duration) -> bool {
        if ui.is_analyzing || self.is_running() {
            return false;
        }

        self.run += 1;
        ui.set(FieldUpdate::IsAnalyzing(true));
        ui.set(FieldUpdate::DemoProgress(0));
        self.state = ProgressState::Running(0);

        let run = self.run;
        self.pending = (0..self.variant.checkpoints().len())
            .map(|index| {
                timers.schedule(
                    now,
                    self.variant.delay_for(index),
                    TimerEvent::ProgressCheckpoint { run, index },
                )
            })
            .collect();

        info!("analysis run {} started ({:?})", run, self.variant);
        true
    }

    /// Apply a fired checkpoint timer, returns false for stale ones
    pub fn on_checkpoint(&mut self, run: u64, index: usize, ui: &mut UiState) -> bool {
        if run != self.run {
            debug!("ignoring checkpoint {} of stale run {}", index, run);
            return false;
        }
        let ProgressState::Running(expected) = self.state else {
            return false;
        };
        if index < expected {
            return false;
        }

        let checkpoints = self.variant.checkpoints();
        let Some(&value) = checkpoints.get(index) else {
            return false;
        };

        ui.set(FieldUpdate::DemoProgress(value));

        if index + 1 >= checkpoints.len() {
            ui.set(FieldUpdate::IsAnalyzing(false));
            self.state = ProgressState::Done;
            self.pending.clear();
            info!("analysis run {} complete", run);
        } else {
            self.state = ProgressState::Running(index + 1);
        }
        true
    }

    /// Cancel outstanding checkpoints, leaving progress where it stopped
    pub fn cancel(&mut self, ui: &mut UiState, timers: &mut TimerQueue) -> bool {
        if !self.is_running() {
            return false;
        }

        for id in self.pending.drain(..) {
            timers.cancel(id);
        }
        ui.set(FieldUpdate::IsAnalyzing(false));
        self.state = ProgressState::Idle;
        info!("analysis run {} cancelled at {}%", self.run, ui.demo_progress);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Fire every due timer into the driver, returning the progress trail
    fn pump(
        driver: &mut ProgressDriver,
        ui: &mut UiState,
        timers: &mut TimerQueue,
        now: Duration,
    ) -> Vec<u8> {
        let mut trail = Vec::new();
        for event in timers.advance(now) {
            if let TimerEvent::ProgressCheckpoint { run, index } = event {
                if driver.on_checkpoint(run, index, ui) {
                    trail.push(ui.demo_progress);
                }
            }
        }
        trail
    }

    #[test]
    fn test_stepped_run_walks_checkpoints() {
        let mut driver = ProgressDriver::new(ProgressVariant::Stepped);
        let mut ui = UiState::default();
        let mut timers = TimerQueue::new();

        assert!(driver.start(&mut ui, &mut timers, ms(1000)));
        assert!(ui.is_analyzing);
        assert_eq!(ui.demo_progress, 0);

        assert_eq!(pump(&mut driver, &mut ui, &mut timers, ms(1000)), vec![25]);
        assert_eq!(pump(&mut driver, &mut ui, &mut timers, ms(1499)), Vec::<u8>::new());
        assert_eq!(pump(&mut driver, &mut ui, &mut timers, ms(1500)), vec![50]);
        assert_eq!(pump(&mut driver, &mut ui, &mut timers, ms(2000)), vec![75]);
        assert!(ui.is_analyzing);
        assert_eq!(pump(&mut driver, &mut ui, &mut timers, ms(2500)), vec![100]);

        assert!(!ui.is_analyzing);
        assert_eq!(driver.state(), ProgressState::Done);
        assert!(timers.is_empty());
    }

    #[test]
    fn test_simplified_run_jumps_to_done() {
        let mut driver = ProgressDriver::new(ProgressVariant::Simplified);
        let mut ui = UiState::default();
        let mut timers = TimerQueue::new();

        driver.start(&mut ui, &mut timers, ms(0));
        assert!(pump(&mut driver, &mut ui, &mut timers, ms(1999)).is_empty());
        assert_eq!(pump(&mut driver, &mut ui, &mut timers, ms(2000)), vec![100]);
        assert!(!ui.is_analyzing);
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut driver = ProgressDriver::default();
        let mut ui = UiState::default();
        let mut timers = TimerQueue::new();

        assert!(driver.start(&mut ui, &mut timers, ms(0)));
        pump(&mut driver, &mut ui, &mut timers, ms(500));
        assert_eq!(ui.demo_progress, 50);

        assert!(!driver.start(&mut ui, &mut timers, ms(600)));
        assert_eq!(ui.demo_progress, 50);
        assert_eq!(timers.len(), 2);
    }

    #[test]
    fn test_restart_after_done_resets_progress() {
        let mut driver = ProgressDriver::default();
        let mut ui = UiState::default();
        let mut timers = TimerQueue::new();

        driver.start(&mut ui, &mut timers, ms(0));
        pump(&mut driver, &mut ui, &mut timers, ms(5000));
        assert_eq!(ui.demo_progress, 100);

        assert!(driver.start(&mut ui, &mut timers, ms(6000)));
        assert_eq!(ui.demo_progress, 0);
        assert!(ui.is_analyzing);
    }

    #[test]
    fn test_cancel_stops_pending_checkpoints() {
        let mut driver = ProgressDriver::default();
        let mut ui = UiState::default();
        let mut timers = TimerQueue::new();

        driver.start(&mut ui, &mut timers, ms(0));
        pump(&mut driver, &mut ui, &mut timers, ms(0));
        assert!(driver.cancel(&mut ui, &mut timers));

        assert!(!ui.is_analyzing);
        assert_eq!(ui.demo_progress, 25);
        assert!(timers.is_empty());
        assert!(pump(&mut driver, &mut ui, &mut timers, ms(5000)).is_empty());
        assert!(!driver.cancel(&mut ui, &mut timers));
    }

    #[test]
    fn test_stale_checkpoint_is_ignored() {
        let mut driver = ProgressDriver::default();
        let mut ui = UiState::default();
        let mut timers = TimerQueue::new();

        driver.start(&mut ui, &mut timers, ms(0));
        assert!(!driver.on_checkpoint(99, 0, &mut ui));
        assert_eq!(ui.demo_progress, 0);
    }
}
