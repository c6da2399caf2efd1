//! Timer queue service
//!
//! Cancellable one-shot and repeating timers measured against a monotonic
//! offset from app start. The event loop feeds the current offset on every
//! tick and gets back the events that came due, in due order.

use log::trace;
use std::time::Duration;

/// Handle to a scheduled timer, used for cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// What a timer does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Advance the simulated analysis to checkpoint `index` of run `run`
    ProgressCheckpoint { run: u64, index: usize },
    /// Clear the feedback "Thank you" acknowledgment
    FeedbackReset,
    /// Rotate the highlighted showcase model
    RotateModel,
}

#[derive(Debug, Clone)]
struct Timer {
    id: TimerId,
    due: Duration,
    period: Option<Duration>,
    event: TimerEvent,
}

/// Queue of pending timers
#[derive(Debug, Default)]
pub struct TimerQueue {
    timers: Vec<Timer>,
    next_id: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self {
            timers: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule a one-shot timer firing `delay` after `now`
    pub fn schedule(&mut self, now: Duration, delay: Duration, event: TimerEvent) -> TimerId {
        self.push(now + delay, None, event)
    }

    /// Schedule a timer firing every `period`, first at `now + period`
    ///
    /// A zero period is bumped to one millisecond so `advance` always terminates.
    pub fn schedule_repeating(
        &mut self,
        now: Duration,
        period: Duration,
        event: TimerEvent,
    ) -> TimerId {
        let period = period.max(Duration::from_millis(1));
        self.push(now + period, Some(period), event)
    }

    fn push(&mut self, due: Duration, period: Option<Duration>, event: TimerEvent) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            due,
            period,
            event,
        });
        id
    }

    /// Cancel a timer, returns false if it already fired or was cancelled
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Drop every pending timer
    pub fn clear(&mut self) {
        self.timers.clear();
    }

    /// Pop every event due at or before `now`
    ///
    /// Events come out ordered by due time, ties in scheduling order.
    /// Repeating timers are re-armed and may fire several times when `now`
    /// jumps over more than one period.
    pub fn advance(&mut self, now: Duration) -> Vec<TimerEvent> {
        let mut fired = Vec::new();

        loop {
            let next = self
                .timers
                .iter()
                .enumerate()
                .filter(|(_, t)| t.due <= now)
                .min_by_key(|(_, t)| (t.due, t.id))
                .map(|(idx, _)| idx);

            let Some(idx) = next else {
                break;
            };

            let timer = &mut self.timers[idx];
            trace!("timer {:?} fired at {:?}: {:?}", timer.id, timer.due, timer.event);
            fired.push(timer.event);

            match timer.period {
                Some(period) => timer.due += period,
                None => {
                    self.timers.swap_remove(idx);
                }
            }
        }

        fired
    }
}
