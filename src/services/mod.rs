//! Runtime services
//!
//! This module contains services the app drives from its event loop:
//! - Timer scheduling for the simulated and ambient animations

pub mod scheduler;

pub use scheduler::{TimerEvent, TimerId, TimerQueue};
