//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `UiState` - The single interaction state store
//! - `catalog` - Static product content
//! - `ProgressDriver` / `AmbientDriver` - Timer-driven state changes
//! - `ModalStack` - Modal overlay management

pub mod ambient;
pub mod catalog;
pub mod modal;
pub mod progress;
pub mod ui;

// Re-export commonly used types
pub use ambient::AmbientDriver;
pub use catalog::ServiceKey;
pub use progress::{ProgressDriver, ProgressVariant};
pub use ui::{ChartType, FieldUpdate, Theme, UiState};
