//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod button;
pub mod demo_dialog;
pub mod feedback;
pub mod footer;
pub mod header;
pub mod help_dialog;
pub mod hero;
pub mod hit_map;
pub mod home;
pub mod layout;
pub mod palette;
pub mod quit_dialog;
pub mod showcase;
pub mod solutions;
pub mod splash;

pub use demo_dialog::{DemoDialog, DemoRenderContext};
pub use help_dialog::HelpDialog;
pub use hit_map::HitMap;
pub use home::{draw_page, HomeComponent, PageRenderContext};
pub use layout::centered_popup;
pub use palette::Palette;
pub use quit_dialog::QuitDialog;
pub use splash::SplashComponent;
