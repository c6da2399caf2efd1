//! metrology-ai - MetrologyAI product page in the terminal
//!
//! This is the main entry point for the metrology-ai application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use log::info;

fn main() -> Result<()> {
    // Logging must not write to the terminal the UI owns
    match logging::init() {
        Ok(Some(path)) => info!("logging to {}", path.display()),
        Ok(None) => {}
        Err(e) => eprintln!("Logging disabled: {:#}", e),
    }

    // Create app state
    let mut app = App::new();

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(app.config.tick_rate());
    tui.enter()?;

    app.init()?;
    info!("metrology-ai started");

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;
    info!("metrology-ai stopped");

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Apply an action and every follow-up action it produces
fn dispatch(app: &mut App, action: Action) -> Result<()> {
    let mut current_action = Some(action);
    while let Some(a) = current_action {
        current_action = app.update(a)?;
    }
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                log::error!("draw error: {:#}", e);
            }
        })?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            if let Some(action) = action {
                dispatch(app, action)?;
            }
        }

        // Timers follow wall time, so they keep firing under a stream of pointer events
        if !app.should_quit {
            dispatch(app, Action::Tick)?;
        }
    }

    Ok(())
}
