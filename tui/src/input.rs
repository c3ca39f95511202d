//! Input handling for the Hilo simulator.
//!
//! Keys map onto the three button lines plus the reset line and simulator
//! controls. A mapped key press begins a raw-level pulse in the harness; the
//! debouncers see the pulse as a held physical button, never a synthetic
//! edge.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use hilo_core::App;
use hilo_types::ButtonLine;

/// Applies one key event to the simulation.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        tracing::debug!("ctrl-c, quitting");
        app.quit();
        return;
    }
    match key.code {
        KeyCode::Char('s') => app.press(ButtonLine::Start),
        KeyCode::Char('i' | '+') | KeyCode::Up => app.press(ButtonLine::Increment),
        KeyCode::Enter | KeyCode::Char(' ') => app.press(ButtonLine::Submit),
        KeyCode::Char('r') => app.pulse_reset(),
        KeyCode::Char('p') => app.toggle_pause(),
        KeyCode::Char('q') | KeyCode::Esc => {
            tracing::debug!("quit requested");
            app.quit();
        }
        _ => {}
    }
}

/// Drains every pending terminal event without blocking the frame loop.
pub fn handle_events(app: &mut App) -> Result<()> {
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            handle_key(app, key);
        }
    }
    Ok(())
}
