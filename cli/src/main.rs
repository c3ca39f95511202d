//! Hilo CLI - Binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`hilo_core`] (controller and harness state) and
//! [`hilo_tui`] (rendering), providing RAII-based terminal management with
//! guaranteed cleanup.
//!
//! ```text
//! main() -> TerminalSession::new() -> run_app() -> App + TUI
//! ```
//!
//! # Event Loop
//!
//! A fixed 8ms (~120 FPS) render cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking)
//! 3. Advance the controller by the frame's worth of ticks
//! 4. Render frame
//! 5. Check for quit

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::{
    fs::{self, File, OpenOptions},
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    sync::Mutex,
    time::Duration,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use hilo_core::{App, HiloConfig};
use hilo_tui::{draw, handle_events};

/// Render cadence, and the wall time converted into controller ticks each
/// frame.
const FRAME_MS: u32 = 8;
const FRAME_DURATION: Duration = Duration::from_millis(FRAME_MS as u64);

/// Installs the tracing subscriber, writing to the first log file that can
/// be opened. With no writable location the subscriber gets no writer at
/// all, since stdout and stderr belong to the alternate screen.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    let mut skipped = Vec::new();
    for path in log_file_candidates() {
        match open_append(&path) {
            Ok(file) => {
                tracing_subscriber::registry()
                    .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                    .with(filter)
                    .init();

                tracing::info!(path = %path.display(), "Logging initialized");
                for reason in skipped {
                    tracing::warn!("{reason}");
                }
                return;
            }
            Err(reason) => skipped.push(reason),
        }
    }

    tracing_subscriber::registry().with(filter).init();
}

fn open_append(path: &Path) -> Result<File, String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create log dir {}: {e}", parent.display()))?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("Failed to open log file {}: {e}", path.display()))
}

/// Log locations in preference order: next to the config file, then a
/// relative `.hilo` directory for environments without a home.
fn log_file_candidates() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(config_path) = HiloConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        paths.push(config_dir.join("logs").join("hilo.log"));
    }

    paths.push(PathBuf::from(".hilo").join("logs").join("hilo.log"));
    paths
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Raw mode and the alternate screen are restored to their original
/// configuration on drop, so the terminal remains usable after panics or
/// early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        match Terminal::new(CrosstermBackend::new(out)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                let _ = execute!(stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                Err(err.into())
            }
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
        let _ = disable_raw_mode();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = HiloConfig::load().ok().flatten().unwrap_or_default();
    let mut app = App::new(&config);

    let outcome = {
        let mut session = TerminalSession::new()?;
        run_app(&mut session.terminal, &mut app).await
    };

    match outcome {
        Ok(()) => {
            tracing::info!(ticks = app.tick_count(), "Session ended");
            Ok(())
        }
        Err(err) => {
            eprintln!("Error: {err:?}");
            Err(err)
        }
    }
}

async fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        frames.tick().await;

        handle_events(app)?;
        if app.should_quit() {
            return Ok(());
        }

        app.advance_frame(FRAME_MS);

        terminal.draw(|frame| draw(frame, app))?;
    }
}
