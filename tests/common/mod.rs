//! Shared test utilities and fixtures.
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hilo_core::{App, HiloConfig, TimingConfig};

/// Frame step used by the production event loop.
pub const FRAME_MS: u32 = 8;

/// Timing profile scaled down so a full round fits in a few hundred ticks.
pub fn fast_timing() -> TimingConfig {
    TimingConfig {
        tick_hz: 1000,
        debounce_ms: 4,
        show_result_ms: 24,
        win_anim_ms: 40,
        win_stats_ms: 24,
        digit_dwell_ms: 1,
        anim_frame_ms: 8,
    }
}

pub fn fast_config() -> HiloConfig {
    HiloConfig {
        app: None,
        timing: Some(fast_timing()),
    }
}

pub fn fast_app() -> App {
    App::new(&fast_config())
}

/// A bare key press with no modifiers.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}
