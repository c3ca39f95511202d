//! Simulation harness between the terminal front end and the controller.
//!
//! The front end runs at frame rate; the controller runs at tick rate. The
//! harness owns the conversion: each frame it converts elapsed milliseconds
//! into whole ticks with a remainder accumulator, then steps the controller
//! that many times. Key presses become raw button levels held high for a
//! hair over the debounce window, so one keystroke is one debounced edge.
//!
//! The harness also latches the multiplexed output per position, giving the
//! renderer the persistence of vision the real display gets for free.

use hilo_types::ui::UiOptions;
use hilo_types::{ButtonLine, DisplayOutput, RawInputs, SegmentPattern};

use crate::config::{HiloConfig, Timings};
use crate::controller::Controller;
use crate::game::GameSession;

/// Per-position segment memory.
///
/// The controller drives one digit per tick; the latch remembers the last
/// pattern driven at each position so all four digits render at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLatch {
    positions: [SegmentPattern; 4],
}

impl Default for DisplayLatch {
    fn default() -> Self {
        Self {
            positions: [SegmentPattern::BLANK; 4],
        }
    }
}

impl DisplayLatch {
    pub fn observe(&mut self, output: DisplayOutput) {
        if let Some(position) = output.digit_select.selected() {
            self.positions[usize::from(position)] = output.segments;
        }
    }

    /// The last pattern driven at `position` (0 = rightmost, 3 = leftmost).
    #[must_use]
    pub const fn position(&self, position: usize) -> SegmentPattern {
        self.positions[position]
    }
}

/// Top-level simulation state.
pub struct App {
    controller: Controller,
    latch: DisplayLatch,
    /// Remaining ticks each button line stays high.
    pulses: [u32; 3],
    reset_pulse: u32,
    paused: bool,
    should_quit: bool,
    tick_count: u64,
    tick_hz: u32,
    /// Millisecond remainder of the tick conversion, always below 1000.
    frame_acc: u64,
    pulse_ticks: u32,
    ui: UiOptions,
}

impl App {
    #[must_use]
    pub fn new(config: &HiloConfig) -> Self {
        let timing = config.timing();
        let timings = Timings::derive(&timing);
        Self {
            controller: Controller::new(timings),
            latch: DisplayLatch::default(),
            pulses: [0; 3],
            reset_pulse: 0,
            paused: false,
            should_quit: false,
            tick_count: 0,
            tick_hz: timing.tick_hz,
            frame_acc: 0,
            // Two extra ticks cover the synchronizer fill ahead of the window.
            pulse_ticks: timings.debounce_ticks + 2,
            ui: config.ui_options(),
        }
    }

    /// Begins holding a button line high.
    pub fn press(&mut self, line: ButtonLine) {
        self.pulses[line.index()] = self.pulse_ticks;
    }

    /// Asserts reset for a single tick. Reset bypasses the debouncers, so
    /// one tick is enough.
    pub fn pulse_reset(&mut self) {
        self.reset_pulse = 1;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        tracing::debug!("simulation {}", if self.paused { "paused" } else { "resumed" });
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Converts one frame of elapsed wall time into controller ticks and
    /// runs them. Returns the number of ticks executed.
    pub fn advance_frame(&mut self, frame_ms: u32) -> u32 {
        if self.paused {
            return 0;
        }

        self.frame_acc += u64::from(self.tick_hz) * u64::from(frame_ms);
        let ticks = u32::try_from(self.frame_acc / 1000).unwrap_or(u32::MAX);
        self.frame_acc %= 1000;

        for _ in 0..ticks {
            let inputs = RawInputs {
                reset: self.reset_pulse > 0,
                start: self.pulses[ButtonLine::Start.index()] > 0,
                increment: self.pulses[ButtonLine::Increment.index()] > 0,
                submit: self.pulses[ButtonLine::Submit.index()] > 0,
            };
            self.reset_pulse = self.reset_pulse.saturating_sub(1);
            for pulse in &mut self.pulses {
                *pulse = pulse.saturating_sub(1);
            }

            let output = self.controller.step(inputs);
            self.latch.observe(output);
            self.tick_count += 1;
        }
        ticks
    }

    #[must_use]
    pub const fn latch(&self) -> &DisplayLatch {
        &self.latch
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession {
        self.controller.session()
    }

    #[must_use]
    pub const fn controller(&self) -> &Controller {
        &self.controller
    }

    #[must_use]
    pub const fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub const fn paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[must_use]
    pub const fn ui_options(&self) -> UiOptions {
        self.ui
    }
}
