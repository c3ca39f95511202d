//! The composed controller.
//!
//! One [`Controller::step`] call is one tick. The call freezes the previous
//! snapshot, computes every component's next state from that snapshot alone,
//! commits all of them at once, and renders the committed state. No component
//! ever observes another's same-tick update.
//!
//! Reset short-circuits the whole tick: every component returns to its
//! power-on value and the tick's output is rendered from that fresh state.

use hilo_types::{ButtonLine, DisplayOutput, RawInputs};

use crate::config::Timings;
use crate::debounce::Debouncer;
use crate::display::DisplayFrame;
use crate::game::{ButtonEdges, GameSession};
use crate::lfsr::Lfsr4;

/// The whole controller state plus its derived tick thresholds.
#[derive(Debug, Clone, Copy)]
pub struct Controller {
    timings: Timings,
    buttons: [Debouncer; 3],
    lfsr: Lfsr4,
    session: GameSession,
    frame: DisplayFrame,
}

impl Controller {
    #[must_use]
    pub fn new(timings: Timings) -> Self {
        Self {
            timings,
            buttons: [Debouncer::default(); 3],
            lfsr: Lfsr4::SEED,
            session: GameSession::default(),
            frame: DisplayFrame::default(),
        }
    }

    /// Advances every component by one tick and returns the display lines.
    pub fn step(&mut self, inputs: RawInputs) -> DisplayOutput {
        if inputs.reset {
            tracing::debug!("reset asserted, all state back to power-on values");
            self.buttons = [Debouncer::default(); 3];
            self.lfsr = Lfsr4::SEED;
            self.session = GameSession::default();
            self.frame = DisplayFrame::default();
            return self.frame.render(&self.session);
        }

        // Freeze: everything below reads only these previous-tick values.
        let edges = ButtonEdges {
            start: self.buttons[ButtonLine::Start.index()].edge(),
            increment: self.buttons[ButtonLine::Increment.index()].edge(),
            submit: self.buttons[ButtonLine::Submit.index()].edge(),
        };
        let random = self.lfsr.value();
        let phase = self.session.phase;

        // Compute next states from the frozen snapshot.
        let mut buttons = self.buttons;
        for line in ButtonLine::ALL {
            buttons[line.index()] =
                self.buttons[line.index()].step(inputs.line(line), self.timings.debounce_ticks);
        }
        let lfsr = self.lfsr.step();
        let session = self.session.step(edges, random, &self.timings);
        let frame = self.frame.step(phase, &self.timings);

        // Commit atomically, then render the committed tick.
        self.buttons = buttons;
        self.lfsr = lfsr;
        self.session = session;
        self.frame = frame;
        self.frame.render(&self.session)
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn frame(&self) -> &DisplayFrame {
        &self.frame
    }

    #[must_use]
    pub const fn generator(&self) -> Lfsr4 {
        self.lfsr
    }

    #[must_use]
    pub const fn timings(&self) -> &Timings {
        &self.timings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hilo_types::{GamePhase, Guess, GuessResult};

    fn timings() -> Timings {
        Timings {
            debounce_ticks: 3,
            show_result_ticks: 5,
            win_anim_ticks: 6,
            win_stats_ticks: 4,
            dwell_ticks: 1,
            anim_frame_ticks: 2,
        }
    }

    fn raw(line: Option<ButtonLine>) -> RawInputs {
        RawInputs {
            reset: false,
            start: line == Some(ButtonLine::Start),
            increment: line == Some(ButtonLine::Increment),
            submit: line == Some(ButtonLine::Submit),
        }
    }

    /// Holds a line high long enough to debounce, then releases and re-arms.
    fn pulse(controller: &mut Controller, line: ButtonLine) {
        let hold = controller.timings().debounce_ticks + 2;
        for _ in 0..hold {
            controller.step(raw(Some(line)));
        }
        for _ in 0..hold {
            controller.step(raw(None));
        }
    }

    fn settle(controller: &mut Controller, phase: GamePhase, max_ticks: u32) {
        for _ in 0..max_ticks {
            if controller.session().phase == phase {
                return;
            }
            controller.step(raw(None));
        }
        panic!(
            "never reached {:?}, stuck in {:?}",
            phase,
            controller.session().phase
        );
    }

    #[test]
    fn bouncing_start_line_never_begins_a_round() {
        let mut controller = Controller::new(timings());
        for i in 0..60 {
            controller.step(RawInputs {
                reset: false,
                start: i % 2 == 0,
                increment: false,
                submit: false,
            });
            assert_eq!(controller.session().phase, GamePhase::Idle);
        }
    }

    #[test]
    fn full_round_misses_once_then_wins() {
        let t = timings();
        let mut controller = Controller::new(t);

        pulse(&mut controller, ButtonLine::Start);
        assert_eq!(controller.session().phase, GamePhase::Playing);
        let target = controller.session().target;
        assert!((1..=10).contains(&target.get()));

        // First attempt always misses: submit the fresh guess when the
        // target is above 1, step once past it when the target is 1.
        let expected = if target == Guess::MIN {
            pulse(&mut controller, ButtonLine::Increment);
            assert_eq!(controller.session().guess.get(), 2);
            GuessResult::High
        } else {
            GuessResult::Low
        };
        pulse(&mut controller, ButtonLine::Submit);
        assert_eq!(controller.session().phase, GamePhase::ShowResult);
        assert_eq!(controller.session().result, expected);
        assert_eq!(controller.session().attempts, 1);

        settle(&mut controller, GamePhase::Playing, t.show_result_ticks + 2);
        assert_eq!(controller.session().guess, Guess::MIN);
        assert_eq!(controller.session().target, target, "target survives a miss");

        // Second attempt: walk the guess up to the target and submit.
        for _ in 1..target.get() {
            pulse(&mut controller, ButtonLine::Increment);
        }
        assert_eq!(controller.session().guess, target);
        pulse(&mut controller, ButtonLine::Submit);
        assert_eq!(controller.session().result, GuessResult::Win);
        assert_eq!(controller.session().attempts, 2);

        settle(&mut controller, GamePhase::WinAnim, t.show_result_ticks + 2);
        settle(&mut controller, GamePhase::WinStats, t.win_anim_ticks + 2);
        settle(&mut controller, GamePhase::Idle, t.win_stats_ticks + 2);
        assert_eq!(controller.session().attempts, 0);
    }

    #[test]
    fn refresh_selects_each_position_a_quarter_of_the_time() {
        let t = timings();
        let mut controller = Controller::new(t);
        let mut visits = [0u32; 4];
        for _ in 0..4 * 8 * t.dwell_ticks {
            let output = controller.step(raw(None));
            assert!(output.digit_select.is_one_hot());
            let selected = output.digit_select.selected().unwrap();
            visits[usize::from(selected)] += 1;
        }
        let share = visits[0];
        assert!(visits.iter().all(|&count| count == share));
    }

    #[test]
    fn reset_returns_everything_to_power_on() {
        let t = timings();
        let mut controller = Controller::new(t);
        pulse(&mut controller, ButtonLine::Start);
        pulse(&mut controller, ButtonLine::Increment);
        assert_eq!(controller.session().phase, GamePhase::Playing);
        assert_ne!(controller.generator(), Lfsr4::SEED);

        controller.step(RawInputs {
            reset: true,
            start: false,
            increment: false,
            submit: false,
        });
        assert_eq!(controller.session(), &GameSession::default());
        assert_eq!(controller.frame(), &DisplayFrame::default());
        assert_eq!(controller.generator(), Lfsr4::SEED);
    }

    #[test]
    fn generator_free_runs_while_idle() {
        let mut controller = Controller::new(timings());
        let before = controller.generator();
        controller.step(raw(None));
        assert_ne!(controller.generator(), before);
    }
}
