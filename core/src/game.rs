//! The game state machine.
//!
//! A round: Idle waits for start, Playing accepts increment/submit, a
//! submitted guess is compared against the hidden target, and the outcome is
//! held in ShowResult. A win runs the victory sweep and the stats readout
//! before returning to Idle; a miss returns to Playing with the guess reset.
//!
//! `step` is a total pure function over a closed state enum. There is no
//! representable invalid state, so the fail-safe "unknown state returns to
//! Idle" is discharged by construction; external reset remains the explicit
//! recovery path.

use hilo_types::{GamePhase, Guess, GuessResult};

use crate::config::Timings;

/// Debounced single-tick edges consumed by one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonEdges {
    pub start: bool,
    pub increment: bool,
    pub submit: bool,
}

/// Complete game state, committed once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSession {
    pub phase: GamePhase,
    pub target: Guess,
    pub guess: Guess,
    /// Masked to four bits on increment; reset only on entering Idle.
    pub attempts: u8,
    pub result: GuessResult,
    /// Ticks spent in the current timed phase.
    pub delay: u32,
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            phase: GamePhase::Idle,
            target: Guess::MIN,
            guess: Guess::MIN,
            attempts: 0,
            result: GuessResult::Entering,
            delay: 0,
        }
    }
}

impl GameSession {
    /// Computes the next session from the previous snapshot.
    ///
    /// `random` is the generator value sampled on the previous tick; it is
    /// consulted only on the Idle-to-Playing transition.
    #[must_use]
    pub fn step(&self, edges: ButtonEdges, random: u8, timings: &Timings) -> Self {
        match self.phase {
            GamePhase::Idle => {
                if edges.start {
                    let target = Guess::from_random(random);
                    tracing::debug!("round started, target {}", target);
                    Self {
                        phase: GamePhase::Playing,
                        target,
                        result: GuessResult::Entering,
                        delay: 0,
                        ..*self
                    }
                } else {
                    *self
                }
            }
            GamePhase::Playing => {
                // A simultaneous increment is dropped in favor of the submit;
                // the comparison uses the guess as shown.
                if edges.submit {
                    let attempts = (self.attempts + 1) & 0x0F;
                    let result = GuessResult::of_comparison(self.guess, self.target);
                    match result {
                        GuessResult::Win => {
                            tracing::info!(
                                "target {} found on attempt {}",
                                self.target,
                                attempts
                            );
                        }
                        _ => {
                            tracing::debug!("guess {} was {}", self.guess, result.as_str());
                        }
                    }
                    Self {
                        phase: GamePhase::ShowResult,
                        attempts,
                        result,
                        delay: 0,
                        ..*self
                    }
                } else if edges.increment {
                    Self {
                        guess: self.guess.wrapping_increment(),
                        ..*self
                    }
                } else {
                    *self
                }
            }
            GamePhase::ShowResult => {
                if self.delay + 1 >= timings.show_result_ticks {
                    if self.result == GuessResult::Win {
                        Self {
                            phase: GamePhase::WinAnim,
                            delay: 0,
                            ..*self
                        }
                    } else {
                        Self {
                            phase: GamePhase::Playing,
                            guess: Guess::MIN,
                            result: GuessResult::Entering,
                            delay: 0,
                            ..*self
                        }
                    }
                } else {
                    Self {
                        delay: self.delay + 1,
                        ..*self
                    }
                }
            }
            GamePhase::WinAnim => {
                if self.delay + 1 >= timings.win_anim_ticks {
                    Self {
                        phase: GamePhase::WinStats,
                        delay: 0,
                        ..*self
                    }
                } else {
                    Self {
                        delay: self.delay + 1,
                        ..*self
                    }
                }
            }
            GamePhase::WinStats => {
                if self.delay + 1 >= timings.win_stats_ticks {
                    tracing::debug!("stats hold elapsed, returning to idle");
                    Self {
                        phase: GamePhase::Idle,
                        guess: Guess::MIN,
                        attempts: 0,
                        result: GuessResult::Entering,
                        delay: 0,
                        ..*self
                    }
                } else {
                    Self {
                        delay: self.delay + 1,
                        ..*self
                    }
                }
            }
        }
    }
}
