//! Multiplexed four-digit display driver.
//!
//! The driver owns two counters: a dwell counter that walks the active digit
//! position round-robin, and an animation counter that advances the victory
//! sweep frame while the session is in WinAnim. Rendering is combinational:
//! `render` maps the committed frame plus the committed session onto a
//! one-hot digit select and an active-low segment pattern, touching no state.

use hilo_types::{DigitSelect, DisplayOutput, GamePhase, Glyph, GuessResult, SegmentPattern};

use crate::config::Timings;
use crate::game::GameSession;

/// Frame-to-position map of the victory sweep.
///
/// Not a clean ping-pong: frame 7 revisits position 1 instead of mirroring
/// frame 1's neighbor, so the bar stutters once per pass.
const WIN_SWEEP: [u8; 8] = [0, 1, 2, 3, 2, 1, 0, 1];

/// Multiplexing and animation state, committed once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayFrame {
    /// Active digit position, 0 (rightmost) to 3 (leftmost).
    digit_index: u8,
    /// Ticks spent on the current digit position.
    refresh: u32,
    /// Victory sweep frame, 0 to 7. Held at 0 outside WinAnim.
    anim_frame: u8,
    /// Ticks spent on the current sweep frame.
    anim_counter: u32,
}

impl DisplayFrame {
    /// Computes the next frame from the previous snapshot.
    #[must_use]
    pub fn step(&self, phase: GamePhase, timings: &Timings) -> Self {
        let (digit_index, refresh) = if self.refresh + 1 >= timings.dwell_ticks {
            ((self.digit_index + 1) & 0x03, 0)
        } else {
            (self.digit_index, self.refresh + 1)
        };

        let (anim_frame, anim_counter) = if phase == GamePhase::WinAnim {
            if self.anim_counter + 1 >= timings.anim_frame_ticks {
                ((self.anim_frame + 1) & 0x07, 0)
            } else {
                (self.anim_frame, self.anim_counter + 1)
            }
        } else {
            (0, 0)
        };

        Self {
            digit_index,
            refresh,
            anim_frame,
            anim_counter,
        }
    }

    #[must_use]
    pub const fn digit_index(&self) -> u8 {
        self.digit_index
    }

    #[must_use]
    pub const fn anim_frame(&self) -> u8 {
        self.anim_frame
    }

    /// Renders the active digit position for this tick.
    #[must_use]
    pub fn render(&self, session: &GameSession) -> DisplayOutput {
        DisplayOutput {
            digit_select: DigitSelect::position(self.digit_index),
            segments: SegmentPattern::from(glyph_at(self.digit_index, self.anim_frame, session)),
        }
    }

    /// Renders an arbitrary position, independent of the dwell cycle.
    #[must_use]
    pub fn glyph_for(&self, position: u8, session: &GameSession) -> Glyph {
        glyph_at(position, self.anim_frame, session)
    }
}

/// The glyph shown at `position` (0 = rightmost, 3 = leftmost).
fn glyph_at(position: u8, anim_frame: u8, session: &GameSession) -> Glyph {
    if session.phase == GamePhase::WinAnim {
        return if WIN_SWEEP[usize::from(anim_frame & 0x07)] == position {
            Glyph::Bar
        } else {
            Glyph::Blank
        };
    }

    match position {
        // Units digit: the primary readout.
        0 => match session.phase {
            GamePhase::WinStats => Glyph::digit(session.target.units()),
            _ => match session.result {
                GuessResult::Low => Glyph::UpperL,
                GuessResult::High => Glyph::UpperH,
                _ => Glyph::digit(session.guess.units()),
            },
        },
        // Tens companion: spells "Lo"/"Hi" with position 0, or carries the
        // leading 1 of a ten.
        1 => match session.phase {
            GamePhase::WinStats => {
                if session.target.is_ten() {
                    Glyph::One
                } else {
                    Glyph::Blank
                }
            }
            _ => match session.result {
                GuessResult::Low => Glyph::LowerO,
                GuessResult::High => Glyph::LowerI,
                _ => {
                    if session.guess.is_ten() {
                        Glyph::One
                    } else {
                        Glyph::Blank
                    }
                }
            },
        },
        2 => {
            if session.attempts >= 10 {
                Glyph::digit(session.attempts / 10)
            } else {
                Glyph::Blank
            }
        }
        _ => Glyph::digit(session.attempts % 10),
    }
}
