//! Core domain types for Hilo.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Everything here can be used from any layer of the
//! application: the controller core, the terminal renderer, and tests.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

pub mod ui;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Guess
// ============================================================================

/// A guess value guaranteed to be in `1..=10`.
///
/// The game plays over a fixed 1-10 range; making the bound part of the type
/// means no comparison or render path ever has to re-check it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Guess(u8);

#[derive(Debug, Clone, Copy, Error)]
#[error("guess must be between 1 and 10 (got {0})")]
pub struct GuessRangeError(u8);

impl Guess {
    pub const MIN: Guess = Guess(1);
    pub const MAX: Guess = Guess(10);

    pub fn new(value: u8) -> Result<Self, GuessRangeError> {
        if (1..=10).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GuessRangeError(value))
        }
    }

    /// Maps a raw 4-bit generator value onto the guessable range.
    #[must_use]
    pub const fn from_random(nibble: u8) -> Self {
        Self((nibble % 10) + 1)
    }

    /// The next value in the cycle: 1, 2, ..., 10, back to 1.
    #[must_use]
    pub const fn wrapping_increment(self) -> Self {
        if self.0 == 10 { Self(1) } else { Self(self.0 + 1) }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Units digit as shown on a single display position (10 renders as 0).
    #[must_use]
    pub const fn units(self) -> u8 {
        self.0 % 10
    }

    #[must_use]
    pub const fn is_ten(self) -> bool {
        self.0 == 10
    }
}

impl TryFrom<u8> for Guess {
    type Error = GuessRangeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Guess> for u8 {
    fn from(value: Guess) -> Self {
        value.0
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// Game Phases & Outcomes
// ============================================================================

/// The major mode of the game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a round to begin.
    #[default]
    Idle,
    /// Accepting increment/submit input.
    Playing,
    /// Holding the low/high/win readout for a fixed delay.
    ShowResult,
    /// Running the victory sweep on the display.
    WinAnim,
    /// Showing the final attempt count and target.
    WinStats,
}

impl GamePhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GamePhase::Idle => "idle",
            GamePhase::Playing => "playing",
            GamePhase::ShowResult => "show-result",
            GamePhase::WinAnim => "win-anim",
            GamePhase::WinStats => "win-stats",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            GamePhase::Idle => "Idle",
            GamePhase::Playing => "Playing",
            GamePhase::ShowResult => "Result",
            GamePhase::WinAnim => "Victory",
            GamePhase::WinStats => "Stats",
        }
    }
}

/// Outcome of the most recent comparison, or `Entering` while none is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GuessResult {
    #[default]
    Entering,
    Low,
    High,
    Win,
}

impl GuessResult {
    /// Classifies a submitted guess against the hidden target.
    #[must_use]
    pub fn of_comparison(guess: Guess, target: Guess) -> Self {
        match guess.cmp(&target) {
            Ordering::Less => GuessResult::Low,
            Ordering::Greater => GuessResult::High,
            Ordering::Equal => GuessResult::Win,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GuessResult::Entering => "entering",
            GuessResult::Low => "low",
            GuessResult::High => "high",
            GuessResult::Win => "win",
        }
    }
}

// ============================================================================
// Buttons & Raw Inputs
// ============================================================================

/// The three debounced button lines, in debouncer-bank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonLine {
    Start,
    Increment,
    Submit,
}

impl ButtonLine {
    pub const ALL: [ButtonLine; 3] = [
        ButtonLine::Start,
        ButtonLine::Increment,
        ButtonLine::Submit,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            ButtonLine::Start => 0,
            ButtonLine::Increment => 1,
            ButtonLine::Submit => 2,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ButtonLine::Start => "start",
            ButtonLine::Increment => "increment",
            ButtonLine::Submit => "submit",
        }
    }
}

/// Raw input levels sampled once at the top of a controller step.
///
/// `reset` is a level, not a button: it bypasses debouncing entirely and is
/// honored before anything else runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawInputs {
    pub reset: bool,
    pub start: bool,
    pub increment: bool,
    pub submit: bool,
}

impl RawInputs {
    #[must_use]
    pub const fn line(self, line: ButtonLine) -> bool {
        match line {
            ButtonLine::Start => self.start,
            ButtonLine::Increment => self.increment,
            ButtonLine::Submit => self.submit,
        }
    }
}

// ============================================================================
// Seven-Segment Encoding
// ============================================================================

/// One of the eight segment lines of a display position.
///
/// Bit positions follow the usual `dp g f e d c b a` layout, segment `a` at
/// bit 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    Dp,
}

impl Segment {
    pub const ALL: [Segment; 8] = [
        Segment::A,
        Segment::B,
        Segment::C,
        Segment::D,
        Segment::E,
        Segment::F,
        Segment::G,
        Segment::Dp,
    ];

    #[must_use]
    pub const fn bit(self) -> u8 {
        match self {
            Segment::A => 0,
            Segment::B => 1,
            Segment::C => 2,
            Segment::D => 3,
            Segment::E => 4,
            Segment::F => 5,
            Segment::G => 6,
            Segment::Dp => 7,
        }
    }
}

/// Everything a single display position can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    /// Capital `L`, first half of the "Lo" readout.
    UpperL,
    /// Capital `H`, first half of the "Hi" readout.
    UpperH,
    /// Lowercase `o`, second half of "Lo".
    LowerO,
    /// Lowercase `i` (segment `c` alone), second half of "Hi".
    LowerI,
    /// The middle segment alone; the victory sweep cursor.
    Bar,
    Blank,
}

impl Glyph {
    /// Glyph for a single decimal digit.
    #[must_use]
    pub const fn digit(value: u8) -> Self {
        match value % 10 {
            0 => Glyph::Zero,
            1 => Glyph::One,
            2 => Glyph::Two,
            3 => Glyph::Three,
            4 => Glyph::Four,
            5 => Glyph::Five,
            6 => Glyph::Six,
            7 => Glyph::Seven,
            8 => Glyph::Eight,
            _ => Glyph::Nine,
        }
    }

    /// Active-high segment mask, `dp g f e d c b a` bit order.
    #[must_use]
    pub const fn mask(self) -> u8 {
        match self {
            Glyph::Zero => 0x3F,
            Glyph::One => 0x06,
            Glyph::Two => 0x5B,
            Glyph::Three => 0x4F,
            Glyph::Four => 0x66,
            Glyph::Five => 0x6D,
            Glyph::Six => 0x7D,
            Glyph::Seven => 0x07,
            Glyph::Eight => 0x7F,
            Glyph::Nine => 0x6F,
            Glyph::UpperL => 0x38,
            Glyph::UpperH => 0x76,
            Glyph::LowerO => 0x5C,
            Glyph::LowerI => 0x04,
            Glyph::Bar => 0x40,
            Glyph::Blank => 0x00,
        }
    }
}

/// Active-low segment pattern as driven on the wire.
///
/// A cleared bit lights the segment; `0xFF` is a dark position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentPattern(u8);

impl SegmentPattern {
    pub const BLANK: SegmentPattern = SegmentPattern(0xFF);

    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Whether the given segment is lit (its active-low line pulled down).
    #[must_use]
    pub const fn lit(self, segment: Segment) -> bool {
        (self.0 >> segment.bit()) & 1 == 0
    }

    #[must_use]
    pub const fn is_blank(self) -> bool {
        self.0 == 0xFF
    }
}

impl From<Glyph> for SegmentPattern {
    fn from(glyph: Glyph) -> Self {
        SegmentPattern(!glyph.mask())
    }
}

impl Default for SegmentPattern {
    fn default() -> Self {
        SegmentPattern::BLANK
    }
}

/// Active-low one-hot digit enable across the four display positions.
///
/// Only the low nibble is meaningful; a cleared bit enables that position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitSelect(u8);

impl DigitSelect {
    /// All positions disabled.
    pub const NONE: DigitSelect = DigitSelect(0x0F);

    /// Enables exactly one of positions `0..=3`.
    #[must_use]
    pub const fn position(position: u8) -> Self {
        debug_assert!(position < 4, "digit position out of range");
        DigitSelect(!(1 << position) & 0x0F)
    }

    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// The enabled position, if exactly one line is driven low.
    #[must_use]
    pub const fn selected(self) -> Option<u8> {
        let low = !self.0 & 0x0F;
        if low.count_ones() == 1 {
            Some(low.trailing_zeros() as u8)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn is_one_hot(self) -> bool {
        (!self.0 & 0x0F).count_ones() == 1
    }
}

/// What the controller drives out on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOutput {
    pub digit_select: DigitSelect,
    pub segments: SegmentPattern,
}

// ============================================================================
// Tests
// ============================================================================
