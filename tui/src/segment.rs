//! Seven-segment art for the simulated display.
//!
//! Each digit position renders on a 4x5 character grid: the three horizontal
//! segments occupy the middle columns of rows 0, 2, and 4; the four vertical
//! segments sit in the outer columns of rows 1 and 3. A cell either belongs
//! to exactly one segment or is always blank.

use hilo_types::{Segment, SegmentPattern};

/// Character rows per digit.
pub const DIGIT_ROWS: usize = 5;
/// Character columns per digit.
pub const DIGIT_COLS: usize = 4;
/// Blank columns between adjacent digits.
pub const DIGIT_GAP: usize = 2;

/// The segment owning a grid cell, if any.
#[must_use]
pub const fn segment_at(row: usize, col: usize) -> Option<Segment> {
    match (row, col) {
        (0, 1 | 2) => Some(Segment::A),
        (1, 0) => Some(Segment::F),
        (1, 3) => Some(Segment::B),
        (2, 1 | 2) => Some(Segment::G),
        (3, 0) => Some(Segment::E),
        (3, 3) => Some(Segment::C),
        (4, 1 | 2) => Some(Segment::D),
        _ => None,
    }
}

/// Renders one pattern as plain text rows, `on` for lit cells.
#[must_use]
pub fn pattern_rows(pattern: SegmentPattern, on: char, off: char) -> [String; DIGIT_ROWS] {
    std::array::from_fn(|row| {
        (0..DIGIT_COLS)
            .map(|col| match segment_at(row, col) {
                Some(segment) if pattern.lit(segment) => on,
                _ => off,
            })
            .collect()
    })
}
