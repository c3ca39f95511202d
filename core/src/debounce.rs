//! Input conditioning for one raw button line.
//!
//! A raw level passes through a two-stage synchronizer, then a stability
//! counter: only after the synchronized level has disagreed with the current
//! debounced level for a full debounce window does the debounced level
//! follow. A one-tick-delayed copy of the debounced level turns the 0-to-1
//! transition into a single-tick edge.

/// Conditioning state for a single button.
///
/// `step` is pure: it reads only the previous snapshot and the raw sample for
/// this tick, and returns the next snapshot. The controller commits all
/// component updates at once, so no same-tick value is ever observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Debouncer {
    sync: [bool; 2],
    stable: bool,
    prev_stable: bool,
    counter: u32,
}

impl Debouncer {
    #[must_use]
    pub fn step(&self, raw: bool, debounce_ticks: u32) -> Self {
        let synchronized = self.sync[1];
        let (stable, counter) = if synchronized == self.stable {
            (self.stable, 0)
        } else if self.counter + 1 >= debounce_ticks {
            (synchronized, 0)
        } else {
            (self.stable, self.counter + 1)
        };

        Self {
            sync: [raw, self.sync[0]],
            stable,
            prev_stable: self.stable,
            counter,
        }
    }

    /// The debounced level.
    #[must_use]
    pub const fn stable(&self) -> bool {
        self.stable
    }

    /// True for exactly one tick after the debounced level rises.
    #[must_use]
    pub const fn edge(&self) -> bool {
        self.stable && !self.prev_stable
    }
}

#[cfg(test)]
mod tests {
    use super::Debouncer;

    const WINDOW: u32 = 4;

    fn run(debouncer: Debouncer, raw: &[bool]) -> Debouncer {
        raw.iter()
            .fold(debouncer, |state, &level| state.step(level, WINDOW))
    }

    #[test]
    fn bounce_shorter_than_window_is_rejected() {
        // Alternate the raw line every tick; the synchronized level never
        // holds long enough for the counter to reach the window.
        let mut state = Debouncer::default();
        for i in 0..40 {
            state = state.step(i % 2 == 0, WINDOW);
            assert!(!state.stable(), "stable moved on a bouncing input");
            assert!(!state.edge());
        }
    }

    #[test]
    fn sustained_press_commits_after_window() {
        let mut state = Debouncer::default();
        let mut edge_ticks = Vec::new();
        for tick in 0..20 {
            state = state.step(true, WINDOW);
            if state.edge() {
                edge_ticks.push(tick);
            }
        }
        assert!(state.stable());
        // Two steps fill the synchronizer, then the window counts down; the
        // edge lands with the commit (tick indices are zero-based).
        assert_eq!(edge_ticks, vec![WINDOW as usize + 1]);
    }

    #[test]
    fn edge_fires_exactly_once_per_press() {
        let mut state = Debouncer::default();
        let press: Vec<bool> = std::iter::repeat_n(true, 12)
            .chain(std::iter::repeat_n(false, 12))
            .collect();
        let mut edges = 0;
        for &level in &press {
            state = state.step(level, WINDOW);
            if state.edge() {
                edges += 1;
            }
        }
        assert_eq!(edges, 1);
        assert!(!state.stable(), "release should debounce back to low");
    }

    #[test]
    fn release_has_no_edge() {
        let held = run(Debouncer::default(), &[true; 12]);
        assert!(held.stable());
        let released = run(held, &[false; 12]);
        assert!(!released.stable());
        assert!(!released.edge());
    }

    #[test]
    fn short_glitch_during_hold_does_not_drop_stable() {
        let mut state = run(Debouncer::default(), &[true; 12]);
        assert!(state.stable());
        // Two low ticks is shorter than the window; stable must hold.
        state = run(state, &[false, false]);
        state = run(state, &[true; 8]);
        assert!(state.stable());
        assert!(!state.edge(), "no new edge without a full release");
    }
}
