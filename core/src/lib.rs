//! Core controller logic for Hilo.
//!
//! This crate contains the whole cycle-driven controller: input conditioning,
//! the pseudo-random generator, the game state machine, and the display
//! driver, composed by [`Controller`] under freeze-compute-commit snapshot
//! semantics. It also carries configuration loading and the [`App`] harness
//! that feeds the controller ticks and raw button levels from the simulator.
//!
//! Nothing here draws or reads the terminal; the TUI crate renders read-only
//! views of the state owned here.

pub mod app;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod display;
pub mod game;
pub mod lfsr;

pub use app::{App, DisplayLatch};
pub use config::{ConfigError, HiloConfig, TimingConfig, Timings};
pub use controller::Controller;
pub use debounce::Debouncer;
pub use display::DisplayFrame;
pub use game::{ButtonEdges, GameSession};
pub use lfsr::Lfsr4;
