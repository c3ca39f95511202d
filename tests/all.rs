//! Integration test aggregator.
//!
//! Entry point for the harness-level integration tests. Individual test
//! modules are declared in `suite/mod.rs`.

mod common;
mod suite;
