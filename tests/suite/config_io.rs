//! Config file loading wired through the harness.
//!
//! Writes real TOML files to a temp dir and checks that the loaded settings
//! actually change how the simulation runs.

use hilo_core::{App, HiloConfig};

use crate::common;

fn load_from(toml: &str) -> HiloConfig {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, toml).expect("write config");
    HiloConfig::load_path(&path)
        .expect("load config")
        .expect("config present")
}

#[test]
fn config_file_drives_the_tick_rate() {
    let config = load_from(
        r"
[timing]
tick_hz = 500
",
    );
    let mut app = App::new(&config);

    // 500 Hz turns an 8 ms frame into 4 ticks.
    assert_eq!(app.advance_frame(common::FRAME_MS), 4);
    assert_eq!(app.tick_count(), 4);
}

#[test]
fn config_file_sets_ui_options() {
    let config = load_from(
        r"
[app]
ascii_only = true
high_contrast = true
",
    );
    let app = App::new(&config);

    assert!(app.ui_options().ascii_only);
    assert!(app.ui_options().high_contrast);
    assert!(!app.ui_options().reduced_motion);
}

#[test]
fn missing_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");

    let loaded = HiloConfig::load_path(&path).expect("load config");
    assert!(loaded.is_none());

    let mut app = App::new(&loaded.unwrap_or_default());
    assert_eq!(app.advance_frame(common::FRAME_MS), 8);
}
