//! End-to-end rounds driven through the keyboard layer.
//!
//! These tests go through [`handle_key`] rather than pressing harness lines
//! directly, so they cover the whole path from keystroke to latched digits.

use crossterm::event::KeyCode;

use hilo_core::App;
use hilo_tui::handle_key;
use hilo_types::{GamePhase, Guess};

use crate::common;

fn settle_phase(app: &mut App, phase: GamePhase) {
    for _ in 0..1_000 {
        app.advance_frame(common::FRAME_MS);
        if app.session().phase == phase {
            return;
        }
    }
    panic!("app never reached {phase:?}");
}

/// Presses a key, then runs enough frames for the pulse to land and the
/// debouncer to re-arm for the next press.
fn press_and_settle(app: &mut App, code: KeyCode) {
    handle_key(app, common::key(code));
    for _ in 0..4 {
        app.advance_frame(common::FRAME_MS);
    }
}

#[test]
fn keyboard_round_ends_in_victory() {
    let mut app = common::fast_app();

    handle_key(&mut app, common::key(KeyCode::Char('s')));
    settle_phase(&mut app, GamePhase::Playing);
    let target = app.session().target;

    // Walk the guess up from 1 to the rolled target, one press per step.
    for _ in 1..target.get() {
        press_and_settle(&mut app, KeyCode::Up);
    }
    assert_eq!(app.session().guess, target);

    handle_key(&mut app, common::key(KeyCode::Enter));
    settle_phase(&mut app, GamePhase::WinAnim);
    settle_phase(&mut app, GamePhase::WinStats);
    assert_eq!(app.session().attempts, 1);

    settle_phase(&mut app, GamePhase::Idle);
}

#[test]
fn missed_guess_returns_to_playing() {
    let mut app = common::fast_app();

    handle_key(&mut app, common::key(KeyCode::Char('s')));
    settle_phase(&mut app, GamePhase::Playing);

    // Guarantee a miss before submitting.
    if app.session().target == Guess::MIN {
        press_and_settle(&mut app, KeyCode::Up);
    }

    handle_key(&mut app, common::key(KeyCode::Enter));
    settle_phase(&mut app, GamePhase::ShowResult);
    settle_phase(&mut app, GamePhase::Playing);

    // The readout expires back into the round with the guess rewound to 1.
    assert_eq!(app.session().guess, Guess::MIN);
    assert_eq!(app.session().attempts, 1);
}

#[test]
fn reset_key_returns_to_power_on() {
    let mut app = common::fast_app();

    handle_key(&mut app, common::key(KeyCode::Char('s')));
    settle_phase(&mut app, GamePhase::Playing);
    press_and_settle(&mut app, KeyCode::Up);

    handle_key(&mut app, common::key(KeyCode::Char('r')));
    app.advance_frame(common::FRAME_MS);

    assert_eq!(app.session().phase, GamePhase::Idle);
    assert_eq!(app.session().guess, Guess::MIN);
    assert_eq!(app.session().attempts, 0);

    // The round is gone for good, not merely interrupted.
    for _ in 0..10 {
        app.advance_frame(common::FRAME_MS);
    }
    assert_eq!(app.session().phase, GamePhase::Idle);
}

#[test]
fn pause_key_freezes_the_clock() {
    let mut app = common::fast_app();
    app.advance_frame(common::FRAME_MS);
    let frozen = app.tick_count();

    handle_key(&mut app, common::key(KeyCode::Char('p')));
    for _ in 0..5 {
        assert_eq!(app.advance_frame(common::FRAME_MS), 0);
    }
    assert_eq!(app.tick_count(), frozen);

    handle_key(&mut app, common::key(KeyCode::Char('p')));
    app.advance_frame(common::FRAME_MS);
    assert!(app.tick_count() > frozen);
}
