//! Key events through the tracker into the game, frame by frame.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use blockfall::core::{GameState, ScriptedPieces};
use blockfall::input::{Command, KeyTracker};
use blockfall::types::PieceKind;

fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind,
        state: KeyEventState::NONE,
    }
}

#[test]
fn holding_left_moves_once() {
    let mut game = GameState::with_source(ScriptedPieces::repeat(PieceKind::O));
    game.start();
    let mut tracker = KeyTracker::new();

    tracker.handle_event(key(KeyCode::Left, KeyEventKind::Press), 0);
    for frame in 1..=5u64 {
        // Terminal auto-repeat while the key stays down.
        tracker.handle_event(key(KeyCode::Left, KeyEventKind::Repeat), frame * 16);
        game.tick(16, tracker.take_frame(frame * 16));
    }

    assert_eq!(game.position(), (3, 0));
}

#[test]
fn separate_taps_move_each_time() {
    let mut game = GameState::with_source(ScriptedPieces::repeat(PieceKind::O));
    game.start();
    let mut tracker = KeyTracker::new();

    for i in 0..3u64 {
        let t = i * 100;
        tracker.handle_event(key(KeyCode::Right, KeyEventKind::Press), t);
        game.tick(16, tracker.take_frame(t + 16));
        tracker.handle_event(key(KeyCode::Right, KeyEventKind::Release), t + 50);
    }

    assert_eq!(game.position(), (7, 0));
}

#[test]
fn press_only_terminals_recover_after_timeout() {
    let mut game = GameState::with_source(ScriptedPieces::repeat(PieceKind::O));
    game.start();
    let mut tracker = KeyTracker::new().with_key_release_timeout_ms(100);

    // No release events at all.
    tracker.handle_event(key(KeyCode::Left, KeyEventKind::Press), 0);
    game.tick(16, tracker.take_frame(16));
    game.tick(16, tracker.take_frame(200));
    tracker.handle_event(key(KeyCode::Left, KeyEventKind::Press), 210);
    game.tick(16, tracker.take_frame(226));

    assert_eq!(game.position(), (2, 0));
}

#[test]
fn session_keys_are_returned_to_caller() {
    let mut tracker = KeyTracker::new();
    assert_eq!(
        tracker.handle_event(key(KeyCode::Char('r'), KeyEventKind::Press), 0),
        Some(Command::Restart)
    );
    assert!(tracker.take_frame(16).is_empty());
}
