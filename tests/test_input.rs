use alien_invasion::input::*;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

// ── keyboard ──────────────────────────────────────────────────────────────────

#[test]
fn arrow_and_letter_keys_move() {
    assert_eq!(intent_for_key(&key(KeyCode::Left)), Some(Intent::MoveLeft));
    assert_eq!(intent_for_key(&key(KeyCode::Char('a'))), Some(Intent::MoveLeft));
    assert_eq!(intent_for_key(&key(KeyCode::Right)), Some(Intent::MoveRight));
    assert_eq!(intent_for_key(&key(KeyCode::Char('D'))), Some(Intent::MoveRight));
}

#[test]
fn space_fires_and_r_restarts() {
    assert_eq!(intent_for_key(&key(KeyCode::Char(' '))), Some(Intent::Fire));
    assert_eq!(intent_for_key(&key(KeyCode::Char('r'))), Some(Intent::Restart));
    assert_eq!(intent_for_key(&key(KeyCode::Char('R'))), Some(Intent::Restart));
}

#[test]
fn other_keys_are_not_intents() {
    assert_eq!(intent_for_key(&key(KeyCode::Char('q'))), None);
    assert_eq!(intent_for_key(&key(KeyCode::Esc)), None);
    assert_eq!(intent_for_key(&key(KeyCode::Up)), None);
}

// ── drag gestures ─────────────────────────────────────────────────────────────

#[test]
fn press_restarts_only_after_game_over() {
    let mut drag = DragTracker::default();
    assert_eq!(drag.press(100.0, false), None);
    assert_eq!(drag.press(100.0, true), Some(Intent::Restart));
}

#[test]
fn drag_without_press_does_nothing() {
    let mut drag = DragTracker::default();
    assert_eq!(drag.drag(500.0), None);
}

#[test]
fn drag_past_threshold_moves() {
    let mut drag = DragTracker::default();
    drag.press(100.0, false);
    assert_eq!(drag.drag(111.0), Some(Intent::MoveRight));
    assert_eq!(drag.drag(100.0), Some(Intent::MoveLeft));
}

#[test]
fn drag_within_threshold_is_ignored() {
    let mut drag = DragTracker::default();
    drag.press(100.0, false);
    assert_eq!(drag.drag(110.0), None); // exactly the threshold
    assert_eq!(drag.drag(101.0), None);
}

#[test]
fn small_steps_never_accumulate() {
    // The anchor follows the pointer, so only fast drags move the ship.
    let mut drag = DragTracker::default();
    drag.press(0.0, false);
    for step in 1..=10 {
        assert_eq!(drag.drag(step as f32 * 6.0), None);
    }
}

#[test]
fn release_fires_and_ends_gesture() {
    let mut drag = DragTracker::default();
    drag.press(100.0, false);
    assert_eq!(drag.release(), Some(Intent::Fire));
    assert_eq!(drag.drag(200.0), None);
}

#[test]
fn custom_threshold() {
    let mut drag = DragTracker::new(1.0);
    drag.press(0.0, false);
    assert_eq!(drag.drag(2.0), Some(Intent::MoveRight));
}
