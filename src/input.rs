//! Player intents and the translators that produce them.

use crossterm::event::{KeyCode, KeyEvent};

use crate::config::DRAG_THRESHOLD;

/// A discrete request from the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    Fire,
    Restart,
}

/// Keyboard mapping.  Quit keys are the host's business and map to `None`.
pub fn intent_for_key(key: &KeyEvent) -> Option<Intent> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Intent::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Intent::MoveRight),
        KeyCode::Char(' ') => Some(Intent::Fire),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Intent::Restart),
        _ => None,
    }
}

/// Turns a press / drag / release gesture into intents.
///
/// Dragging further than the threshold yields one move per event and rebases
/// the anchor to the pointer, so a long drag produces a stream of moves.
/// Lifting the pointer fires; pressing on the game-over screen restarts.
#[derive(Clone, Debug)]
pub struct DragTracker {
    anchor: Option<f32>,
    threshold: f32,
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new(DRAG_THRESHOLD)
    }
}

impl DragTracker {
    pub fn new(threshold: f32) -> Self {
        Self { anchor: None, threshold }
    }

    pub fn press(&mut self, x: f32, game_over: bool) -> Option<Intent> {
        self.anchor = Some(x);
        game_over.then_some(Intent::Restart)
    }

    pub fn drag(&mut self, x: f32) -> Option<Intent> {
        let start = self.anchor?;
        self.anchor = Some(x);

        let diff = x - start;
        if diff > self.threshold {
            Some(Intent::MoveRight)
        } else if diff < -self.threshold {
            Some(Intent::MoveLeft)
        } else {
            None
        }
    }

    pub fn release(&mut self) -> Option<Intent> {
        self.anchor = None;
        Some(Intent::Fire)
    }
}
