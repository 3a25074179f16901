use tracing::debug;

use crate::config::SCORE_PER_KILL;
use crate::entities::WorldState;
use crate::feedback::{trigger, Cue, FeedbackSink};

/// Resolve bullet ↔ alien hits, then drop spent bullets from the front of
/// the roster.
///
/// Each unused bullet kills at most one alien: the first live alien it
/// overlaps in roster order.
pub fn step(state: &mut WorldState, sink: &mut dyn FeedbackSink) {
    for bullet in state.bullets.iter_mut().filter(|b| !b.used) {
        let target = state
            .aliens
            .iter_mut()
            .find(|alien| alien.alive && bullet.rect().overlaps(&alien.rect()));

        if let Some(alien) = target {
            bullet.used = true;
            alien.alive = false;
            state.alien_count -= 1;
            state.score += SCORE_PER_KILL;
            debug!(
                frame = state.frame,
                x = alien.x,
                y = alien.y,
                score = state.score,
                "alien hit"
            );
            trigger(sink, Cue::Hit);
        }
    }

    prune_bullets(state);
}

/// Remove bullets from the front while the leading one is used or has left
/// the top of the board.  A spent bullet behind a live one stays put.
pub fn prune_bullets(state: &mut WorldState) {
    let spent = state
        .bullets
        .iter()
        .take_while(|b| b.used || b.y < 0.0)
        .count();
    state.bullets.drain(..spent);
}
