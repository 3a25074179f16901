use tracing::debug;

use crate::config::BULLET_VELOCITY_Y;
use crate::entities::WorldState;

/// Move the formation and every bullet by one frame.
///
/// The first live alien (in roster order) that touches a side wall after
/// moving triggers a single bounce for the whole formation: the velocity
/// flips, every alien is pushed back by twice the new velocity and the
/// roster drops one alien-height.
pub fn step(state: &mut WorldState) {
    advance_formation(state);
    advance_bullets(state);
}

fn advance_formation(state: &mut WorldState) {
    let board_width = state.config.board_width();
    let velocity = state.formation.velocity_x;

    for alien in state.aliens.iter_mut().filter(|a| a.alive) {
        alien.x += velocity;
    }

    let hit_wall = state
        .aliens
        .iter()
        .filter(|a| a.alive)
        .any(|a| a.x + a.width >= board_width || a.x <= 0.0);
    if !hit_wall {
        return;
    }

    state.formation.velocity_x = -velocity;
    let nudge = state.formation.velocity_x * 2.0;
    let drop = state.config.alien_height();
    for alien in state.aliens.iter_mut() {
        alien.x += nudge;
        alien.y += drop;
    }
    debug!(
        frame = state.frame,
        velocity_x = state.formation.velocity_x,
        "formation bounced"
    );
}

fn advance_bullets(state: &mut WorldState) {
    for bullet in state.bullets.iter_mut() {
        bullet.y += BULLET_VELOCITY_Y;
    }
}
