use rand::Rng;
use tracing::info;

use crate::config::ALIEN_SPEED_INCREMENT;
use crate::entities::{GameStatus, WorldState};

use super::spawn_aliens;

/// End-of-frame rules: loss first, then wave clear.
pub fn step(state: &mut WorldState, rng: &mut impl Rng) {
    if check_loss(state) {
        return;
    }
    if state.alien_count == 0 {
        next_wave(state, rng);
    }
}

/// Switch to game over if any live alien has reached the ship's row.
/// Returns whether the game is (now) over.
pub fn check_loss(state: &mut WorldState) -> bool {
    if state.is_game_over() {
        return true;
    }
    let ship_y = state.ship.y;
    if !state.aliens.iter().any(|a| a.alive && a.y >= ship_y) {
        return false;
    }

    state.status = GameStatus::GameOver;
    state.high_score = state.high_score.max(state.score);
    info!(
        score = state.score,
        high_score = state.high_score,
        wave = state.wave,
        "game over"
    );
    true
}

/// Grow the grid (within the board caps), speed the formation up and spawn
/// a fresh wave.  Both rosters are emptied.
pub fn next_wave(state: &mut WorldState, rng: &mut impl Rng) {
    let cfg = state.config;
    let formation = &mut state.formation;

    formation.columns = (formation.columns + 1).min(cfg.max_alien_columns());
    formation.rows = (formation.rows + 1).min(cfg.max_alien_rows());

    let speed = formation.velocity_x.abs() + ALIEN_SPEED_INCREMENT;
    formation.velocity_x = speed.copysign(formation.velocity_x);

    state.bullets.clear();
    state.wave += 1;
    spawn_aliens(state, rng);

    info!(
        wave = state.wave,
        columns = state.formation.columns,
        rows = state.formation.rows,
        velocity_x = state.formation.velocity_x,
        "wave cleared"
    );
}
