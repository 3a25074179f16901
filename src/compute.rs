//! Game-logic functions.
//!
//! Every public function takes the `WorldState` by mutable reference and
//! updates it in place.  Randomness (cosmetic only) and audio come in through
//! injected handles, so a seeded RNG and a recording sink make every frame
//! reproducible.

pub mod collision;
pub mod movement;
pub mod progression;

use rand::Rng;
use tracing::info;

use crate::config::{
    GameConfig, BASE_ALIEN_COLUMNS, BASE_ALIEN_ROWS, BASE_ALIEN_VELOCITY_X,
};
use crate::entities::{Alien, AlienVariant, Bullet, Formation, GameStatus, Ship, WorldState};
use crate::feedback::{trigger, Cue, FeedbackSink};

// ── Constructors ─────────────────────────────────────────────────────────────

fn wave_one() -> Formation {
    Formation {
        columns: BASE_ALIEN_COLUMNS,
        rows: BASE_ALIEN_ROWS,
        velocity_x: BASE_ALIEN_VELOCITY_X,
    }
}

fn starting_ship(config: &GameConfig) -> Ship {
    let (x, y) = config.ship_start();
    Ship {
        x,
        y,
        width: config.ship_width(),
        height: config.ship_height(),
    }
}

/// Build a fresh wave-1 session with its alien grid already spawned.
pub fn init_state(config: GameConfig, rng: &mut impl Rng) -> WorldState {
    let mut state = WorldState {
        config,
        ship: starting_ship(&config),
        aliens: Vec::new(),
        bullets: Vec::new(),
        alien_count: 0,
        formation: wave_one(),
        score: 0,
        high_score: 0,
        wave: 1,
        status: GameStatus::Playing,
        frame: 0,
    };
    spawn_aliens(&mut state, rng);
    state
}

/// Replace the roster with a full `columns × rows` grid at the spawn origin.
/// Aliens are laid out column by column.
pub fn spawn_aliens(state: &mut WorldState, rng: &mut impl Rng) {
    let cfg = state.config;
    let (origin_x, origin_y) = cfg.alien_origin();

    state.aliens.clear();
    for c in 0..state.formation.columns {
        for r in 0..state.formation.rows {
            state.aliens.push(Alien {
                x: origin_x + c as f32 * cfg.alien_width(),
                y: origin_y + r as f32 * cfg.alien_height(),
                width: cfg.alien_width(),
                height: cfg.alien_height(),
                alive: true,
                variant: AlienVariant::pick(rng),
            });
        }
    }
    state.alien_count = state.aliens.len();
}

// ── Input-driven state transitions ──────────────────────────────────────────

pub fn move_ship_left(state: &mut WorldState) {
    if state.is_game_over() {
        return;
    }
    let step = state.config.ship_step();
    if state.ship.x - step >= 0.0 {
        state.ship.x -= step;
    }
}

pub fn move_ship_right(state: &mut WorldState) {
    if state.is_game_over() {
        return;
    }
    let step = state.config.ship_step();
    if state.ship.x + step + state.ship.width <= state.config.board_width() {
        state.ship.x += step;
    }
}

/// Spawn a bullet just right of the ship's centre line.
pub fn fire(state: &mut WorldState, sink: &mut dyn FeedbackSink) {
    if state.is_game_over() {
        return;
    }
    let cfg = state.config;
    state.bullets.push(Bullet {
        x: state.ship.x + state.ship.width * 15.0 / 32.0,
        y: state.ship.y,
        width: cfg.bullet_width(),
        height: cfg.bullet_height(),
        used: false,
    });
    trigger(sink, Cue::Shoot);
}

/// Leave the game-over screen and start again from wave 1.
/// The session high score survives.
pub fn restart(state: &mut WorldState, rng: &mut impl Rng) {
    if !state.is_game_over() {
        return;
    }
    state.status = GameStatus::Playing;
    state.score = 0;
    state.wave = 1;
    state.ship = starting_ship(&state.config);
    state.formation = wave_one();
    state.bullets.clear();
    spawn_aliens(state, rng);
    info!(high_score = state.high_score, "game restarted");
}

// ── Per-frame tick ──────────────────────────────────────────────────────────

/// Advance the simulation by one frame: movement, collision, progression.
/// Does nothing once the game is over.
pub fn tick(state: &mut WorldState, rng: &mut impl Rng, sink: &mut dyn FeedbackSink) {
    if state.is_game_over() {
        return;
    }
    state.frame += 1;

    movement::step(state);
    collision::step(state, sink);
    progression::step(state, rng);
}
