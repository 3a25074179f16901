//! All game entity types: pure data, no gameplay rules.

use rand::Rng;

use crate::config::GameConfig;

/// Cosmetic alien colour.  Gameplay code never reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlienVariant {
    Yellow,
    Magenta,
    Cyan,
    White,
}

impl AlienVariant {
    pub const ALL: [AlienVariant; 4] = [
        AlienVariant::Yellow,
        AlienVariant::Magenta,
        AlienVariant::Cyan,
        AlienVariant::White,
    ];

    /// Uniform pick among the four variants.
    pub fn pick(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned box in board units.  `x`/`y` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Open-interval overlap: boxes that only touch along an edge do not
    /// intersect.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Alien {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub alive: bool,
    pub variant: AlienVariant,
}

impl Alien {
    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, width: self.width, height: self.height }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Set once the bullet has scored a kill.  Never cleared.
    pub used: bool,
}

impl Bullet {
    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, width: self.width, height: self.height }
    }
}

// ── Wave parameters ───────────────────────────────────────────────────────────

/// Grid shape and speed of the current wave.
#[derive(Clone, Debug, PartialEq)]
pub struct Formation {
    pub columns: u32,
    pub rows: u32,
    /// Signed horizontal speed shared by every alien.
    pub velocity_x: f32,
}

// ── Master game state ─────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct WorldState {
    pub config: GameConfig,
    pub ship: Ship,
    pub aliens: Vec<Alien>,
    /// Oldest bullet first.
    pub bullets: Vec<Bullet>,
    /// Number of aliens with `alive == true`.
    pub alien_count: usize,
    pub formation: Formation,
    pub score: u32,
    /// Best score of this session.  Only updated on game over.
    pub high_score: u32,
    /// 1-based wave counter.
    pub wave: u32,
    pub status: GameStatus,
    pub frame: u64,
}

impl WorldState {
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Counts live aliens directly from the roster.
    pub fn live_aliens(&self) -> usize {
        self.aliens.iter().filter(|a| a.alive).count()
    }

    /// Resyncs `alien_count` with the roster.
    pub fn recount_aliens(&mut self) {
        self.alien_count = self.live_aliens();
    }
}
