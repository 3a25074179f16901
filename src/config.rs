//! Fixed gameplay constants and board geometry.
//!
//! Every length is measured in board units (pixels of a virtual board).
//! The terminal renderer scales these down to character cells.

use std::fmt;

// ── Board ─────────────────────────────────────────────────────────────────────

pub const TILE_SIZE: f32 = 32.0;
pub const BOARD_ROWS: u32 = 16;
pub const BOARD_COLUMNS: u32 = 16;

/// Largest board side, in tiles, the terminal viewport can address.
pub const MAX_BOARD_TILES: u32 = 1000;

// ── Ship & bullets ────────────────────────────────────────────────────────────

/// Bullets travel upward, so the velocity is negative.
pub const BULLET_VELOCITY_Y: f32 = -10.0;

// ── Aliens ────────────────────────────────────────────────────────────────────

pub const BASE_ALIEN_COLUMNS: u32 = 3;
pub const BASE_ALIEN_ROWS: u32 = 2;
pub const BASE_ALIEN_VELOCITY_X: f32 = 1.0;

/// Added to the formation speed every time a wave is cleared.
pub const ALIEN_SPEED_INCREMENT: f32 = 0.2;

pub const SCORE_PER_KILL: u32 = 100;

// ── Input ─────────────────────────────────────────────────────────────────────

/// Horizontal drag distance (board units) that produces one move intent.
pub const DRAG_THRESHOLD: f32 = 10.0;

/// Board dimensions for a session.  Everything else is derived from these.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    pub tile_size: f32,
    pub rows: u32,
    pub columns: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            rows: BOARD_ROWS,
            columns: BOARD_COLUMNS,
        }
    }
}

impl GameConfig {
    pub fn board_width(&self) -> f32 {
        self.tile_size * self.columns as f32
    }

    pub fn board_height(&self) -> f32 {
        self.tile_size * self.rows as f32
    }

    pub fn ship_width(&self) -> f32 {
        self.tile_size * 2.0
    }

    pub fn ship_height(&self) -> f32 {
        self.tile_size
    }

    /// One keypress moves the ship by a whole tile.
    pub fn ship_step(&self) -> f32 {
        self.tile_size
    }

    /// Ship spawn position: horizontally centred, two tiles above the bottom.
    pub fn ship_start(&self) -> (f32, f32) {
        (
            self.board_width() / 2.0 - self.tile_size,
            self.board_height() - self.tile_size * 2.0,
        )
    }

    pub fn alien_width(&self) -> f32 {
        self.tile_size * 2.0
    }

    pub fn alien_height(&self) -> f32 {
        self.tile_size
    }

    /// Top-left corner of the first alien in a freshly spawned grid.
    pub fn alien_origin(&self) -> (f32, f32) {
        (self.tile_size, self.tile_size)
    }

    pub fn bullet_width(&self) -> f32 {
        self.tile_size / 8.0
    }

    pub fn bullet_height(&self) -> f32 {
        self.tile_size / 2.0
    }

    /// Upper bound for the alien grid's column count.
    pub fn max_alien_columns(&self) -> u32 {
        (self.columns / 2).saturating_sub(2)
    }

    /// Upper bound for the alien grid's row count.
    pub fn max_alien_rows(&self) -> u32 {
        self.rows.saturating_sub(4)
    }

    /// Reject boards the wave rules cannot play on: the base grid has to
    /// fit, the growth caps may not shrink it, and the viewport has to stay
    /// addressable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows > MAX_BOARD_TILES || self.columns > MAX_BOARD_TILES {
            return Err(ConfigError::TooLarge { rows: self.rows, columns: self.columns });
        }
        let (origin_x, _) = self.alien_origin();
        let grid_edge = origin_x + BASE_ALIEN_COLUMNS as f32 * self.alien_width();
        if grid_edge >= self.board_width() || self.max_alien_columns() < BASE_ALIEN_COLUMNS {
            return Err(ConfigError::TooNarrow { columns: self.columns });
        }
        if self.max_alien_rows() < BASE_ALIEN_ROWS {
            return Err(ConfigError::TooShort { rows: self.rows });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    TooNarrow { columns: u32 },
    TooShort { rows: u32 },
    TooLarge { rows: u32, columns: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooNarrow { columns } => write!(
                f,
                "board is {columns} columns wide; the alien grid needs at least {}",
                (BASE_ALIEN_COLUMNS + 2) * 2
            ),
            Self::TooShort { rows } => write!(
                f,
                "board is {rows} rows tall; the alien grid needs at least {}",
                BASE_ALIEN_ROWS + 4
            ),
            Self::TooLarge { rows, columns } => write!(
                f,
                "board {columns}x{rows} exceeds the {MAX_BOARD_TILES}-tile limit"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
