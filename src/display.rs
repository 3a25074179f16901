//! Rendering layer. All terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! world.  No game logic is performed; this module only translates state
//! into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    event::DisableMouseCapture,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use alien_invasion::config::GameConfig;
use alien_invasion::entities::{Alien, AlienVariant, Bullet, WorldState};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::White;
const C_HUD_WAVE: Color = Color::Green;
const C_SHIP: Color = Color::White;
const C_BULLET: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;
const C_GAME_OVER: Color = Color::Red;

fn variant_color(variant: AlienVariant) -> Color {
    match variant {
        AlienVariant::Yellow => Color::Yellow,
        AlienVariant::Magenta => Color::Magenta,
        AlienVariant::Cyan => Color::Cyan,
        AlienVariant::White => Color::White,
    }
}

// ── Board ↔ terminal mapping ──────────────────────────────────────────────────

/// Maps board units onto character cells.  A tile is two columns wide and
/// one row tall, which keeps the board roughly square in most fonts.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    cell_w: f32,
    cell_h: f32,
    cols: u16,
    rows: u16,
}

/// Top-left cell of the play area (inside the border, below the HUD).
const ORIGIN_X: u16 = 1;
const ORIGIN_Y: u16 = 2;

/// Room for the HUD and hint lines on narrow boards.
const MIN_WIDTH: u16 = 56;

const CONTROLS_HINT: &str = "←→/AD/Drag Move  SPACE/Click Fire  R Restart  Q Quit";

impl Viewport {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            cell_w: config.tile_size / 2.0,
            cell_h: config.tile_size,
            cols: (config.columns * 2) as u16,
            rows: config.rows as u16,
        }
    }

    /// Total terminal size needed: HUD, borders and hint line included.
    pub fn required_size(&self) -> (u16, u16) {
        ((self.cols + 2).max(MIN_WIDTH), self.rows + 4)
    }

    /// Terminal cell for a board position, or `None` when it falls outside
    /// the play area.
    fn cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let col = (x / self.cell_w) as u16;
        let row = (y / self.cell_h) as u16;
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some((ORIGIN_X + col, ORIGIN_Y + row))
    }

    /// Width of a board length in cells, at least one.
    fn span(&self, width: f32) -> usize {
        ((width / self.cell_w).round() as usize).max(1)
    }

    /// Board x at the centre of a terminal column.
    pub fn board_x(&self, column: u16) -> f32 {
        let col = column.saturating_sub(ORIGIN_X).min(self.cols.saturating_sub(1));
        (col as f32 + 0.5) * self.cell_w
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, view: &Viewport, state: &WorldState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, view)?;
    draw_hud(out, state)?;

    for alien in state.aliens.iter().filter(|a| a.alive) {
        draw_alien(out, view, alien)?;
    }
    for bullet in &state.bullets {
        draw_bullet(out, view, bullet)?;
    }
    draw_ship(out, view, state)?;
    draw_controls_hint(out, view)?;

    // The final board stays visible underneath the message.
    if state.is_game_over() {
        draw_game_over(out, view)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.required_size().1))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;
    let bottom = ORIGIN_Y + view.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, ORIGIN_Y - 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;

    out.queue(cursor::MoveTo(0, bottom))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    for row in ORIGIN_Y..bottom {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(ORIGIN_X + view.cols, row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &WorldState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!(
        "Score: {}  High Score: {}",
        state.score, state.high_score
    )))?;

    out.queue(style::SetForegroundColor(C_HUD_WAVE))?;
    out.queue(Print(format!("  Wave {}", state.wave)))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_ship<W: Write>(out: &mut W, view: &Viewport, state: &WorldState) -> std::io::Result<()> {
    let ship = &state.ship;
    let Some((col, row)) = view.cell(ship.x, ship.y) else {
        return Ok(());
    };
    let sprite = match view.span(ship.width) {
        4 => "▟██▙".to_string(),
        n => "█".repeat(n),
    };
    out.queue(style::SetForegroundColor(C_SHIP))?;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print(sprite))?;
    Ok(())
}

fn draw_alien<W: Write>(out: &mut W, view: &Viewport, alien: &Alien) -> std::io::Result<()> {
    let Some((col, row)) = view.cell(alien.x, alien.y) else {
        return Ok(());
    };
    let sprite = match view.span(alien.width) {
        4 => "«◎◎»".to_string(),
        n => "◎".repeat(n),
    };
    out.queue(style::SetForegroundColor(variant_color(alien.variant)))?;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print(sprite))?;
    Ok(())
}

fn draw_bullet<W: Write>(out: &mut W, view: &Viewport, bullet: &Bullet) -> std::io::Result<()> {
    // Spent bullets linger until pruned from the front; don't draw them.
    if bullet.used {
        return Ok(());
    }
    let Some((col, row)) = view.cell(bullet.x, bullet.y) else {
        return Ok(());
    };
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_BULLET))?;
    out.queue(Print("║"))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, ORIGIN_Y + view.rows + 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(CONTROLS_HINT))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let text = "Game Over! Press 'R' to Restart";
    let cx = ORIGIN_X + view.cols / 2;
    let col = cx.saturating_sub(text.chars().count() as u16 / 2);
    let row = ORIGIN_Y + view.rows / 2;

    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_GAME_OVER))?;
    out.queue(Print(text))?;
    Ok(())
}

// ── Teardown ──────────────────────────────────────────────────────────────────

/// Undo the alternate screen, mouse capture and hidden cursor.  Raw mode is
/// left to the caller.
pub fn restore_terminal<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(style::ResetColor)?;
    out.queue(cursor::Show)?;
    out.queue(DisableMouseCapture)?;
    out.queue(terminal::LeaveAlternateScreen)?;
    out.flush()
}
