//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It only borrows the game immutably, so
//! rendering can never change simulation state. Draw order decides overlaps:
//! floor and walls first, then the player, then entities in pool order.

use crate::core::GameState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Glyph, Vec2};

/// Widest supported horizontal cell size, in terminal columns.
pub const MAX_CELL_WIDTH: u16 = 3;

const GAME_OVER: CellStyle = CellStyle::fg(Rgb::new(200, 60, 60)).dim();

/// A lightweight terminal renderer for the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 1 }
    }
}

impl GameView {
    /// # Panics
    ///
    /// Panics unless `1 <= cell_w <= MAX_CELL_WIDTH`.
    pub fn new(cell_w: u16) -> Self {
        assert!(
            (1..=MAX_CELL_WIDTH).contains(&cell_w),
            "cell width must be 1..={}, got {}",
            MAX_CELL_WIDTH,
            cell_w
        );
        Self { cell_w }
    }

    pub fn cell_width(&self) -> u16 {
        self.cell_w
    }

    /// Framebuffer size needed for `game`, in terminal columns and rows.
    pub fn frame_size(&self, game: &GameState) -> (u16, u16) {
        let map = game.map();
        (map.width() * self.cell_w, map.height())
    }

    /// Render into an existing framebuffer, resizing it if needed.
    pub fn render_into(&self, game: &GameState, fb: &mut FrameBuffer) {
        let (w, h) = self.frame_size(game);
        fb.resize(w, h);

        let game_over = game.game_over();
        let map = game.map();

        for y in 0..map.height() as i32 {
            for x in 0..map.width() as i32 {
                let pos = Vec2::new(x, y);
                let glyph = if map.is_blocked(pos) {
                    Glyph::Wall
                } else {
                    Glyph::Floor
                };
                self.draw_glyph(fb, pos, glyph, game_over);
            }
        }

        self.draw_glyph(fb, game.player().position, Glyph::Player, game_over);

        for (position, payload) in game.entities().iter() {
            payload.for_each_glyph(position, |pos, glyph| {
                self.draw_glyph(fb, pos, glyph, game_over);
            });
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &GameState) -> FrameBuffer {
        let (w, h) = self.frame_size(game);
        let mut fb = FrameBuffer::new(w, h);
        self.render_into(game, &mut fb);
        fb
    }

    fn draw_glyph(&self, fb: &mut FrameBuffer, pos: Vec2, glyph: Glyph, game_over: bool) {
        // Cells that cannot be addressed in terminal columns are not drawn.
        let (Ok(x), Ok(y)) = (u16::try_from(pos.x), u16::try_from(pos.y)) else {
            return;
        };
        let Some(x0) = x.checked_mul(self.cell_w) else {
            return;
        };
        let style = if game_over {
            GAME_OVER
        } else {
            glyph_style(glyph)
        };
        let ch = glyph.as_char();
        // Walls fill the whole cell; everything else pads with blanks.
        let pad = if glyph == Glyph::Wall { ch } else { ' ' };

        fb.put_char(x0, y, ch, style);
        for dx in 1..self.cell_w {
            fb.put_char(x0.saturating_add(dx), y, pad, style);
        }
    }
}

fn glyph_style(glyph: Glyph) -> CellStyle {
    match glyph {
        Glyph::Floor => CellStyle::default(),
        Glyph::Wall => CellStyle::fg(Rgb::new(150, 150, 160)),
        Glyph::Player => CellStyle::fg(Rgb::new(240, 240, 120)).bold(),
        Glyph::Soldier => CellStyle::fg(Rgb::new(220, 80, 80)).bold(),
        Glyph::Bomb(_) => CellStyle::fg(Rgb::new(255, 165, 0)).bold(),
        Glyph::SnakeBody => CellStyle::fg(Rgb::new(100, 220, 120)),
        Glyph::SnakeHead => CellStyle::fg(Rgb::new(60, 200, 90)).bold(),
    }
}
