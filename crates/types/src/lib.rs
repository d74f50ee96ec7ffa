//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, input mapping).
//!
//! # Grid Coordinates
//!
//! Positions are integer pairs `(x, y)` where `x` grows to the right and `y`
//! grows downwards. Cell `(x, y)` of a `width`-wide grid lives at flat index
//! `y * width + x`.
//!
//! # Capacities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAP_CAPACITY` | 256 | Maximum cells in an occupancy map |
//! | `ENTITY_CAPACITY` | 16 | Maximum live entities in the pool |
//! | `SNAKE_MAX_SEGMENTS` | 6 | Maximum snake body length |
//! | `SNAKE_MIN_SEGMENTS` | 2 | Minimum snake body length |
//! | `BOMB_MAX_TICKS` | 9 | Largest countdown a bomb can display |
//!
//! # Examples
//!
//! ```
//! use tui_hazards_types::{Command, Direction, Vec2};
//!
//! let head = Vec2::new(9, 0);
//! let next = head + Direction::Down.delta();
//! assert_eq!(next, Vec2::new(9, 1));
//!
//! // Squared-distance proxy: no square root is taken.
//! assert_eq!(Vec2::new(2, 4).dist_sq(next), 49 + 9);
//!
//! assert_eq!(Command::from_char('a'), Command::Move(Direction::Left));
//! assert_eq!(Command::from_char('x'), Command::Noop);
//! ```

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Maximum number of cells an occupancy map can track (width * height).
pub const MAP_CAPACITY: usize = 256;

/// Maximum number of live entities.
pub const ENTITY_CAPACITY: usize = 16;

/// Maximum snake body length (head included).
pub const SNAKE_MAX_SEGMENTS: usize = 6;

/// Minimum snake body length (head included).
pub const SNAKE_MIN_SEGMENTS: usize = 2;

/// Largest bomb countdown that still renders as a single digit.
pub const BOMB_MAX_TICKS: u8 = 9;

/// Integer 2D vector used for positions and deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Componentwise sign (-1, 0 or 1).
    ///
    /// ```
    /// use tui_hazards_types::Vec2;
    ///
    /// assert_eq!(Vec2::new(-3, 0).signum(), Vec2::new(-1, 0));
    /// assert_eq!(Vec2::new(0, 7).signum(), Vec2::new(0, 1));
    /// ```
    pub fn signum(self) -> Self {
        Self::new(self.x.signum(), self.y.signum())
    }

    /// Sum of squared components.
    pub fn length_sq(self) -> i32 {
        self.x * self.x + self.y * self.y
    }

    /// Squared-distance proxy between two points.
    pub fn dist_sq(self, other: Vec2) -> i32 {
        (self - other).length_sq()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<i32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: i32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(i32, i32)> for Vec2 {
    fn from((x, y): (i32, i32)) -> Self {
        Vec2::new(x, y)
    }
}

/// The four axis-aligned movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in pursuit evaluation order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step for this direction (y grows downwards).
    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0, -1),
            Direction::Down => Vec2::new(0, 1),
            Direction::Left => Vec2::new(-1, 0),
            Direction::Right => Vec2::new(1, 0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// One player command, consumed once per turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Try to step the player one cell
    Move(Direction),
    /// Leave the game
    Quit,
    /// Anything unrecognized; entities do not advance
    Noop,
}

impl Command {
    /// Map a raw input character to a command.
    ///
    /// `w/a/s/d` move (either case), `q` quits, anything else is a no-op.
    ///
    /// ```
    /// use tui_hazards_types::{Command, Direction};
    ///
    /// assert_eq!(Command::from_char('w'), Command::Move(Direction::Up));
    /// assert_eq!(Command::from_char('D'), Command::Move(Direction::Right));
    /// assert_eq!(Command::from_char('q'), Command::Quit);
    /// assert_eq!(Command::from_char('\n'), Command::Noop);
    /// ```
    pub fn from_char(c: char) -> Self {
        match c {
            'w' | 'W' => Command::Move(Direction::Up),
            's' | 'S' => Command::Move(Direction::Down),
            'a' | 'A' => Command::Move(Direction::Left),
            'd' | 'D' => Command::Move(Direction::Right),
            'q' | 'Q' => Command::Quit,
            _ => Command::Noop,
        }
    }
}

/// Turn engine state.
///
/// `Playing` is the only state that reacts to movement. `GameOver` freezes the
/// simulation but keeps rendering. `Quit` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Playing,
    GameOver,
    Quit,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Playing => "playing",
            GamePhase::GameOver => "game_over",
            GamePhase::Quit => "quit",
        }
    }
}

/// A drawable grid symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Floor,
    Wall,
    Player,
    Soldier,
    /// Countdown bomb showing its remaining ticks (0-9)
    Bomb(u8),
    SnakeBody,
    SnakeHead,
}

impl Glyph {
    /// Terminal character for this glyph.
    ///
    /// # Panics
    ///
    /// Panics for `Glyph::Bomb(n)` with `n > 9`; a bomb countdown must fit a
    /// single digit.
    pub fn as_char(self) -> char {
        match self {
            Glyph::Floor => ' ',
            Glyph::Wall => '#',
            Glyph::Player => '^',
            Glyph::Soldier => '!',
            Glyph::Bomb(ticks) => {
                assert!(
                    ticks <= BOMB_MAX_TICKS,
                    "bomb countdown {} does not fit a single digit",
                    ticks
                );
                char::from(b'0' + ticks)
            }
            Glyph::SnakeBody => 'o',
            Glyph::SnakeHead => '@',
        }
    }
}
