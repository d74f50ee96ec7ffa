//! Level module - turns static level data into a ready-to-play [`GameState`]
//!
//! Level layouts are arrays of equal-length rows where `'#'` is a wall and
//! `' '` is floor. Entities and the player start are listed separately.

use thiserror::Error;

use crate::entity::Payload;
use crate::game_state::GameState;
use crate::occupancy::OccupancyMap;
use crate::types::{
    Vec2, BOMB_MAX_TICKS, ENTITY_CAPACITY, MAP_CAPACITY, SNAKE_MAX_SEGMENTS, SNAKE_MIN_SEGMENTS,
};

const WALL: char = '#';
const FLOOR: char = ' ';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("level layout has no rows or no columns")]
    Empty,
    #[error("row {row} is {len} cells wide, expected {expected}")]
    RaggedRows { row: usize, len: usize, expected: usize },
    #[error("{width}x{height} level exceeds the {capacity}-cell occupancy map")]
    TooLarge {
        width: usize,
        height: usize,
        capacity: usize,
    },
    #[error("unknown level glyph {ch:?} at ({x}, {y})")]
    UnknownGlyph { ch: char, x: usize, y: usize },
    #[error("player start ({x}, {y}) is not a walkable cell")]
    BlockedStart { x: i32, y: i32 },
    #[error("level spawns {count} entities, pool holds {capacity}")]
    TooManyEntities { count: usize, capacity: usize },
    #[error("snake has {len} segments, expected {min}..={max}")]
    SnakeLength { len: usize, min: usize, max: usize },
    #[error("bomb timer {ticks} exceeds {max}")]
    BombTimer { ticks: u8, max: u8 },
    #[error("patrol direction must be +1 or -1, got {direction}")]
    PatrolDirection { direction: i32 },
    #[error("patrol amplitude ({x}, {y}) is not along a single axis")]
    PatrolAxis { x: i32, y: i32 },
    #[error("patrol route cell ({x}, {y}) is not walkable")]
    PatrolRoute { x: i32, y: i32 },
    #[error("spawn cell ({x}, {y}) lies outside the level")]
    SpawnOutOfBounds { x: i32, y: i32 },
}

/// Build an occupancy map from layout rows.
pub fn parse_occupancy(rows: &[&str]) -> Result<OccupancyMap, LevelError> {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.chars().count());
    if width == 0 || height == 0 {
        return Err(LevelError::Empty);
    }
    if width * height > MAP_CAPACITY {
        return Err(LevelError::TooLarge {
            width,
            height,
            capacity: MAP_CAPACITY,
        });
    }

    let mut map = OccupancyMap::new(width as u16, height as u16);
    for (y, row) in rows.iter().enumerate() {
        let len = row.chars().count();
        if len != width {
            return Err(LevelError::RaggedRows {
                row: y,
                len,
                expected: width,
            });
        }
        for (x, ch) in row.chars().enumerate() {
            match ch {
                WALL => {
                    map.mark_blocked(Vec2::new(x as i32, y as i32));
                }
                FLOOR => {}
                _ => return Err(LevelError::UnknownGlyph { ch, x, y }),
            }
        }
    }
    Ok(map)
}

/// Initial placement of one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spawn {
    Patrol {
        origin: Vec2,
        amplitude: Vec2,
        direction: i32,
    },
    Bomb {
        at: Vec2,
        ticks: u8,
    },
    /// Body points ordered tail to head
    Snake {
        body: &'static [Vec2],
    },
}

/// A complete static level description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelDef {
    pub name: &'static str,
    pub rows: &'static [&'static str],
    pub player_start: Vec2,
    pub spawns: &'static [Spawn],
}

impl LevelDef {
    /// Validate the level and produce its initial game state.
    pub fn load(&self) -> Result<GameState, LevelError> {
        let map = parse_occupancy(self.rows)?;

        let start = self.player_start;
        if !map.is_walkable(start) {
            return Err(LevelError::BlockedStart {
                x: start.x,
                y: start.y,
            });
        }
        if self.spawns.len() > ENTITY_CAPACITY {
            return Err(LevelError::TooManyEntities {
                count: self.spawns.len(),
                capacity: ENTITY_CAPACITY,
            });
        }

        let mut game = GameState::new(map, start);
        for spawn in self.spawns {
            let (position, payload) = match *spawn {
                Spawn::Patrol {
                    origin,
                    amplitude,
                    direction,
                } => {
                    check_patrol(game.map(), origin, amplitude, direction)?;
                    (origin, Payload::patrol(origin, amplitude, direction))
                }
                Spawn::Bomb { at, ticks } => {
                    if ticks > BOMB_MAX_TICKS {
                        return Err(LevelError::BombTimer {
                            ticks,
                            max: BOMB_MAX_TICKS,
                        });
                    }
                    (at, Payload::bomb(ticks))
                }
                Spawn::Snake { body } => {
                    if !(SNAKE_MIN_SEGMENTS..=SNAKE_MAX_SEGMENTS).contains(&body.len()) {
                        return Err(LevelError::SnakeLength {
                            len: body.len(),
                            min: SNAKE_MIN_SEGMENTS,
                            max: SNAKE_MAX_SEGMENTS,
                        });
                    }
                    if let Some(p) = body.iter().find(|p| !game.map().in_bounds(**p)) {
                        return Err(LevelError::SpawnOutOfBounds { x: p.x, y: p.y });
                    }
                    (body[body.len() - 1], Payload::snake(body))
                }
            };
            if !game.map().in_bounds(position) {
                return Err(LevelError::SpawnOutOfBounds {
                    x: position.x,
                    y: position.y,
                });
            }
            game.spawn(position, payload);
        }

        Ok(game)
    }
}

/// A patrol walks a straight line of walkable cells from `origin` to
/// `origin + amplitude`, inclusive.
fn check_patrol(
    map: &OccupancyMap,
    origin: Vec2,
    amplitude: Vec2,
    direction: i32,
) -> Result<(), LevelError> {
    if direction != 1 && direction != -1 {
        return Err(LevelError::PatrolDirection { direction });
    }
    if amplitude.x != 0 && amplitude.y != 0 {
        return Err(LevelError::PatrolAxis {
            x: amplitude.x,
            y: amplitude.y,
        });
    }

    let far = origin + amplitude;
    let step = amplitude.signum();
    let mut cell = origin;
    loop {
        if !map.is_walkable(cell) {
            return Err(LevelError::PatrolRoute {
                x: cell.x,
                y: cell.y,
            });
        }
        if cell == far {
            return Ok(());
        }
        cell += step;
    }
}
