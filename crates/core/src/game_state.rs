//! Game state module - the turn engine
//!
//! This module ties together the occupancy map, the player and the entity pool.
//! One call to [`GameState::apply`] is one turn:
//!
//! 1. `Quit` ends the game from any non-terminal phase.
//! 2. In `Playing`, a movement command is validated against the map. A rejected
//!    move ends the turn without advancing entities.
//! 3. After a successful move every live entity advances once, in pool order.
//!    When an entity expires it is swap-removed and the same slot is visited
//!    again, since it now holds an entity that has not moved yet.
//! 4. The first collision with the player moves the game to `GameOver` and
//!    stops the entity pass for that turn.
//!
//! `GameOver` freezes the simulation; only `Quit` is still honored.

use tracing::{debug, info};

use crate::behavior::{self, StepContext, StepOutcome};
use crate::entity::{EntityKind, Payload};
use crate::occupancy::OccupancyMap;
use crate::pool::EntityPool;
use crate::types::{Command, Direction, GamePhase, Vec2};

/// The player singleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player {
    pub position: Vec2,
    /// Last direction the player successfully moved in
    pub facing: Direction,
}

/// What a single turn did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The game is now in the `Quit` phase
    Quit,
    /// No simulation change (unrecognized command, or frozen after game over)
    Ignored,
    /// The move was rejected by a wall or the grid edge
    Blocked,
    /// The player moved and every entity advanced
    Advanced,
    /// The player moved and an entity killed them this turn
    PlayerKilled(EntityKind),
}

/// Complete simulation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    map: OccupancyMap,
    player: Player,
    entities: EntityPool,
    phase: GamePhase,
    /// Turns in which entities advanced
    turn: u32,
}

impl GameState {
    /// Create a game on `map` with the player at `player_start` and no entities.
    pub fn new(map: OccupancyMap, player_start: Vec2) -> Self {
        Self {
            map,
            player: Player {
                position: player_start,
                facing: Direction::Up,
            },
            entities: EntityPool::new(),
            phase: GamePhase::Playing,
            turn: 0,
        }
    }

    /// Place an entity during level setup.
    ///
    /// # Panics
    ///
    /// Panics when the entity pool is full, or when a snake's `position` is
    /// not its head.
    pub fn spawn(&mut self, position: Vec2, payload: Payload) -> usize {
        if let Payload::Snake { body } = &payload {
            assert!(
                body.last() == Some(&position),
                "snake must spawn at its head {:?}, got {:?}",
                body.last(),
                position
            );
        }
        self.entities.create(position, payload)
    }

    pub fn map(&self) -> &OccupancyMap {
        &self.map
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn entities(&self) -> &EntityPool {
        &self.entities
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Run one turn for `command`.
    pub fn apply(&mut self, command: Command) -> TurnOutcome {
        match (self.phase, command) {
            (GamePhase::Quit, _) => TurnOutcome::Quit,
            (_, Command::Quit) => {
                self.phase = GamePhase::Quit;
                info!(turn = self.turn, "quit");
                TurnOutcome::Quit
            }
            (GamePhase::GameOver, _) | (GamePhase::Playing, Command::Noop) => {
                TurnOutcome::Ignored
            }
            (GamePhase::Playing, Command::Move(dir)) => {
                if !self.try_move_player(dir) {
                    return TurnOutcome::Blocked;
                }
                self.turn += 1;
                match self.advance_entities() {
                    Some(kind) => TurnOutcome::PlayerKilled(kind),
                    None => TurnOutcome::Advanced,
                }
            }
        }
    }

    /// Step the player one cell if the destination is walkable.
    /// Returns false (player unchanged) otherwise.
    pub fn try_move_player(&mut self, dir: Direction) -> bool {
        let dest = self.player.position + dir.delta();
        if !self.map.is_walkable(dest) {
            debug!(x = dest.x, y = dest.y, dir = dir.as_str(), "move rejected");
            return false;
        }
        self.player.position = dest;
        self.player.facing = dir;
        true
    }

    /// Advance every live entity once. Returns the kind that killed the player.
    fn advance_entities(&mut self) -> Option<EntityKind> {
        let ctx = StepContext {
            map: &self.map,
            player: self.player.position,
        };

        let mut i = 0;
        while i < self.entities.len() {
            let entity = self.entities.get_mut(i);
            let kind = entity.payload.kind();
            match behavior::step(entity.position, entity.payload, &ctx) {
                StepOutcome::Alive => i += 1,
                StepOutcome::Expired => {
                    debug!(turn = self.turn, index = i, kind = kind.as_str(), "entity expired");
                    // Slot `i` now holds the former last entity; visit it next.
                    self.entities.delete(i);
                }
                StepOutcome::HitPlayer => {
                    self.phase = GamePhase::GameOver;
                    info!(
                        turn = self.turn,
                        kind = kind.as_str(),
                        x = ctx.player.x,
                        y = ctx.player.y,
                        "player killed"
                    );
                    return Some(kind);
                }
            }
        }
        None
    }
}
