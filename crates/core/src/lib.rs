//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the whole simulation: the static occupancy map, the entity
//! pool, the per-kind entity behaviors and the turn engine that drives them.
//! It has **no dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: the same level and command sequence always produce the
//!   same state
//! - **Testable**: every rule can be exercised on a freshly built state
//! - **Fast**: fixed-capacity storage, no allocation on the turn path
//!
//! # Module Structure
//!
//! - [`occupancy`]: static blocked/free bitset with boundary queries
//! - [`entity`]: kind tags and per-kind payloads
//! - [`pool`]: fixed-capacity structure-of-arrays entity store with swap-remove
//! - [`behavior`]: patrol, bomb and snake update rules
//! - [`game_state`]: the turn engine and its `Playing -> GameOver -> Quit` phases
//! - [`level`]: layout parsing and level validation
//! - [`catalog`]: built-in levels
//!
//! # Turn Rules
//!
//! - A movement command is validated against walls and grid edges; a rejected
//!   move is a no-op turn
//! - Entities only advance after the player actually moved
//! - The first entity that hits the player ends the game; the rest of that
//!   turn's entity pass is skipped
//! - After game over only `Quit` has an effect
//!
//! # Example
//!
//! ```
//! use tui_hazards_core::{catalog, TurnOutcome};
//! use tui_hazards_types::{Command, Direction, GamePhase};
//!
//! let mut game = catalog::find("corridor").unwrap().load().unwrap();
//!
//! // Walking into the wall above the start is rejected; nothing advances.
//! assert_eq!(game.apply(Command::Move(Direction::Up)), TurnOutcome::Blocked);
//! assert_eq!(game.turn(), 0);
//!
//! assert_eq!(game.apply(Command::Move(Direction::Left)), TurnOutcome::Advanced);
//! assert_eq!(game.turn(), 1);
//!
//! game.apply(Command::Quit);
//! assert_eq!(game.phase(), GamePhase::Quit);
//! ```

pub mod behavior;
pub mod catalog;
pub mod entity;
pub mod game_state;
pub mod level;
pub mod occupancy;
pub mod pool;

pub use tui_hazards_types as types;

// Re-export commonly used types for convenience
pub use behavior::{StepContext, StepOutcome};
pub use entity::{EntityKind, Payload, SnakeBody};
pub use game_state::{GameState, Player, TurnOutcome};
pub use level::{parse_occupancy, LevelDef, LevelError, Spawn};
pub use occupancy::OccupancyMap;
pub use pool::{EntityMut, EntityPool};
