//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget/layout libraries and instead renders into a
//! simple framebuffer that is then written inline to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the grid-to-text step a pure function of game state
//! - Redraw in place so each turn overwrites the previous frame

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_hazards_core as core;
pub use tui_hazards_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, MAX_CELL_WIDTH};
pub use renderer::{encode_frame_into, encode_rewind_into, TerminalRenderer};
