//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events and raw bytes into [`crate::types::Command`] and
//! provides the blocking sources the session loop reads one command per turn
//! from.

pub mod map;
pub mod source;

pub use tui_hazards_types as types;

pub use map::{command_from_char, command_from_key, should_quit};
pub use source::{ByteSource, CommandSource, TerminalSource};
