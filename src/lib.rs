//! TUI Hazards (workspace facade crate).
//!
//! The simulation, input and terminal layers live in dedicated crates under
//! `crates/`; this package re-exports them as `tui_hazards::{core,input,term,types}`
//! and adds the runtime configuration and the session loop used by the binary.

pub use tui_hazards_core as core;
pub use tui_hazards_input as input;
pub use tui_hazards_term as term;
pub use tui_hazards_types as types;

pub mod config;
pub mod session;
