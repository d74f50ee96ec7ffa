//! The interactive session loop.
//!
//! Each iteration renders the current state, blocks for exactly one command and
//! applies it. Rendering always sees a fully applied turn.

use std::io::Write;

use anyhow::Result;
use tracing::{debug, info};

use crate::core::{GameState, TurnOutcome};
use crate::input::CommandSource;
use crate::term::{GameView, TerminalRenderer};
use crate::types::{Command, GamePhase};

/// What a finished session did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Commands read from the source
    pub commands: u32,
    /// Turns in which entities advanced
    pub turns: u32,
    pub phase: GamePhase,
}

/// Play `game` until the player quits or the input ends.
pub fn run_session<S, W>(
    game: &mut GameState,
    source: &mut S,
    renderer: &mut TerminalRenderer<W>,
    view: &GameView,
) -> Result<SessionSummary>
where
    S: CommandSource + ?Sized,
    W: Write,
{
    let mut fb = view.render(game);
    renderer.draw(&fb)?;

    let mut commands = 0u32;
    while game.phase() != GamePhase::Quit {
        let Some(command) = source.next_command() else {
            info!("input ended");
            game.apply(Command::Quit);
            break;
        };
        commands += 1;

        let outcome = game.apply(command);
        debug!(?command, ?outcome, turn = game.turn(), "turn applied");
        if outcome == TurnOutcome::Quit {
            break;
        }

        view.render_into(game, &mut fb);
        renderer.draw(&fb)?;
    }

    Ok(SessionSummary {
        commands,
        turns: game.turn(),
        phase: game.phase(),
    })
}
