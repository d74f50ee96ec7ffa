//! Terminal runner (default binary).
//!
//! Reads one key per turn and redraws the grid in place. When stdin is not a
//! terminal, commands are read byte by byte from it instead, which allows
//! scripted replays such as `printf 'aaaq' | tui-hazards`.

use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_hazards::config::RunConfig;
use tui_hazards::input::{ByteSource, TerminalSource};
use tui_hazards::session::run_session;
use tui_hazards::term::{GameView, TerminalRenderer};

fn main() -> Result<()> {
    let config = RunConfig::from_env()?;
    init_tracing(config.log_path.as_deref())?;

    let level = config.level_def()?;
    let mut game = level
        .load()
        .with_context(|| format!("loading level {:?}", level.name))?;
    info!(
        level = level.name,
        width = game.map().width(),
        height = game.map().height(),
        entities = game.entities().len(),
        "level loaded"
    );

    let view = GameView::new(config.cell_width);
    let interactive = io::stdin().is_terminal();
    let mut term = TerminalRenderer::stdout();
    term.enter(interactive)?;

    let result = if interactive {
        run_session(&mut game, &mut TerminalSource::new(), &mut term, &view)
    } else {
        run_session(&mut game, &mut ByteSource::new(io::stdin().lock()), &mut term, &view)
    };

    // Always try to restore terminal state.
    let _ = term.exit();
    let summary = result?;
    info!(
        commands = summary.commands,
        turns = summary.turns,
        phase = summary.phase.as_str(),
        "session finished"
    );
    Ok(())
}

/// Log to a file when one is configured; stdout belongs to the game frame.
fn init_tracing(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
