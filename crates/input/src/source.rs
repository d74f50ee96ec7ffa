//! Blocking command sources.
//!
//! A source yields exactly one command per turn. `None` means the input ended
//! or failed; the session treats that as an implicit quit.

use std::io::{self, Read};

use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, warn};

use crate::map::{command_from_char, command_from_key};
use crate::types::Command;

pub trait CommandSource {
    /// Block until the next command is available.
    fn next_command(&mut self) -> Option<Command>;
}

/// Reads key presses from the terminal via crossterm.
///
/// The terminal must already be in raw mode for keys to arrive unbuffered.
#[derive(Debug, Default)]
pub struct TerminalSource;

impl TerminalSource {
    pub fn new() -> Self {
        Self
    }
}

impl CommandSource for TerminalSource {
    fn next_command(&mut self) -> Option<Command> {
        loop {
            match event::read() {
                Ok(Event::Key(key)) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        return Some(command_from_key(key));
                    }
                    KeyEventKind::Release => {}
                },
                Ok(other) => debug!(?other, "ignoring terminal event"),
                Err(e) => {
                    warn!(error = %e, "terminal input failed");
                    return None;
                }
            }
        }
    }
}

/// One command per byte from any reader (pipes, files, test buffers).
#[derive(Debug)]
pub struct ByteSource<R> {
    reader: R,
}

impl<R: Read> ByteSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> CommandSource for ByteSource<R> {
    fn next_command(&mut self) -> Option<Command> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return None,
                Ok(_) => return Some(command_from_char(char::from(byte[0]))),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!(error = %e, "command stream failed");
                    return None;
                }
            }
        }
    }
}
