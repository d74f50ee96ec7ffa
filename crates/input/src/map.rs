//! Key mapping from terminal events to game commands.

use crate::types::{Command, Direction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a raw input character to a command.
pub fn command_from_char(c: char) -> Command {
    Command::from_char(c)
}

/// Map keyboard input to a command.
///
/// `w/a/s/d` and the arrow keys move, `q` and Ctrl-C quit, everything else is a
/// no-op turn.
pub fn command_from_key(key: KeyEvent) -> Command {
    if should_quit(key) {
        return Command::Quit;
    }
    match key.code {
        KeyCode::Up => Command::Move(Direction::Up),
        KeyCode::Down => Command::Move(Direction::Down),
        KeyCode::Left => Command::Move(Direction::Left),
        KeyCode::Right => Command::Move(Direction::Right),
        KeyCode::Char(c) => command_from_char(c),
        _ => Command::Noop,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_wasd_keys() {
        assert_eq!(
            command_from_key(KeyEvent::from(KeyCode::Char('w'))),
            Command::Move(Direction::Up)
        );
        assert_eq!(
            command_from_key(KeyEvent::from(KeyCode::Char('a'))),
            Command::Move(Direction::Left)
        );
        assert_eq!(
            command_from_key(KeyEvent::from(KeyCode::Char('s'))),
            Command::Move(Direction::Down)
        );
        assert_eq!(
            command_from_key(KeyEvent::from(KeyCode::Char('d'))),
            Command::Move(Direction::Right)
        );
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            command_from_key(KeyEvent::from(KeyCode::Up)),
            Command::Move(Direction::Up)
        );
        assert_eq!(
            command_from_key(KeyEvent::from(KeyCode::Right)),
            Command::Move(Direction::Right)
        );
    }

    #[test]
    fn test_unmapped_keys_are_noop() {
        assert_eq!(command_from_key(KeyEvent::from(KeyCode::Char('x'))), Command::Noop);
        assert_eq!(command_from_key(KeyEvent::from(KeyCode::Enter)), Command::Noop);
        assert_eq!(command_from_key(KeyEvent::from(KeyCode::Esc)), Command::Noop);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(
            command_from_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Command::Quit
        );
    }
}
