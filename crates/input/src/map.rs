//! Key mapping from terminal events to commands.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key means to the frontend.
///
/// Only [`Command::Play`] reaches the game core; the rest are session
/// controls handled by the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(GameAction),
    Pause,
    Restart,
    Quit,
}

/// Map keyboard input to a command.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if should_quit(key) {
        return Some(Command::Quit);
    }

    let command = match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Command::Play(GameAction::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Command::Play(GameAction::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Command::Play(GameAction::SoftDrop)
        }

        // Rotation
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Command::Play(GameAction::Rotate)
        }

        KeyCode::Char(' ') => Command::Play(GameAction::HardDrop),

        // Session
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => Command::Pause,
        KeyCode::Char('r') | KeyCode::Char('R') => Command::Restart,

        _ => return None,
    };
    Some(command)
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

    fn play(code: KeyCode) -> Option<GameAction> {
        match map_key(KeyEvent::from(code)) {
            Some(Command::Play(action)) => Some(action),
            _ => None,
        }
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(play(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(play(KeyCode::Right), Some(GameAction::MoveRight));
        assert_eq!(play(KeyCode::Down), Some(GameAction::SoftDrop));
        assert_eq!(play(KeyCode::Up), Some(GameAction::Rotate));
        assert_eq!(play(KeyCode::Char(' ')), Some(GameAction::HardDrop));
    }

    #[test]
    fn test_letter_aliases() {
        assert_eq!(play(KeyCode::Char('H')), Some(GameAction::MoveLeft));
        assert_eq!(play(KeyCode::Char('d')), Some(GameAction::MoveRight));
        assert_eq!(play(KeyCode::Char('J')), Some(GameAction::SoftDrop));
        assert_eq!(play(KeyCode::Char('w')), Some(GameAction::Rotate));
    }

    #[test]
    fn test_session_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('p'))), Some(Command::Pause));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Esc)), Some(Command::Pause));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('R'))), Some(Command::Restart));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
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
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }
}
