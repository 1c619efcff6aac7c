//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => {
            Some(GameAction::MoveCursor(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => {
            Some(GameAction::MoveCursor(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => {
            Some(GameAction::MoveCursor(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => {
            Some(GameAction::MoveCursor(Direction::Down))
        }

        // Flip
        KeyCode::Char(' ') | KeyCode::Enter => Some(GameAction::Flip),

        // Session
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameAction::NewSession),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(GameAction::Reset),
        KeyCode::Char(c @ '1'..='9') => Some(GameAction::RestartPreset(c as usize - '1' as usize)),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
