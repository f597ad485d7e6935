//! Keyboard translation: crossterm events become UI-agnostic game inputs,
//! so the session logic can be driven by synthetic sequences in tests.

use crossterm::event::{KeyCode, KeyEvent};

/// Input actions understood by the session logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Cycle the level selection left.
    Left,
    /// Cycle the level selection right.
    Right,
    /// Space: start a level, jump, or dismiss an end screen.
    Confirm,
    Dash,
    Quit,
}

/// Map a key event to a game input, if the key is bound.
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    match key.code {
        KeyCode::Left => Some(GameInput::Left),
        KeyCode::Right => Some(GameInput::Right),
        KeyCode::Char(' ') => Some(GameInput::Confirm),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(GameInput::Dash),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameInput::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_bound_keys() {
        assert_eq!(map_key(key(KeyCode::Left)), Some(GameInput::Left));
        assert_eq!(map_key(key(KeyCode::Right)), Some(GameInput::Right));
        assert_eq!(map_key(key(KeyCode::Char(' '))), Some(GameInput::Confirm));
        assert_eq!(map_key(key(KeyCode::Char('d'))), Some(GameInput::Dash));
        assert_eq!(map_key(key(KeyCode::Char('D'))), Some(GameInput::Dash));
        assert_eq!(map_key(key(KeyCode::Char('q'))), Some(GameInput::Quit));
        assert_eq!(map_key(key(KeyCode::Char('Q'))), Some(GameInput::Quit));
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        assert_eq!(map_key(key(KeyCode::Up)), None);
        assert_eq!(map_key(key(KeyCode::Enter)), None);
        assert_eq!(map_key(key(KeyCode::Esc)), None);
        assert_eq!(map_key(key(KeyCode::Char('x'))), None);
    }
}
