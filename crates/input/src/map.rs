//! Key mapping from terminal events to game intents.

use crate::types::{Direction, KeyIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game intents.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyIntent> {
    // Ctrl-C is quit, never "custom mode".
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(KeyIntent::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(KeyIntent::Move(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(KeyIntent::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(KeyIntent::Move(Direction::Down))
        }

        // Cell interactions
        KeyCode::Enter | KeyCode::Char('v') | KeyCode::Char('V') => Some(KeyIntent::View),
        KeyCode::Char(' ') | KeyCode::Char('f') | KeyCode::Char('F') => Some(KeyIntent::Verify),

        // Game control
        KeyCode::Char('s') | KeyCode::Char('S') => Some(KeyIntent::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(KeyIntent::Reset),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(KeyIntent::Pause),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(KeyIntent::CustomMode),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(KeyIntent::MainMode),

        _ => None,
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
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(KeyIntent::Move(Direction::Left))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(KeyIntent::Move(Direction::Down))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('K'))),
            Some(KeyIntent::Move(Direction::Up))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('l'))),
            Some(KeyIntent::Move(Direction::Right))
        );
    }

    #[test]
    fn test_cell_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(KeyIntent::View)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('v'))),
            Some(KeyIntent::View)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(KeyIntent::Verify)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('F'))),
            Some(KeyIntent::Verify)
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('s'))),
            Some(KeyIntent::Start)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(KeyIntent::Reset)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p'))),
            Some(KeyIntent::Pause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('c'))),
            Some(KeyIntent::CustomMode)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('m'))),
            Some(KeyIntent::MainMode)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_ctrl_c_is_not_custom_mode() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(key), None);
        assert!(should_quit(key));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
