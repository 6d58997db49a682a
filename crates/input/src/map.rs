//! Key mapping from terminal events to camera actions.

use crate::types::ViewAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to camera actions.
///
/// `w`/`s` pitch, `a`/`d` yaw, arrow keys move.
pub fn map_key_event(key: KeyEvent) -> Option<ViewAction> {
    match key.code {
        // Look
        KeyCode::Char('w') | KeyCode::Char('W') => Some(ViewAction::PitchUp),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(ViewAction::PitchDown),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(ViewAction::YawLeft),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(ViewAction::YawRight),

        // Move
        KeyCode::Up => Some(ViewAction::MoveForward),
        KeyCode::Down => Some(ViewAction::MoveBack),
        KeyCode::Left => Some(ViewAction::StrafeLeft),
        KeyCode::Right => Some(ViewAction::StrafeRight),

        _ => None,
    }
}

/// Check if key should quit.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_look_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('w'))),
            Some(ViewAction::PitchUp)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('s'))),
            Some(ViewAction::PitchDown)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('a'))),
            Some(ViewAction::YawLeft)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('D'))),
            Some(ViewAction::YawRight)
        );
    }

    #[test]
    fn test_move_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Up)),
            Some(ViewAction::MoveForward)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Down)),
            Some(ViewAction::MoveBack)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Left)),
            Some(ViewAction::StrafeLeft)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Right)),
            Some(ViewAction::StrafeRight)
        );
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('w'))));
    }
}
