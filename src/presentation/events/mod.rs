//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
    /// Event was consumed.
    Consumed,
}

/// Key classification helpers.
pub struct EventHandler;

impl EventHandler {
    /// Checks if key should be handled at all (press or repeat, not release).
    #[must_use]
    pub const fn is_actionable(key: &KeyEvent) -> bool {
        !matches!(key.kind, KeyEventKind::Release)
    }

    /// Checks if key always quits, regardless of focus.
    #[must_use]
    pub fn is_force_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    /// Checks if key is a quit event when no popup is open.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        Self::is_force_quit_event(key)
            || matches!(
                key,
                KeyEvent {
                    code: KeyCode::Char('q') | KeyCode::Esc,
                    modifiers: KeyModifiers::NONE,
                    ..
                }
            )
    }

    /// Checks if key is a submit event.
    #[must_use]
    pub fn is_submit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Enter,
                ..
            }
        )
    }

    /// Checks if key moves focus forward.
    #[must_use]
    pub fn is_focus_next_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Tab | KeyCode::Down,
                modifiers: KeyModifiers::NONE,
                ..
            }
        )
    }

    /// Checks if key moves focus backward.
    #[must_use]
    pub fn is_focus_previous_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::BackTab | KeyCode::Up,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    #[test_case(KeyCode::Char('q'), KeyModifiers::NONE, true ; "q_quits")]
    #[test_case(KeyCode::Char('c'), KeyModifiers::CONTROL, true ; "ctrl_c_quits")]
    #[test_case(KeyCode::Esc, KeyModifiers::NONE, true ; "esc_quits")]
    #[test_case(KeyCode::Char('a'), KeyModifiers::NONE, false ; "letter_does_not_quit")]
    #[test_case(KeyCode::Enter, KeyModifiers::NONE, false ; "enter_does_not_quit")]
    fn test_quit_events(code: KeyCode, modifiers: KeyModifiers, expected: bool) {
        assert_eq!(
            EventHandler::is_quit_event(&make_key_event(code, modifiers)),
            expected
        );
    }

    #[test]
    fn test_only_ctrl_c_force_quits() {
        assert!(EventHandler::is_force_quit_event(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!EventHandler::is_force_quit_event(&make_key_event(
            KeyCode::Char('q'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_submit_event() {
        assert!(EventHandler::is_submit_event(&make_key_event(
            KeyCode::Enter,
            KeyModifiers::NONE
        )));
        assert!(!EventHandler::is_submit_event(&make_key_event(
            KeyCode::Char('a'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_focus_navigation() {
        assert!(EventHandler::is_focus_next_event(&make_key_event(
            KeyCode::Tab,
            KeyModifiers::NONE
        )));
        assert!(EventHandler::is_focus_previous_event(&make_key_event(
            KeyCode::BackTab,
            KeyModifiers::SHIFT
        )));
    }

    #[test]
    fn test_release_is_not_actionable() {
        let release =
            KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);
        assert!(!EventHandler::is_actionable(&release));
    }
}
