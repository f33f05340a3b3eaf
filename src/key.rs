//! Key representation for jump-session input

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A resolved keystroke delivered to the session.
///
/// The host dispatcher owns multi-key trigger sequences; by the time a key
/// reaches the session it is a single printable character or a control key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable character
    Char(char),
    Backspace,
    Enter,
    Escape,
    Tab,
    /// Any key the session has no use for
    Other,
}

/// Translate a crossterm key event into a session key.
pub fn translate_key_event(key_event: KeyEvent) -> Key {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key_event.code {
        KeyCode::Char(ch) => {
            // Some terminals deliver Enter as a character
            if ch == '\r' || ch == '\n' {
                return Key::Enter;
            }
            if ctrl {
                Key::Other
            } else {
                Key::Char(ch)
            }
        }
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Tab => Key::Tab,
        _ => Key::Other,
    }
}

impl From<KeyEvent> for Key {
    fn from(key_event: KeyEvent) -> Self {
        translate_key_event(key_event)
    }
}
