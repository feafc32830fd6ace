//! Front-end independent key events.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A discrete key press, as consumed by [`crate::model::Model::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Tab,
    BackTab,
    Esc,
    Backspace,
    Left,
    Right,
    Up,
    Down,
    /// Ctrl+C
    Interrupt,
    Char(char),
    Other,
}

impl Key {
    /// Converts a terminal event, ignoring everything but key presses.
    #[must_use]
    pub fn from_event(event: &Event) -> Option<Key> {
        match event {
            Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                Some(Key::from(*key_event))
            }
            _ => None,
        }
    }
}

impl From<KeyEvent> for Key {
    fn from(key_event: KeyEvent) -> Self {
        let modifiers = key_event.modifiers;

        match key_event.code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Key::Interrupt,
            KeyCode::Char(_)
                if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Key::Other
            }
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => Key::BackTab,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Esc,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            _ => Key::Other,
        }
    }
}
