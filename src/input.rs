/// Keyboard → `GameEvent` translation.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::GameEvent;

/// Map one terminal event to a game event.  Releases, mouse and resize
/// events map to nothing.
pub fn map_event(event: &Event) -> Option<GameEvent> {
    match event {
        Event::Key(key) => map_key(key),
        _ => None,
    }
}

/// Presses and repeats both count.  Repeats and releases only arrive from
/// terminals that accepted keyboard enhancement (see `screen`).
pub fn map_key(key: &KeyEvent) -> Option<GameEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(GameEvent::Quit)
        }
        KeyCode::Esc => Some(GameEvent::Quit),
        KeyCode::Char(' ') => Some(GameEvent::Restart),
        // Digits are filtered by the state machine
        KeyCode::Char(c) => Some(GameEvent::AppendDigit(c)),
        KeyCode::Backspace => Some(GameEvent::Delete),
        KeyCode::Enter => Some(GameEvent::Confirm),
        _ => None,
    }
}
