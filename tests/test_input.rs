use leafy_guess::entities::GameEvent;
use leafy_guess::input::*;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn digits_backspace_and_enter() {
    assert_eq!(map_key(&press(KeyCode::Char('7'))), Some(GameEvent::AppendDigit('7')));
    assert_eq!(map_key(&press(KeyCode::Backspace)), Some(GameEvent::Delete));
    assert_eq!(map_key(&press(KeyCode::Enter)), Some(GameEvent::Confirm));
}

#[test]
fn space_restarts() {
    assert_eq!(map_key(&press(KeyCode::Char(' '))), Some(GameEvent::Restart));
}

#[test]
fn escape_and_ctrl_c_quit() {
    assert_eq!(map_key(&press(KeyCode::Esc)), Some(GameEvent::Quit));
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(map_key(&ctrl_c), Some(GameEvent::Quit));
}

#[test]
fn other_characters_reach_the_state_machine() {
    // Filtering non-digits is the state machine's job
    assert_eq!(map_key(&press(KeyCode::Char('c'))), Some(GameEvent::AppendDigit('c')));
}

#[test]
fn releases_and_unbound_keys_map_to_nothing() {
    let release = KeyEvent::new_with_kind(
        KeyCode::Char('5'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
    );
    assert_eq!(map_key(&release), None);
    assert_eq!(map_key(&press(KeyCode::Left)), None);
    assert_eq!(map_key(&press(KeyCode::F(1))), None);
}

#[test]
fn repeats_are_mapped_like_presses() {
    let repeat = KeyEvent::new_with_kind(
        KeyCode::Char('3'),
        KeyModifiers::NONE,
        KeyEventKind::Repeat,
    );
    assert_eq!(map_key(&repeat), Some(GameEvent::AppendDigit('3')));
}

#[test]
fn non_key_events_are_ignored() {
    assert_eq!(map_event(&Event::Resize(80, 24)), None);
    assert_eq!(map_event(&Event::FocusGained), None);
    assert_eq!(
        map_event(&Event::Key(press(KeyCode::Enter))),
        Some(GameEvent::Confirm)
    );
}

#[test]
fn enhanced_press_and_release_type_one_digit() {
    let events = [
        Event::Key(KeyEvent::new_with_kind(
            KeyCode::Char('9'),
            KeyModifiers::NONE,
            KeyEventKind::Press,
        )),
        Event::Key(KeyEvent::new_with_kind(
            KeyCode::Char('9'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        )),
    ];
    let mapped: Vec<GameEvent> = events.iter().filter_map(map_event).collect();
    assert_eq!(mapped, vec![GameEvent::AppendDigit('9')]);
}
