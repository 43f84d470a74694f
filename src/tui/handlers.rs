use crate::command::Key;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
/// Maps a crossterm key event onto a logical [`Key`]. Releases, repeats and
/// keys the browser has no use for map to `None`.
pub fn translate_key(event: &KeyEvent) -> Option<Key> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    let key = match event.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Esc => Key::Esc,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        _ => return None,
    };
    Some(key)
}
/// Ctrl+C is honoured in every mode.
pub fn is_interrupt(event: &Event) -> bool {
    matches!(
        event, Event::Key(KeyEvent { code : KeyCode::Char('c'), modifiers, kind :
        KeyEventKind::Press, .. }) if modifiers.contains(KeyModifiers::CONTROL)
    )
}
