//! Logical keys and the commands they map to.
use crate::config::KeyBindings;
/// One keypress as delivered by the input driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Enter,
    Backspace,
    Delete,
    Esc,
    PageUp,
    PageDown,
    Home,
    End,
}
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}
/// Commands understood by the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveCursor(Direction),
    Enter,
    Ascend,
    Delete,
    View,
    Mark,
    PasteCopy,
    PasteMove,
    Quit,
}
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
    Exit,
}
impl Command {
    pub fn from_key(key: Key, keys: &KeyBindings) -> Option<Self> {
        let command = match key {
            Key::Up => Command::MoveCursor(Direction::Up),
            Key::Down => Command::MoveCursor(Direction::Down),
            Key::Enter => Command::Enter,
            Key::Backspace => Command::Ascend,
            Key::Delete => Command::Delete,
            Key::Char(c) if c == keys.up => Command::MoveCursor(Direction::Up),
            Key::Char(c) if c == keys.down => Command::MoveCursor(Direction::Down),
            Key::Char(c) if c == keys.delete => Command::Delete,
            Key::Char(c) if c == keys.view => Command::View,
            Key::Char(c) if c == keys.mark => Command::Mark,
            Key::Char(c) if c == keys.copy => Command::PasteCopy,
            Key::Char(c) if c == keys.relocate => Command::PasteMove,
            Key::Char(c) if c == keys.quit => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}
impl ViewerCommand {
    pub fn from_key(key: Key, keys: &KeyBindings) -> Option<Self> {
        let command = match key {
            Key::Up => ViewerCommand::ScrollUp,
            Key::Down => ViewerCommand::ScrollDown,
            Key::PageUp => ViewerCommand::PageUp,
            Key::PageDown | Key::Char(' ') => ViewerCommand::PageDown,
            Key::Home => ViewerCommand::Top,
            Key::End => ViewerCommand::Bottom,
            Key::Esc => ViewerCommand::Exit,
            Key::Char(c) if c == keys.up => ViewerCommand::ScrollUp,
            Key::Char(c) if c == keys.down => ViewerCommand::ScrollDown,
            Key::Char(c) if c == keys.quit => ViewerCommand::Exit,
            Key::Char('q') => ViewerCommand::Exit,
            _ => return None,
        };
        Some(command)
    }
}
