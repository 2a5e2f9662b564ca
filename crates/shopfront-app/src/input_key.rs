//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts `crossterm::event::KeyEvent` into [`InputKey`] at the
//! boundary so state handling never depends on crossterm types.

/// Abstract input key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+a, Ctrl+c, etc.)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,
}

impl InputKey {
    /// Printable character carried by this key, if any
    pub fn printable(self) -> Option<char> {
        match self {
            InputKey::Char(c) if !c.is_control() => Some(c),
            _ => None,
        }
    }
}
