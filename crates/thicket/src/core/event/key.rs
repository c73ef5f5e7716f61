//! Keyboard input.
use std::ops::Add;

use crossterm::event as cevent;

/// Modifier key state.
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Mods {
    /// Shift is active.
    pub shift: bool,
    /// Control is active.
    pub ctrl: bool,
    /// Alt is active.
    pub alt: bool,
}

impl Add<KeyCode> for Mods {
    type Output = Key;

    fn add(self, key: KeyCode) -> Self::Output {
        Key { mods: self, key }
    }
}

impl Add<char> for Mods {
    type Output = Key;

    fn add(self, other: char) -> Self::Output {
        Key {
            mods: self,
            key: other.into(),
        }
    }
}

/// No modifiers pressed.
#[allow(non_upper_case_globals)]
pub const Empty: Mods = Mods {
    shift: false,
    ctrl: false,
    alt: false,
};

/// Control-only modifier state.
#[allow(non_upper_case_globals)]
pub const Ctrl: Mods = Mods {
    shift: false,
    ctrl: true,
    alt: false,
};

impl From<cevent::KeyModifiers> for Mods {
    fn from(mods: cevent::KeyModifiers) -> Self {
        Self {
            shift: mods.contains(cevent::KeyModifiers::SHIFT),
            ctrl: mods.contains(cevent::KeyModifiers::CONTROL),
            alt: mods.contains(cevent::KeyModifiers::ALT),
        }
    }
}

/// A key code.
#[derive(Debug, PartialOrd, PartialEq, Hash, Eq, Clone, Copy)]
pub enum KeyCode {
    /// Backspace.
    Backspace,
    /// Enter or Return.
    Enter,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Tab.
    Tab,
    /// Shift-tab.
    BackTab,
    /// Delete.
    Delete,
    /// Insert.
    Insert,
    /// A function key.
    F(u8),
    /// A printable character.
    Char(char),
    /// Escape.
    Esc,
}

impl From<char> for KeyCode {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl TryFrom<cevent::KeyCode> for KeyCode {
    type Error = ();

    fn try_from(k: cevent::KeyCode) -> Result<Self, ()> {
        Ok(match k {
            cevent::KeyCode::Backspace => Self::Backspace,
            cevent::KeyCode::Enter => Self::Enter,
            cevent::KeyCode::Left => Self::Left,
            cevent::KeyCode::Right => Self::Right,
            cevent::KeyCode::Up => Self::Up,
            cevent::KeyCode::Down => Self::Down,
            cevent::KeyCode::Home => Self::Home,
            cevent::KeyCode::End => Self::End,
            cevent::KeyCode::PageUp => Self::PageUp,
            cevent::KeyCode::PageDown => Self::PageDown,
            cevent::KeyCode::Tab => Self::Tab,
            cevent::KeyCode::BackTab => Self::BackTab,
            cevent::KeyCode::Delete => Self::Delete,
            cevent::KeyCode::Insert => Self::Insert,
            cevent::KeyCode::F(x) => Self::F(x),
            cevent::KeyCode::Char(c) => Self::Char(c),
            cevent::KeyCode::Esc => Self::Esc,
            _ => return Err(()),
        })
    }
}

/// A key press with modifiers.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Key {
    /// Modifier state.
    pub mods: Mods,
    /// The key itself.
    pub key: KeyCode,
}

impl From<KeyCode> for Key {
    fn from(key: KeyCode) -> Self {
        Self { mods: Empty, key }
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Self {
            mods: Empty,
            key: c.into(),
        }
    }
}

impl TryFrom<cevent::KeyEvent> for Key {
    type Error = ();

    fn try_from(k: cevent::KeyEvent) -> Result<Self, ()> {
        Ok(Self {
            mods: k.modifiers.into(),
            key: k.code.try_into()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate() {
        let k = cevent::KeyEvent::new(cevent::KeyCode::Char('c'), cevent::KeyModifiers::CONTROL);
        assert_eq!(Key::try_from(k), Ok(Ctrl + 'c'));
        let k = cevent::KeyEvent::new(cevent::KeyCode::CapsLock, cevent::KeyModifiers::NONE);
        assert!(Key::try_from(k).is_err());
        assert_eq!(Key::from(KeyCode::Up), Empty + KeyCode::Up);
    }
}
