//! Host-independent key events.

/// One key press as delivered by the host terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
}

impl Key {
    /// Returns the character when this key is a single decimal digit `0-9`.
    pub fn digit(self) -> Option<char> {
        match self {
            Self::Char(c) if c.is_ascii_digit() => Some(c),
            _ => None,
        }
    }

    /// Builds a key sequence from plain text, one `Char` per character.
    pub fn typed(text: &str) -> Vec<Key> {
        text.chars().map(Key::Char).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Key;

    #[test]
    fn only_ascii_digits_count_as_digits() {
        assert_eq!(Key::Char('7').digit(), Some('7'));
        assert_eq!(Key::Char('a').digit(), None);
        assert_eq!(Key::Char('٣').digit(), None);
        assert_eq!(Key::Enter.digit(), None);
    }
}
