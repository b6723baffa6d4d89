//! Keyboard event model for the interaction layer.
//!
//! The layer only distinguishes the keys its bindings use; everything else
//! passes through untouched so normal typing is never disturbed.

/// A key identity, independent of modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character key.
    Char(char),
    Enter,
    Space,
    Escape,
    ArrowUp,
    ArrowDown,
}

/// One key press delivered to the interaction layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    /// Whether the platform's primary command modifier was held
    /// (Ctrl on Linux/Windows, Cmd on macOS; the embedder maps it).
    pub primary_modifier: bool,
}

impl KeyEvent {
    /// A plain, unmodified key press.
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            primary_modifier: false,
        }
    }

    /// A character key combined with the primary modifier.
    pub fn primary(c: char) -> Self {
        Self {
            code: KeyCode::Char(c),
            primary_modifier: true,
        }
    }
}

/// What the interaction layer did with a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// The event matched a binding and was handled; the embedder should not
    /// process it further.
    Consumed,
    /// The event is none of the layer's business.
    Ignored,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_event_has_no_modifier() {
        let event = KeyEvent::plain(KeyCode::Enter);
        assert!(!event.primary_modifier);
        assert_eq!(event.code, KeyCode::Enter);
    }

    #[test]
    fn primary_event_carries_character() {
        let event = KeyEvent::primary('g');
        assert!(event.primary_modifier);
        assert_eq!(event.code, KeyCode::Char('g'));
    }
}
