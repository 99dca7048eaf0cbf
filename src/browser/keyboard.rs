//! Keyboard key definitions.
//!
//! WebDriver encodes non-printable keys as codepoints in the Unicode private
//! use area (`U+E000`..`U+E05D`). [`Key`] names the common ones.
//!
//! # Example
//!
//! ```ignore
//! use webdriver_element::Key;
//!
//! element.press(Key::Enter).await?;
//!
//! // Keys mix freely with text
//! element.send_keys(&format!("hello{}", Key::Tab)).await?;
//! ```

use std::fmt;

// ============================================================================
// Key Enum
// ============================================================================

/// Common special keys.
///
/// For typing text, pass plain strings to `send_keys`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // ========================================================================
    // Modifiers
    // ========================================================================
    /// Releases all held modifiers.
    Null,
    /// Shift modifier
    Shift,
    /// Control modifier
    Control,
    /// Alt modifier
    Alt,
    /// Meta (Command/Windows) modifier
    Meta,

    // ========================================================================
    // Navigation & Control
    // ========================================================================
    /// Enter key
    Enter,
    /// Return key
    Return,
    /// Tab key
    Tab,
    /// Escape key
    Escape,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Space bar
    Space,

    // ========================================================================
    // Arrow Keys
    // ========================================================================
    /// Arrow Up
    ArrowUp,
    /// Arrow Down
    ArrowDown,
    /// Arrow Left
    ArrowLeft,
    /// Arrow Right
    ArrowRight,

    // ========================================================================
    // Page Navigation
    // ========================================================================
    /// Home key
    Home,
    /// End key
    End,
    /// Page Up key
    PageUp,
    /// Page Down key
    PageDown,
}

impl Key {
    /// Returns the WebDriver codepoint for this key.
    #[must_use]
    pub fn codepoint(self) -> char {
        match self {
            Key::Null => '\u{E000}',
            Key::Backspace => '\u{E003}',
            Key::Tab => '\u{E004}',
            Key::Return => '\u{E006}',
            Key::Enter => '\u{E007}',
            Key::Shift => '\u{E008}',
            Key::Control => '\u{E009}',
            Key::Alt => '\u{E00A}',
            Key::Escape => '\u{E00C}',
            Key::Space => '\u{E00D}',
            Key::PageUp => '\u{E00E}',
            Key::PageDown => '\u{E00F}',
            Key::End => '\u{E010}',
            Key::Home => '\u{E011}',
            Key::ArrowLeft => '\u{E012}',
            Key::ArrowUp => '\u{E013}',
            Key::ArrowRight => '\u{E014}',
            Key::ArrowDown => '\u{E015}',
            Key::Delete => '\u{E017}',
            Key::Meta => '\u{E03D}',
        }
    }

    /// Returns whether this key is a modifier.
    #[inline]
    #[must_use]
    pub fn is_modifier(self) -> bool {
        matches!(self, Key::Shift | Key::Control | Key::Alt | Key::Meta)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.codepoint())
    }
}

// ============================================================================
// Key Sequences
// ============================================================================

/// Splits a key string into the per-character sequence sent on the wire.
#[must_use]
pub fn key_sequence(keys: &str) -> Vec<String> {
    keys.chars().map(String::from).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codepoints() {
        assert_eq!(Key::Enter.codepoint(), '\u{E007}');
        assert_eq!(Key::Tab.to_string(), "\u{E004}");
    }

    #[test]
    fn test_modifiers() {
        assert!(Key::Shift.is_modifier());
        assert!(!Key::Enter.is_modifier());
    }

    #[test]
    fn test_key_sequence_splits_characters() {
        let keys = format!("ab{}", Key::Enter);
        assert_eq!(key_sequence(&keys), vec!["a", "b", "\u{E007}"]);
        assert!(key_sequence("").is_empty());
    }
}
