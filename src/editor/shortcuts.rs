//! Keyboard shortcuts for the editing surface.

use std::fmt;

use super::toolbar::ToolbarCommand;

/// A key press with modifiers.
///
/// `ctrl` stands for the platform's primary modifier (Ctrl, or Cmd on macOS).
/// Keys compare case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub key: char,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyChord {
    /// Plain key press.
    pub fn key(key: char) -> Self {
        Self {
            key: key.to_ascii_lowercase(),
            ctrl: false,
            shift: false,
        }
    }

    /// Key pressed with the primary modifier.
    pub fn ctrl(key: char) -> Self {
        Self {
            ctrl: true,
            ..Self::key(key)
        }
    }

    /// Adds shift to the chord.
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            f.write_str("Ctrl+")?;
        }
        if self.shift {
            f.write_str("Shift+")?;
        }
        write!(f, "{}", self.key.to_ascii_uppercase())
    }
}

/// Action bound to a key chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Undo,
    Redo,
    Format(ToolbarCommand),
}

impl Shortcut {
    /// Resolves a chord to its bound action.
    ///
    /// Bindings: Ctrl+Z undo, Ctrl+Shift+Z or Ctrl+Y redo, Ctrl+B bold,
    /// Ctrl+I italic, Ctrl+K link.
    pub fn from_chord(chord: KeyChord) -> Option<Self> {
        if !chord.ctrl {
            return None;
        }

        match (chord.key.to_ascii_lowercase(), chord.shift) {
            ('z', false) => Some(Self::Undo),
            ('z', true) | ('y', false) => Some(Self::Redo),
            ('b', false) => Some(Self::Format(ToolbarCommand::Bold)),
            ('i', false) => Some(Self::Format(ToolbarCommand::Italic)),
            ('k', false) => Some(Self::Format(ToolbarCommand::Link)),
            _ => None,
        }
    }
}
