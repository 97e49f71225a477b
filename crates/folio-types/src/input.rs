//! Platform-agnostic input event types.
//!
//! Every front end maps its native input to these enums. The terminal core
//! never sees raw platform input.

use serde::{Deserialize, Serialize};

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Character typed into the command line.
    TextInput(char),
    /// Backspace / delete-left.
    Backspace,
    /// Whole-buffer replacement (paste, or a line-mode front end).
    SetText(String),
    /// An editing or navigation key.
    KeyPress(Key),
    /// The session is ending; pending output is dropped.
    Quit,
}

/// Keys the command line reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Enter,
    Tab,
    Escape,
    Up,
    Down,
}
