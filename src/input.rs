//! Input model: keys, pointer cursors, editor commands, and the gesture state machine.
//!
//! `InputEvent` is everything the host can feed the engine: raw pointer
//! positions, key names as reported by the browser, and the toolbar commands.
//! `InputState` is the gesture being tracked between pointer-down and
//! pointer-up.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::fmt;

use crate::consts::NUDGE_STEP;
use crate::hit::{Handle, Point};

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"Delete"`, `"ArrowUp"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Whether this key deletes the selection.
    #[must_use]
    pub fn is_delete(&self) -> bool {
        matches!(self.0.as_str(), "Delete" | "Backspace")
    }

    /// Translation for an arrow key, `None` for anything else.
    #[must_use]
    pub fn nudge(&self) -> Option<(f64, f64)> {
        match self.0.as_str() {
            "ArrowUp" => Some((0.0, -NUDGE_STEP)),
            "ArrowDown" => Some((0.0, NUDGE_STEP)),
            "ArrowLeft" => Some((-NUDGE_STEP, 0.0)),
            "ArrowRight" => Some((NUDGE_STEP, 0.0)),
            _ => None,
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

/// Pointer affordance shown over the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    /// Hovering the selected object's body.
    Move,
    /// Hovering one of the selected object's resize handles.
    Resize,
}

impl Cursor {
    /// CSS `cursor` value.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Move => "move",
            Self::Resize => "nwse-resize",
        }
    }
}

/// Everything the host forwards to the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    KeyDown(Key),
    /// Toolbar rotate button.
    Rotate,
    /// Toolbar clear button.
    Clear,
}

/// Gesture state between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The selected object follows the pointer, centered on it.
    Dragging,
    /// The selected object is being resized from one corner handle.
    Resizing(Handle),
}

impl fmt::Display for InputState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Dragging => f.write_str("dragging"),
            Self::Resizing(handle) => write!(f, "resizing {}", handle.as_str()),
        }
    }
}
