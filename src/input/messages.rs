//! Input messages forwarded from the editor view to its current state.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Keyboard modifiers held while a message was generated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    /// Command on macOS, Super elsewhere
    pub platform: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn control() -> Self {
        Self {
            control: true,
            ..Self::default()
        }
    }
}

/// Mouse buttons held while a message was generated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouseButtons {
    pub left: bool,
    pub right: bool,
    pub middle: bool,
}

impl MouseButtons {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn left() -> Self {
        Self {
            left: true,
            ..Self::default()
        }
    }

    pub fn right() -> Self {
        Self {
            right: true,
            ..Self::default()
        }
    }

    pub fn any(&self) -> bool {
        self.left || self.right || self.middle
    }
}

/// Mouse down/up/move message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouseMessage {
    /// Pointer position in screen coordinates
    pub position: Point,
    pub buttons: MouseButtons,
    pub modifiers: Modifiers,
}

impl MouseMessage {
    pub fn new(position: Point, buttons: MouseButtons) -> Self {
        Self {
            position,
            buttons,
            modifiers: Modifiers::none(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Mouse wheel message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelMessage {
    pub position: Point,
    /// Wheel steps, positive away from the user
    pub delta: i32,
    pub modifiers: Modifiers,
}

/// Key down/up message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMessage {
    /// Platform-independent key name, e.g. "a", "Escape", "Control"
    pub key: String,
    pub modifiers: Modifiers,
}

impl KeyMessage {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }
}

/// An input message routed by [`crate::input::EditorStateMachine::dispatch`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    MouseDown(MouseMessage),
    MouseUp(MouseMessage),
    MouseMove(MouseMessage),
    MouseWheel(WheelMessage),
    KeyDown(KeyMessage),
    KeyUp(KeyMessage),
    /// The editor asks the state which cursor to show
    SetCursor,
}

impl Message {
    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Message::MouseDown(_) => "mouse_down",
            Message::MouseUp(_) => "mouse_up",
            Message::MouseMove(_) => "mouse_move",
            Message::MouseWheel(_) => "mouse_wheel",
            Message::KeyDown(_) => "key_down",
            Message::KeyUp(_) => "key_up",
            Message::SetCursor => "set_cursor",
        }
    }
}
