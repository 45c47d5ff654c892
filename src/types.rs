//! Core types shared between the editor and its interaction states.
//!
//! Tools, inks and cursor glyphs. Input messages live in
//! [`crate::input::messages`].

use serde::{Deserialize, Serialize};

/// What a tool does to the sprite when used with a given mouse button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InkType {
    #[default]
    Paint,
    Eraser,
    Blur,
    Jumble,
    /// Edits the selection mask instead of pixels
    Selection,
    Scroll,
    Move,
}

impl InkType {
    /// Returns true if the ink edits the selection
    pub fn is_selection(&self) -> bool {
        matches!(self, Self::Selection)
    }
}

/// A drawing tool with one ink per mouse button.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub id: String,
    pub inks: [InkType; 2],
}

impl Tool {
    pub fn new(id: impl Into<String>, left: InkType, right: InkType) -> Self {
        Self {
            id: id.into(),
            inks: [left, right],
        }
    }

    /// A tool using the same ink on both buttons.
    pub fn uniform(id: impl Into<String>, ink: InkType) -> Self {
        Self::new(id, ink, ink)
    }

    /// Returns true only if both buttons use a selection ink
    pub fn is_selection_tool(&self) -> bool {
        self.inks.iter().all(InkType::is_selection)
    }
}

/// Mouse cursor glyphs the editor can show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CursorType {
    #[default]
    Normal,
    Move,
    Scroll,
    Forbidden,
}
