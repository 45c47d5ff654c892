//! Moving pixels: the editor state active while a selection floats above a
//! sprite and is being moved, scaled or rotated.
//!
//! The host application implements the collaborator traits in [`editor`] and
//! [`session`], keeps an [`input::EditorStateMachine`] per editor and feeds it
//! input messages. Entering [`input::MovingPixelsState`] lifts the selected
//! pixels; leaving it for any reason stamps them back into the document.

pub mod color;
pub mod constants;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod handles;
pub mod input;
pub mod logging;
pub mod perf;
pub mod session;
pub mod settings;
pub mod subscription;
pub mod types;
