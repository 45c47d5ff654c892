//! Editor input handling.
//!
//! ## Architecture
//!
//! The editor forwards every input message to its current interaction state
//! through an explicit state machine ([`EditorStateMachine`]). States reach
//! the editor through an [`EditorContext`] and request transitions on it
//! instead of swapping themselves out.
//!
//! ## Modules
//!
//! - `state` - The `EditorState` trait and the per-call context
//! - `machine` - The state stack and message dispatch
//! - `moving_pixels` - Floating selection being moved, scaled or rotated
//! - `mouse_down` - Re-catching the pixels or dropping them on outside clicks
//! - `mouse_up` - Ending a drag
//! - `drag` - Drag steps and the drag cursor
//! - `keyboard` - Copy-selection key, wheel and tool changes
//! - `status` - Status bar text and transparent color
//! - `coords` - Screen <-> canvas coordinate conversion
//! - `messages` - Input message types

pub mod coords;
pub mod messages;
mod state;
mod machine;
mod moving_pixels;
mod mouse_down;
mod mouse_up;
mod drag;
mod keyboard;
mod status;

pub use machine::EditorStateMachine;
pub use moving_pixels::MovingPixelsState;
pub use state::{EditorContext, EditorState};
pub use status::format_status_text;
