//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::KeyIntent`] and tracks the
//! board cursor that cell-addressed intents act on. Nothing here knows about
//! game rules.

pub mod cursor;
pub mod map;

pub use fruit_memory_types as types;

pub use cursor::GridCursor;
pub use map::{handle_key_event, should_quit};
