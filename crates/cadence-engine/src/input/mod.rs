//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Runtime code translates platform keyboard events into `KeyEvent`s; the
//! `KeyBindings` table turns presses into pacer commands.

mod bindings;
mod types;

pub use bindings::KeyBindings;
pub use types::{Key, KeyEvent, KeyState};
