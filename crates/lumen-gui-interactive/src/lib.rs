//! # lumen-gui-interactive
//!
//! Immediate-mode widgets for lumen-gui.
//!
//! Widgets are plain values owned by the application and updated once per
//! frame with `update_and_render`. All widgets of a frame share one
//! [`InputSnapshot`](lumen_gui::InputSnapshot): the first widget to claim the
//! click gets it, so update order decides which of two overlapping widgets
//! reacts.

mod button;
mod decoration;
pub mod key_repeat;
pub mod keymap;
pub mod text_edit;
mod text_input;
pub mod viewport;

#[cfg(test)]
mod testing;

pub use button::*;
pub use key_repeat::{KeyRepeat, KeyRepeatConfig, RepeatKey};
pub use keymap::{EditAction, Modifiers, ShiftMap};
pub use text_edit::TextInputState;
pub use text_input::*;
