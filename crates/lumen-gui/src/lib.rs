//! # lumen-gui
//!
//! Backend agnostic core of a small immediate-mode widget toolkit.
//!
//! Widgets are updated and rendered once per frame. Everything they need from
//! the outside world (input polling, drawing, text measurement, clipboard) is
//! reached through the collaborator types in this crate, so the widget logic
//! never touches a window, GPU or OS clipboard directly.
//!
//! ## Frame surface
//!
//! - [`InputState`] - Mouse, keyboard and frame timing, filled by a backend adapter
//! - [`InputSnapshot`] - Per-frame pointer record shared by all widgets (click claim, cursor icon)
//! - [`Painter`] - Drawing sink; [`DrawList`] records shapes for headless use
//! - [`ContentMeasurer`] - Text width measurement
//! - [`Clipboard`] - System clipboard access
//! - [`UiContext`] - Bundles the above for a single frame
//!
//! ## Geometry & Color
//!
//! - [`Point`], [`Rect`]
//! - [`Color`] with the Catppuccin and CSS palettes

mod clipboard;
mod color;
mod context;
mod input;
mod measure;
mod painter;
mod primitives;
mod snapshot;

pub use clipboard::*;
pub use color::*;
pub use context::*;
pub use input::*;
pub use measure::*;
pub use painter::*;
pub use primitives::*;
pub use snapshot::*;
