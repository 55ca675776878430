//! # lumen-gui-winit
//!
//! Glue between winit and lumen-gui: feeds `WindowEvent`s into an
//! [`InputState`](lumen_gui::InputState) and shows the cursor icon the
//! widgets asked for.
//!
//! ```ignore
//! WindowEvent::RedrawRequested => {
//!     let mut snapshot = InputSnapshot::begin_frame(&input);
//!     let mut ui = UiContext::new(&mut input, &mut painter, &mut measurer, &mut clipboard);
//!     name_field.update_and_render(&mut snapshot, &mut ui);
//!     apply_cursor_icon(&window, snapshot.cursor_icon);
//!     input.begin_frame(dt);
//! }
//! event => input.handle_winit_event(&event),
//! ```

mod cursor;
mod input;

pub use cursor::*;
pub use input::*;
