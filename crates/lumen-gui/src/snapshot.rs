//! Per-frame pointer record shared by every widget updated in that frame.

use crate::{InputState, Point};

/// Mouse cursor icon requested by a widget
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CursorIcon {
    #[default]
    Default,
    /// Hand with extended finger, shown over clickable widgets
    PointingHand,
    /// Text caret (I-beam), shown over editable text
    Text,
}

/// Pointer state for one frame.
///
/// The frame driver creates a fresh snapshot each frame and passes it by
/// mutable reference to each widget in turn. Widgets read the pointer
/// position, may claim the frame's click, and may request a cursor icon. The
/// first widget to claim the click wins; the last widget to request an icon
/// wins. Update order therefore decides which of two overlapping widgets gets
/// a click.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// Pointer position in window coordinates
    pub pointer: Point,
    /// Set once some widget has claimed this frame's click
    pub click_consumed: bool,
    /// Cursor icon the driver should display after all widgets ran
    pub cursor_icon: CursorIcon,
}

impl InputSnapshot {
    pub fn new(pointer: Point) -> Self {
        Self {
            pointer,
            click_consumed: false,
            cursor_icon: CursorIcon::Default,
        }
    }

    /// Start a frame from the current input. An unknown pointer position
    /// (cursor outside the window) is placed far off-screen so no widget is
    /// hovered.
    pub fn begin_frame(input: &InputState) -> Self {
        let pointer = input
            .cursor_position
            .unwrap_or(Point::new(f32::NEG_INFINITY, f32::NEG_INFINITY));
        Self::new(pointer)
    }

    /// Claim this frame's click if `pressed` and nobody claimed it yet.
    ///
    /// Returns `true` only for the claiming call.
    pub fn try_claim_click(&mut self, pressed: bool) -> bool {
        if self.click_consumed || !pressed {
            return false;
        }
        self.click_consumed = true;
        true
    }

    pub fn request_cursor(&mut self, icon: CursorIcon) {
        self.cursor_icon = icon;
    }
}
