//! Backend-agnostic input state tracking for mouse and keyboard events
//!
//! Windowing adapters (see `lumen-gui-winit`) translate native events into
//! calls on [`InputState`]. Widgets then poll it the way they would poll an
//! immediate-mode platform layer: is this key down, was that button pressed
//! this frame, what is the next queued key press.

use crate::Point;
use std::collections::{HashSet, VecDeque};

/// Maximum number of discrete key presses held for consumption
pub const KEY_QUEUE_CAPACITY: usize = 16;

/// Mouse button, independent of the windowing backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    /// Back, forward and any further buttons
    Other(u8),
}

/// Non-printable keys
///
/// Modifiers keep their side so that releasing one shift key while the other
/// is still held does not drop the modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,
    /// Super/Meta/Windows/Command key
    SuperLeft,
    SuperRight,
    CapsLock,
    /// Function keys F1-F24
    F(u8),
}

impl NamedKey {
    /// Whether this key only modifies other keys
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            NamedKey::ShiftLeft
                | NamedKey::ShiftRight
                | NamedKey::ControlLeft
                | NamedKey::ControlRight
                | NamedKey::AltLeft
                | NamedKey::AltRight
                | NamedKey::SuperLeft
                | NamedKey::SuperRight
                | NamedKey::CapsLock
        )
    }

    pub fn is_shift(&self) -> bool {
        matches!(self, NamedKey::ShiftLeft | NamedKey::ShiftRight)
    }
}

/// A physical key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Named(NamedKey),
    /// A printable key, identified by the character it produces without any
    /// modifier held (letters are lowercase, `1` not `!`, space is `' '`)
    Character(char),
    /// A key the backend could not identify
    Unknown,
}

impl Key {
    pub fn is_modifier(&self) -> bool {
        matches!(self, Key::Named(named) if named.is_modifier())
    }
}

impl From<NamedKey> for Key {
    fn from(named: NamedKey) -> Self {
        Key::Named(named)
    }
}

/// Mouse and keyboard state polled by widgets.
///
/// Held state (`buttons_pressed`, `keys_down`) persists until the matching
/// release; edge state (`*_just_pressed`, `*_just_released`) covers one frame.
///
/// Discrete key presses additionally go into a bounded queue. Widgets pop
/// entries with [`InputState::pop_key_pressed`], so a key press is handled by
/// at most one widget. Entries left over at the end of a frame are dropped by
/// [`InputState::begin_frame`].
#[derive(Debug, Clone)]
pub struct InputState {
    /// Pointer position in window pixels; `None` while outside the window
    pub cursor_position: Option<Point>,
    pub buttons_pressed: HashSet<MouseButton>,
    pub buttons_just_pressed: HashSet<MouseButton>,
    pub buttons_just_released: HashSet<MouseButton>,
    pub keys_down: HashSet<Key>,
    /// Keys pressed this frame, in order, without OS repeats
    pub keys_just_pressed: Vec<Key>,
    pub keys_just_released: Vec<Key>,

    key_queue: VecDeque<Key>,

    /// Seconds elapsed since the previous frame
    frame_time: f32,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            cursor_position: None,
            buttons_pressed: HashSet::new(),
            buttons_just_pressed: HashSet::new(),
            buttons_just_released: HashSet::new(),
            keys_down: HashSet::new(),
            keys_just_pressed: Vec::new(),
            keys_just_released: Vec::new(),
            key_queue: VecDeque::with_capacity(KEY_QUEUE_CAPACITY),
            frame_time: 0.0,
        }
    }

    /// Drop the previous frame's edge state and queued key presses.
    ///
    /// `frame_time` is the time in seconds since the previous frame. Negative
    /// or non-finite values are treated as zero.
    pub fn begin_frame(&mut self, frame_time: f32) {
        self.buttons_just_pressed.clear();
        self.buttons_just_released.clear();
        self.keys_just_pressed.clear();
        self.keys_just_released.clear();
        self.key_queue.clear();
        self.frame_time = if frame_time.is_finite() {
            frame_time.max(0.0)
        } else {
            0.0
        };
    }

    pub fn press_button(&mut self, button: MouseButton) {
        self.buttons_pressed.insert(button);
        self.buttons_just_pressed.insert(button);
    }

    pub fn release_button(&mut self, button: MouseButton) {
        self.buttons_pressed.remove(&button);
        self.buttons_just_released.insert(button);
    }

    /// Record a key press
    ///
    /// OS auto-repeat events (`is_repeat`) only refresh the held state; the
    /// widgets run their own repeat timing.
    pub fn press_key(&mut self, key: Key, is_repeat: bool) {
        self.keys_down.insert(key);
        if is_repeat {
            return;
        }

        self.keys_just_pressed.push(key);
        if self.key_queue.len() < KEY_QUEUE_CAPACITY {
            self.key_queue.push_back(key);
        }
    }

    pub fn release_key(&mut self, key: Key) {
        self.keys_down.remove(&key);
        self.keys_just_released.push(key);
    }

    pub fn set_cursor_position(&mut self, position: Option<Point>) {
        self.cursor_position = position;
    }

    /// Seconds elapsed since the previous frame
    pub fn frame_time(&self) -> f32 {
        self.frame_time
    }

    /// Take the oldest queued key press, if any
    pub fn pop_key_pressed(&mut self) -> Option<Key> {
        self.key_queue.pop_front()
    }

    /// Number of key presses waiting to be consumed
    pub fn pending_key_presses(&self) -> usize {
        self.key_queue.len()
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    /// Pressed during this frame
    pub fn is_button_just_pressed(&self, button: MouseButton) -> bool {
        self.buttons_just_pressed.contains(&button)
    }

    pub fn is_button_just_released(&self, button: MouseButton) -> bool {
        self.buttons_just_released.contains(&button)
    }

    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn is_named_key_down(&self, named: NamedKey) -> bool {
        self.is_key_down(Key::Named(named))
    }

    pub fn is_key_just_pressed(&self, key: Key) -> bool {
        self.keys_just_pressed.contains(&key)
    }

    /// Whether either Shift key is held
    pub fn shift_held(&self) -> bool {
        self.is_named_key_down(NamedKey::ShiftLeft) || self.is_named_key_down(NamedKey::ShiftRight)
    }

    /// Whether either Ctrl key is held
    pub fn ctrl_held(&self) -> bool {
        self.is_named_key_down(NamedKey::ControlLeft)
            || self.is_named_key_down(NamedKey::ControlRight)
    }

    /// Whether either Super/Meta/Command key is held
    pub fn super_held(&self) -> bool {
        self.is_named_key_down(NamedKey::SuperLeft) || self.is_named_key_down(NamedKey::SuperRight)
    }

    /// Whether the shortcut modifier (Ctrl or Command) is held
    pub fn command_held(&self) -> bool {
        self.ctrl_held() || self.super_held()
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_press_release() {
        let mut input = InputState::new();

        input.press_button(MouseButton::Left);
        assert!(input.is_button_down(MouseButton::Left));
        assert!(input.is_button_just_pressed(MouseButton::Left));
        assert!(!input.is_button_just_released(MouseButton::Left));

        // New frame
        input.begin_frame(1.0 / 60.0);
        assert!(input.is_button_down(MouseButton::Left));
        assert!(!input.is_button_just_pressed(MouseButton::Left));

        input.release_button(MouseButton::Left);
        assert!(!input.is_button_down(MouseButton::Left));
        assert!(input.is_button_just_released(MouseButton::Left));
    }

    #[test]
    fn test_modifier_keys_track_sides() {
        let mut input = InputState::new();
        assert!(!input.shift_held());

        input.press_key(NamedKey::ShiftLeft.into(), false);
        input.press_key(NamedKey::ShiftRight.into(), false);
        input.release_key(NamedKey::ShiftLeft.into());
        assert!(input.shift_held());

        input.release_key(NamedKey::ShiftRight.into());
        assert!(!input.shift_held());

        input.press_key(NamedKey::SuperLeft.into(), false);
        assert!(input.command_held());
        assert!(!input.ctrl_held());
    }

    #[test]
    fn test_key_queue_pops_in_order() {
        let mut input = InputState::new();
        input.press_key(Key::Character('a'), false);
        input.press_key(Key::Character('b'), false);

        assert_eq!(input.pop_key_pressed(), Some(Key::Character('a')));
        assert_eq!(input.pop_key_pressed(), Some(Key::Character('b')));
        assert_eq!(input.pop_key_pressed(), None);
    }

    #[test]
    fn test_key_queue_cleared_each_frame() {
        let mut input = InputState::new();
        input.press_key(Key::Character('a'), false);

        input.begin_frame(0.016);
        assert_eq!(input.pending_key_presses(), 0);
        assert_eq!(input.pop_key_pressed(), None);
        // Held state survives the frame boundary
        assert!(input.is_key_down(Key::Character('a')));
    }

    #[test]
    fn test_key_queue_is_bounded() {
        let mut input = InputState::new();
        for _ in 0..KEY_QUEUE_CAPACITY + 4 {
            input.press_key(Key::Character('x'), false);
        }
        assert_eq!(input.pending_key_presses(), KEY_QUEUE_CAPACITY);
    }

    #[test]
    fn test_repeat_events_do_not_queue() {
        let mut input = InputState::new();
        input.press_key(NamedKey::Backspace.into(), false);
        input.press_key(NamedKey::Backspace.into(), true);
        input.press_key(NamedKey::Backspace.into(), true);

        assert!(input.is_named_key_down(NamedKey::Backspace));
        assert_eq!(input.pending_key_presses(), 1);
    }

    #[test]
    fn test_frame_time_sanitized() {
        let mut input = InputState::new();
        input.begin_frame(-1.0);
        assert_eq!(input.frame_time(), 0.0);
        input.begin_frame(f32::NAN);
        assert_eq!(input.frame_time(), 0.0);
        input.begin_frame(0.25);
        assert_eq!(input.frame_time(), 0.25);
    }
}
