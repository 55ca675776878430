//! Winit input adapter for lumen-gui
//!
//! Keys are converted from their *physical* key code, not from the text the
//! platform layout produces. Shifted symbols are resolved by the text input's
//! own shift map, so `Shift+1` arrives as Shift held plus `Key::Character('1')`.

use lumen_gui::{InputState, Key, MouseButton, NamedKey, Point};
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Extension trait for InputState to handle winit events
pub trait WinitInputExt {
    /// Process a winit WindowEvent and update internal state
    ///
    /// This should be called for each WindowEvent received from winit.
    fn handle_winit_event(&mut self, event: &WindowEvent);
}

impl WinitInputExt for InputState {
    fn handle_winit_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.set_cursor_position(Some(Point {
                    x: position.x as f32,
                    y: position.y as f32,
                }));
            }
            WindowEvent::CursorLeft { .. } => {
                self.set_cursor_position(None);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let btn = convert_mouse_button(*button);
                match state {
                    ElementState::Pressed => self.press_button(btn),
                    ElementState::Released => self.release_button(btn),
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let key = convert_physical_key(event.physical_key);
                match event.state {
                    ElementState::Pressed => self.press_key(key, event.repeat),
                    ElementState::Released => self.release_key(key),
                }
            }
            WindowEvent::Focused(false) => {
                // Releases happening while unfocused are never delivered
                log::debug!("window lost focus, releasing held input");
                self.keys_down.clear();
                self.buttons_pressed.clear();
            }
            _ => {
                // Ignore other events
            }
        }
    }
}

/// Convert winit MouseButton to lumen-gui MouseButton
pub fn convert_mouse_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        winit::event::MouseButton::Back => MouseButton::Other(3),
        winit::event::MouseButton::Forward => MouseButton::Other(4),
        winit::event::MouseButton::Other(n) => MouseButton::Other(n.min(u8::MAX as u16) as u8),
    }
}

/// Convert a physical key to a lumen-gui Key
pub fn convert_physical_key(key: PhysicalKey) -> Key {
    match key {
        PhysicalKey::Code(code) => convert_key_code(code),
        PhysicalKey::Unidentified(_) => Key::Unknown,
    }
}

/// Convert a winit KeyCode to a lumen-gui Key
///
/// Printable keys map to the character they produce on a US layout without
/// modifiers.
pub fn convert_key_code(code: KeyCode) -> Key {
    if let Some(named) = convert_named_key_code(code) {
        return Key::Named(named);
    }

    let ch = match code {
        KeyCode::KeyA => 'a',
        KeyCode::KeyB => 'b',
        KeyCode::KeyC => 'c',
        KeyCode::KeyD => 'd',
        KeyCode::KeyE => 'e',
        KeyCode::KeyF => 'f',
        KeyCode::KeyG => 'g',
        KeyCode::KeyH => 'h',
        KeyCode::KeyI => 'i',
        KeyCode::KeyJ => 'j',
        KeyCode::KeyK => 'k',
        KeyCode::KeyL => 'l',
        KeyCode::KeyM => 'm',
        KeyCode::KeyN => 'n',
        KeyCode::KeyO => 'o',
        KeyCode::KeyP => 'p',
        KeyCode::KeyQ => 'q',
        KeyCode::KeyR => 'r',
        KeyCode::KeyS => 's',
        KeyCode::KeyT => 't',
        KeyCode::KeyU => 'u',
        KeyCode::KeyV => 'v',
        KeyCode::KeyW => 'w',
        KeyCode::KeyX => 'x',
        KeyCode::KeyY => 'y',
        KeyCode::KeyZ => 'z',
        KeyCode::Digit0 | KeyCode::Numpad0 => '0',
        KeyCode::Digit1 | KeyCode::Numpad1 => '1',
        KeyCode::Digit2 | KeyCode::Numpad2 => '2',
        KeyCode::Digit3 | KeyCode::Numpad3 => '3',
        KeyCode::Digit4 | KeyCode::Numpad4 => '4',
        KeyCode::Digit5 | KeyCode::Numpad5 => '5',
        KeyCode::Digit6 | KeyCode::Numpad6 => '6',
        KeyCode::Digit7 | KeyCode::Numpad7 => '7',
        KeyCode::Digit8 | KeyCode::Numpad8 => '8',
        KeyCode::Digit9 | KeyCode::Numpad9 => '9',
        KeyCode::Minus | KeyCode::NumpadSubtract => '-',
        KeyCode::Equal => '=',
        KeyCode::BracketLeft => '[',
        KeyCode::BracketRight => ']',
        KeyCode::Backslash => '\\',
        KeyCode::Backquote => '`',
        KeyCode::Semicolon => ';',
        KeyCode::Quote => '\'',
        KeyCode::Comma => ',',
        KeyCode::Period | KeyCode::NumpadDecimal => '.',
        KeyCode::Slash | KeyCode::NumpadDivide => '/',
        KeyCode::NumpadAdd => '+',
        KeyCode::NumpadMultiply => '*',
        KeyCode::Space => ' ',
        _ => return Key::Unknown,
    };
    Key::Character(ch)
}

fn convert_named_key_code(code: KeyCode) -> Option<NamedKey> {
    let named = match code {
        KeyCode::Enter | KeyCode::NumpadEnter => NamedKey::Enter,
        KeyCode::Escape => NamedKey::Escape,
        KeyCode::Backspace => NamedKey::Backspace,
        KeyCode::Delete => NamedKey::Delete,
        KeyCode::Tab => NamedKey::Tab,
        KeyCode::ArrowLeft => NamedKey::ArrowLeft,
        KeyCode::ArrowRight => NamedKey::ArrowRight,
        KeyCode::ArrowUp => NamedKey::ArrowUp,
        KeyCode::ArrowDown => NamedKey::ArrowDown,
        KeyCode::Home => NamedKey::Home,
        KeyCode::End => NamedKey::End,
        KeyCode::ShiftLeft => NamedKey::ShiftLeft,
        KeyCode::ShiftRight => NamedKey::ShiftRight,
        KeyCode::ControlLeft => NamedKey::ControlLeft,
        KeyCode::ControlRight => NamedKey::ControlRight,
        KeyCode::AltLeft => NamedKey::AltLeft,
        KeyCode::AltRight => NamedKey::AltRight,
        KeyCode::SuperLeft => NamedKey::SuperLeft,
        KeyCode::SuperRight => NamedKey::SuperRight,
        KeyCode::CapsLock => NamedKey::CapsLock,
        KeyCode::F1 => NamedKey::F(1),
        KeyCode::F2 => NamedKey::F(2),
        KeyCode::F3 => NamedKey::F(3),
        KeyCode::F4 => NamedKey::F(4),
        KeyCode::F5 => NamedKey::F(5),
        KeyCode::F6 => NamedKey::F(6),
        KeyCode::F7 => NamedKey::F(7),
        KeyCode::F8 => NamedKey::F(8),
        KeyCode::F9 => NamedKey::F(9),
        KeyCode::F10 => NamedKey::F(10),
        KeyCode::F11 => NamedKey::F(11),
        KeyCode::F12 => NamedKey::F(12),
        _ => return None,
    };
    Some(named)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_are_unshifted() {
        assert_eq!(convert_key_code(KeyCode::KeyA), Key::Character('a'));
        assert_eq!(convert_key_code(KeyCode::KeyZ), Key::Character('z'));
        assert_eq!(convert_key_code(KeyCode::Digit1), Key::Character('1'));
        assert_eq!(convert_key_code(KeyCode::BracketLeft), Key::Character('['));
        assert_eq!(convert_key_code(KeyCode::Space), Key::Character(' '));
    }

    #[test]
    fn test_modifiers_keep_their_side() {
        assert_eq!(
            convert_key_code(KeyCode::ShiftRight),
            Key::Named(NamedKey::ShiftRight)
        );
        assert_eq!(
            convert_key_code(KeyCode::SuperLeft),
            Key::Named(NamedKey::SuperLeft)
        );
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(convert_key_code(KeyCode::PrintScreen), Key::Unknown);
        assert_eq!(
            convert_physical_key(PhysicalKey::Code(KeyCode::Backspace)),
            Key::Named(NamedKey::Backspace)
        );
    }

    #[test]
    fn test_mouse_buttons() {
        assert_eq!(
            convert_mouse_button(winit::event::MouseButton::Left),
            MouseButton::Left
        );
        assert_eq!(
            convert_mouse_button(winit::event::MouseButton::Forward),
            MouseButton::Other(4)
        );
        assert_eq!(
            convert_mouse_button(winit::event::MouseButton::Other(900)),
            MouseButton::Other(255)
        );
    }

    #[test]
    fn test_focus_loss_releases_held_input() {
        let mut input = InputState::new();
        input.press_key(Key::Named(NamedKey::ShiftLeft), false);
        input.press_button(MouseButton::Left);

        input.handle_winit_event(&WindowEvent::Focused(false));

        assert!(!input.shift_held());
        assert!(!input.is_button_down(MouseButton::Left));
    }
}
