use lumen_gui::CursorIcon;
use winit::window::Window;

/// Convert a requested cursor icon to winit's
pub fn convert_cursor_icon(icon: CursorIcon) -> winit::window::CursorIcon {
    match icon {
        CursorIcon::Default => winit::window::CursorIcon::Default,
        CursorIcon::PointingHand => winit::window::CursorIcon::Pointer,
        CursorIcon::Text => winit::window::CursorIcon::Text,
    }
}

/// Show `icon` over `window`
pub fn apply_cursor_icon(window: &Window, icon: CursorIcon) {
    window.set_cursor(convert_cursor_icon(icon));
}
