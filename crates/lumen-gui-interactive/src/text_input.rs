//! Text input component for interactive UI
//!
//! A single-line editable text field with a caret, shift selection, word
//! jumps, held-key repeat, clipboard shortcuts and horizontal scrolling.
//!
//! The editing rules live in [`crate::text_edit`] and [`crate::keymap`]; this
//! module wires them to the per-frame input and draws the result.

use crate::decoration::{draw_outlined_box, Outline};
use crate::key_repeat::{KeyRepeat, KeyRepeatConfig, RepeatKey};
use crate::keymap::{resolve_key, EditAction, Modifiers, ShiftMap};
use crate::text_edit::TextInputState;
use crate::viewport::{highlight_geometry, nearest_boundary, scroll_to_caret, TEXT_INSET};
use lumen_gui::{
    catppuccin::mocha, Color, CursorIcon, FontId, InputSnapshot, Key, MouseButton, Point, Rect,
    UiContext,
};
use lumen_gui_macros::WithBuilders;
use std::ops::Range;

/// Caret width in pixels
const CARET_WIDTH: f32 = 2.0;
/// Vertical gap between the widget edges and the caret/highlight boxes
const CARET_INSET: f32 = 3.0;

/// Visual styling for a text input
#[derive(Debug, Clone, WithBuilders)]
pub struct TextInputStyle {
    /// Background color when idle
    pub base_background_color: Color,
    /// Outline color when idle
    pub base_outline_color: Color,
    /// Text color when idle
    pub base_text_color: Color,
    /// Placeholder color when idle
    pub base_placeholder_color: Color,

    /// Background color when hovered
    pub hover_background_color: Color,
    /// Outline color when hovered
    pub hover_outline_color: Color,
    /// Text color when hovered
    pub hover_text_color: Color,
    /// Placeholder color when hovered
    pub hover_placeholder_color: Color,

    /// Background color while focused
    pub focused_background_color: Color,
    /// Outline color while focused
    pub focused_outline_color: Color,
    /// Text color while focused
    pub focused_text_color: Color,

    /// Selection highlight color
    pub highlight_color: Color,
    pub caret_color: Color,

    #[with_builders(into)]
    pub font: FontId,
    pub font_size: f32,
    /// Corner roundness in [0, 1]
    pub roundness: f32,
    pub outline_thickness: f32,
    /// Gap between the field body and its outline
    pub outline_distance: f32,
    /// Draw the outline as a filled backing box instead of a stroke
    pub outline_fill: bool,
}

impl Default for TextInputStyle {
    fn default() -> Self {
        Self {
            // Idle
            base_background_color: mocha::SURFACE0,
            base_outline_color: mocha::SURFACE2,
            base_text_color: mocha::SUBTEXT1,
            base_placeholder_color: mocha::OVERLAY0,
            // Hover
            hover_background_color: mocha::SURFACE1,
            hover_outline_color: mocha::LAVENDER,
            hover_text_color: mocha::TEXT,
            hover_placeholder_color: mocha::OVERLAY1,
            // Focused
            focused_background_color: mocha::SURFACE1,
            focused_outline_color: mocha::MAUVE,
            focused_text_color: mocha::TEXT,
            // Others
            highlight_color: mocha::LAVENDER.with_alpha(0.3),
            caret_color: mocha::ROSEWATER,
            font: FontId::default(),
            font_size: 20.0,
            roundness: 0.2,
            outline_thickness: 1.0,
            outline_distance: 2.0,
            outline_fill: false,
        }
    }
}

/// Colors picked for the current interaction state
struct Palette {
    background: Color,
    outline: Color,
    text: Color,
    placeholder: Color,
}

/// A single-line text input
///
/// Focus is gained by clicking the field (or [`TextInput::set_focused`]) and
/// is never taken away by the widget itself.
///
/// # Example
///
/// ```ignore
/// let mut name = TextInput::new(Rect::from_xywh(20.0, 80.0, 240.0, 36.0), "Name");
///
/// // every frame, after any widget that should win overlapping clicks
/// name.update_and_render(&mut snapshot, &mut ui);
/// println!("{}", name.text());
/// ```
#[derive(Debug, Clone)]
pub struct TextInput {
    bounds: Rect,
    style: TextInputStyle,
    placeholder: String,
    state: TextInputState,
    scroll_offset: f32,
    focused: bool,
    key_repeat: KeyRepeat,
    repeat_config: KeyRepeatConfig,
    shift_map: ShiftMap,
}

impl TextInput {
    /// Create an empty, unfocused text input
    pub fn new(bounds: Rect, placeholder: impl Into<String>) -> Self {
        Self {
            bounds,
            style: TextInputStyle::default(),
            placeholder: placeholder.into(),
            state: TextInputState::new(),
            scroll_offset: 0.0,
            focused: false,
            key_repeat: KeyRepeat::new(),
            repeat_config: KeyRepeatConfig::default(),
            shift_map: ShiftMap::default(),
        }
    }

    pub fn with_style(mut self, style: TextInputStyle) -> Self {
        self.style = style;
        self
    }

    /// Override the held-key repeat timing
    pub fn with_key_repeat(mut self, config: KeyRepeatConfig) -> Self {
        self.repeat_config = config;
        self
    }

    /// Use a different Shift symbol table (keyboard layout)
    pub fn with_shift_map(mut self, shift_map: ShiftMap) -> Self {
        self.shift_map = shift_map;
        self
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn style(&self) -> &TextInputStyle {
        &self.style
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn text(&self) -> &str {
        self.state.text()
    }

    /// Replace the content. The cursor is clamped, the selection cleared and
    /// the view scrolled back to the start.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.state.set_text(text);
        self.scroll_offset = 0.0;
    }

    /// Cursor position as a character index
    pub fn cursor(&self) -> usize {
        self.state.cursor()
    }

    /// Selected character span, if a selection is open
    pub fn selection(&self) -> Option<Range<usize>> {
        self.state.selection()
    }

    pub fn selected_text(&self) -> &str {
        self.state.selected_text()
    }

    /// Horizontal text offset in pixels (zero or negative)
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn state(&self) -> &TextInputState {
        &self.state
    }

    /// Process this frame's input and draw the field.
    ///
    /// Claims the click when pressed while hovered and nobody else claimed it,
    /// which focuses the field. Unfocused fields draw their text (or the
    /// placeholder) and ignore the keyboard.
    pub fn update_and_render(&mut self, snapshot: &mut InputSnapshot, ui: &mut UiContext<'_>) {
        let hovered = self.bounds.contains(snapshot.pointer);
        let mut claimed = false;

        if hovered {
            snapshot.request_cursor(CursorIcon::Text);
            claimed = snapshot.try_claim_click(ui.is_button_just_pressed(MouseButton::Left));
            if claimed && !self.focused {
                log::debug!("text input '{}' focused", self.placeholder);
                self.focused = true;
            }
        }

        let palette = self.palette(hovered);
        draw_outlined_box(
            ui,
            self.bounds,
            self.style.roundness,
            Outline {
                color: palette.outline,
                thickness: self.style.outline_thickness,
                distance: self.style.outline_distance,
                fill: self.style.outline_fill,
            },
            palette.background,
        );

        if !self.focused {
            if self.state.is_empty() {
                let origin = self.text_origin(0.0);
                ui.draw_text(
                    &self.placeholder,
                    origin,
                    self.style.font,
                    self.style.font_size,
                    palette.placeholder,
                );
            } else {
                self.draw_content(ui, palette.text, None);
            }
            return;
        }

        self.handle_keyboard(ui);

        let pointer_down = !snapshot.click_consumed && ui.is_button_down(MouseButton::Left);
        if claimed || (hovered && pointer_down) {
            self.place_cursor_at(snapshot.pointer.x, ui);
        }

        let prefix_width = self.measure(ui, self.state.prefix(self.state.cursor()));
        let text_width = self.measure(ui, self.state.text());
        let placement = scroll_to_caret(
            self.scroll_offset,
            prefix_width,
            text_width,
            self.bounds.width(),
        );
        self.scroll_offset = placement.scroll;

        self.draw_content(ui, palette.text, Some(placement.caret_x));
    }

    fn palette(&self, hovered: bool) -> Palette {
        let style = &self.style;
        if self.focused {
            Palette {
                background: style.focused_background_color,
                outline: style.focused_outline_color,
                text: style.focused_text_color,
                placeholder: style.hover_placeholder_color,
            }
        } else if hovered {
            Palette {
                background: style.hover_background_color,
                outline: style.hover_outline_color,
                text: style.hover_text_color,
                placeholder: style.hover_placeholder_color,
            }
        } else {
            Palette {
                background: style.base_background_color,
                outline: style.base_outline_color,
                text: style.base_text_color,
                placeholder: style.base_placeholder_color,
            }
        }
    }

    /// Held-key repeats first, then at most one discrete key press
    fn handle_keyboard(&mut self, ui: &mut UiContext<'_>) {
        let modifiers = Modifiers::from_input(ui.input());

        let held = RepeatKey::ALL
            .into_iter()
            .find(|key| ui.input().is_named_key_down(key.named_key()));
        let repeated = self
            .key_repeat
            .update(held, ui.frame_time(), &self.repeat_config);
        if let Some(key) = repeated {
            let action = resolve_key(Key::Named(key.named_key()), modifiers, &self.shift_map);
            if let Some(action) = action {
                self.apply(action, ui);
            }
        }

        if let Some(key) = ui.pop_key_pressed() {
            match resolve_key(key, modifiers, &self.shift_map) {
                Some(action) => self.apply(action, ui),
                None => log::trace!("text input: ignored {key:?}"),
            }
        }
    }

    fn apply(&mut self, action: EditAction, ui: &mut UiContext<'_>) {
        let changed = self.state.apply(action, ui.clipboard());
        log::trace!(
            "text input: {action:?} -> cursor {} (changed: {changed})",
            self.state.cursor()
        );
    }

    /// Move the caret to the character boundary nearest `pointer_x`
    fn place_cursor_at(&mut self, pointer_x: f32, ui: &mut UiContext<'_>) {
        let local_x = pointer_x - (self.bounds.x() + TEXT_INSET) - self.scroll_offset;
        let boundaries: Vec<f32> = (0..=self.state.len())
            .map(|index| self.measure(ui, self.state.prefix(index)))
            .collect();

        let index = nearest_boundary(local_x, &boundaries);
        if index != self.state.cursor() || self.state.anchor().is_some() {
            self.state.set_cursor(index);
        }
    }

    /// Draw highlight, text and caret inside the field's interior
    fn draw_content(&self, ui: &mut UiContext<'_>, text_color: Color, caret_x: Option<f32>) {
        let bounds = self.bounds;
        let interior = Rect::from_xywh(
            bounds.x() + TEXT_INSET,
            bounds.y(),
            bounds.width() - 2.0 * TEXT_INSET,
            bounds.height(),
        );
        let box_y = bounds.y() + CARET_INSET;
        let box_height = bounds.height() - 2.0 * CARET_INSET;

        ui.with_clip(interior, |ui| {
            if let Some(span) = self.state.selection().filter(|span| !span.is_empty()) {
                let start_width = self.measure(ui, self.state.prefix(span.start));
                let selection_width = self.measure(ui, self.state.selected_text());
                if let Some(highlight) = highlight_geometry(
                    start_width,
                    selection_width,
                    self.scroll_offset,
                    bounds.width(),
                ) {
                    ui.fill_rect(
                        Rect::from_xywh(
                            bounds.x() + TEXT_INSET + highlight.x,
                            box_y,
                            highlight.width,
                            box_height,
                        ),
                        0.0,
                        self.style.highlight_color,
                    );
                }
            }

            let origin = self.text_origin(self.scroll_offset);
            ui.draw_text(
                self.state.text(),
                origin,
                self.style.font,
                self.style.font_size,
                text_color,
            );

            if let Some(caret_x) = caret_x {
                ui.fill_rect(
                    Rect::from_xywh(
                        bounds.x() + TEXT_INSET + caret_x,
                        box_y,
                        CARET_WIDTH,
                        box_height,
                    ),
                    0.0,
                    self.style.caret_color,
                );
            }
        });
    }

    /// Text origin with `scroll` applied, vertically centered on the font size
    fn text_origin(&self, scroll: f32) -> Point {
        Point::new(
            self.bounds.x() + TEXT_INSET + scroll,
            self.bounds.y() + self.bounds.height() / 2.0 - self.style.font_size / 2.0,
        )
    }

    fn measure(&self, ui: &mut UiContext<'_>, text: &str) -> f32 {
        ui.measure_text(text, self.style.font, self.style.font_size)
    }
}
