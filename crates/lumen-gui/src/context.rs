//! Frame context handed to widgets.

use crate::{
    Clipboard, Color, ContentMeasurer, FontId, InputState, Key, MeasureTextRequest, MouseButton,
    Painter, Point, Rect, Shape, Stroke, StyledRect, TextShape,
};

/// Horizontal space inserted between glyphs for all widget text
pub const TEXT_SPACING: f32 = 1.0;

/// Everything a widget may touch while it is updated and rendered.
///
/// A `UiContext` borrows the backend collaborators for a single frame. The
/// driver builds one after feeding events into the [`InputState`] and passes
/// it, together with the frame's `InputSnapshot`, to each widget in order.
///
/// ```ignore
/// input.begin_frame(dt);
/// // ... feed window events into `input` ...
/// let mut snapshot = InputSnapshot::begin_frame(&input);
/// let mut ui = UiContext::new(&mut input, &mut draw_list, &mut measurer, &mut clipboard);
/// if button.update_and_render(&mut snapshot, &mut ui) {
///     log::info!("clicked");
/// }
/// name_field.update_and_render(&mut snapshot, &mut ui);
/// window.set_cursor(snapshot.cursor_icon);
/// ```
pub struct UiContext<'a> {
    input: &'a mut InputState,
    painter: &'a mut dyn Painter,
    measurer: &'a mut dyn ContentMeasurer,
    clipboard: &'a mut dyn Clipboard,
}

impl<'a> UiContext<'a> {
    pub fn new(
        input: &'a mut InputState,
        painter: &'a mut dyn Painter,
        measurer: &'a mut dyn ContentMeasurer,
        clipboard: &'a mut dyn Clipboard,
    ) -> Self {
        Self {
            input,
            painter,
            measurer,
            clipboard,
        }
    }

    // Input

    pub fn input(&self) -> &InputState {
        &*self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut *self.input
    }

    pub fn frame_time(&self) -> f32 {
        self.input.frame_time()
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.input.is_button_down(button)
    }

    pub fn is_button_just_pressed(&self, button: MouseButton) -> bool {
        self.input.is_button_just_pressed(button)
    }

    pub fn is_key_down(&self, key: Key) -> bool {
        self.input.is_key_down(key)
    }

    pub fn shift_held(&self) -> bool {
        self.input.shift_held()
    }

    pub fn command_held(&self) -> bool {
        self.input.command_held()
    }

    /// Take this frame's discrete key press, if one is queued
    pub fn pop_key_pressed(&mut self) -> Option<Key> {
        self.input.pop_key_pressed()
    }

    // Drawing

    pub fn draw(&mut self, shape: Shape) {
        self.painter.draw(shape);
    }

    pub fn fill_rect(&mut self, rect: Rect, roundness: f32, color: Color) {
        self.draw(Shape::Rect(
            StyledRect::filled(rect, color).with_roundness(roundness),
        ));
    }

    pub fn stroke_rect(&mut self, rect: Rect, roundness: f32, thickness: f32, color: Color) {
        self.draw(Shape::Rect(
            StyledRect::outlined(rect, Stroke::new(thickness, color)).with_roundness(roundness),
        ));
    }

    pub fn draw_text(
        &mut self,
        text: &str,
        position: Point,
        font: FontId,
        font_size: f32,
        color: Color,
    ) {
        self.draw(Shape::Text(TextShape {
            text: text.to_string(),
            position,
            font,
            font_size,
            spacing: TEXT_SPACING,
            color,
        }));
    }

    /// Run `f` with drawing restricted to `rect`
    pub fn with_clip<R>(&mut self, rect: Rect, f: impl FnOnce(&mut Self) -> R) -> R {
        self.painter.push_clip(rect);
        let result = f(self);
        self.painter.pop_clip();
        result
    }

    // Measurement

    /// Rendered pixel width of `text`
    pub fn measure_text(&mut self, text: &str, font: FontId, font_size: f32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        self.measurer
            .measure_text(MeasureTextRequest::new(text, font, font_size, TEXT_SPACING))
            .width
    }

    pub fn measurer(&mut self) -> &mut dyn ContentMeasurer {
        &mut *self.measurer
    }

    // Clipboard

    pub fn clipboard(&mut self) -> &mut dyn Clipboard {
        &mut *self.clipboard
    }
}

impl std::fmt::Debug for UiContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiContext")
            .field("input", &self.input)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{css, DrawList, MemoryClipboard, MonospaceMeasurer};

    #[test]
    fn test_with_clip_scopes_drawing() {
        let mut input = InputState::new();
        let mut list = DrawList::new();
        let mut measurer = MonospaceMeasurer::default();
        let mut clipboard = MemoryClipboard::new();
        let mut ui = UiContext::new(&mut input, &mut list, &mut measurer, &mut clipboard);

        let clip = Rect::from_xywh(0.0, 0.0, 50.0, 20.0);
        ui.with_clip(clip, |ui| {
            ui.draw_text("inside", Point::zero(), FontId(0), 20.0, css::WHITE)
        });
        ui.fill_rect(clip, 0.0, css::BLACK);

        assert_eq!(list.shapes()[0].clip_rect, Some(clip));
        assert_eq!(list.shapes()[1].clip_rect, None);
        assert_eq!(list.current_clip(), None);
    }

    #[test]
    fn test_measure_text_uses_widget_spacing() {
        let mut input = InputState::new();
        let mut list = DrawList::new();
        let mut measurer = MonospaceMeasurer::default();
        let mut clipboard = MemoryClipboard::new();
        let mut ui = UiContext::new(&mut input, &mut list, &mut measurer, &mut clipboard);

        assert_eq!(ui.measure_text("", FontId(0), 20.0), 0.0);
        // 3 glyphs of 10px plus 2 gaps of TEXT_SPACING
        assert_eq!(ui.measure_text("abc", FontId(0), 20.0), 32.0);
    }
}
