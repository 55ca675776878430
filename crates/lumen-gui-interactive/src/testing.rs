//! Headless frame driver shared by the widget tests.

use lumen_gui::{
    Color, DrawList, InputSnapshot, InputState, Key, MemoryClipboard, MonospaceMeasurer, Point,
    Rect, Shape, StyledRect, TextShape, UiContext,
};

pub(crate) struct Harness {
    pub input: InputState,
    pub draw_list: DrawList,
    pub measurer: MonospaceMeasurer,
    pub clipboard: MemoryClipboard,
    frame_time: f32,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_frame_time(1.0 / 60.0)
    }

    pub fn with_frame_time(frame_time: f32) -> Self {
        let mut input = InputState::new();
        input.begin_frame(frame_time);
        Self {
            input,
            draw_list: DrawList::new(),
            measurer: MonospaceMeasurer::default(),
            clipboard: MemoryClipboard::new(),
            frame_time,
        }
    }

    pub fn point_at(&mut self, x: f32, y: f32) {
        self.input.set_cursor_position(Some(Point::new(x, y)));
    }

    /// Run one frame with the input fed so far, then start the next frame.
    pub fn run<R>(
        &mut self,
        f: impl FnOnce(&mut InputSnapshot, &mut UiContext<'_>) -> R,
    ) -> (InputSnapshot, R) {
        self.draw_list.clear();
        let mut snapshot = InputSnapshot::begin_frame(&self.input);
        let result = {
            let mut ui = UiContext::new(
                &mut self.input,
                &mut self.draw_list,
                &mut self.measurer,
                &mut self.clipboard,
            );
            f(&mut snapshot, &mut ui)
        };
        self.input.begin_frame(self.frame_time);
        (snapshot, result)
    }

    /// Press `key`, run a frame with `f`, release `key`
    pub fn tap(&mut self, key: Key, f: impl FnOnce(&mut InputSnapshot, &mut UiContext<'_>)) {
        self.input.press_key(key, false);
        self.run(f);
        self.input.release_key(key);
    }

    pub fn rects(&self) -> Vec<(Option<Rect>, StyledRect)> {
        self.draw_list
            .shapes()
            .iter()
            .filter_map(|clipped| match &clipped.shape {
                Shape::Rect(rect) => Some((clipped.clip_rect, rect.clone())),
                Shape::Text(_) => None,
            })
            .collect()
    }

    pub fn filled_with(&self, color: Color) -> Vec<Rect> {
        self.rects()
            .into_iter()
            .filter(|(_, rect)| rect.fill == Some(color))
            .map(|(_, rect)| rect.rect)
            .collect()
    }

    pub fn texts(&self) -> Vec<(Option<Rect>, TextShape)> {
        self.draw_list
            .shapes()
            .iter()
            .filter_map(|clipped| match &clipped.shape {
                Shape::Text(text) => Some((clipped.clip_rect, text.clone())),
                Shape::Rect(_) => None,
            })
            .collect()
    }
}
