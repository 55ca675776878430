//! Drawing surface used by widgets.

use crate::primitives::{ClippedShape, Rect, Shape};

/// Sink for the shapes a widget draws during one frame.
///
/// Backends translate shapes into their own draw calls. Clip regions nest:
/// every `push_clip` must be balanced by a `pop_clip`, and the effective clip
/// is the intersection of all pushed rectangles.
pub trait Painter {
    fn draw(&mut self, shape: Shape);
    fn push_clip(&mut self, rect: Rect);
    fn pop_clip(&mut self);
}

/// Painter that records shapes in draw order.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    shapes: Vec<ClippedShape>,
    clip_stack: Vec<Rect>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> &[ClippedShape] {
        &self.shapes
    }

    /// Current effective clip rectangle, if any clip is active
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    /// Drop recorded shapes, keeping allocations for the next frame
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.clip_stack.clear();
    }

    /// Recorded text runs, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.shapes.iter().filter_map(|clipped| match &clipped.shape {
            Shape::Text(text) => Some(text.text.as_str()),
            Shape::Rect(_) => None,
        })
    }
}

impl Painter for DrawList {
    fn draw(&mut self, shape: Shape) {
        self.shapes.push(ClippedShape {
            clip_rect: self.current_clip(),
            shape,
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        let clip = match self.current_clip() {
            // Disjoint clips collapse to an empty rect at the new origin
            Some(parent) => parent
                .intersect(&rect)
                .unwrap_or(Rect::new(rect.min, rect.min)),
            None => rect,
        };
        self.clip_stack.push(clip);
    }

    fn pop_clip(&mut self) {
        self.clip_stack.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{css, Color, StyledRect};

    #[test]
    fn test_nested_clips_intersect() {
        let mut list = DrawList::new();
        list.push_clip(Rect::from_xywh(0.0, 0.0, 100.0, 100.0));
        list.push_clip(Rect::from_xywh(50.0, 50.0, 100.0, 100.0));
        list.draw(Shape::Rect(StyledRect::filled(Rect::default(), css::RED)));
        list.pop_clip();
        list.draw(Shape::Rect(StyledRect::filled(Rect::default(), css::BLUE)));
        list.pop_clip();
        list.draw(Shape::Rect(StyledRect::filled(Rect::default(), Color::transparent())));

        let clips: Vec<_> = list.shapes().iter().map(|s| s.clip_rect).collect();
        assert_eq!(
            clips,
            vec![
                Some(Rect::new([50.0, 50.0], [100.0, 100.0])),
                Some(Rect::from_xywh(0.0, 0.0, 100.0, 100.0)),
                None,
            ]
        );
    }
}
