use lumen_gui::{Color, Rect, UiContext};

/// Outline ring drawn around a widget's body
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Outline {
    pub color: Color,
    pub thickness: f32,
    /// Distance between the body and the outline
    pub distance: f32,
    /// Paint the outline as a solid backing box rather than a stroked ring
    pub fill: bool,
}

/// Draw the outline, then the body on top of it
pub(crate) fn draw_outlined_box(
    ui: &mut UiContext<'_>,
    body: Rect,
    roundness: f32,
    outline: Outline,
    body_color: Color,
) {
    let ring = body.expand(outline.distance);
    if outline.fill {
        ui.fill_rect(ring, roundness, outline.color);
    } else {
        ui.stroke_rect(ring, roundness, outline.thickness, outline.color);
    }
    ui.fill_rect(body, roundness, body_color);
}
