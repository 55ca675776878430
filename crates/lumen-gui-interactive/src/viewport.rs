//! Horizontal scrolling and caret/highlight geometry for single-line text.
//!
//! All x values are relative to the start of the text area (the widget's left
//! edge plus [`TEXT_INSET`]); `scroll` is zero or negative.

/// Gap between the widget's left edge and the text
pub const TEXT_INSET: f32 = 5.0;
/// The caret may not come closer than this to the right edge
pub const CARET_MARGIN: f32 = 10.0;
/// When scrolling right, the end of the text is placed this far from the edge
pub const SCROLL_MARGIN: f32 = 15.0;
/// Gap kept between a clipped selection highlight and the right edge
pub const HIGHLIGHT_MARGIN: f32 = 10.0;

/// Scroll offset and caret position after keeping the caret visible
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaretPlacement {
    pub scroll: f32,
    pub caret_x: f32,
}

/// Adjust `scroll` so the caret at `prefix_width` stays inside `visible_width`.
///
/// Overflowing the right margin scrolls so the end of the text sits just
/// inside the margin. Leaving the left edge scrolls back to the start, unless
/// the start is so far away that the caret would overflow again, in which
/// case the caret is pinned to the left edge.
///
/// Unlike a plain align-the-end / reset-to-zero rule, the right-overflow
/// scroll is clamped to `-prefix_width`, and a caret more than one field
/// width from the start is pinned rather than reset.
pub fn scroll_to_caret(
    scroll: f32,
    prefix_width: f32,
    text_width: f32,
    visible_width: f32,
) -> CaretPlacement {
    let limit = visible_width - CARET_MARGIN;
    let x = prefix_width + scroll;

    let scroll = if x >= limit {
        (visible_width - SCROLL_MARGIN - text_width)
            .max(-prefix_width)
            .min(0.0)
    } else if x < 0.0 {
        if prefix_width < limit {
            0.0
        } else {
            -prefix_width
        }
    } else {
        scroll
    };

    CaretPlacement {
        scroll,
        caret_x: prefix_width + scroll,
    }
}

/// Horizontal extent of the selection highlight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    pub x: f32,
    pub width: f32,
}

/// Highlight box for a selection starting `start_width` into the text and
/// `selection_width` wide. A box reaching past the right edge is shortened to
/// end [`HIGHLIGHT_MARGIN`] before it. Returns `None` when nothing remains
/// visible.
pub fn highlight_geometry(
    start_width: f32,
    selection_width: f32,
    scroll: f32,
    visible_width: f32,
) -> Option<Highlight> {
    let x = start_width + scroll;
    let mut width = selection_width;

    let overflow = x + width - visible_width;
    if overflow > 0.0 {
        width -= overflow + HIGHLIGHT_MARGIN;
    }

    (width > 0.0).then_some(Highlight { x, width })
}

/// Index of the boundary closest to `target`.
///
/// `boundaries[i]` is the x position of the caret at character index `i` and
/// must be non-decreasing.
pub fn nearest_boundary(target: f32, boundaries: &[f32]) -> usize {
    let after = boundaries.partition_point(|&x| x < target);
    if after == 0 {
        return 0;
    }
    if after == boundaries.len() {
        return boundaries.len() - 1;
    }

    let before = after - 1;
    if target - boundaries[before] <= boundaries[after] - target {
        before
    } else {
        after
    }
}
