//! Text measurement.
//!
//! Widgets need the rendered pixel width of text to place the caret, size the
//! selection highlight and align labels. The measuring itself belongs to the
//! rendering layer; this module only defines the request shape and the trait
//! backends implement.

/// Opaque handle to a font owned by the rendering backend
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FontId(pub u32);

impl From<u32> for FontId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Request to measure a single line of text.
#[derive(Debug, Clone, Copy)]
pub struct MeasureTextRequest<'a> {
    pub text: &'a str,
    pub font: FontId,
    pub font_size: f32,
    /// Extra horizontal space inserted between glyphs
    pub spacing: f32,
}

impl<'a> MeasureTextRequest<'a> {
    pub fn new(text: &'a str, font: FontId, font_size: f32, spacing: f32) -> Self {
        Self {
            text,
            font,
            font_size,
            spacing,
        }
    }
}

/// Intrinsic size measurement result.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IntrinsicSize {
    pub width: f32,
    pub height: f32,
}

impl IntrinsicSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

/// Backend-agnostic text measurement.
pub trait ContentMeasurer {
    /// Measure the bounding box of a single line of shaped text.
    ///
    /// The empty string measures as zero width.
    fn measure_text(&mut self, request: MeasureTextRequest<'_>) -> IntrinsicSize;
}

/// Deterministic measurer where every glyph has the same advance.
///
/// Width of `n` glyphs is `n * font_size * advance_ratio + (n - 1) * spacing`.
/// Used for headless drivers and tests.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMeasurer {
    pub advance_ratio: f32,
}

impl MonospaceMeasurer {
    pub fn new(advance_ratio: f32) -> Self {
        Self { advance_ratio }
    }
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self { advance_ratio: 0.5 }
    }
}

impl ContentMeasurer for MonospaceMeasurer {
    fn measure_text(&mut self, request: MeasureTextRequest<'_>) -> IntrinsicSize {
        let glyphs = request.text.chars().count();
        if glyphs == 0 {
            return IntrinsicSize::new(0.0, request.font_size);
        }

        let advance = request.font_size * self.advance_ratio;
        let width = glyphs as f32 * advance + (glyphs - 1) as f32 * request.spacing;
        IntrinsicSize::new(width, request.font_size)
    }
}
