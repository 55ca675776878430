use crate::color::Color;
use crate::measure::FontId;

/// Position in window pixels, y pointing down
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// Axis-aligned rectangle stored as its top-left (`min`) and bottom-right
/// (`max`) corners
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl Rect {
    pub const fn new(min: [f32; 2], max: [f32; 2]) -> Self {
        Self { min, max }
    }

    /// Rectangle from its top-left corner and size
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: [x, y],
            max: [x + width, y + height],
        }
    }

    pub fn x(&self) -> f32 {
        self.min[0]
    }

    pub fn y(&self) -> f32 {
        self.min[1]
    }

    pub fn width(&self) -> f32 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f32 {
        self.max[1] - self.min[1]
    }

    /// Whether `point` lies inside. Left and top edges are inclusive, right
    /// and bottom edges exclusive, so rectangles sharing an edge never both
    /// contain a point on it.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min[0]
            && point.x < self.max[0]
            && point.y >= self.min[1]
            && point.y < self.max[1]
    }

    /// Overlapping part of two rectangles. Touching edges give a zero-sized
    /// rectangle; disjoint rectangles give `None`.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let min = [self.min[0].max(other.min[0]), self.min[1].max(other.min[1])];
        let max = [self.max[0].min(other.max[0]), self.max[1].min(other.max[1])];
        (min[0] <= max[0] && min[1] <= max[1]).then_some(Rect { min, max })
    }

    /// Grow the rectangle by `amount` on every side (negative shrinks)
    pub fn expand(&self, amount: f32) -> Rect {
        Rect {
            min: [self.min[0] - amount, self.min[1] - amount],
            max: [self.max[0] + amount, self.max[1] + amount],
        }
    }

    /// Same center, both sides multiplied by `factor`
    pub fn scale_about_center(&self, factor: f32) -> Rect {
        let half_x = (factor - 1.0) * self.width() / 2.0;
        let half_y = (factor - 1.0) * self.height() / 2.0;
        Rect {
            min: [self.min[0] - half_x, self.min[1] - half_y],
            max: [self.max[0] + half_x, self.max[1] + half_y],
        }
    }
}

/// Stroke definition with width and color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// Rectangle with rounded corners, optional fill and optional stroke
#[derive(Clone, Debug, PartialEq)]
pub struct StyledRect {
    pub rect: Rect,
    /// Corner roundness in [0, 1], relative to the shorter side
    pub roundness: f32,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl StyledRect {
    /// A filled rectangle with sharp corners
    pub fn filled(rect: Rect, fill: Color) -> Self {
        Self {
            rect,
            roundness: 0.0,
            fill: Some(fill),
            stroke: None,
        }
    }

    /// An unfilled rectangle outline
    pub fn outlined(rect: Rect, stroke: Stroke) -> Self {
        Self {
            rect,
            roundness: 0.0,
            fill: None,
            stroke: Some(stroke),
        }
    }

    pub fn with_roundness(mut self, roundness: f32) -> Self {
        self.roundness = roundness;
        self
    }
}

/// A single run of text placed at an absolute position
#[derive(Clone, Debug, PartialEq)]
pub struct TextShape {
    pub text: String,
    /// Top-left corner of the text run
    pub position: Point,
    pub font: FontId,
    pub font_size: f32,
    /// Extra horizontal space inserted between glyphs
    pub spacing: f32,
    pub color: Color,
}

/// Shapes that can be rendered
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rect(StyledRect),
    Text(TextShape),
}

/// A shape together with the clip rectangle active when it was drawn
#[derive(Clone, Debug, PartialEq)]
pub struct ClippedShape {
    /// `None` when drawn without any clip region
    pub clip_rect: Option<Rect>,
    pub shape: Shape,
}
