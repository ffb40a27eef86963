use crate::core::data::canvas_point::CanvasPoint;
use crate::core::data::colour::Colour;

/// Distance in canvas pixels between neighbouring gridlines.
pub const GRID_SPACING: u32 = 50;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineSegment {
    pub start: CanvasPoint,
    pub end: CanvasPoint,
}

impl LineSegment {
    #[must_use]
    pub const fn new(start: CanvasPoint, end: CanvasPoint) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    #[must_use]
    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub colour: Colour,
    pub opacity: f64,
}

impl Stroke {
    /// `rgba(255, 255, 255, 0.3)`
    pub const GRIDLINE: Self = Self {
        colour: Colour::WHITE,
        opacity: 0.3,
    };
}

/// A single stroked path made of independent segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Gridlines {
    segments: Vec<LineSegment>,
    stroke: Stroke,
}

impl Gridlines {
    #[must_use]
    pub fn new(segments: Vec<LineSegment>, stroke: Stroke) -> Self {
        Self { segments, stroke }
    }

    #[must_use]
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    #[must_use]
    pub fn stroke(&self) -> Stroke {
        self.stroke
    }

    pub fn horizontal(&self) -> impl Iterator<Item = &LineSegment> {
        self.segments.iter().filter(|segment| segment.is_horizontal())
    }

    pub fn vertical(&self) -> impl Iterator<Item = &LineSegment> {
        self.segments.iter().filter(|segment| segment.is_vertical())
    }
}
