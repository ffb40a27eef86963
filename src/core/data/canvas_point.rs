use crate::core::data::point::Point;

/// A position in canvas-pixel space. Pointer positions land between pixel
/// centres, so both axes are fractional.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

impl CanvasPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Point> for CanvasPoint {
    fn from(point: Point) -> Self {
        Self {
            x: f64::from(point.x),
            y: f64::from(point.y),
        }
    }
}
