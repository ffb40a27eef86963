use crate::core::data::canvas_point::CanvasPoint;

/// Selection rectangle between the press point and the current pointer, in
/// canvas pixels. `start` stays where the drag began; `end` follows the
/// pointer, so the rectangle may be "inverted".
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DragRectangle {
    pub start: CanvasPoint,
    pub end: CanvasPoint,
}

impl DragRectangle {
    #[must_use]
    pub const fn anchored_at(point: CanvasPoint) -> Self {
        Self {
            start: point,
            end: point,
        }
    }

    /// Corner closest to the canvas origin, for drawing the overlay.
    #[must_use]
    pub fn top_left(&self) -> CanvasPoint {
        CanvasPoint::new(self.start.x.min(self.end.x), self.start.y.min(self.end.y))
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        (self.end.x - self.start.x).abs()
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        (self.end.y - self.start.y).abs()
    }

    #[must_use]
    pub fn is_degenerate(&self, min_drag_pixels: f64) -> bool {
        self.width() < min_drag_pixels || self.height() < min_drag_pixels
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragRectangle),
}

impl DragState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }
}
