use crate::core::data::canvas_point::CanvasPoint;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::gridlines::{GRID_SPACING, Gridlines, LineSegment, Stroke};

/// Horizontal lines at `y = 0, 50, 100, ...` across the full width, then
/// vertical lines at `x = 0, 50, 100, ...` down the full height.
#[must_use]
pub fn generate_gridlines(canvas_size: CanvasSize) -> Gridlines {
    let width = f64::from(canvas_size.width());
    let height = f64::from(canvas_size.height());
    let spacing = GRID_SPACING as usize;

    let horizontal = (0..canvas_size.height()).step_by(spacing).map(|y| {
        let y = f64::from(y);
        LineSegment::new(CanvasPoint::new(0.0, y), CanvasPoint::new(width, y))
    });

    let vertical = (0..canvas_size.width()).step_by(spacing).map(|x| {
        let x = f64::from(x);
        LineSegment::new(CanvasPoint::new(x, 0.0), CanvasPoint::new(x, height))
    });

    Gridlines::new(horizontal.chain(vertical).collect(), Stroke::GRIDLINE)
}
