use crate::core::data::canvas_point::CanvasPoint;
use crate::core::data::canvas_size::CanvasSize;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ScreenRectError {
    #[error("screen rect size must be positive and finite: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
    #[error("screen rect origin must be finite: ({left}, {top})")]
    NonFiniteOrigin { left: f64, top: f64 },
}

/// Where the canvas sits on screen, in client coordinates. The displayed size
/// may differ from the canvas backing size when the surface is scaled.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenRect {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl ScreenRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Result<Self, ScreenRectError> {
        if !left.is_finite() || !top.is_finite() {
            return Err(ScreenRectError::NonFiniteOrigin { left, top });
        }

        // negated so NaN is rejected too
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(ScreenRectError::InvalidSize { width, height });
        }

        Ok(Self {
            left,
            top,
            width,
            height,
        })
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.top
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}

/// Converts a client-space pointer position into canvas-pixel space.
/// Positions outside the rect extrapolate linearly; callers decide whether
/// to clamp.
#[must_use]
pub fn screen_to_canvas(
    client_x: f64,
    client_y: f64,
    screen_rect: ScreenRect,
    canvas_size: CanvasSize,
) -> CanvasPoint {
    CanvasPoint {
        x: (client_x - screen_rect.left) / screen_rect.width * f64::from(canvas_size.width()),
        y: (client_y - screen_rect.top) / screen_rect.height * f64::from(canvas_size.height()),
    }
}
