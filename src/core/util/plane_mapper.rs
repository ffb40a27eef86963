use crate::core::data::canvas_point::CanvasPoint;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Linear map between canvas pixels and the complex plane for one
/// viewport/canvas pairing. Pixel `(0, 0)` lands on the viewport's minimum
/// corner; `(width, height)` would land on the maximum corner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneMapper {
    viewport: Viewport,
    canvas_size: CanvasSize,
}

impl PlaneMapper {
    #[must_use]
    pub fn new(viewport: Viewport, canvas_size: CanvasSize) -> Self {
        Self {
            viewport,
            canvas_size,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn canvas_size(&self) -> CanvasSize {
        self.canvas_size
    }

    #[must_use]
    pub fn to_complex(&self, point: CanvasPoint) -> Complex {
        let width = f64::from(self.canvas_size.width());
        let height = f64::from(self.canvas_size.height());

        // span * p / size, evaluated left to right
        Complex {
            real: self.viewport.min_x() + self.viewport.width() * point.x / width,
            imag: self.viewport.min_y() + self.viewport.height() * point.y / height,
        }
    }

    #[must_use]
    pub fn pixel_to_complex(&self, pixel: Point) -> Complex {
        self.to_complex(pixel.into())
    }

    #[must_use]
    pub fn to_pixel(&self, point: Complex) -> CanvasPoint {
        let width = f64::from(self.canvas_size.width());
        let height = f64::from(self.canvas_size.height());

        CanvasPoint {
            x: (point.real - self.viewport.min_x()) * width / self.viewport.width(),
            y: (point.imag - self.viewport.min_y()) * height / self.viewport.height(),
        }
    }
}
