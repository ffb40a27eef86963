use crate::core::data::complex::Complex;
use thiserror::Error;

/// Horizontal span of the default view. Scale is measured against it.
pub const REFERENCE_WIDTH: f64 = 4.0;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport bounds must be finite: ({min_x}, {min_y}) to ({max_x}, {max_y})")]
    NonFinite {
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    },
    #[error("viewport span must be positive: {width}x{height}")]
    InvalidSpan { width: f64, height: f64 },
}

/// A rectangle of the complex plane. `min` maps to the top-left pixel of the
/// canvas and `max` to the bottom-right, so imaginary values grow downwards
/// in pixel space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    min: Complex,
    max: Complex,
}

impl Viewport {
    pub const DEFAULT: Self = Self {
        min: Complex::new(-2.0, -2.0),
        max: Complex::new(2.0, 2.0),
    };

    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self, ViewportError> {
        Self::from_corners(Complex::new(min_x, min_y), Complex::new(max_x, max_y))
    }

    pub fn from_corners(min: Complex, max: Complex) -> Result<Self, ViewportError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ViewportError::NonFinite {
                min_x: min.real,
                min_y: min.imag,
                max_x: max.real,
                max_y: max.imag,
            });
        }

        let width = max.real - min.real;
        let height = max.imag - min.imag;

        if width <= 0.0 || height <= 0.0 {
            return Err(ViewportError::InvalidSpan { width, height });
        }

        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> Complex {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Complex {
        self.max
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.min.real
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.min.imag
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.max.real
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.max.imag
    }

    /// Horizontal span, `max_x - min_x`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.real - self.min.real
    }

    /// Vertical span, `max_y - min_y`.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.imag - self.min.imag
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.width() / self.height()
    }

    /// Zoom level relative to the default view. 1.0 at the default view,
    /// smaller when zoomed in.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.width() / REFERENCE_WIDTH
    }

    /// Centre in plane coordinates (not display coordinates).
    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new(
            self.min.real + self.width() / 2.0,
            self.min.imag + self.height() / 2.0,
        )
    }

    /// True once the view is zoomed in past the default span.
    #[must_use]
    pub fn is_zoomed_in(&self) -> bool {
        self.scale() < 1.0
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.min.real <= point.real
            && self.min.imag <= point.imag
            && self.max.real >= point.real
            && self.max.imag >= point.imag
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::DEFAULT
    }
}
