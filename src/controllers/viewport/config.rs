pub const DEFAULT_MIN_DRAG_PIXELS: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig {
    /// A release whose drag moved less than this on either axis, in canvas
    /// pixels, is treated as a click and does not zoom.
    pub min_drag_pixels: f64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            min_drag_pixels: DEFAULT_MIN_DRAG_PIXELS,
        }
    }
}
