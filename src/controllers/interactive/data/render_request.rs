use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::iteration_policy::IterationPolicy;

/// Everything one render job needs. Submitted behind an `Arc` so the worker
/// reads a stable snapshot while the caller keeps interacting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub viewport: Viewport,
    pub canvas_size: CanvasSize,
    pub policy: IterationPolicy,
}
