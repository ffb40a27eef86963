use crate::controllers::viewport::config::ControllerConfig;
use crate::controllers::viewport::drag::DragRectangle;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::iteration_policy::IterationPolicy;

/// A headless render: start from `viewport`, replay `zooms` as drags over
/// the canvas, optionally reset, then render once.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub canvas_size: CanvasSize,
    pub viewport: Viewport,
    pub zooms: Vec<DragRectangle>,
    pub reset: bool,
    pub policy: IterationPolicy,
    pub controller: ControllerConfig,
}
