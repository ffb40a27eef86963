use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_gridlines::generate_gridlines;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::frame::Frame;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotLinearGradient;
use crate::core::fractals::mandelbrot::errors::{MandelbrotColourMapError, MandelbrotError};
use crate::core::fractals::mandelbrot::iteration_policy::IterationPolicy;
use crate::core::util::plane_mapper::PlaneMapper;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error(transparent)]
    Iterations(#[from] MandelbrotError),
    #[error(transparent)]
    ColourMap(#[from] MandelbrotColourMapError),
    #[error("pixel buffer allocation failed: {0}")]
    Allocation(#[from] PixelBufferError),
}

impl From<GeneratePixelBufferError<MandelbrotColourMapError>> for RenderError {
    fn from(err: GeneratePixelBufferError<MandelbrotColourMapError>) -> Self {
        match err {
            GeneratePixelBufferError::Cancelled(cancelled) => Self::Cancelled(cancelled),
            GeneratePixelBufferError::ColourMap(err) => Self::ColourMap(err),
            GeneratePixelBufferError::PixelBuffer(err) => Self::Allocation(err),
        }
    }
}

/// Renders one full frame of the Mandelbrot set for `viewport`.
pub fn render_frame(
    viewport: Viewport,
    canvas_size: CanvasSize,
    policy: &IterationPolicy,
) -> Result<Frame, RenderError> {
    render_frame_cancelable(viewport, canvas_size, policy, &NeverCancel)
}

/// Like [`render_frame`], but gives up with [`RenderError::Cancelled`]
/// as soon as the token fires.
pub fn render_frame_cancelable<C: CancelToken + ?Sized>(
    viewport: Viewport,
    canvas_size: CanvasSize,
    policy: &IterationPolicy,
    cancel: &C,
) -> Result<Frame, RenderError> {
    let iteration_cap = policy.cap_for(&viewport);

    debug!(
        width = canvas_size.width(),
        height = canvas_size.height(),
        iteration_cap,
        min_x = viewport.min_x(),
        min_y = viewport.min_y(),
        max_x = viewport.max_x(),
        max_y = viewport.max_y(),
        "rendering frame"
    );

    let algorithm = MandelbrotAlgorithm::new(PlaneMapper::new(viewport, canvas_size), iteration_cap)?;
    let colour_map = MandelbrotLinearGradient::new(iteration_cap);

    let pixel_buffer = generate_pixel_buffer(canvas_size, &algorithm, &colour_map, cancel)?;

    Ok(Frame {
        viewport,
        canvas_size,
        iteration_cap,
        pixel_buffer,
        gridlines: generate_gridlines(canvas_size),
    })
}
