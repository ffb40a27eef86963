mod controllers;
mod core;
mod input;
mod presenters;

pub use controllers::cli::render_controller::CliRenderController;
pub use controllers::cli::render_plan::RenderPlan;
pub use controllers::explorer::Explorer;
pub use controllers::interactive::InteractiveController;
pub use controllers::interactive::data::frame_data::FrameData;
pub use controllers::interactive::data::render_request::RenderRequest;
pub use controllers::interactive::errors::render::RenderFailure;
pub use controllers::interactive::events::render::RenderEvent;
pub use controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::viewport::config::{ControllerConfig, DEFAULT_MIN_DRAG_PIXELS};
pub use controllers::viewport::controller::{ViewportController, ZoomOutcome};
pub use controllers::viewport::drag::{DragRectangle, DragState};
pub use controllers::viewport::readout::ViewportReadout;

pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::generate_gridlines::generate_gridlines;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::actions::generate_pixel_buffer::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render_frame::{RenderError, render_frame, render_frame_cancelable};
pub use crate::core::data::canvas_point::CanvasPoint;
pub use crate::core::data::canvas_size::{CanvasSize, CanvasSizeError};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame::Frame;
pub use crate::core::data::gridlines::{GRID_SPACING, Gridlines, LineSegment, Stroke};
pub use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::{REFERENCE_WIDTH, Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, escape_time};
pub use crate::core::fractals::mandelbrot::colour_map::MandelbrotLinearGradient;
pub use crate::core::fractals::mandelbrot::errors::{MandelbrotColourMapError, MandelbrotError};
pub use crate::core::fractals::mandelbrot::iteration_policy::IterationPolicy;
pub use crate::core::util::fit_selection::fit_selection_to_aspect;
pub use crate::core::util::plane_mapper::PlaneMapper;
pub use crate::core::util::screen_to_canvas::{ScreenRect, ScreenRectError, screen_to_canvas};

pub use input::cli::args::{ArgsError, RenderArgs};
pub use input::cli::commands::render::{RenderCommand, RenderCommandError};
pub use presenters::file::ppm::PpmFilePresenter;
