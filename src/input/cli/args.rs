use crate::controllers::cli::render_plan::RenderPlan;
use crate::controllers::viewport::config::{ControllerConfig, DEFAULT_MIN_DRAG_PIXELS};
use crate::controllers::viewport::drag::DragRectangle;
use crate::core::data::canvas_point::CanvasPoint;
use crate::core::data::canvas_size::{CanvasSize, CanvasSizeError};
use crate::core::data::viewport::{REFERENCE_WIDTH, Viewport, ViewportError};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::iteration_policy::{
    DEFAULT_UNZOOMED_CAP, DEFAULT_ZOOMED_CAP, IterationPolicy,
};
use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_OUTPUT: &str = "output/mandelbrot.ppm";

#[derive(Debug, Error)]
pub enum ArgsError {
    #[error("invalid canvas: {0}")]
    Canvas(#[from] CanvasSizeError),
    #[error("invalid viewport: {0}")]
    Viewport(#[from] ViewportError),
    #[error("invalid iteration policy: {0}")]
    Policy(#[from] MandelbrotError),
    #[error("minimum drag must be a positive number of pixels, got {0}")]
    MinDragPixels(f64),
}

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "fractal-zoom",
    about = "Render the Mandelbrot set to a PPM image, optionally zooming by replayed drag selections"
)]
pub struct RenderArgs {
    #[arg(long, env = "FRACTAL_ZOOM_WIDTH", default_value_t = 800)]
    pub width: u32,

    #[arg(long, env = "FRACTAL_ZOOM_HEIGHT", default_value_t = 600)]
    pub height: u32,

    #[arg(
        long,
        env = "FRACTAL_ZOOM_VIEWPORT",
        value_name = "MIN_X,MIN_Y,MAX_X,MAX_Y",
        value_parser = parse_quad,
        allow_hyphen_values = true,
        default_value = "-2,-2,2,2"
    )]
    pub viewport: [f64; 4],

    /// Drag selection in canvas pixels, applied in order. Repeatable.
    #[arg(
        long = "zoom",
        env = "FRACTAL_ZOOM_ZOOMS",
        value_name = "X0,Y0,X1,Y1",
        value_parser = parse_quad,
        value_delimiter = ';',
        allow_hyphen_values = true
    )]
    pub zooms: Vec<[f64; 4]>,

    /// Return to the default view after the zooms.
    #[arg(long, env = "FRACTAL_ZOOM_RESET")]
    pub reset: bool,

    /// Draw the 50px grid over the image.
    #[arg(long, env = "FRACTAL_ZOOM_GRIDLINES")]
    pub gridlines: bool,

    #[arg(long, env = "FRACTAL_ZOOM_ZOOMED_CAP", default_value_t = DEFAULT_ZOOMED_CAP)]
    pub zoomed_cap: u32,

    #[arg(long, env = "FRACTAL_ZOOM_DEFAULT_CAP", default_value_t = DEFAULT_UNZOOMED_CAP)]
    pub default_cap: u32,

    /// Horizontal span below which the zoomed cap applies.
    #[arg(long, env = "FRACTAL_ZOOM_CAP_THRESHOLD", default_value_t = REFERENCE_WIDTH)]
    pub cap_threshold: f64,

    #[arg(long, env = "FRACTAL_ZOOM_MIN_DRAG_PIXELS", default_value_t = DEFAULT_MIN_DRAG_PIXELS)]
    pub min_drag_pixels: f64,

    #[arg(long, env = "FRACTAL_ZOOM_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

fn parse_quad(value: &str) -> Result<[f64; 4], String> {
    let parts = value
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|err| format!("`{}`: {err}", part.trim()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    <[f64; 4]>::try_from(parts)
        .map_err(|parts| format!("expected 4 comma-separated numbers, got {}", parts.len()))
}

impl RenderArgs {
    /// Validates the arguments into a render plan.
    pub fn plan(&self) -> Result<RenderPlan, ArgsError> {
        if !(self.min_drag_pixels > 0.0 && self.min_drag_pixels.is_finite()) {
            return Err(ArgsError::MinDragPixels(self.min_drag_pixels));
        }

        let [min_x, min_y, max_x, max_y] = self.viewport;

        Ok(RenderPlan {
            canvas_size: CanvasSize::new(self.width, self.height)?,
            viewport: Viewport::new(min_x, min_y, max_x, max_y)?,
            zooms: self
                .zooms
                .iter()
                .map(|&[x0, y0, x1, y1]| DragRectangle {
                    start: CanvasPoint::new(x0, y0),
                    end: CanvasPoint::new(x1, y1),
                })
                .collect(),
            reset: self.reset,
            policy: IterationPolicy::new(self.cap_threshold, self.zoomed_cap, self.default_cap)?,
            controller: ControllerConfig {
                min_drag_pixels: self.min_drag_pixels,
            },
        })
    }
}
