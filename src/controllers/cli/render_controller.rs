use crate::controllers::cli::render_plan::RenderPlan;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::viewport::controller::{ViewportController, ZoomOutcome};
use crate::controllers::viewport::readout::ViewportReadout;
use crate::core::actions::render_frame::{RenderError, render_frame};
use crate::core::data::frame::Frame;
use std::io;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    frame: Option<Frame>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            frame: None,
        }
    }

    #[must_use]
    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    /// Settles the viewport described by the plan and renders it.
    pub fn generate(&mut self, plan: &RenderPlan) -> Result<ViewportReadout, RenderError> {
        let mut controller =
            ViewportController::with_viewport(plan.viewport, plan.canvas_size, plan.controller);

        for (index, zoom) in plan.zooms.iter().enumerate() {
            controller.press(zoom.start);
            controller.drag_to(zoom.end);

            if controller.release(zoom.end) == ZoomOutcome::Degenerate {
                warn!(zoom = index + 1, "zoom selection ignored");
            }
        }

        if plan.reset {
            controller.reset();
        }

        let readout = controller.readout();
        let start = Instant::now();
        let frame = render_frame(controller.viewport(), plan.canvas_size, &plan.policy)?;
        let duration = start.elapsed();

        info!(
            location = %readout.location_label(),
            scale = readout.scale,
            reset_available = readout.reset_available,
            "viewport"
        );
        info!(
            width = plan.canvas_size.width(),
            height = plan.canvas_size.height(),
            iteration_cap = frame.iteration_cap,
            ?duration,
            "rendered mandelbrot set"
        );

        self.frame = Some(frame);

        Ok(readout)
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> io::Result<()> {
        let Some(frame) = &self.frame else {
            return Err(io::Error::other("nothing rendered yet"));
        };

        let filepath = filepath.as_ref();
        self.presenter.present(frame, filepath)?;
        info!(path = %filepath.display(), "saved");

        Ok(())
    }
}
