use crate::controllers::interactive::InteractiveController;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::controllers::viewport::config::ControllerConfig;
use crate::controllers::viewport::controller::{ViewportController, ZoomOutcome};
use crate::controllers::viewport::drag::DragRectangle;
use crate::controllers::viewport::readout::ViewportReadout;
use crate::core::data::canvas_point::CanvasPoint;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::fractals::mandelbrot::iteration_policy::IterationPolicy;
use crate::core::util::screen_to_canvas::{ScreenRect, screen_to_canvas};
use std::sync::Arc;

/// One interactive viewing session: pointer gestures drive the viewport and
/// every viewport change is queued on the background renderer.
pub struct Explorer {
    viewport: ViewportController,
    renderer: InteractiveController,
    policy: IterationPolicy,
}

impl Explorer {
    /// Starts the session and queues the first render of the default view.
    pub fn new(
        canvas_size: CanvasSize,
        config: ControllerConfig,
        policy: IterationPolicy,
        presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
    ) -> Self {
        let explorer = Self {
            viewport: ViewportController::new(canvas_size, config),
            renderer: InteractiveController::new(presenter_port),
            policy,
        };

        explorer.submit();

        explorer
    }

    #[must_use]
    pub fn viewport_controller(&self) -> &ViewportController {
        &self.viewport
    }

    /// Converts a pointer position in client coordinates to canvas pixels.
    #[must_use]
    pub fn pointer(&self, client_x: f64, client_y: f64, screen_rect: ScreenRect) -> CanvasPoint {
        screen_to_canvas(client_x, client_y, screen_rect, self.viewport.canvas_size())
    }

    pub fn press(&mut self, point: CanvasPoint) {
        self.viewport.press(point);
    }

    pub fn drag_to(&mut self, point: CanvasPoint) -> Option<DragRectangle> {
        self.viewport.drag_to(point)
    }

    /// Finishes a drag. Returns the outcome and, on a zoom, the generation of
    /// the render it queued.
    pub fn release(&mut self, point: CanvasPoint) -> (ZoomOutcome, Option<u64>) {
        let outcome = self.viewport.release(point);

        match outcome {
            ZoomOutcome::Zoomed(_) => (outcome, Some(self.submit())),
            ZoomOutcome::Degenerate | ZoomOutcome::NotDragging => (outcome, None),
        }
    }

    pub fn reset(&mut self) -> u64 {
        self.viewport.reset();
        self.submit()
    }

    pub fn resize(&mut self, canvas_size: CanvasSize) -> u64 {
        self.viewport.resize(canvas_size);
        self.submit()
    }

    #[must_use]
    pub fn readout(&self) -> ViewportReadout {
        self.viewport.readout()
    }

    #[must_use]
    pub fn reset_available(&self) -> bool {
        self.viewport.reset_available()
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.renderer.last_completed_generation()
    }

    pub fn shutdown(&mut self) {
        self.renderer.shutdown();
    }

    fn submit(&self) -> u64 {
        self.renderer.submit_request(Arc::new(RenderRequest {
            viewport: self.viewport.viewport(),
            canvas_size: self.viewport.canvas_size(),
            policy: self.policy,
        }))
    }
}
