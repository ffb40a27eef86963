use crate::controllers::viewport::config::ControllerConfig;
use crate::controllers::viewport::drag::{DragRectangle, DragState};
use crate::controllers::viewport::readout::ViewportReadout;
use crate::core::data::canvas_point::CanvasPoint;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use crate::core::util::fit_selection::fit_selection_to_aspect;
use crate::core::util::plane_mapper::PlaneMapper;
use std::mem;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomOutcome {
    /// The selection was committed; the new viewport needs a render.
    Zoomed(Viewport),
    /// The selection was too small to zoom into. The viewport is unchanged.
    Degenerate,
    /// Release arrived without a preceding press.
    NotDragging,
}

/// Owns the current viewport and turns drag gestures over the canvas into
/// aspect-preserving zooms.
#[derive(Debug, Clone)]
pub struct ViewportController {
    viewport: Viewport,
    canvas_size: CanvasSize,
    state: DragState,
    config: ControllerConfig,
}

impl ViewportController {
    #[must_use]
    pub fn new(canvas_size: CanvasSize, config: ControllerConfig) -> Self {
        Self::with_viewport(Viewport::DEFAULT, canvas_size, config)
    }

    #[must_use]
    pub fn with_viewport(
        viewport: Viewport,
        canvas_size: CanvasSize,
        config: ControllerConfig,
    ) -> Self {
        Self {
            viewport,
            canvas_size,
            state: DragState::Idle,
            config,
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
    pub fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub fn config(&self) -> ControllerConfig {
        self.config
    }

    #[must_use]
    pub fn mapper(&self) -> PlaneMapper {
        PlaneMapper::new(self.viewport, self.canvas_size)
    }

    /// Plane coordinates under a canvas point, for hover readouts.
    #[must_use]
    pub fn plane_point(&self, point: CanvasPoint) -> Complex {
        self.mapper().to_complex(point)
    }

    pub fn press(&mut self, point: CanvasPoint) {
        self.state = DragState::Dragging(DragRectangle::anchored_at(point));
    }

    /// Moves the free corner of the selection. Returns the live rectangle,
    /// or `None` when no drag is in progress.
    pub fn drag_to(&mut self, point: CanvasPoint) -> Option<DragRectangle> {
        match &mut self.state {
            DragState::Dragging(rect) => {
                rect.end = point;
                Some(*rect)
            }
            DragState::Idle => None,
        }
    }

    pub fn release(&mut self, point: CanvasPoint) -> ZoomOutcome {
        let DragState::Dragging(mut rect) = mem::take(&mut self.state) else {
            return ZoomOutcome::NotDragging;
        };

        rect.end = point;

        if rect.is_degenerate(self.config.min_drag_pixels) {
            debug!(
                width = rect.width(),
                height = rect.height(),
                "selection too small, ignoring"
            );
            return ZoomOutcome::Degenerate;
        }

        let mapper = self.mapper();
        let start = mapper.to_complex(rect.start);
        let end = mapper.to_complex(rect.end);

        match fit_selection_to_aspect(start, end, self.canvas_size.aspect_ratio()) {
            Ok(viewport) => {
                self.viewport = viewport;
                info!(
                    min_x = viewport.min_x(),
                    min_y = viewport.min_y(),
                    max_x = viewport.max_x(),
                    max_y = viewport.max_y(),
                    scale = viewport.scale(),
                    "zoomed"
                );
                ZoomOutcome::Zoomed(viewport)
            }
            Err(err) => {
                warn!(%err, "selection has no area in the plane, zoom rejected");
                ZoomOutcome::Degenerate
            }
        }
    }

    pub fn reset(&mut self) -> Viewport {
        self.state = DragState::Idle;
        self.viewport = Viewport::DEFAULT;
        info!("viewport reset");

        self.viewport
    }

    /// Swaps in a new canvas size and returns the viewport to re-render.
    /// A drag in progress keeps its canvas-space corners.
    pub fn resize(&mut self, canvas_size: CanvasSize) -> Viewport {
        self.canvas_size = canvas_size;
        debug!(
            width = canvas_size.width(),
            height = canvas_size.height(),
            "canvas resized"
        );

        self.viewport
    }

    #[must_use]
    pub fn reset_available(&self) -> bool {
        self.viewport.is_zoomed_in()
    }

    #[must_use]
    pub fn readout(&self) -> ViewportReadout {
        ViewportReadout::from_viewport(&self.viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn controller(width: u32, height: u32) -> ViewportController {
        ViewportController::new(
            CanvasSize::new(width, height).unwrap(),
            ControllerConfig::default(),
        )
    }

    fn drag(controller: &mut ViewportController, from: (f64, f64), to: (f64, f64)) -> ZoomOutcome {
        controller.press(CanvasPoint::new(from.0, from.1));
        controller.drag_to(CanvasPoint::new(to.0, to.1));
        controller.release(CanvasPoint::new(to.0, to.1))
    }

    #[test]
    fn starts_idle_at_default_view() {
        let controller = controller(800, 600);

        assert_eq!(controller.viewport(), Viewport::DEFAULT);
        assert_eq!(controller.state(), DragState::Idle);
        assert!(!controller.reset_available());
    }

    #[test]
    fn press_then_drag_tracks_live_rectangle() {
        let mut controller = controller(800, 600);

        controller.press(CanvasPoint::new(10.0, 20.0));
        let live = controller.drag_to(CanvasPoint::new(50.0, 60.0));

        assert_eq!(
            live,
            Some(DragRectangle {
                start: CanvasPoint::new(10.0, 20.0),
                end: CanvasPoint::new(50.0, 60.0),
            })
        );
        assert!(controller.state().is_dragging());
    }

    #[test]
    fn drag_while_idle_is_ignored() {
        let mut controller = controller(800, 600);

        assert_eq!(controller.drag_to(CanvasPoint::new(5.0, 5.0)), None);
        assert_eq!(controller.state(), DragState::Idle);
    }

    #[test]
    fn second_press_reanchors_drag() {
        let mut controller = controller(800, 600);

        controller.press(CanvasPoint::new(10.0, 10.0));
        controller.drag_to(CanvasPoint::new(200.0, 200.0));
        controller.press(CanvasPoint::new(30.0, 40.0));

        assert_eq!(
            controller.state(),
            DragState::Dragging(DragRectangle::anchored_at(CanvasPoint::new(30.0, 40.0)))
        );
    }

    #[test]
    fn release_without_press_is_not_dragging() {
        let mut controller = controller(800, 600);

        assert_eq!(
            controller.release(CanvasPoint::new(1.0, 1.0)),
            ZoomOutcome::NotDragging
        );
    }

    #[test]
    fn square_drag_on_square_canvas_zooms_exactly() {
        let mut controller = controller(400, 400);

        let outcome = drag(&mut controller, (100.0, 100.0), (300.0, 300.0));

        let expected = Viewport::new(-1.0, -1.0, 1.0, 1.0).unwrap();
        assert_eq!(outcome, ZoomOutcome::Zoomed(expected));
        assert_eq!(controller.viewport(), expected);
        assert_eq!(controller.state(), DragState::Idle);
        assert!(controller.reset_available());
    }

    #[test]
    fn zoom_matches_canvas_aspect_ratio() {
        let mut controller = controller(800, 600);

        let ZoomOutcome::Zoomed(viewport) = drag(&mut controller, (100.0, 100.0), (300.0, 300.0))
        else {
            panic!("expected a zoom");
        };

        assert!((viewport.aspect_ratio() - 800.0 / 600.0).abs() < EPSILON);
    }

    #[test]
    fn click_without_movement_is_degenerate() {
        let mut controller = controller(800, 600);

        let outcome = drag(&mut controller, (120.0, 80.0), (120.0, 80.0));

        assert_eq!(outcome, ZoomOutcome::Degenerate);
        assert_eq!(controller.viewport(), Viewport::DEFAULT);
        assert_eq!(controller.state(), DragState::Idle);
    }

    #[test]
    fn horizontal_swipe_is_degenerate() {
        let mut controller = controller(800, 600);

        assert_eq!(
            drag(&mut controller, (100.0, 300.0), (700.0, 300.0)),
            ZoomOutcome::Degenerate
        );
        assert_eq!(controller.viewport(), Viewport::DEFAULT);
    }

    #[test]
    fn straight_drag_is_degenerate_without_a_pixel_threshold() {
        let mut controller = ViewportController::new(
            CanvasSize::new(800, 600).unwrap(),
            ControllerConfig {
                min_drag_pixels: 0.0,
            },
        );

        assert_eq!(
            drag(&mut controller, (100.0, 300.0), (700.0, 300.0)),
            ZoomOutcome::Degenerate
        );
        assert_eq!(
            drag(&mut controller, (400.0, 100.0), (400.0, 500.0)),
            ZoomOutcome::Degenerate
        );
        assert_eq!(controller.viewport(), Viewport::DEFAULT);
        assert_eq!(controller.state(), DragState::Idle);
    }

    #[test]
    fn reverse_drag_zooms_to_same_region() {
        let mut forward = controller(800, 600);
        let mut backward = controller(800, 600);

        let a = drag(&mut forward, (100.0, 100.0), (300.0, 250.0));
        let b = drag(&mut backward, (300.0, 250.0), (100.0, 100.0));

        assert_eq!(a, b);
    }

    #[test]
    fn reset_returns_to_default_view() {
        let mut controller = controller(800, 600);
        drag(&mut controller, (100.0, 100.0), (300.0, 300.0));
        controller.press(CanvasPoint::new(5.0, 5.0));

        assert_eq!(controller.reset(), Viewport::DEFAULT);
        assert_eq!(controller.state(), DragState::Idle);
        assert!(!controller.reset_available());
    }

    #[test]
    fn resize_keeps_viewport_and_changes_fit_ratio() {
        let mut controller = controller(800, 600);
        let before = controller.viewport();

        assert_eq!(controller.resize(CanvasSize::new(400, 400).unwrap()), before);

        let ZoomOutcome::Zoomed(viewport) = drag(&mut controller, (0.0, 0.0), (100.0, 50.0))
        else {
            panic!("expected a zoom");
        };
        assert!((viewport.aspect_ratio() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn plane_point_follows_current_view() {
        let controller = controller(400, 400);

        assert_eq!(
            controller.plane_point(CanvasPoint::new(200.0, 100.0)),
            Complex::new(0.0, -1.0)
        );
    }

    #[test]
    fn readout_reflects_viewport() {
        let mut controller = controller(400, 400);
        drag(&mut controller, (0.0, 0.0), (200.0, 200.0));

        let readout = controller.readout();

        assert_eq!(readout.center_x, -1.0);
        assert_eq!(readout.center_y, 1.0);
        assert_eq!(readout.scale, 0.5);
        assert!(readout.reset_available);
    }
}
