use fractal_zoom::{
    CanvasPoint, CanvasSize, Colour, ColourMap, Complex, ControllerConfig, DragState,
    MandelbrotLinearGradient, Viewport, ViewportController, ZoomOutcome, escape_time,
    fit_selection_to_aspect,
};

const EPSILON: f64 = 1e-9;

fn controller_800x600() -> ViewportController {
    ViewportController::new(CanvasSize::new(800, 600).unwrap(), ControllerConfig::default())
}

fn zoom(controller: &mut ViewportController, from: (f64, f64), to: (f64, f64)) -> ZoomOutcome {
    controller.press(CanvasPoint::new(from.0, from.1));
    controller.drag_to(CanvasPoint::new(to.0, to.1));
    controller.release(CanvasPoint::new(to.0, to.1))
}

#[test]
fn cardioid_points_never_escape() {
    for cap in [1, 7, 100, 1000] {
        assert_eq!(escape_time(Complex::ZERO, cap), cap);
    }
}

#[test]
fn far_point_escapes_on_step_zero() {
    assert_eq!(escape_time(Complex::new(2.0, 2.0), 100), 0);
}

#[test]
fn cap_and_zero_both_map_to_black() {
    for cap in [1, 100, 1000] {
        let map = MandelbrotLinearGradient::new(cap);

        assert_eq!(map.map(cap).unwrap(), Colour::BLACK);
        assert_eq!(map.map(0).unwrap(), Colour::BLACK);
    }
}

#[test]
fn ten_by_ten_selection_on_800x600_grows_x() {
    let viewport =
        fit_selection_to_aspect(Complex::new(0.0, 0.0), Complex::new(10.0, 10.0), 800.0 / 600.0)
            .unwrap();

    assert!((viewport.width() - 40.0 / 3.0).abs() < EPSILON);
    assert_eq!(viewport.height(), 10.0);
    assert!((viewport.aspect_ratio() - 800.0 / 600.0).abs() < EPSILON);
}

#[test]
fn reset_yields_default_view_from_any_state() {
    let mut controller = controller_800x600();

    assert_eq!(controller.reset(), Viewport::DEFAULT);
    assert!(!controller.reset_available());

    zoom(&mut controller, (100.0, 100.0), (260.0, 220.0));
    zoom(&mut controller, (10.0, 10.0), (400.0, 300.0));
    assert!(controller.reset_available());
    controller.press(CanvasPoint::new(3.0, 3.0));
    controller.drag_to(CanvasPoint::new(30.0, 30.0));

    assert_eq!(controller.reset(), Viewport::DEFAULT);
    assert_eq!(controller.viewport(), Viewport::DEFAULT);
    assert_eq!(controller.state(), DragState::Idle);
    assert!(!controller.reset_available());
}

#[test]
fn degenerate_drag_leaves_viewport_and_returns_to_idle() {
    let mut controller = controller_800x600();
    zoom(&mut controller, (100.0, 100.0), (260.0, 220.0));
    let before = controller.viewport();

    let outcome = zoom(&mut controller, (333.0, 222.0), (333.0, 222.0));

    assert_eq!(outcome, ZoomOutcome::Degenerate);
    assert_eq!(controller.viewport(), before);
    assert_eq!(controller.state(), DragState::Idle);
}

#[test]
fn every_zoom_matches_canvas_aspect() {
    let mut controller = controller_800x600();
    let drags = [
        ((100.0, 100.0), (260.0, 220.0)),
        ((700.0, 50.0), (20.0, 590.0)),
        ((400.0, 300.0), (410.0, 500.0)),
        ((0.0, 0.0), (800.0, 10.0)),
    ];

    for (from, to) in drags {
        let ZoomOutcome::Zoomed(viewport) = zoom(&mut controller, from, to) else {
            panic!("drag {from:?} -> {to:?} should zoom");
        };

        assert!(
            (viewport.aspect_ratio() - 4.0 / 3.0).abs() < 1e-6,
            "aspect {} after {from:?} -> {to:?}",
            viewport.aspect_ratio()
        );
    }
}

#[test]
fn zoom_contains_the_selection() {
    let mut controller = controller_800x600();
    let from = CanvasPoint::new(120.0, 80.0);
    let to = CanvasPoint::new(300.0, 500.0);
    let start = controller.plane_point(from);
    let end = controller.plane_point(to);

    controller.press(from);
    let ZoomOutcome::Zoomed(viewport) = controller.release(to) else {
        panic!("expected a zoom");
    };

    assert!(viewport.contains_point(start));
    assert!(viewport.contains_point(end));
}

#[test]
fn readout_tracks_committed_zooms() {
    let mut controller = ViewportController::new(
        CanvasSize::new(400, 400).unwrap(),
        ControllerConfig::default(),
    );

    zoom(&mut controller, (200.0, 0.0), (400.0, 200.0));
    let readout = controller.readout();

    assert_eq!(readout.location_label(), "(1.00000000, 1.00000000)");
    assert_eq!(readout.scale, 0.5);
    assert_eq!(readout.frame_width, 2.0);
    assert_eq!(readout.frame_height, 2.0);
}
