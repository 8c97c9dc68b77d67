use volley_trajectory::core::ballistics::{PhysicalInputs, SAMPLE_STEPS, solve};
use volley_trajectory::core::config::ViewConfig;
use volley_trajectory::core::controller::TrajectoryController;
use volley_trajectory::core::error::DomainError;
use volley_trajectory::core::presenter::{DrawOp, RecordingCanvas};
use volley_trajectory::core::raster::render_to_rgb;
use volley_trajectory::core::window::to_display;

#[test]
fn reference_attack_renders_markers_at_mapped_positions() {
    let config = ViewConfig::default();
    let controller = TrajectoryController::new(config.initial_inputs);
    let solution = controller.solution().expect("reference inputs solve");

    let mut canvas = RecordingCanvas::new();
    let Ok(markers) = controller.render(&mut canvas, config.surface(), &config.path_style());
    let markers = markers.expect("valid solution has markers");

    let surface = config.surface();
    let apex = to_display(markers.apex, surface.height, surface.scale);
    let landing = to_display(markers.landing, surface.height, surface.scale);
    let circles: Vec<_> = canvas.circles().collect();
    assert_eq!(
        circles,
        vec![(apex, config.palette.apex), (landing, config.palette.landing)]
    );

    match &canvas.ops[1] {
        DrawOp::Polyline { points, .. } => assert_eq!(points.len(), solution.samples.len()),
        other => panic!("expected polyline, got {other:?}"),
    }
}

#[test]
fn out_of_domain_inputs_are_reported_not_drawn() {
    let config = ViewConfig::default();
    let controller = TrajectoryController::new(PhysicalInputs::new(1.0, 1.0, 100.0));

    assert!(matches!(
        controller.error(),
        Some(DomainError::NonPositiveDenominator(_))
    ));

    let (buffer, markers) =
        render_to_rgb(&[], &config, config.scale).expect("empty render succeeds");
    assert_eq!(markers, None);
    let bg = config.palette.background;
    assert!(buffer.chunks(3).all(|px| px == [bg.r, bg.g, bg.b]));
}

#[test]
fn raster_render_of_reference_attack_paints_the_path() {
    let config = ViewConfig::default();
    let solution = solve(config.initial_inputs).expect("reference inputs solve");
    assert_eq!(solution.samples.len(), SAMPLE_STEPS + 1);

    let (buffer, markers) =
        render_to_rgb(&solution.samples, &config, config.scale).expect("render succeeds");
    assert_eq!(markers.map(|m| m.apex), solution.apex());

    let bg = config.palette.background;
    let painted = buffer
        .chunks(3)
        .filter(|px| *px != [bg.r, bg.g, bg.b])
        .count();
    assert!(painted > 100, "only {painted} pixels painted");
}
