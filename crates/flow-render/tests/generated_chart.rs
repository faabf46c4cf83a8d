use flow_core::EngineSimulation;
use flow_render::{paint, ChartLayout, DrawCommand, RecordingCanvas};

#[test]
fn paints_a_generated_table() {
    let mut sim = EngineSimulation::generate(Some(17));
    sim.set_current_rpm(2750.0);

    let layout = ChartLayout::new(1024.0, 768.0, *sim.bounds());
    let mut canvas = RecordingCanvas::new();
    paint(&mut canvas, &layout, sim.table(), sim.state());

    let quads = canvas
        .commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::FillQuad { .. }))
        .count();
    assert_eq!(quads, sim.table().len() - 1);

    let median = canvas.commands.iter().rev().find_map(|c| match c {
        DrawCommand::Polyline { points, .. } => Some(points.len()),
        _ => None,
    });
    assert_eq!(median, Some(121));

    for label in ["0", "3000", "6000", "50", "RPM", "Fuel Flow (L/h)", "Median", "Normal"] {
        assert!(canvas.texts().any(|t| t == label), "missing label {label}");
    }
}

#[test]
fn every_point_lands_inside_the_plot() {
    let sim = EngineSimulation::generate(Some(3));
    let layout = ChartLayout::new(900.0, 700.0, *sim.bounds());
    let mut canvas = RecordingCanvas::new();
    paint(&mut canvas, &layout, sim.table(), sim.state());

    let plot = layout.plot;
    for command in &canvas.commands {
        if let DrawCommand::Polyline { points, .. } = command {
            for p in points {
                assert!(p.x >= plot.left - 1e-9 && p.x <= plot.right() + 1e-9);
                assert!(p.y >= plot.top - 1e-9 && p.y <= plot.bottom() + 1e-9);
            }
        }
    }
}
