//! Chart painting: grid, axes, min/max band, median curve, operating point
//! and legend, issued through a [`ChartCanvas`].

use crate::canvas::{ChartCanvas, LineStyle, Point, Rect, TextStyle};
use crate::layout::ChartLayout;
use crate::palette;
use flow_core::tags::{CURRENT_FUEL_FLOW, CURRENT_RPM, FUEL_FLOW_AXIS, MEDIAN_FUEL_FLOW};
use flow_core::{EngineState, SampleTable};
use log::trace;

const RPM_GRID_STEP: f64 = 1000.0;
const FLOW_GRID_STEP: f64 = 10.0;
const MARKER_RADIUS: f64 = 8.0;
const LABEL_WIDTH: f64 = 100.0;

/// Paint the full chart. An empty table paints nothing.
pub fn paint(
    canvas: &mut dyn ChartCanvas,
    layout: &ChartLayout,
    table: &SampleTable,
    state: &EngineState,
) {
    if table.is_empty() || !layout.plot.is_drawable() {
        return;
    }

    draw_grid(canvas, layout);
    draw_axes(canvas, layout);
    draw_data(canvas, layout, table);
    draw_current_point(canvas, layout, state);
    draw_legend(canvas, layout);
    trace!("Painted {} samples into {:?}", table.len(), layout.plot);
}

fn ticks(min: f64, max: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = ((max - min) / step).floor() as usize;
    (0..=count).map(move |i| min + i as f64 * step)
}

fn draw_grid(canvas: &mut dyn ChartCanvas, layout: &ChartLayout) {
    let style = LineStyle::dotted(palette::GRID, 1.0);
    let plot = &layout.plot;
    let bounds = &layout.bounds;

    for rpm in ticks(bounds.min_rpm, bounds.max_rpm, RPM_GRID_STEP) {
        let x = layout.map_to_chart(rpm, bounds.min_fuel_flow).x;
        canvas.line(Point::new(x, plot.top), Point::new(x, plot.bottom()), style);
    }
    for flow in ticks(bounds.min_fuel_flow, bounds.max_fuel_flow, FLOW_GRID_STEP) {
        let y = layout.map_to_chart(bounds.min_rpm, flow).y;
        canvas.line(Point::new(plot.left, y), Point::new(plot.right(), y), style);
    }
}

fn draw_axes(canvas: &mut dyn ChartCanvas, layout: &ChartLayout) {
    let plot = &layout.plot;
    let bounds = &layout.bounds;
    let axis = LineStyle::solid(palette::AXIS, 2.0);
    let label = TextStyle::regular(palette::TEXT, 10.0);

    canvas.line(plot.bottom_left(), plot.bottom_right(), axis);
    canvas.line(plot.bottom_left(), plot.top_left(), axis);

    for rpm in ticks(bounds.min_rpm, bounds.max_rpm, RPM_GRID_STEP) {
        let x = layout.map_to_chart(rpm, bounds.min_fuel_flow).x;
        canvas.text(Point::new(x - 15.0, plot.bottom() + 20.0), &format!("{rpm:.0}"), label);
    }
    for flow in ticks(bounds.min_fuel_flow, bounds.max_fuel_flow, FLOW_GRID_STEP) {
        let y = layout.map_to_chart(bounds.min_rpm, flow).y;
        canvas.text(Point::new(plot.left - 40.0, y + 5.0), &format!("{flow:.0}"), label);
    }

    canvas.text(
        Point::new(plot.left - 50.0, plot.top - 15.0),
        &format!("{} ({})", FUEL_FLOW_AXIS.label, FUEL_FLOW_AXIS.unit),
        label,
    );
    canvas.text(
        Point::new(plot.center().x - 30.0, plot.bottom() + 50.0),
        CURRENT_RPM.label,
        label,
    );
}

fn draw_data(canvas: &mut dyn ChartCanvas, layout: &ChartLayout, table: &SampleTable) {
    if table.len() < 2 {
        return;
    }

    let mut min_line = Vec::with_capacity(table.len());
    let mut max_line = Vec::with_capacity(table.len());
    let mut median_line = Vec::with_capacity(table.len());
    for sample in table {
        min_line.push(layout.map_to_chart(sample.rpm, sample.min_flow));
        max_line.push(layout.map_to_chart(sample.rpm, sample.max_flow));
        median_line.push(layout.map_to_chart(sample.rpm, sample.median_flow));
    }

    // The band is filled segment by segment so every piece stays convex.
    for i in 1..min_line.len() {
        canvas.fill_quad(
            [min_line[i - 1], min_line[i], max_line[i], max_line[i - 1]],
            palette::BAND_FILL,
        );
    }

    let edge = LineStyle::dashed(palette::BAND_EDGE, 2.0);
    canvas.polyline(&min_line, edge);
    canvas.polyline(&max_line, edge);
    canvas.polyline(&median_line, LineStyle::solid(palette::MEDIAN, 3.0));
}

/// Three-line readout shown beside the marker.
pub fn operating_point_label(state: &EngineState) -> String {
    format!(
        "{}: {:.0}\n{}: {:.1} {}\n{}",
        CURRENT_RPM.label,
        state.current_rpm,
        CURRENT_FUEL_FLOW.label,
        state.current_fuel_flow,
        CURRENT_FUEL_FLOW.unit,
        if state.is_eco_mode() { "ECO MODE" } else { "NORMAL" }
    )
}

fn draw_current_point(canvas: &mut dyn ChartCanvas, layout: &ChartLayout, state: &EngineState) {
    let plot = &layout.plot;
    let mut point = layout.map_to_chart(state.current_rpm, state.current_fuel_flow);
    point.y = point.y.clamp(plot.top, plot.bottom());

    canvas.line(
        Point::new(point.x, plot.top),
        Point::new(point.x, plot.bottom()),
        LineStyle::dotted(palette::CURSOR, 2.0),
    );
    canvas.circle(
        point,
        MARKER_RADIUS,
        palette::marker_fill(state.is_eco_mode()),
        LineStyle::solid(palette::AXIS, 2.0),
    );

    let mut label_pos = point.offset(15.0, -30.0);
    if label_pos.x + LABEL_WIDTH > plot.right() {
        label_pos.x = point.x - LABEL_WIDTH;
    }
    canvas.text(
        label_pos,
        &operating_point_label(state),
        TextStyle::bold(palette::TEXT, 12.0),
    );
}

fn draw_legend(canvas: &mut dyn ChartCanvas, layout: &ChartLayout) {
    let legend = &layout.legend;
    let item_width = legend.width / 4.0;
    let y = legend.top + 20.0;
    let label = TextStyle::regular(palette::TEXT, 10.0);
    let outline = LineStyle::solid(palette::AXIS, 2.0);

    canvas.fill_rect(
        Rect::new(legend.left, y, 20.0, 10.0),
        palette::BAND_FILL,
        LineStyle::dashed(palette::BAND_EDGE, 2.0),
    );
    canvas.text(Point::new(legend.left + 25.0, y + 10.0), "Min/Max Range", label);

    let median_x = legend.left + item_width;
    canvas.line(
        Point::new(median_x, y + 5.0),
        Point::new(median_x + 20.0, y + 5.0),
        LineStyle::solid(palette::MEDIAN, 3.0),
    );
    canvas.text(Point::new(median_x + 25.0, y + 10.0), MEDIAN_FUEL_FLOW.label, label);

    let eco_x = legend.left + 2.0 * item_width;
    canvas.circle(Point::new(eco_x + 10.0, y + 5.0), 5.0, palette::ECO, outline);
    canvas.text(Point::new(eco_x + 25.0, y + 10.0), "Eco Mode", label);

    let normal_x = legend.left + 3.0 * item_width;
    canvas.circle(Point::new(normal_x + 10.0, y + 5.0), 5.0, palette::NORMAL, outline);
    canvas.text(Point::new(normal_x + 25.0, y + 10.0), "Normal", label);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, RecordingCanvas};
    use flow_core::{ChartBounds, Sample};

    fn state(rpm: f64, flow: f64, median: f64) -> EngineState {
        EngineState {
            current_rpm: rpm,
            current_fuel_flow: flow,
            median_at_rpm: median,
        }
    }

    fn two_samples() -> SampleTable {
        SampleTable::from_samples(vec![
            Sample {
                rpm: 0.0,
                min_flow: 0.5,
                max_flow: 2.0,
                median_flow: 1.0,
                current_flow: 1.0,
            },
            Sample {
                rpm: 6000.0,
                min_flow: 30.0,
                max_flow: 45.0,
                median_flow: 36.0,
                current_flow: 35.0,
            },
        ])
    }

    fn layout() -> ChartLayout {
        ChartLayout::new(800.0, 600.0, ChartBounds::default())
    }

    #[test]
    fn ticks_cover_both_ends() {
        let rpm: Vec<f64> = ticks(0.0, 6000.0, 1000.0).collect();
        assert_eq!(rpm, vec![0.0, 1000.0, 2000.0, 3000.0, 4000.0, 5000.0, 6000.0]);
        assert_eq!(ticks(0.0, 50.0, 10.0).count(), 6);
    }

    #[test]
    fn label_reports_mode() {
        let eco = operating_point_label(&state(2500.0, 9.04, 10.0));
        assert_eq!(eco, "RPM: 2500\nFuel: 9.0 L/h\nECO MODE");
        let normal = operating_point_label(&state(2500.0, 10.0, 10.0));
        assert!(normal.ends_with("NORMAL"));
    }

    #[test]
    fn median_is_drawn_solid_and_edges_dashed() {
        let mut canvas = RecordingCanvas::new();
        paint(&mut canvas, &layout(), &two_samples(), &state(1500.0, 8.0, 9.0));

        let polylines: Vec<_> = canvas
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Polyline { points, style } => Some((points.len(), *style)),
                _ => None,
            })
            .collect();
        assert_eq!(polylines.len(), 3);
        assert_eq!(polylines[0].1, LineStyle::dashed(palette::BAND_EDGE, 2.0));
        assert_eq!(polylines[2].1, LineStyle::solid(palette::MEDIAN, 3.0));
        assert!(polylines.iter().all(|(len, _)| *len == 2));

        let quads = canvas
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillQuad { .. }))
            .count();
        assert_eq!(quads, 1);
    }

    #[test]
    fn marker_color_follows_mode() {
        let mut eco = RecordingCanvas::new();
        paint(&mut eco, &layout(), &two_samples(), &state(1500.0, 8.0, 9.0));
        let marker = eco.circles().find(|(_, r, _)| *r == MARKER_RADIUS);
        assert_eq!(marker.map(|(_, _, fill)| fill), Some(palette::ECO));

        let mut normal = RecordingCanvas::new();
        paint(&mut normal, &layout(), &two_samples(), &state(1500.0, 9.5, 9.0));
        let marker = normal.circles().find(|(_, r, _)| *r == MARKER_RADIUS);
        assert_eq!(marker.map(|(_, _, fill)| fill), Some(palette::NORMAL));
    }

    #[test]
    fn label_flips_left_near_right_edge() {
        let layout = layout();
        let mut canvas = RecordingCanvas::new();
        paint(&mut canvas, &layout, &two_samples(), &state(5900.0, 20.0, 21.0));
        let marker = layout.map_to_chart(5900.0, 20.0);
        let label_at = canvas.commands.iter().find_map(|c| match c {
            DrawCommand::Text { at, text, .. } if text.starts_with("RPM:") => Some(*at),
            _ => None,
        });
        assert_eq!(label_at, Some(Point::new(marker.x - LABEL_WIDTH, marker.y - 30.0)));
    }

    #[test]
    fn marker_stays_inside_plot_above_axis_max() {
        let layout = layout();
        let mut canvas = RecordingCanvas::new();
        paint(&mut canvas, &layout, &two_samples(), &state(6000.0, 55.0, 48.0));
        let marker = canvas.circles().find(|(_, r, _)| *r == MARKER_RADIUS);
        let center = marker.map(|(center, _, _)| center).expect("marker drawn");
        assert_eq!(center.y, layout.plot.top);
        assert_eq!(center.x, layout.map_to_chart(6000.0, 0.0).x);
    }

    #[test]
    fn empty_table_paints_nothing() {
        let mut canvas = RecordingCanvas::new();
        paint(&mut canvas, &layout(), &SampleTable::default(), &state(0.0, 0.0, 0.0));
        assert!(canvas.commands.is_empty());
    }

    #[test]
    fn single_sample_skips_series_only() {
        let table = SampleTable::from_samples(vec![Sample {
            rpm: 3000.0,
            min_flow: 10.0,
            max_flow: 14.0,
            median_flow: 12.0,
            current_flow: 12.0,
        }]);
        let mut canvas = RecordingCanvas::new();
        paint(&mut canvas, &layout(), &table, &state(3000.0, 11.0, 12.0));
        assert!(!canvas
            .commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Polyline { .. } | DrawCommand::FillQuad { .. })));
        assert!(canvas.circles().any(|(_, r, _)| r == MARKER_RADIUS));
        assert!(canvas.texts().any(|t| t == "Min/Max Range"));
    }

    #[test]
    fn collapsed_window_paints_nothing() {
        let mut canvas = RecordingCanvas::new();
        let tiny = ChartLayout::new(100.0, 100.0, ChartBounds::default());
        paint(&mut canvas, &tiny, &two_samples(), &state(0.0, 0.0, 0.0));
        assert!(canvas.commands.is_empty());
    }
}
