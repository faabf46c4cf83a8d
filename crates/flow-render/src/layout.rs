use crate::canvas::{Point, Rect};
use flow_core::ChartBounds;

pub const MARGIN: f64 = 60.0;
pub const LEGEND_HEIGHT: f64 = 80.0;

/// Pixel geometry for one paint pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub plot: Rect,
    pub legend: Rect,
    pub bounds: ChartBounds,
}

impl ChartLayout {
    pub fn new(width: f64, height: f64, bounds: ChartBounds) -> Self {
        let plot = Rect::new(
            MARGIN,
            MARGIN,
            width - 2.0 * MARGIN,
            height - 2.0 * MARGIN - LEGEND_HEIGHT,
        );
        let legend = Rect::new(plot.left, plot.bottom() + 10.0, plot.width, LEGEND_HEIGHT - 10.0);
        Self {
            plot,
            legend,
            bounds,
        }
    }

    pub fn map_to_chart(&self, rpm: f64, fuel_flow: f64) -> Point {
        let x =
            self.plot.left + (rpm - self.bounds.min_rpm) / self.bounds.rpm_span() * self.plot.width;
        let y = self.plot.bottom()
            - (fuel_flow - self.bounds.min_fuel_flow) / self.bounds.flow_span() * self.plot.height;
        Point::new(x, y)
    }
}
