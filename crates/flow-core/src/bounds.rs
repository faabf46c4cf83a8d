use serde::{Deserialize, Serialize};

pub const MIN_RPM: f64 = 0.0;
pub const MAX_RPM: f64 = 6000.0;
pub const RPM_STEP: f64 = 50.0;
pub const MIN_FUEL_FLOW: f64 = 0.0;
pub const MAX_FUEL_FLOW: f64 = 50.0;

/// Hard limit on generated maximum flow, kept below the axis maximum so the
/// band never touches the top of the chart.
pub const SAFETY_CEILING: f64 = 48.0;

/// Fixed axis domain shared by the data model and the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBounds {
    pub min_rpm: f64,
    pub max_rpm: f64,
    pub min_fuel_flow: f64,
    pub max_fuel_flow: f64,
}

impl Default for ChartBounds {
    fn default() -> Self {
        Self {
            min_rpm: MIN_RPM,
            max_rpm: MAX_RPM,
            min_fuel_flow: MIN_FUEL_FLOW,
            max_fuel_flow: MAX_FUEL_FLOW,
        }
    }
}

impl ChartBounds {
    pub fn rpm_span(&self) -> f64 {
        self.max_rpm - self.min_rpm
    }

    pub fn flow_span(&self) -> f64 {
        self.max_fuel_flow - self.min_fuel_flow
    }

    /// Clamp an RPM into the domain. Returns `None` for non-finite input.
    pub fn clamp_rpm(&self, rpm: f64) -> Option<f64> {
        if !rpm.is_finite() {
            return None;
        }
        Some(rpm.clamp(self.min_rpm, self.max_rpm))
    }
}
