//! Point queries against the sample table.

use crate::sample::Sample;

/// Which series a flow query reads.
///
/// Both variants resolve against the median column: the live reading is
/// anchored on the median curve and the simulation layers its own jitter on
/// top, so `Current` never diverges from `Median` here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowSeries {
    #[default]
    Median,
    Current,
}

/// Linearly interpolated fuel flow at `rpm`.
///
/// Queries outside the table return the nearest boundary sample's median;
/// an empty table yields `0.0`.
pub fn flow_at(samples: &[Sample], rpm: f64, series: FlowSeries) -> f64 {
    let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
        return 0.0;
    };

    let idx = samples.partition_point(|s| s.rpm < rpm);
    if idx == 0 {
        return first.median_flow;
    }
    if idx == samples.len() {
        return last.median_flow;
    }

    let lo = &samples[idx - 1];
    let hi = &samples[idx];
    if hi.rpm == rpm {
        return hi.median_flow;
    }

    let span = hi.rpm - lo.rpm;
    if span <= 0.0 {
        return hi.median_flow;
    }
    let ratio = (rpm - lo.rpm) / span;

    match series {
        FlowSeries::Median | FlowSeries::Current => {
            lo.median_flow + ratio * (hi.median_flow - lo.median_flow)
        }
    }
}
