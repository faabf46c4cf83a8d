use flow_core::{EngineEvent, EngineObserver, EngineState, FeedStats};
use serde::Serialize;
use tracing::{info, trace};

/// Observer that mirrors every state notification into the trace log.
pub fn state_logger() -> impl EngineObserver {
    |event: &EngineEvent| match *event {
        EngineEvent::RpmChanged(rpm) => trace!(property = event.tag().key, rpm, "RPM changed"),
        EngineEvent::FuelFlowChanged(fuel_flow) => {
            trace!(property = event.tag().key, fuel_flow, "Fuel flow changed")
        }
        EngineEvent::EcoModeChanged(eco) => {
            info!(property = event.tag().key, eco, "Operating mode changed")
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowQuery {
    pub rpm: f64,
    pub median_fuel_flow: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub seed: u64,
    pub samples: usize,
    pub final_state: EngineState,
    pub is_eco_mode: bool,
    pub feed: FeedStats,
    pub eco_ratio: f64,
}

impl RunSummary {
    pub fn new(seed: u64, samples: usize, final_state: EngineState, feed: FeedStats) -> Self {
        Self {
            seed,
            samples,
            is_eco_mode: final_state.is_eco_mode(),
            final_state,
            eco_ratio: feed.eco_ratio(),
            feed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_serializes_derived_fields() {
        let state = EngineState {
            current_rpm: 3000.0,
            current_fuel_flow: 14.0,
            median_at_rpm: 15.0,
        };
        let feed = FeedStats {
            ticks: 4,
            eco_ticks: 1,
            ..FeedStats::default()
        };
        let value = serde_json::to_value(RunSummary::new(9, 121, state, feed)).expect("serialize");
        assert_eq!(value["seed"], 9);
        assert_eq!(value["samples"], 121);
        assert_eq!(value["isEcoMode"], true);
        assert_eq!(value["ecoRatio"], 0.25);
        assert_eq!(value["finalState"]["currentRpm"], 3000.0);
        assert_eq!(value["feed"]["ecoTicks"], 1);
    }
}
