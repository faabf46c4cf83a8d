pub mod bounds;
#[cfg(feature = "simulation")]
pub mod engine_sim;
pub mod feed;
pub mod generator;
pub mod interpolate;
pub mod sample;
pub mod simulation;
mod table_proptest;
pub mod tags;
#[cfg(feature = "simulation")]
pub mod telemetry_loop;

pub use bounds::{ChartBounds, SAFETY_CEILING};
#[cfg(feature = "simulation")]
pub use engine_sim::SimulatedEngine;
pub use feed::RpmSource;
pub use generator::{GeneratorConfig, SampleTableGenerator};
pub use interpolate::{flow_at, FlowSeries};
pub use sample::{Sample, SampleTable};
pub use simulation::{
    is_eco, ChangeSet, EngineEvent, EngineObserver, EngineSimulation, EngineState, DEFAULT_RPM,
};
#[cfg(feature = "simulation")]
pub use telemetry_loop::{FeedConfig, FeedStats, TelemetryLoop, ThrottlePlan, ThrottleProfile};
