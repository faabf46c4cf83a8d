use crate::runtime::config::{ProfileKind, RuntimeConfig};
use crate::runtime::error::AppError;
use crate::runtime::logging::init_tracing;
use crate::runtime::telemetry::{self, FlowQuery, RunSummary};
use flow_core::{
    EngineSimulation, FeedConfig, FlowSeries, SimulatedEngine, TelemetryLoop, ThrottlePlan,
    ThrottleProfile, DEFAULT_RPM,
};
use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{debug, error, info};

pub fn run_from_args() -> ExitCode {
    let config = match RuntimeConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("Run with --help for usage.");
            return ExitCode::from(2);
        }
    };
    if config.show_help {
        RuntimeConfig::print_help();
        return ExitCode::SUCCESS;
    }

    let _log_guard = match init_tracing(config.json_logs, config.log_dir.as_deref()) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "boat-fuelflow failed");
            ExitCode::FAILURE
        }
    }
}

/// Build the simulation for `config` and the seed it was generated from.
pub fn build_simulation(config: &RuntimeConfig) -> (EngineSimulation, u64) {
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut sim = EngineSimulation::generate(Some(seed));
    if let Some(rpm) = config.initial_rpm {
        sim.set_current_rpm(rpm);
    }
    info!(
        seed,
        samples = sim.table().len(),
        rpm = sim.current_rpm(),
        fuel_flow = sim.current_fuel_flow(),
        eco = sim.is_eco_mode(),
        "Fuel-flow table generated"
    );
    (sim, seed)
}

pub fn build_feed(
    config: &RuntimeConfig,
    seed: u64,
    start_rpm: f64,
) -> TelemetryLoop<SimulatedEngine> {
    let profile = match config.profile {
        ProfileKind::Hold => ThrottleProfile::Hold(config.initial_rpm.unwrap_or(DEFAULT_RPM)),
        ProfileKind::Sweep => ThrottleProfile::Sweep {
            period_s: config.sweep_period_s,
        },
        ProfileKind::Wander => ThrottleProfile::Wander { seed },
    };
    let feed_config = FeedConfig {
        tick: Duration::from_millis(config.tick_ms),
        ticks: config.ticks,
        realtime: config.realtime,
        ..FeedConfig::default()
    };
    let engine = SimulatedEngine::starting_at(start_rpm, feed_config.engine_time_constant_s);
    TelemetryLoop::new(engine, ThrottlePlan::new(profile), feed_config)
}

pub fn run(config: &RuntimeConfig) -> Result<(), AppError> {
    let (mut sim, seed) = build_simulation(config);
    let mut feed = build_feed(config, seed, sim.current_rpm());

    #[cfg(feature = "gui")]
    if config.gui {
        sim.subscribe(telemetry::state_logger());
        return crate::gui::run_window(sim, feed);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if config.print_table {
        writeln!(out, "{}", sim.table().to_json()?)?;
    }
    for &rpm in &config.queries {
        let query = FlowQuery {
            rpm,
            median_fuel_flow: sim.flow_at(rpm, FlowSeries::Median),
        };
        debug!(rpm, fuel_flow = query.median_fuel_flow, "Flow query");
        writeln!(out, "{}", serde_json::to_string(&query)?)?;
    }

    sim.subscribe(telemetry::state_logger());
    let stats = feed.run(&mut sim);

    let summary = RunSummary::new(seed, sim.table().len(), *sim.state(), stats);
    info!(
        ticks = summary.feed.ticks,
        updates_applied = summary.feed.updates_applied,
        updates_skipped = summary.feed.updates_skipped,
        eco_ratio = summary.eco_ratio,
        rpm = summary.final_state.current_rpm,
        fuel_flow = summary.final_state.current_fuel_flow,
        "Run complete"
    );
    writeln!(out, "{}", serde_json::to_string(&summary)?)?;
    out.flush()?;
    Ok(())
}
