use crate::bounds::{MAX_RPM, MIN_RPM};
use crate::feed::RpmSource;
use crate::simulation::EngineSimulation;
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::time::{Duration, Instant};

const WANDER_RPM: std::ops::RangeInclusive<f64> = 800.0..=5600.0;
const WANDER_HOLD_S: std::ops::RangeInclusive<f64> = 2.0..=5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThrottleProfile {
    Hold(f64),
    /// Triangle wave from idle to full RPM and back.
    Sweep { period_s: f64 },
    /// Random throttle targets, each held for a few seconds.
    Wander { seed: u64 },
}

impl Default for ThrottleProfile {
    fn default() -> Self {
        Self::Sweep { period_s: 60.0 }
    }
}

#[derive(Debug, Clone)]
pub struct ThrottlePlan {
    profile: ThrottleProfile,
    rng: StdRng,
    wander_target: f64,
    next_change_s: f64,
}

impl ThrottlePlan {
    pub fn new(profile: ThrottleProfile) -> Self {
        let seed = match profile {
            ThrottleProfile::Wander { seed } => seed,
            _ => 0,
        };
        Self {
            profile,
            rng: StdRng::seed_from_u64(seed),
            wander_target: MIN_RPM,
            next_change_s: 0.0,
        }
    }

    pub fn profile(&self) -> ThrottleProfile {
        self.profile
    }

    pub fn target_at(&mut self, t_s: f64) -> f64 {
        match self.profile {
            ThrottleProfile::Hold(rpm) => rpm,
            ThrottleProfile::Sweep { period_s } => {
                let phase = (t_s / period_s.max(f64::EPSILON)).rem_euclid(1.0);
                let tri = if phase < 0.5 { 2.0 * phase } else { 2.0 - 2.0 * phase };
                MIN_RPM + tri * (MAX_RPM - MIN_RPM)
            }
            ThrottleProfile::Wander { .. } => {
                if t_s >= self.next_change_s {
                    self.wander_target = self.rng.random_range(WANDER_RPM);
                    self.next_change_s = t_s + self.rng.random_range(WANDER_HOLD_S);
                }
                self.wander_target
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct FeedConfig {
    pub tick: Duration,
    pub ticks: u64,
    /// Sleep between ticks so the feed runs at wall-clock speed.
    pub realtime: bool,
    pub engine_time_constant_s: f64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(100),
            ticks: 600,
            realtime: false,
            engine_time_constant_s: 1.5,
        }
    }
}

#[derive(Clone, Default, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedStats {
    pub ticks: u64,
    pub updates_applied: u64,
    pub updates_skipped: u64,
    pub eco_ticks: u64,
    pub unhealthy_ticks: u64,
    pub min_fuel_flow: Option<f64>,
    pub max_fuel_flow: Option<f64>,
}

impl FeedStats {
    pub fn eco_ratio(&self) -> f64 {
        if self.ticks == 0 {
            0.0
        } else {
            self.eco_ticks as f64 / self.ticks as f64
        }
    }

    fn observe_flow(&mut self, flow: f64) {
        self.min_fuel_flow = Some(self.min_fuel_flow.map_or(flow, |m| m.min(flow)));
        self.max_fuel_flow = Some(self.max_fuel_flow.map_or(flow, |m| m.max(flow)));
    }
}

/// Drives an [`EngineSimulation`] from an [`RpmSource`], one tachometer
/// reading per tick.
pub struct TelemetryLoop<S: RpmSource> {
    source: S,
    plan: ThrottlePlan,
    config: FeedConfig,
    elapsed_s: f64,
    stats: FeedStats,
}

impl<S: RpmSource> TelemetryLoop<S> {
    pub fn new(source: S, plan: ThrottlePlan, config: FeedConfig) -> Self {
        Self {
            source,
            plan,
            config,
            elapsed_s: 0.0,
            stats: FeedStats::default(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn elapsed_s(&self) -> f64 {
        self.elapsed_s
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn stats(&self) -> &FeedStats {
        &self.stats
    }

    /// Advance the source by `dt_s` and push the whole-RPM reading into the
    /// simulation.
    pub fn tick<R: Rng>(&mut self, sim: &mut EngineSimulation<R>, dt_s: f64) {
        self.elapsed_s += dt_s;
        let target = self.plan.target_at(self.elapsed_s);
        self.source.set_throttle(target);
        self.source.step(dt_s);

        if !self.source.is_healthy() {
            self.stats.unhealthy_ticks += 1;
            warn!("RPM source unhealthy at t={:.2}s", self.elapsed_s);
        }

        let reading = self.source.read_rpm().round();
        let changes = sim.set_current_rpm(reading);
        if changes.is_empty() {
            self.stats.updates_skipped += 1;
        } else {
            self.stats.updates_applied += 1;
        }

        self.stats.ticks += 1;
        if sim.is_eco_mode() {
            self.stats.eco_ticks += 1;
        }
        self.stats.observe_flow(sim.current_fuel_flow());
    }

    pub fn run<R: Rng>(&mut self, sim: &mut EngineSimulation<R>) -> FeedStats {
        let dt_s = self.config.tick.as_secs_f64();
        let mut next_tick = Instant::now();
        debug!(
            "Telemetry feed: {} ticks of {:?}, profile {:?}",
            self.config.ticks,
            self.config.tick,
            self.plan.profile()
        );

        for _ in 0..self.config.ticks {
            if self.config.realtime {
                next_tick += self.config.tick;
                let now = Instant::now();
                if next_tick > now {
                    std::thread::sleep(next_tick - now);
                }
            }
            self.tick(sim, dt_s);
        }
        self.stats.clone()
    }
}
