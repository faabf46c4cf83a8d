//! Synthetic fuel-flow table.
//!
//! Each sample starts from a smooth base curve over normalized RPM. Random
//! spreads widen it into a min/max band, two RPM bands shape that band for
//! engine efficiency, and the median lands at a random point inside it.

use crate::bounds::{ChartBounds, RPM_STEP, SAFETY_CEILING};
use crate::sample::{Sample, SampleTable};
use log::debug;
use rand::Rng;
use std::ops::RangeInclusive;

/// Coefficients for the synthesized table.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub rpm_step: f64,
    /// `base = offset + linear * norm + quadratic * norm^2`
    pub base_offset: f64,
    pub linear_coeff: f64,
    pub quadratic_coeff: f64,
    /// Symmetric jitter applied to the base before the band is derived.
    pub base_jitter: f64,
    pub lower_spread: RangeInclusive<f64>,
    pub lower_spread_growth: f64,
    pub upper_spread: RangeInclusive<f64>,
    pub upper_spread_growth: f64,
    /// Margin enforced when the upper roll does not exceed the lower one.
    pub spread_gap: f64,
    pub sweet_spot: RangeInclusive<f64>,
    /// Multiplier on the lower spread inside the sweet spot.
    pub sweet_spot_tightening: f64,
    pub high_rpm_start: f64,
    /// Extra upper spread reached at the top of the RPM domain.
    pub high_rpm_penalty: f64,
    pub median_fraction: RangeInclusive<f64>,
    pub safety_ceiling: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rpm_step: RPM_STEP,
            base_offset: 1.5,
            linear_coeff: 26.0,
            quadratic_coeff: 6.0,
            base_jitter: 0.03,
            lower_spread: 0.08..=0.12,
            lower_spread_growth: 0.08,
            upper_spread: 0.10..=0.16,
            upper_spread_growth: 0.12,
            spread_gap: 0.02,
            sweet_spot: 2000.0..=3500.0,
            sweet_spot_tightening: 0.5,
            high_rpm_start: 4800.0,
            high_rpm_penalty: 0.10,
            median_fraction: 0.3..=0.7,
            safety_ceiling: SAFETY_CEILING,
        }
    }
}

impl GeneratorConfig {
    pub fn base_flow(&self, norm: f64) -> f64 {
        self.base_offset + self.linear_coeff * norm + self.quadratic_coeff * norm * norm
    }

    /// Largest max flow any roll can produce: the base at full RPM pushed up
    /// by the full jitter, the widest upper spread and the whole high-RPM
    /// penalty.
    pub fn worst_case_max_flow(&self) -> f64 {
        let widest_upper = (self.upper_spread.end() + self.upper_spread_growth)
            .max(self.lower_spread.end() + self.lower_spread_growth + self.spread_gap);
        self.base_flow(1.0)
            * (1.0 + self.base_jitter)
            * (1.0 + widest_upper + self.high_rpm_penalty)
    }

    fn high_rpm_penalty_at(&self, rpm: f64, max_rpm: f64) -> f64 {
        if rpm <= self.high_rpm_start || max_rpm <= self.high_rpm_start {
            return 0.0;
        }
        let depth = ((rpm - self.high_rpm_start) / (max_rpm - self.high_rpm_start)).min(1.0);
        self.high_rpm_penalty * depth
    }
}

#[derive(Debug, Clone, Default)]
pub struct SampleTableGenerator {
    config: GeneratorConfig,
    bounds: ChartBounds,
}

impl SampleTableGenerator {
    pub fn new(config: GeneratorConfig, bounds: ChartBounds) -> Self {
        Self { config, bounds }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn bounds(&self) -> &ChartBounds {
        &self.bounds
    }

    pub fn sample_count(&self) -> usize {
        (self.bounds.rpm_span() / self.config.rpm_step).floor() as usize + 1
    }

    pub fn generate<R: Rng>(&self, rng: &mut R) -> SampleTable {
        let samples: Vec<Sample> = (0..self.sample_count())
            .map(|i| {
                let rpm = self.bounds.min_rpm + i as f64 * self.config.rpm_step;
                self.sample_at(rpm, rng)
            })
            .collect();

        debug!(
            "Generated {} samples over {}..={} rpm (worst-case max flow {:.2})",
            samples.len(),
            self.bounds.min_rpm,
            self.bounds.max_rpm,
            self.config.worst_case_max_flow()
        );
        SampleTable::from_samples(samples)
    }

    /// Relative (lower, upper) spreads before RPM shaping; upper always
    /// exceeds lower.
    fn spreads<R: Rng>(&self, norm: f64, rng: &mut R) -> (f64, f64) {
        let cfg = &self.config;
        let lower = rng.random_range(cfg.lower_spread.clone()) + cfg.lower_spread_growth * norm;
        let upper = rng.random_range(cfg.upper_spread.clone()) + cfg.upper_spread_growth * norm;
        if upper <= lower {
            (lower, lower + cfg.spread_gap)
        } else {
            (lower, upper)
        }
    }

    fn sample_at<R: Rng>(&self, rpm: f64, rng: &mut R) -> Sample {
        let cfg = &self.config;
        let norm = (rpm - self.bounds.min_rpm) / self.bounds.rpm_span();
        let base = cfg.base_flow(norm);

        let jitter = rng.random_range(-cfg.base_jitter..=cfg.base_jitter);
        let jittered = base * (1.0 + jitter);

        let (mut lower, mut upper) = self.spreads(norm, rng);
        if cfg.sweet_spot.contains(&rpm) {
            lower *= cfg.sweet_spot_tightening;
        }
        upper += cfg.high_rpm_penalty_at(rpm, self.bounds.max_rpm);

        let min_flow = (jittered * (1.0 - lower)).max(0.0);
        let max_flow = (jittered * (1.0 + upper)).min(cfg.safety_ceiling);
        let fraction = rng.random_range(cfg.median_fraction.clone());
        let median_flow = min_flow + (max_flow - min_flow) * fraction;

        Sample {
            rpm,
            min_flow,
            max_flow,
            median_flow,
            current_flow: base,
        }
    }
}
