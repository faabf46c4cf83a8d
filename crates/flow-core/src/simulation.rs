//! Live operating point over a generated table.
//!
//! `EngineSimulation` owns the table and the engine state. The state changes
//! only through [`EngineSimulation::set_current_rpm`], which re-derives the
//! fuel flow and eco flag and notifies observers property by property.

use crate::bounds::ChartBounds;
use crate::generator::SampleTableGenerator;
use crate::interpolate::FlowSeries;
use crate::sample::SampleTable;
use crate::tags::{Tag, CURRENT_FUEL_FLOW, CURRENT_RPM, ECO_MODE};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub const DEFAULT_RPM: f64 = 1500.0;

/// Half-width of the multiplicative noise on the live fuel flow.
pub const FLOW_JITTER: f64 = 0.15;

/// Eco mode holds while the live flow stays strictly under the median.
pub fn is_eco(current_fuel_flow: f64, median_flow: f64) -> bool {
    current_fuel_flow < median_flow
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineState {
    pub current_rpm: f64,
    pub current_fuel_flow: f64,
    pub median_at_rpm: f64,
}

impl EngineState {
    pub fn is_eco_mode(&self) -> bool {
        is_eco(self.current_fuel_flow, self.median_at_rpm)
    }
}

/// One property change, emitted after the state has been updated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineEvent {
    RpmChanged(f64),
    FuelFlowChanged(f64),
    EcoModeChanged(bool),
}

impl EngineEvent {
    pub fn tag(&self) -> Tag {
        match self {
            Self::RpmChanged(_) => CURRENT_RPM,
            Self::FuelFlowChanged(_) => CURRENT_FUEL_FLOW,
            Self::EcoModeChanged(_) => ECO_MODE,
        }
    }
}

/// Which properties a single update touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub rpm: bool,
    pub fuel_flow: bool,
    pub eco_mode: bool,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        !(self.rpm || self.fuel_flow || self.eco_mode)
    }
}

pub trait EngineObserver {
    fn on_event(&mut self, event: &EngineEvent);
}

impl<F: FnMut(&EngineEvent)> EngineObserver for F {
    fn on_event(&mut self, event: &EngineEvent) {
        self(event)
    }
}

pub struct EngineSimulation<R: Rng = StdRng> {
    table: SampleTable,
    bounds: ChartBounds,
    state: EngineState,
    rng: R,
    observers: Vec<Box<dyn EngineObserver>>,
}

impl EngineSimulation<StdRng> {
    /// Generate a fresh table and start at [`DEFAULT_RPM`]. `seed` makes the
    /// whole run reproducible.
    pub fn generate(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let generator = SampleTableGenerator::default();
        let table = generator.generate(&mut rng);
        Self::new(table, *generator.bounds(), rng)
    }
}

impl<R: Rng> EngineSimulation<R> {
    pub fn new(table: SampleTable, bounds: ChartBounds, rng: R) -> Self {
        Self::with_initial_rpm(table, bounds, rng, DEFAULT_RPM)
    }

    pub fn with_initial_rpm(table: SampleTable, bounds: ChartBounds, rng: R, rpm: f64) -> Self {
        let current_rpm = bounds.clamp_rpm(rpm).unwrap_or(DEFAULT_RPM);
        let mut sim = Self {
            table,
            bounds,
            state: EngineState {
                current_rpm,
                current_fuel_flow: 0.0,
                median_at_rpm: 0.0,
            },
            rng,
            observers: Vec::new(),
        };
        sim.state = sim.derive_state(current_rpm);
        sim
    }

    pub fn table(&self) -> &SampleTable {
        &self.table
    }

    pub fn bounds(&self) -> &ChartBounds {
        &self.bounds
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn current_rpm(&self) -> f64 {
        self.state.current_rpm
    }

    pub fn current_fuel_flow(&self) -> f64 {
        self.state.current_fuel_flow
    }

    pub fn is_eco_mode(&self) -> bool {
        self.state.is_eco_mode()
    }

    /// Ad-hoc lookup, independent of the live cursor.
    pub fn flow_at(&self, rpm: f64, series: FlowSeries) -> f64 {
        self.table.flow_at(rpm, series)
    }

    pub fn subscribe(&mut self, observer: impl EngineObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn set_current_rpm(&mut self, rpm: f64) -> ChangeSet {
        let Some(rpm) = self.bounds.clamp_rpm(rpm) else {
            debug!("Ignoring non-finite rpm {rpm}");
            return ChangeSet::default();
        };
        if rpm == self.state.current_rpm {
            return ChangeSet::default();
        }

        let previous = self.state;
        self.state = self.derive_state(rpm);

        let changes = ChangeSet {
            rpm: true,
            fuel_flow: self.state.current_fuel_flow != previous.current_fuel_flow,
            eco_mode: self.state.is_eco_mode() != previous.is_eco_mode(),
        };
        trace!(
            "rpm {:.0} -> {:.0}, flow {:.2} L/h, eco {}",
            previous.current_rpm,
            self.state.current_rpm,
            self.state.current_fuel_flow,
            self.state.is_eco_mode()
        );
        self.notify(changes);
        changes
    }

    fn derive_state(&mut self, rpm: f64) -> EngineState {
        let base_flow = self.table.flow_at(rpm, FlowSeries::Current);
        let jitter = (self.rng.random::<f64>() - 0.5) * 2.0 * FLOW_JITTER;
        EngineState {
            current_rpm: rpm,
            current_fuel_flow: base_flow * (1.0 + jitter),
            median_at_rpm: self.table.flow_at(rpm, FlowSeries::Median),
        }
    }

    fn notify(&mut self, changes: ChangeSet) {
        let mut events = Vec::with_capacity(3);
        if changes.rpm {
            events.push(EngineEvent::RpmChanged(self.state.current_rpm));
        }
        if changes.fuel_flow {
            events.push(EngineEvent::FuelFlowChanged(self.state.current_fuel_flow));
        }
        if changes.eco_mode {
            events.push(EngineEvent::EcoModeChanged(self.state.is_eco_mode()));
        }
        for observer in &mut self.observers {
            for event in &events {
                observer.on_event(event);
            }
        }
    }
}
