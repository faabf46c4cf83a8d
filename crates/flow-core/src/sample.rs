use crate::interpolate::{flow_at, FlowSeries};
use serde::{Deserialize, Serialize};

/// One row of the RPM table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub rpm: f64,
    #[serde(rename = "minFuelFlow")]
    pub min_flow: f64,
    #[serde(rename = "maxFuelFlow")]
    pub max_flow: f64,
    #[serde(rename = "medianFuelFlow")]
    pub median_flow: f64,
    /// Base curve value before any variation was applied.
    #[serde(rename = "currentFuelFlow")]
    pub current_flow: f64,
}

impl Sample {
    pub fn band_width(&self) -> f64 {
        self.max_flow - self.min_flow
    }
}

/// Samples ordered by strictly increasing RPM. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Sample>", into = "Vec<Sample>")]
pub struct SampleTable {
    samples: Vec<Sample>,
}

impl SampleTable {
    /// Build a table, ordering the samples by RPM.
    pub fn from_samples(mut samples: Vec<Sample>) -> Self {
        if !samples.windows(2).all(|w| w[0].rpm <= w[1].rpm) {
            samples.sort_by(|a, b| a.rpm.total_cmp(&b.rpm));
        }
        Self { samples }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn flow_at(&self, rpm: f64, series: FlowSeries) -> f64 {
        flow_at(&self.samples, rpm, series)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<Vec<Sample>> for SampleTable {
    fn from(samples: Vec<Sample>) -> Self {
        Self::from_samples(samples)
    }
}

impl From<SampleTable> for Vec<Sample> {
    fn from(table: SampleTable) -> Self {
        table.samples
    }
}

impl<'a> IntoIterator for &'a SampleTable {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
