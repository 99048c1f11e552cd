//! Derived measurement values for one tracing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::catalog::Measurement;

/// The measurements that could be computed from one landmark set.
///
/// A key is present exactly when every landmark the measurement depends on
/// was digitized; there is no null sentinel. Values are the raw f64 results
/// of the geometry formulas, unrounded.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeasurementSet {
    values: HashMap<Measurement, f64>,
}

impl MeasurementSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a computed value.
    pub fn insert(&mut self, measurement: Measurement, value: f64) {
        self.values.insert(measurement, value);
    }

    /// Computed value for a measurement, if its landmarks were present.
    pub fn get(&self, measurement: Measurement) -> Option<f64> {
        self.values.get(&measurement).copied()
    }

    /// Whether the measurement was computable.
    pub fn contains(&self, measurement: Measurement) -> bool {
        self.values.contains_key(&measurement)
    }

    /// Number of computed measurements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// No measurement was computable.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the computed values.
    pub fn iter(&self) -> impl Iterator<Item = (&Measurement, &f64)> {
        self.values.iter()
    }
}
