//! Catalog-driven measurement derivation.

use log::{debug, trace};
use strum::IntoEnumIterator;

use super::catalog::Measurement;
use super::set::MeasurementSet;
use crate::landmark::LandmarkSet;

/// Derive every computable measurement from a landmark set.
///
/// Walks the catalog in declaration order. Entries with missing landmarks
/// are skipped and reported in the returned warning list; nothing aborts the
/// pass. The warning order is the catalog order, so diagnostics are
/// reproducible for a given input.
pub fn derive_measurements(landmarks: &LandmarkSet) -> (MeasurementSet, Vec<String>) {
    let mut set = MeasurementSet::new();
    let mut warnings = Vec::new();

    for measurement in Measurement::iter() {
        let missing: Vec<String> = measurement
            .required_landmarks()
            .iter()
            .filter(|l| !landmarks.contains(**l))
            .map(|l| format!("'{l}'"))
            .collect();

        if !missing.is_empty() {
            trace!("skipping {measurement}: missing {}", missing.join(", "));
            let noun = if missing.len() == 1 {
                "landmark"
            } else {
                "landmarks"
            };
            warnings.push(format!(
                "{measurement} could not be computed: missing {noun} {}",
                missing.join(", ")
            ));
            continue;
        }

        if let Some(value) = measurement.evaluate(landmarks) {
            set.insert(measurement, value);
        }
    }

    debug!(
        "derived {} measurements from {} landmarks ({} skipped)",
        set.len(),
        landmarks.len(),
        warnings.len()
    );

    (set, warnings)
}
