//! Best-effort index composition.

use log::{debug, trace};
use strum::IntoEnumIterator;

use super::index::{DiagnosisIndices, DiagnosticIndex};
use crate::measurement::MeasurementSet;

/// Indices plus the warnings accumulated while composing them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiagnosisResult {
    /// The indices that could be computed.
    pub indices: DiagnosisIndices,
    /// One entry per skipped index, in catalog order.
    pub warnings: Vec<String>,
}

/// Compose every computable diagnostic index from a measurement set.
///
/// Walks the index catalog in declaration order and never fails: an index
/// with missing inputs is skipped with a warning naming every missing
/// measurement, and a formula that hits degenerate input (VDL with a zero
/// anterior facial height) is skipped with a warning naming the condition.
pub fn compose_diagnosis(measurements: &MeasurementSet) -> DiagnosisResult {
    let mut result = DiagnosisResult::default();

    for index in DiagnosticIndex::iter() {
        let missing: Vec<String> = index
            .required_measurements()
            .iter()
            .filter(|m| !measurements.contains(**m))
            .map(|m| format!("'{m}'"))
            .collect();

        if !missing.is_empty() {
            trace!("skipping {index}: missing {}", missing.join(", "));
            let noun = if missing.len() == 1 {
                "measurement"
            } else {
                "measurements"
            };
            result.warnings.push(format!(
                "{index} could not be computed: missing {noun} {}",
                missing.join(", ")
            ));
            continue;
        }

        match index.evaluate(measurements) {
            Some(value) => result.indices.insert(index, value),
            // Inputs present but the formula is degenerate (VDL ratio).
            None => result.warnings.push(format!(
                "{index} could not be computed: degenerate measurement input"
            )),
        }
    }

    debug!(
        "composed {} indices ({} skipped)",
        result.indices.len(),
        result.warnings.len()
    );

    result
}
