//! The full analysis pipeline: landmarks → measurements → indices.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::diagnosis::{DiagnosisIndices, compose_diagnosis};
use crate::landmark::LandmarkSet;
use crate::measurement::{Measurement, MeasurementSet, derive_measurements};

/// The sagittal measurements a tracing must support to count as usable.
const CORE_MEASUREMENTS: [Measurement; 3] =
    [Measurement::Sna, Measurement::Snb, Measurement::Anb];

/// Everything one pipeline invocation produces.
///
/// The pipeline never fails: a sparse or even empty landmark set still
/// yields a report. `success` says whether the core sagittal set
/// (SNA, SNB, ANB) was computable — callers must not infer failure from
/// empty maps alone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// The core sagittal measurement set was computable.
    pub success: bool,
    /// Every measurement whose landmarks were present.
    pub measurements: MeasurementSet,
    /// Every index whose measurements were present.
    pub diagnosis: DiagnosisIndices,
    /// One entry per skipped measurement, then one per skipped index.
    pub warnings: Vec<String>,
}

/// Run the full pipeline on one landmark set.
///
/// Pure and synchronous: no I/O, no shared state, identical inputs produce
/// bit-identical reports. Safe to call concurrently.
pub fn analyze(landmarks: &LandmarkSet) -> AnalysisReport {
    let (measurements, mut warnings) = derive_measurements(landmarks);
    let diagnosis = compose_diagnosis(&measurements);
    warnings.extend(diagnosis.warnings);

    let success = CORE_MEASUREMENTS.iter().all(|m| measurements.contains(*m));

    debug!(
        "analysis complete: success={success}, {} measurements, {} indices, {} warnings",
        measurements.len(),
        diagnosis.indices.len(),
        warnings.len()
    );

    AnalysisReport {
        success,
        measurements,
        diagnosis: diagnosis.indices,
        warnings,
    }
}
