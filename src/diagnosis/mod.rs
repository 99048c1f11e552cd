//! Composite diagnostic indices.
//!
//! Indices are fixed clinical formulas over two or more derived
//! measurements (sums, deviation scores, one ratio). The composer is
//! best-effort in the same way the measurement deriver is: an index whose
//! inputs are incomplete is skipped with a warning naming the missing
//! measurements, and the pass always runs to completion.

mod composer;
mod index;

pub use composer::{DiagnosisResult, compose_diagnosis};
pub use index::{DiagnosisIndices, DiagnosticIndex};
