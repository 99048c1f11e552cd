//! # kapala-ceph
//!
//! Cephalometric analysis engine: turns a set of named 2-D anatomical
//! landmarks digitized on a lateral skull X-ray into clinical measurements
//! and composite diagnostic indices.
//!
//! ## Pipeline
//!
//! The engine is a pure, synchronous, three-stage value pipeline:
//!
//! 1. **Geometry** – stateless 2-D primitives (vertex angles, line angles,
//!    distances, intersections)
//! 2. **Measurements** – a fixed catalog of 32 clinical angles/distances,
//!    each with a declared landmark dependency set; entries with missing
//!    landmarks are skipped with a warning, never an error
//! 3. **Diagnosis** – ten composite indices (ODI, APDI, EI, ...) computed
//!    from the measurements, again best-effort
//!
//! No stage holds state between invocations and nothing blocks or performs
//! I/O, so the pipeline is safe to call concurrently without locking.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kapala_ceph::{CephPoint, Landmark, LandmarkSet, Measurement, analyze};
//!
//! let mut landmarks = LandmarkSet::new();
//! landmarks.insert(Landmark::Sella, CephPoint::new(120.0, 180.0));
//! landmarks.insert(Landmark::Nasion, CephPoint::new(100.0, 150.0));
//! landmarks.insert(Landmark::APoint, CephPoint::new(130.0, 220.0));
//!
//! let report = analyze(&landmarks);
//! if let Some(sna) = report.measurements.get(Measurement::Sna) {
//!     println!("SNA = {sna:.1}°");
//! }
//! for warning in &report.warnings {
//!     println!("note: {warning}");
//! }
//! ```
//!
//! ## Coordinate System
//!
//! Coordinates are unit-agnostic image-space values: whatever scale the
//! tracing was digitized in is treated as one consistent unit. Angles are
//! returned in degrees, linear measurements in the input unit (norm tables
//! quote millimeters).

#![warn(missing_docs)]

// Fundamental types and geometry primitives
pub mod core;

// Landmark vocabulary and input map
pub mod landmark;

// Measurement catalog and derivation
pub mod measurement;

// Composite diagnostic indices
pub mod diagnosis;

// Clinical norm tables
pub mod config;

// Pipeline entry point
mod analysis;

// Re-export commonly used types
pub use analysis::{AnalysisReport, analyze};
pub use config::{ConfigLoadError, MeasurementNorm, NormBand, NormTable};
pub use self::core::{CephPoint, LineIntersection};
pub use diagnosis::{DiagnosisIndices, DiagnosisResult, DiagnosticIndex, compose_diagnosis};
pub use landmark::{Landmark, LandmarkError, LandmarkSet};
pub use measurement::{Measurement, MeasurementSet, Unit, derive_measurements};
