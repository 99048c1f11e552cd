//! Norm-table configuration.
//!
//! Clinical normal ranges are display metadata, not part of the formulas:
//! the engine computes raw values and the norm table tells a caller how to
//! present them. Built-in adult norms ship compiled in; a partial YAML file
//! can override individual entries.
//!
//! ```rust,ignore
//! use kapala_ceph::config::{NormBand, NormTable};
//!
//! // Built-in clinical defaults (no file needed)
//! let norms = NormTable::default();
//!
//! // Or with per-clinic overrides applied on top
//! let norms = NormTable::load(Path::new("configs/norms.yaml"))?;
//!
//! let band = norms.classify(Measurement::Sna, 85.2); // NormBand::Above
//! ```

mod error;
mod norms;

pub use error::ConfigLoadError;
pub use norms::{MeasurementNorm, NormBand, NormTable};
