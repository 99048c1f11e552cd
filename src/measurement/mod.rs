//! Clinical measurement catalog and derivation.
//!
//! A measurement is an angle or distance with a fixed landmark dependency
//! set and a fixed geometry formula. The deriver walks the whole catalog in
//! declaration order: entries whose landmarks are all digitized are
//! computed, the rest are skipped with a warning. Nothing here ever fails —
//! a sparse input simply produces a sparse [`MeasurementSet`].

mod catalog;
mod deriver;
mod set;

pub use catalog::{Measurement, Unit};
pub use deriver::derive_measurements;
pub use set::MeasurementSet;
