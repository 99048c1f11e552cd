//! The ten diagnostic indices and their formulas.
//!
//! The constants below are part of the clinical formulas themselves. They
//! are deliberately independent of the configurable norm table: overriding
//! a display norm must never change an index value.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::measurement::{Measurement, MeasurementSet};

/// Clinical mean the facial angle deviation scores are taken against.
const FACIAL_ANGLE_NORM: f64 = 87.0;
/// Clinical mean FMA.
const FMA_NORM: f64 = 25.0;
/// Clinical mean SN-GoGn.
const SN_GOGN_NORM: f64 = 32.0;
/// Björk: saddle + articular + gonial angle in the balanced face.
const BJORK_SUM_NORM: f64 = 396.0;
/// Clinical mean interincisal angle.
const INTERINCISAL_NORM: f64 = 130.0;

/// A composite diagnostic index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum DiagnosticIndex {
    /// Horizontal growth indicator: deviation score favoring flat planes
    #[strum(serialize = "HGI")]
    #[serde(rename = "HGI")]
    Hgi,
    /// Vertical growth indicator: Björk sum deviation
    #[strum(serialize = "VGI")]
    #[serde(rename = "VGI")]
    Vgi,
    /// Anteroposterior dysplasia indicator
    #[strum(serialize = "APDI")]
    #[serde(rename = "APDI")]
    Apdi,
    /// Overbite depth indicator
    #[strum(serialize = "ODI")]
    #[serde(rename = "ODI")]
    Odi,
    /// APDI adjusted for the vertical pattern
    #[strum(serialize = "IAPDI")]
    #[serde(rename = "IAPDI")]
    Iapdi,
    /// ODI adjusted for dental compensation
    #[strum(serialize = "IODI")]
    #[serde(rename = "IODI")]
    Iodi,
    /// Sagittal-versus-vertical differential (APDI minus ODI)
    #[strum(serialize = "2APDL")]
    #[serde(rename = "2APDL")]
    TwoApdl,
    /// Vertical dysplasia level: Jarabak facial height ratio
    #[strum(serialize = "VDL")]
    #[serde(rename = "VDL")]
    Vdl,
    /// Combination factor: ODI plus APDI
    #[strum(serialize = "CFD")]
    #[serde(rename = "CFD")]
    Cfd,
    /// Extraction index: combination factor with incisor and lip corrections
    #[strum(serialize = "EI")]
    #[serde(rename = "EI")]
    Ei,
}

impl DiagnosticIndex {
    /// Measurements this index requires.
    pub fn required_measurements(&self) -> &'static [Measurement] {
        use Measurement::*;
        match self {
            DiagnosticIndex::Hgi => &[FacialAngle, Fma, SnGoGn],
            DiagnosticIndex::Vgi => &[SaddleAngle, ArticularAngle, GonialAngle],
            DiagnosticIndex::Apdi => &[FacialAngle, AbPlaneAngle, PalatalPlaneAngle],
            DiagnosticIndex::Odi => &[AbToMandibularPlane, PalatalPlaneAngle],
            DiagnosticIndex::Iapdi => &[FacialAngle, AbPlaneAngle, PalatalPlaneAngle, Fma],
            DiagnosticIndex::Iodi => {
                &[AbToMandibularPlane, PalatalPlaneAngle, InterincisalAngle]
            }
            DiagnosticIndex::TwoApdl => {
                &[FacialAngle, AbPlaneAngle, PalatalPlaneAngle, AbToMandibularPlane]
            }
            DiagnosticIndex::Vdl => &[PosteriorFacialHeight, AnteriorFacialHeight],
            DiagnosticIndex::Cfd => {
                &[AbToMandibularPlane, PalatalPlaneAngle, FacialAngle, AbPlaneAngle]
            }
            DiagnosticIndex::Ei => &[
                AbToMandibularPlane,
                PalatalPlaneAngle,
                FacialAngle,
                AbPlaneAngle,
                InterincisalAngle,
                UpperLipToELine,
                LowerLipToELine,
            ],
        }
    }

    /// Evaluate the index formula.
    ///
    /// Returns `None` when a required measurement is absent, or for VDL when
    /// the anterior facial height is zero (degenerate tracing).
    pub fn evaluate(&self, ms: &MeasurementSet) -> Option<f64> {
        use Measurement::*;
        let value = match self {
            DiagnosticIndex::Hgi => {
                (ms.get(FacialAngle)? - FACIAL_ANGLE_NORM)
                    + (FMA_NORM - ms.get(Fma)?)
                    + (SN_GOGN_NORM - ms.get(SnGoGn)?)
            }
            DiagnosticIndex::Vgi => {
                ms.get(SaddleAngle)? + ms.get(ArticularAngle)? + ms.get(GonialAngle)?
                    - BJORK_SUM_NORM
            }
            DiagnosticIndex::Apdi => apdi(ms)?,
            DiagnosticIndex::Odi => odi(ms)?,
            DiagnosticIndex::Iapdi => apdi(ms)? - 0.5 * (ms.get(Fma)? - FMA_NORM),
            DiagnosticIndex::Iodi => {
                odi(ms)? + 0.25 * (ms.get(InterincisalAngle)? - INTERINCISAL_NORM)
            }
            DiagnosticIndex::TwoApdl => apdi(ms)? - odi(ms)?,
            DiagnosticIndex::Vdl => {
                let anterior = ms.get(AnteriorFacialHeight)?;
                if anterior == 0.0 {
                    return None;
                }
                100.0 * ms.get(PosteriorFacialHeight)? / anterior
            }
            DiagnosticIndex::Cfd => odi(ms)? + apdi(ms)?,
            DiagnosticIndex::Ei => {
                odi(ms)? + apdi(ms)?
                    + (ms.get(InterincisalAngle)? - INTERINCISAL_NORM) / 5.0
                    - ms.get(UpperLipToELine)?
                    - ms.get(LowerLipToELine)?
            }
        };
        Some(value)
    }
}

/// Kim's overbite depth indicator over the unsigned angle convention.
fn odi(ms: &MeasurementSet) -> Option<f64> {
    use Measurement::*;
    Some(ms.get(AbToMandibularPlane)? + ms.get(PalatalPlaneAngle)?)
}

/// Kim's anteroposterior dysplasia indicator over the unsigned convention.
fn apdi(ms: &MeasurementSet) -> Option<f64> {
    use Measurement::*;
    Some(ms.get(FacialAngle)? + ms.get(AbPlaneAngle)? + ms.get(PalatalPlaneAngle)?)
}

/// The indices that could be computed for one tracing.
///
/// Same contract as [`MeasurementSet`]: a key is present exactly when every
/// input the formula needs was available.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagnosisIndices {
    values: HashMap<DiagnosticIndex, f64>,
}

impl DiagnosisIndices {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a computed index.
    pub fn insert(&mut self, index: DiagnosticIndex, value: f64) {
        self.values.insert(index, value);
    }

    /// Computed value for an index, if its inputs were available.
    pub fn get(&self, index: DiagnosticIndex) -> Option<f64> {
        self.values.get(&index).copied()
    }

    /// Whether the index was computable.
    pub fn contains(&self, index: DiagnosticIndex) -> bool {
        self.values.contains_key(&index)
    }

    /// Number of computed indices.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// No index was computable.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the computed indices.
    pub fn iter(&self) -> impl Iterator<Item = (&DiagnosticIndex, &f64)> {
        self.values.iter()
    }
}
