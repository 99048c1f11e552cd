//! Clinical norm table with built-in defaults and YAML overrides.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use super::error::ConfigLoadError;
use crate::measurement::{Measurement, Unit};

/// Display metadata for one measurement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeasurementNorm {
    /// Clinical mean value.
    pub mean: f64,
    /// Unit the mean and range are quoted in.
    pub unit: Unit,
    /// Lower bound of the normal range.
    pub range_min: f64,
    /// Upper bound of the normal range.
    pub range_max: f64,
}

/// Where a value sits relative to its normal range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NormBand {
    /// Below the normal range.
    Below,
    /// Within the normal range (bounds inclusive).
    Within,
    /// Above the normal range.
    Above,
}

/// Partial per-measurement override parsed from YAML.
#[derive(Debug, Deserialize)]
struct NormOverride {
    mean: Option<f64>,
    range_min: Option<f64>,
    range_max: Option<f64>,
}

/// Clinical norms for the full measurement catalog.
///
/// Always complete: construction starts from the built-in table and
/// overrides replace individual fields, so lookups are total.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormTable {
    norms: HashMap<Measurement, MeasurementNorm>,
}

impl Default for NormTable {
    fn default() -> Self {
        Self {
            norms: Measurement::iter().map(|m| (m, builtin(m))).collect(),
        }
    }
}

impl NormTable {
    /// Load the built-in table with overrides from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from the default path (configs/norms.yaml) if present,
    /// otherwise the built-in table.
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/norms.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply per-measurement overrides from a YAML string on top of the
    /// built-in table. Partial files are fine; unknown measurement names are
    /// a parse error.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let overrides: HashMap<Measurement, NormOverride> =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;

        let mut table = Self::default();
        for (measurement, over) in overrides {
            if let Some(norm) = table.norms.get_mut(&measurement) {
                if let Some(mean) = over.mean {
                    norm.mean = mean;
                }
                if let Some(min) = over.range_min {
                    norm.range_min = min;
                }
                if let Some(max) = over.range_max {
                    norm.range_max = max;
                }
            }
        }
        Ok(table)
    }

    /// Norm entry for a measurement.
    pub fn norm(&self, measurement: Measurement) -> MeasurementNorm {
        self.norms
            .get(&measurement)
            .copied()
            .unwrap_or_else(|| builtin(measurement))
    }

    /// Classify a computed value against its normal range.
    pub fn classify(&self, measurement: Measurement, value: f64) -> NormBand {
        let norm = self.norm(measurement);
        if value < norm.range_min {
            NormBand::Below
        } else if value > norm.range_max {
            NormBand::Above
        } else {
            NormBand::Within
        }
    }
}

/// Built-in adult norms, unsigned angle convention, linear norms in mm.
fn builtin(measurement: Measurement) -> MeasurementNorm {
    use Measurement::*;
    let (mean, range_min, range_max) = match measurement {
        Sna => (82.0, 79.0, 85.0),
        Snb => (80.0, 77.0, 83.0),
        Anb => (2.0, 0.0, 4.0),
        Fma => (25.0, 20.0, 30.0),
        Impa => (90.0, 85.0, 95.0),
        Fmia => (65.0, 60.0, 70.0),
        SnGoGn => (32.0, 27.0, 37.0),
        U1ToSn => (104.0, 99.0, 109.0),
        U1ToNa => (22.0, 17.0, 27.0),
        L1ToNb => (25.0, 20.0, 30.0),
        InterincisalAngle => (130.0, 120.0, 140.0),
        FacialAngle => (87.0, 84.0, 90.0),
        AbPlaneAngle => (4.6, 0.0, 9.0),
        PalatalPlaneAngle => (1.1, 0.0, 5.0),
        AbToMandibularPlane => (72.0, 65.0, 79.0),
        OcclusalPlaneToFh => (9.3, 2.0, 16.0),
        SaddleAngle => (123.0, 118.0, 128.0),
        ArticularAngle => (143.0, 137.0, 149.0),
        GonialAngle => (130.0, 123.0, 137.0),
        CranialBaseAngle => (130.0, 125.0, 135.0),
        YAxis => (59.4, 53.0, 66.0),
        AnteriorCranialBase => (71.0, 66.0, 76.0),
        PosteriorCranialBase => (36.0, 31.0, 41.0),
        MandibularBodyLength => (71.0, 66.0, 76.0),
        RamusHeight => (44.0, 38.0, 50.0),
        MandibularLength => (120.0, 113.0, 127.0),
        AnteriorFacialHeight => (112.0, 105.0, 119.0),
        PosteriorFacialHeight => (72.0, 65.0, 79.0),
        Overjet => (2.5, 1.0, 4.0),
        Overbite => (2.5, 1.0, 4.0),
        UpperLipToELine => (4.0, 1.0, 7.0),
        LowerLipToELine => (2.0, 0.0, 5.0),
    };

    MeasurementNorm {
        mean,
        unit: measurement.unit(),
        range_min,
        range_max,
    }
}
