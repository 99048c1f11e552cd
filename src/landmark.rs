//! Landmark vocabulary and the input map for one tracing.
//!
//! Landmark names form a closed vocabulary so dependency checks are
//! exhaustive enum matches instead of string lookups; a typo is a compile
//! error, not a silently absent measurement. The [`Display`] / serde names
//! are the clinical labels as they appear on a tracing sheet.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum_macros::Display;
use thiserror::Error;

use crate::core::CephPoint;

/// An anatomical landmark on a lateral cephalometric X-ray.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Landmark {
    /// Center of the sella turcica
    Sella,
    /// Most anterior point of the frontonasal suture
    Nasion,
    /// Most superior point of the external auditory meatus
    Porion,
    /// Most inferior point of the orbital rim
    Orbitale,
    /// Most anterior point of the foramen magnum
    Basion,
    /// Intersection of the cranial base and the condylar neck
    Articulare,
    /// Most posterosuperior point of the condyle
    Condylion,
    /// Tip of the anterior nasal spine
    #[strum(serialize = "ANS")]
    #[serde(rename = "ANS")]
    AnteriorNasalSpine,
    /// Tip of the posterior nasal spine
    #[strum(serialize = "PNS")]
    #[serde(rename = "PNS")]
    PosteriorNasalSpine,
    /// Deepest point of the maxillary alveolar concavity
    #[strum(serialize = "A-Point")]
    #[serde(rename = "A-Point")]
    APoint,
    /// Deepest point of the mandibular alveolar concavity
    #[strum(serialize = "B-Point")]
    #[serde(rename = "B-Point")]
    BPoint,
    /// Most anterior point of the bony chin
    Pogonion,
    /// Most anteroinferior point of the bony chin
    Gnathion,
    /// Most inferior point of the mandibular symphysis
    Menton,
    /// Posteroinferior corner of the mandibular angle
    Gonion,
    /// Tangent point on the lower mandibular border
    #[strum(serialize = "Corpus Lt.")]
    #[serde(rename = "Corpus Lt.")]
    CorpusLeft,
    /// Tangent point on the posterior ramus border
    #[strum(serialize = "Ramus Down")]
    #[serde(rename = "Ramus Down")]
    RamusDown,
    /// Incisal tip of the upper central incisor
    #[strum(serialize = "Mx.1 cr")]
    #[serde(rename = "Mx.1 cr")]
    Mx1Crown,
    /// Root apex of the upper central incisor
    #[strum(serialize = "Mx.1 root")]
    #[serde(rename = "Mx.1 root")]
    Mx1Root,
    /// Incisal tip of the lower central incisor
    #[strum(serialize = "Mn.1 cr")]
    #[serde(rename = "Mn.1 cr")]
    Mn1Crown,
    /// Root apex of the lower central incisor
    #[strum(serialize = "Mn.1 root")]
    #[serde(rename = "Mn.1 root")]
    Mn1Root,
    /// Distal occlusal contact of the upper first molar
    #[strum(serialize = "Mx.6 distal")]
    #[serde(rename = "Mx.6 distal")]
    Mx6Distal,
    /// Distal occlusal contact of the lower first molar
    #[strum(serialize = "Mn.6 distal")]
    #[serde(rename = "Mn.6 distal")]
    Mn6Distal,
    /// Tip of the nose on the soft tissue profile
    Pronasale,
    /// Most anterior point of the soft tissue chin
    #[strum(serialize = "Soft Tissue Pogonion")]
    #[serde(rename = "Soft Tissue Pogonion")]
    SoftTissuePogonion,
    /// Most anterior point of the upper lip
    #[strum(serialize = "Upper Lip")]
    #[serde(rename = "Upper Lip")]
    UpperLip,
    /// Most anterior point of the lower lip
    #[strum(serialize = "Lower Lip")]
    #[serde(rename = "Lower Lip")]
    LowerLip,
}

/// Boundary validation failure for a landmark map.
///
/// The pipeline itself assumes validated input; callers that ingest
/// untrusted payloads run [`LandmarkSet::validate`] first.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LandmarkError {
    /// A coordinate was NaN or infinite.
    #[error("non-finite coordinate for landmark '{0}'")]
    NonFiniteCoordinate(Landmark),
}

/// The digitized landmarks of one tracing.
///
/// The map may be partial: absence of a key means the landmark was not
/// located for this analysis, and every downstream consumer treats that as
/// "skip what depends on it", never as an error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkSet {
    points: HashMap<Landmark, CephPoint>,
}

impl LandmarkSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a landmark position.
    pub fn insert(&mut self, landmark: Landmark, point: CephPoint) {
        self.points.insert(landmark, point);
    }

    /// Position of a landmark, if digitized.
    pub fn get(&self, landmark: Landmark) -> Option<&CephPoint> {
        self.points.get(&landmark)
    }

    /// Whether the landmark was digitized.
    pub fn contains(&self, landmark: Landmark) -> bool {
        self.points.contains_key(&landmark)
    }

    /// Number of digitized landmarks.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// No landmarks digitized at all.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the digitized landmarks.
    pub fn iter(&self) -> impl Iterator<Item = (&Landmark, &CephPoint)> {
        self.points.iter()
    }

    /// Reject maps with non-finite coordinates.
    ///
    /// Malformed payloads are a caller responsibility; this is the guard a
    /// request boundary runs before invoking the pipeline.
    pub fn validate(&self) -> Result<(), LandmarkError> {
        for (landmark, point) in &self.points {
            if !point.is_finite() {
                return Err(LandmarkError::NonFiniteCoordinate(*landmark));
            }
        }
        Ok(())
    }
}

impl FromIterator<(Landmark, CephPoint)> for LandmarkSet {
    fn from_iter<I: IntoIterator<Item = (Landmark, CephPoint)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
