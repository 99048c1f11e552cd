//! The fixed catalog of clinical measurements.
//!
//! Each [`Measurement`] carries its landmark dependency set and its geometry
//! formula. The enum declaration order is the catalog order: the deriver and
//! therefore the warning list follow it, which keeps diagnostics
//! reproducible across runs.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::core::{angle_at_vertex, angle_between_lines, point_to_line_distance};
use crate::landmark::{Landmark, LandmarkSet};

/// Unit tag of a measurement value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Unit {
    /// Angular value in degrees.
    #[strum(serialize = "degrees")]
    #[serde(rename = "degrees")]
    Degrees,
    /// Linear value in the unit of the input coordinates (norms quoted in mm).
    #[strum(serialize = "millimeters")]
    #[serde(rename = "millimeters")]
    Millimeters,
}

/// A clinically defined cephalometric measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum Measurement {
    /// Sagittal maxillary position: angle at Nasion between Sella and A-Point
    #[strum(serialize = "SNA")]
    #[serde(rename = "SNA")]
    Sna,
    /// Sagittal mandibular position: angle at Nasion between Sella and B-Point
    #[strum(serialize = "SNB")]
    #[serde(rename = "SNB")]
    Snb,
    /// Sagittal jaw relationship: angle at Nasion between A-Point and B-Point
    #[strum(serialize = "ANB")]
    #[serde(rename = "ANB")]
    Anb,
    /// Frankfort-mandibular plane angle
    #[strum(serialize = "FMA")]
    #[serde(rename = "FMA")]
    Fma,
    /// Lower incisor inclination to the mandibular plane
    #[strum(serialize = "IMPA")]
    #[serde(rename = "IMPA")]
    Impa,
    /// Lower incisor inclination to the Frankfort horizontal
    #[strum(serialize = "FMIA")]
    #[serde(rename = "FMIA")]
    Fmia,
    /// Mandibular plane steepness relative to the anterior cranial base
    #[strum(serialize = "SN-GoGn")]
    #[serde(rename = "SN-GoGn")]
    SnGoGn,
    /// Upper incisor inclination to the anterior cranial base
    #[strum(serialize = "U1-SN")]
    #[serde(rename = "U1-SN")]
    U1ToSn,
    /// Upper incisor inclination to the N-A line
    #[strum(serialize = "U1-NA")]
    #[serde(rename = "U1-NA")]
    U1ToNa,
    /// Lower incisor inclination to the N-B line
    #[strum(serialize = "L1-NB")]
    #[serde(rename = "L1-NB")]
    L1ToNb,
    /// Angle between the upper and lower incisor long axes
    #[strum(serialize = "Interincisal Angle")]
    #[serde(rename = "Interincisal Angle")]
    InterincisalAngle,
    /// Chin prominence: Frankfort horizontal to the N-Pog facial plane
    #[strum(serialize = "Facial Angle")]
    #[serde(rename = "Facial Angle")]
    FacialAngle,
    /// Denture base convexity: A-B line to the N-Pog facial plane
    #[strum(serialize = "A-B Plane Angle")]
    #[serde(rename = "A-B Plane Angle")]
    AbPlaneAngle,
    /// Palatal plane cant relative to the Frankfort horizontal
    #[strum(serialize = "Palatal Plane Angle")]
    #[serde(rename = "Palatal Plane Angle")]
    PalatalPlaneAngle,
    /// A-B line inclination to the mandibular plane
    #[strum(serialize = "A-B to Mandibular Plane")]
    #[serde(rename = "A-B to Mandibular Plane")]
    AbToMandibularPlane,
    /// Occlusal plane cant relative to the Frankfort horizontal
    #[strum(serialize = "Occlusal Plane to FH")]
    #[serde(rename = "Occlusal Plane to FH")]
    OcclusalPlaneToFh,
    /// Cranial flexure: angle at Sella between Nasion and Articulare
    #[strum(serialize = "Saddle Angle")]
    #[serde(rename = "Saddle Angle")]
    SaddleAngle,
    /// Angle at Articulare between Sella and Gonion
    #[strum(serialize = "Articular Angle")]
    #[serde(rename = "Articular Angle")]
    ArticularAngle,
    /// Constructed gonial angle: ramus tangent to the mandibular plane
    #[strum(serialize = "Gonial Angle")]
    #[serde(rename = "Gonial Angle")]
    GonialAngle,
    /// Cranial base flexure: angle at Sella between Nasion and Basion
    #[strum(serialize = "Cranial Base Angle")]
    #[serde(rename = "Cranial Base Angle")]
    CranialBaseAngle,
    /// Growth direction: Frankfort horizontal to the S-Gn axis
    #[strum(serialize = "Y-Axis")]
    #[serde(rename = "Y-Axis")]
    YAxis,
    /// Anterior cranial base length (S-N)
    #[strum(serialize = "Anterior Cranial Base")]
    #[serde(rename = "Anterior Cranial Base")]
    AnteriorCranialBase,
    /// Posterior cranial base length (S-Ar)
    #[strum(serialize = "Posterior Cranial Base")]
    #[serde(rename = "Posterior Cranial Base")]
    PosteriorCranialBase,
    /// Mandibular body length (Go-Me)
    #[strum(serialize = "Mandibular Body Length")]
    #[serde(rename = "Mandibular Body Length")]
    MandibularBodyLength,
    /// Ramus height (Ar-Go)
    #[strum(serialize = "Ramus Height")]
    #[serde(rename = "Ramus Height")]
    RamusHeight,
    /// Effective mandibular length (Co-Gn)
    #[strum(serialize = "Mandibular Length")]
    #[serde(rename = "Mandibular Length")]
    MandibularLength,
    /// Anterior facial height (N-Me)
    #[strum(serialize = "Anterior Facial Height")]
    #[serde(rename = "Anterior Facial Height")]
    AnteriorFacialHeight,
    /// Posterior facial height (S-Go)
    #[strum(serialize = "Posterior Facial Height")]
    #[serde(rename = "Posterior Facial Height")]
    PosteriorFacialHeight,
    /// Horizontal incisor overlap along the Frankfort horizontal
    #[strum(serialize = "Overjet")]
    #[serde(rename = "Overjet")]
    Overjet,
    /// Vertical incisor overlap across the Frankfort horizontal
    #[strum(serialize = "Overbite")]
    #[serde(rename = "Overbite")]
    Overbite,
    /// Upper lip distance to the Ricketts esthetic line
    #[strum(serialize = "Upper Lip to E-Line")]
    #[serde(rename = "Upper Lip to E-Line")]
    UpperLipToELine,
    /// Lower lip distance to the Ricketts esthetic line
    #[strum(serialize = "Lower Lip to E-Line")]
    #[serde(rename = "Lower Lip to E-Line")]
    LowerLipToELine,
}

impl Measurement {
    /// Unit of the computed value.
    pub fn unit(&self) -> Unit {
        use Measurement::*;
        match self {
            Sna | Snb | Anb | Fma | Impa | Fmia | SnGoGn | U1ToSn | U1ToNa | L1ToNb
            | InterincisalAngle | FacialAngle | AbPlaneAngle | PalatalPlaneAngle
            | AbToMandibularPlane | OcclusalPlaneToFh | SaddleAngle | ArticularAngle
            | GonialAngle | CranialBaseAngle | YAxis => Unit::Degrees,
            AnteriorCranialBase | PosteriorCranialBase | MandibularBodyLength | RamusHeight
            | MandibularLength | AnteriorFacialHeight | PosteriorFacialHeight | Overjet
            | Overbite | UpperLipToELine | LowerLipToELine => Unit::Millimeters,
        }
    }

    /// Landmarks this measurement requires.
    ///
    /// The deriver checks exactly this set; [`Measurement::evaluate`] reads
    /// exactly these landmarks and nothing else.
    pub fn required_landmarks(&self) -> &'static [Landmark] {
        use Landmark::*;
        match self {
            Measurement::Sna => &[Sella, Nasion, APoint],
            Measurement::Snb => &[Sella, Nasion, BPoint],
            Measurement::Anb => &[APoint, Nasion, BPoint],
            Measurement::Fma => &[Porion, Orbitale, CorpusLeft, Menton],
            Measurement::Impa => &[Mn1Root, Mn1Crown, CorpusLeft, Menton],
            Measurement::Fmia => &[Porion, Orbitale, Mn1Root, Mn1Crown],
            Measurement::SnGoGn => &[Sella, Nasion, CorpusLeft, Menton],
            Measurement::U1ToSn => &[Mx1Root, Mx1Crown, Sella, Nasion],
            Measurement::U1ToNa => &[Mx1Root, Mx1Crown, Nasion, APoint],
            Measurement::L1ToNb => &[Mn1Root, Mn1Crown, Nasion, BPoint],
            Measurement::InterincisalAngle => &[Mx1Root, Mx1Crown, Mn1Root, Mn1Crown],
            Measurement::FacialAngle => &[Porion, Orbitale, Nasion, Pogonion],
            Measurement::AbPlaneAngle => &[APoint, BPoint, Nasion, Pogonion],
            Measurement::PalatalPlaneAngle => {
                &[Porion, Orbitale, AnteriorNasalSpine, PosteriorNasalSpine]
            }
            Measurement::AbToMandibularPlane => &[APoint, BPoint, CorpusLeft, Menton],
            Measurement::OcclusalPlaneToFh => {
                &[Porion, Orbitale, Mx1Crown, Mn1Crown, Mx6Distal, Mn6Distal]
            }
            Measurement::SaddleAngle => &[Nasion, Sella, Articulare],
            Measurement::ArticularAngle => &[Sella, Articulare, Gonion],
            Measurement::GonialAngle => &[Condylion, RamusDown, CorpusLeft, Menton],
            Measurement::CranialBaseAngle => &[Nasion, Sella, Basion],
            Measurement::YAxis => &[Porion, Orbitale, Sella, Gnathion],
            Measurement::AnteriorCranialBase => &[Sella, Nasion],
            Measurement::PosteriorCranialBase => &[Sella, Articulare],
            Measurement::MandibularBodyLength => &[Gonion, Menton],
            Measurement::RamusHeight => &[Articulare, Gonion],
            Measurement::MandibularLength => &[Condylion, Gnathion],
            Measurement::AnteriorFacialHeight => &[Nasion, Menton],
            Measurement::PosteriorFacialHeight => &[Sella, Gonion],
            Measurement::Overjet | Measurement::Overbite => {
                &[Porion, Orbitale, Mx1Crown, Mn1Crown]
            }
            Measurement::UpperLipToELine => &[Pronasale, SoftTissuePogonion, UpperLip],
            Measurement::LowerLipToELine => &[Pronasale, SoftTissuePogonion, LowerLip],
        }
    }

    /// Evaluate the geometry formula against a landmark set.
    ///
    /// Returns `None` when any required landmark is absent; the deriver
    /// turns that into a skip-and-warn, never an error.
    ///
    /// Line-angle formulas are the directed difference of the first line's
    /// direction minus the second's, reduced mod 180. The operand order per
    /// measurement selects which of the two supplementary angles is the
    /// clinically reported one (U1-SN obtuse, FMA acute, and so on) in the
    /// standard image frame; endpoint order within a line never matters.
    pub fn evaluate(&self, lm: &LandmarkSet) -> Option<f64> {
        use Landmark::*;
        let value = match self {
            Measurement::Sna => vertex(lm, Sella, Nasion, APoint)?,
            Measurement::Snb => vertex(lm, Sella, Nasion, BPoint)?,
            Measurement::Anb => vertex(lm, APoint, Nasion, BPoint)?,
            Measurement::Fma => lines(lm, CorpusLeft, Menton, Porion, Orbitale)?,
            Measurement::Impa => lines(lm, Mn1Root, Mn1Crown, CorpusLeft, Menton)?,
            Measurement::Fmia => lines(lm, Porion, Orbitale, Mn1Root, Mn1Crown)?,
            Measurement::SnGoGn => lines(lm, CorpusLeft, Menton, Sella, Nasion)?,
            Measurement::U1ToSn => lines(lm, Sella, Nasion, Mx1Root, Mx1Crown)?,
            Measurement::U1ToNa => lines(lm, Nasion, APoint, Mx1Root, Mx1Crown)?,
            Measurement::L1ToNb => lines(lm, Mn1Root, Mn1Crown, Nasion, BPoint)?,
            Measurement::InterincisalAngle => lines(lm, Mx1Root, Mx1Crown, Mn1Root, Mn1Crown)?,
            Measurement::FacialAngle => lines(lm, Nasion, Pogonion, Porion, Orbitale)?,
            Measurement::AbPlaneAngle => lines(lm, APoint, BPoint, Nasion, Pogonion)?,
            Measurement::PalatalPlaneAngle => {
                lines(lm, Porion, Orbitale, AnteriorNasalSpine, PosteriorNasalSpine)?
            }
            Measurement::AbToMandibularPlane => lines(lm, APoint, BPoint, CorpusLeft, Menton)?,
            Measurement::OcclusalPlaneToFh => {
                let incisal_mid = lm.get(Mx1Crown)?.midpoint(lm.get(Mn1Crown)?);
                let molar_mid = lm.get(Mx6Distal)?.midpoint(lm.get(Mn6Distal)?);
                angle_between_lines(lm.get(Porion)?, lm.get(Orbitale)?, &incisal_mid, &molar_mid)
            }
            Measurement::SaddleAngle => vertex(lm, Nasion, Sella, Articulare)?,
            Measurement::ArticularAngle => vertex(lm, Sella, Articulare, Gonion)?,
            Measurement::GonialAngle => lines(lm, CorpusLeft, Menton, Condylion, RamusDown)?,
            Measurement::CranialBaseAngle => vertex(lm, Nasion, Sella, Basion)?,
            Measurement::YAxis => lines(lm, Sella, Gnathion, Porion, Orbitale)?,
            Measurement::AnteriorCranialBase => dist(lm, Sella, Nasion)?,
            Measurement::PosteriorCranialBase => dist(lm, Sella, Articulare)?,
            Measurement::MandibularBodyLength => dist(lm, Gonion, Menton)?,
            Measurement::RamusHeight => dist(lm, Articulare, Gonion)?,
            Measurement::MandibularLength => dist(lm, Condylion, Gnathion)?,
            Measurement::AnteriorFacialHeight => dist(lm, Nasion, Menton)?,
            Measurement::PosteriorFacialHeight => dist(lm, Sella, Gonion)?,
            Measurement::Overjet => incisor_offset(lm, IncisorAxis::AlongFh)?,
            Measurement::Overbite => incisor_offset(lm, IncisorAxis::AcrossFh)?,
            Measurement::UpperLipToELine => eline_distance(lm, UpperLip)?,
            Measurement::LowerLipToELine => eline_distance(lm, LowerLip)?,
        };
        Some(value)
    }
}

fn vertex(lm: &LandmarkSet, p1: Landmark, v: Landmark, p3: Landmark) -> Option<f64> {
    Some(angle_at_vertex(lm.get(p1)?, lm.get(v)?, lm.get(p3)?))
}

fn lines(lm: &LandmarkSet, a: Landmark, b: Landmark, c: Landmark, d: Landmark) -> Option<f64> {
    Some(angle_between_lines(lm.get(a)?, lm.get(b)?, lm.get(c)?, lm.get(d)?))
}

fn dist(lm: &LandmarkSet, a: Landmark, b: Landmark) -> Option<f64> {
    Some(lm.get(a)?.distance(lm.get(b)?))
}

/// Which component of the incisor-tip offset to measure.
enum IncisorAxis {
    /// Along the Frankfort horizontal: overjet.
    AlongFh,
    /// Across the Frankfort horizontal: overbite.
    AcrossFh,
}

/// Decompose the lower-incisor-tip offset relative to the upper incisor tip
/// along or across the Frankfort horizontal direction.
///
/// The reference line runs through the upper incisor tip with the FH
/// direction (or its perpendicular); a degenerate FH (Porion and Orbitale
/// coincident) collapses the line and the primitive falls back to the plain
/// tip-to-tip distance.
fn incisor_offset(lm: &LandmarkSet, axis: IncisorAxis) -> Option<f64> {
    use Landmark::*;
    let po = lm.get(Porion)?;
    let or = lm.get(Orbitale)?;
    let mx = lm.get(Mx1Crown)?;
    let mn = lm.get(Mn1Crown)?;

    let dx = or.x - po.x;
    let dy = or.y - po.y;
    let line_end = match axis {
        // Perpendicular to FH: the residual is the along-FH component.
        IncisorAxis::AlongFh => mx.offset(-dy, dx),
        IncisorAxis::AcrossFh => mx.offset(dx, dy),
    };

    Some(point_to_line_distance(mn, mx, &line_end))
}

fn eline_distance(lm: &LandmarkSet, lip: Landmark) -> Option<f64> {
    use Landmark::*;
    Some(point_to_line_distance(
        lm.get(lip)?,
        lm.get(Pronasale)?,
        lm.get(SoftTissuePogonion)?,
    ))
}
