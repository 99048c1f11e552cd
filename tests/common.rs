//! Test fixtures for the analysis pipeline.
//!
//! Coordinates are image-space pixels (origin top-left, y grows downward)
//! for a synthetic adult lateral tracing. The values are geometrically
//! consistent — B-Point sits angularly between the Sella and A-Point rays
//! seen from Nasion, as in a real skull — but are not calibrated to any
//! clinical dataset.

#![allow(dead_code)]

use kapala_ceph::{CephPoint, Landmark, LandmarkSet};

/// A complete tracing: every landmark in the vocabulary.
pub fn full_tracing() -> LandmarkSet {
    let mut lm = LandmarkSet::new();
    lm.insert(Landmark::Sella, CephPoint::new(400.0, 300.0));
    lm.insert(Landmark::Nasion, CephPoint::new(560.0, 290.0));
    lm.insert(Landmark::Porion, CephPoint::new(330.0, 340.0));
    lm.insert(Landmark::Orbitale, CephPoint::new(545.0, 360.0));
    lm.insert(Landmark::Basion, CephPoint::new(350.0, 400.0));
    lm.insert(Landmark::Articulare, CephPoint::new(360.0, 390.0));
    lm.insert(Landmark::Condylion, CephPoint::new(365.0, 355.0));
    lm.insert(Landmark::AnteriorNasalSpine, CephPoint::new(580.0, 420.0));
    lm.insert(Landmark::PosteriorNasalSpine, CephPoint::new(430.0, 420.0));
    lm.insert(Landmark::APoint, CephPoint::new(585.0, 450.0));
    lm.insert(Landmark::BPoint, CephPoint::new(575.0, 540.0));
    lm.insert(Landmark::Pogonion, CephPoint::new(570.0, 580.0));
    lm.insert(Landmark::Gnathion, CephPoint::new(560.0, 595.0));
    lm.insert(Landmark::Menton, CephPoint::new(545.0, 600.0));
    lm.insert(Landmark::Gonion, CephPoint::new(390.0, 540.0));
    lm.insert(Landmark::CorpusLeft, CephPoint::new(400.0, 550.0));
    lm.insert(Landmark::RamusDown, CephPoint::new(370.0, 480.0));
    lm.insert(Landmark::Mx1Crown, CephPoint::new(590.0, 500.0));
    lm.insert(Landmark::Mx1Root, CephPoint::new(575.0, 440.0));
    lm.insert(Landmark::Mn1Crown, CephPoint::new(585.0, 505.0));
    lm.insert(Landmark::Mn1Root, CephPoint::new(570.0, 560.0));
    lm.insert(Landmark::Mx6Distal, CephPoint::new(480.0, 490.0));
    lm.insert(Landmark::Mn6Distal, CephPoint::new(475.0, 500.0));
    lm.insert(Landmark::Pronasale, CephPoint::new(640.0, 400.0));
    lm.insert(Landmark::SoftTissuePogonion, CephPoint::new(585.0, 585.0));
    lm.insert(Landmark::UpperLip, CephPoint::new(625.0, 470.0));
    lm.insert(Landmark::LowerLip, CephPoint::new(620.0, 520.0));
    lm
}

/// Just the sagittal core: Sella, Nasion, A-Point, B-Point.
///
/// Same coordinates as [`full_tracing`], so results from the two fixtures
/// are directly comparable.
pub fn sagittal_tracing() -> LandmarkSet {
    subset(
        &full_tracing(),
        &[
            Landmark::Sella,
            Landmark::Nasion,
            Landmark::APoint,
            Landmark::BPoint,
        ],
    )
}

/// Copy of `lm` restricted to the given landmarks.
pub fn subset(lm: &LandmarkSet, keep: &[Landmark]) -> LandmarkSet {
    keep.iter()
        .filter_map(|l| lm.get(*l).map(|p| (*l, *p)))
        .collect()
}

/// Copy of `lm` with one landmark removed.
pub fn without(lm: &LandmarkSet, drop: Landmark) -> LandmarkSet {
    lm.iter()
        .filter(|(l, _)| **l != drop)
        .map(|(l, p)| (*l, *p))
        .collect()
}
