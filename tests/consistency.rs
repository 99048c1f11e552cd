//! Numeric consistency tests: clinical oracles and degenerate geometry.

mod common;

use approx::assert_relative_eq;
use common::full_tracing;
use kapala_ceph::core::{
    angle_at_vertex, angle_between_lines, euclidean_distance, line_intersection,
    point_to_line_distance,
};
use kapala_ceph::{CephPoint, Landmark, LandmarkSet, Measurement, analyze};

// ============================================================================
// Clinical oracles
// ============================================================================

#[test]
fn test_anb_agrees_with_sna_minus_snb_on_full_tracing() {
    let report = analyze(&full_tracing());

    let sna = report.measurements.get(Measurement::Sna).unwrap();
    let snb = report.measurements.get(Measurement::Snb).unwrap();
    let anb = report.measurements.get(Measurement::Anb).unwrap();

    assert!(
        (anb - (sna - snb)).abs() < 1e-6,
        "ANB {anb} vs SNA-SNB {}",
        sna - snb
    );
}

#[test]
fn test_anb_agrees_with_sna_minus_snb_on_synthetic_points() {
    let mut lm = LandmarkSet::new();
    lm.insert(Landmark::Sella, CephPoint::new(120.0, 180.0));
    lm.insert(Landmark::Nasion, CephPoint::new(100.0, 150.0));
    lm.insert(Landmark::APoint, CephPoint::new(130.0, 220.0));
    // B-Point angularly between the Sella and A-Point rays, as in a skull.
    lm.insert(Landmark::BPoint, CephPoint::new(128.0, 200.0));

    let report = analyze(&lm);
    let sna = report.measurements.get(Measurement::Sna).unwrap();
    let snb = report.measurements.get(Measurement::Snb).unwrap();
    let anb = report.measurements.get(Measurement::Anb).unwrap();

    assert!((anb - (sna - snb)).abs() < 1e-6);
}

#[test]
fn test_sna_hand_computed_reference() {
    let mut lm = LandmarkSet::new();
    lm.insert(Landmark::Sella, CephPoint::new(120.0, 180.0));
    lm.insert(Landmark::Nasion, CephPoint::new(100.0, 150.0));
    lm.insert(Landmark::APoint, CephPoint::new(130.0, 220.0));

    let report = analyze(&lm);
    let sna = report.measurements.get(Measurement::Sna).unwrap();

    // Rays from Nasion: atan2(30, 20) = 56.310°, atan2(70, 30) = 66.801°.
    assert_relative_eq!(sna, 10.49, epsilon = 0.1);
}

#[test]
fn test_tweed_triangle_sums_to_straight_angle() {
    // FMA, FMIA and IMPA are the interior angles of the Tweed triangle
    // (FH, mandibular plane, lower incisor axis); their directed-angle
    // definitions compose cyclically, so the sum is exactly 180.
    let report = analyze(&full_tracing());

    let fma = report.measurements.get(Measurement::Fma).unwrap();
    let fmia = report.measurements.get(Measurement::Fmia).unwrap();
    let impa = report.measurements.get(Measurement::Impa).unwrap();

    assert!(
        (fma + fmia + impa - 180.0).abs() < 1e-6,
        "Tweed triangle broken: FMA {fma} + FMIA {fmia} + IMPA {impa}"
    );
}

// ============================================================================
// Degenerate geometry
// ============================================================================

#[test]
fn test_point_to_degenerate_line_is_point_distance() {
    let p = CephPoint::new(5.0, 9.0);
    let q = CephPoint::new(2.0, 5.0);

    let d = point_to_line_distance(&p, &q, &q);
    assert_relative_eq!(d, euclidean_distance(&p, &q));
    assert_relative_eq!(d, 5.0);
}

#[test]
fn test_vertex_angle_exactly_straight() {
    let angle = angle_at_vertex(
        &CephPoint::new(-10.0, 0.0),
        &CephPoint::new(0.0, 0.0),
        &CephPoint::new(25.0, 0.0),
    );
    assert_relative_eq!(angle, 180.0, epsilon = 1e-9);
}

#[test]
fn test_parallel_lines_flagged_not_crashed() {
    let result = line_intersection(
        &CephPoint::new(0.0, 0.0),
        &CephPoint::new(10.0, 5.0),
        &CephPoint::new(0.0, 1.0),
        &CephPoint::new(10.0, 6.0),
    );
    assert!(result.parallel);
    assert!(result.point.is_none());
}

// ============================================================================
// Digitization-order symmetry
// ============================================================================

#[test]
fn test_line_angle_survives_reversed_digitization() {
    // Manual digitization frequently records a plane back-to-front; the
    // measurement must not care.
    let (a, b) = (CephPoint::new(330.0, 340.0), CephPoint::new(545.0, 360.0));
    let (c, d) = (CephPoint::new(400.0, 550.0), CephPoint::new(545.0, 600.0));

    let base = angle_between_lines(&a, &b, &c, &d);
    assert_relative_eq!(angle_between_lines(&b, &a, &c, &d), base, epsilon = 1e-9);
    assert_relative_eq!(angle_between_lines(&a, &b, &d, &c), base, epsilon = 1e-9);
    assert_relative_eq!(angle_between_lines(&b, &a, &d, &c), base, epsilon = 1e-9);
}

#[test]
fn test_fma_survives_reversed_mandibular_plane() {
    let lm = full_tracing();
    let reference = analyze(&lm).measurements.get(Measurement::Fma).unwrap();

    // Swap the two mandibular plane landmarks.
    let mut swapped = lm.clone();
    let corpus = *lm.get(Landmark::CorpusLeft).unwrap();
    let menton = *lm.get(Landmark::Menton).unwrap();
    swapped.insert(Landmark::CorpusLeft, menton);
    swapped.insert(Landmark::Menton, corpus);

    let fma = analyze(&swapped).measurements.get(Measurement::Fma).unwrap();
    assert_relative_eq!(fma, reference, epsilon = 1e-9);
}
