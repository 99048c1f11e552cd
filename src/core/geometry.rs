//! Stateless 2-D geometry primitives.
//!
//! Every clinical measurement in the catalog reduces to one of the functions
//! here. All angles are returned in degrees; all distances are in the same
//! (caller-defined) unit as the input coordinates.
//!
//! Degenerate configurations never panic and never produce NaN:
//!
//! - zero-length rays go through `atan2(0, 0) = 0` and produce a value that
//!   is well-defined but not clinically meaningful; callers guard
//! - a zero-length line in [`point_to_line_distance`] falls back to the
//!   point-to-point distance
//! - near-parallel lines in [`line_intersection`] are flagged instead of
//!   dividing by a vanishing determinant

use super::point::CephPoint;

/// Determinant threshold below which two lines count as parallel.
const PARALLEL_EPS: f64 = 1e-10;

/// Angle at `vertex` between the rays toward `p1` and `p3`, in degrees.
///
/// Computed as the absolute difference of the two `atan2` ray directions,
/// folded into [0, 180]: a difference above 180° is replaced by its
/// 360° complement. A difference of exactly 180° (opposite collinear rays)
/// is returned as 180.0 unchanged.
///
/// If `p1` or `p3` coincides with `vertex` the ray direction is undefined;
/// the computation still completes (`atan2(0, 0)` is 0 by convention) but
/// the result carries no clinical meaning.
pub fn angle_at_vertex(p1: &CephPoint, vertex: &CephPoint, p3: &CephPoint) -> f64 {
    let a = vertex.direction_to(p1).to_degrees();
    let b = vertex.direction_to(p3).to_degrees();

    let diff = (a - b).abs();
    if diff > 180.0 { 360.0 - diff } else { diff }
}

/// Angle between the lines `a_start -> a_end` and `b_start -> b_end`,
/// in degrees, in [0, 180).
///
/// The directed `atan2` difference is reduced modulo 180°. Reversing the
/// endpoints of either segment shifts its direction angle by exactly 180°,
/// which the reduction absorbs, so the result is independent of the order
/// the segment endpoints were digitized in.
pub fn angle_between_lines(
    a_start: &CephPoint,
    a_end: &CephPoint,
    b_start: &CephPoint,
    b_end: &CephPoint,
) -> f64 {
    let a = a_start.direction_to(a_end).to_degrees();
    let b = b_start.direction_to(b_end).to_degrees();

    (a - b).rem_euclid(180.0)
}

/// Euclidean distance between two points.
#[inline]
pub fn euclidean_distance(p1: &CephPoint, p2: &CephPoint) -> f64 {
    p1.distance(p2)
}

/// Perpendicular distance from `p` to the infinite line through
/// `line_start` and `line_end`.
///
/// If the two line points coincide the line is degenerate and the function
/// falls back to the plain distance from `p` to that point.
pub fn point_to_line_distance(p: &CephPoint, line_start: &CephPoint, line_end: &CephPoint) -> f64 {
    let dx = line_end.x - line_start.x;
    let dy = line_end.y - line_start.y;
    let len = dx.hypot(dy);

    if len == 0.0 {
        return p.distance(line_start);
    }

    let cross = dx * (p.y - line_start.y) - dy * (p.x - line_start.x);
    cross.abs() / len
}

/// Result of intersecting two infinite lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineIntersection {
    /// Intersection point, absent when the lines are parallel.
    pub point: Option<CephPoint>,
    /// The direction determinant was within epsilon of zero.
    pub parallel: bool,
}

impl LineIntersection {
    /// A unique intersection point exists.
    #[inline]
    pub fn exists(&self) -> bool {
        self.point.is_some()
    }
}

/// Intersect the infinite lines through `a_start -> a_end` and
/// `b_start -> b_end`.
///
/// Solves the 2x2 system for the direction parameters. A determinant within
/// a small epsilon of zero (parallel or coincident lines, or a zero-length
/// segment) yields `parallel = true` and no point rather than an error.
pub fn line_intersection(
    a_start: &CephPoint,
    a_end: &CephPoint,
    b_start: &CephPoint,
    b_end: &CephPoint,
) -> LineIntersection {
    let adx = a_end.x - a_start.x;
    let ady = a_end.y - a_start.y;
    let bdx = b_end.x - b_start.x;
    let bdy = b_end.y - b_start.y;

    let det = adx * bdy - ady * bdx;
    if det.abs() < PARALLEL_EPS {
        return LineIntersection {
            point: None,
            parallel: true,
        };
    }

    let t = ((b_start.x - a_start.x) * bdy - (b_start.y - a_start.y) * bdx) / det;

    LineIntersection {
        point: Some(CephPoint::new(a_start.x + t * adx, a_start.y + t * ady)),
        parallel: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> CephPoint {
        CephPoint::new(x, y)
    }

    #[test]
    fn test_angle_at_vertex_right_angle() {
        let angle = angle_at_vertex(&p(1.0, 0.0), &p(0.0, 0.0), &p(0.0, 1.0));
        assert_relative_eq!(angle, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_angle_at_vertex_folds_reflex() {
        // Rays at +135° and -135°: raw difference 270 folds to 90.
        let angle = angle_at_vertex(&p(-1.0, 1.0), &p(0.0, 0.0), &p(-1.0, -1.0));
        assert_relative_eq!(angle, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_angle_at_vertex_exactly_straight() {
        // Opposite collinear rays sit exactly on the fold boundary.
        let angle = angle_at_vertex(&p(-5.0, 0.0), &p(0.0, 0.0), &p(7.0, 0.0));
        assert_relative_eq!(angle, 180.0, epsilon = 1e-9);
        assert!(angle > 90.0, "straight angle must not fold to zero");
    }

    #[test]
    fn test_angle_at_vertex_zero() {
        let angle = angle_at_vertex(&p(3.0, 3.0), &p(0.0, 0.0), &p(9.0, 9.0));
        assert_relative_eq!(angle, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_angle_at_vertex_degenerate_ray() {
        // p1 == vertex: atan2(0,0) = 0, call completes with a finite value.
        let angle = angle_at_vertex(&p(0.0, 0.0), &p(0.0, 0.0), &p(1.0, 1.0));
        assert!(angle.is_finite());
        assert_relative_eq!(angle, 45.0, epsilon = 1e-9);
    }

    #[test]
    fn test_angle_between_lines_basic() {
        let angle = angle_between_lines(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.0, 0.0), &p(1.0, 1.0));
        assert_relative_eq!(angle, 135.0, epsilon = 1e-9);
    }

    #[test]
    fn test_angle_between_lines_endpoint_reversal() {
        let (a, b, c, d) = (p(10.0, 20.0), p(40.0, 25.0), p(12.0, 60.0), p(30.0, 10.0));

        let base = angle_between_lines(&a, &b, &c, &d);
        assert_relative_eq!(angle_between_lines(&b, &a, &c, &d), base, epsilon = 1e-9);
        assert_relative_eq!(angle_between_lines(&a, &b, &d, &c), base, epsilon = 1e-9);
        assert_relative_eq!(angle_between_lines(&b, &a, &d, &c), base, epsilon = 1e-9);
    }

    #[test]
    fn test_angle_between_lines_obtuse_preserved() {
        // Direction 0° vs direction 170°: the reduction keeps 170, it does
        // not collapse to the acute 10.
        let angle = angle_between_lines(
            &p(0.0, 0.0),
            &p(0.984807753012208, 0.17364817766693),
            &p(0.0, 0.0),
            &p(1.0, 0.0),
        );
        assert_relative_eq!(angle, 10.0, epsilon = 1e-9);

        let angle = angle_between_lines(
            &p(0.0, 0.0),
            &p(1.0, 0.0),
            &p(0.0, 0.0),
            &p(0.984807753012208, 0.17364817766693),
        );
        assert_relative_eq!(angle, 170.0, epsilon = 1e-9);
    }

    #[test]
    fn test_angle_between_parallel_lines_is_zero() {
        let angle = angle_between_lines(&p(0.0, 0.0), &p(2.0, 2.0), &p(5.0, 0.0), &p(8.0, 3.0));
        assert_relative_eq!(angle, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_point_to_line_distance() {
        let d = point_to_line_distance(&p(0.0, 5.0), &p(-10.0, 0.0), &p(10.0, 0.0));
        assert_relative_eq!(d, 5.0);
    }

    #[test]
    fn test_point_to_line_distance_point_beyond_segment() {
        // Infinite line, not a segment: perpendicular foot outside the
        // digitized endpoints still measures the perpendicular.
        let d = point_to_line_distance(&p(100.0, 3.0), &p(0.0, 0.0), &p(1.0, 0.0));
        assert_relative_eq!(d, 3.0);
    }

    #[test]
    fn test_point_to_line_distance_degenerate_line() {
        let q = p(2.0, 2.0);
        let d = point_to_line_distance(&p(5.0, 6.0), &q, &q);
        assert_relative_eq!(d, 5.0);
        assert!(d.is_finite());
    }

    #[test]
    fn test_line_intersection_crossing() {
        let result = line_intersection(
            &p(-1.0, -1.0),
            &p(1.0, 1.0),
            &p(-1.0, 1.0),
            &p(1.0, -1.0),
        );
        assert!(result.exists());
        assert!(!result.parallel);
        let point = result.point.unwrap();
        assert_relative_eq!(point.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(point.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_line_intersection_beyond_segments() {
        // Lines are infinite: segments that do not overlap still intersect.
        let result = line_intersection(&p(0.0, 0.0), &p(1.0, 0.0), &p(5.0, 1.0), &p(5.0, 2.0));
        assert!(result.exists());
        let point = result.point.unwrap();
        assert_relative_eq!(point.x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(point.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_line_intersection_parallel() {
        let result = line_intersection(&p(0.0, 0.0), &p(1.0, 1.0), &p(0.0, 1.0), &p(1.0, 2.0));
        assert!(result.parallel);
        assert!(!result.exists());
    }

    #[test]
    fn test_line_intersection_degenerate_segment() {
        let q = p(3.0, 3.0);
        let result = line_intersection(&q, &q, &p(0.0, 0.0), &p(1.0, 0.0));
        assert!(result.parallel);
        assert!(result.point.is_none());
    }
}
