//! 2-D landmark coordinate type.

use serde::{Deserialize, Serialize};

/// A 2-D point in image space.
///
/// All pipeline math is double precision; values are stored exactly as
/// digitized and never rounded internally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CephPoint {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl CephPoint {
    /// Create a new point.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: &CephPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Midpoint between this point and another.
    #[inline]
    pub fn midpoint(&self, other: &CephPoint) -> CephPoint {
        CephPoint::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Point translated by the given offsets.
    #[inline]
    pub fn offset(&self, dx: f64, dy: f64) -> CephPoint {
        CephPoint::new(self.x + dx, self.y + dy)
    }

    /// Direction angle of the ray from this point to `other`, in radians.
    ///
    /// Uses `atan2`, so coincident points yield 0.0 by convention.
    #[inline]
    pub fn direction_to(&self, other: &CephPoint) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Both coordinates are finite numbers.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
