//! Polar-angle ordering around the origin with a per-sort angle cache.
//!
//! Points are expected in anchor-relative coordinates: the anchor sits at
//! `ORIGIN` and every other point has `y > 0`, or `y == 0 && x > 0`. Angles then
//! lie in `[0, π)`, which keeps the exact cross-product tie-break consistent
//! with the `atan2` key.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::point::{pseudoscalar_product, Point, ORIGIN};

/// Memoized `atan2` values, owned by a single sort.
#[derive(Debug, Default)]
pub struct AngleCache {
    angles: HashMap<Point, f64>,
}

impl AngleCache {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            angles: HashMap::with_capacity(n),
        }
    }

    /// Angle of `p` from the positive x-axis, `atan2(y, x)`.
    pub fn angle(&mut self, p: Point) -> f64 {
        *self
            .angles
            .entry(p)
            .or_insert_with(|| (p.y() as f64).atan2(p.x() as f64))
    }

    /// Number of distinct points seen so far.
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Total order: angle ascending, then distance from `ORIGIN` ascending.
    ///
    /// Bitwise-equal angles of non-collinear points (only reachable with very
    /// large coordinates) are split by the exact cross product.
    pub fn compare(&mut self, a: Point, b: Point) -> Ordering {
        let ta = self.angle(a);
        let tb = self.angle(b);
        ta.total_cmp(&tb)
            .then_with(|| 0.cmp(&pseudoscalar_product(ORIGIN.to(a), ORIGIN.to(b))))
            .then_with(|| a.dist2(ORIGIN).cmp(&b.dist2(ORIGIN)))
    }
}

/// Sort anchor-relative points by polar angle (nearer first on equal angles).
pub fn sort_by_polar_angle(mut points: Vec<Point>) -> Vec<Point> {
    let mut cache = AngleCache::with_capacity(points.len());
    points.sort_by(|a, b| cache.compare(*a, *b));
    points
}
