//! Integer points, displacement vectors, and exact planar predicates.
//!
//! - `Point`: immutable lattice point with value equality/hashing.
//! - `Vec2`: transient displacement between two points (`nalgebra::Vector2<i64>`).
//! - `distance`, `pseudoscalar_product`, `turn`: pure helpers, exact up to the
//!   final square root.

use nalgebra::Vector2;
use std::fmt;

/// Displacement `(dx, dy)` between two points.
pub type Vec2 = Vector2<i64>;

/// Lattice point `(x, y)`.
///
/// Fields are private: points are only built by `new`/`From` and derived by
/// `translate`, never edited in place.
///
/// Ordering is lexicographic by `(x, y)`; it is only used for dedup, the hull
/// anchor uses `(y, x)` (see `Point::anchor_key`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    x: i64,
    y: i64,
}

/// The point `(0, 0)`; the anchor once points are anchor-relative.
pub const ORIGIN: Point = Point { x: 0, y: 0 };

impl Point {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn x(&self) -> i64 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> i64 {
        self.y
    }

    /// New point shifted by `(dx, dy)`.
    #[inline]
    pub fn translate(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Displacement from `self` to `other`.
    #[inline]
    pub fn to(self, other: Point) -> Vec2 {
        Vec2::new(other.x - self.x, other.y - self.y)
    }

    /// Key for anchor selection: lowest `y`, then lowest `x`.
    #[inline]
    pub fn anchor_key(&self) -> (i64, i64) {
        (self.y, self.x)
    }

    /// Exact squared distance to `other`.
    #[inline]
    pub fn dist2(self, other: Point) -> i128 {
        let dx = (other.x - self.x) as i128;
        let dy = (other.y - self.y) as i128;
        dx * dx + dy * dy
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x as i64, y as i64)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Euclidean distance; squared terms are summed in `i128` before one `sqrt`.
#[inline]
pub fn distance(p1: Point, p2: Point) -> f64 {
    (p1.dist2(p2) as f64).sqrt()
}

/// Cross product `v1.x*v2.y - v2.x*v1.y`.
///
/// Positive: `v2` turns left (CCW) from `v1`; zero: collinear; negative: right.
#[inline]
pub fn pseudoscalar_product(v1: Vec2, v2: Vec2) -> i128 {
    (v1.x as i128) * (v2.y as i128) - (v2.x as i128) * (v1.y as i128)
}

/// Turn made at `b` when walking `a → b → c` (sign as in `pseudoscalar_product`).
#[inline]
pub fn turn(a: Point, b: Point, c: Point) -> i128 {
    pseudoscalar_product(a.to(b), b.to(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn distance_pythagorean_triple() {
        assert_eq!(distance(ORIGIN, Point::new(3, 4)), 5.0);
        assert_eq!(distance(Point::new(-1, -1), Point::new(2, 3)), 5.0);
        assert_eq!(distance(Point::new(7, 7), Point::new(7, 7)), 0.0);
    }

    #[test]
    fn distance_extreme_coordinates_do_not_wrap() {
        let a = Point::new(i32::MIN as i64, i32::MIN as i64);
        let b = Point::new(i32::MAX as i64, i32::MAX as i64);
        let side = (i32::MAX as f64) - (i32::MIN as f64);
        let d = distance(a, b);
        assert!((d - side * std::f64::consts::SQRT_2).abs() / d < 1e-12);
    }

    #[test]
    fn pseudoscalar_sign_encodes_turn() {
        let east = Vec2::new(1, 0);
        let north = Vec2::new(0, 1);
        assert_eq!(pseudoscalar_product(east, north), 1);
        assert_eq!(pseudoscalar_product(north, east), -1);
        assert_eq!(pseudoscalar_product(east, Vec2::new(-5, 0)), 0);
        // a→b→c: left turn, straight, right turn
        let (a, b) = (ORIGIN, Point::new(2, 0));
        assert!(turn(a, b, Point::new(3, 1)) > 0);
        assert_eq!(turn(a, b, Point::new(5, 0)), 0);
        assert!(turn(a, b, Point::new(3, -1)) < 0);
    }

    #[test]
    fn pseudoscalar_wide_inputs() {
        let big = (1i64 << 32) - 1;
        let v1 = Vec2::new(big, -big);
        let v2 = Vec2::new(big, big);
        let expected = 2 * (big as i128) * (big as i128);
        assert_eq!(pseudoscalar_product(v1, v2), expected);
    }

    #[test]
    fn translate_and_value_equality() {
        let p = Point::new(3, -2);
        let q = p.translate(-3, 2);
        assert_eq!(q, ORIGIN);
        assert_eq!(q.translate(3, -2), p);
        let set: HashSet<Point> = [p, Point::new(3, -2), q].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert_eq!(Point::from((4, 5)), Point::new(4, 5));
        assert_eq!(p.to(ORIGIN), Vec2::new(-3, 2));
        assert_eq!(p.to_string(), "(3, -2)");
        assert_eq!((p.x(), p.y()), (3, -2));
    }
}
