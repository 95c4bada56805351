//! Perimeter of a closed vertex cycle.

use crate::error::HullError;
use crate::graham::convex_hull;
use crate::point::{distance, Point};

/// Sum of `distance(v[i-1], v[i])` plus the closing edge `v[n-1] → v[0]`.
///
/// One vertex gives `0.0`; two vertices give twice their distance (the segment
/// is walked there and back). An empty slice gives `0.0`.
pub fn perimeter(vertices: &[Point]) -> f64 {
    let (first, last) = match (vertices.first(), vertices.last()) {
        (Some(f), Some(l)) => (*f, *l),
        _ => return 0.0,
    };
    let open: f64 = vertices.windows(2).map(|w| distance(w[0], w[1])).sum();
    open + distance(last, first)
}

/// Build the hull of `points` and return its perimeter.
pub fn convex_hull_perimeter(points: &[Point]) -> Result<f64, HullError> {
    Ok(convex_hull(points)?.perimeter())
}
