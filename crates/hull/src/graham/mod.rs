//! Graham scan over integer points.
//!
//! Steps
//! - De-duplicate the working copy, pick the anchor (lowest `y`, then lowest `x`)
//!   by index, translate the rest so the anchor sits at `ORIGIN`.
//! - Sort by polar angle (`polar::sort_by_polar_angle`), nearer first on ties.
//! - Sweep with `HullStack`: pop while the top two points and the candidate do
//!   not make a strict left turn, then push the candidate.
//! - Translate back; the anchor is the first vertex, order is counter-clockwise.
//!
//! Collinear points on hull edges are discarded (`turn <= 0` pops), so the
//! result is strictly convex. All-collinear inputs reduce to their two extreme
//! points; a single distinct point is returned as a one-vertex hull.

mod stack;

use crate::cfg;
use crate::error::HullError;
use crate::perimeter::perimeter;
use crate::point::{turn, Point, ORIGIN};
use crate::polar::sort_by_polar_angle;
use stack::HullStack;

/// Convex hull as a counter-clockwise vertex cycle starting at the anchor.
///
/// Invariants:
/// - Vertices are distinct.
/// - `vertices[0]` is the minimal point by `(y, x)`.
/// - For three or more vertices every consecutive triple turns strictly left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hull {
    vertices: Vec<Point>,
}

impl Hull {
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    /// First vertex; the starting point of the sweep.
    #[inline]
    pub fn anchor(&self) -> Point {
        self.vertices[0]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// A hull always holds at least one vertex.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// One or two vertices: a point or a segment.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Closed-polygon perimeter (see `perimeter::perimeter`).
    pub fn perimeter(&self) -> f64 {
        perimeter(&self.vertices)
    }

    /// Edges `(v[i], v[i+1])`, including the closing edge back to the anchor.
    ///
    /// A one-vertex hull has no edges; a two-vertex hull has both directions.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        let count = if n < 2 { 0 } else { n };
        (0..count).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Exact inside-or-on-boundary test.
    pub fn contains(&self, p: Point) -> bool {
        match self.vertices.as_slice() {
            [a] => *a == p,
            [a, b] => on_segment(*a, *b, p),
            _ => self.edges().all(|(a, b)| turn(a, b, p) >= 0),
        }
    }

    /// Twice the enclosed area (shoelace around the anchor); zero when degenerate.
    pub fn double_area(&self) -> i128 {
        let a = self.anchor();
        self.vertices
            .windows(2)
            .skip(1)
            .map(|w| turn(a, w[0], w[1]))
            .sum()
    }
}

fn on_segment(a: Point, b: Point, p: Point) -> bool {
    if turn(a, b, p) != 0 {
        return false;
    }
    let (pa, pb) = (p.to(a), p.to(b));
    let dot = (pa.x as i128) * (pb.x as i128) + (pa.y as i128) * (pb.y as i128);
    dot <= 0
}

/// Build the convex hull of `points` (any order, duplicates allowed).
///
/// Errors
/// - `HullError::Empty` for an empty slice.
/// - `HullError::CoordinateOutOfRange` if a coordinate leaves the `i32` range.
pub fn convex_hull(points: &[Point]) -> Result<Hull, HullError> {
    if points.is_empty() {
        return Err(HullError::Empty);
    }
    if let Some(p) = points
        .iter()
        .find(|p| !cfg::in_range(p.x()) || !cfg::in_range(p.y()))
    {
        return Err(HullError::out_of_range(p.x(), p.y()));
    }

    let mut pts = points.to_vec();
    pts.sort_unstable();
    pts.dedup();

    // Keys are distinct after dedup, so the minimum is unique.
    let (anchor_idx, anchor) = pts
        .iter()
        .copied()
        .enumerate()
        .min_by_key(|(_, p)| p.anchor_key())
        .ok_or(HullError::Empty)?;
    if pts.len() == 1 {
        return Ok(Hull {
            vertices: vec![anchor],
        });
    }

    let relative: Vec<Point> = pts
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != anchor_idx)
        .map(|(_, p)| p.translate(-anchor.x(), -anchor.y()))
        .collect();
    let sorted = sort_by_polar_angle(relative);

    let mut stack = HullStack::with_capacity(sorted.len() + 1);
    stack.push(ORIGIN);
    for p in sorted {
        // Discard until (below_top, top, p) is a strict left turn.
        while let Some((below, top)) = stack.top_two() {
            if turn(below, top, p) > 0 {
                break;
            }
            stack.pop();
        }
        stack.push(p);
    }

    let vertices = stack
        .into_vec()
        .into_iter()
        .map(|p| p.translate(anchor.x(), anchor.y()))
        .collect();
    Ok(Hull { vertices })
}
