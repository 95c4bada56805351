//! Growable stack of tentative hull vertices.

use crate::point::Point;

/// Stack used by the sweep; the bottom element is the anchor and is never popped
/// by the sweep (it only pops while two elements are present).
#[derive(Clone, Debug, Default)]
pub(crate) struct HullStack {
    items: Vec<Point>,
}

impl HullStack {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            items: Vec::with_capacity(n),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, p: Point) {
        self.items.push(p);
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<Point> {
        self.items.pop()
    }

    #[inline]
    pub(crate) fn top(&self) -> Option<Point> {
        self.items.last().copied()
    }

    #[inline]
    pub(crate) fn below_top(&self) -> Option<Point> {
        let n = self.items.len();
        if n < 2 {
            None
        } else {
            Some(self.items[n - 2])
        }
    }

    /// `(below_top, top)` when the stack holds at least two points.
    #[inline]
    pub(crate) fn top_two(&self) -> Option<(Point, Point)> {
        Some((self.below_top()?, self.top()?))
    }

    pub(crate) fn into_vec(self) -> Vec<Point> {
        self.items
    }
}
