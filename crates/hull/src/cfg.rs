//! Coordinate limits accepted by the hull builder.
//!
//! Policy
//! - Inputs are restricted to the `i32` range. Anchor-relative coordinates then
//!   fit in 33 bits, so cross products and squared lengths fit comfortably in
//!   `i128` and translations never wrap in `i64`.

/// Smallest accepted coordinate.
pub const COORD_MIN: i64 = i32::MIN as i64;
/// Largest accepted coordinate.
pub const COORD_MAX: i64 = i32::MAX as i64;

#[inline]
pub(crate) fn in_range(v: i64) -> bool {
    (COORD_MIN..=COORD_MAX).contains(&v)
}
