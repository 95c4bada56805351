//! Convex hulls of integer point sets in the plane.
//!
//! Pipeline
//! - raw points → anchor selection & translation → polar-angle sort → stack sweep
//!   → `Hull` → perimeter.
//! - All orientation tests are exact (integer arithmetic promoted to `i128`);
//!   floating point only enters through `atan2` (ordering) and `sqrt` (lengths).
//!
//! API Policy
//! - The library performs no I/O and no logging. Reading point files and writing
//!   results is the job of the `cli` crate.

pub mod cfg;
mod error;
pub mod graham;
pub mod perimeter;
pub mod point;
pub mod polar;
pub mod rand;

pub use error::HullError;
pub use graham::{convex_hull, Hull};
pub use perimeter::{convex_hull_perimeter, perimeter};
pub use point::{distance, pseudoscalar_product, Point, Vec2, ORIGIN};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::graham::{convex_hull, Hull};
    pub use crate::perimeter::{convex_hull_perimeter, perimeter};
    pub use crate::point::{distance, pseudoscalar_product, Point, Vec2, ORIGIN};
    pub use crate::rand::{draw_points, CloudCfg, ReplayToken};
    pub use crate::HullError;
}
