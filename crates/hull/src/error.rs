use std::fmt;

/// Failure kinds of the hull builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HullError {
    /// No points were supplied.
    Empty,
    /// A coordinate lies outside `cfg::COORD_MIN..=cfg::COORD_MAX`.
    CoordinateOutOfRange { x: i64, y: i64 },
}

impl HullError {
    pub(crate) fn out_of_range(x: i64, y: i64) -> Self {
        Self::CoordinateOutOfRange { x, y }
    }
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "degenerate input: no points supplied"),
            Self::CoordinateOutOfRange { x, y } => {
                write!(f, "point ({x}, {y}) lies outside the supported i32 coordinate range")
            }
        }
    }
}

impl std::error::Error for HullError {}
