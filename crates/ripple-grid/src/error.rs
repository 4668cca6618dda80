//! Error types for grid construction.

use std::fmt;

/// Errors arising from grid or buffer construction.
///
/// All fatal at configuration time; stepping raises nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with a zero dimension.
    EmptyGrid,
    /// A dimension exceeds the `i32` coordinate range.
    DimensionTooLarge {
        /// Axis name ("width" or "height").
        name: &'static str,
        /// The offending value.
        value: u32,
        /// The maximum allowed.
        max: u32,
    },
    /// Paired buffers have different shapes.
    DimensionMismatch {
        /// Shape of the first grid.
        front: (u32, u32),
        /// Shape of the second grid.
        back: (u32, u32),
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell per axis"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::DimensionMismatch { front, back } => {
                write!(
                    f,
                    "buffer shapes differ: {}x{} vs {}x{}",
                    front.0, front.1, back.0, back.1
                )
            }
        }
    }
}

impl std::error::Error for GridError {}
