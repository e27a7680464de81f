//! Error types for grid construction and position queries.

use crate::spiral::Position;
use std::fmt;

/// Errors arising from grid construction or position lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A grid dimension exceeds the supported maximum.
    DimensionTooLarge {
        /// Which dimension.
        name: &'static str,
        /// The rejected value.
        value: u64,
        /// The largest accepted value.
        max: u64,
    },
    /// A position lies outside the grid.
    PositionOutOfBounds {
        /// The offending position.
        position: Position,
        /// Side length of the grid.
        side: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::PositionOutOfBounds { position, side } => {
                write!(f, "position {position} out of bounds: [0, {side}) x [0, {side})")
            }
        }
    }
}

impl std::error::Error for GridError {}
