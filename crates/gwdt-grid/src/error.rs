//! Error types for grid and structuring-element construction.

use std::fmt;

/// Errors arising from grid or structuring-element construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid or pattern with no cells.
    EmptyGrid,
    /// The flat data length does not match the product of the shape extents.
    LengthMismatch {
        /// Cell count implied by the shape.
        expected: usize,
        /// Length of the supplied flat buffer.
        actual: usize,
    },
    /// A structuring-element axis has an even extent, so it has no center cell.
    EvenExtent {
        /// Index of the offending axis.
        axis: usize,
        /// The even extent supplied for that axis.
        extent: usize,
    },
    /// A connectivity pattern was requested with an invalid parameter.
    InvalidConnectivity {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "data length {actual} does not match shape cell count {expected}")
            }
            Self::EvenExtent { axis, extent } => {
                write!(f, "structuring element axis {axis} has even extent {extent}; extents must be odd")
            }
            Self::InvalidConnectivity { reason } => {
                write!(f, "invalid connectivity: {reason}")
            }
        }
    }
}

impl std::error::Error for GridError {}
