//! Error types for the transform facade.

use gwdt_grid::GridError;
use std::error::Error;
use std::fmt;

/// Errors from applying a grey-weighted distance transform.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    /// The structuring element's dimensionality does not match the grid's.
    DimensionMismatch {
        /// Number of axes of the input grid.
        grid_ndim: usize,
        /// Number of axes of the structuring element.
        structure_ndim: usize,
    },
    /// An underlying grid operation failed.
    Grid(GridError),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch {
                grid_ndim,
                structure_ndim,
            } => write!(
                f,
                "structuring element is {structure_ndim}D but grid is {grid_ndim}D"
            ),
            Self::Grid(err) => write!(f, "grid operation failed: {err}"),
        }
    }
}

impl Error for TransformError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for TransformError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}
