//! The pad → seed → propagate → extract pipeline.
//!
//! Everything around the propagation engine is bookkeeping: pad the grid
//! so every interior cell's neighbour set stays in-buffer, derive the
//! linear offsets from the structuring element and the padded strides,
//! seed per-cell states from the sign of each weight, run the engine, fill
//! the unreached sentinel, and slice the interior back out.
//!
//! Constructed via the builder pattern: [`GreyWeightedTransform::builder`].

use crate::error::TransformError;
use gwdt_engine::{propagate, CellState};
use gwdt_grid::{NdGrid, StructuringElement};

/// A configured grey-weighted distance transform.
///
/// Holds the connectivity pattern and the sentinel value written to
/// foreground cells that no path connects to any background cell.
///
/// # Construction
///
/// Use [`new`](Self::new) for the default configuration, or the builder
/// for a custom sentinel:
///
/// ```
/// use gwdt::{GreyWeightedTransform, StructuringElement};
///
/// let transform = GreyWeightedTransform::builder()
///     .structure(StructuringElement::connectivity(2, 1).unwrap())
///     .unreached_value(f32::NAN)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct GreyWeightedTransform {
    structure: StructuringElement,
    unreached_value: f32,
}

/// Builder for [`GreyWeightedTransform`].
///
/// Required field: `structure`.
pub struct GreyWeightedTransformBuilder {
    structure: Option<StructuringElement>,
    unreached_value: f32,
}

impl GreyWeightedTransform {
    /// Create a transform with the default unreached sentinel of 0.0.
    pub fn new(structure: StructuringElement) -> Self {
        Self {
            structure,
            unreached_value: 0.0,
        }
    }

    /// Create a new builder for configuring a transform.
    pub fn builder() -> GreyWeightedTransformBuilder {
        GreyWeightedTransformBuilder {
            structure: None,
            unreached_value: 0.0,
        }
    }

    /// The configured connectivity pattern.
    pub fn structure(&self) -> &StructuringElement {
        &self.structure
    }

    /// The value written to foreground cells no path can reach.
    pub fn unreached_value(&self) -> f32 {
        self.unreached_value
    }

    /// Compute the grey-weighted distance transform of `grid`.
    ///
    /// Cells with value <= 0 are background and come out 0; cells with
    /// value > 0 are foreground and come out as the minimum weight sum
    /// along any structure-step path to background, or as the unreached
    /// sentinel if no such path exists. The output grid has the input's
    /// shape.
    ///
    /// # Errors
    ///
    /// Returns `Err(TransformError::DimensionMismatch)` if the structuring
    /// element's dimensionality differs from the grid's.
    pub fn apply(&self, grid: &NdGrid) -> Result<NdGrid, TransformError> {
        if grid.ndim() != self.structure.ndim() {
            return Err(TransformError::DimensionMismatch {
                grid_ndim: grid.ndim(),
                structure_ndim: self.structure.ndim(),
            });
        }

        let border = self.structure.half_widths();
        let padded = grid.padded(&border);
        let offsets = self.structure.linear_offsets(padded.strides());
        let interior = padded.interior_indices(&border);

        let mut states = vec![CellState::Border; padded.len()];
        let mut distances = vec![0.0f32; padded.len()];
        for &cell in &interior {
            states[cell] = if padded.data()[cell] > 0.0 {
                CellState::Far
            } else {
                CellState::Alive
            };
        }

        propagate(padded.data(), &offsets, &mut states, &mut distances);

        for &cell in &interior {
            if states[cell] == CellState::Far {
                distances[cell] = self.unreached_value;
            }
        }

        let padded_distances = NdGrid::from_vec(padded.shape(), distances)?;
        Ok(padded_distances.extracted(&border))
    }
}

impl GreyWeightedTransformBuilder {
    /// Set the connectivity pattern defining valid path steps.
    pub fn structure(mut self, structure: StructuringElement) -> Self {
        self.structure = Some(structure);
        self
    }

    /// Set the value written to foreground cells no path can reach.
    /// Default: `0.0`.
    pub fn unreached_value(mut self, value: f32) -> Self {
        self.unreached_value = value;
        self
    }

    /// Build the transform, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `structure` is not set.
    pub fn build(self) -> Result<GreyWeightedTransform, String> {
        let structure = self
            .structure
            .ok_or_else(|| "structure is required".to_string())?;

        Ok(GreyWeightedTransform {
            structure,
            unreached_value: self.unreached_value,
        })
    }
}

/// Compute the grey-weighted distance transform with the default
/// configuration (unreached sentinel 0.0).
///
/// Convenience wrapper over [`GreyWeightedTransform::new`] + `apply`.
///
/// # Errors
///
/// Returns `Err(TransformError::DimensionMismatch)` if the structuring
/// element's dimensionality differs from the grid's.
pub fn grey_weighted_transform(
    grid: &NdGrid,
    structure: &StructuringElement,
) -> Result<NdGrid, TransformError> {
    GreyWeightedTransform::new(structure.clone()).apply(grid)
}
