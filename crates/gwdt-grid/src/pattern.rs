//! Structuring elements: boolean connectivity patterns of odd extent.

use crate::error::GridError;
use crate::grid::Shape;
use smallvec::SmallVec;

/// An N-dimensional boolean connectivity pattern, centered on its middle cell.
///
/// `true` cells mark the relative grid positions reachable in one path step;
/// the center cell itself is ignored when deriving offsets. Every axis must
/// have odd extent so the center is well defined.
///
/// # Examples
///
/// A 4-connected neighbourhood in two dimensions:
///
/// ```
/// use gwdt_grid::StructuringElement;
///
/// let cross = StructuringElement::from_vec(
///     &[3, 3],
///     vec![
///         false, true, false,
///         true, true, true,
///         false, true, false,
///     ],
/// )
/// .unwrap();
/// // Offsets for a row-major 3-column grid: up, left, right, down.
/// assert_eq!(cross.linear_offsets(&[3, 1]), vec![-3, -1, 1, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuringElement {
    shape: Shape,
    mask: Vec<bool>,
}

impl StructuringElement {
    /// Create a structuring element from a shape and a flat row-major mask.
    ///
    /// # Errors
    ///
    /// Returns `Err(GridError::EmptyGrid)` if the shape has no axes or any
    /// axis has extent 0, `Err(GridError::EvenExtent)` if any axis has even
    /// extent, or `Err(GridError::LengthMismatch)` if the mask length does
    /// not equal the product of the extents.
    pub fn from_vec(shape: &[usize], mask: Vec<bool>) -> Result<Self, GridError> {
        if shape.is_empty() || shape.contains(&0) {
            return Err(GridError::EmptyGrid);
        }
        if let Some((axis, &extent)) = shape.iter().enumerate().find(|(_, &e)| e % 2 == 0) {
            return Err(GridError::EvenExtent { axis, extent });
        }
        let expected: usize = shape.iter().product();
        if mask.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: mask.len(),
            });
        }
        Ok(Self {
            shape: Shape::from_slice(shape),
            mask,
        })
    }

    /// Generate the standard `3^ndim` connectivity pattern.
    ///
    /// A cell is `true` when its L1 distance from the center is at most
    /// `order`. `connectivity(2, 1)` is the 4-connected cross,
    /// `connectivity(2, 2)` the full 8-connected block, `connectivity(3, 1)`
    /// the 6-connected cross. Orders of `ndim` or above select the full
    /// block, since no cell of the pattern lies further than `ndim` steps
    /// from the center.
    ///
    /// # Errors
    ///
    /// Returns `Err(GridError::EmptyGrid)` if `ndim` is 0, or
    /// `Err(GridError::InvalidConnectivity)` if `order` is 0.
    pub fn connectivity(ndim: usize, order: usize) -> Result<Self, GridError> {
        if ndim == 0 {
            return Err(GridError::EmptyGrid);
        }
        if order == 0 {
            return Err(GridError::InvalidConnectivity {
                reason: "order must be >= 1".to_string(),
            });
        }
        let shape: Shape = SmallVec::from_elem(3, ndim);
        let len = 3usize.pow(ndim as u32);
        let mut mask = Vec::with_capacity(len);
        for cell in 0..len {
            let mut rest = cell;
            let mut l1 = 0usize;
            for _ in 0..ndim {
                l1 += (rest % 3).abs_diff(1);
                rest /= 3;
            }
            mask.push(l1 <= order);
        }
        Ok(Self { shape, mask })
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Per-axis extents. All odd.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// The flat row-major boolean mask.
    pub fn mask(&self) -> &[bool] {
        &self.mask
    }

    /// Per-axis half extents: the pad border required so that every interior
    /// cell's full neighbour set stays in-buffer.
    pub fn half_widths(&self) -> Shape {
        self.shape.iter().map(|&extent| extent / 2).collect()
    }

    /// Derive the linear-index offsets of every `true` cell under the given
    /// grid strides.
    ///
    /// Each offset is the signed flat-buffer delta from a cell to one
    /// neighbour permitted by the pattern, in row-major pattern order. Zero
    /// deltas are dropped: the center always, and any pattern cell that
    /// collapses onto the center under degenerate strides. An all-`false`
    /// or center-only pattern yields an empty set.
    ///
    /// # Panics
    ///
    /// Panics if `strides.len() != self.ndim()`.
    pub fn linear_offsets(&self, strides: &[usize]) -> Vec<isize> {
        assert_eq!(
            strides.len(),
            self.ndim(),
            "strides must have one entry per axis"
        );
        let mut offsets = Vec::new();
        let mut coord: Shape = SmallVec::from_elem(0, self.ndim());
        for &set in &self.mask {
            if set {
                let mut offset = 0isize;
                for (k, &c) in coord.iter().enumerate() {
                    let delta = c as isize - (self.shape[k] / 2) as isize;
                    offset += delta * strides[k] as isize;
                }
                if offset != 0 {
                    offsets.push(offset);
                }
            }
            advance(&mut coord, &self.shape);
        }
        offsets
    }
}

/// Advance a row-major odometer over `shape`, wrapping at the end.
fn advance(coord: &mut [usize], shape: &[usize]) {
    for k in (0..coord.len()).rev() {
        coord[k] += 1;
        if coord[k] < shape[k] {
            return;
        }
        coord[k] = 0;
    }
}
