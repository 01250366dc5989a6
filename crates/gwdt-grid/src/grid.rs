//! Flat row-major storage for N-dimensional scalar grids.

use crate::error::GridError;
use smallvec::SmallVec;

/// Per-axis extents of a grid or structuring element.
///
/// Four inline slots cover 2D/3D/4D grids without heap allocation.
pub type Shape = SmallVec<[usize; 4]>;

/// An N-dimensional scalar grid stored as a flat row-major `Vec<f32>`.
///
/// The grid is addressed either by a coordinate slice (one entry per axis)
/// or directly by linear index. Strides are derived from the shape in
/// C order: the last axis is contiguous, and advancing one step along
/// axis `k` moves `strides()[k]` elements in the flat buffer.
///
/// # Examples
///
/// ```
/// use gwdt_grid::NdGrid;
///
/// let grid = NdGrid::from_vec(&[2, 3], vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert_eq!(grid.strides(), &[3, 1]);
/// assert_eq!(grid.get(&[1, 2]), Some(5.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NdGrid {
    shape: Shape,
    strides: Shape,
    data: Vec<f32>,
}

impl NdGrid {
    /// Create a grid from a shape and a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns `Err(GridError::EmptyGrid)` if the shape has no axes or any
    /// axis has extent 0, or `Err(GridError::LengthMismatch)` if the buffer
    /// length does not equal the product of the extents.
    pub fn from_vec(shape: &[usize], data: Vec<f32>) -> Result<Self, GridError> {
        if shape.is_empty() || shape.contains(&0) {
            return Err(GridError::EmptyGrid);
        }
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            shape: Shape::from_slice(shape),
            strides: Self::compute_strides(shape),
            data,
        })
    }

    /// Create a zero-filled grid with the given shape.
    ///
    /// # Errors
    ///
    /// Returns `Err(GridError::EmptyGrid)` if the shape has no axes or any
    /// axis has extent 0.
    pub fn zeros(shape: &[usize]) -> Result<Self, GridError> {
        if shape.is_empty() || shape.contains(&0) {
            return Err(GridError::EmptyGrid);
        }
        let len = shape.iter().product();
        Ok(Self {
            shape: Shape::from_slice(shape),
            strides: Self::compute_strides(shape),
            data: vec![0.0; len],
        })
    }

    /// Row-major strides: the last axis is contiguous.
    fn compute_strides(shape: &[usize]) -> Shape {
        let mut strides: Shape = SmallVec::with_capacity(shape.len());
        let mut step = 1usize;
        for &extent in shape.iter().rev() {
            strides.push(step);
            step *= extent;
        }
        strides.reverse();
        strides
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Per-axis extents.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Per-axis element strides in the flat buffer.
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always returns `false` — construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The flat row-major cell buffer.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Mutable access to the flat cell buffer.
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consume the grid and return its flat buffer.
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Map a coordinate to its linear index.
    ///
    /// Returns `None` if the coordinate has the wrong number of axes or is
    /// out of bounds on any axis.
    pub fn linear_index(&self, coord: &[usize]) -> Option<usize> {
        if coord.len() != self.ndim() {
            return None;
        }
        let mut index = 0usize;
        for ((&c, &extent), &stride) in coord.iter().zip(&self.shape).zip(&self.strides) {
            if c >= extent {
                return None;
            }
            index += c * stride;
        }
        Some(index)
    }

    /// Read the cell at a coordinate, or `None` if out of bounds.
    pub fn get(&self, coord: &[usize]) -> Option<f32> {
        self.linear_index(coord).map(|i| self.data[i])
    }

    /// Mutable reference to the cell at a coordinate, or `None` if out of bounds.
    pub fn get_mut(&mut self, coord: &[usize]) -> Option<&mut f32> {
        self.linear_index(coord).map(|i| &mut self.data[i])
    }

    /// Return a copy enlarged by `border[k]` cells on both ends of axis `k`.
    ///
    /// New cells are zero-filled. The engine never reads them: they exist so
    /// that every interior cell's full neighbour offset set stays in-buffer
    /// without per-step bounds checks.
    ///
    /// # Panics
    ///
    /// Panics if `border.len() != self.ndim()`.
    pub fn padded(&self, border: &[usize]) -> NdGrid {
        assert_eq!(
            border.len(),
            self.ndim(),
            "border must have one entry per axis"
        );
        let shape: Shape = self
            .shape
            .iter()
            .zip(border)
            .map(|(&extent, &b)| extent + 2 * b)
            .collect();
        let strides = Self::compute_strides(&shape);
        let mut data = vec![0.0f32; shape.iter().product()];

        let last = self.ndim() - 1;
        let row_len = self.shape[last];
        let outer = &self.shape[..last];
        let mut coord: Shape = SmallVec::from_elem(0, outer.len());
        loop {
            let mut src = 0usize;
            let mut dst = border[last] * strides[last];
            for (k, &c) in coord.iter().enumerate() {
                src += c * self.strides[k];
                dst += (c + border[k]) * strides[k];
            }
            data[dst..dst + row_len].copy_from_slice(&self.data[src..src + row_len]);
            if !increment(&mut coord, outer) {
                break;
            }
        }

        NdGrid {
            shape,
            strides,
            data,
        }
    }

    /// Return a copy shrunk by `border[k]` cells on both ends of axis `k`.
    ///
    /// Inverse of [`padded`](Self::padded): extracts the interior window,
    /// preserving cell ordering.
    ///
    /// # Panics
    ///
    /// Panics if `border.len() != self.ndim()` or if removing a border would
    /// leave an axis with no cells.
    pub fn extracted(&self, border: &[usize]) -> NdGrid {
        assert_eq!(
            border.len(),
            self.ndim(),
            "border must have one entry per axis"
        );
        assert!(
            self.shape
                .iter()
                .zip(border)
                .all(|(&extent, &b)| extent > 2 * b),
            "border larger than grid"
        );
        let shape: Shape = self
            .shape
            .iter()
            .zip(border)
            .map(|(&extent, &b)| extent - 2 * b)
            .collect();
        let strides = Self::compute_strides(&shape);
        let mut data = vec![0.0f32; shape.iter().product()];

        let last = self.ndim() - 1;
        let row_len = shape[last];
        let outer = &shape[..last];
        let mut coord: Shape = SmallVec::from_elem(0, outer.len());
        loop {
            let mut src = border[last] * self.strides[last];
            let mut dst = 0usize;
            for (k, &c) in coord.iter().enumerate() {
                src += (c + border[k]) * self.strides[k];
                dst += c * strides[k];
            }
            data[dst..dst + row_len].copy_from_slice(&self.data[src..src + row_len]);
            if !increment(&mut coord, outer) {
                break;
            }
        }

        NdGrid {
            shape,
            strides,
            data,
        }
    }

    /// Linear indices of the interior region, in row-major order.
    ///
    /// The interior is the grid minus `border[k]` cells on both ends of each
    /// axis — the seed/iteration domain of the propagation engine when this
    /// grid was produced by [`padded`](Self::padded) with the same border.
    ///
    /// # Panics
    ///
    /// Panics if `border.len() != self.ndim()` or if the border would leave
    /// an axis with no cells.
    pub fn interior_indices(&self, border: &[usize]) -> Vec<usize> {
        assert_eq!(
            border.len(),
            self.ndim(),
            "border must have one entry per axis"
        );
        assert!(
            self.shape
                .iter()
                .zip(border)
                .all(|(&extent, &b)| extent > 2 * b),
            "border larger than grid"
        );
        let inner: Shape = self
            .shape
            .iter()
            .zip(border)
            .map(|(&extent, &b)| extent - 2 * b)
            .collect();

        let last = self.ndim() - 1;
        let row_len = inner[last];
        let outer = &inner[..last];
        let mut indices = Vec::with_capacity(inner.iter().product());
        let mut coord: Shape = SmallVec::from_elem(0, outer.len());
        loop {
            let mut base = border[last] * self.strides[last];
            for (k, &c) in coord.iter().enumerate() {
                base += (c + border[k]) * self.strides[k];
            }
            indices.extend(base..base + row_len);
            if !increment(&mut coord, outer) {
                break;
            }
        }
        indices
    }
}

/// Advance a row-major odometer over `shape`. Returns `false` once every
/// position has been visited.
fn increment(coord: &mut [usize], shape: &[usize]) -> bool {
    for k in (0..coord.len()).rev() {
        coord[k] += 1;
        if coord[k] < shape[k] {
            return true;
        }
        coord[k] = 0;
    }
    false
}
