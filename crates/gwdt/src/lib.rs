//! Grey-weighted distance transform for N-dimensional scalar grids.
//!
//! For every foreground cell (value > 0) of a grid, computes the minimum
//! possible sum of cell weights along a path to any background cell
//! (value <= 0), with path steps restricted to a caller-supplied
//! [`StructuringElement`]. Distance reflects local intensity rather than
//! pure geometry, which is what centerline and skeleton extraction
//! pipelines need from their pre-processing step.
//!
//! The computation is a multi-source, node-weighted shortest-path
//! propagation over the flattened grid; it generalizes uniformly to any
//! dimensionality and any connectivity pattern.
//!
//! # Example
//!
//! ```
//! use gwdt::{grey_weighted_transform, NdGrid, StructuringElement};
//!
//! let image = NdGrid::from_vec(
//!     &[3, 3],
//!     vec![
//!         0.0, 1.0, 2.0,
//!         1.4, 2.0, 3.0,
//!         1.4, 1.0, 3.5,
//!     ],
//! )
//! .unwrap();
//! let cross = StructuringElement::connectivity(2, 1).unwrap();
//!
//! let distance = grey_weighted_transform(&image, &cross).unwrap();
//! // Cheapest path to the bottom-right cell: 1.4 + 1.4 + 1.0 + 3.5.
//! assert!((distance.get(&[2, 2]).unwrap() - 7.3).abs() < 0.05);
//! ```
//!
//! # Unreached cells
//!
//! A foreground cell with no path to any background cell receives a
//! sentinel value rather than a distance — 0.0 by default, configurable
//! via [`GreyWeightedTransform::builder`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod transform;

pub use error::TransformError;
pub use gwdt_engine::{propagate, CellState, FrontierEntry};
pub use gwdt_grid::{GridError, NdGrid, Shape, StructuringElement};
pub use transform::{
    grey_weighted_transform, GreyWeightedTransform, GreyWeightedTransformBuilder,
};
