//! N-dimensional grid storage and structuring elements for grey-weighted
//! distance transforms.
//!
//! This crate owns the geometric bookkeeping around the propagation engine:
//! flat row-major scalar grids with stride arithmetic ([`NdGrid`]), and the
//! boolean connectivity patterns that define which relative grid positions
//! count as a single path step ([`StructuringElement`]).
//!
//! Everything here generalizes uniformly over dimensionality: a grid is a
//! flat `Vec<f32>` plus a shape, and a neighbourhood is a flat list of
//! signed linear-index offsets derived once from the pattern and the grid's
//! strides. No per-dimension special-casing exists anywhere downstream.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod pattern;

pub use error::GridError;
pub use grid::{NdGrid, Shape};
pub use pattern::StructuringElement;
