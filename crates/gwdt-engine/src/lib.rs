//! Multi-source node-weighted shortest-path propagation over flat buffers.
//!
//! This crate is the numerical core of the grey-weighted distance
//! transform: given a flat weight buffer, a fixed set of signed
//! linear-index offsets, and a pre-seeded state buffer, [`propagate`]
//! computes for every reachable foreground cell the minimum possible sum
//! of cell weights along any offset-step path to a background cell.
//!
//! The engine knows nothing about dimensionality: the caller encodes the
//! grid topology entirely in the offset set, and guarantees via padding
//! that applying any offset to a non-border cell stays in-buffer. In
//! exchange the hot loop performs no bounds or precondition checks — all
//! validation lives in the calling layer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod frontier;
pub mod propagate;
pub mod state;

pub use frontier::FrontierEntry;
pub use propagate::propagate;
pub use state::CellState;
