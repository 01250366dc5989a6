//! Per-cell propagation state.

/// Propagation state of one cell in the padded work buffer.
///
/// Background cells start `Alive` at distance 0 and foreground cells start
/// `Far`; padding cells are `Border` and take no part in propagation. A
/// cell's distance is non-decreasing over time, and once a cell is `Alive`
/// its distance never changes again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CellState {
    /// Padding cell outside the seed/iteration domain. Never seeded,
    /// relaxed, or finalized.
    Border,
    /// Distance finalized.
    Alive,
    /// Tentative distance is the best known upper bound; present in the
    /// frontier, possibly under several stale entries.
    Trial,
    /// Not yet reached by any path.
    Far,
}
