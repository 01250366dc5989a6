//! The multi-source shortest-path propagation loop.

use crate::frontier::FrontierEntry;
use crate::state::CellState;
use std::collections::BinaryHeap;

/// Compute grey-weighted distances over a flat padded buffer.
///
/// For every foreground (`Far`) cell reachable from a background (`Alive`)
/// cell through steps in `offsets`, computes the minimum sum of cell
/// weights along any such path — the cost of *entering* each cell on the
/// path, with background itself costing nothing — and finalizes it in
/// `distances`, flipping the cell to `Alive`. Cells still `Far` on return
/// are unreachable under the given offsets and their distance slot is left
/// untouched.
///
/// This is Dijkstra's algorithm with node-weighted relaxation and lazy
/// decrease-key: every relaxation pushes a fresh frontier entry, and
/// popping a cell that is already `Alive` is a no-op. Extraction order on
/// equal distances follows ascending cell index, so the computation is
/// fully deterministic.
///
/// # Preconditions (not checked)
///
/// The caller guarantees that all four buffers have equal length, that
/// adding any offset to the index of a non-`Border` cell lands in-bounds
/// (border-as-sentinel padding), that foreground weights are finite and
/// non-negative, and that `distances` is zeroed for `Alive` cells.
/// Violations are programming errors in the calling layer; the hot loop
/// performs no validation.
pub fn propagate(
    weights: &[f32],
    offsets: &[isize],
    states: &mut [CellState],
    distances: &mut [f32],
) {
    let mut frontier = BinaryHeap::new();

    // Seed the frontier from every background cell's neighbourhood.
    for index in 0..states.len() {
        if states[index] == CellState::Alive {
            relax_neighbours(index, 0.0, weights, offsets, states, distances, &mut frontier);
        }
    }

    while let Some(FrontierEntry { distance, index }) = frontier.pop() {
        if states[index] == CellState::Alive {
            // Stale entry superseded by an earlier relaxation.
            continue;
        }
        states[index] = CellState::Alive;
        distances[index] = distance;
        relax_neighbours(
            index,
            distance,
            weights,
            offsets,
            states,
            distances,
            &mut frontier,
        );
    }
}

/// Relax every offset neighbour of a finalized cell at distance `base`.
fn relax_neighbours(
    index: usize,
    base: f32,
    weights: &[f32],
    offsets: &[isize],
    states: &mut [CellState],
    distances: &mut [f32],
    frontier: &mut BinaryHeap<FrontierEntry>,
) {
    for &delta in offsets {
        let neighbour = (index as isize + delta) as usize;
        match states[neighbour] {
            CellState::Far => {
                let candidate = base + weights[neighbour];
                states[neighbour] = CellState::Trial;
                distances[neighbour] = candidate;
                frontier.push(FrontierEntry {
                    distance: candidate,
                    index: neighbour,
                });
            }
            CellState::Trial => {
                let candidate = base + weights[neighbour];
                if candidate < distances[neighbour] {
                    distances[neighbour] = candidate;
                    frontier.push(FrontierEntry {
                        distance: candidate,
                        index: neighbour,
                    });
                }
            }
            CellState::Alive | CellState::Border => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Build a 1D scenario with a `pad`-cell border on each side: `Border`
    /// outside, `Alive` where the weight is <= 0, `Far` elsewhere.
    fn seed_1d(weights: &[f32], pad: usize) -> (Vec<CellState>, Vec<f32>) {
        let states: Vec<CellState> = weights
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                if i < pad || i >= weights.len() - pad {
                    CellState::Border
                } else if w <= 0.0 {
                    CellState::Alive
                } else {
                    CellState::Far
                }
            })
            .collect();
        let distances = vec![0.0; weights.len()];
        (states, distances)
    }

    // ---------------------------------------------------------------
    // Basic propagation
    // ---------------------------------------------------------------

    #[test]
    fn all_background_stays_zero() {
        let weights = vec![0.0; 6];
        let (mut states, mut distances) = seed_1d(&weights, 1);
        propagate(&weights, &[-1, 1], &mut states, &mut distances);

        assert!(distances.iter().all(|&d| d == 0.0));
        assert_eq!(states[0], CellState::Border);
        assert_eq!(states[5], CellState::Border);
        assert!(states[1..5].iter().all(|&s| s == CellState::Alive));
    }

    #[test]
    fn single_foreground_cell_gets_own_weight() {
        let weights = vec![0.0, 0.0, 4.3, 0.0, 0.0];
        let (mut states, mut distances) = seed_1d(&weights, 1);
        propagate(&weights, &[-1, 1], &mut states, &mut distances);

        assert_eq!(distances[2], 4.3);
        assert_eq!(states[2], CellState::Alive);
    }

    #[test]
    fn chain_accumulates_weights() {
        let weights = vec![0.0, 0.0, 2.0, 3.0, 4.0, 0.0];
        let (mut states, mut distances) = seed_1d(&weights, 1);
        propagate(&weights, &[-1, 1], &mut states, &mut distances);

        assert_eq!(&distances[1..5], &[0.0, 2.0, 5.0, 9.0]);
    }

    #[test]
    fn two_sided_chain_takes_cheaper_side() {
        let weights = vec![0.0, 0.0, 5.0, 1.0, 1.0, 0.0, 0.0];
        let (mut states, mut distances) = seed_1d(&weights, 1);
        propagate(&weights, &[-1, 1], &mut states, &mut distances);

        // Entering from the right costs 1 then 1 more; the left-side seed
        // still reaches the 5.0 cell cheapest directly.
        assert_eq!(&distances[1..6], &[0.0, 5.0, 2.0, 1.0, 0.0]);
    }

    // ---------------------------------------------------------------
    // Reachability and state handling
    // ---------------------------------------------------------------

    #[test]
    fn empty_offset_set_propagates_nothing() {
        let weights = vec![0.0, 0.0, 3.0, 0.0, 0.0];
        let (mut states, mut distances) = seed_1d(&weights, 1);
        propagate(&weights, &[], &mut states, &mut distances);

        assert_eq!(states[2], CellState::Far);
        assert_eq!(distances[2], 0.0);
    }

    #[test]
    fn asymmetric_offsets_can_leave_cells_unreached() {
        // Steps only move left, so the foreground cell right of the seed
        // is never entered.
        let weights = vec![0.0, 0.0, 3.0, 0.0];
        let (mut states, mut distances) = seed_1d(&weights, 1);
        propagate(&weights, &[-1], &mut states, &mut distances);

        assert_eq!(states[2], CellState::Far);
        assert_eq!(distances[2], 0.0);
    }

    #[test]
    fn border_cells_are_never_touched() {
        let weights = vec![9.9, 0.0, 1.0, 0.0, 9.9];
        let (mut states, mut distances) = seed_1d(&weights, 1);
        propagate(&weights, &[-1, 1], &mut states, &mut distances);

        assert_eq!(states[0], CellState::Border);
        assert_eq!(states[4], CellState::Border);
        assert_eq!(distances[0], 0.0);
        assert_eq!(distances[4], 0.0);
    }

    #[test]
    fn finalized_states_are_all_alive_when_connected() {
        let weights = vec![0.0, 0.0, 1.0, 2.0, 3.0, 0.0];
        let (mut states, mut distances) = seed_1d(&weights, 1);
        propagate(&weights, &[-1, 1], &mut states, &mut distances);

        assert!(states[1..5].iter().all(|&s| s == CellState::Alive));
    }

    // ---------------------------------------------------------------
    // 2D via flat buffer
    // ---------------------------------------------------------------

    #[test]
    fn two_dimensional_cross_neighbourhood() {
        // 3x3 interior padded to 5x5; 4-connected offsets for 5 columns.
        // Interior weights:
        //   0    1.0  2.0
        //   1.4  2.0  3.0
        //   1.4  1.0  3.5
        let mut weights = vec![0.0; 25];
        let interior = [
            [0.0, 1.0, 2.0],
            [1.4, 2.0, 3.0],
            [1.4, 1.0, 3.5],
        ];
        let mut states = vec![CellState::Border; 25];
        for r in 0..3 {
            for c in 0..3 {
                let i = (r + 1) * 5 + (c + 1);
                weights[i] = interior[r][c];
                states[i] = if interior[r][c] > 0.0 {
                    CellState::Far
                } else {
                    CellState::Alive
                };
            }
        }
        let mut distances = vec![0.0; 25];
        propagate(&weights, &[-5, -1, 1, 5], &mut states, &mut distances);

        // Cheapest route to the bottom-right cell runs down the left
        // column and along the bottom row: 1.4 + 1.4 + 1.0 + 3.5.
        let bottom_right = 3 * 5 + 3;
        assert!((distances[bottom_right] - 7.3).abs() < 0.05);
    }

    // ---------------------------------------------------------------
    // Determinism and reference comparison
    // ---------------------------------------------------------------

    #[test]
    fn repeated_runs_are_bit_identical() {
        let weights = vec![0.0, 0.0, 1.5, 2.5, 0.5, 3.5, 0.0, 0.0];
        let run = || {
            let (mut states, mut distances) = seed_1d(&weights, 1);
            propagate(&weights, &[-1, 1], &mut states, &mut distances);
            distances
        };
        assert_eq!(run(), run());
    }

    /// Relaxation-to-fixpoint reference: the same node-weighted shortest
    /// path, computed without a priority structure.
    fn reference_distances(
        weights: &[f32],
        offsets: &[isize],
        states: &[CellState],
    ) -> Vec<Option<f32>> {
        let n = weights.len();
        let mut dist: Vec<Option<f32>> = states
            .iter()
            .map(|&s| {
                if s == CellState::Alive {
                    Some(0.0)
                } else {
                    None
                }
            })
            .collect();
        loop {
            let mut changed = false;
            for u in 0..n {
                if states[u] == CellState::Border {
                    continue;
                }
                let Some(du) = dist[u] else { continue };
                for &delta in offsets {
                    let v = u as isize + delta;
                    if v < 0 || v >= n as isize {
                        continue;
                    }
                    let v = v as usize;
                    if states[v] != CellState::Far {
                        continue;
                    }
                    let candidate = du + weights[v];
                    if dist[v].is_none_or(|dv| candidate < dv) {
                        dist[v] = Some(candidate);
                        changed = true;
                    }
                }
            }
            if !changed {
                return dist;
            }
        }
    }

    fn arb_offsets() -> impl Strategy<Value = Vec<isize>> {
        prop::collection::vec(prop_oneof![Just(-2isize), Just(-1), Just(1), Just(2)], 1..4)
            .prop_map(|mut v| {
                v.sort_unstable();
                v.dedup();
                v
            })
    }

    proptest! {
        #[test]
        fn matches_relaxation_reference(
            cells in prop::collection::vec((any::<bool>(), 1u32..100), 3..12),
            offsets in arb_offsets(),
        ) {
            // Two border cells per side cover the widest offset.
            let pad = 2usize;
            let mut weights = vec![0.0f32; pad];
            weights.extend(cells.iter().map(|&(bg, w)| {
                if bg { 0.0 } else { w as f32 * 0.1 }
            }));
            weights.extend(std::iter::repeat_n(0.0f32, pad));

            let initial_states: Vec<CellState> = weights
                .iter()
                .enumerate()
                .map(|(i, &w)| {
                    if i < pad || i >= weights.len() - pad {
                        CellState::Border
                    } else if w <= 0.0 {
                        CellState::Alive
                    } else {
                        CellState::Far
                    }
                })
                .collect();

            let mut states = initial_states.clone();
            let mut distances = vec![0.0f32; weights.len()];
            propagate(&weights, &offsets, &mut states, &mut distances);

            let expected = reference_distances(&weights, &offsets, &initial_states);
            for i in 0..weights.len() {
                match (states[i], expected[i]) {
                    (CellState::Alive, Some(d)) => {
                        prop_assert_eq!(
                            distances[i], d,
                            "cell {} finalized at {} but reference says {}", i, distances[i], d
                        );
                    }
                    (CellState::Far, None) => {}
                    (CellState::Border, _) => {}
                    (s, e) => {
                        prop_assert!(false, "cell {} state {:?} vs reference {:?}", i, s, e);
                    }
                }
            }
        }
    }
}
