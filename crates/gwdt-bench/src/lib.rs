//! Benchmark profiles for the gwdt workspace.
//!
//! Provides deterministic seeded grid builders at the sizes the benches
//! use:
//!
//! - [`reference_grid`]: 100x100 (10K cells)
//! - [`stress_grid`]: 316x316 (~100K cells)
//! - [`volume_grid`]: 40x40x40 (64K cells) for 3D profiles

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gwdt_grid::NdGrid;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Build a random grid with the given shape.
///
/// Each cell is background (0.0) with probability `background_fraction`,
/// otherwise a foreground weight drawn uniformly from (0, 10). Identical
/// seeds produce identical grids.
///
/// # Panics
///
/// Panics if the shape is empty or has a zero extent.
pub fn random_grid(shape: &[usize], seed: u64, background_fraction: f64) -> NdGrid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let len: usize = shape.iter().product();
    let data: Vec<f32> = (0..len)
        .map(|_| {
            if rng.random::<f64>() < background_fraction {
                0.0
            } else {
                rng.random::<f32>() * 10.0 + f32::EPSILON
            }
        })
        .collect();
    NdGrid::from_vec(shape, data).expect("benchmark shape must be non-empty")
}

/// Reference benchmark grid: 100x100 (10K cells), 10% background.
pub fn reference_grid(seed: u64) -> NdGrid {
    random_grid(&[100, 100], seed, 0.1)
}

/// Stress benchmark grid: 316x316 (~100K cells), 10% background.
pub fn stress_grid(seed: u64) -> NdGrid {
    random_grid(&[316, 316], seed, 0.1)
}

/// 3D benchmark grid: 40x40x40 (64K cells), 10% background.
pub fn volume_grid(seed: u64) -> NdGrid {
    random_grid(&[40, 40, 40], seed, 0.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_grid_is_deterministic() {
        let a = random_grid(&[20, 20], 42, 0.1);
        let b = random_grid(&[20, 20], 42, 0.1);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = random_grid(&[20, 20], 42, 0.1);
        let b = random_grid(&[20, 20], 43, 0.1);
        assert_ne!(a, b);
    }

    #[test]
    fn background_fraction_is_respected() {
        let grid = random_grid(&[100, 100], 7, 0.25);
        let background = grid.data().iter().filter(|&&v| v <= 0.0).count();
        // 25% of 10K cells, with generous slack for sampling noise.
        assert!((1800..3200).contains(&background), "got {background}");
    }

    #[test]
    fn foreground_weights_are_positive() {
        let grid = random_grid(&[50, 50], 3, 0.5);
        assert!(grid.data().iter().all(|&v| v == 0.0 || v > 0.0));
    }
}
