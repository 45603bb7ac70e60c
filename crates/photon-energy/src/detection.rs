//! Asteroid detection markers
//!
//! Detections are display markers only. The draw is seeded with a constant so
//! every run flags the same grid indices, whatever the satellite or module
//! count.

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use crate::SampleGrid;

/// Seed for the detection draw
pub const DETECTION_SEED: u64 = 42;

/// Markers drawn per run
pub const DETECTION_COUNT: usize = 3;

/// One flagged grid sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Index into the sample grid
    pub index: usize,
    /// Orbit angle at `index` (radians)
    pub angle: f64,
    /// Aggregate energy at `index` (W)
    pub energy: f64,
}

/// Draw `amount` distinct indices from `0..population` without replacement.
///
/// The result depends only on `(population, amount, seed)`. `amount` is capped
/// at `population`.
pub fn detection_indices(population: usize, amount: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    rand::seq::index::sample(&mut rng, population, amount.min(population)).into_vec()
}

/// Flag the fixed detection indices on `grid` and read `total` at each.
pub fn detect(grid: &SampleGrid, total: &[f64]) -> Vec<Detection> {
    detection_indices(grid.len(), DETECTION_COUNT, DETECTION_SEED)
        .into_iter()
        .filter_map(|index| {
            Some(Detection {
                index,
                angle: grid.get(index)?,
                energy: total.get(index).copied()?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_indices_distinct_and_in_range() {
        let indices = detection_indices(500, DETECTION_COUNT, DETECTION_SEED);
        assert_eq!(indices.len(), 3);
        let unique: HashSet<_> = indices.iter().collect();
        assert_eq!(unique.len(), 3);
        assert!(indices.iter().all(|&i| i < 500));
    }

    #[test]
    fn test_indices_reproducible() {
        let first = detection_indices(500, 3, DETECTION_SEED);
        let second = detection_indices(500, 3, DETECTION_SEED);
        assert_eq!(first, second);
    }

    #[test]
    fn test_amount_capped_at_population() {
        let indices = detection_indices(2, 3, DETECTION_SEED);
        assert_eq!(indices.len(), 2);
    }

    #[test]
    fn test_detect_reads_total() {
        let grid = SampleGrid::full_orbit();
        let total: Vec<f64> = (0..grid.len()).map(|i| i as f64).collect();
        let detections = detect(&grid, &total);

        assert_eq!(detections.len(), 3);
        for d in &detections {
            assert_eq!(d.energy, d.index as f64);
            assert_eq!(d.angle, grid.angles()[d.index]);
        }
    }
}
