//! Angular sample grid

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::SAMPLE_POINTS;

/// Ordered orbit angles (radians) at which energy is evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleGrid {
    angles: Vec<f64>,
}

impl SampleGrid {
    /// The full-orbit grid: `SAMPLE_POINTS` angles from 0 to 2π, both ends included.
    pub fn full_orbit() -> Self {
        Self::linspace(0.0, TAU, SAMPLE_POINTS)
    }

    /// `points` evenly spaced values over `[start, stop]`.
    ///
    /// The last value is pinned to `stop` so it does not drift with the
    /// accumulated step error.
    pub fn linspace(start: f64, stop: f64, points: usize) -> Self {
        let angles = match points {
            0 => Vec::new(),
            1 => vec![start],
            n => {
                let step = (stop - start) / (n - 1) as f64;
                let mut angles: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
                angles[n - 1] = stop;
                angles
            }
        };

        Self { angles }
    }

    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.angles.get(index).copied()
    }
}

impl Default for SampleGrid {
    fn default() -> Self {
        Self::full_orbit()
    }
}
