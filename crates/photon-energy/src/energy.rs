//! Energy curves and phase assignment

use std::f64::consts::TAU;

use crate::WATTS_PER_MODULE;

/// Evenly spaced phase shifts for `satellites` satellites: `2π·i / N`.
///
/// Satellite 0 always sits at phase 0. A count of zero yields no phases.
pub fn phase_shifts(satellites: u32) -> Vec<f64> {
    (0..satellites).map(|i| phase_shift(i, satellites)).collect()
}

/// Phase shift of satellite `index` in a constellation of `satellites`.
pub fn phase_shift(index: u32, satellites: u32) -> f64 {
    (TAU * index as f64) / satellites as f64
}

/// Solar energy collected by one satellite at each grid angle.
///
/// `E[k] = max(sin(Θ[k] + φ), 0) · 100 · M`. The night side of the orbit
/// (negative sine) collects nothing.
pub fn energy_curve(modules: u32, phase: f64, angles: &[f64]) -> Vec<f64> {
    angles
        .iter()
        .map(|theta| (theta + phase).sin().max(0.0) * WATTS_PER_MODULE * modules as f64)
        .collect()
}

/// Element-wise sum of `curves` over a grid of `len` samples.
///
/// The sum starts from zeros, so an empty set of curves yields `len` zeros.
/// Samples beyond `len` in a longer curve are ignored.
pub fn aggregate<'a, I>(curves: I, len: usize) -> Vec<f64>
where
    I: IntoIterator<Item = &'a [f64]>,
{
    let mut total = vec![0.0; len];
    for curve in curves {
        for (acc, value) in total.iter_mut().zip(curve) {
            *acc += value;
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SampleGrid;
    use std::f64::consts::PI;

    #[test]
    fn test_phase_shifts_even_spacing() {
        let phases = phase_shifts(4);
        assert_eq!(phases, vec![0.0, PI / 2.0, PI, 3.0 * PI / 2.0]);
    }

    #[test]
    fn test_phase_shifts_empty() {
        assert!(phase_shifts(0).is_empty());
    }

    #[test]
    fn test_energy_curve_clamps_night_side() {
        let curve = energy_curve(2, 0.0, &[PI / 2.0, 3.0 * PI / 2.0]);
        assert!((curve[0] - 200.0).abs() < 1e-9);
        assert_eq!(curve[1], 0.0);
    }

    #[test]
    fn test_energy_curve_scales_with_modules() {
        let grid = SampleGrid::full_orbit();
        let one = energy_curve(1, 0.3, grid.angles());
        let five = energy_curve(5, 0.3, grid.angles());
        for (a, b) in one.iter().zip(&five) {
            assert!((a * 5.0 - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_aggregate_sums_elementwise() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![0.5, 0.0, 4.0];
        let total = aggregate([a.as_slice(), b.as_slice()], 3);
        assert_eq!(total, vec![1.5, 2.0, 7.0]);
    }

    #[test]
    fn test_aggregate_of_nothing_is_zero() {
        let total = aggregate(std::iter::empty::<&[f64]>(), 4);
        assert_eq!(total, vec![0.0; 4]);
    }
}
