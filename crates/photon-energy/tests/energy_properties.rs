//! Property tests over the full parameter ranges

use photon_energy::detection::{detection_indices, DETECTION_COUNT, DETECTION_SEED};
use photon_energy::energy::{aggregate, energy_curve, phase_shifts};
use photon_energy::params::{MODULE_RANGE, SATELLITE_RANGE};
use photon_energy::{run, SampleGrid, SimulationParams};
use proptest::prelude::*;
use std::f64::consts::TAU;

fn params(satellites: u32, modules: u32) -> SimulationParams {
    SimulationParams {
        satellites,
        modules,
        ..SimulationParams::default()
    }
}

fn satellite_count() -> impl Strategy<Value = u32> {
    SATELLITE_RANGE
}

fn module_count() -> impl Strategy<Value = u32> {
    MODULE_RANGE
}

proptest! {
    #[test]
    fn energy_never_negative(n in satellite_count(), m in module_count()) {
        let grid = SampleGrid::full_orbit();
        for phase in phase_shifts(n) {
            let curve = energy_curve(m, phase, grid.angles());
            prop_assert!(curve.iter().all(|&e| e >= 0.0));
        }
    }

    #[test]
    fn phases_evenly_spaced(n in satellite_count()) {
        let phases = phase_shifts(n);
        prop_assert_eq!(phases.len(), n as usize);
        prop_assert_eq!(phases[0], 0.0);
        for (i, phase) in phases.iter().enumerate() {
            prop_assert_eq!(*phase, TAU * i as f64 / n as f64);
            prop_assert!(*phase >= 0.0 && *phase < TAU);
        }
        for pair in phases.windows(2) {
            prop_assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn total_is_sum_of_curves(n in satellite_count(), m in module_count()) {
        let run = run(&params(n, m));
        for k in 0..run.total.len() {
            let sum: f64 = run.satellites.iter().map(|s| s.curve[k]).sum();
            prop_assert!((run.total[k] - sum).abs() < 1e-9);
        }
    }

    #[test]
    fn aggregate_order_independent(n in 2u32..=10, m in module_count()) {
        let grid = SampleGrid::full_orbit();
        let curves: Vec<Vec<f64>> = phase_shifts(n)
            .into_iter()
            .map(|p| energy_curve(m, p, grid.angles()))
            .collect();
        let forward = aggregate(curves.iter().map(Vec::as_slice), grid.len());
        let backward = aggregate(curves.iter().rev().map(Vec::as_slice), grid.len());
        for (a, b) in forward.iter().zip(&backward) {
            prop_assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn detections_independent_of_params(n in satellite_count(), m in module_count()) {
        let run = run(&params(n, m));
        let indices: Vec<usize> = run
            .detections
            .unwrap_or_default()
            .iter()
            .map(|d| d.index)
            .collect();
        prop_assert_eq!(indices, detection_indices(500, DETECTION_COUNT, DETECTION_SEED));
    }
}
