//! Single-pass simulation run

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::detection::{self, Detection};
use crate::energy::{aggregate, energy_curve, phase_shifts};
use crate::geometry::OrbitScene;
use crate::{SampleGrid, SimulationParams};

/// Energy collected by one satellite over the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatelliteEnergy {
    pub index: u32,
    pub phase: f64,
    pub curve: Vec<f64>,
}

impl SatelliteEnergy {
    /// Display label, numbered from 1
    pub fn label(&self) -> String {
        format!("Sat {}", self.index + 1)
    }
}

/// Everything one parameter set produces. Rebuilt from scratch on every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRun {
    pub params: SimulationParams,
    pub grid: SampleGrid,
    pub satellites: Vec<SatelliteEnergy>,
    /// Aggregate curve over all satellites
    pub total: Vec<f64>,
    /// `None` when asteroid detection is off
    pub detections: Option<Vec<Detection>>,
    pub orbit: OrbitScene,
}

impl SimulationRun {
    pub fn peak_total(&self) -> f64 {
        self.total.iter().copied().fold(0.0, f64::max)
    }

    pub fn mean_total(&self) -> f64 {
        if self.total.is_empty() {
            return 0.0;
        }
        self.total.iter().sum::<f64>() / self.total.len() as f64
    }
}

/// Run the energy model and build the orbit view for `params`.
///
/// Values are taken as given; range checks belong to the caller.
pub fn run(params: &SimulationParams) -> SimulationRun {
    let grid = SampleGrid::full_orbit();

    let satellites: Vec<SatelliteEnergy> = phase_shifts(params.satellites)
        .into_iter()
        .zip(0u32..)
        .map(|(phase, index)| SatelliteEnergy {
            index,
            phase,
            curve: energy_curve(params.modules, phase, grid.angles()),
        })
        .collect();

    let total = aggregate(satellites.iter().map(|s| s.curve.as_slice()), grid.len());

    let detections = params
        .asteroid_detection
        .then(|| detection::detect(&grid, &total));

    let orbit = OrbitScene::build(params.satellites, &grid, params.energy_sharing);

    debug!(
        satellites = params.satellites,
        modules = params.modules,
        detections = detections.as_ref().map_or(0, Vec::len),
        links = orbit.links.len(),
        "Simulation pass complete"
    );

    SimulationRun {
        params: *params,
        grid,
        satellites,
        total,
        detections,
        orbit,
    }
}
