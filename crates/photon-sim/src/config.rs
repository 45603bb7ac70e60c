//! Parameter resolution
//!
//! Precedence, lowest first: built-in defaults, `--params` JSON file, command
//! line flags and `PHOTON_*` environment variables.

use crate::Result;
use photon_energy::SimulationParams;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

/// Values given explicitly on the command line or in the environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ParamOverrides {
    pub satellites: Option<u32>,
    pub modules: Option<u32>,
    pub asteroid_detection: Option<bool>,
    pub energy_sharing: Option<bool>,
}

impl ParamOverrides {
    pub fn apply(&self, base: SimulationParams) -> SimulationParams {
        SimulationParams {
            satellites: self.satellites.unwrap_or(base.satellites),
            modules: self.modules.unwrap_or(base.modules),
            asteroid_detection: self.asteroid_detection.unwrap_or(base.asteroid_detection),
            energy_sharing: self.energy_sharing.unwrap_or(base.energy_sharing),
        }
    }
}

/// Load a params file. Missing keys fall back to defaults.
pub fn load_params_file(path: impl AsRef<Path>) -> Result<SimulationParams> {
    let path = path.as_ref();
    info!("Loading parameters from {:?}", path);

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let params: SimulationParams = serde_json::from_reader(reader)?;

    Ok(params.validate()?)
}

pub fn resolve(params_file: Option<&Path>, overrides: &ParamOverrides) -> Result<SimulationParams> {
    let base = match params_file {
        Some(path) => load_params_file(path)?,
        None => SimulationParams::default(),
    };

    let params = overrides.apply(base).validate()?;
    debug!(?params, "Resolved simulation parameters");
    Ok(params)
}
