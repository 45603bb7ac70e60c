//! Simulation parameters
//!
//! The slider/checkbox state of one run. The energy model consumes these as
//! plain values; [`SimulationParams::validated`] is the range check the input
//! layer runs before handing them over.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::{EnergyError, Result};

/// Allowed satellite counts
pub const SATELLITE_RANGE: RangeInclusive<u32> = 1..=10;

/// Allowed modules per satellite
pub const MODULE_RANGE: RangeInclusive<u32> = 1..=10;

pub const DEFAULT_SATELLITES: u32 = 6;
pub const DEFAULT_MODULES: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    pub satellites: u32,
    /// Modules per satellite, shared by the whole constellation
    pub modules: u32,
    pub asteroid_detection: bool,
    /// Draw links between adjacent satellites (cosmetic only)
    pub energy_sharing: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            satellites: DEFAULT_SATELLITES,
            modules: DEFAULT_MODULES,
            asteroid_detection: true,
            energy_sharing: true,
        }
    }
}

impl SimulationParams {
    pub fn validated(
        satellites: u32,
        modules: u32,
        asteroid_detection: bool,
        energy_sharing: bool,
    ) -> Result<Self> {
        Self {
            satellites,
            modules,
            asteroid_detection,
            energy_sharing,
        }
        .validate()
    }

    /// Check both counts against their ranges.
    pub fn validate(self) -> Result<Self> {
        check_range("satellites", self.satellites, &SATELLITE_RANGE)?;
        check_range("modules", self.modules, &MODULE_RANGE)?;
        Ok(self)
    }
}

fn check_range(field: &'static str, value: u32, range: &RangeInclusive<u32>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(EnergyError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = SimulationParams::default();
        assert_eq!(params.satellites, 6);
        assert_eq!(params.modules, 3);
        assert!(params.asteroid_detection);
        assert!(params.energy_sharing);
    }

    #[test]
    fn test_validated_bounds() {
        assert!(SimulationParams::validated(1, 1, false, false).is_ok());
        assert!(SimulationParams::validated(10, 10, true, true).is_ok());
    }

    #[test]
    fn test_zero_satellites_rejected() {
        let err = SimulationParams::validated(0, 3, true, true).unwrap_err();
        assert_eq!(
            err,
            EnergyError::OutOfRange {
                field: "satellites",
                value: 0,
                min: 1,
                max: 10
            }
        );
    }

    #[test]
    fn test_too_many_modules_rejected() {
        let err = SimulationParams::validated(6, 11, true, true).unwrap_err();
        assert!(err.to_string().contains("modules"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let params: SimulationParams = serde_json::from_str(r#"{"satellites": 2}"#).unwrap();
        assert_eq!(params.satellites, 2);
        assert_eq!(params.modules, DEFAULT_MODULES);
        assert!(params.energy_sharing);
    }
}
