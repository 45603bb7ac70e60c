//! Photon Energy Library
//!
//! Solar energy model for a single-orbit satellite constellation: the angular
//! sample grid, per-satellite phase assignment, energy curves and their
//! aggregate, the fixed-seed asteroid detection draw, and the orbit-view
//! geometry handed to the display layer.
//!
//! # Energy Model
//!
//! ```text
//! E_i[k] = max(sin(Θ[k] + φ_i), 0) · 100 · M        φ_i = 2π·i / N
//! T[k]   = Σ_i E_i[k]
//! ```
//!
//! | Symbol | Description |
//! |--------|-------------|
//! | Θ      | Sample grid, 500 angles over [0, 2π] |
//! | φ_i    | Phase shift of satellite i |
//! | M      | Modules per satellite (shared by every satellite) |
//! | N      | Satellite count |
//! | T      | Aggregate ("Total") curve |
//!
//! Every operation here is a pure function of its inputs. Range checks on
//! `N` and `M` happen in [`params`], which the input layer calls before a run.

use thiserror::Error;

pub mod detection;
pub mod energy;
pub mod geometry;
pub mod grid;
pub mod params;
pub mod simulation;

pub use detection::Detection;
pub use geometry::OrbitScene;
pub use grid::SampleGrid;
pub use params::SimulationParams;
pub use simulation::{run, SatelliteEnergy, SimulationRun};

/// Number of angles in the sample grid (endpoint inclusive)
pub const SAMPLE_POINTS: usize = 500;

/// Watts collected per module at normal solar incidence
pub const WATTS_PER_MODULE: f64 = 100.0;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnergyError {
    #[error("{field} must be within {min}..={max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
}

pub type Result<T> = std::result::Result<T, EnergyError>;
