//! Photon Constellation Simulator
//!
//! Input and display layer around [`photon_energy`]. Parameters arrive from the
//! command line, a JSON params file or an interactive stdin session; each
//! accepted parameter set runs one full pass of the energy model, and the
//! result is handed off as a JSON scene document and, optionally, an SVG
//! figure with the orbit view and the energy plot side by side.

use photon_energy::{EnergyError, SimulationRun};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub mod config;
pub mod interactive;
pub mod palette;
pub mod scene;
pub mod svg;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid parameters: {0}")]
    Params(#[from] EnergyError),
    #[error("Unrecognized input: {0}")]
    UnknownCommand(String),
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// Where a pass writes its output
#[derive(Debug, Clone)]
pub struct OutputOptions {
    /// JSON scene document path
    pub scene_path: PathBuf,
    /// Also write an SVG figure next to the scene
    pub svg: bool,
}

impl OutputOptions {
    pub fn svg_path(&self) -> PathBuf {
        self.scene_path.with_extension("svg")
    }
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            scene_path: PathBuf::from("photon_scene.json"),
            svg: false,
        }
    }
}

/// Write the outputs for `run`, returning the paths written.
pub fn write_outputs(run: &SimulationRun, options: &OutputOptions) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(2);

    write_scene(run, &options.scene_path)?;
    written.push(options.scene_path.clone());

    if options.svg {
        let svg_path = options.svg_path();
        info!("Writing SVG figure to {:?}", svg_path);
        std::fs::write(&svg_path, svg::render_figure(run))?;
        written.push(svg_path);
    }

    report_status(run);
    Ok(written)
}

fn write_scene(run: &SimulationRun, path: &Path) -> Result<()> {
    info!("Writing scene to {:?}", path);
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &scene::to_scene_json(run))?;
    Ok(())
}

fn report_status(run: &SimulationRun) {
    info!(
        "Simulation ready! {} satellites x {} modules, peak {:.1} W, mean {:.1} W",
        run.params.satellites,
        run.params.modules,
        run.peak_total(),
        run.mean_total()
    );
    if let Some(detections) = &run.detections {
        for d in detections {
            info!(
                "  Asteroid at sample {} (θ = {:.3} rad, total {:.1} W)",
                d.index, d.angle, d.energy
            );
        }
    }
}
