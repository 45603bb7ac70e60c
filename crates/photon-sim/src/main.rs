//! Photon Constellation Simulator CLI
//!
//! Usage:
//!   photon-sim render --satellites 6 --modules 3 --output photon_scene.json --svg
//!   photon-sim interactive --svg < changes.txt

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use photon_sim::config::{self, ParamOverrides};
use photon_sim::{interactive, write_outputs, OutputOptions};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "photon-sim",
    about = "Simulate solar energy collection across a satellite constellation"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    params: ParamArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one pass and write the outputs (default)
    Render,
    /// Read `key=value` parameter changes from stdin, re-rendering after each
    Interactive,
}

#[derive(Args, Debug)]
struct ParamArgs {
    /// JSON file with simulation parameters
    #[arg(long, global = true)]
    params: Option<PathBuf>,

    /// Number of satellites [default: 6]
    #[arg(
        short = 'n',
        long,
        global = true,
        env = "PHOTON_SATELLITES",
        value_parser = clap::value_parser!(u32).range(1..=10)
    )]
    satellites: Option<u32>,

    /// Modules per satellite [default: 3]
    #[arg(
        short = 'm',
        long,
        global = true,
        env = "PHOTON_MODULES",
        value_parser = clap::value_parser!(u32).range(1..=10)
    )]
    modules: Option<u32>,

    /// Enable asteroid detection markers
    #[arg(long, global = true, conflicts_with = "no_asteroids")]
    asteroids: bool,

    /// Disable asteroid detection markers
    #[arg(long, global = true)]
    no_asteroids: bool,

    /// Enable energy sharing links
    #[arg(long, global = true, conflicts_with = "no_sharing")]
    sharing: bool,

    /// Disable energy sharing links
    #[arg(long, global = true)]
    no_sharing: bool,
}

impl ParamArgs {
    fn overrides(&self) -> ParamOverrides {
        ParamOverrides {
            satellites: self.satellites,
            modules: self.modules,
            asteroid_detection: toggle(self.asteroids, self.no_asteroids),
            energy_sharing: toggle(self.sharing, self.no_sharing),
        }
    }
}

/// Explicit on/off flag pair; `None` when neither was given
fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output scene JSON file
    #[arg(short, long, global = true, default_value = "photon_scene.json")]
    output: PathBuf,

    /// Also write an SVG figure next to the scene
    #[arg(long, global = true)]
    svg: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("photon_sim={0},photon_energy={0}", default_level))
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Photon Constellation Simulator");

    let params = config::resolve(cli.params.params.as_deref(), &cli.params.overrides())?;
    info!(
        "{} satellites, {} modules per satellite, asteroid detection {}, energy sharing {}",
        params.satellites,
        params.modules,
        on_off(params.asteroid_detection),
        on_off(params.energy_sharing)
    );
    let options = OutputOptions {
        scene_path: cli.output.output,
        svg: cli.output.svg,
    };

    match cli.command.unwrap_or(Command::Render) {
        Command::Render => {
            let run = photon_energy::run(&params);
            let written = write_outputs(&run, &options)?;
            info!("Wrote {} file(s)", written.len());
        }
        Command::Interactive => {
            info!("Reading parameter changes from stdin (key=value, `quit` to stop)");
            let stdin = io::stdin();
            let last = interactive::run_session(stdin.lock(), params, |run| {
                write_outputs(run, &options).map(|_| ())
            })?;
            info!(
                "Session ended at {} satellites, {} modules",
                last.satellites, last.modules
            );
        }
    }

    Ok(())
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use photon_energy::SimulationParams;

    fn overrides(args: &[&str]) -> ParamOverrides {
        Cli::try_parse_from(args).unwrap().params.overrides()
    }

    #[test]
    fn test_toggles_unset_by_default() {
        let o = overrides(&["photon-sim"]);
        assert_eq!(o.asteroid_detection, None);
        assert_eq!(o.energy_sharing, None);
    }

    #[test]
    fn test_flags_turn_file_toggles_back_on() {
        let o = overrides(&["photon-sim", "render", "--asteroids", "--sharing"]);
        let from_file = SimulationParams {
            asteroid_detection: false,
            energy_sharing: false,
            ..SimulationParams::default()
        };

        let params = o.apply(from_file);
        assert!(params.asteroid_detection);
        assert!(params.energy_sharing);
    }

    #[test]
    fn test_flags_turn_toggles_off() {
        let o = overrides(&["photon-sim", "--no-asteroids", "--no-sharing"]);
        assert_eq!(o.asteroid_detection, Some(false));
        assert_eq!(o.energy_sharing, Some(false));
    }

    #[test]
    fn test_on_and_off_conflict() {
        assert!(Cli::try_parse_from(["photon-sim", "--sharing", "--no-sharing"]).is_err());
    }
}
