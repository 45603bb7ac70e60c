//! Interactive session
//!
//! Each stdin line stands in for one widget change:
//!
//! ```text
//! satellites=4
//! modules=7
//! asteroids=off
//! sharing=on
//! quit
//! ```
//!
//! Every accepted change reruns the whole simulation from scratch. Rejected
//! lines are logged and leave the parameters untouched.

use crate::{RenderError, Result};
use photon_energy::{run, SimulationParams, SimulationRun};
use std::io::{BufRead, ErrorKind};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamChange {
    Satellites(u32),
    Modules(u32),
    AsteroidDetection(bool),
    EnergySharing(bool),
}

impl ParamChange {
    /// New parameter set with this change applied, range-checked.
    pub fn apply(self, params: &SimulationParams) -> Result<SimulationParams> {
        let mut next = *params;
        match self {
            Self::Satellites(n) => next.satellites = n,
            Self::Modules(m) => next.modules = m,
            Self::AsteroidDetection(on) => next.asteroid_detection = on,
            Self::EnergySharing(on) => next.energy_sharing = on,
        }
        Ok(next.validate()?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Change(ParamChange),
    Quit,
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    if matches!(line, "quit" | "exit" | "q") {
        return Ok(Some(Command::Quit));
    }

    let (key, value) = line
        .split_once('=')
        .ok_or_else(|| RenderError::UnknownCommand(line.to_string()))?;
    let key = key.trim().to_ascii_lowercase();
    let value = value.trim();

    let change = match key.as_str() {
        "satellites" | "sats" => ParamChange::Satellites(parse_count(&key, value)?),
        "modules" => ParamChange::Modules(parse_count(&key, value)?),
        "asteroids" | "asteroid_detection" => {
            ParamChange::AsteroidDetection(parse_toggle(&key, value)?)
        }
        "sharing" | "energy_sharing" => ParamChange::EnergySharing(parse_toggle(&key, value)?),
        _ => return Err(RenderError::UnknownCommand(line.to_string())),
    };

    Ok(Some(Command::Change(change)))
}

fn parse_count(field: &str, value: &str) -> Result<u32> {
    value.parse().map_err(|_| invalid(field, value))
}

fn parse_toggle(field: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(invalid(field, value)),
    }
}

fn invalid(field: &str, value: &str) -> RenderError {
    RenderError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    }
}

/// Drive a session over `input`, calling `on_pass` after the initial pass and
/// after every accepted change. Returns the final parameters.
pub fn run_session<R, F>(
    input: R,
    initial: SimulationParams,
    mut on_pass: F,
) -> Result<SimulationParams>
where
    R: BufRead,
    F: FnMut(&SimulationRun) -> Result<()>,
{
    let mut params = initial;
    on_pass(&run(&params))?;

    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                warn!("Ignoring input: {}", e);
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!("Ignoring input: {}", e);
                continue;
            }
        };

        let change = match command {
            Command::Quit => break,
            Command::Change(change) => change,
        };

        match change.apply(&params) {
            Ok(next) => {
                info!("Applied {:?}", change);
                params = next;
                on_pass(&run(&params))?;
            }
            Err(e) => warn!("Rejected {:?}: {}", change, e),
        }
    }

    Ok(params)
}
