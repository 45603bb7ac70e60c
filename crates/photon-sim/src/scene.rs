//! Scene document for the display layer
//!
//! Two views, mirroring the side-by-side figure: the orbit view (geometry) and
//! the energy view (curves over orbit angle).

use crate::palette::{satellite_colors, Rgb};
use photon_energy::detection::DETECTION_SEED;
use photon_energy::geometry::Point;
use photon_energy::SimulationRun;
use serde_json::{json, Value};

pub const ORBIT_TITLE: &str = "Orbit View";
pub const ENERGY_TITLE: &str = "Solar Energy Collected";
pub const ENERGY_X_LABEL: &str = "Orbit Angle (radians)";
pub const ENERGY_Y_LABEL: &str = "Energy (W)";
pub const TOTAL_LABEL: &str = "Total";
pub const ASTEROID_LABEL: &str = "Asteroids";

fn xy(points: &[Point]) -> Value {
    json!({
        "x": points.iter().map(|p| p.x).collect::<Vec<_>>(),
        "y": points.iter().map(|p| p.y).collect::<Vec<_>>(),
    })
}

pub fn orbit_view(run: &SimulationRun) -> Value {
    let colors = satellite_colors(run.satellites.len());
    let orbit = &run.orbit;
    let limit = orbit.view_limit;

    let orbits: Vec<Value> = orbit
        .orbits
        .iter()
        .map(|path| {
            let mut series = xy(path);
            series["style"] = json!({ "line": "dashed", "alpha": 0.3 });
            series
        })
        .collect();

    let satellites: Vec<Value> = run
        .satellites
        .iter()
        .zip(&orbit.satellites)
        .zip(&colors)
        .map(|((sat, position), color)| {
            json!({
                "label": sat.label(),
                "phase": sat.phase,
                "position": position,
                "color": color,
            })
        })
        .collect();

    let radials: Vec<Value> = orbit
        .radials
        .iter()
        .map(|r| json!({ "from": r.from, "to": r.to, "color": Rgb::RADIAL, "width": 1.0 }))
        .collect();

    let links: Vec<Value> = orbit
        .links
        .iter()
        .map(|l| {
            json!({
                "from_satellite": l.from_satellite + 1,
                "to_satellite": l.to_satellite + 1,
                "from": l.segment.from,
                "to": l.segment.to,
                "color": Rgb::LINK,
                "style": { "line": "dotted", "alpha": 0.5 },
            })
        })
        .collect();

    json!({
        "title": ORBIT_TITLE,
        "limits": { "x": [-limit, limit], "y": [-limit, limit] },
        "aspect": "equal",
        "earth": {
            "center": Point::ORIGIN,
            "radius": orbit.earth_radius,
            "color": Rgb::EARTH,
            "label": "Earth",
        },
        "orbits": orbits,
        "satellites": satellites,
        "radials": radials,
        "links": links,
    })
}

pub fn energy_view(run: &SimulationRun) -> Value {
    let colors = satellite_colors(run.satellites.len());

    let mut series: Vec<Value> = run
        .satellites
        .iter()
        .zip(&colors)
        .map(|(sat, color)| {
            json!({
                "label": sat.label(),
                "y": sat.curve,
                "color": color,
                "style": { "line": "solid", "alpha": 0.7 },
            })
        })
        .collect();

    series.push(json!({
        "label": TOTAL_LABEL,
        "y": run.total,
        "color": Rgb::TOTAL,
        "style": { "line": "dashed", "width": 2.0 },
    }));

    let mut view = json!({
        "title": ENERGY_TITLE,
        "x_label": ENERGY_X_LABEL,
        "y_label": ENERGY_Y_LABEL,
        "x": run.grid.angles(),
        "series": series,
    });

    if let Some(detections) = &run.detections {
        view["markers"] = json!({
            "label": ASTEROID_LABEL,
            "symbol": "x",
            "color": Rgb::ASTEROID,
            "size": 10,
            "points": detections,
        });
    }

    view
}

/// Full scene document for `run`.
pub fn to_scene_json(run: &SimulationRun) -> Value {
    json!({
        "orbit_view": orbit_view(run),
        "energy_view": energy_view(run),
        "metadata": {
            "params": run.params,
            "sample_points": run.grid.len(),
            "detection_seed": DETECTION_SEED,
            "peak_total_w": run.peak_total(),
            "mean_total_w": run.mean_total(),
            "generated_at": chrono::Utc::now().to_rfc3339(),
        }
    })
}
