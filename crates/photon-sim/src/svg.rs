//! SVG figure
//!
//! Orbit view on the left, energy plot on the right, 1000 × 500 px.

use crate::palette::{satellite_colors, Rgb};
use crate::scene::{
    ASTEROID_LABEL, ENERGY_TITLE, ENERGY_X_LABEL, ENERGY_Y_LABEL, ORBIT_TITLE, TOTAL_LABEL,
};
use photon_energy::geometry::Point;
use photon_energy::SimulationRun;
use std::f64::consts::TAU;

pub const WIDTH: f64 = 1000.0;
pub const HEIGHT: f64 = 500.0;

const PANEL_SIZE: f64 = 380.0;
const PANEL_TOP: f64 = 50.0;
const ORBIT_LEFT: f64 = 50.0;
const ENERGY_LEFT: f64 = 580.0;
const Y_TICKS: usize = 5;

/// Maps data coordinates onto a square panel.
#[derive(Debug, Clone, Copy)]
struct Panel {
    left: f64,
    top: f64,
    x_range: (f64, f64),
    y_range: (f64, f64),
}

impl Panel {
    fn px(&self, x: f64) -> f64 {
        let (lo, hi) = self.x_range;
        self.left + (x - lo) / (hi - lo) * PANEL_SIZE
    }

    fn py(&self, y: f64) -> f64 {
        let (lo, hi) = self.y_range;
        self.top + (hi - y) / (hi - lo) * PANEL_SIZE
    }

    fn frame(&self, svg: &mut String) {
        svg.push_str(&format!(
            "  <rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"none\" stroke=\"#000000\"/>\n",
            self.left, self.top, PANEL_SIZE, PANEL_SIZE
        ));
    }

    fn title(&self, svg: &mut String, title: &str) {
        svg.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"14\">{}</text>\n",
            self.left + PANEL_SIZE / 2.0,
            self.top - 12.0,
            escape_xml(title)
        ));
    }
}

fn polyline(points: impl Iterator<Item = (f64, f64)>) -> String {
    points
        .map(|(x, y)| format!("{:.2},{:.2}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn line(svg: &mut String, from: (f64, f64), to: (f64, f64), stroke: Rgb, extra: &str) {
    svg.push_str(&format!(
        "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" {}/>\n",
        from.0, from.1, to.0, to.1, stroke, extra
    ));
}

fn orbit_panel(run: &SimulationRun, colors: &[Rgb], svg: &mut String) {
    let limit = run.orbit.view_limit;
    let panel = Panel {
        left: ORBIT_LEFT,
        top: PANEL_TOP,
        x_range: (-limit, limit),
        y_range: (-limit, limit),
    };
    let at = |p: &Point| (panel.px(p.x), panel.py(p.y));

    panel.frame(svg);
    panel.title(svg, ORBIT_TITLE);

    let scale = PANEL_SIZE / (2.0 * limit);
    svg.push_str(&format!(
        "  <circle class=\"earth\" cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\"/>\n",
        panel.px(0.0),
        panel.py(0.0),
        run.orbit.earth_radius * scale,
        Rgb::EARTH
    ));

    for path in &run.orbit.orbits {
        svg.push_str(&format!(
            "  <polyline class=\"orbit\" points=\"{}\" fill=\"none\" stroke=\"#1f77b4\" stroke-dasharray=\"6 4\" stroke-opacity=\"0.3\"/>\n",
            polyline(path.iter().map(at))
        ));
    }

    for radial in &run.orbit.radials {
        line(svg, at(&radial.from), at(&radial.to), Rgb::RADIAL, "stroke-width=\"1\"");
    }

    for link in &run.orbit.links {
        line(
            svg,
            at(&link.segment.from),
            at(&link.segment.to),
            Rgb::LINK,
            "class=\"link\" stroke-dasharray=\"2 3\" stroke-opacity=\"0.5\"",
        );
    }

    for (position, color) in run.orbit.satellites.iter().zip(colors) {
        let (cx, cy) = at(position);
        svg.push_str(&format!(
            "  <circle class=\"satellite\" cx=\"{:.2}\" cy=\"{:.2}\" r=\"5\" fill=\"{}\"/>\n",
            cx, cy, color
        ));
    }
}

fn energy_panel(run: &SimulationRun, colors: &[Rgb], svg: &mut String) {
    let y_max = run.peak_total().max(1.0) * 1.05;
    let panel = Panel {
        left: ENERGY_LEFT,
        top: PANEL_TOP,
        x_range: (0.0, TAU),
        y_range: (0.0, y_max),
    };
    let angles = run.grid.angles();
    let curve = |values: &[f64]| {
        polyline(
            angles
                .iter()
                .zip(values)
                .map(|(x, y)| (panel.px(*x), panel.py(*y))),
        )
    };

    panel.frame(svg);
    panel.title(svg, ENERGY_TITLE);

    // x ticks at whole radians
    let bottom = PANEL_TOP + PANEL_SIZE;
    for tick in 0..=6 {
        let x = panel.px(tick as f64);
        line(svg, (x, bottom), (x, bottom + 5.0), Rgb::TOTAL, "");
        svg.push_str(&format!(
            "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-size=\"10\">{}</text>\n",
            x,
            bottom + 17.0,
            tick
        ));
    }
    for i in 0..=Y_TICKS {
        let value = y_max * i as f64 / Y_TICKS as f64;
        let y = panel.py(value);
        line(svg, (ENERGY_LEFT - 5.0, y), (ENERGY_LEFT, y), Rgb::TOTAL, "");
        svg.push_str(&format!(
            "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"end\" font-size=\"10\">{:.0}</text>\n",
            ENERGY_LEFT - 8.0,
            y + 3.0,
            value
        ));
    }
    svg.push_str(&format!(
        "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"12\">{}</text>\n",
        ENERGY_LEFT + PANEL_SIZE / 2.0,
        bottom + 35.0,
        escape_xml(ENERGY_X_LABEL)
    ));
    svg.push_str(&format!(
        "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"12\" transform=\"rotate(-90 {:.1} {:.1})\">{}</text>\n",
        ENERGY_LEFT - 45.0,
        PANEL_TOP + PANEL_SIZE / 2.0,
        ENERGY_LEFT - 45.0,
        PANEL_TOP + PANEL_SIZE / 2.0,
        escape_xml(ENERGY_Y_LABEL)
    ));

    for (sat, color) in run.satellites.iter().zip(colors) {
        svg.push_str(&format!(
            "  <polyline class=\"energy\" points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-opacity=\"0.7\"/>\n",
            curve(&sat.curve),
            color
        ));
    }
    svg.push_str(&format!(
        "  <polyline class=\"total\" points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\" stroke-dasharray=\"8 4\"/>\n",
        curve(&run.total),
        Rgb::TOTAL
    ));

    let mut legend: Vec<(String, Rgb)> = run
        .satellites
        .iter()
        .zip(colors)
        .map(|(sat, color)| (sat.label(), *color))
        .collect();
    legend.push((TOTAL_LABEL.to_string(), Rgb::TOTAL));

    if let Some(detections) = &run.detections {
        for d in detections {
            let (x, y) = (panel.px(d.angle), panel.py(d.energy));
            line(
                svg,
                (x - 5.0, y - 5.0),
                (x + 5.0, y + 5.0),
                Rgb::ASTEROID,
                "class=\"asteroid\" stroke-width=\"2\"",
            );
            line(
                svg,
                (x - 5.0, y + 5.0),
                (x + 5.0, y - 5.0),
                Rgb::ASTEROID,
                "stroke-width=\"2\"",
            );
        }
        legend.push((ASTEROID_LABEL.to_string(), Rgb::ASTEROID));
    }

    let legend_left = ENERGY_LEFT + PANEL_SIZE - 90.0;
    for (i, (label, color)) in legend.iter().enumerate() {
        let y = PANEL_TOP + 15.0 + i as f64 * 14.0;
        line(
            svg,
            (legend_left, y - 4.0),
            (legend_left + 16.0, y - 4.0),
            *color,
            "stroke-width=\"2\"",
        );
        svg.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"10\">{}</text>\n",
            legend_left + 22.0,
            y,
            escape_xml(label)
        ));
    }
}

/// Render the two-panel figure for `run`.
pub fn render_figure(run: &SimulationRun) -> String {
    let colors = satellite_colors(run.satellites.len());
    let mut svg = String::new();

    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{0}\" height=\"{1}\" viewBox=\"0 0 {0} {1}\" font-family=\"sans-serif\">\n",
        WIDTH, HEIGHT
    ));
    svg.push_str("  <rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\n");

    orbit_panel(run, &colors, &mut svg);
    energy_panel(run, &colors, &mut svg);

    svg.push_str("</svg>\n");
    svg
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
