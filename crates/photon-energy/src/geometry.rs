//! Orbit-view geometry
//!
//! Unit-circle orbit, Earth at the origin. Everything here is plain data for
//! the display layer; nothing feeds back into the energy model.

use serde::{Deserialize, Serialize};

use crate::energy::phase_shift;
use crate::SampleGrid;

/// Earth disk radius in orbit radii
pub const EARTH_RADIUS: f64 = 0.1;

/// Half-width of the square orbit view
pub const VIEW_LIMIT: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Point on the unit circle at `angle` radians.
    pub fn on_orbit(angle: f64) -> Self {
        Self {
            x: angle.cos(),
            y: angle.sin(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Cosmetic "energy sharing" line between two adjacent satellites.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub from_satellite: u32,
    pub to_satellite: u32,
    pub segment: Segment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitScene {
    pub earth_radius: f64,
    pub view_limit: f64,
    /// One dashed path per satellite, sampled on the grid
    pub orbits: Vec<Vec<Point>>,
    /// Satellite marker positions
    pub satellites: Vec<Point>,
    /// Satellite-to-Earth lines
    pub radials: Vec<Segment>,
    pub links: Vec<Link>,
}

impl OrbitScene {
    pub fn build(satellites: u32, grid: &SampleGrid, energy_sharing: bool) -> Self {
        let mut orbits = Vec::with_capacity(satellites as usize);
        let mut positions = Vec::with_capacity(satellites as usize);
        let mut radials = Vec::with_capacity(satellites as usize);

        for i in 0..satellites {
            let phase = phase_shift(i, satellites);
            orbits.push(orbit_path(phase, grid));

            let position = Point::on_orbit(phase);
            positions.push(position);
            radials.push(Segment {
                from: position,
                to: Point::ORIGIN,
            });
        }

        let links = if energy_sharing {
            sharing_links(satellites)
        } else {
            Vec::new()
        };

        Self {
            earth_radius: EARTH_RADIUS,
            view_limit: VIEW_LIMIT,
            orbits,
            satellites: positions,
            radials,
            links,
        }
    }
}

/// Orbit path traced from a satellite's phase.
pub fn orbit_path(phase: f64, grid: &SampleGrid) -> Vec<Point> {
    grid.angles()
        .iter()
        .map(|theta| Point::on_orbit(theta + phase))
        .collect()
}

/// Links between satellite `i` and `i + 1`. The ring is left open: the last
/// satellite does not link back to the first.
pub fn sharing_links(satellites: u32) -> Vec<Link> {
    if satellites < 2 {
        return Vec::new();
    }

    (0..satellites - 1)
        .map(|i| Link {
            from_satellite: i,
            to_satellite: i + 1,
            segment: Segment {
                from: Point::on_orbit(phase_shift(i, satellites)),
                to: Point::on_orbit(phase_shift(i + 1, satellites)),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_counts() {
        let grid = SampleGrid::full_orbit();
        let scene = OrbitScene::build(6, &grid, true);
        assert_eq!(scene.orbits.len(), 6);
        assert_eq!(scene.satellites.len(), 6);
        assert_eq!(scene.radials.len(), 6);
        assert_eq!(scene.links.len(), 5);
        assert!(scene.orbits.iter().all(|o| o.len() == grid.len()));
    }

    #[test]
    fn test_links_disabled() {
        let scene = OrbitScene::build(6, &SampleGrid::full_orbit(), false);
        assert!(scene.links.is_empty());
    }

    #[test]
    fn test_single_satellite_has_no_links() {
        assert!(sharing_links(1).is_empty());
        assert!(sharing_links(0).is_empty());
    }

    #[test]
    fn test_ring_left_open() {
        let links = sharing_links(4);
        assert_eq!(links.len(), 3);
        assert!(!links.iter().any(|l| l.from_satellite == 3 && l.to_satellite == 0));
    }

    #[test]
    fn test_satellite_zero_on_x_axis() {
        let scene = OrbitScene::build(3, &SampleGrid::full_orbit(), true);
        assert_eq!(scene.satellites[0], Point { x: 1.0, y: 0.0 });
        assert_eq!(scene.radials[0].to, Point::ORIGIN);
    }

    #[test]
    fn test_orbit_stays_on_unit_circle() {
        let path = orbit_path(1.0, &SampleGrid::full_orbit());
        for p in path {
            assert!(((p.x * p.x + p.y * p.y).sqrt() - 1.0).abs() < 1e-12);
        }
    }
}
