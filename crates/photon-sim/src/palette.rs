//! Plot colors

use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const EARTH: Rgb = Rgb(0, 128, 0);
    pub const RADIAL: Rgb = Rgb(255, 0, 0);
    pub const LINK: Rgb = Rgb(0, 0, 255);
    pub const TOTAL: Rgb = Rgb(0, 0, 0);
    pub const ASTEROID: Rgb = Rgb(255, 0, 0);

    fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Viridis stops at 0, 1/9, ..., 1
const VIRIDIS: [Rgb; 10] = [
    Rgb(0x44, 0x01, 0x54),
    Rgb(0x48, 0x28, 0x78),
    Rgb(0x3e, 0x4a, 0x89),
    Rgb(0x31, 0x68, 0x8e),
    Rgb(0x26, 0x82, 0x8e),
    Rgb(0x1f, 0x9e, 0x89),
    Rgb(0x35, 0xb7, 0x79),
    Rgb(0x6d, 0xcd, 0x59),
    Rgb(0xb4, 0xde, 0x2c),
    Rgb(0xfd, 0xe7, 0x25),
];

/// Viridis at `t` in [0, 1]; values outside are clamped.
pub fn viridis(t: f64) -> Rgb {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (VIRIDIS.len() - 1) as f64;
    let lower = (scaled.floor() as usize).min(VIRIDIS.len() - 2);
    VIRIDIS[lower].lerp(VIRIDIS[lower + 1], scaled - lower as f64)
}

/// One color per satellite, spread evenly over the whole colormap.
pub fn satellite_colors(count: usize) -> Vec<Rgb> {
    match count {
        0 => Vec::new(),
        1 => vec![viridis(0.0)],
        n => (0..n).map(|i| viridis(i as f64 / (n - 1) as f64)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(viridis(0.0), Rgb(0x44, 0x01, 0x54));
        assert_eq!(viridis(1.0), Rgb(0xfd, 0xe7, 0x25));
        assert_eq!(viridis(-3.0), viridis(0.0));
        assert_eq!(viridis(f64::NAN), viridis(0.0));
    }

    #[test]
    fn test_satellite_colors_span_map() {
        let colors = satellite_colors(6);
        assert_eq!(colors.len(), 6);
        assert_eq!(colors[0], viridis(0.0));
        assert_eq!(colors[5], viridis(1.0));
    }

    #[test]
    fn test_hex_display() {
        assert_eq!(Rgb::EARTH.to_string(), "#008000");
        assert_eq!(serde_json::to_string(&Rgb::LINK).unwrap(), "\"#0000ff\"");
    }
}
