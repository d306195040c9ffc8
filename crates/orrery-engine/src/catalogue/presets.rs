/// The default catalogue: the Sun, the eight planets and five dwarf planets.
///
/// Semi-major axes in AU, periods in Earth days, mean diameters in km.
/// Orbits are planar and all perihelia point along +x.

use crate::catalogue::body::BodyDesc;
use crate::core::kepler::OrbitalElements;

pub const SUN_DIAMETER_KM: f64 = 1_392_700.0;

/// (name, diameter_km, color, a_au, period_days, eccentricity)
const ORBITING: [(&str, f64, &str, f64, f64, f64); 13] = [
    // Planets
    ("Mercury", 4879.0, "#B0AFA2", 0.387, 87.97, 0.2056),
    ("Venus", 12104.0, "#E6E2D4", 0.723, 224.70, 0.0068),
    ("Earth", 12742.0, "#6B93D6", 1.000, 365.25, 0.0167),
    ("Mars", 6779.0, "#C1440E", 1.524, 686.98, 0.0934),
    // Dwarf planets
    ("Ceres", 940.0, "#8C8C8C", 2.766, 1680.5, 0.0785),
    // Planets
    ("Jupiter", 139820.0, "#D8CA9D", 5.204, 4332.59, 0.0489),
    ("Saturn", 116460.0, "#F4D0A0", 9.582, 10759.22, 0.0565),
    ("Uranus", 50724.0, "#ACE5EE", 19.218, 30688.5, 0.0463),
    ("Neptune", 49244.0, "#5B5DDF", 30.110, 60182.0, 0.0094),
    // Dwarf planets
    ("Pluto", 2376.0, "#BFB5A7", 39.482, 90560.0, 0.2488),
    ("Haumea", 1632.0, "#D1EAF5", 43.13, 103770.0, 0.1912),
    ("Makemake", 1430.0, "#F4A460", 45.79, 111800.0, 0.1559),
    ("Eris", 2326.0, "#C0C0C0", 67.67, 203830.0, 0.4410),
];

/// Sun first, then bodies in order of semi-major axis.
pub fn solar_system() -> Vec<BodyDesc> {
    let mut bodies = Vec::with_capacity(ORBITING.len() + 1);
    bodies.push(BodyDesc::new(
        "Sun",
        SUN_DIAMETER_KM,
        "#FFD700",
        OrbitalElements::stationary(),
    ));
    for (name, diameter_km, color, a, period, e) in ORBITING {
        bodies.push(BodyDesc::new(
            name,
            diameter_km,
            color,
            OrbitalElements::new(a, period, e),
        ));
    }
    bodies
}
