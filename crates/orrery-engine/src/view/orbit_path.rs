/// Orbit ellipse geometry for drawing paths, in scene px.
///
/// The ellipse centre sits at `(-a·e, 0)` so that one focus lands on the
/// central body and perihelion lies on +x, matching `kepler::position`.

use std::f64::consts::TAU;

use glam::DVec2;

use crate::api::config::OrreryConfig;
use crate::catalogue::Catalogue;
use crate::core::kepler::OrbitalElements;

/// Padding factor applied around the outermost apoapsis.
pub const SCENE_PADDING: f64 = 2.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPath {
    /// Ellipse centre relative to the central body.
    pub center: DVec2,
    pub semi_major: f64,
    pub semi_minor: f64,
}

impl OrbitPath {
    /// `None` for bodies that do not orbit.
    pub fn from_elements(elements: &OrbitalElements, pixels_per_unit: f64) -> Option<Self> {
        if !elements.orbits() {
            return None;
        }
        Some(Self {
            center: DVec2::new(-elements.focus_distance() * pixels_per_unit, 0.0),
            semi_major: elements.semi_major_axis * pixels_per_unit,
            semi_minor: elements.semi_minor_axis() * pixels_per_unit,
        })
    }

    /// Sample the ellipse at evenly spaced eccentric anomalies, starting
    /// at perihelion and running counter-clockwise.
    pub fn points(&self, samples: usize) -> Vec<DVec2> {
        let mut points = Vec::with_capacity(samples);
        for i in 0..samples {
            let ea = (i as f64 / samples as f64) * TAU;
            points.push(DVec2::new(
                self.center.x + self.semi_major * ea.cos(),
                self.center.y + self.semi_minor * ea.sin(),
            ));
        }
        points
    }
}

/// Side length of a square scene that holds every orbit and the central body,
/// with padding.
pub fn scene_extent(catalogue: &Catalogue, config: &OrreryConfig) -> f64 {
    let max_radius = catalogue.max_apoapsis() * config.pixels_per_unit;
    (max_radius + config.central_diameter_px / 2.0) * SCENE_PADDING
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kepler;

    #[test]
    fn central_body_has_no_path() {
        assert!(OrbitPath::from_elements(&OrbitalElements::stationary(), 18.0).is_none());
    }

    #[test]
    fn perihelion_and_aphelion_on_x_axis() {
        let elements = OrbitalElements::new(2.0, 500.0, 0.25);
        let path = OrbitPath::from_elements(&elements, 10.0).unwrap();
        let points = path.points(4);
        assert!((points[0].x - 15.0).abs() < 1e-9); // a(1-e) * scale
        assert!((points[2].x + 25.0).abs() < 1e-9); // -a(1+e) * scale
    }

    #[test]
    fn solver_positions_lie_on_path() {
        let elements = OrbitalElements::new(1.524, 686.98, 0.0934);
        let path = OrbitPath::from_elements(&elements, 1.0).unwrap();
        for i in 0..50 {
            let t = elements.period_days * i as f64 / 50.0;
            let p = kepler::position(&elements, t).unwrap() - path.center;
            let on_ellipse = (p.x / path.semi_major).powi(2) + (p.y / path.semi_minor).powi(2);
            assert!((on_ellipse - 1.0).abs() < 1e-9, "t={t}: {on_ellipse}");
        }
    }

    #[test]
    fn extent_fits_outermost_orbit() {
        let config = OrreryConfig::default();
        let catalogue = Catalogue::solar_system();
        let extent = scene_extent(&catalogue, &config);
        let eris = 67.67 * 1.441 * 18.0;
        assert!((extent - (eris + 30.0) * 2.2).abs() < 1e-6);
    }
}
