/// Keplerian orbital mechanics. Pure math, no engine state.
///
/// Orbits are planar with perihelion on the +x axis. Times are in days,
/// lengths in whatever unit the semi-major axis uses (AU for the presets).
/// Every function is a pure function of its inputs, so the clock can be
/// scrubbed to any time, including backwards.

use std::f64::consts::{PI, TAU};

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Newton–Raphson iteration cap. The loop never reports non-convergence;
/// after this many steps the current estimate is returned as-is.
pub const MAX_ITERATIONS: u32 = 10;

/// Step size below which the iteration is considered converged.
pub const TOLERANCE: f64 = 1e-7;

/// Above this eccentricity the solver seeds from π instead of M.
pub const HIGH_ECCENTRICITY: f64 = 0.8;

/// Orbital elements for one body. Immutable once loaded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Semi-major axis (length units, AU for the presets).
    #[serde(default)]
    pub semi_major_axis: f64,
    /// Orbital period in days. Zero means the body does not orbit.
    #[serde(default)]
    pub period_days: f64,
    /// Eccentricity in [0, 1).
    #[serde(default)]
    pub eccentricity: f64,
}

impl OrbitalElements {
    pub fn new(semi_major_axis: f64, period_days: f64, eccentricity: f64) -> Self {
        Self {
            semi_major_axis,
            period_days,
            eccentricity,
        }
    }

    /// Elements of a body that sits still at the origin (the central star).
    pub fn stationary() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Whether the body moves at all. A period so short that the mean
    /// motion overflows counts as not orbiting.
    pub fn orbits(&self) -> bool {
        self.period_days.is_finite()
            && self.period_days > 0.0
            && (TAU / self.period_days).is_finite()
    }

    /// Closest approach to the central body.
    pub fn periapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Farthest distance from the central body.
    pub fn apoapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity).sqrt()
    }

    /// Distance from the ellipse centre to either focus.
    pub fn focus_distance(&self) -> f64 {
        self.semi_major_axis * self.eccentricity
    }
}

/// Mean anomaly at `time_days`, reduced into [0, 2π).
/// Uses a Euclidean remainder so negative times wrap correctly.
/// Returns 0 when the angle is not representable (zero or overflowing
/// period, non-finite time).
pub fn mean_anomaly(period_days: f64, time_days: f64) -> f64 {
    let m = (TAU / period_days * time_days).rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if !m.is_finite() || m >= TAU {
        0.0
    } else {
        m
    }
}

/// Solve Kepler's equation `M = E - e·sin(E)` for the eccentric anomaly.
/// `mean_anomaly` in radians, returns radians.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let mut ea = if eccentricity > HIGH_ECCENTRICITY {
        PI
    } else {
        mean_anomaly
    };
    for _ in 0..MAX_ITERATIONS {
        let prev = ea;
        let f = prev - eccentricity * prev.sin() - mean_anomaly;
        let df = 1.0 - eccentricity * prev.cos();
        ea = prev - f / df;
        if (ea - prev).abs() < TOLERANCE {
            break;
        }
    }
    ea
}

/// True anomaly from eccentric anomaly, quadrant-correct via atan2.
pub fn true_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    let half = eccentric_anomaly / 2.0;
    2.0 * ((1.0 + eccentricity).sqrt() * half.sin())
        .atan2((1.0 - eccentricity).sqrt() * half.cos())
}

/// Distance from the central body at the given eccentric anomaly.
pub fn radius(semi_major_axis: f64, eccentricity: f64, eccentric_anomaly: f64) -> f64 {
    semi_major_axis * (1.0 - eccentricity * eccentric_anomaly.cos())
}

/// Planar offset from the central body at `time_days`.
/// Returns `None` for bodies without an orbital period.
pub fn position(elements: &OrbitalElements, time_days: f64) -> Option<DVec2> {
    if !elements.orbits() {
        return None;
    }
    let e = elements.eccentricity;
    let m = mean_anomaly(elements.period_days, time_days);
    let ea = solve_kepler(m, e);
    let nu = true_anomaly(ea, e);
    let r = radius(elements.semi_major_axis, e, ea);
    Some(DVec2::new(r * nu.cos(), r * nu.sin()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn residual(ea: f64, e: f64, m: f64) -> f64 {
        (ea - e * ea.sin() - m).abs()
    }

    #[test]
    fn kepler_circular_orbit() {
        // For e=0, eccentric anomaly = mean anomaly
        let ea = solve_kepler(1.0, 0.0);
        assert!((ea - 1.0).abs() < 1e-12);
    }

    #[test]
    fn kepler_mercury_eccentricity() {
        let m = 1.5;
        let ea = solve_kepler(m, 0.2056);
        let r = residual(ea, 0.2056, m);
        assert!(r < 1e-10, "residual = {r}");
    }

    #[test]
    fn kepler_residual_across_grid() {
        for i in 0..=99 {
            let e = 0.99 * i as f64 / 99.0;
            for j in 0..720 {
                let m = TAU * j as f64 / 720.0;
                let ea = solve_kepler(m, e);
                let r = residual(ea, e, m);
                assert!(r < 1e-6, "e={e} M={m} residual={r}");
            }
        }
    }

    #[test]
    fn kepler_residual_random_inputs() {
        for _ in 0..10_000 {
            let e = rand::random_range(0.0..=0.99);
            let m = rand::random_range(0.0..TAU);
            let ea = solve_kepler(m, e);
            let r = residual(ea, e, m);
            assert!(r < 1e-6, "e={e} M={m} residual={r}");
        }
    }

    #[test]
    fn high_eccentricity_seeds_from_pi() {
        // M=π is already a root, so a π seed must not move
        let ea = solve_kepler(PI, 0.95);
        assert!((ea - PI).abs() < 1e-12);
    }

    #[test]
    fn mean_anomaly_wraps_negative_time() {
        let m = mean_anomaly(100.0, -25.0);
        assert!((m - 1.5 * PI).abs() < 1e-12, "m = {m}");
    }

    #[test]
    fn mean_anomaly_stays_in_range() {
        for t in [-1e9, -365.25, -1e-300, 0.0, 1e-300, 365.25, 1e9, 1e15] {
            let m = mean_anomaly(87.97, t);
            assert!((0.0..TAU).contains(&m), "t={t} gave m={m}");
        }
    }

    #[test]
    fn starts_at_perihelion() {
        let elements = OrbitalElements::new(1.524, 686.98, 0.0934);
        let pos = position(&elements, 0.0).unwrap();
        assert!((pos.x - 1.524 * (1.0 - 0.0934)).abs() < 1e-12);
        assert!(pos.y.abs() < 1e-12);
    }

    #[test]
    fn starts_at_perihelion_when_highly_eccentric() {
        let elements = OrbitalElements::new(10.0, 1000.0, 0.9);
        let pos = position(&elements, 0.0).unwrap();
        assert!((pos.x - 1.0).abs() < 1e-9, "x = {}", pos.x);
        assert!(pos.y.abs() < 1e-9, "y = {}", pos.y);
    }

    #[test]
    fn circular_half_period_is_opposite() {
        let elements = OrbitalElements::new(2.0, 400.0, 0.0);
        let pos = position(&elements, 200.0).unwrap();
        assert!((pos.x + 2.0).abs() < 1e-12, "x = {}", pos.x);
        assert!(pos.y.abs() < 1e-12, "y = {}", pos.y);
    }

    #[test]
    fn position_is_periodic() {
        let elements = OrbitalElements::new(39.482, 90560.0, 0.2488);
        for t in [0.0, 12.5, 1234.5, 45000.0, -777.0] {
            let a = position(&elements, t).unwrap();
            let b = position(&elements, t + elements.period_days).unwrap();
            assert!((a - b).length() < 1e-8, "t={t}: {a} vs {b}");
        }
    }

    #[test]
    fn backward_scrub_matches_forward_wrap() {
        let elements = OrbitalElements::new(1.0, 365.25, 0.0167);
        let behind = position(&elements, -100.0).unwrap();
        let ahead = position(&elements, 265.25).unwrap();
        assert!((behind - ahead).length() < 1e-9);
    }

    #[test]
    fn distance_stays_between_apsides() {
        let elements = OrbitalElements::new(67.67, 203830.0, 0.441);
        for i in 0..200 {
            let t = elements.period_days * i as f64 / 200.0;
            let r = position(&elements, t).unwrap().length();
            assert!(r >= elements.periapsis() - 1e-9 && r <= elements.apoapsis() + 1e-9);
        }
    }

    #[test]
    fn stationary_body_has_no_position() {
        assert!(position(&OrbitalElements::stationary(), 100.0).is_none());
        let nan_period = OrbitalElements::new(1.0, f64::NAN, 0.0);
        assert!(position(&nan_period, 100.0).is_none());
    }

    #[test]
    fn subnormal_period_does_not_orbit() {
        let elements = OrbitalElements::new(1.0, 1e-310, 0.1);
        assert!(!elements.orbits());
        assert!(position(&elements, 0.0).is_none());
        assert!(position(&elements, 1234.5).is_none());
    }

    #[test]
    fn mean_anomaly_overflow_folds_to_zero() {
        assert_eq!(mean_anomaly(1e-310, 0.0), 0.0);
        assert_eq!(mean_anomaly(1e-300, 1e300), 0.0);
        assert_eq!(mean_anomaly(365.25, f64::INFINITY), 0.0);
    }

    #[test]
    fn huge_times_stay_finite() {
        let elements = OrbitalElements::new(1.0, 365.25, 0.0167);
        let pos = position(&elements, 1e300).unwrap();
        assert!(pos.is_finite());
    }

    #[test]
    fn moves_counterclockwise() {
        let elements = OrbitalElements::new(1.0, 365.25, 0.0167);
        let pos = position(&elements, 30.0).unwrap();
        assert!(pos.y > 0.0);
    }

    #[test]
    fn semi_minor_and_focus() {
        let elements = OrbitalElements::new(5.0, 1.0, 0.6);
        assert!((elements.semi_minor_axis() - 4.0).abs() < 1e-12);
        assert!((elements.focus_distance() - 3.0).abs() < 1e-12);
        assert!((elements.periapsis() - 2.0).abs() < 1e-12);
        assert!((elements.apoapsis() - 8.0).abs() < 1e-12);
    }
}
