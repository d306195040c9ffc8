use serde::{Deserialize, Serialize};

use crate::api::config::OrreryConfig;
use crate::core::kepler::OrbitalElements;

/// One body as supplied by the host: identity, size, colour and orbit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyDesc {
    /// Display name, unique within a catalogue.
    pub name: String,
    /// Physical diameter, used for the drawn size and the info panel.
    pub diameter_km: f64,
    /// Display colour, passed through to the presentation layer untouched.
    #[serde(default)]
    pub color: String,
    #[serde(flatten)]
    pub elements: OrbitalElements,
}

impl BodyDesc {
    pub fn new(name: &str, diameter_km: f64, color: &str, elements: OrbitalElements) -> Self {
        Self {
            name: name.to_string(),
            diameter_km,
            color: color.to_string(),
            elements,
        }
    }

    /// A body without an orbital period sits at the origin.
    pub fn is_central(&self) -> bool {
        !self.elements.orbits()
    }

    /// Drawn diameter in scene px (before zoom).
    /// The central body has a fixed size; everything else scales with its
    /// physical diameter relative to the reference body, with a floor.
    pub fn visual_diameter_px(&self, config: &OrreryConfig) -> f64 {
        if self.is_central() {
            return config.central_diameter_px;
        }
        let scaled = self.diameter_km / config.reference_diameter_km * config.reference_px;
        scaled.max(config.min_body_px)
    }

    /// Static facts for tooltips and the info panel.
    pub fn info(&self) -> BodyInfo {
        let orbit = (!self.is_central()).then(|| OrbitInfo {
            period_days: self.elements.period_days,
            semi_major_axis: self.elements.semi_major_axis,
            eccentricity: self.elements.eccentricity,
        });
        BodyInfo {
            name: self.name.clone(),
            diameter_km: self.diameter_km,
            color: self.color.clone(),
            orbit,
        }
    }
}

/// Read-only description of a body for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyInfo {
    pub name: String,
    pub diameter_km: f64,
    pub color: String,
    /// Absent for the central body.
    pub orbit: Option<OrbitInfo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitInfo {
    pub period_days: f64,
    pub semi_major_axis: f64,
    pub eccentricity: f64,
}
