use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for the orrery, provided by the host once at start-up.
/// Every field has a default, so partial JSON is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrreryConfig {
    /// Scene pixels per length unit (per AU for the presets).
    pub pixels_per_unit: f64,
    /// Viewport width in screen pixels.
    pub viewport_width: f64,
    /// Viewport height in screen pixels.
    pub viewport_height: f64,
    /// Lower zoom bound.
    pub min_zoom: f64,
    /// Upper zoom bound.
    pub max_zoom: f64,
    /// Multiplicative zoom per wheel notch.
    pub zoom_step: f64,
    /// Lower bound of the speed control (simulated days per real second).
    pub min_speed: f64,
    /// Upper bound of the speed control.
    pub max_speed: f64,
    /// Speed at start-up.
    pub initial_speed: f64,
    /// Pointer travel (screen px) before a press becomes a drag instead of a click.
    pub drag_threshold: f64,
    /// Extra screen px around a body that still counts as a hit.
    pub hit_slack: f64,
    /// Drawn diameter of the central body, in scene px.
    pub central_diameter_px: f64,
    /// Body diameter that maps to `reference_px`.
    pub reference_diameter_km: f64,
    /// Drawn diameter of a body of `reference_diameter_km`.
    pub reference_px: f64,
    /// Smallest drawn diameter for an orbiting body.
    pub min_body_px: f64,
    /// Longest real-time delta a single frame may consume, in seconds.
    pub max_frame_seconds: f64,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            pixels_per_unit: 18.0,
            viewport_width: 1600.0,
            viewport_height: 900.0,
            min_zoom: 0.1,
            max_zoom: 50.0,
            zoom_step: 1.1,
            min_speed: 0.0,
            max_speed: 1000.0,
            initial_speed: 10.0,
            drag_threshold: 5.0,
            hit_slack: 12.0,
            central_diameter_px: 60.0,
            reference_diameter_km: 12742.0,
            reference_px: 6.0,
            min_body_px: 3.0,
            max_frame_seconds: 1.0,
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn range(field: &'static str, min: f64, max: f64) -> Result<(), ConfigError> {
    if min.is_finite() && max.is_finite() && min <= max {
        Ok(())
    } else {
        Err(ConfigError::Range { field, min, max })
    }
}

impl OrreryConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("pixels_per_unit", self.pixels_per_unit)?;
        positive("viewport_width", self.viewport_width)?;
        positive("viewport_height", self.viewport_height)?;
        positive("min_zoom", self.min_zoom)?;
        range("zoom", self.min_zoom, self.max_zoom)?;
        positive("zoom_step", self.zoom_step)?;
        range("speed", self.min_speed, self.max_speed)?;
        positive("reference_diameter_km", self.reference_diameter_km)?;
        positive("max_frame_seconds", self.max_frame_seconds)?;
        Ok(())
    }
}
