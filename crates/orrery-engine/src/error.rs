//! Start-up data errors.
//!
//! User input never produces an error (it is clamped, ignored or reverted);
//! these only cover configuration and catalogue data handed in by the host.

use thiserror::Error;

/// Errors raised while loading or validating a body catalogue.
#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalogue has no bodies")]
    Empty,

    #[error("body #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("duplicate body name: {0}")]
    DuplicateName(String),

    #[error("{name}: eccentricity {value} is outside [0, 1)")]
    Eccentricity { name: String, value: f64 },

    #[error("{name}: semi-major axis must be finite and non-negative, got {value}")]
    SemiMajorAxis { name: String, value: f64 },

    #[error("{name}: orbital period must be zero or long enough for a finite mean motion, got {value}")]
    Period { name: String, value: f64 },

    #[error("{name}: diameter must be finite and non-negative, got {value}")]
    Diameter { name: String, value: f64 },

    #[error("catalogue needs exactly one central (non-orbiting) body, found {0}")]
    CentralBodyCount(usize),
}

/// Errors raised while loading or validating an [`OrreryConfig`](crate::OrreryConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{field} must be finite and positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("invalid {field} range: {min}..={max}")]
    Range {
        field: &'static str,
        min: f64,
        max: f64,
    },
}
