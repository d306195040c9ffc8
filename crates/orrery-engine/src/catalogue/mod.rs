pub mod body;
pub mod presets;

pub use body::{BodyDesc, BodyInfo, OrbitInfo};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::api::types::BodyId;
use crate::error::CatalogueError;

/// JSON shape of a catalogue file: `{ "bodies": [ ... ] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogueFile {
    bodies: Vec<BodyDesc>,
}

/// Validated, read-only set of bodies. Exactly one body is central.
#[derive(Debug, Clone)]
pub struct Catalogue {
    bodies: Vec<BodyDesc>,
    central: BodyId,
}

impl Catalogue {
    /// Parse and validate a catalogue from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, CatalogueError> {
        let file: CatalogueFile = serde_json::from_str(json)?;
        Self::from_bodies(file.bodies)
    }

    /// Validate a list of bodies. Order is kept; ids are indices.
    pub fn from_bodies(bodies: Vec<BodyDesc>) -> Result<Self, CatalogueError> {
        if bodies.is_empty() {
            return Err(CatalogueError::Empty);
        }

        let mut names = HashSet::with_capacity(bodies.len());
        for (index, body) in bodies.iter().enumerate() {
            validate_body(index, body)?;
            if !names.insert(body.name.as_str()) {
                return Err(CatalogueError::DuplicateName(body.name.clone()));
            }
        }

        let central: Vec<usize> = bodies
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_central())
            .map(|(i, _)| i)
            .collect();
        if central.len() != 1 {
            return Err(CatalogueError::CentralBodyCount(central.len()));
        }

        Ok(Self {
            bodies,
            central: BodyId(central[0] as u32),
        })
    }

    /// The built-in solar system.
    pub fn solar_system() -> Self {
        Self {
            bodies: presets::solar_system(),
            central: BodyId(0),
        }
    }

    pub fn get(&self, id: BodyId) -> Option<&BodyDesc> {
        self.bodies.get(id.index())
    }

    /// Look a body up by name.
    pub fn find(&self, name: &str) -> Option<BodyId> {
        self.bodies
            .iter()
            .position(|b| b.name == name)
            .map(|i| BodyId(i as u32))
    }

    pub fn central(&self) -> BodyId {
        self.central
    }

    pub fn is_central(&self, id: BodyId) -> bool {
        id == self.central
    }

    pub fn contains(&self, id: BodyId) -> bool {
        id.index() < self.bodies.len()
    }

    /// Iterate over `(id, body)` pairs in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &BodyDesc)> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(i, b)| (BodyId(i as u32), b))
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Largest apoapsis over all orbiting bodies, in length units.
    pub fn max_apoapsis(&self) -> f64 {
        self.bodies
            .iter()
            .filter(|b| !b.is_central())
            .map(|b| b.elements.apoapsis())
            .fold(0.0, f64::max)
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::solar_system()
    }
}

fn validate_body(index: usize, body: &BodyDesc) -> Result<(), CatalogueError> {
    let name = || body.name.clone();
    if body.name.trim().is_empty() {
        return Err(CatalogueError::EmptyName { index });
    }
    let e = body.elements.eccentricity;
    if !(0.0..1.0).contains(&e) {
        return Err(CatalogueError::Eccentricity { name: name(), value: e });
    }
    let a = body.elements.semi_major_axis;
    if !a.is_finite() || a < 0.0 {
        return Err(CatalogueError::SemiMajorAxis { name: name(), value: a });
    }
    let period = body.elements.period_days;
    // A positive period must also give a finite mean motion
    if !period.is_finite() || period < 0.0 || (period > 0.0 && !body.elements.orbits()) {
        return Err(CatalogueError::Period { name: name(), value: period });
    }
    if !body.diameter_km.is_finite() || body.diameter_km < 0.0 {
        return Err(CatalogueError::Diameter {
            name: name(),
            value: body.diameter_km,
        });
    }
    Ok(())
}
