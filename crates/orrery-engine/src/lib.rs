pub mod api;
pub mod core;
pub mod catalogue;
pub mod view;
pub mod input;
pub mod bridge;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::config::OrreryConfig;
pub use api::types::{BodyId, ViewTransform};
pub use catalogue::{BodyDesc, BodyInfo, Catalogue, OrbitInfo};
pub use core::clock::{Elapsed, SimulationClock, DAYS_PER_MONTH, DAYS_PER_YEAR};
pub use core::kepler::{mean_anomaly, position, solve_kepler, true_anomaly, OrbitalElements};
pub use core::orrery::{BodyState, Frame, Orrery};
pub use core::time::FrameClock;
pub use view::{scene_extent, CameraState, Focus, OrbitPath};
pub use input::entry::parse_entry;
pub use input::queue::{InputEvent, InputQueue};
pub use bridge::protocol::{BodyRecord, FrameHeader, FrameLayout, PROTOCOL_VERSION};
pub use error::{CatalogueError, ConfigError};
