pub mod camera;
pub mod orbit_path;

pub use camera::{CameraState, Focus};
pub use orbit_path::{scene_extent, OrbitPath};
