pub mod clock;
pub mod kepler;
pub mod orrery;
pub mod time;
