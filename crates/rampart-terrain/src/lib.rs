//! Terrain system for RAMPART.
//!
//! Raster decoding, height-field interpolation, world-space placement,
//! and terrain mesh generation.

pub use rampart_core as core;

pub mod error;
pub mod height_field;
pub mod mesh;
pub mod raster;
pub mod surface;

// Re-export key types for convenience.
pub use error::TerrainError;
pub use height_field::HeightField;
pub use raster::Raster;
pub use surface::TerrainSurface;
