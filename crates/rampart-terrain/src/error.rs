//! Terrain construction errors.
//!
//! All failures are construction-time: once a `HeightField` exists, every
//! height query is total.

use thiserror::Error;

/// Errors raised while building terrain input data.
#[derive(Debug, Error)]
pub enum TerrainError {
    /// Raster dimensions were zero in at least one axis.
    #[error("raster has no cells ({width}x{height})")]
    EmptyRaster { width: u32, height: u32 },

    /// The sample buffer does not match the declared dimensions.
    #[error("raster sample count mismatch: expected {expected}, got {actual}")]
    SampleCountMismatch { expected: usize, actual: usize },

    /// The raster image bytes could not be decoded.
    #[error("failed to decode raster image: {0}")]
    Decode(#[from] image::ImageError),
}
