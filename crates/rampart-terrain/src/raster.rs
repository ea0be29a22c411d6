//! Raster input: one scalar sample (0–255) per pixel, row-major.
//!
//! The raster is the only external data the terrain system consumes; it
//! is validated once here so `HeightField` construction cannot fail.

use crate::error::TerrainError;

/// A validated 2D grid of 0–255 elevation samples.
#[derive(Debug, Clone)]
pub struct Raster {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl Raster {
    /// Create a raster from raw samples. Fails if either dimension is zero
    /// or the sample buffer does not match `width * height`.
    pub fn new(width: u32, height: u32, samples: Vec<u8>) -> Result<Self, TerrainError> {
        if width == 0 || height == 0 {
            return Err(TerrainError::EmptyRaster { width, height });
        }
        let expected = width as usize * height as usize;
        if samples.len() != expected {
            return Err(TerrainError::SampleCountMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Decode a PNG heightmap. Samples are taken from the red channel.
    pub fn decode_png(bytes: &[u8]) -> Result<Self, TerrainError> {
        let img = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = img.dimensions();
        let samples = img.pixels().map(|p| p.0[0]).collect();
        Self::new(width, height, samples)
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sample at (x, y). Callers must stay in bounds.
    pub fn sample(&self, x: u32, y: u32) -> u8 {
        self.samples[y as usize * self.width as usize + x as usize]
    }
}
