//! Terrain mesh generation for the rendering sink.
//!
//! Produces one vertex per grid cell and a single zig-zag triangle strip
//! covering the whole grid. The core never draws anything itself.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::height_field::HeightField;

/// A terrain vertex: position plus the shading-normal approximation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainVertex {
    pub position: Vec3,
    pub normal: Vec3,
}

/// Vertex and index data for one terrain surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainMesh {
    pub vertices: Vec<TerrainVertex>,
    /// Triangle-strip indices, `width * 2 * (height - 1)` entries.
    pub indices: Vec<u32>,
}

/// Build the grid-local mesh for a height field.
pub fn build_mesh(field: &HeightField) -> TerrainMesh {
    TerrainMesh {
        vertices: build_vertices(field),
        indices: strip_indices(field.width(), field.height()),
    }
}

/// One vertex per grid cell at `(x, height, -z)`; grid rows extend along
/// negative world Z.
pub fn build_vertices(field: &HeightField) -> Vec<TerrainVertex> {
    let width = field.width();
    let height = field.height();
    let mut vertices = Vec::with_capacity(width as usize * height as usize);

    for z in 0..height {
        for x in 0..width {
            vertices.push(TerrainVertex {
                position: Vec3::new(x as f32, field.cell(x, z), -(z as f32)),
                normal: field.vertex_normal(x, z),
            });
        }
    }

    vertices
}

/// Zig-zag triangle-strip indices: each row pair is walked left-to-right,
/// then the strip doubles back right-to-left on the next pair so the whole
/// grid is one strip.
pub fn strip_indices(width: u32, height: u32) -> Vec<u32> {
    if height < 2 {
        return Vec::new();
    }

    let mut indices = Vec::with_capacity((width * 2 * (height - 1)) as usize);
    let mut z = 0;
    while z < height - 1 {
        for x in 0..width {
            indices.push(x + z * width);
            indices.push(x + (z + 1) * width);
        }
        z += 1;
        if z < height - 1 {
            for x in (0..width).rev() {
                indices.push(x + (z + 1) * width);
                indices.push(x + z * width);
            }
        }
        z += 1;
    }

    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Raster;

    fn make_field(width: u32, height: u32) -> HeightField {
        let samples = vec![8; (width * height) as usize];
        HeightField::new(&Raster::new(width, height, samples).unwrap(), 256.0)
    }

    #[test]
    fn test_vertex_layout() {
        let field = make_field(3, 2);
        let vertices = build_vertices(&field);
        assert_eq!(vertices.len(), 6);
        // Row-major: vertex (x=2, z=1) is the last one, rows along -Z.
        assert_eq!(vertices[5].position, Vec3::new(2.0, 8.0, -1.0));
        // Flat grid: normals are straight up.
        assert!(vertices.iter().all(|v| v.normal == Vec3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_strip_index_count() {
        for &(w, h) in &[(2u32, 2u32), (4, 3), (5, 5), (3, 7)] {
            let indices = strip_indices(w, h);
            assert_eq!(
                indices.len() as u32,
                w * 2 * (h - 1),
                "strip length for {w}x{h}"
            );
            let max = (w * h) as u32;
            assert!(indices.iter().all(|&i| i < max));
        }
    }

    #[test]
    fn test_strip_starts_forward_then_doubles_back() {
        let indices = strip_indices(3, 3);
        // First row pair, left to right.
        assert_eq!(&indices[0..6], &[0, 3, 1, 4, 2, 5]);
        // Second row pair, right to left.
        assert_eq!(&indices[6..12], &[8, 5, 7, 4, 6, 3]);
    }

    #[test]
    fn test_degenerate_single_row() {
        assert!(strip_indices(4, 1).is_empty());
    }
}
