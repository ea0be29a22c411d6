//! TerrainSurface: a placed height field answering world-space queries.

use glam::{Affine3A, Vec3};

use rampart_core::constants::MAP_SCALE_FACTOR;
use rampart_core::types::HeightQueryable;

use crate::height_field::HeightField;
use crate::mesh::{self, TerrainMesh};

/// A height field with a placement transform, letting terrain be
/// repositioned and rescaled without re-baking the grid. The transform is
/// constant for the surface's lifetime.
#[derive(Debug, Clone)]
pub struct TerrainSurface {
    field: HeightField,
    /// Grid-local to world transform (placement composed with the map
    /// scale factor).
    world: Affine3A,
    inverse_world: Affine3A,
}

impl TerrainSurface {
    /// Place a height field in the world. `placement` is translation plus
    /// uniform scale (identity rotation in practice); the fixed map scale
    /// is composed on top.
    pub fn new(field: HeightField, placement: Affine3A) -> Self {
        let world = Affine3A::from_scale(Vec3::splat(MAP_SCALE_FACTOR)) * placement;
        let inverse_world = world.inverse();
        Self {
            field,
            world,
            inverse_world,
        }
    }

    /// The grid-local to world transform used by the rendering sink.
    pub fn world(&self) -> Affine3A {
        self.world
    }

    /// The wrapped height field.
    pub fn field(&self) -> &HeightField {
        &self.field
    }

    /// World-space terrain mesh for rendering.
    pub fn mesh(&self) -> TerrainMesh {
        let mut mesh = mesh::build_mesh(&self.field);
        for vertex in &mut mesh.vertices {
            vertex.position = self.world.transform_point3(vertex.position);
            vertex.normal = self.world.transform_vector3(vertex.normal);
        }
        mesh
    }
}

impl HeightQueryable for TerrainSurface {
    /// Apply the inverse placement to (x, 0, z), flip local Z (raster rows
    /// grow downward while world Z grows the other way), and delegate to
    /// the height field.
    fn height_at(&self, x: f32, z: f32) -> f32 {
        let local = self.inverse_world.transform_point3(Vec3::new(x, 0.0, z));
        self.field.height_at(local.x, -local.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Raster;

    /// 4x4 planar grid: h = x + 2z.
    fn make_planar_field() -> HeightField {
        let mut samples = Vec::new();
        for z in 0..4u8 {
            for x in 0..4u8 {
                samples.push(x + 2 * z);
            }
        }
        HeightField::new(&Raster::new(4, 4, samples).unwrap(), 256.0)
    }

    #[test]
    fn test_identity_placement_query() {
        let surface = TerrainSurface::new(make_planar_field(), Affine3A::IDENTITY);
        // World (10, -10) -> local (1, -1) -> flipped to grid (1, 1).
        let h = surface.height_at(10.0, -10.0);
        assert!((h - 3.0 * MAP_SCALE_FACTOR).abs() < 1e-3, "got {h}");
    }

    #[test]
    fn test_translated_placement_query() {
        let placement = Affine3A::from_translation(Vec3::new(5.0, 0.0, 0.0));
        let surface = TerrainSurface::new(make_planar_field(), placement);
        // Grid (1, 1) sits at world x = (1 + 5) * scale, z = -1 * scale.
        let h = surface.height_at(60.0, -10.0);
        assert!((h - 3.0 * MAP_SCALE_FACTOR).abs() < 1e-3, "got {h}");
    }

    #[test]
    fn test_off_terrain_is_zero() {
        let surface = TerrainSurface::new(make_planar_field(), Affine3A::IDENTITY);
        assert_eq!(surface.height_at(-5.0, -5.0), 0.0);
        assert_eq!(surface.height_at(500.0, -5.0), 0.0);
        // Positive world Z maps to negative grid Z: off-terrain.
        assert_eq!(surface.height_at(10.0, 10.0), 0.0);
    }

    #[test]
    fn test_mesh_is_world_space() {
        let surface = TerrainSurface::new(make_planar_field(), Affine3A::IDENTITY);
        let mesh = surface.mesh();
        // Grid vertex (x=1, z=1) has local position (1, h, -1).
        let v = &mesh.vertices[5];
        assert_eq!(v.position, Vec3::new(10.0, 30.0, -10.0));
    }
}
