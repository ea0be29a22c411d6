//! HeightField: elevation grid with continuous height queries.

use glam::Vec3;

use rampart_core::constants::MAP_SCALE_FACTOR;

use crate::raster::Raster;

/// Discrete elevation grid sampled from a raster, immutable after
/// construction. Queries interpolate between grid cells.
#[derive(Debug, Clone)]
pub struct HeightField {
    width: u32,
    height: u32,
    /// Elevation per grid cell, row-major, always >= 0 and finite.
    heights: Vec<f32>,
}

impl HeightField {
    /// Build the elevation grid from a raster. Each sample is scaled by
    /// `elevation_range / 256`; grid dimensions equal raster dimensions.
    pub fn new(raster: &Raster, elevation_range: f32) -> Self {
        let scale = elevation_range / 256.0;
        let width = raster.width();
        let height = raster.height();

        let mut heights = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                heights.push(raster.sample(x, y) as f32 * scale);
            }
        }

        log::info!("built {width}x{height} height field, range {elevation_range}");

        Self {
            width,
            height,
            heights,
        }
    }

    /// Number of grid columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of grid rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw elevation at integer grid coordinates.
    pub fn cell(&self, x: u32, z: u32) -> f32 {
        self.heights[z as usize * self.width as usize + x as usize]
    }

    /// Continuous height query in grid-local coordinates.
    ///
    /// Outside `[0, width-2] x [0, height-2]` this returns 0. Inside, the
    /// unit cell is split along its diagonal: the point is treated as
    /// lower-left when both fractional coordinates are below 0.5, and
    /// upper-right otherwise. The 0.5 threshold is not a true triangle
    /// test against the diagonal; it is kept as-is for behavioral
    /// compatibility with the mesh the renderer draws.
    pub fn height_at(&self, local_x: f32, local_z: f32) -> f32 {
        if local_x < 0.0
            || local_z < 0.0
            || local_x > self.width as f32 - 2.0
            || local_z > self.height as f32 - 2.0
        {
            return 0.0;
        }

        let cx = local_x.floor() as u32;
        let cz = local_z.floor() as u32;
        let fx = local_x - cx as f32;
        let fz = local_z - cz as f32;

        let interpolated = if fx < 0.5 && fz < 0.5 {
            // Lower-left triangle: extrapolate from the origin corner.
            let dx = self.cell(cx + 1, cz) - self.cell(cx, cz);
            let dz = self.cell(cx, cz + 1) - self.cell(cx, cz);
            self.cell(cx, cz) + fx * dx + fz * dz
        } else {
            // Upper-right triangle: interpolate backward from the
            // opposite corner.
            let dx = self.cell(cx + 1, cz + 1) - self.cell(cx, cz + 1);
            let dz = self.cell(cx + 1, cz + 1) - self.cell(cx + 1, cz);
            self.cell(cx + 1, cz + 1) - (1.0 - fx) * dx - (1.0 - fz) * dz
        };

        interpolated * MAP_SCALE_FACTOR
    }

    /// Approximate shading normal at a grid vertex: `(dh_x, 1, dh_z)` from
    /// backward differences, one-sided on the x == 0 / z == 0 boundary.
    /// Not unit length and not a true surface normal.
    pub fn vertex_normal(&self, x: u32, z: u32) -> Vec3 {
        let curr = self.cell(x, z);

        let dx = if x > 0 {
            self.cell(x - 1, z) - curr
        } else if self.width > 1 {
            curr - self.cell(x + 1, z)
        } else {
            0.0
        };

        let dz = if z > 0 {
            self.cell(x, z - 1) - curr
        } else if self.height > 1 {
            curr - self.cell(x, z + 1)
        } else {
            0.0
        };

        Vec3::new(dx, 1.0, dz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 3x3 grid with known corner values in the first cell:
    /// h(0,0)=1, h(1,0)=2, h(0,1)=3, h(1,1)=4.
    fn make_test_field() -> HeightField {
        // elevation_range 256 => one grid unit per raster unit.
        #[rustfmt::skip]
        let samples: Vec<u8> = vec![
            1, 2, 5,
            3, 4, 5,
            5, 5, 5,
        ];
        let raster = Raster::new(3, 3, samples).unwrap();
        HeightField::new(&raster, 256.0)
    }

    #[test]
    fn test_grid_dimensions_match_raster() {
        let field = make_test_field();
        assert_eq!(field.width(), 3);
        assert_eq!(field.height(), 3);
        assert_eq!(field.cell(1, 1), 4.0);
    }

    #[test]
    fn test_elevation_scaling() {
        let raster = Raster::new(2, 2, vec![0, 64, 128, 255]).unwrap();
        let field = HeightField::new(&raster, 15.0);
        assert_eq!(field.cell(0, 0), 0.0);
        assert!((field.cell(1, 0) - 64.0 * 15.0 / 256.0).abs() < 1e-6);
        assert!((field.cell(1, 1) - 255.0 * 15.0 / 256.0).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range_returns_zero() {
        let field = make_test_field();
        assert_eq!(field.height_at(-0.001, 0.5), 0.0);
        assert_eq!(field.height_at(0.5, -0.001), 0.0);
        // Valid range ends at width - 2 = 1.
        assert_eq!(field.height_at(1.001, 0.5), 0.0);
        assert_eq!(field.height_at(0.5, 1.001), 0.0);
        // The boundary itself is still valid.
        assert_eq!(field.height_at(1.0, 1.0), 4.0 * MAP_SCALE_FACTOR);
    }

    #[test]
    fn test_lower_left_triangle() {
        let field = make_test_field();
        // h00 + fx*(h10-h00) + fz*(h01-h00) = 1 + 0.25*1 + 0.25*2 = 1.75
        let h = field.height_at(0.25, 0.25);
        assert!((h - 1.75 * MAP_SCALE_FACTOR).abs() < 1e-4, "got {h}");
    }

    #[test]
    fn test_upper_right_triangle() {
        let field = make_test_field();
        // h11 - (1-fx)*(h11-h01) - (1-fz)*(h11-h10)
        //   = 4 - 0.25*1 - 0.25*2 = 3.25
        let h = field.height_at(0.75, 0.75);
        assert!((h - 3.25 * MAP_SCALE_FACTOR).abs() < 1e-4, "got {h}");
    }

    /// The two branches agree at the cell center for arbitrary corners.
    #[test]
    fn test_branches_agree_at_cell_center() {
        let field = make_test_field();
        let below = field.height_at(0.499_99, 0.499_99);
        let center = field.height_at(0.5, 0.5);
        // Center is (h10 + h01)/2 = 2.5 via either formula.
        assert!((center - 2.5 * MAP_SCALE_FACTOR).abs() < 1e-4);
        assert!((below - center).abs() < 0.05, "below={below} center={center}");
    }

    /// On a planar grid both branches reproduce the plane exactly, so the
    /// heuristic split introduces no seam.
    #[test]
    fn test_planar_grid_is_exact() {
        // h = x + 2z over a 5x5 grid.
        let mut samples = Vec::new();
        for z in 0..5u8 {
            for x in 0..5u8 {
                samples.push(x + 2 * z);
            }
        }
        let raster = Raster::new(5, 5, samples).unwrap();
        let field = HeightField::new(&raster, 256.0);

        for &(x, z) in &[(0.2, 0.7), (1.5, 2.5), (2.9, 0.1), (3.0, 3.0), (0.5, 1.5)] {
            let expected = (x + 2.0 * z) * MAP_SCALE_FACTOR;
            let h = field.height_at(x, z);
            assert!((h - expected).abs() < 1e-3, "at ({x},{z}): {h} vs {expected}");
        }
    }

    /// Interior queries stay within the surrounding corner heights.
    #[test]
    fn test_bounds_following() {
        let field = make_test_field();
        let lo = 1.0 * MAP_SCALE_FACTOR;
        let hi = 4.0 * MAP_SCALE_FACTOR;
        for i in 0..10 {
            for j in 0..10 {
                let x = i as f32 / 10.0;
                let z = j as f32 / 10.0;
                let h = field.height_at(x, z);
                assert!(h >= lo - 1e-3 && h <= hi + 1e-3, "at ({x},{z}): {h}");
            }
        }
    }

    #[test]
    fn test_vertex_normal_differences() {
        let field = make_test_field();
        // Interior vertex (1,1): backward differences.
        let n = field.vertex_normal(1, 1);
        assert_eq!(n.x, field.cell(0, 1) - field.cell(1, 1));
        assert_eq!(n.y, 1.0);
        assert_eq!(n.z, field.cell(1, 0) - field.cell(1, 1));

        // Boundary vertex (0,0): one-sided differences.
        let n = field.vertex_normal(0, 0);
        assert_eq!(n.x, field.cell(0, 0) - field.cell(1, 0));
        assert_eq!(n.z, field.cell(0, 0) - field.cell(0, 1));
    }
}
