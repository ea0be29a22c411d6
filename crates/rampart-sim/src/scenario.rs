//! Scenario definitions — initial placement of terrain, targets, and the
//! firing unit.

use std::f32::consts::FRAC_PI_2;

use glam::{Affine3A, Vec3};
use serde::{Deserialize, Serialize};

use rampart_core::constants::{DEFAULT_ESCAPE_X, DEFAULT_HEIGHT_RANGE};

/// Session setup data. `Default` is the stock mission: one cannon holding
/// a line against 14 targets drifting toward the escape boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Difference between the lowest and highest terrain elevation.
    pub elevation_range: f32,
    /// Terrain placement in the world.
    pub placement: Affine3A,
    pub cannon_position: Vec3,
    /// Cannon facing rotation about the world Y axis (radians).
    pub cannon_facing: f32,
    pub target_positions: Vec<Vec3>,
    /// World X coordinate targets must not cross.
    pub escape_x: f32,
}

impl Default for Scenario {
    fn default() -> Self {
        // 14 targets on the -330 line: one lead at x=420, the rest every
        // 20 units from 480 to 720.
        let mut target_positions = vec![Vec3::new(420.0, 50.0, -330.0)];
        for i in 0..13 {
            target_positions.push(Vec3::new(480.0 + 20.0 * i as f32, 50.0, -330.0));
        }

        Self {
            elevation_range: DEFAULT_HEIGHT_RANGE,
            placement: Affine3A::IDENTITY,
            cannon_position: Vec3::new(300.0, 0.0, -330.0),
            cannon_facing: -FRAC_PI_2,
            target_positions,
            escape_x: DEFAULT_ESCAPE_X,
        }
    }
}
