//! Drifting targets that ride the terrain surface.

use glam::Vec3;

use rampart_core::constants::TARGET_DRIFT_VELOCITY;
use rampart_core::types::HeightQueryable;

/// A target moving at constant horizontal velocity, vertically snapped to
/// the terrain beneath it every tick. Removed from the live set either by
/// projectile proximity or by breaching the escape boundary.
#[derive(Debug, Clone)]
pub struct DriftingTarget {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl DriftingTarget {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: TARGET_DRIFT_VELOCITY,
        }
    }

    /// Advance one tick. Returns true when the target has crossed the
    /// escape boundary; the caller owns removal and the Lost transition.
    pub fn update(&mut self, dt: f32, terrain: &dyn HeightQueryable, escape_x: f32) -> bool {
        self.position += self.velocity * dt;
        self.position.y = terrain.height_at(self.position.x, self.position.z);

        self.position.x < escape_x
    }
}
