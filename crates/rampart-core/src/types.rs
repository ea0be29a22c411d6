//! Fundamental simulation types.

use serde::{Deserialize, Serialize};

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt as f64;
    }
}

/// Anything that can answer a continuous terrain height query in world
/// coordinates. Consumed by projectiles, targets, and the firing unit so
/// none of them depend on a concrete terrain type.
pub trait HeightQueryable {
    /// Terrain height at the given world (x, z). Off-terrain queries
    /// return 0.
    fn height_at(&self, x: f32, z: f32) -> f32;
}
