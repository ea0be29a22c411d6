//! Session snapshot — the visible state handed to the rendering sink
//! after each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::SessionPhase;
use crate::events::SimEvent;
use crate::types::SimTime;

/// Complete per-tick state for the host. Read-only from the host's side;
/// the core never calls into rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub time: SimTime,
    pub phase: SessionPhase,
    pub cannon: CannonView,
    pub projectiles: Vec<ProjectileView>,
    pub targets: Vec<TargetView>,
    /// Events that occurred during this tick.
    pub events: Vec<SimEvent>,
}

/// Firing unit pose for rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CannonView {
    pub position: Vec3,
    /// Facing rotation about the world Y axis (radians).
    pub facing: f32,
    /// Barrel elevation (radians).
    pub elevation: f32,
    /// Seconds accumulated since the last shot.
    pub cooldown_secs: f32,
}

/// Projectile pose and state for rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vec3,
    pub settling: bool,
}

/// Target pose for rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetView {
    pub position: Vec3,
}
