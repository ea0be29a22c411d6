//! Events emitted by the simulation for host feedback (audio, UI).

use serde::{Deserialize, Serialize};

/// Per-tick simulation events, drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// The firing unit launched a projectile.
    ShotFired { elevation: f32 },
    /// A projectile destroyed a target by proximity.
    TargetDestroyed { remaining: usize },
    /// A projectile struck the ground and began settling.
    ProjectileSettled,
    /// A target crossed the escape boundary.
    TargetBreached { x: f32 },
    /// The session transitioned to Lost this tick.
    Defeat,
    /// The session transitioned to Won this tick.
    Victory,
}
