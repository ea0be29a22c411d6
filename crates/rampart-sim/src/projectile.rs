//! Ballistic projectiles fired by the firing unit.

use glam::Vec3;

use rampart_core::constants::{
    BOUNCE_DAMPING, GRAVITY, GROUND_SKIN, PROXIMITY_X, PROXIMITY_Y, SETTLED_LIFETIME,
};
use rampart_core::events::SimEvent;
use rampart_core::types::HeightQueryable;

use crate::target::DriftingTarget;

/// A gravity-driven projectile. Flying until ground contact, then
/// settling: a damped vertical-only bounce with no further destruction
/// capability. The transition is one-way.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub position: Vec3,
    pub velocity: Vec3,
    settling: bool,
    settled_secs: f32,
}

impl Projectile {
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self {
            position,
            velocity,
            settling: false,
            settled_secs: 0.0,
        }
    }

    /// Whether this projectile has struck ground.
    pub fn settling(&self) -> bool {
        self.settling
    }

    /// Whether this projectile has lingered past its settled lifetime and
    /// can be dropped.
    pub fn expired(&self) -> bool {
        self.settled_secs > SETTLED_LIFETIME
    }

    /// Advance one tick. The order of operations is part of the contract:
    /// ground contact, then gravity, then target proximity, then position
    /// integration. Reordering changes observable collision timing.
    pub fn update(
        &mut self,
        dt: f32,
        terrain: &dyn HeightQueryable,
        targets: &mut Vec<DriftingTarget>,
        events: &mut Vec<SimEvent>,
    ) {
        // 1. Ground contact with a small skin offset.
        if !self.settling
            && self.position.y - GROUND_SKIN
                <= terrain.height_at(self.position.x, self.position.z)
        {
            self.velocity = Vec3::new(0.0, self.velocity.y * BOUNCE_DAMPING, 0.0);
            self.settling = true;
            events.push(SimEvent::ProjectileSettled);
        }

        // 2. Gravity applies in both states.
        self.velocity.y -= GRAVITY * dt;

        // 3. Destruction test while still flying: axis-aligned box on X
        //    and Y, Z ignored. Filter pass, never erase-while-iterating.
        if !self.settling {
            let before = targets.len();
            targets.retain(|target| {
                (target.position.x - self.position.x).abs() >= PROXIMITY_X
                    || (target.position.y - self.position.y).abs() >= PROXIMITY_Y
            });
            for _ in targets.len()..before {
                log::debug!("target destroyed, {} remaining", targets.len());
                events.push(SimEvent::TargetDestroyed {
                    remaining: targets.len(),
                });
            }
        } else {
            self.settled_secs += dt;
        }

        // 4. Integrate position last.
        self.position += self.velocity * dt;
    }
}
