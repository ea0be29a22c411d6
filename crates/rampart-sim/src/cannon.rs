//! The firing unit: aim state, shot cooldown, and owned projectiles.

use glam::{Quat, Vec3};

use rampart_core::commands::TickInput;
use rampart_core::constants::{
    AIM_RATE, MAX_ELEVATION, MIN_ELEVATION, MIN_SHOT_INTERVAL, MUZZLE_OFFSET, SHOT_SPEED,
};
use rampart_core::events::SimEvent;
use rampart_core::types::HeightQueryable;

use crate::projectile::Projectile;
use crate::target::DriftingTarget;

/// A fixed emplacement that aims in elevation only, fires projectiles at
/// a fixed muzzle speed, and advances everything it has fired in fire
/// order.
#[derive(Debug, Clone)]
pub struct FiringUnit {
    position: Vec3,
    /// Facing rotation about the world Y axis (radians), fixed.
    facing: f32,
    /// Barrel elevation (radians), clamped to the configured range.
    elevation: f32,
    /// Seconds since the last shot. Starts at the minimum interval so the
    /// first shot is immediately available.
    cooldown_secs: f32,
    /// Fired projectiles in fire order.
    projectiles: Vec<Projectile>,
}

impl FiringUnit {
    pub fn new(position: Vec3, facing: f32) -> Self {
        Self {
            position,
            facing,
            elevation: 0.0,
            cooldown_secs: MIN_SHOT_INTERVAL,
            projectiles: Vec::new(),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn facing(&self) -> f32 {
        self.facing
    }

    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    pub fn cooldown_secs(&self) -> f32 {
        self.cooldown_secs
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    /// Advance one tick: adjust and clamp aim, run the cooldown, fire if
    /// requested and permitted, ride the terrain, then advance every
    /// owned projectile in fire order.
    pub fn update(
        &mut self,
        dt: f32,
        input: TickInput,
        terrain: &dyn HeightQueryable,
        targets: &mut Vec<DriftingTarget>,
        events: &mut Vec<SimEvent>,
    ) {
        if input.aim_up {
            self.elevation += AIM_RATE * dt;
        }
        if input.aim_down {
            self.elevation -= AIM_RATE * dt;
        }
        self.elevation = self.elevation.clamp(MIN_ELEVATION, MAX_ELEVATION);

        self.cooldown_secs += dt;
        if input.fire && self.cooldown_secs >= MIN_SHOT_INTERVAL {
            self.cooldown_secs = 0.0;
            self.fire(events);
        }

        // The unit sits on the terrain surface.
        self.position.y = terrain.height_at(self.position.x, self.position.z);

        for projectile in &mut self.projectiles {
            projectile.update(dt, terrain, targets, events);
        }
        self.projectiles.retain(|p| !p.expired());
    }

    /// Spawn a projectile at the muzzle point with velocity derived from
    /// the current elevation: horizontal `speed * cos`, vertical
    /// `speed * sin`.
    fn fire(&mut self, events: &mut Vec<SimEvent>) {
        let aim = Quat::from_rotation_y(self.facing) * Quat::from_rotation_x(-self.elevation);
        let muzzle = self.position + aim * Vec3::new(0.0, 0.0, MUZZLE_OFFSET);
        let velocity = Vec3::new(
            SHOT_SPEED * self.elevation.cos(),
            SHOT_SPEED * self.elevation.sin(),
            0.0,
        );

        log::debug!("shot fired at elevation {:.3}", self.elevation);
        self.projectiles.push(Projectile::new(muzzle, velocity));
        events.push(SimEvent::ShotFired {
            elevation: self.elevation,
        });
    }
}
