//! Simulation constants and tuning parameters.

use glam::Vec3;

// --- Terrain ---

/// Uniform world scale applied to the terrain grid.
pub const MAP_SCALE_FACTOR: f32 = 10.0;

/// Default elevation range (difference between the lowest and highest
/// terrain elevation) used by the stock mission heightmap.
pub const DEFAULT_HEIGHT_RANGE: f32 = 15.0;

// --- Ballistics ---

/// Gravitational acceleration (world units/s²).
pub const GRAVITY: f32 = 4.0;

/// Skin offset below a projectile's center used for ground-contact
/// detection (world units).
pub const GROUND_SKIN: f32 = 0.2;

/// Vertical velocity damping factor applied on ground contact.
pub const BOUNCE_DAMPING: f32 = 0.7;

/// Half-extent of the destruction box along X (world units).
pub const PROXIMITY_X: f32 = 2.0;

/// Half-extent of the destruction box along Y (world units).
pub const PROXIMITY_Y: f32 = 5.0;

/// Seconds a settled projectile lingers before being dropped.
pub const SETTLED_LIFETIME: f32 = 5.0;

// --- Firing unit ---

/// Barrel elevation rate (radians/s).
pub const AIM_RATE: f32 = 0.35;

/// Minimum barrel elevation (radians).
pub const MIN_ELEVATION: f32 = -std::f32::consts::FRAC_PI_4 / 2.0;

/// Maximum barrel elevation (radians).
pub const MAX_ELEVATION: f32 = std::f32::consts::FRAC_PI_4;

/// Minimum interval between shots (seconds).
pub const MIN_SHOT_INTERVAL: f32 = 2.0;

/// Projectile muzzle speed (world units/s).
pub const SHOT_SPEED: f32 = 20.0;

/// Muzzle point distance along the barrel axis (world units).
pub const MUZZLE_OFFSET: f32 = 1.4;

// --- Targets ---

/// Constant drift velocity of targets (world units/s).
pub const TARGET_DRIFT_VELOCITY: Vec3 = Vec3::new(-7.0, 0.0, 0.0);

/// World X coordinate of the stock mission's escape boundary.
pub const DEFAULT_ESCAPE_X: f32 = 306.0;
