//! Simulation engine for RAMPART.
//!
//! Owns the firing unit, the live-target set, and the placed terrain;
//! advances them one tick at a time and produces SessionSnapshots for
//! the host.

pub mod cannon;
pub mod engine;
pub mod projectile;
pub mod scenario;
pub mod snapshot;
pub mod target;

pub use rampart_core as core;
pub use engine::SessionEngine;
