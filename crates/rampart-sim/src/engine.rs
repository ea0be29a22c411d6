//! Session engine — the core of the game.
//!
//! `SessionEngine` owns the placed terrain, the firing unit, and the
//! live-target set; advances them in a fixed order once per tick and
//! produces `SessionSnapshot`s. Completely headless: time and input are
//! explicit parameters, never polled.

use rampart_core::commands::TickInput;
use rampart_core::enums::SessionPhase;
use rampart_core::events::SimEvent;
use rampart_core::state::SessionSnapshot;
use rampart_core::types::SimTime;
use rampart_terrain::{HeightField, TerrainSurface};

use crate::cannon::FiringUnit;
use crate::scenario::Scenario;
use crate::snapshot;
use crate::target::DriftingTarget;

/// The simulation engine. Owns all session state; single-threaded, one
/// tick per call, no suspension points.
pub struct SessionEngine {
    terrain: TerrainSurface,
    cannon: FiringUnit,
    targets: Vec<DriftingTarget>,
    phase: SessionPhase,
    time: SimTime,
    escape_x: f32,
    events: Vec<SimEvent>,
}

impl SessionEngine {
    /// Build a session from a height field and scenario data.
    pub fn new(field: HeightField, scenario: &Scenario) -> Self {
        let terrain = TerrainSurface::new(field, scenario.placement);
        let cannon = FiringUnit::new(scenario.cannon_position, scenario.cannon_facing);
        let targets = scenario
            .target_positions
            .iter()
            .map(|&position| DriftingTarget::new(position))
            .collect();

        Self {
            terrain,
            cannon,
            targets,
            phase: SessionPhase::Running,
            time: SimTime::default(),
            escape_x: scenario.escape_x,
            events: Vec::new(),
        }
    }

    /// Advance the simulation by one tick of `dt` seconds and return the
    /// resulting snapshot. In a terminal phase the tick is a state no-op
    /// but still answers with the final snapshot; resetting is a host
    /// concern.
    pub fn tick(&mut self, input: TickInput, dt: f32) -> SessionSnapshot {
        if self.phase == SessionPhase::Running {
            self.run_tick(input, dt);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        snapshot::build_snapshot(&self.time, self.phase, &self.cannon, &self.targets, events)
    }

    /// Current session phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// The placed terrain surface.
    pub fn terrain(&self) -> &TerrainSurface {
        &self.terrain
    }

    /// The firing unit.
    pub fn cannon(&self) -> &FiringUnit {
        &self.cannon
    }

    /// The live-target set, in spawn order.
    pub fn targets(&self) -> &[DriftingTarget] {
        &self.targets
    }

    /// One simulation tick in fixed order: firing unit (aim, fire,
    /// projectile motion and collision), then target drift with breach
    /// collection, then session transitions.
    fn run_tick(&mut self, input: TickInput, dt: f32) {
        self.cannon
            .update(dt, input, &self.terrain, &mut self.targets, &mut self.events);

        let mut breached = false;
        for target in &mut self.targets {
            if target.update(dt, &self.terrain, self.escape_x) {
                breached = true;
                self.events.push(SimEvent::TargetBreached {
                    x: target.position.x,
                });
            }
        }

        // Breach wins over a simultaneous empty set: both transitions are
        // one-way and guarded, so the first one processed is final.
        if breached {
            let escape_x = self.escape_x;
            self.targets.retain(|t| t.position.x >= escape_x);
            if self.phase == SessionPhase::Running {
                self.phase.on_target_breached();
                self.events.push(SimEvent::Defeat);
                log::info!("target breached the line, session lost");
            }
        }

        if self.targets.is_empty() && self.phase == SessionPhase::Running {
            self.phase.on_target_set_empty();
            self.events.push(SimEvent::Victory);
            log::info!("all targets destroyed, session won");
        }
    }
}
