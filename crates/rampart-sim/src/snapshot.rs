//! Snapshot builder: read-only view of the session for the host.

use rampart_core::enums::SessionPhase;
use rampart_core::events::SimEvent;
use rampart_core::state::{CannonView, ProjectileView, SessionSnapshot, TargetView};
use rampart_core::types::SimTime;

use crate::cannon::FiringUnit;
use crate::target::DriftingTarget;

/// Build a complete SessionSnapshot. Never modifies simulation state;
/// the per-tick event buffer is moved in by the caller.
pub fn build_snapshot(
    time: &SimTime,
    phase: SessionPhase,
    cannon: &FiringUnit,
    targets: &[DriftingTarget],
    events: Vec<SimEvent>,
) -> SessionSnapshot {
    SessionSnapshot {
        time: *time,
        phase,
        cannon: CannonView {
            position: cannon.position(),
            facing: cannon.facing(),
            elevation: cannon.elevation(),
            cooldown_secs: cannon.cooldown_secs(),
        },
        projectiles: cannon
            .projectiles()
            .iter()
            .map(|p| ProjectileView {
                position: p.position,
                settling: p.settling(),
            })
            .collect(),
        targets: targets
            .iter()
            .map(|t| TargetView {
                position: t.position,
            })
            .collect(),
        events,
    }
}
