//! Session state enums.

use serde::{Deserialize, Serialize};

/// Outcome state of a defense session.
///
/// Transitions are one-way: `Running` → `Lost` when a target breaches the
/// escape boundary, `Running` → `Won` when the live-target set empties.
/// Both terminal states absorb further notifications. Resetting back to
/// `Running` (e.g. on retry input) is a host concern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    #[default]
    Running,
    Lost,
    Won,
}

impl SessionPhase {
    /// A target crossed the escape boundary.
    pub fn on_target_breached(&mut self) {
        if *self == SessionPhase::Running {
            *self = SessionPhase::Lost;
        }
    }

    /// The live-target set became empty.
    pub fn on_target_set_empty(&mut self) {
        if *self == SessionPhase::Running {
            *self = SessionPhase::Won;
        }
    }

    /// Whether the session has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionPhase::Running)
    }
}
