//! Per-tick input signals from the host.

use serde::{Deserialize, Serialize};

/// Discrete input state sampled by the host for one tick. The core never
/// polls input devices itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Raise the barrel elevation this tick.
    pub aim_up: bool,
    /// Lower the barrel elevation this tick.
    pub aim_down: bool,
    /// Fire trigger held this tick.
    pub fire: bool,
}
