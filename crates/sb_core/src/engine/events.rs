//! Discrete things that happened during a tick

use serde::Serialize;

use super::combat::Hit;
use super::match_state::RoundOutcome;
use super::types::{Arm, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TickEvent {
    RoundStarted { round: u32 },
    JumpStarted { side: Side },
    AttackStarted { side: Side, arm: Arm },
    GuardRaised { side: Side },
    Hit { attacker: Side, arm: Arm, absorbed: bool },
    KnockedOut { side: Side },
    RoundEnded { outcome: RoundOutcome },
}

impl From<Hit> for TickEvent {
    fn from(hit: Hit) -> Self {
        TickEvent::Hit { attacker: hit.attacker, arm: hit.arm, absorbed: hit.absorbed }
    }
}

impl TickEvent {
    /// Damage-carrying hit (not swallowed by a guard)
    pub fn is_landed_hit(&self) -> bool {
        matches!(self, TickEvent::Hit { absorbed: false, .. })
    }
}
