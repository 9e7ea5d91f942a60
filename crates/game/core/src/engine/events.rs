//! Typed events queued by the controller for the host.
//!
//! Observers get the human-readable strings; hosts that play sounds or draw
//! effects drain these instead.

use crate::archetype::Archetype;
use crate::tactic::Tactic;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatEvent {
    /// Fighters installed and the first player turn is open.
    MatchStarted { left: Archetype, right: Archetype },

    /// A strike landed. Queued after the attacker's announcement.
    Strike {
        attacker: Archetype,
        defender: Archetype,
        tactic: Tactic,
        damage: u32,
        defender_health: u32,
    },

    /// Renderer should shake the arena for `duration_ms`.
    ShakeRequested { duration_ms: u64 },

    /// One fighter reached zero health.
    MatchEnded { winner: Archetype, flawless: bool },

    /// The match was reset while fighters were still fighting.
    MatchAbandoned,
}
