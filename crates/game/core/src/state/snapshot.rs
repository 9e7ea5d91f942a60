use crate::archetype::Archetype;
use crate::fighter::Fighter;
use crate::tactic::Tactic;

use super::{MatchPhase, SidePhase, Turn};

/// Read-only view of a fighter for health bars and labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterView {
    pub archetype: Archetype,
    pub health: u32,
    pub starting_health: u32,
    pub strength: u32,
    pub armor: u32,
    pub tactic: Option<Tactic>,
}

impl From<&Fighter> for FighterView {
    fn from(fighter: &Fighter) -> Self {
        Self {
            archetype: fighter.archetype(),
            health: fighter.health(),
            starting_health: fighter.starting_health(),
            strength: fighter.strength(),
            armor: fighter.armor(),
            tactic: fighter.tactic(),
        }
    }
}

/// Everything a host needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSnapshot {
    pub phase: MatchPhase,
    pub turn: Turn,
    pub left: Option<FighterView>,
    pub right: Option<FighterView>,
    pub left_phase: SidePhase,
    pub right_phase: SidePhase,
    pub winner: Option<Archetype>,
    pub flawless_victory: bool,
    pub shake_active: bool,
    pub fight_banner_visible: bool,
    /// Strikes resolved in the current match.
    pub strikes: u32,
}
