//! Strike result types and resolution.

use crate::archetype::Archetype;
use crate::fighter::Fighter;

use super::damage::{apply_damage, calculate_damage};

/// Outcome of one strike.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrikeResult {
    pub attacker: Archetype,
    pub defender: Archetype,
    /// Damage dealt, always at least 1.
    pub damage: u32,
    /// Defender health after the strike.
    pub defender_health: u32,
}

impl StrikeResult {
    pub fn is_lethal(&self) -> bool {
        self.defender_health == 0
    }
}

/// Computes the strike of `attacker` against `defender` for `roll`.
///
/// Does not mutate either fighter; the engine applies the result after the
/// attacker's announcement has gone out.
pub fn resolve_strike(attacker: &Fighter, defender: &Fighter, roll: u32) -> StrikeResult {
    let damage = calculate_damage(
        attacker.archetype(),
        attacker.strength(),
        defender.armor(),
        roll,
    );

    StrikeResult {
        attacker: attacker.archetype(),
        defender: defender.archetype(),
        damage,
        defender_health: apply_damage(defender.health(), damage),
    }
}
