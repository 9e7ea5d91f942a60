//! Fighter archetypes and their construction defaults.

use crate::tactic::Tactic;

/// Named fighter class.
///
/// The archetype is fixed at construction and decides both the starting
/// attributes ([`ArchetypeProfile`]) and the damage bonus formula used when
/// the fighter strikes. Labels parse case-sensitively: `"Warrior"` is an
/// archetype, `"warrior"` is not.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Archetype {
    /// Heavily armored melee fighter.
    Warrior,
    /// Fragile caster with the highest strength.
    Mage,
    /// Ranged fighter whose shots are blunted by heavy armor.
    Archer,
}

/// Starting attributes for an archetype.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchetypeProfile {
    pub health: u32,
    pub strength: u32,
    pub armor: u32,
    pub default_tactic: Tactic,
}

impl Archetype {
    /// All archetypes in canonical order. The opponent is drawn uniformly from this list.
    pub const ALL: [Archetype; 3] = [Archetype::Warrior, Archetype::Mage, Archetype::Archer];

    /// Exact label used in event strings.
    pub const fn label(&self) -> &'static str {
        match self {
            Archetype::Warrior => "Warrior",
            Archetype::Mage => "Mage",
            Archetype::Archer => "Archer",
        }
    }

    pub const fn profile(&self) -> ArchetypeProfile {
        match self {
            Archetype::Warrior => ArchetypeProfile {
                health: 150,
                strength: 100,
                armor: 80,
                default_tactic: Tactic::Melee,
            },
            Archetype::Mage => ArchetypeProfile {
                health: 70,
                strength: 150,
                armor: 40,
                default_tactic: Tactic::Magic,
            },
            Archetype::Archer => ArchetypeProfile {
                health: 80,
                strength: 120,
                armor: 60,
                default_tactic: Tactic::Ranged,
            },
        }
    }

    pub const fn starting_health(&self) -> u32 {
        self.profile().health
    }

    /// Archetype-specific bonus added to a strike's base damage.
    ///
    /// Archer shots lose half the defender's armor, so the bonus can be negative.
    pub fn damage_bonus(&self, strength: u32, defender_armor: u32) -> i64 {
        let strength = i64::from(strength);
        match self {
            Archetype::Warrior => strength / 5,
            Archetype::Archer => strength / 8 - i64::from(defender_armor) / 2,
            Archetype::Mage => strength / 4,
        }
    }

    /// Archetype at `index` in [`Archetype::ALL`], wrapping out-of-range indices.
    pub const fn from_index(index: u32) -> Self {
        Self::ALL[(index as usize) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn profiles_match_table() {
        let warrior = Archetype::Warrior.profile();
        assert_eq!(
            (warrior.health, warrior.strength, warrior.armor),
            (150, 100, 80)
        );
        assert_eq!(warrior.default_tactic, Tactic::Melee);

        let mage = Archetype::Mage.profile();
        assert_eq!((mage.health, mage.strength, mage.armor), (70, 150, 40));
        assert_eq!(mage.default_tactic, Tactic::Magic);

        let archer = Archetype::Archer.profile();
        assert_eq!((archer.health, archer.strength, archer.armor), (80, 120, 60));
        assert_eq!(archer.default_tactic, Tactic::Ranged);
    }

    #[test]
    fn parses_exact_labels_only() {
        assert_eq!(Archetype::from_str("Mage").unwrap(), Archetype::Mage);
        assert!(Archetype::from_str("mage").is_err());
        assert!(Archetype::from_str("Paladin").is_err());
    }

    #[test]
    fn display_uses_label() {
        for archetype in Archetype::ALL {
            assert_eq!(archetype.to_string(), archetype.label());
        }
    }

    #[test]
    fn archer_bonus_goes_negative_against_heavy_armor() {
        // 120 / 8 - 80 / 2 = 15 - 40
        assert_eq!(Archetype::Archer.damage_bonus(120, 80), -25);
        assert_eq!(Archetype::Warrior.damage_bonus(100, 80), 20);
        assert_eq!(Archetype::Mage.damage_bonus(150, 0), 37);
    }
}
