//! Damage calculation and application.

use crate::archetype::Archetype;

/// Exclusive upper bound of the damage roll. Rolls are uniform in `[0, MAX_ROLL)`.
pub const MAX_ROLL: u32 = 20;

/// Every strike deals at least this much damage.
pub const MIN_DAMAGE: u32 = 1;

/// Calculate damage from a strike.
///
/// # Formula
///
/// ```text
/// base   = roll + attacker_strength / 10
/// bonus  = Warrior: strength / 5
///          Archer:  strength / 8 - defender_armor / 2
///          Mage:    strength / 4
/// damage = max(1, base + bonus - defender_armor / 10)
/// ```
///
/// All divisions truncate. The Archer bonus may be negative, so the sum is
/// computed signed before flooring.
///
/// # Arguments
///
/// * `attacker` - Archetype of the acting fighter (selects the bonus formula)
/// * `attacker_strength` - Strength of the acting fighter
/// * `defender_armor` - Armor of the other fighter
/// * `roll` - Random draw in `[0, MAX_ROLL)`
pub fn calculate_damage(
    attacker: Archetype,
    attacker_strength: u32,
    defender_armor: u32,
    roll: u32,
) -> u32 {
    let base = i64::from(roll) + i64::from(attacker_strength) / 10;
    let bonus = attacker.damage_bonus(attacker_strength, defender_armor);
    let reduction = i64::from(defender_armor) / 10;

    let raw = base + bonus - reduction;
    raw.clamp(i64::from(MIN_DAMAGE), i64::from(u32::MAX)) as u32
}

/// Apply damage to current HP.
///
/// Returns the new HP value, clamped to 0.
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warrior_against_mage() {
        // base = 5 + 10, bonus = 20, reduction = 4
        assert_eq!(calculate_damage(Archetype::Warrior, 100, 40, 5), 31);
    }

    #[test]
    fn mage_against_warrior() {
        // base = 0 + 15, bonus = 37, reduction = 8
        assert_eq!(calculate_damage(Archetype::Mage, 150, 80, 0), 44);
    }

    #[test]
    fn archer_is_floored_at_minimum_damage() {
        // base = 0 + 12, bonus = 15 - 40, reduction = 8 -> -21
        assert_eq!(calculate_damage(Archetype::Archer, 120, 80, 0), MIN_DAMAGE);
    }

    #[test]
    fn damage_is_never_below_minimum() {
        for archetype in Archetype::ALL {
            for armor in [0, 40, 80, 200, 1000] {
                for roll in 0..MAX_ROLL {
                    assert!(calculate_damage(archetype, 1, armor, roll) >= MIN_DAMAGE);
                }
            }
        }
    }

    #[test]
    fn apply_damage_clamps() {
        assert_eq!(apply_damage(70, 31), 39);
        assert_eq!(apply_damage(10, 31), 0);
    }
}
