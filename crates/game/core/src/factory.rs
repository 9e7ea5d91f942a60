//! Fighter construction by archetype name.

use std::str::FromStr;

use crate::archetype::Archetype;
use crate::error::{ErrorSeverity, GameError};
use crate::fighter::Fighter;

/// Errors produced while constructing fighters.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FactoryError {
    #[error("unknown hero type: {name}")]
    NotFound { name: String },
}

impl GameError for FactoryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
        }
    }
}

/// Builds fighters with archetype-specific defaults.
#[derive(Clone, Copy, Debug, Default)]
pub struct FighterFactory;

impl FighterFactory {
    /// Looks up `name` in the closed archetype set and builds a fresh fighter.
    pub fn get_fighter(name: &str) -> Result<Fighter, FactoryError> {
        let archetype = Archetype::from_str(name).map_err(|_| FactoryError::NotFound {
            name: name.to_owned(),
        })?;
        Ok(Self::spawn(archetype))
    }

    /// Builds a fighter with the starting profile and default tactic of `archetype`.
    pub fn spawn(archetype: Archetype) -> Fighter {
        let profile = archetype.profile();
        Fighter::new(archetype, profile.health, profile.strength, profile.armor)
            .with_tactic(profile.default_tactic)
    }
}

/// Shorthand for [`FighterFactory::get_fighter`].
pub fn get_fighter(name: &str) -> Result<Fighter, FactoryError> {
    FighterFactory::get_fighter(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tactic::Tactic;

    #[test]
    fn builds_each_archetype_with_defaults() {
        let warrior = get_fighter("Warrior").unwrap();
        assert_eq!(warrior.archetype(), Archetype::Warrior);
        assert_eq!(warrior.health(), 150);
        assert_eq!(warrior.strength(), 100);
        assert_eq!(warrior.armor(), 80);
        assert_eq!(warrior.tactic(), Some(Tactic::Melee));

        let mage = get_fighter("Mage").unwrap();
        assert_eq!((mage.health(), mage.strength(), mage.armor()), (70, 150, 40));
        assert_eq!(mage.tactic(), Some(Tactic::Magic));

        let archer = get_fighter("Archer").unwrap();
        assert_eq!(
            (archer.health(), archer.strength(), archer.armor()),
            (80, 120, 60)
        );
        assert_eq!(archer.tactic(), Some(Tactic::Ranged));
    }

    #[test]
    fn unknown_names_are_not_found() {
        for name in ["Ninja", "Paladin", "warrior", ""] {
            let err = get_fighter(name).unwrap_err();
            assert_eq!(
                err,
                FactoryError::NotFound {
                    name: name.to_owned()
                }
            );
            assert_eq!(err.severity(), ErrorSeverity::Validation);
        }
    }

    #[test]
    fn fresh_fighters_have_no_observers() {
        let fighter = FighterFactory::spawn(Archetype::Archer);
        assert!(fighter.observers().is_empty());
    }
}
