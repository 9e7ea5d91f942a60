//! The fighter entity.
//!
//! A fighter holds its attributes, the tactic it will attack with, and the
//! observers subscribed to its combat events. It never computes damage: a
//! strike involves both parties, so resolution lives in the engine.

use crate::archetype::Archetype;
use crate::combat::apply_damage;
use crate::error::{ErrorSeverity, GameError};
use crate::observer::{ObserverHandle, ObserverRegistry};
use crate::tactic::Tactic;

/// Reasons an attack announcement was skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FighterError {
    #[error("{archetype} has no tactic selected")]
    NoTactic { archetype: Archetype },

    #[error("{archetype} is defeated and cannot act")]
    Defeated { archetype: Archetype },
}

impl GameError for FighterError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoTactic { .. } => "NO_TACTIC",
            Self::Defeated { .. } => "DEFEATED",
        }
    }
}

/// One of the two combatants in a match.
#[derive(Clone, Debug)]
pub struct Fighter {
    archetype: Archetype,
    health: u32,
    strength: u32,
    armor: u32,
    tactic: Option<Tactic>,
    observers: ObserverRegistry,
}

impl Fighter {
    /// Creates a fighter with explicit attributes and no tactic.
    ///
    /// Hosts normally go through [`crate::factory::FighterFactory`]; this is for
    /// tuned fighters and tests.
    pub fn new(archetype: Archetype, health: u32, strength: u32, armor: u32) -> Self {
        Self {
            archetype,
            health,
            strength,
            armor,
            tactic: None,
            observers: ObserverRegistry::new(),
        }
    }

    /// Sets the tactic (builder pattern).
    #[must_use]
    pub fn with_tactic(mut self, tactic: Tactic) -> Self {
        self.tactic = Some(tactic);
        self
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn strength(&self) -> u32 {
        self.strength
    }

    pub fn armor(&self) -> u32 {
        self.armor
    }

    pub fn tactic(&self) -> Option<Tactic> {
        self.tactic
    }

    pub fn set_health(&mut self, health: u32) {
        self.health = health;
    }

    pub fn set_tactic(&mut self, tactic: Option<Tactic>) {
        self.tactic = tactic;
    }

    /// Starting health for this fighter's archetype.
    pub fn starting_health(&self) -> u32 {
        self.archetype.starting_health()
    }

    /// Health as a fraction of starting health, clamped to `[0.0, 1.0]`.
    pub fn health_ratio(&self) -> f32 {
        let start = self.starting_health();
        if start == 0 {
            return 0.0;
        }
        (self.health as f32 / start as f32).clamp(0.0, 1.0)
    }

    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    /// Reduces health by `damage`, stopping at zero. Returns the new health.
    pub fn take_damage(&mut self, damage: u32) -> u32 {
        self.health = apply_damage(self.health, damage);
        tracing::trace!(
            target: "game_core::fighter",
            archetype = %self.archetype,
            damage,
            health = self.health,
            "damage taken"
        );
        self.health
    }

    pub fn register_observer(&mut self, observer: ObserverHandle) {
        self.observers.register(observer);
    }

    pub fn unregister_observer(&mut self, observer: &ObserverHandle) {
        self.observers.unregister(observer);
    }

    /// Broadcasts `event` to all observers. Returns the number of failed deliveries.
    pub fn notify_observers(&self, event: &str) -> usize {
        self.observers.notify(event)
    }

    pub fn observers(&self) -> &ObserverRegistry {
        &self.observers
    }

    /// Announces the attack to observers and performs the tactic's side effect.
    ///
    /// Does nothing when no tactic is set or the fighter is defeated.
    pub fn execute_attack(&self) {
        if let Err(skipped) = self.try_execute_attack() {
            tracing::trace!(code = skipped.error_code(), "attack skipped: {}", skipped);
        }
    }

    /// Same as [`Fighter::execute_attack`] but reports why nothing happened.
    pub fn try_execute_attack(&self) -> Result<Tactic, FighterError> {
        let archetype = self.archetype;
        if self.is_defeated() {
            return Err(FighterError::Defeated { archetype });
        }
        let tactic = self.tactic.ok_or(FighterError::NoTactic { archetype })?;

        self.notify_observers(&attack_announcement(archetype));
        tracing::debug!(
            target: "game_core::tactic",
            %archetype,
            tactic = tactic.describe(),
            "{}",
            tactic.describe()
        );
        Ok(tactic)
    }
}

/// Event string broadcast when a fighter attacks.
pub fn attack_announcement(archetype: Archetype) -> String {
    format!("{} is attacking!", archetype.label())
}
