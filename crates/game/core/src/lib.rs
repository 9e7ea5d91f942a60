//! Combat core for a two-fighter turn-based battle game.
//!
//! `game-core` defines the canonical rules (archetypes, tactics, damage,
//! match flow) and exposes pure, tick-driven APIs that hosts embed. All match
//! mutation flows through [`engine::CombatController`]; randomness and time
//! are injected through [`env`].
pub mod archetype;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod factory;
pub mod fighter;
pub mod observer;
pub mod state;
pub mod tactic;

pub use archetype::{Archetype, ArchetypeProfile};
pub use combat::{StrikeResult, calculate_damage, resolve_strike};
pub use config::CombatConfig;
pub use engine::{CombatController, CombatEvent, ControllerInput, InputError};
pub use env::{Clock, ManualClock, RngOracle, SequenceRng, Timestamp};
pub use error::{ErrorSeverity, GameError};
pub use factory::{FactoryError, FighterFactory, get_fighter};
pub use fighter::{Fighter, FighterError, attack_announcement};
pub use observer::{Observer, ObserverError, ObserverHandle, ObserverRegistry};
pub use state::{
    FighterView, MatchPhase, MatchSnapshot, ShakeRequest, Side, SidePhase, SideState, Turn,
};
pub use tactic::Tactic;
