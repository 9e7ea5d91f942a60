//! Runtime configuration structures and loaders.
use std::env;
use std::str::FromStr;

use game_core::CombatConfig;

use crate::error::{Result, RuntimeError};

/// Configuration for a [`Session`](crate::Session).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub combat: CombatConfig,
    /// Fixed RNG seed. `None` draws one from entropy.
    pub seed: Option<u64>,
    /// Host tick cadence in milliseconds.
    pub tick_ms: u64,
    /// Install the `Logger` and `Announcer` observers on new sessions.
    pub default_observers: bool,
}

impl RuntimeConfig {
    pub const DEFAULT_TICK_MS: u64 = 16;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_SEED` - RNG seed (default: entropy)
    /// - `ARENA_APPROACH_MS` - Approach duration (default: 400)
    /// - `ARENA_STRIKE_MS` - Strike duration (default: 200)
    /// - `ARENA_AI_PAUSE_MS` - AI pause before approaching (default: 600)
    /// - `ARENA_SHAKE_MS` - Screen shake window (default: 200)
    /// - `ARENA_TICK_MS` - Host tick cadence (default: 16)
    ///
    /// Unparseable values are ignored and the default is kept.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_var::<u64>(&lookup, "ARENA_SEED") {
            config.seed = Some(seed);
        }

        // Combat timing
        if let Some(ms) = read_var::<u64>(&lookup, "ARENA_APPROACH_MS") {
            config.combat.approach_ms = ms;
        }
        if let Some(ms) = read_var::<u64>(&lookup, "ARENA_STRIKE_MS") {
            config.combat.strike_ms = ms;
        }
        if let Some(ms) = read_var::<u64>(&lookup, "ARENA_AI_PAUSE_MS") {
            config.combat.ai_pause_ms = ms;
        }
        if let Some(ms) = read_var::<u64>(&lookup, "ARENA_SHAKE_MS") {
            config.combat.shake_ms = ms;
        }

        if let Some(ms) = read_var::<u64>(&lookup, "ARENA_TICK_MS") {
            config.tick_ms = ms.max(1);
        }

        config
    }

    /// Rejects settings a session cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.tick_ms == 0 {
            return Err(RuntimeError::InvalidConfig {
                key: "tick_ms",
                value: self.tick_ms.to_string(),
            });
        }
        Ok(())
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            combat: CombatConfig::default(),
            seed: None,
            tick_ms: Self::DEFAULT_TICK_MS,
            default_observers: true,
        }
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable setting");
            None
        }
    }
}
