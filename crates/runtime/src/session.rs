//! Session orchestration: one controller, one clock, stock observers.
//!
//! [`Session`] is what a host embeds. It stamps every key press and tick with
//! the session clock so the host never deals in timestamps, and it routes
//! key presses through the phase-aware [`translate`](crate::input::translate).
use std::sync::Arc;

use game_core::{
    Clock, CombatController, CombatEvent, MatchPhase, MatchSnapshot, ObserverHandle, RngOracle,
    Timestamp,
};

use crate::clock::SystemClock;
use crate::config::RuntimeConfig;
use crate::error::Result;
use crate::input::{HostKey, translate};
use crate::observers::{Announcer, Logger};
use crate::rng::ChaChaRng;

/// What a key press did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Translated and accepted by the controller.
    Applied,
    /// The key means nothing in the current phase.
    Ignored,
    /// The host should shut down.
    Quit,
}

/// A running arena: the controller plus the clock that drives it.
pub struct Session {
    controller: CombatController,
    clock: Arc<dyn Clock>,
    config: RuntimeConfig,
}

impl Session {
    /// Session with the system clock, ChaCha RNG, and stock observers.
    pub fn new(config: RuntimeConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Forwards one host key.
    ///
    /// Keys that mean nothing in the current phase are ignored. Inputs the
    /// controller rejects come back as errors and leave the match unchanged.
    pub fn press(&mut self, key: HostKey) -> Result<KeyOutcome> {
        if key == HostKey::Quit {
            return Ok(KeyOutcome::Quit);
        }

        // Translate against the state as of now, not as of the last tick.
        let now = self.clock.now();
        self.controller.tick(now);
        let phase = self.controller.phase();
        let Some(input) = translate(key, phase) else {
            tracing::trace!(%key, %phase, "key ignored");
            return Ok(KeyOutcome::Ignored);
        };

        self.controller.handle(input, now)?;
        Ok(KeyOutcome::Applied)
    }

    /// Advances the match to the current instant and returns the new frame.
    pub fn tick(&mut self) -> MatchSnapshot {
        let now = self.clock.now();
        self.controller.tick(now);
        self.controller.snapshot(now)
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        self.controller.snapshot(self.clock.now())
    }

    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        self.controller.drain_events()
    }

    /// Abandons any running match and returns to the menu.
    pub fn reset(&mut self) {
        self.controller.reset();
    }

    pub fn add_observer(&mut self, observer: ObserverHandle) {
        self.controller.add_observer(observer);
    }

    pub fn remove_observer(&mut self, observer: &ObserverHandle) {
        self.controller.remove_observer(observer);
    }

    pub fn phase(&self) -> MatchPhase {
        self.controller.phase()
    }

    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn controller(&self) -> &CombatController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut CombatController {
        &mut self.controller
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("controller", &self.controller)
            .field("now", &self.clock.now())
            .field("config", &self.config)
            .finish()
    }
}

/// Builder for [`Session`].
pub struct SessionBuilder {
    config: RuntimeConfig,
    clock: Option<Arc<dyn Clock>>,
    rng: Option<Box<dyn RngOracle>>,
    observers: Vec<ObserverHandle>,
}

impl SessionBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            clock: None,
            rng: None,
            observers: Vec::new(),
        }
    }

    /// Override session configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the time source (defaults to [`SystemClock`])
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set the RNG (defaults to [`ChaChaRng`] seeded from config)
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Add an observer on top of the stock ones
    pub fn observer(mut self, observer: ObserverHandle) -> Self {
        self.observers.push(observer);
        self
    }

    /// Skip the stock `Logger` and `Announcer`
    pub fn without_default_observers(mut self) -> Self {
        self.config.default_observers = false;
        self
    }

    pub fn build(self) -> Result<Session> {
        self.config.validate()?;

        let rng: Box<dyn RngOracle> = match self.rng {
            Some(rng) => rng,
            None => Box::new(ChaChaRng::from_seed_or_entropy(self.config.seed)),
        };
        let clock: Arc<dyn Clock> = match self.clock {
            Some(clock) => clock,
            None => Arc::new(SystemClock::new()),
        };

        let mut controller = CombatController::new(self.config.combat.clone(), rng);
        if self.config.default_observers {
            controller.add_observer(Arc::new(Logger));
            controller.add_observer(Arc::new(Announcer));
        }
        for observer in self.observers {
            controller.add_observer(observer);
        }

        tracing::debug!(config = ?self.config, "session ready");
        Ok(Session {
            controller,
            clock,
            config: self.config,
        })
    }
}
