//! Match orchestration.
//!
//! The [`CombatController`] owns a match from archetype selection to the
//! victory screen. Hosts feed it discrete inputs through
//! [`CombatController::handle`] and call [`CombatController::tick`] with the
//! current instant at whatever cadence they render. Every transition is a
//! comparison between that instant and a stored phase start, so the
//! controller never sleeps, spawns, or locks.
//!
//! Input handling lives here; per-side phase stepping and strike resolution
//! live in `turns`.

mod errors;
mod events;
mod input;
mod turns;

pub use errors::InputError;
pub use events::CombatEvent;
pub use input::ControllerInput;

use crate::archetype::Archetype;
use crate::config::CombatConfig;
use crate::env::{RngOracle, Timestamp};
use crate::factory::FighterFactory;
use crate::fighter::Fighter;
use crate::observer::{ObserverHandle, same_observer};
use crate::state::{
    FighterView, MatchPhase, MatchSnapshot, ShakeRequest, Side, SidePhase, SideState, Turn,
};
use crate::tactic::Tactic;

/// Two-fighter match controller.
pub struct CombatController {
    config: CombatConfig,
    rng: Box<dyn RngOracle>,
    /// Subscribers installed on both fighters whenever a match starts.
    observers: Vec<ObserverHandle>,

    phase: MatchPhase,
    turn: Turn,
    left: Option<Fighter>,
    right: Option<Fighter>,
    left_side: SideState,
    right_side: SideState,
    /// Instant the current turn was handed over; anchors the AI pause.
    turn_started_at: Timestamp,

    winner: Option<Archetype>,
    flawless_victory: bool,
    shake: Option<ShakeRequest>,
    fight_started_at: Option<Timestamp>,
    strikes: u32,
    events: Vec<CombatEvent>,
}

impl CombatController {
    pub fn new(config: CombatConfig, rng: impl RngOracle + 'static) -> Self {
        Self {
            config,
            rng: Box::new(rng),
            observers: Vec::new(),
            phase: MatchPhase::Menu,
            turn: Turn::Player,
            left: None,
            right: None,
            left_side: SideState::default(),
            right_side: SideState::default(),
            turn_started_at: Timestamp::ZERO,
            winner: None,
            flawless_victory: false,
            shake: None,
            fight_started_at: None,
            strikes: 0,
            events: Vec::new(),
        }
    }

    /// Adds an observer that will be registered on both fighters of every match.
    ///
    /// If a match is already running the observer joins it immediately.
    pub fn add_observer(&mut self, observer: ObserverHandle) {
        if self.phase != MatchPhase::Menu {
            for fighter in [self.left.as_mut(), self.right.as_mut()].into_iter().flatten() {
                fighter.register_observer(observer.clone());
            }
        }
        self.observers.push(observer);
    }

    /// Removes the first occurrence of `observer` from the controller and both fighters.
    pub fn remove_observer(&mut self, observer: &ObserverHandle) {
        if let Some(index) = self
            .observers
            .iter()
            .position(|registered| same_observer(registered, observer))
        {
            self.observers.remove(index);
            for fighter in [self.left.as_mut(), self.right.as_mut()].into_iter().flatten() {
                fighter.unregister_observer(observer);
            }
        }
    }

    /// Applies one host input at `now`.
    ///
    /// Transitions due by `now` fire first, so the input is judged against
    /// the same state a tick at `now` would have produced. A rejected input
    /// changes nothing beyond that catch-up and emits nothing of its own.
    pub fn handle(&mut self, input: ControllerInput, now: Timestamp) -> Result<(), InputError> {
        self.tick(now);

        let name = input.name();
        let result = match input {
            ControllerInput::PickArchetype(archetype) => self.pick_archetype(&archetype),
            ControllerInput::CommitMatch => self.commit_match(now),
            ControllerInput::PickTactic(tactic) => self.pick_tactic(tactic, now),
            ControllerInput::Restart => self.restart(),
        };

        if let Err(error) = &result {
            tracing::debug!(input = name, phase = %self.phase, "input rejected: {}", error);
        }
        result
    }

    /// Sets the player's fighter. Menu only; replaces any earlier pick.
    pub fn pick_archetype(&mut self, name: &str) -> Result<(), InputError> {
        self.require_phase("pick_archetype", MatchPhase::Menu)?;
        let fighter = FighterFactory::get_fighter(name)?;

        if let Some(previous) = self.left.as_mut() {
            detach_observers(previous, &self.observers);
        }
        tracing::debug!(archetype = %fighter.archetype(), "player archetype picked");
        self.left = Some(fighter);
        Ok(())
    }

    /// Draws the opponent, installs observers, and opens the first player turn.
    pub fn commit_match(&mut self, now: Timestamp) -> Result<(), InputError> {
        self.require_phase("commit_match", MatchPhase::Menu)?;
        let Some(left) = self.left.as_mut() else {
            return Err(InputError::NoSelection);
        };

        let opponent = Archetype::from_index(self.rng.next_below(Archetype::ALL.len() as u32));
        let mut right = FighterFactory::spawn(opponent);

        detach_observers(left, &self.observers);
        attach_observers(left, &self.observers);
        attach_observers(&mut right, &self.observers);
        let left_archetype = left.archetype();
        self.right = Some(right);

        self.phase = MatchPhase::Fight;
        self.turn = Turn::Player;
        self.left_side = SideState::idle(now);
        self.right_side = SideState::idle(now);
        self.turn_started_at = now;
        self.winner = None;
        self.flawless_victory = false;
        self.shake = None;
        self.fight_started_at = Some(now);
        self.strikes = 0;
        self.events.push(CombatEvent::MatchStarted {
            left: left_archetype,
            right: opponent,
        });

        tracing::info!(left = %left_archetype, right = %opponent, at = %now, "match started");
        Ok(())
    }

    /// Commits the player's tactic and starts the left side's approach.
    pub fn pick_tactic(&mut self, tactic: Tactic, now: Timestamp) -> Result<(), InputError> {
        self.require_phase("pick_tactic", MatchPhase::Fight)?;
        if self.turn != Turn::Player
            || !self.left_side.phase.is_idle()
            || !self.right_side.phase.is_idle()
        {
            return Err(InputError::invalid_phase("pick_tactic", self.phase));
        }
        let Some(left) = self.left.as_mut() else {
            return Err(InputError::NoSelection);
        };

        left.set_tactic(Some(tactic));
        self.left_side.enter(SidePhase::Approach, now);
        tracing::debug!(tactic = tactic.describe(), at = %now, "player approach");
        Ok(())
    }

    /// Returns to the menu after a finished match.
    pub fn restart(&mut self) -> Result<(), InputError> {
        self.require_phase("restart", MatchPhase::End)?;
        self.reset();
        Ok(())
    }

    /// Collapses the match back to the menu.
    ///
    /// Unregisters observers, drops both fighters, and clears the result.
    /// Calling it during a fight abandons the match. Queued events are kept
    /// so the host can still drain them.
    pub fn reset(&mut self) {
        if self.phase == MatchPhase::Fight {
            tracing::info!("match abandoned");
            self.events.push(CombatEvent::MatchAbandoned);
        }

        for fighter in [self.left.as_mut(), self.right.as_mut()].into_iter().flatten() {
            detach_observers(fighter, &self.observers);
        }
        self.left = None;
        self.right = None;

        self.phase = MatchPhase::Menu;
        self.turn = Turn::Player;
        self.left_side = SideState::default();
        self.right_side = SideState::default();
        self.turn_started_at = Timestamp::ZERO;
        self.winner = None;
        self.flawless_victory = false;
        self.shake = None;
        self.fight_started_at = None;
        self.strikes = 0;
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn left(&self) -> Option<&Fighter> {
        self.left.as_ref()
    }

    pub fn right(&self) -> Option<&Fighter> {
        self.right.as_ref()
    }

    /// Mutable access to a fighter, e.g. for tuned test scenarios.
    pub fn fighter_mut(&mut self, side: Side) -> Option<&mut Fighter> {
        match side {
            Side::Left => self.left.as_mut(),
            Side::Right => self.right.as_mut(),
        }
    }

    pub fn left_phase(&self) -> SidePhase {
        self.left_side.phase
    }

    pub fn right_phase(&self) -> SidePhase {
        self.right_side.phase
    }

    pub fn side_state(&self, side: Side) -> SideState {
        match side {
            Side::Left => self.left_side,
            Side::Right => self.right_side,
        }
    }

    pub fn winner(&self) -> Option<Archetype> {
        self.winner
    }

    pub fn flawless_victory(&self) -> bool {
        self.flawless_victory
    }

    pub fn shake_request(&self) -> Option<ShakeRequest> {
        self.shake
    }

    pub fn shake_active(&self, now: Timestamp) -> bool {
        self.shake.is_some_and(|shake| shake.is_active(now))
    }

    pub fn fight_banner_visible(&self, now: Timestamp) -> bool {
        self.phase == MatchPhase::Fight
            && self
                .fight_started_at
                .is_some_and(|start| !now.has_elapsed(start, self.config.fight_banner_ms))
    }

    pub fn strikes(&self) -> u32 {
        self.strikes
    }

    /// Takes all queued events in emission order.
    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self, now: Timestamp) -> MatchSnapshot {
        MatchSnapshot {
            phase: self.phase,
            turn: self.turn,
            left: self.left.as_ref().map(FighterView::from),
            right: self.right.as_ref().map(FighterView::from),
            left_phase: self.left_side.phase,
            right_phase: self.right_side.phase,
            winner: self.winner,
            flawless_victory: self.flawless_victory,
            shake_active: self.shake_active(now),
            fight_banner_visible: self.fight_banner_visible(now),
            strikes: self.strikes,
        }
    }

    fn require_phase(&self, input: &'static str, expected: MatchPhase) -> Result<(), InputError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(InputError::invalid_phase(input, self.phase))
        }
    }
}

impl std::fmt::Debug for CombatController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombatController")
            .field("phase", &self.phase)
            .field("turn", &self.turn)
            .field("left", &self.left)
            .field("right", &self.right)
            .field("left_side", &self.left_side)
            .field("right_side", &self.right_side)
            .field("winner", &self.winner)
            .field("flawless_victory", &self.flawless_victory)
            .finish_non_exhaustive()
    }
}

fn attach_observers(fighter: &mut Fighter, observers: &[ObserverHandle]) {
    for observer in observers {
        fighter.register_observer(observer.clone());
    }
}

fn detach_observers(fighter: &mut Fighter, observers: &[ObserverHandle]) {
    for observer in observers {
        fighter.unregister_observer(observer);
    }
}
