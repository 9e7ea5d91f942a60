use crate::combat::{MAX_ROLL, StrikeResult, resolve_strike};
use crate::env::Timestamp;
use crate::fighter::Fighter;
use crate::state::{MatchPhase, ShakeRequest, Side, SidePhase, SideState, Turn};
use crate::tactic::Tactic;

use super::{CombatController, CombatEvent};

/// Result of trying to move the acting side forward once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    /// A transition fired; try again.
    Advanced,
    /// A strike resolved; no further transitions this tick.
    Struck,
    /// Nothing is due yet.
    Waiting,
}

/// Turn scheduling and phase timing for CombatController.
impl CombatController {
    /// Advances the match to `now`.
    ///
    /// Only the acting side moves. Transitions that are due fire in order and
    /// each new phase starts at the previous phase's deadline, so sparse ticks
    /// do not stretch the timeline. At most one strike resolves per tick,
    /// which keeps observer events from two fighters out of the same tick.
    pub fn tick(&mut self, now: Timestamp) {
        if self.phase != MatchPhase::Fight {
            return;
        }

        while self.step(now) == Step::Advanced {}
    }

    fn step(&mut self, now: Timestamp) -> Step {
        if self.phase != MatchPhase::Fight {
            return Step::Waiting;
        }

        let side = self.turn.side();
        let state = self.side_state(side);

        match state.phase {
            SidePhase::Idle => {
                if self.turn == Turn::Ai && self.side_state(side.opponent()).phase.is_idle() {
                    let at = self.turn_started_at;
                    self.side_mut(side).enter(SidePhase::Pause, at);
                    tracing::trace!(%at, "ai pause");
                    Step::Advanced
                } else {
                    Step::Waiting
                }
            }
            SidePhase::Pause => {
                let deadline = state.deadline(self.config.ai_pause_ms);
                if now < deadline {
                    return Step::Waiting;
                }
                let tactic = Tactic::from_index(self.rng.next_below(Tactic::ALL.len() as u32));
                if let Some(fighter) = self.fighter_mut(side) {
                    fighter.set_tactic(Some(tactic));
                }
                self.side_mut(side).enter(SidePhase::Approach, deadline);
                tracing::debug!(tactic = tactic.describe(), at = %deadline, "ai approach");
                Step::Advanced
            }
            SidePhase::Approach => {
                let deadline = state.deadline(self.config.approach_ms);
                if now < deadline {
                    return Step::Waiting;
                }
                self.strike(side, now);
                if self.phase == MatchPhase::Fight {
                    self.side_mut(side).enter(SidePhase::Strike, deadline);
                }
                Step::Struck
            }
            SidePhase::Strike => {
                let deadline = state.deadline(self.config.strike_ms);
                if now < deadline {
                    return Step::Waiting;
                }
                self.side_mut(side).enter(SidePhase::Recover, deadline);
                Step::Advanced
            }
            SidePhase::Recover => {
                let handoff = state.started_at;
                self.side_mut(side).enter(SidePhase::Idle, handoff);
                self.turn = self.turn.other();
                self.turn_started_at = handoff;
                tracing::trace!(turn = %self.turn, at = %handoff, "turn passed");
                Step::Advanced
            }
        }
    }

    /// Resolves the strike of `side` against its opponent.
    ///
    /// Order: roll, announce, apply damage, queue events, victory check.
    /// The caller moves the side into Strike afterwards unless the match ended.
    fn strike(&mut self, side: Side, now: Timestamp) {
        let roll = self.rng.next_below(MAX_ROLL);
        let Some((attacker, defender)) = self.pair_mut(side) else {
            tracing::error!(%side, "strike without both fighters");
            return;
        };

        let result = resolve_strike(attacker, defender, roll);
        attacker.execute_attack();
        defender.take_damage(result.damage);
        let tactic = attacker
            .tactic()
            .unwrap_or(attacker.archetype().profile().default_tactic);

        tracing::info!(
            attacker = %result.attacker,
            defender = %result.defender,
            tactic = tactic.describe(),
            roll,
            damage = result.damage,
            defender_health = result.defender_health,
            "strike"
        );

        self.strikes += 1;
        self.events.push(CombatEvent::Strike {
            attacker: result.attacker,
            defender: result.defender,
            tactic,
            damage: result.damage,
            defender_health: result.defender_health,
        });
        self.shake = Some(ShakeRequest {
            started_at: now,
            duration_ms: self.config.shake_ms,
        });
        self.events.push(CombatEvent::ShakeRequested {
            duration_ms: self.config.shake_ms,
        });

        self.check_victory(&result);
    }

    fn check_victory(&mut self, result: &StrikeResult) {
        let (Some(left), Some(right)) = (self.left.as_ref(), self.right.as_ref()) else {
            return;
        };
        let survivor = match (left.is_defeated(), right.is_defeated()) {
            (false, false) => return,
            (true, false) => right,
            (false, true) => left,
            // Only the defender takes damage, so this cannot happen.
            (true, true) => {
                tracing::error!(?result, "both fighters defeated");
                return;
            }
        };

        let winner = survivor.archetype();
        let flawless = survivor.health() == survivor.starting_health();

        self.phase = MatchPhase::End;
        self.winner = Some(winner);
        self.flawless_victory = flawless;
        let at = self.side_state(self.turn.side()).started_at;
        self.left_side = SideState::idle(at);
        self.right_side = SideState::idle(at);
        self.events.push(CombatEvent::MatchEnded { winner, flawless });

        tracing::info!(%winner, flawless, strikes = self.strikes, "match ended");
    }

    fn side_mut(&mut self, side: Side) -> &mut SideState {
        match side {
            Side::Left => &mut self.left_side,
            Side::Right => &mut self.right_side,
        }
    }

    /// Attacker and defender for a strike by `side`.
    fn pair_mut(&mut self, side: Side) -> Option<(&mut Fighter, &mut Fighter)> {
        let left = self.left.as_mut()?;
        let right = self.right.as_mut()?;
        Some(match side {
            Side::Left => (left, right),
            Side::Right => (right, left),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::config::CombatConfig;
    use crate::engine::{CombatController, CombatEvent};
    use crate::env::{SequenceRng, Timestamp};
    use crate::state::{MatchPhase, Side, SidePhase, Turn};
    use crate::tactic::Tactic;

    /// Warrior vs Mage (opponent draw 1), then the given draws.
    fn warrior_vs_mage(draws: &[u32]) -> CombatController {
        let mut rng = SequenceRng::new([1]);
        rng.extend(draws.iter().copied());
        let mut controller = CombatController::new(CombatConfig::default(), rng);
        controller.pick_archetype("Warrior").unwrap();
        controller.commit_match(Timestamp(0)).unwrap();
        controller.drain_events();
        controller
    }

    #[test]
    fn player_phase_timing() {
        let mut controller = warrior_vs_mage(&[5]);
        controller.pick_tactic(Tactic::Melee, Timestamp(0)).unwrap();

        controller.tick(Timestamp(399));
        assert_eq!(controller.left_phase(), SidePhase::Approach);
        assert_eq!(controller.right().unwrap().health(), 70);

        controller.tick(Timestamp(400));
        assert_eq!(controller.left_phase(), SidePhase::Strike);
        // 5 + 10 + 20 - 4
        assert_eq!(controller.right().unwrap().health(), 39);

        controller.tick(Timestamp(600));
        assert_eq!(controller.left_phase(), SidePhase::Idle);
        assert_eq!(controller.turn(), Turn::Ai);
    }

    #[test]
    fn ai_pauses_before_approach() {
        let mut controller = warrior_vs_mage(&[5, 0, 3]);
        controller.pick_tactic(Tactic::Melee, Timestamp(0)).unwrap();
        controller.tick(Timestamp(400));
        controller.tick(Timestamp(600));
        assert_eq!(controller.right_phase(), SidePhase::Pause);

        controller.tick(Timestamp(1_199));
        assert_eq!(controller.right_phase(), SidePhase::Pause);

        controller.tick(Timestamp(1_200));
        assert_eq!(controller.right_phase(), SidePhase::Approach);
        assert_eq!(controller.right().unwrap().tactic(), Some(Tactic::Melee));

        controller.tick(Timestamp(1_600));
        assert_eq!(controller.right_phase(), SidePhase::Strike);
        // Mage: 3 + 15 + 37 - 8
        assert_eq!(controller.left().unwrap().health(), 150 - 47);

        controller.tick(Timestamp(1_800));
        assert_eq!(controller.right_phase(), SidePhase::Idle);
        assert_eq!(controller.turn(), Turn::Player);
    }

    #[test]
    fn sparse_tick_resolves_one_strike_at_a_time() {
        let mut controller = warrior_vs_mage(&[5, 0, 3]);
        controller.pick_tactic(Tactic::Melee, Timestamp(0)).unwrap();

        controller.tick(Timestamp(10_000));
        assert_eq!(controller.strikes(), 1);
        assert_eq!(controller.left_phase(), SidePhase::Strike);

        controller.tick(Timestamp(10_000));
        assert_eq!(controller.strikes(), 2);
        assert_eq!(controller.left_phase(), SidePhase::Idle);
        assert_eq!(controller.right_phase(), SidePhase::Strike);
        assert_eq!(controller.side_state(Side::Right).started_at, Timestamp(1_600));
    }

    #[test]
    fn tactic_input_rejected_while_busy() {
        let mut controller = warrior_vs_mage(&[5]);
        controller.pick_tactic(Tactic::Melee, Timestamp(0)).unwrap();
        assert!(controller.pick_tactic(Tactic::Magic, Timestamp(10)).is_err());
        assert_eq!(controller.left().unwrap().tactic(), Some(Tactic::Melee));
    }

    #[test]
    fn strike_queues_events_in_order() {
        let mut controller = warrior_vs_mage(&[5]);
        controller.pick_tactic(Tactic::Ranged, Timestamp(0)).unwrap();
        controller.tick(Timestamp(400));

        assert_eq!(
            controller.drain_events(),
            vec![
                CombatEvent::Strike {
                    attacker: crate::Archetype::Warrior,
                    defender: crate::Archetype::Mage,
                    tactic: Tactic::Ranged,
                    damage: 31,
                    defender_health: 39,
                },
                CombatEvent::ShakeRequested { duration_ms: 200 },
            ]
        );
        assert!(controller.shake_active(Timestamp(599)));
        assert!(!controller.shake_active(Timestamp(600)));
    }

    #[test]
    fn announcement_precedes_health_change() {
        use std::sync::{Arc, Mutex};

        use tracing_subscriber::layer::{Context, SubscriberExt};

        use crate::observer::{Observer, ObserverError};

        type Log = Arc<Mutex<Vec<String>>>;

        struct Announcements(Log);

        impl Observer for Announcements {
            fn update(&self, event: &str) -> Result<(), ObserverError> {
                self.0.lock().unwrap().push(event.to_owned());
                Ok(())
            }
        }

        /// Records every health change logged by a fighter.
        struct HealthChanges(Log);

        impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for HealthChanges {
            fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
                if event.metadata().target() == "game_core::fighter" {
                    self.0.lock().unwrap().push("health changed".to_owned());
                }
            }
        }

        let log: Log = Arc::default();
        let subscriber = tracing_subscriber::registry().with(HealthChanges(log.clone()));
        tracing::subscriber::with_default(subscriber, || {
            let mut controller = warrior_vs_mage(&[5]);
            controller.add_observer(Arc::new(Announcements(log.clone())));
            controller.pick_tactic(Tactic::Melee, Timestamp(0)).unwrap();
            controller.tick(Timestamp(400));
            assert_eq!(controller.right().unwrap().health(), 39);
        });

        assert_eq!(
            *log.lock().unwrap(),
            vec!["Warrior is attacking!", "health changed"]
        );
    }

    #[test]
    fn lethal_strike_ends_match() {
        let mut controller = warrior_vs_mage(&[19]);
        controller.fighter_mut(Side::Right).unwrap().set_health(10);
        controller.pick_tactic(Tactic::Melee, Timestamp(0)).unwrap();

        controller.tick(Timestamp(400));

        assert_eq!(controller.phase(), MatchPhase::End);
        assert_eq!(controller.right().unwrap().health(), 0);
        assert_eq!(controller.winner(), Some(crate::Archetype::Warrior));
        assert!(controller.flawless_victory());
        assert_eq!(controller.left_phase(), SidePhase::Idle);
        assert_eq!(controller.right_phase(), SidePhase::Idle);

        // Ticks after the end change nothing.
        controller.tick(Timestamp(5_000));
        assert_eq!(controller.strikes(), 1);
    }
}
