//! One-line text rendering of a match snapshot.
use game_core::{CombatEvent, FighterView, MatchPhase, MatchSnapshot, SidePhase, Turn};

pub const HELP: &str = "1 Warrior | 2 Mage | 3 Archer | enter: fight | r: restart | s: snapshot | q: quit";

/// Renders the frame a player would see.
pub fn render(snapshot: &MatchSnapshot) -> String {
    match snapshot.phase {
        MatchPhase::Menu => match snapshot.left {
            Some(view) => format!("MENU | selected: {} | enter to fight", view.archetype),
            None => "MENU | pick a fighter: 1 Warrior, 2 Mage, 3 Archer".to_owned(),
        },
        MatchPhase::Fight => {
            let mut line = String::new();
            if snapshot.fight_banner_visible {
                line.push_str("ROUND 1 FIGHT! | ");
            }
            if snapshot.shake_active {
                line.push_str("*BAM* | ");
            }
            line.push_str(&format!(
                "{} vs {}",
                fighter(snapshot.left, snapshot.left_phase),
                fighter(snapshot.right, snapshot.right_phase)
            ));
            let ready = snapshot.left_phase == SidePhase::Idle
                && snapshot.right_phase == SidePhase::Idle;
            if snapshot.turn == Turn::Player && ready {
                line.push_str(" | your move: 1 Melee, 2 Ranged, 3 Magic");
            }
            line
        }
        MatchPhase::End => {
            let winner = snapshot
                .winner
                .map_or_else(|| "nobody".to_owned(), |w| w.to_string());
            if snapshot.flawless_victory {
                format!("{winner} wins! FLAWLESS VICTORY | r to restart")
            } else {
                format!("{winner} wins! | r to restart")
            }
        }
    }
}

fn fighter(view: Option<FighterView>, phase: SidePhase) -> String {
    match view {
        Some(view) => format!(
            "{} {}/{} [{phase}]",
            view.archetype, view.health, view.starting_health
        ),
        None => "-".to_owned(),
    }
}

/// Sound to play for an event, if any.
pub fn sound_cue(event: &CombatEvent) -> Option<&'static str> {
    match event {
        CombatEvent::MatchStarted { .. } => Some("fight"),
        CombatEvent::Strike { .. } => Some("punch"),
        CombatEvent::MatchEnded { .. } => Some("fatality"),
        CombatEvent::ShakeRequested { .. } | CombatEvent::MatchAbandoned => None,
    }
}
