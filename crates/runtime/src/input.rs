//! Maps host key presses onto controller inputs.
//!
//! The same three digit keys mean different things per match phase: an
//! archetype in the menu, a tactic during a fight. Translation is the only
//! place that knows this; the controller only sees typed inputs.
use std::str::FromStr;

use game_core::{Archetype, ControllerInput, MatchPhase, Tactic};

use crate::error::RuntimeError;

/// Keys a host forwards to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum HostKey {
    Digit1,
    Digit2,
    Digit3,
    Enter,
    Restart,
    Quit,
}

impl HostKey {
    /// Zero-based index for digit keys.
    pub fn digit_index(self) -> Option<u32> {
        match self {
            Self::Digit1 => Some(0),
            Self::Digit2 => Some(1),
            Self::Digit3 => Some(2),
            _ => None,
        }
    }
}

impl FromStr for HostKey {
    type Err = RuntimeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        parse_key(token)
    }
}

/// Parses one terminal token. An empty line counts as Enter.
pub fn parse_key(token: &str) -> Result<HostKey, RuntimeError> {
    let key = match token.trim().to_ascii_lowercase().as_str() {
        "1" => HostKey::Digit1,
        "2" => HostKey::Digit2,
        "3" => HostKey::Digit3,
        "" | "enter" => HostKey::Enter,
        "r" | "restart" => HostKey::Restart,
        "q" | "quit" => HostKey::Quit,
        _ => {
            return Err(RuntimeError::UnknownKey {
                token: token.to_owned(),
            });
        }
    };
    Ok(key)
}

/// Translates `key` for the current match phase.
///
/// Returns `None` for keys that mean nothing in `phase`, and always for
/// [`HostKey::Quit`], which the host handles itself.
pub fn translate(key: HostKey, phase: MatchPhase) -> Option<ControllerInput> {
    match (phase, key) {
        (MatchPhase::Menu, HostKey::Enter) => Some(ControllerInput::CommitMatch),
        (MatchPhase::Menu, _) => key.digit_index().map(|index| {
            ControllerInput::pick_archetype(Archetype::from_index(index).label())
        }),
        (MatchPhase::Fight, _) => key
            .digit_index()
            .map(|index| ControllerInput::PickTactic(Tactic::from_index(index))),
        (MatchPhase::End, HostKey::Restart) => Some(ControllerInput::Restart),
        (MatchPhase::End, _) => None,
    }
}
