//! Host-issued controller inputs.

use crate::tactic::Tactic;

/// One discrete input from the host.
///
/// | Input | Accepted in |
/// |---|---|
/// | `PickArchetype` | Menu |
/// | `CommitMatch` | Menu, with a player archetype picked |
/// | `PickTactic` | Fight, player turn, both sides idle |
/// | `Restart` | End |
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControllerInput {
    PickArchetype(String),
    CommitMatch,
    PickTactic(Tactic),
    Restart,
}

impl ControllerInput {
    pub fn pick_archetype(name: impl Into<String>) -> Self {
        Self::PickArchetype(name.into())
    }

    /// Stable name used in errors and logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PickArchetype(_) => "pick_archetype",
            Self::CommitMatch => "commit_match",
            Self::PickTactic(_) => "pick_tactic",
            Self::Restart => "restart",
        }
    }
}
