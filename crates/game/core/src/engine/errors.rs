//! Error types for controller inputs.

use crate::error::{ErrorSeverity, GameError};
use crate::factory::FactoryError;
use crate::state::MatchPhase;

/// Errors surfaced when the host issues an input the controller cannot accept.
///
/// Every variant leaves the match untouched; the host may simply drop the input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("{input} is not accepted during {phase}")]
    InvalidPhase {
        input: &'static str,
        phase: MatchPhase,
    },

    #[error("no archetype selected for the player")]
    NoSelection,

    #[error(transparent)]
    Factory(#[from] FactoryError),
}

impl InputError {
    pub fn invalid_phase(input: &'static str, phase: MatchPhase) -> Self {
        Self::InvalidPhase { input, phase }
    }
}

impl GameError for InputError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidPhase { .. } | Self::NoSelection => ErrorSeverity::Validation,
            Self::Factory(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPhase { .. } => "INVALID_PHASE",
            Self::NoSelection => "NO_SELECTION",
            Self::Factory(inner) => inner.error_code(),
        }
    }
}
