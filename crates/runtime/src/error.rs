//! Unified error types surfaced by the runtime API.
//!
//! Wraps rejected controller inputs and configuration problems so hosts can
//! bubble them up with consistent context.
use thiserror::Error;

use game_core::{ErrorSeverity, GameError, InputError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("unrecognised key {token:?}")]
    UnknownKey { token: String },

    #[error("invalid configuration: {key} = {value}")]
    InvalidConfig { key: &'static str, value: String },
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Input(inner) => inner.severity(),
            Self::UnknownKey { .. } | Self::InvalidConfig { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Input(inner) => inner.error_code(),
            Self::UnknownKey { .. } => "UNKNOWN_KEY",
            Self::InvalidConfig { .. } => "INVALID_CONFIG",
        }
    }
}
