use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the tempora workspace.
///
/// Validation problems surface as `InvalidArg`/`InvalidState` before any
/// mutation happens; failures inside multi-step numeric work are reported as
/// `Computation` with the operation that failed and the underlying cause.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TemporaError {
    /// Invalid input argument (out-of-domain percentile, confidence, weights, etc.).
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An object would be left in an inconsistent state (e.g. a range with start > end).
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// An internal numeric or date-arithmetic step failed.
    #[error("computation failed in {context}: {cause}")]
    Computation {
        /// Operation that was running when the failure happened.
        context: String,
        /// Rendered description of the underlying failure.
        cause: String,
    },
}

impl TemporaError {
    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build an `InvalidState` error.
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Helper: build a `Computation` error from a context label and any displayable cause.
    pub fn computation(context: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self::Computation {
            context: context.into(),
            cause: cause.to_string(),
        }
    }

    /// Re-tag an error raised deeper in a pipeline as a `Computation` failure of `context`.
    ///
    /// Validation errors pass through untouched; only computation failures are
    /// re-labelled so the caller sees the operation they actually invoked.
    #[must_use]
    pub fn within(self, context: &str) -> Self {
        match self {
            Self::Computation { cause, context: inner } => Self::Computation {
                context: context.to_string(),
                cause: format!("{inner}: {cause}"),
            },
            other => other,
        }
    }

    /// Returns true for errors caused by the caller's input rather than by the engine.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidArg(_) | Self::InvalidState(_))
    }
}
