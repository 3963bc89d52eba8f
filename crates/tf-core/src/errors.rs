//! Cross-cutting error types for TaskFlow.
//!
//! Domain-specific errors (`DatabaseError`, `ConfigError`) live in their
//! respective crates. Everything converges into `anyhow::Error` in `tf-cli`.

use thiserror::Error;

/// Errors that can be raised by the pure core.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A deadline or completion time is missing or cannot be read as a point in time.
    #[error("Invalid timestamp for {field}: '{value}' ({reason})")]
    InvalidTimestamp {
        field: String,
        value: String,
        reason: String,
    },

    /// Data failed validation (empty title, unknown role, etc.).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    pub(crate) fn invalid_timestamp(
        field: &str,
        value: impl Into<String>,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::InvalidTimestamp {
            field: field.to_string(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}
