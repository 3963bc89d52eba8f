//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source failed to parse, or the merged value failed to extract.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A section the command needs has no value.
    #[error("Configuration section '{section}' is not configured")]
    NotConfigured { section: String },

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
