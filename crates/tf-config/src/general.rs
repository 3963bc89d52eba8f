//! General application configuration.

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

/// Days from now used when a task is created without a deadline.
const fn default_deadline_days() -> u32 {
    7
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Deadline offset, in days, for tasks created without `--deadline`.
    #[serde(default = "default_deadline_days")]
    pub default_deadline_days: u32,

    /// Fixed UTC offset (`±HH:MM`) that decides what "today" means.
    /// Empty means the system's local offset.
    #[serde(default)]
    pub utc_offset: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            default_deadline_days: default_deadline_days(),
            utc_offset: String::new(),
        }
    }
}

impl GeneralConfig {
    /// The configured offset, or `None` to follow the system clock.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `utc_offset` is not `±HH:MM`.
    pub fn offset(&self) -> Result<Option<FixedOffset>, ConfigError> {
        if self.utc_offset.trim().is_empty() {
            return Ok(None);
        }
        tf_core::clock::parse_utc_offset(&self.utc_offset)
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                field: "general.utc_offset".into(),
                reason: e.to_string(),
            })
    }
}
