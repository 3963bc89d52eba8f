use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A comment on a task. Immutable once posted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskComment {
    pub id: String,
    pub task_id: String,
    /// Author.
    pub user_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl TaskComment {
    /// Trim comment text, rejecting blank input.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when nothing is left after trimming.
    pub fn normalize_content(content: &str) -> Result<String, CoreError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation("Comment cannot be empty".into()));
        }
        Ok(trimmed.to_string())
    }
}
