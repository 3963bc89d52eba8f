use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::clock::{parse_optional_timestamp, parse_timestamp};
use crate::enums::TaskStatus;
use crate::errors::CoreError;

/// A unit of work with a deadline, owned by the user who created it.
///
/// `completed_at` is present iff `status` is [`TaskStatus::Completed`]; keep it
/// that way by changing status through [`Task::apply_status`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    /// Owning user.
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub deadline: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Move to `next`, maintaining the completion timestamp.
    ///
    /// Entering `completed` stamps `at`; leaving it clears the stamp; staying
    /// completed keeps the original completion time.
    pub fn apply_status(&mut self, next: TaskStatus, at: DateTime<Utc>) {
        self.completed_at = completion_for(self.status, self.completed_at, next, at);
        self.status = next;
    }

    #[must_use]
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

/// Completion timestamp after moving from `current` to `next` at `at`.
#[must_use]
pub fn completion_for(
    current: TaskStatus,
    current_completed_at: Option<DateTime<Utc>>,
    next: TaskStatus,
    at: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match (current, next) {
        (TaskStatus::Completed, TaskStatus::Completed) => current_completed_at.or(Some(at)),
        (_, TaskStatus::Completed) => Some(at),
        (_, TaskStatus::Pending | TaskStatus::InProgress) => None,
    }
}

/// Trim a task title, rejecting blank input.
///
/// # Errors
///
/// Returns `CoreError::Validation` when the title is empty after trimming.
pub fn normalize_title(title: &str) -> Result<String, CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Please enter a title".into()));
    }
    Ok(trimmed.to_string())
}

/// Trim a description; blank becomes `None`.
#[must_use]
pub fn normalize_description(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(String::from)
}

/// A task as an external backend hands it over: timestamps are still text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskRecord {
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub deadline: String,
    #[serde(default)]
    pub completed_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl TryFrom<TaskRecord> for Task {
    type Error = CoreError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            deadline: parse_timestamp("deadline", &record.deadline)?,
            completed_at: parse_optional_timestamp("completed_at", record.completed_at.as_deref())?,
            created_at: parse_timestamp("created_at", &record.created_at)?,
            updated_at: parse_timestamp("updated_at", &record.updated_at)?,
            id: record.id,
            user_id: record.user_id,
            title: record.title,
            description: record.description,
            status: record.status,
        })
    }
}

impl From<Task> for TaskRecord {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            user_id: task.user_id,
            title: task.title,
            description: task.description,
            status: task.status,
            deadline: task.deadline.to_rfc3339(),
            completed_at: task.completed_at.map(|t| t.to_rfc3339()),
            created_at: task.created_at.to_rfc3339(),
            updated_at: task.updated_at.to_rfc3339(),
        }
    }
}
