//! CLI response types returned as JSON by `tfl` commands.
//!
//! List rows and the dashboard are both built from the classifier here, so the
//! two views cannot drift apart.

use chrono::{DateTime, TimeZone};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::classify::classify;
use crate::entities::{Profile, Task, TaskAttachment, TaskComment};
use crate::enums::{BadgeVariant, EffectiveStatus, Role};
use crate::errors::CoreError;
use crate::policy::Viewer;
use crate::stats::{ChartSlice, Summary};

/// One row of the task list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskRow {
    #[serde(flatten)]
    pub task: Task,
    pub effective_status: EffectiveStatus,
    pub label: String,
    pub badge: BadgeVariant,
    /// Owner's display name, when a profile exists.
    pub owner_name: Option<String>,
    pub is_own: bool,
    pub can_edit: bool,
}

impl TaskRow {
    /// Decorate `task` for `viewer` at `now`.
    ///
    /// # Errors
    ///
    /// Propagates classification errors.
    pub fn build<Tz: TimeZone>(
        task: Task,
        owner: Option<&Profile>,
        viewer: &Viewer,
        now: &DateTime<Tz>,
    ) -> Result<Self, CoreError> {
        let effective_status = classify(&task, now)?;
        Ok(Self {
            effective_status,
            label: effective_status.label().to_string(),
            badge: effective_status.badge(),
            owner_name: owner.map(|p| p.full_name.clone()),
            is_own: task.is_owned_by(&viewer.user_id),
            can_edit: viewer.can_edit(&task),
            task,
        })
    }
}

/// A comment with its author's display name.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CommentView {
    #[serde(flatten)]
    pub comment: TaskComment,
    pub author_name: String,
}

impl CommentView {
    /// Fallback shown when the author has no profile.
    pub const UNKNOWN_AUTHOR: &'static str = "Unknown User";

    #[must_use]
    pub fn new(comment: TaskComment, author: Option<&Profile>) -> Self {
        Self {
            author_name: author.map_or_else(
                || Self::UNKNOWN_AUTHOR.to_string(),
                |p| p.full_name.clone(),
            ),
            comment,
        }
    }
}

/// Response from `tfl task get`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskDetailResponse {
    pub task: TaskRow,
    /// Newest first.
    pub attachments: Vec<TaskAttachment>,
    /// Oldest first.
    pub comments: Vec<CommentView>,
}

/// Response from `tfl stats`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DashboardResponse {
    pub summary: Summary,
    pub completion_percent: u8,
    pub chart: Vec<ChartSlice>,
}

impl From<Summary> for DashboardResponse {
    fn from(summary: Summary) -> Self {
        Self {
            completion_percent: summary.completion_percent(),
            chart: summary.chart_slices(),
            summary,
        }
    }
}

/// A user as listed by `tfl user list` / `tfl whoami`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserResponse {
    pub user_id: String,
    pub full_name: String,
    pub role: Option<Role>,
    pub role_label: Option<String>,
}

impl UserResponse {
    #[must_use]
    pub fn new(profile: &Profile, role: Option<Role>) -> Self {
        Self {
            user_id: profile.user_id.clone(),
            full_name: profile.full_name.clone(),
            role,
            role_label: role.map(|r| r.label().to_string()),
        }
    }
}
