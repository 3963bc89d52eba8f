//! Task repository: CRUD, filtered listing, and status transitions.

use chrono::{DateTime, Utc};

use tf_core::entities::{Task, completion_for, normalize_description, normalize_title};
use tf_core::enums::TaskStatus;
use tf_core::ids::PREFIX_TASK;
use tf_core::policy::Viewer;

use crate::error::DatabaseError;
use crate::helpers::{
    collect_rows, fmt_ts, get_opt_string, parse_datetime, parse_enum, parse_optional_datetime,
};
use crate::repos::{forbidden, owner_or_admin};
use crate::service::TaskflowService;
use crate::updates::task::TaskUpdate;

const SELECT_COLS: &str =
    "id, user_id, title, description, status, deadline, completed_at, created_at, updated_at";

fn row_to_task(row: &libsql::Row) -> Result<Task, DatabaseError> {
    Ok(Task {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        description: get_opt_string(row, 3)?,
        status: parse_enum(&row.get::<String>(4)?)?,
        deadline: parse_datetime("deadline", &row.get::<String>(5)?)?,
        completed_at: parse_optional_datetime("completed_at", get_opt_string(row, 6)?.as_deref())?,
        created_at: parse_datetime("created_at", &row.get::<String>(7)?)?,
        updated_at: parse_datetime("updated_at", &row.get::<String>(8)?)?,
    })
}

/// Input for [`TaskflowService::create_task`]. The owner is the viewer.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub deadline: DateTime<Utc>,
}

impl NewTask {
    #[must_use]
    pub fn new(title: impl Into<String>, deadline: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: TaskStatus::Pending,
            deadline,
        }
    }
}

/// Filters for [`TaskflowService::list_tasks`]. All `None` lists everything.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Only tasks owned by this user.
    pub owner: Option<String>,
    pub status: Option<TaskStatus>,
    /// Case-insensitive substring of title or description.
    pub search: Option<String>,
    pub limit: Option<u32>,
}

impl TaskflowService {
    pub async fn create_task(&self, viewer: &Viewer, new: NewTask) -> Result<Task, DatabaseError> {
        let title = normalize_title(&new.title)?;
        let description = normalize_description(new.description.as_deref());

        match self.get_profile(&viewer.user_id).await {
            Ok(_) => {}
            Err(DatabaseError::NoResult) => {
                return Err(DatabaseError::InvalidState(format!(
                    "unknown user {}",
                    viewer.user_id
                )));
            }
            Err(e) => return Err(e),
        }

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_TASK).await?;
        let completed_at = completion_for(TaskStatus::Pending, None, new.status, now);

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO tasks ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"
                ),
                libsql::params![
                    id.as_str(),
                    viewer.user_id.as_str(),
                    title,
                    description,
                    new.status.as_str(),
                    fmt_ts(&new.deadline),
                    completed_at.as_ref().map(fmt_ts),
                    fmt_ts(&now),
                    fmt_ts(&now)
                ],
            )
            .await?;

        tracing::debug!(task_id = %id, owner = %viewer.user_id, "task created");
        self.get_task(&id).await
    }

    pub async fn get_task(&self, id: &str) -> Result<Task, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM tasks WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_task(&row)
    }

    /// Tasks matching `filter`, soonest deadline first.
    pub async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, DatabaseError> {
        let mut clauses = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref owner) = filter.owner {
            clauses.push(format!("user_id = ?{idx}"));
            params.push(owner.clone().into());
            idx += 1;
        }
        if let Some(status) = filter.status {
            clauses.push(format!("status = ?{idx}"));
            params.push(status.as_str().into());
            idx += 1;
        }
        if let Some(search) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            clauses.push(format!(
                "(instr(lower(title), lower(?{idx})) > 0 \
                 OR instr(lower(coalesce(description, '')), lower(?{idx})) > 0)"
            ));
            params.push(search.to_string().into());
        }

        let where_sql = if clauses.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", clauses.join(" AND "))
        };
        let limit_sql = filter
            .limit
            .map_or_else(String::new, |limit| format!("LIMIT {limit}"));

        let rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM tasks {where_sql} \
                     ORDER BY deadline ASC, created_at ASC {limit_sql}"
                ),
                libsql::params_from_iter(params),
            )
            .await?;
        collect_rows(rows, row_to_task).await
    }

    /// Apply a partial update. Owner or admin only.
    ///
    /// A status change keeps `completed_at` consistent: entering `completed`
    /// stamps now, leaving it clears the stamp, re-saving as `completed`
    /// keeps the original time.
    pub async fn update_task(
        &self,
        viewer: &Viewer,
        task_id: &str,
        update: TaskUpdate,
    ) -> Result<Task, DatabaseError> {
        let current = self.get_task(task_id).await?;

        if update.is_empty() {
            self.ensure_can_modify(viewer, task_id).await?;
            return Ok(current);
        }

        let now = Utc::now();
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref title) = update.title {
            sets.push(format!("title = ?{idx}"));
            params.push(normalize_title(title)?.into());
            idx += 1;
        }
        if let Some(ref description) = update.description {
            sets.push(format!("description = ?{idx}"));
            params.push(
                normalize_description(description.as_deref())
                    .map_or(libsql::Value::Null, Into::into),
            );
            idx += 1;
        }
        if let Some(status) = update.status {
            if status != current.status && !current.status.can_transition_to(status) {
                return Err(DatabaseError::InvalidState(format!(
                    "Cannot transition task {task_id} from {} to {status}",
                    current.status
                )));
            }
            let completed_at = completion_for(current.status, current.completed_at, status, now);
            sets.push(format!("status = ?{idx}"));
            params.push(status.as_str().into());
            idx += 1;
            sets.push(format!("completed_at = ?{idx}"));
            params.push(
                completed_at
                    .as_ref()
                    .map_or(libsql::Value::Null, |ts| fmt_ts(ts).into()),
            );
            idx += 1;
        }
        if let Some(ref deadline) = update.deadline {
            sets.push(format!("deadline = ?{idx}"));
            params.push(fmt_ts(deadline).into());
            idx += 1;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(fmt_ts(&now).into());
        idx += 1;

        params.push(task_id.into());
        params.push(viewer.user_id.clone().into());
        let sql = format!(
            "UPDATE tasks SET {} WHERE id = ?{idx} AND {}",
            sets.join(", "),
            owner_or_admin(idx + 1)
        );
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(forbidden(viewer, task_id));
        }

        tracing::debug!(%task_id, by = %viewer.user_id, "task updated");
        self.get_task(task_id).await
    }

    /// Move a task to `status`. Shorthand for a status-only update.
    pub async fn transition_task(
        &self,
        viewer: &Viewer,
        task_id: &str,
        status: TaskStatus,
    ) -> Result<Task, DatabaseError> {
        let update = TaskUpdate {
            status: Some(status),
            ..TaskUpdate::default()
        };
        self.update_task(viewer, task_id, update).await
    }

    /// Delete a task with its comments, attachment rows, and attachment blobs.
    /// Owner or admin only.
    pub async fn delete_task(&self, viewer: &Viewer, task_id: &str) -> Result<(), DatabaseError> {
        self.ensure_can_modify(viewer, task_id).await?;
        let keys = self.attachment_keys(task_id).await?;

        let changed = self
            .db()
            .conn()
            .execute(
                &format!("DELETE FROM tasks WHERE id = ?1 AND {}", owner_or_admin(2)),
                libsql::params![task_id, viewer.user_id.as_str()],
            )
            .await?;
        if changed == 0 {
            return Err(forbidden(viewer, task_id));
        }

        for key in keys {
            if let Err(error) = self.blobs().delete(&key).await {
                tracing::warn!(%task_id, %key, %error, "failed to remove attachment blob");
            }
        }
        tracing::debug!(%task_id, by = %viewer.user_id, "task deleted");
        Ok(())
    }
}
