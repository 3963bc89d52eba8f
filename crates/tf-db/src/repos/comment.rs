//! Comment repository. Any user may comment on any task.

use chrono::Utc;

use tf_core::entities::TaskComment;
use tf_core::ids::PREFIX_COMMENT;
use tf_core::policy::Viewer;

use crate::error::DatabaseError;
use crate::helpers::{collect_rows, fmt_ts, parse_datetime};
use crate::service::TaskflowService;

const SELECT_COLS: &str = "id, task_id, user_id, content, created_at";

fn row_to_comment(row: &libsql::Row) -> Result<TaskComment, DatabaseError> {
    Ok(TaskComment {
        id: row.get(0)?,
        task_id: row.get(1)?,
        user_id: row.get(2)?,
        content: row.get(3)?,
        created_at: parse_datetime("created_at", &row.get::<String>(4)?)?,
    })
}

impl TaskflowService {
    pub async fn add_comment(
        &self,
        viewer: &Viewer,
        task_id: &str,
        content: &str,
    ) -> Result<TaskComment, DatabaseError> {
        let content = TaskComment::normalize_content(content)?;
        self.get_task(task_id).await?;

        let id = self.db().generate_id(PREFIX_COMMENT).await?;
        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO task_comments ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5)"),
                libsql::params![
                    id.as_str(),
                    task_id,
                    viewer.user_id.as_str(),
                    content,
                    fmt_ts(&Utc::now())
                ],
            )
            .await?;

        tracing::debug!(comment_id = %id, %task_id, "comment added");
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM task_comments WHERE id = ?1"),
                [id.as_str()],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_comment(&row)
    }

    /// Comments on a task, oldest first.
    pub async fn list_comments(&self, task_id: &str) -> Result<Vec<TaskComment>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM task_comments WHERE task_id = ?1 \
                     ORDER BY created_at ASC, rowid ASC"
                ),
                [task_id],
            )
            .await?;
        collect_rows(rows, row_to_comment).await
    }
}
