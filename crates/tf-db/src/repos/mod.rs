//! Repository modules implementing the data operations.
//!
//! Each module adds methods to `TaskflowService` via `impl TaskflowService`
//! blocks. Ownership checks for mutations live here, in SQL, so they hold no
//! matter which client calls them.

pub mod attachment;
pub mod comment;
pub mod task;
pub mod users;

use tf_core::policy::Viewer;

use crate::error::DatabaseError;
use crate::service::TaskflowService;

/// SQL predicate: the `tasks` row is owned by `?{idx}` or `?{idx}` is an admin.
///
/// The role is read from `user_roles`, never trusted from the caller.
pub(crate) fn owner_or_admin(idx: usize) -> String {
    format!(
        "(user_id = ?{idx} OR EXISTS \
         (SELECT 1 FROM user_roles r WHERE r.user_id = ?{idx} AND r.role = 'admin'))"
    )
}

impl TaskflowService {
    /// Fail unless `viewer` may modify task `task_id`.
    ///
    /// # Errors
    ///
    /// `NoResult` if the task does not exist, `Forbidden` if it belongs to
    /// someone else and the viewer is not an admin.
    pub async fn ensure_can_modify(
        &self,
        viewer: &Viewer,
        task_id: &str,
    ) -> Result<(), DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {} FROM tasks WHERE id = ?1",
                    owner_or_admin(2)
                ),
                libsql::params![task_id, viewer.user_id.as_str()],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        if row.get::<i64>(0)? == 0 {
            return Err(forbidden(viewer, task_id));
        }
        Ok(())
    }
}

pub(crate) fn forbidden(viewer: &Viewer, task_id: &str) -> DatabaseError {
    DatabaseError::Forbidden(format!(
        "{} may not modify task {task_id}",
        viewer.user_id
    ))
}
