//! # tf-db
//!
//! libSQL persistence and attachment storage for TaskFlow.
//!
//! Holds profiles, roles, tasks, attachment metadata, and comments in a local
//! libSQL database. Attachment bytes live in an object store (local
//! filesystem, or in-memory for tests) under a single bucket.
//!
//! Every mutation takes the acting [`tf_core::policy::Viewer`] explicitly and
//! re-checks ownership in SQL; the policy functions in tf-core only decide
//! what the UI offers.

pub mod blob;
pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod updates;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle.
///
/// Wraps a libSQL database and connection, and generates prefixed IDs.
pub struct TaskflowDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl TaskflowDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Foreign keys are per-connection in SQLite
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let taskflow_db = Self { db, conn };
        taskflow_db.run_migrations().await?;
        tracing::debug!(path, "database opened");
        Ok(taskflow_db)
    }

    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL, e.g. `"tsk-a3f8b2c1"`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tf_core::ids;

    async fn test_db() -> TaskflowDb {
        TaskflowDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        for table in [
            "profiles",
            "user_roles",
            "tasks",
            "task_attachments",
            "task_comments",
        ] {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                )
                .await
                .unwrap();
            assert!(rows.next().await.unwrap().is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn generate_id_correct_format() {
        let db = test_db().await;
        let id = db.generate_id(ids::PREFIX_TASK).await.unwrap();
        assert!(id.starts_with("tsk-"), "{id}");
        assert_eq!(id.len(), 12, "3 prefix + dash + 8 hex: {id}");
        assert!(id[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn generate_id_uniqueness() {
        let db = test_db().await;
        let mut seen = HashSet::new();
        for _ in 0..100 {
            let id = db.generate_id(ids::PREFIX_COMMENT).await.unwrap();
            assert!(seen.insert(id.clone()), "duplicate ID generated: {id}");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn stored_status_rejects_overdue() {
        let db = test_db().await;
        db.conn()
            .execute(
                "INSERT INTO profiles (id, user_id, full_name) VALUES ('prf-1', 'usr-1', 'Ana')",
                (),
            )
            .await
            .unwrap();
        let result = db
            .conn()
            .execute(
                "INSERT INTO tasks (id, user_id, title, status, deadline) \
                 VALUES ('tsk-1', 'usr-1', 'Ship', 'overdue', '2024-01-10T00:00:00Z')",
                (),
            )
            .await;
        assert!(result.is_err(), "'overdue' is never a stored status");
    }

    #[tokio::test]
    async fn deleting_task_cascades_to_comments() {
        let db = test_db().await;
        for sql in [
            "INSERT INTO profiles (id, user_id, full_name) VALUES ('prf-1', 'usr-1', 'Ana')",
            "INSERT INTO tasks (id, user_id, title, deadline) VALUES ('tsk-1', 'usr-1', 'Ship', '2024-01-10T00:00:00Z')",
            "INSERT INTO task_comments (id, task_id, user_id, content) VALUES ('cmt-1', 'tsk-1', 'usr-1', 'hi')",
            "DELETE FROM tasks WHERE id = 'tsk-1'",
        ] {
            db.conn().execute(sql, ()).await.unwrap();
        }
        let mut rows = db
            .conn()
            .query("SELECT COUNT(*) FROM task_comments", ())
            .await
            .unwrap();
        let count: i64 = rows.next().await.unwrap().unwrap().get(0).unwrap();
        assert_eq!(count, 0);
    }
}
