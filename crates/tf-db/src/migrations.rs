//! Database migration runner.
//!
//! The SQL is embedded at compile time and executed on every open. All
//! statements use `IF NOT EXISTS`, so re-running is a no-op.

use crate::TaskflowDb;
use crate::error::DatabaseError;

/// Profiles, roles, tasks, attachments, comments and their indexes.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

impl TaskflowDb {
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_initial: {e}")))?;
        Ok(())
    }
}
