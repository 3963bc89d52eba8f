//! Database error types for tf-db.

use thiserror::Error;
use tf_core::errors::CoreError;

/// Errors from database and attachment storage operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned data that could not be decoded.
    #[error("Query failed: {0}")]
    Query(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// The acting user may not change this record.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Invalid state encountered (e.g., unknown user, bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Attachment blob store failure.
    #[error("Storage error: {0}")]
    Storage(#[from] object_store::Error),

    /// Domain validation or classification failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
