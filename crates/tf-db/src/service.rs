//! Service layer.
//!
//! `TaskflowService` pairs the database with the attachment store. All repo
//! methods are implemented as `impl TaskflowService` blocks in [`crate::repos`].

use std::path::Path;

use tf_config::StorageConfig;

use crate::TaskflowDb;
use crate::blob::AttachmentStore;
use crate::error::DatabaseError;

pub struct TaskflowService {
    db: TaskflowDb,
    blobs: AttachmentStore,
}

impl TaskflowService {
    /// Open the database at `db_path` with blobs under the configured store.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"`.
    /// * `project_dir` - The `.taskflow` directory; relative blob paths resolve here.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database or blob directory cannot be opened.
    pub async fn new_local(
        db_path: &str,
        project_dir: &Path,
        storage: &StorageConfig,
    ) -> Result<Self, DatabaseError> {
        let db = TaskflowDb::open_local(db_path).await?;
        let blobs = AttachmentStore::from_config(project_dir, storage)?;
        Ok(Self { db, blobs })
    }

    #[must_use]
    pub const fn from_parts(db: TaskflowDb, blobs: AttachmentStore) -> Self {
        Self { db, blobs }
    }

    #[must_use]
    pub const fn db(&self) -> &TaskflowDb {
        &self.db
    }

    #[must_use]
    pub const fn blobs(&self) -> &AttachmentStore {
        &self.blobs
    }
}
