//! Attachment blob storage.
//!
//! Bytes go to an [`ObjectStore`] under `<bucket>/<task_id>/<stamp>-<suffix>.<ext>`.
//! The URL recorded on the attachment row is derived from the configured
//! public base URL, or points straight at the blob on disk.

use std::path::{Path as FsPath, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use object_store::local::LocalFileSystem;
use object_store::memory::InMemory;
use object_store::path::Path;
use object_store::{ObjectStore, PutPayload};
use tf_config::StorageConfig;

use crate::error::DatabaseError;

/// Where blob URLs point.
#[derive(Debug, Clone)]
enum UrlBase {
    Public(String),
    File(PathBuf),
    Memory,
}

/// Object store handle plus the bucket and URL scheme for attachments.
#[derive(Clone)]
pub struct AttachmentStore {
    store: Arc<dyn ObjectStore>,
    bucket: String,
    url_base: UrlBase,
}

impl std::fmt::Debug for AttachmentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttachmentStore")
            .field("bucket", &self.bucket)
            .field("url_base", &self.url_base)
            .finish_non_exhaustive()
    }
}

impl AttachmentStore {
    /// Filesystem-backed store rooted at `root`, created if missing.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the directory cannot be created or opened.
    pub fn local(root: &FsPath, config: &StorageConfig) -> Result<Self, DatabaseError> {
        std::fs::create_dir_all(root).map_err(|e| {
            DatabaseError::InvalidState(format!(
                "cannot create blob directory {}: {e}",
                root.display()
            ))
        })?;
        let store = LocalFileSystem::new_with_prefix(root)?;
        let url_base = if config.has_public_base_url() {
            UrlBase::Public(config.public_base_url.trim().trim_end_matches('/').to_string())
        } else {
            UrlBase::File(root.to_path_buf())
        };
        Ok(Self {
            store: Arc::new(store),
            bucket: config.bucket.clone(),
            url_base,
        })
    }

    /// Store resolved from config: `storage.local_dir`, else `<project_dir>/blobs`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::local`].
    pub fn from_config(project_dir: &FsPath, config: &StorageConfig) -> Result<Self, DatabaseError> {
        Self::local(&config.root_dir(project_dir), config)
    }

    /// Volatile store for tests.
    #[must_use]
    pub fn in_memory(bucket: &str) -> Self {
        Self {
            store: Arc::new(InMemory::new()),
            bucket: bucket.to_string(),
            url_base: UrlBase::Memory,
        }
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Object key for a new blob: `<task_id>/<millis>-<suffix>[.<ext>]`.
    ///
    /// `suffix` keeps keys unique when two files land in the same millisecond.
    #[must_use]
    pub fn object_key(task_id: &str, file_name: &str, suffix: &str, at: DateTime<Utc>) -> String {
        let stamp = at.timestamp_millis();
        match FsPath::new(file_name).extension().and_then(|e| e.to_str()) {
            Some(ext) if !ext.is_empty() => format!("{task_id}/{stamp}-{suffix}.{ext}"),
            _ => format!("{task_id}/{stamp}-{suffix}"),
        }
    }

    fn location(&self, key: &str) -> Path {
        Path::from(format!("{}/{key}", self.bucket))
    }

    /// URL recorded for `key`.
    #[must_use]
    pub fn url_for(&self, key: &str) -> String {
        match &self.url_base {
            UrlBase::Public(base) => format!("{base}/{}/{key}", self.bucket),
            UrlBase::File(root) => {
                format!("file://{}", root.join(&self.bucket).join(key).display())
            }
            UrlBase::Memory => format!("memory:///{}/{key}", self.bucket),
        }
    }

    /// Write `bytes` under `key`, returning its URL.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Storage` if the write fails.
    pub async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<String, DatabaseError> {
        let location = self.location(key);
        let size = bytes.len();
        self.store.put(&location, PutPayload::from(bytes)).await?;
        tracing::debug!(%location, size, "attachment blob stored");
        Ok(self.url_for(key))
    }

    /// Read the blob at `key`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Storage` if the blob is missing or unreadable.
    pub async fn get(&self, key: &str) -> Result<Vec<u8>, DatabaseError> {
        let result = self.store.get(&self.location(key)).await?;
        Ok(result.bytes().await?.to_vec())
    }

    /// Remove the blob at `key`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Storage` if the delete fails.
    pub async fn delete(&self, key: &str) -> Result<(), DatabaseError> {
        self.store.delete(&self.location(key)).await?;
        Ok(())
    }
}

/// MIME type guessed from the file name, if any.
#[must_use]
pub fn guess_mime(file_name: &str) -> Option<String> {
    mime_guess::from_path(file_name)
        .first()
        .map(|m| m.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap()
    }

    #[test]
    fn object_key_keeps_extension() {
        let key = AttachmentStore::object_key("tsk-1", "report.final.pdf", "ab12", at());
        assert_eq!(key, "tsk-1/1704877200000-ab12.pdf");
    }

    #[test]
    fn object_key_without_extension() {
        let key = AttachmentStore::object_key("tsk-1", "Makefile", "ab12", at());
        assert_eq!(key, "tsk-1/1704877200000-ab12");
    }

    #[test]
    fn mime_from_file_name() {
        assert_eq!(guess_mime("photo.PNG").as_deref(), Some("image/png"));
        assert_eq!(guess_mime("report.pdf").as_deref(), Some("application/pdf"));
        assert_eq!(guess_mime("no_extension"), None);
    }

    #[test]
    fn public_url_uses_bucket() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig {
            public_base_url: "https://files.example.com/".into(),
            ..StorageConfig::default()
        };
        let store = AttachmentStore::local(dir.path(), &config).unwrap();
        assert_eq!(
            store.url_for("tsk-1/1-a.png"),
            "https://files.example.com/task-attachments/tsk-1/1-a.png"
        );
    }

    #[tokio::test]
    async fn local_put_get_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = AttachmentStore::local(dir.path(), &StorageConfig::default()).unwrap();

        let url = store.put("tsk-1/1-a.txt", b"hello".to_vec()).await.unwrap();
        assert!(url.starts_with("file://"), "{url}");
        assert!(dir.path().join("task-attachments/tsk-1/1-a.txt").exists());
        assert_eq!(store.get("tsk-1/1-a.txt").await.unwrap(), b"hello");

        store.delete("tsk-1/1-a.txt").await.unwrap();
        assert!(store.get("tsk-1/1-a.txt").await.is_err());
    }

    #[tokio::test]
    async fn in_memory_roundtrip() {
        let store = AttachmentStore::in_memory("bucket");
        let url = store.put("tsk-9/2-b.bin", vec![1, 2, 3]).await.unwrap();
        assert_eq!(url, "memory:///bucket/tsk-9/2-b.bin");
        assert_eq!(store.get("tsk-9/2-b.bin").await.unwrap(), vec![1, 2, 3]);
    }
}
