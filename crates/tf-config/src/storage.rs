//! Attachment blob storage configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default bucket name.
fn default_bucket() -> String {
    String::from("task-attachments")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Bucket (top-level directory) holding attachment blobs.
    #[serde(default = "default_bucket")]
    pub bucket: String,

    /// Blob root directory. Empty means `.taskflow/blobs` in the project.
    #[serde(default)]
    pub local_dir: String,

    /// Prefix for attachment URLs. Empty means a `file://` URL of the blob.
    #[serde(default)]
    pub public_base_url: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: default_bucket(),
            local_dir: String::new(),
            public_base_url: String::new(),
        }
    }
}

impl StorageConfig {
    /// Directory holding the bucket, resolved against `project_dir`
    /// (the `.taskflow` directory).
    #[must_use]
    pub fn root_dir(&self, project_dir: &Path) -> PathBuf {
        if self.local_dir.trim().is_empty() {
            project_dir.join("blobs")
        } else {
            let configured = PathBuf::from(self.local_dir.trim());
            if configured.is_absolute() {
                configured
            } else {
                project_dir.join(configured)
            }
        }
    }

    pub fn has_public_base_url(&self) -> bool {
        !self.public_base_url.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = StorageConfig::default();
        assert_eq!(config.bucket, "task-attachments");
        assert!(!config.has_public_base_url());
        assert_eq!(
            config.root_dir(Path::new("/p/.taskflow")),
            PathBuf::from("/p/.taskflow/blobs")
        );
    }

    #[test]
    fn relative_dir_resolves_under_project() {
        let config = StorageConfig {
            local_dir: "files".into(),
            ..StorageConfig::default()
        };
        assert_eq!(
            config.root_dir(Path::new("/p/.taskflow")),
            PathBuf::from("/p/.taskflow/files")
        );
    }

    #[test]
    fn absolute_dir_is_kept() {
        let config = StorageConfig {
            local_dir: "/var/lib/taskflow".into(),
            ..StorageConfig::default()
        };
        assert_eq!(
            config.root_dir(Path::new("/p/.taskflow")),
            PathBuf::from("/var/lib/taskflow")
        );
    }
}
