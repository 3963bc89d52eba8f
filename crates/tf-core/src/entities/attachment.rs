use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A file uploaded against a task. The bytes live in the blob store.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskAttachment {
    pub id: String,
    pub task_id: String,
    /// Original file name as uploaded.
    pub file_name: String,
    pub file_url: String,
    /// MIME type, when one could be determined.
    pub file_type: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

impl TaskAttachment {
    /// Coarse kind used to pick an icon: `image`, `document`, or `file`.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self.file_type.as_deref() {
            Some(t) if t.starts_with("image/") => "image",
            Some(t) if t.contains("pdf") || t.contains("document") => "document",
            _ => "file",
        }
    }
}
