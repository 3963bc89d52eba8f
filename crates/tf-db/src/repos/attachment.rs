//! Attachment repository: metadata rows plus blobs in the object store.

use chrono::Utc;

use tf_core::entities::TaskAttachment;
use tf_core::ids::PREFIX_ATTACHMENT;
use tf_core::policy::Viewer;

use crate::blob::{AttachmentStore, guess_mime};
use crate::error::DatabaseError;
use crate::helpers::{collect_rows, fmt_ts, get_opt_string, parse_datetime};
use crate::service::TaskflowService;

const SELECT_COLS: &str = "id, task_id, file_name, file_url, file_type, uploaded_at";

fn row_to_attachment(row: &libsql::Row) -> Result<TaskAttachment, DatabaseError> {
    Ok(TaskAttachment {
        id: row.get(0)?,
        task_id: row.get(1)?,
        file_name: row.get(2)?,
        file_url: row.get(3)?,
        file_type: get_opt_string(row, 4)?,
        uploaded_at: parse_datetime("uploaded_at", &row.get::<String>(5)?)?,
    })
}

impl TaskflowService {
    /// Upload `bytes` as `file_name` on a task. Owner or admin only.
    pub async fn add_attachment(
        &self,
        viewer: &Viewer,
        task_id: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<TaskAttachment, DatabaseError> {
        let file_name = file_name.trim();
        if file_name.is_empty() {
            return Err(DatabaseError::InvalidState("attachment needs a file name".into()));
        }
        self.ensure_can_modify(viewer, task_id).await?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_ATTACHMENT).await?;
        let suffix = id.rsplit('-').next().unwrap_or(id.as_str());
        let key = AttachmentStore::object_key(task_id, file_name, suffix, now);
        let file_type = guess_mime(file_name);
        let file_url = self.blobs().put(&key, bytes).await?;

        let inserted = self
            .db()
            .conn()
            .execute(
                "INSERT INTO task_attachments \
                 (id, task_id, file_name, file_url, file_type, storage_key, uploaded_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                libsql::params![
                    id.as_str(),
                    task_id,
                    file_name,
                    file_url.as_str(),
                    file_type.as_deref(),
                    key.as_str(),
                    fmt_ts(&now)
                ],
            )
            .await;
        if let Err(error) = inserted {
            if let Err(cleanup) = self.blobs().delete(&key).await {
                tracing::warn!(%key, error = %cleanup, "orphaned attachment blob");
            }
            return Err(error.into());
        }

        tracing::debug!(attachment_id = %id, %task_id, %file_name, "attachment added");
        self.get_attachment(&id).await
    }

    pub async fn get_attachment(&self, id: &str) -> Result<TaskAttachment, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM task_attachments WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_attachment(&row)
    }

    /// Attachments on a task, newest first.
    pub async fn list_attachments(&self, task_id: &str) -> Result<Vec<TaskAttachment>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM task_attachments WHERE task_id = ?1 \
                     ORDER BY uploaded_at DESC, rowid DESC"
                ),
                [task_id],
            )
            .await?;
        collect_rows(rows, row_to_attachment).await
    }

    /// Attachment metadata together with its bytes.
    pub async fn read_attachment(
        &self,
        id: &str,
    ) -> Result<(TaskAttachment, Vec<u8>), DatabaseError> {
        let attachment = self.get_attachment(id).await?;
        let mut rows = self
            .db()
            .conn()
            .query("SELECT storage_key FROM task_attachments WHERE id = ?1", [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let key: String = row.get(0)?;
        let bytes = self.blobs().get(&key).await?;
        Ok((attachment, bytes))
    }

    /// Blob keys for every attachment on a task.
    pub(crate) async fn attachment_keys(&self, task_id: &str) -> Result<Vec<String>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                "SELECT storage_key FROM task_attachments WHERE task_id = ?1",
                [task_id],
            )
            .await?;
        collect_rows(rows, |row| Ok(row.get::<String>(0)?)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repos::task::NewTask;
    use crate::test_support::helpers::{add_user, test_service};
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;
    use tf_core::enums::Role;

    async fn setup() -> (TaskflowService, Viewer, String) {
        let svc = test_service().await;
        let owner = add_user(&svc, "Ana", Role::Employee).await;
        let due = Utc.with_ymd_and_hms(2024, 1, 12, 17, 0, 0).unwrap();
        let task = svc.create_task(&owner, NewTask::new("Design", due)).await.unwrap();
        (svc, owner, task.id)
    }

    #[tokio::test]
    async fn add_and_read_attachment() {
        let (svc, owner, task_id) = setup().await;

        let att = svc
            .add_attachment(&owner, &task_id, "mockup.png", vec![0x89, b'P', b'N', b'G'])
            .await
            .unwrap();
        assert!(att.id.starts_with("att-"));
        assert_eq!(att.file_name, "mockup.png");
        assert_eq!(att.file_type.as_deref(), Some("image/png"));
        assert_eq!(att.kind(), "image");
        assert!(att.file_url.starts_with("memory:///task-attachments/"), "{}", att.file_url);
        assert!(att.file_url.ends_with(".png"));

        let (meta, bytes) = svc.read_attachment(&att.id).await.unwrap();
        assert_eq!(meta, att);
        assert_eq!(bytes, vec![0x89, b'P', b'N', b'G']);
    }

    #[tokio::test]
    async fn unknown_extension_has_no_type() {
        let (svc, owner, task_id) = setup().await;
        let att = svc
            .add_attachment(&owner, &task_id, "notes", b"plain".to_vec())
            .await
            .unwrap();
        assert_eq!(att.file_type, None);
        assert_eq!(att.kind(), "file");
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let (svc, owner, task_id) = setup().await;
        svc.add_attachment(&owner, &task_id, "first.pdf", vec![1]).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        svc.add_attachment(&owner, &task_id, "second.pdf", vec![2]).await.unwrap();

        let names: Vec<String> = svc
            .list_attachments(&task_id)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.file_name)
            .collect();
        assert_eq!(names, vec!["second.pdf", "first.pdf"]);
    }

    #[tokio::test]
    async fn other_user_cannot_attach() {
        let (svc, _owner, task_id) = setup().await;
        let other = add_user(&svc, "Eli", Role::Manager).await;

        let result = svc.add_attachment(&other, &task_id, "x.txt", vec![1]).await;
        assert!(matches!(result, Err(DatabaseError::Forbidden(_))));
        assert!(svc.list_attachments(&task_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn deleting_task_removes_blobs() {
        let (svc, owner, task_id) = setup().await;
        let att = svc
            .add_attachment(&owner, &task_id, "brief.docx", vec![7; 16])
            .await
            .unwrap();
        let key = attachment_key(&svc, &att.id).await;

        svc.delete_task(&owner, &task_id).await.unwrap();

        assert!(matches!(svc.get_attachment(&att.id).await, Err(DatabaseError::NoResult)));
        assert!(svc.blobs().get(&key).await.is_err());
    }

    #[test]
    fn key_suffix_comes_from_id() {
        let at = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap() + Duration::milliseconds(7);
        let key = AttachmentStore::object_key("tsk-1", "a.txt", "0badc0de", at);
        assert_eq!(key, "tsk-1/1704844800007-0badc0de.txt");
    }

    async fn attachment_key(svc: &TaskflowService, id: &str) -> String {
        let mut rows = svc
            .db()
            .conn()
            .query("SELECT storage_key FROM task_attachments WHERE id = ?1", [id])
            .await
            .unwrap();
        rows.next().await.unwrap().unwrap().get(0).unwrap()
    }
}
