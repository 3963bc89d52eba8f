//! Shared test utilities for tf-db unit tests.

pub(crate) mod helpers {
    use tf_core::enums::Role;
    use tf_core::policy::Viewer;

    use crate::TaskflowDb;
    use crate::blob::AttachmentStore;
    use crate::service::TaskflowService;

    /// In-memory database with an in-memory blob store.
    pub async fn test_service() -> TaskflowService {
        let db = TaskflowDb::open_local(":memory:").await.unwrap();
        TaskflowService::from_parts(db, AttachmentStore::in_memory("task-attachments"))
    }

    /// Create a user and return them as a viewer.
    pub async fn add_user(svc: &TaskflowService, name: &str, role: Role) -> Viewer {
        let profile = svc.create_user(name, role).await.unwrap();
        Viewer::new(profile.user_id, role)
    }
}
