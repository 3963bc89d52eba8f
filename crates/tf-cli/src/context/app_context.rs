use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, FixedOffset};
use tf_config::{PROJECT_DIR, TaskflowConfig};
use tf_core::clock::{Clock, SystemClock};
use tf_core::policy::Viewer;
use tf_db::service::TaskflowService;

/// Database file name inside `.taskflow/`.
pub const DB_FILE: &str = "taskflow.db";

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: TaskflowService,
    pub config: TaskflowConfig,
    pub clock: SystemClock,
    pub project_root: PathBuf,
    acting_as: Option<String>,
}

impl AppContext {
    /// Open the project database and blob store under `project_root`.
    pub async fn init(
        project_root: PathBuf,
        config: TaskflowConfig,
        acting_as: Option<String>,
    ) -> anyhow::Result<Self> {
        let project_dir = project_root.join(PROJECT_DIR);
        let db_path = project_dir.join(DB_FILE);

        let service = TaskflowService::new_local(
            &db_path.to_string_lossy(),
            &project_dir,
            &config.storage,
        )
        .await
        .context("failed to initialize tf-db service")?;
        let clock = SystemClock::new(config.general.offset()?);

        Ok(Self {
            service,
            config,
            clock,
            project_root,
            acting_as,
        })
    }

    /// Current time in the configured (or system) offset.
    #[must_use]
    pub fn now(&self) -> DateTime<FixedOffset> {
        self.clock.now()
    }

    /// The acting user: `--as`, else `identity.user_id`, with the role read from the database.
    pub async fn viewer(&self) -> anyhow::Result<Viewer> {
        let user_id = match self.acting_as.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => self
                .config
                .identity
                .require_user_id()
                .context("no acting user; pass --as USER_ID or set identity.user_id")?
                .to_string(),
        };
        let viewer = self
            .service
            .viewer_for(&user_id)
            .await
            .with_context(|| format!("cannot act as {user_id}"))?;
        tracing::debug!(user_id = %viewer.user_id, role = viewer.role.as_str(), "acting user resolved");
        Ok(viewer)
    }
}
