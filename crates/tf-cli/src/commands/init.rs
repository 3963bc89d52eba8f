use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use tf_config::{PROJECT_DIR, TaskflowConfig};
use tf_core::clock::parse_utc_offset;
use tf_db::service::TaskflowService;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::context::DB_FILE;
use crate::output::output;

#[derive(Debug, Serialize)]
struct InitResponse {
    initialized: bool,
    /// False when `.taskflow/config.toml` was already there and left untouched.
    created_config: bool,
    project_root: String,
    config_path: String,
    db_path: String,
}

/// Handle `tfl init`.
pub async fn handle(args: &InitArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let root = match args.path.as_deref() {
        Some(path) => PathBuf::from(path),
        None => std::env::current_dir().context("failed to read current directory")?,
    };
    let response = init_project(&root, args.utc_offset.as_deref()).await?;
    output(&response, flags.format)
}

async fn init_project(root: &Path, utc_offset: Option<&str>) -> anyhow::Result<InitResponse> {
    let mut config = TaskflowConfig::default();
    if let Some(raw) = utc_offset {
        parse_utc_offset(raw)?;
        config.general.utc_offset = raw.trim().to_string();
    }

    let project_dir = root.join(PROJECT_DIR);
    std::fs::create_dir_all(&project_dir)
        .with_context(|| format!("failed to create {}", project_dir.display()))?;

    let config_path = TaskflowConfig::project_config_path(root);
    let created_config = !config_path.exists();
    if created_config {
        let body = toml::to_string_pretty(&config).context("failed to serialize default config")?;
        std::fs::write(&config_path, body)
            .with_context(|| format!("failed to write {}", config_path.display()))?;
        tracing::info!(path = %config_path.display(), "wrote project config");
    } else {
        tracing::warn!(path = %config_path.display(), "project config already exists; leaving it");
    }

    let config = TaskflowConfig::load_for_project(root)?;
    let db_path = project_dir.join(DB_FILE);
    TaskflowService::new_local(&db_path.to_string_lossy(), &project_dir, &config.storage)
        .await
        .context("failed to create TaskFlow database")?;

    Ok(InitResponse {
        initialized: true,
        created_config,
        project_root: root.display().to_string(),
        config_path: config_path.display().to_string(),
        db_path: db_path.display().to_string(),
    })
}
