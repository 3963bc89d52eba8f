use std::path::Path;

use anyhow::Context;
use tf_config::TaskflowConfig;

/// Load `.env` and then the layered config for `project_root`.
pub fn load_config(project_root: &Path) -> anyhow::Result<TaskflowConfig> {
    load_project_dotenv(project_root)?;
    TaskflowConfig::load_for_project(project_root).context("failed to load TaskFlow configuration")
}

/// Prefer the project's `.env`; fall back to the usual dotenv lookup from the
/// current directory. A missing file is not an error.
fn load_project_dotenv(project_root: &Path) -> anyhow::Result<()> {
    let env_path = project_root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        return Ok(());
    }

    dotenvy::dotenv().ok();
    Ok(())
}
