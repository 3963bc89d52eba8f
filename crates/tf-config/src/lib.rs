//! # tf-config
//!
//! Layered configuration loading for TaskFlow using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TASKFLOW_*` prefix, `__` as separator)
//! 2. Project-level `.taskflow/config.toml`
//! 3. User-level `~/.config/taskflow/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TASKFLOW_IDENTITY__USER_ID` -> `identity.user_id`,
//! `TASKFLOW_GENERAL__UTC_OFFSET` -> `general.utc_offset`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use tf_config::TaskflowConfig;
//!
//! let config = TaskflowConfig::load_with_dotenv().expect("config");
//!
//! if config.identity.is_configured() {
//!     println!("acting as {}", config.identity.user_id);
//! }
//! ```

mod error;
mod general;
mod identity;
mod storage;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use identity::IdentityConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-project state directory.
pub const PROJECT_DIR: &str = ".taskflow";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TaskflowConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub identity: IdentityConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl TaskflowConfig {
    /// Load configuration from all sources, reading the project file relative
    /// to the current directory.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if any source fails to parse or extract.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment(Path::new(".")).extract().map_err(ConfigError::from)
    }

    /// Load configuration for the project rooted at `project_root`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if any source fails to parse or extract.
    pub fn load_for_project(project_root: &Path) -> Result<Self, ConfigError> {
        Self::figment(project_root)
            .extract()
            .map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if any source fails to parse or extract.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain for `project_root`.
    ///
    /// Public so tests can inspect the figment directly or layer extra providers.
    #[must_use]
    pub fn figment(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = Self::project_config_path(project_root);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("TASKFLOW_").split("__"))
    }

    /// Path of the project-level config file under `project_root`.
    #[must_use]
    pub fn project_config_path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_DIR).join("config.toml")
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("taskflow").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) looking for a `.env`
    /// file, then falls back to the current directory. Silently does nothing if
    /// no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = TaskflowConfig::default();
        assert!(!config.identity.is_configured());
        assert_eq!(config.general.default_limit, 20);
        assert_eq!(config.general.default_deadline_days, 7);
        assert_eq!(config.storage.bucket, "task-attachments");
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|jail| {
            let config: TaskflowConfig = TaskflowConfig::figment(jail.directory()).extract()?;
            assert!(!config.identity.is_configured());
            assert_eq!(config.general.default_limit, 20);
            Ok(())
        });
    }

    #[test]
    fn project_config_path_is_under_project_dir() {
        let path = TaskflowConfig::project_config_path(Path::new("/srv/team"));
        assert_eq!(path, PathBuf::from("/srv/team/.taskflow/config.toml"));
    }
}
