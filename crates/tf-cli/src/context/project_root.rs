use std::path::{Path, PathBuf};

use anyhow::Context;
use tf_config::PROJECT_DIR;

/// Walk upwards from `start` until a `.taskflow` directory is found.
#[must_use]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(PROJECT_DIR).is_dir() {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Project root from `--project`, or discovered from the current directory.
///
/// `--project` may name the root itself or its `.taskflow` directory.
pub fn resolve_project_root(project_override: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(path) = project_override {
        let explicit = PathBuf::from(path);

        if explicit.file_name().and_then(|name| name.to_str()) == Some(PROJECT_DIR) {
            return explicit
                .parent()
                .map(Path::to_path_buf)
                .context("invalid --project path: '.taskflow' directory has no parent");
        }
        if explicit.join(PROJECT_DIR).is_dir() {
            return Ok(explicit);
        }
        anyhow::bail!(
            "invalid --project '{}': no {PROJECT_DIR} directory. Run 'tfl init' there first.",
            explicit.display()
        );
    }

    let start = std::env::current_dir().context("failed to read current directory")?;
    find_project_root(&start)
        .context("not a TaskFlow project (no .taskflow directory found). Run 'tfl init' first.")
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn finds_project_root_in_parent_directory() {
        let temp = TempDir::new().expect("tempdir should create");
        std::fs::create_dir(temp.path().join(PROJECT_DIR)).expect(".taskflow should create");
        std::fs::create_dir_all(temp.path().join("a/b")).expect("nested dirs should create");

        let found = find_project_root(&temp.path().join("a/b"));
        assert_eq!(found.as_deref(), Some(temp.path()));
    }

    #[test]
    fn returns_none_when_not_found() {
        let temp = TempDir::new().expect("tempdir should create");
        assert!(find_project_root(temp.path()).is_none());
    }

    #[test]
    fn override_accepts_project_dir_itself() {
        let temp = TempDir::new().expect("tempdir should create");
        let dir = temp.path().join(PROJECT_DIR);
        std::fs::create_dir(&dir).expect(".taskflow should create");

        let root = resolve_project_root(dir.to_str()).expect("should resolve");
        assert_eq!(root, temp.path());
        let root = resolve_project_root(temp.path().to_str()).expect("should resolve");
        assert_eq!(root, temp.path());
    }

    #[test]
    fn override_without_project_dir_fails() {
        let temp = TempDir::new().expect("tempdir should create");
        let err = resolve_project_root(temp.path().to_str()).expect_err("should fail");
        assert!(err.to_string().contains("tfl init"));
    }
}
