use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use serde_json::Value;

fn tfl(project: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tfl"))
        .arg("--project")
        .arg(project)
        .args(args)
        .env("XDG_CONFIG_HOME", project.join("xdg"))
        .env_remove("TASKFLOW_LOG")
        .env_remove("TASKFLOW_IDENTITY__USER_ID")
        .output()
        .expect("tfl should run")
}

fn json(project: &Path, args: &[&str]) -> Value {
    let out = tfl(project, args);
    assert!(
        out.status.success(),
        "tfl {args:?} failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    serde_json::from_slice(&out.stdout).expect("stdout should be JSON")
}

fn add_user(project: &Path, name: &str, role: &str) -> String {
    let user = json(project, &["user", "add", "--name", name, "--role", role]);
    user["user_id"].as_str().expect("user_id").to_string()
}

#[test]
fn task_lifecycle_through_the_cli() {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path();
    let root_str = root.to_str().expect("utf-8 path");

    let init = Command::new(env!("CARGO_BIN_EXE_tfl"))
        .args(["init", root_str, "--utc-offset", "+00:00"])
        .env("XDG_CONFIG_HOME", root.join("xdg"))
        .output()
        .expect("init should run");
    assert!(init.status.success(), "{}", String::from_utf8_lossy(&init.stderr));

    let admin = add_user(root, "Ana Admin", "admin");
    let owner = add_user(root, "Bo Owner", "employee");
    let other = add_user(root, "Cy Other", "employee");

    let created = json(
        root,
        &["--as", &owner, "task", "create", "--title", "Ship report", "--deadline", "2000-01-01"],
    );
    let task_id = created["id"].as_str().expect("task id").to_string();
    assert_eq!(created["label"], "Overdue");
    assert_eq!(created["owner_name"], "Bo Owner");
    assert_eq!(created["can_edit"], true);

    let overdue = json(root, &["--as", &other, "task", "list", "--overdue"]);
    assert_eq!(overdue.as_array().map(Vec::len), Some(1));
    assert_eq!(overdue[0]["is_own"], false);
    assert_eq!(overdue[0]["can_edit"], false);

    let denied = tfl(root, &["--as", &other, "task", "delete", &task_id]);
    assert!(!denied.status.success());
    assert!(String::from_utf8_lossy(&denied.stderr).contains("tfl error"));

    json(root, &["--as", &other, "comment", "add", &task_id, "  looks late  "]);
    let completed = json(root, &["--as", &owner, "task", "complete", &task_id]);
    assert_eq!(completed["label"], "Completed Late");

    let detail = json(root, &["--as", &owner, "task", "get", &task_id]);
    assert_eq!(detail["comments"][0]["content"], "looks late");
    assert_eq!(detail["comments"][0]["author_name"], "Cy Other");

    let stats = json(root, &["stats"]);
    assert_eq!(stats["summary"]["total"], 1);
    assert_eq!(stats["summary"]["completed_late"], 1);
    assert_eq!(stats["completion_percent"], 100);

    let deleted = json(root, &["--as", &admin, "task", "delete", &task_id]);
    assert_eq!(deleted["deleted"], true);
    let remaining = json(root, &["--as", &admin, "task", "list"]);
    assert_eq!(remaining, Value::Array(Vec::new()));
}

#[test]
fn only_admins_change_roles() {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path();
    let init = Command::new(env!("CARGO_BIN_EXE_tfl"))
        .arg("init")
        .arg(root)
        .env("XDG_CONFIG_HOME", root.join("xdg"))
        .output()
        .expect("init should run");
    assert!(init.status.success());

    let admin = add_user(root, "Ana Admin", "admin");
    let worker = add_user(root, "Bo Worker", "employee");

    let refused = tfl(root, &["--as", &worker, "user", "role", &worker, "admin"]);
    assert!(!refused.status.success());

    let promoted = json(root, &["--as", &admin, "user", "role", &worker, "manager"]);
    assert_eq!(promoted["role"], "manager");
    let me = json(root, &["--as", &worker, "whoami"]);
    assert_eq!(me["role_label"], "Manager");
}
