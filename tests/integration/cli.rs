//! Runs the built `docwatch` binary: exit policy, env fallback, flag placement

use docwatch::fs::PROJECT_DIR_ENV;
use serde_json::{json, Value};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

use super::payload;

/// Spawn docwatch in `cwd`, feed `stdin`, and collect its output
fn docwatch(args: &[&str], cwd: &Path, project_env: Option<&str>, stdin: &str) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_docwatch"));
    command
        .args(args)
        .current_dir(cwd)
        .env_remove(PROJECT_DIR_ENV)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(value) = project_env {
        command.env(PROJECT_DIR_ENV, value);
    }

    let mut child = command.spawn().expect("Failed to spawn docwatch");
    if let Some(mut pipe) = child.stdin.take() {
        // The child may exit before reading (e.g. on an argument error)
        pipe.write_all(stdin.as_bytes()).ok();
    }
    child.wait_with_output().expect("Failed to wait for docwatch")
}

fn package_json_edit() -> String {
    payload("Edit", json!({ "file_path": "package.json" }))
}

fn log_path(root: &Path) -> std::path::PathBuf {
    root.join(".claude/logs/doc_updates.jsonl")
}

#[test]
fn test_malformed_stdin_is_silent_success() {
    let temp_dir = TempDir::new().unwrap();

    for input in ["", "not json", "{\"toolName\":", "[]"] {
        let output = docwatch(&[], temp_dir.path(), None, input);
        assert!(output.status.success(), "input {input:?} should exit 0");
        assert!(output.stdout.is_empty(), "input {input:?} should print nothing");
    }
    assert!(!log_path(temp_dir.path()).exists());
}

#[test]
fn test_unknown_flag_exits_zero() {
    let temp_dir = TempDir::new().unwrap();

    let output = docwatch(&["--bogus"], temp_dir.path(), None, &package_json_edit());

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_empty_project_env_falls_back_to_cwd() {
    let temp_dir = TempDir::new().unwrap();

    let output = docwatch(&[], temp_dir.path(), Some(""), &package_json_edit());

    assert!(output.status.success());
    let printed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        printed["docs_to_update"],
        json!(["deployment/dependencies.md", "development/setup.md"])
    );
    assert!(log_path(temp_dir.path()).exists());
}

#[test]
fn test_project_env_sets_root() {
    let project = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();

    let output = docwatch(
        &[],
        cwd.path(),
        project.path().to_str(),
        &package_json_edit(),
    );

    assert!(output.status.success());
    assert!(log_path(project.path()).exists());
    assert!(!log_path(cwd.path()).exists());
}

#[test]
fn test_flags_before_hook_subcommand_apply() {
    let project = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();
    let project_arg = project.path().to_str().unwrap();

    let output = docwatch(
        &["--project-dir", project_arg, "--no-log", "hook"],
        cwd.path(),
        None,
        &package_json_edit(),
    );

    assert!(output.status.success());
    assert!(!output.stdout.is_empty());
    assert!(!log_path(project.path()).exists());
    assert!(!log_path(cwd.path()).exists());
}

#[test]
fn test_flags_after_hook_subcommand_apply() {
    let project = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();
    let project_arg = project.path().to_str().unwrap();

    let output = docwatch(
        &["hook", "--project-dir", project_arg],
        cwd.path(),
        None,
        &package_json_edit(),
    );

    assert!(output.status.success());
    assert!(log_path(project.path()).exists());
    assert!(!log_path(cwd.path()).exists());
}

#[test]
fn test_rules_command_lists_tables() {
    let temp_dir = TempDir::new().unwrap();

    let output = docwatch(&["rules"], temp_dir.path(), None, "");

    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("app/api/.*"));
    assert!(text.contains("Task keyword rules"));
}

#[test]
fn test_template_command_unknown_name_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = docwatch(&["template", "nope"], temp_dir.path(), None, "");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
