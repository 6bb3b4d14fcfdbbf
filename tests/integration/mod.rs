//! Integration tests for docwatch
//!
//! Drive the hook end to end through `docwatch::hooks::run` against a
//! temporary project directory.

mod cli;
mod scenarios;

use docwatch::fs::ProjectDir;
use docwatch::hooks::{run, HookReport, HookSettings};
use serde_json::Value;
use tempfile::TempDir;

/// Run the hook for `input` in a fresh project, returning the report and stdout
pub fn run_in(temp_dir: &TempDir, input: &str) -> (HookReport, String) {
    let settings = HookSettings::for_project(ProjectDir::new(temp_dir.path()));
    let mut out = Vec::new();
    let report = run(input.as_bytes(), &mut out, &settings);
    (report, String::from_utf8(out).expect("hook output is UTF-8"))
}

/// Build a hook payload
pub fn payload(tool_name: &str, tool_input: Value) -> String {
    serde_json::json!({ "toolName": tool_name, "toolInput": tool_input }).to_string()
}
