//! Hook entry point: stdin in, advisory JSON out.
//!
//! Nothing here is allowed to fail the caller. Unreadable input means
//! "nothing to do", and output or log failures are reported as warnings.

use std::io::{Read, Write};

use super::ToolEvent;
use crate::classify::{Classifier, Summary};
use crate::fs::{ProjectDir, UpdateLog};
use crate::rules::{load_rules, RuleSet};

/// Settings for one hook invocation
#[derive(Debug, Clone)]
pub struct HookSettings {
    pub project: ProjectDir,
    pub rules: RuleSet,
    /// Append summaries that need an update to the project's update log
    pub write_log: bool,
}

impl HookSettings {
    /// Settings for `project`, loading its rules file if present.
    ///
    /// A broken rules file falls back to the built-in tables with a warning.
    pub fn for_project(project: ProjectDir) -> Self {
        let rules_path = project.rules_path();
        let rules = load_rules(&rules_path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring rules file {}: {e}", rules_path.display());
            RuleSet::builtin()
        });

        Self {
            project,
            rules,
            write_log: true,
        }
    }
}

/// What a hook run did
#[derive(Debug, Clone, Default)]
pub struct HookReport {
    /// `None` when the input was empty or malformed
    pub summary: Option<Summary>,
    /// Whether a summary line was appended to the update log
    pub logged: bool,
    /// Whether JSON was written to the output stream
    pub printed: bool,
}

/// Run the hook against one event read from `input`
pub fn run<R: Read, W: Write>(mut input: R, mut output: W, settings: &HookSettings) -> HookReport {
    let mut raw = String::new();
    if let Err(e) = input.read_to_string(&mut raw) {
        tracing::debug!("Failed to read hook input: {e}");
        return HookReport::default();
    }

    let Some(event) = ToolEvent::parse(&raw) else {
        tracing::debug!("Hook input is empty or not a JSON object; nothing to do");
        return HookReport::default();
    };

    let classifier = Classifier::new(
        settings.rules.clone(),
        settings.project.root(),
        settings.project.docs_dir(),
    );
    let summary = classifier.classify(&event);
    tracing::debug!(
        docs = summary.docs_to_update.len(),
        changes = summary.changes_detected.len(),
        "Classified tool event"
    );

    let mut report = HookReport::default();

    if let Some(hook_output) = summary.hook_output() {
        if settings.write_log {
            let log = UpdateLog::new(settings.project.update_log_path());
            match log.append(&summary) {
                Ok(()) => report.logged = true,
                Err(e) => tracing::warn!("Failed to write documentation update log: {e:#}"),
            }
        }

        match serde_json::to_string_pretty(&hook_output) {
            Ok(json) => match writeln!(output, "{json}") {
                Ok(()) => report.printed = true,
                Err(e) => tracing::warn!("Failed to write hook output: {e}"),
            },
            Err(e) => tracing::warn!("Failed to serialize hook output: {e}"),
        }
    }

    report.summary = Some(summary);
    report
}
