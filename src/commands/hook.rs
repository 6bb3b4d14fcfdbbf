//! Hook command: classify the tool event on stdin

use std::io;
use std::path::PathBuf;

use crate::fs::ProjectDir;
use crate::hooks::{run, HookSettings};

/// Options for a hook run
#[derive(Debug, Clone, Default)]
pub struct HookOptions {
    /// Project root; `CLAUDE_PROJECT_DIR` or the current directory when unset
    pub project_dir: Option<PathBuf>,
    /// Documentation directory, relative to the project root
    pub docs_dir: Option<PathBuf>,
    pub no_log: bool,
}

impl HookOptions {
    pub fn settings(&self) -> HookSettings {
        let mut project = match &self.project_dir {
            Some(dir) => ProjectDir::new(dir),
            None => ProjectDir::from_env(),
        };
        if let Some(docs_dir) = &self.docs_dir {
            project = project.with_docs_dir(docs_dir);
        }

        let mut settings = HookSettings::for_project(project);
        settings.write_log = !self.no_log;
        settings
    }
}

/// Read one event from stdin and print the report to stdout.
///
/// Infallible: the hook is advisory and must never fail the tool call it observes.
pub fn execute(options: &HookOptions) {
    let settings = options.settings();
    let stdout = io::stdout();
    let report = run(io::stdin().lock(), stdout.lock(), &settings);

    if let Some(summary) = &report.summary {
        tracing::info!(
            needs_update = summary.needs_update,
            logged = report.logged,
            "docwatch hook finished"
        );
    }
}
