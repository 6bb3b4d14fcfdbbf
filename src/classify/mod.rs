//! Classification of tool events into stale-documentation findings.
//!
//! [`analyze`] is a pure function of the event and rule tables. It threads a
//! local [`Findings`] accumulator through the path rules, content signals and
//! task keywords. [`Classifier::classify`] adds the one piece of external
//! state, whether each implicated doc file exists yet, and produces a
//! [`Summary`].

pub mod signals;
pub mod summary;

pub use summary::{DocTask, HookOutput, Summary};

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::hooks::{TodoItem, ToolEvent};
use crate::rules::RuleSet;

/// Accumulated results for a single event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    /// Implicated documentation files, deduplicated
    pub docs: BTreeSet<String>,
    /// Human-readable change records, in detection order (not deduplicated)
    pub changes: Vec<String>,
    /// Paths the event touched
    pub touched: Vec<String>,
}

impl Findings {
    pub fn add_doc(&mut self, doc: impl Into<String>) {
        self.docs.insert(doc.into());
    }

    pub fn add_docs<I, S>(&mut self, docs: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.docs.extend(docs.into_iter().map(Into::into));
    }

    pub fn record(&mut self, change: impl Into<String>) {
        self.changes.push(change.into());
    }

    /// True when nothing was implicated or recorded
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty() && self.changes.is_empty()
    }
}

/// Classify one event against the rule tables.
///
/// `project_root` is only used to turn absolute file paths into
/// project-relative ones before matching.
pub fn analyze(event: &ToolEvent, rules: &RuleSet, project_root: &Path) -> Findings {
    let mut findings = Findings::default();

    match event {
        ToolEvent::FileEdit {
            file_path: Some(file_path),
            new_content,
            ..
        } => {
            findings.touched.push(file_path.clone());

            let rel_path = relative_path(file_path, project_root);
            findings.add_docs(rules.docs_for_path(&rel_path));

            if let Some(content) = new_content {
                signals::scan_content(&rel_path, content, &mut findings);
            }
        }
        ToolEvent::NotebookEdit {
            notebook_path: Some(notebook_path),
        } => {
            findings.touched.push(notebook_path.clone());
        }
        ToolEvent::TodoWrite { todos } => {
            for todo in todos.iter().filter(|t| t.is_completed()) {
                check_task(todo, rules, &mut findings);
            }
        }
        _ => {}
    }

    findings
}

/// Each matching keyword contributes its docs and its own record
fn check_task(todo: &TodoItem, rules: &RuleSet, findings: &mut Findings) {
    for rule in rules.rules_for_task(&todo.content) {
        findings.add_docs(rule.docs.iter().cloned());
        findings.record(format!("Task completed: {}", todo.content));
    }
}

/// Strip `project_root` from an absolute path; other paths are returned as given
pub fn relative_path(file_path: &str, project_root: &Path) -> String {
    let path = Path::new(file_path);
    if path.is_absolute() {
        if let Ok(rel) = path.strip_prefix(project_root) {
            return rel.to_string_lossy().to_string();
        }
    }
    file_path.to_string()
}

/// Classifier bound to a rule set and a documentation root
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: RuleSet,
    project_root: PathBuf,
    docs_root: PathBuf,
}

impl Classifier {
    pub fn new(
        rules: RuleSet,
        project_root: impl Into<PathBuf>,
        docs_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            rules,
            project_root: project_root.into(),
            docs_root: docs_root.into(),
        }
    }

    /// Analyze an event without touching the filesystem
    pub fn analyze(&self, event: &ToolEvent) -> Findings {
        analyze(event, &self.rules, &self.project_root)
    }

    /// Analyze an event and decide CREATE vs UPDATE for each implicated doc
    pub fn classify(&self, event: &ToolEvent) -> Summary {
        Summary::from_findings(self.analyze(event), &self.docs_root)
    }
}
