//! Report types produced from classification findings.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;
use std::path::Path;

use super::Findings;
use crate::rules::defaults::{API_ENDPOINTS_DOC, COMPONENTS_DOC, DATABASE_DOC, ENV_VARS_DOC};

/// Advisory strings keyed off the presence of specific doc files
const RECOMMENDATIONS: &[(&str, &str)] = &[
    (
        API_ENDPOINTS_DOC,
        "Update API documentation with new endpoints and their specifications",
    ),
    (
        COMPONENTS_DOC,
        "Document new React components and their props/usage",
    ),
    (
        DATABASE_DOC,
        "Update database schema documentation and ER diagrams",
    ),
    (
        ENV_VARS_DOC,
        "Document new environment variables and their purposes",
    ),
];

/// Follow-up work for one implicated doc file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocTask {
    /// The doc file doesn't exist yet
    Create(String),
    /// The doc file exists and should be reviewed
    Update(String),
}

impl DocTask {
    /// Decide CREATE vs UPDATE by checking `{docs_root}/{doc}` on disk
    pub fn for_doc(doc: &str, docs_root: &Path) -> Self {
        if docs_root.join(doc).exists() {
            DocTask::Update(doc.to_string())
        } else {
            DocTask::Create(doc.to_string())
        }
    }
}

impl fmt::Display for DocTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocTask::Create(doc) => write!(f, "CREATE: {doc} - New documentation file needed"),
            DocTask::Update(doc) => {
                write!(f, "UPDATE: {doc} - Review and update with recent changes")
            }
        }
    }
}

/// Summary of one classification, as written to the update log
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub needs_update: bool,
    pub docs_to_update: Vec<String>,
    pub changes_detected: Vec<String>,
    pub timestamp: DateTime<Local>,
    pub recommendations: Vec<String>,
    /// Present only when `needs_update` is true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<String>>,
    /// Paths touched by the event
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub touched: Vec<String>,
}

impl Summary {
    /// Build a summary, checking doc existence under `docs_root` when anything is implicated
    pub fn from_findings(findings: Findings, docs_root: &Path) -> Self {
        let needs_update = !findings.docs.is_empty();

        let recommendations = RECOMMENDATIONS
            .iter()
            .filter(|(doc, _)| findings.docs.contains(*doc))
            .map(|(_, text)| text.to_string())
            .collect();

        let tasks = needs_update.then(|| {
            findings
                .docs
                .iter()
                .map(|doc| DocTask::for_doc(doc, docs_root).to_string())
                .collect()
        });

        Self {
            needs_update,
            docs_to_update: findings.docs.into_iter().collect(),
            changes_detected: findings.changes,
            timestamp: Local::now(),
            recommendations,
            tasks,
            touched: findings.touched,
        }
    }

    /// Output for the hook caller, or `None` when there is nothing to report
    pub fn hook_output(&self) -> Option<HookOutput> {
        if !self.needs_update {
            return None;
        }

        Some(HookOutput {
            kind: "documentation_update",
            message: format!(
                "📚 Documentation updates recommended for {} files",
                self.docs_to_update.len()
            ),
            docs_to_update: self.docs_to_update.clone(),
            tasks: self.tasks.clone().unwrap_or_default(),
            changes: self.changes_detected.clone(),
        })
    }
}

/// JSON object printed to stdout for Claude
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookOutput {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub message: String,
    pub docs_to_update: Vec<String>,
    pub tasks: Vec<String>,
    pub changes: Vec<String>,
}
