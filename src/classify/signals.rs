//! Content signals: markers in newly written text that imply a documentation change.
//!
//! Each scan is independent and only ever adds to the [`Findings`] it is given.

use regex::Regex;
use std::sync::LazyLock;

use super::Findings;
use crate::rules::defaults::{API_ENDPOINTS_DOC, COMPONENTS_DOC, DATABASE_DOC, ENV_VARS_DOC};

static API_ROUTE_PATH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(app|pages)/api/").expect("Invalid regex"));
static ROUTE_HANDLER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"export\s+(async\s+)?function\s+(GET|POST|PUT|DELETE|PATCH)")
        .expect("Invalid regex")
});
static EXPORTED_FUNCTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"export\s+(?:default\s+)?function\s+(\w+)").expect("Invalid regex"));
static SCHEMA_STATEMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(CREATE|ALTER)\s+TABLE").expect("Invalid regex"));
static ENV_LOOKUP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"process\.env\.(\w+)").expect("Invalid regex"));

/// Run every content scan against `content` written to `path`
pub fn scan_content(path: &str, content: &str, findings: &mut Findings) {
    scan_api_route(path, content, findings);
    scan_component(path, content, findings);
    scan_schema(content, findings);
    scan_env_vars(content, findings);
}

/// Exported HTTP method handler inside an `app/api/` or `pages/api/` route
pub fn scan_api_route(path: &str, content: &str, findings: &mut Findings) {
    if API_ROUTE_PATH_PATTERN.is_match(path) && ROUTE_HANDLER_PATTERN.is_match(content) {
        findings.add_doc(API_ENDPOINTS_DOC);
        findings.record(format!("New API endpoint in {path}"));
    }
}

/// Exported function declaration in a `components/` file
pub fn scan_component(path: &str, content: &str, findings: &mut Findings) {
    if !path.contains("components/") {
        return;
    }

    let Some(captures) = EXPORTED_FUNCTION_PATTERN.captures(content) else {
        return;
    };

    findings.add_doc(COMPONENTS_DOC);
    if let Some(name) = captures.get(1) {
        findings.record(format!("New component: {}", name.as_str()));
    }
}

/// `CREATE TABLE` / `ALTER TABLE`, recorded once however many statements appear
pub fn scan_schema(content: &str, findings: &mut Findings) {
    if SCHEMA_STATEMENT_PATTERN.is_match(content) {
        findings.add_doc(DATABASE_DOC);
        findings.record("Database schema change detected");
    }
}

/// `process.env.NAME` lookups, one record per occurrence in order
pub fn scan_env_vars(content: &str, findings: &mut Findings) {
    let mut found = false;

    for captures in ENV_LOOKUP_PATTERN.captures_iter(content) {
        found = true;
        if let Some(name) = captures.get(1) {
            findings.record(format!("New environment variable: {}", name.as_str()));
        }
    }

    if found {
        findings.add_doc(ENV_VARS_DOC);
    }
}
