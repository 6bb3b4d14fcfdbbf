//! Rule tables mapping changed paths and completed tasks to documentation files.
//!
//! Two tables drive classification:
//! - **Path rules**: regex over the project-relative path of an edited file.
//!   Every matching rule contributes its docs; order is preserved but the
//!   result is a union.
//! - **Keyword rules**: lowercase substrings searched for in the text of
//!   completed todos.
//!
//! The built-in tables live in [`defaults`]. A project can extend or replace
//! them with `.claude/doc-rules.toml` (see [`config`]).

pub mod config;
pub mod defaults;

pub use config::{load_rules, RulesFile};

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;
use thiserror::Error;

use defaults::{DEFAULT_KEYWORD_RULES, DEFAULT_PATH_RULES};

/// Errors raised while building a rule set
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("invalid path pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("failed to read rules file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse rules file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// A path pattern and the docs it implicates
#[derive(Debug, Clone)]
pub struct PathRule {
    /// Pattern as written, before anchoring
    pub pattern: String,
    /// Documentation files implicated on match
    pub docs: Vec<String>,
    regex: Regex,
}

impl PathRule {
    /// Compile a path rule. The match is anchored at the start of the path
    /// but not at the end, so `app/api/.*` matches `app/api/users/route.ts`
    /// and `package\.json` matches `package.json.bak`.
    pub fn new<S: Into<String>>(
        pattern: impl Into<String>,
        docs: impl IntoIterator<Item = S>,
    ) -> Result<Self, RulesError> {
        let pattern = pattern.into();
        let regex =
            Regex::new(&format!("^(?:{pattern})")).map_err(|source| RulesError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;

        Ok(Self {
            pattern,
            docs: docs.into_iter().map(Into::into).collect(),
            regex,
        })
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

/// A task keyword and the docs it implicates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    /// Lowercase substring to look for
    pub keyword: String,
    pub docs: Vec<String>,
}

impl KeywordRule {
    pub fn new<S: Into<String>>(keyword: &str, docs: impl IntoIterator<Item = S>) -> Self {
        Self {
            keyword: keyword.to_lowercase(),
            docs: docs.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `lowered` (already lowercased task text) contains this keyword
    pub fn matches(&self, lowered: &str) -> bool {
        lowered.contains(&self.keyword)
    }
}

static BUILTIN_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    let path_rules = DEFAULT_PATH_RULES
        .iter()
        .map(|(pattern, docs)| PathRule::new(*pattern, docs.iter().copied()))
        .collect::<Result<Vec<_>, _>>()
        .expect("Invalid built-in path rule");

    let keyword_rules = DEFAULT_KEYWORD_RULES
        .iter()
        .map(|(keyword, docs)| KeywordRule::new(keyword, docs.iter().copied()))
        .collect();

    RuleSet {
        path_rules,
        keyword_rules,
    }
});

/// The complete set of rules used for one classification
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    pub path_rules: Vec<PathRule>,
    pub keyword_rules: Vec<KeywordRule>,
}

impl RuleSet {
    /// The built-in tables
    pub fn builtin() -> Self {
        BUILTIN_RULES.clone()
    }

    /// Union of docs for every path rule matching `path`
    pub fn docs_for_path(&self, path: &str) -> BTreeSet<String> {
        self.path_rules
            .iter()
            .filter(|rule| rule.is_match(path))
            .flat_map(|rule| rule.docs.iter().cloned())
            .collect()
    }

    /// Keyword rules whose keyword occurs in `task` (case-insensitive), in table order
    pub fn rules_for_task(&self, task: &str) -> Vec<&KeywordRule> {
        let lowered = task.to_lowercase();
        self.keyword_rules
            .iter()
            .filter(|rule| rule.matches(&lowered))
            .collect()
    }

    /// Append another rule set's rules after this one's
    pub fn extend(&mut self, other: RuleSet) {
        self.path_rules.extend(other.path_rules);
        self.keyword_rules.extend(other.keyword_rules);
    }
}
