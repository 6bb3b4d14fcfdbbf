//! Project rule overrides loaded from `.claude/doc-rules.toml`.
//!
//! ```toml
//! replace_defaults = false
//!
//! [[path_rules]]
//! pattern = "src/billing/.*"
//! docs = ["features/billing.md"]
//!
//! [[keyword_rules]]
//! keyword = "invoice"
//! docs = ["features/billing.md"]
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::{KeywordRule, PathRule, RuleSet, RulesError};

/// Parsed rules file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RulesFile {
    /// Use only the rules in this file instead of appending to the built-ins
    #[serde(default)]
    pub replace_defaults: bool,
    #[serde(default)]
    pub path_rules: Vec<PathRuleEntry>,
    #[serde(default)]
    pub keyword_rules: Vec<KeywordRuleEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PathRuleEntry {
    pub pattern: String,
    #[serde(default)]
    pub docs: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeywordRuleEntry {
    pub keyword: String,
    #[serde(default)]
    pub docs: Vec<String>,
}

impl RulesFile {
    pub fn parse(content: &str, path: &Path) -> Result<Self, RulesError> {
        toml::from_str(content).map_err(|source| RulesError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Compile this file's entries into a rule set
    pub fn compile(&self) -> Result<RuleSet, RulesError> {
        let path_rules = self
            .path_rules
            .iter()
            .map(|entry| PathRule::new(entry.pattern.as_str(), entry.docs.iter().cloned()))
            .collect::<Result<Vec<_>, _>>()?;

        let keyword_rules = self
            .keyword_rules
            .iter()
            .map(|entry| KeywordRule::new(&entry.keyword, entry.docs.iter().cloned()))
            .collect();

        Ok(RuleSet {
            path_rules,
            keyword_rules,
        })
    }

    /// Combine with the built-in tables
    pub fn into_rule_set(self) -> Result<RuleSet, RulesError> {
        let extra = self.compile()?;
        if self.replace_defaults {
            return Ok(extra);
        }

        let mut rules = RuleSet::builtin();
        rules.extend(extra);
        Ok(rules)
    }
}

/// Load the effective rule set for a project.
///
/// # Returns
/// * `Ok(RuleSet::builtin())` - no rules file at `rules_path`
/// * `Ok(rules)` - built-ins merged with (or replaced by) the file's rules
/// * `Err(_)` - the file exists but can't be read, parsed, or compiled
pub fn load_rules(rules_path: &Path) -> Result<RuleSet, RulesError> {
    if !rules_path.exists() {
        return Ok(RuleSet::builtin());
    }

    let content = fs::read_to_string(rules_path).map_err(|source| RulesError::Read {
        path: rules_path.display().to_string(),
        source,
    })?;

    RulesFile::parse(&content, rules_path)?.into_rule_set()
}
