//! Rules command: show the effective rule tables for a project

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::fs::ProjectDir;
use crate::rules::{load_rules, RuleSet};

/// Print the rule tables that apply to `project_dir` (or `CLAUDE_PROJECT_DIR`)
pub fn list(project_dir: Option<PathBuf>) -> Result<()> {
    let project = match project_dir {
        Some(dir) => ProjectDir::new(dir),
        None => ProjectDir::from_env(),
    };
    write_rules(&project, &mut io::stdout().lock())
}

/// Write the rules listing for `project` to `out`
pub fn write_rules<W: Write>(project: &ProjectDir, out: &mut W) -> Result<()> {
    let rules_path = project.rules_path();

    let rules = load_rules(&rules_path)
        .with_context(|| format!("Failed to load rules from {}", rules_path.display()))?;

    if rules_path.exists() {
        writeln!(out, "Rules file: {}\n", rules_path.display())?;
    } else {
        writeln!(
            out,
            "Rules file: {} (not present, using built-in rules)\n",
            rules_path.display()
        )?;
    }
    write!(out, "{}", format_rules(&rules))?;
    out.flush()?;

    Ok(())
}

/// Render both tables as an indented listing
pub fn format_rules(rules: &RuleSet) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} ({})\n",
        "Path rules".bold(),
        rules.path_rules.len()
    ));
    for rule in &rules.path_rules {
        out.push_str(&format!("  {}\n", rule.pattern.cyan()));
        for doc in &rule.docs {
            out.push_str(&format!("    -> {doc}\n"));
        }
    }

    out.push('\n');
    out.push_str(&format!(
        "{} ({})\n",
        "Task keyword rules".bold(),
        rules.keyword_rules.len()
    ));
    for rule in &rules.keyword_rules {
        out.push_str(&format!(
            "  {} -> {}\n",
            rule.keyword.yellow(),
            rule.docs.join(", ")
        ));
    }

    out
}
