use std::env;
use std::path::{Path, PathBuf};

/// Environment variable Claude Code sets to the project root for hooks
pub const PROJECT_DIR_ENV: &str = "CLAUDE_PROJECT_DIR";

/// Documentation directory relative to the project root
pub const DEFAULT_DOCS_DIR: &str = "docs";

/// Paths docwatch reads and writes within a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDir {
    root: PathBuf,
    docs_dir: PathBuf,
}

impl ProjectDir {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        let docs_dir = root.join(DEFAULT_DOCS_DIR);
        Self { root, docs_dir }
    }

    /// Resolve the project root from `CLAUDE_PROJECT_DIR`, falling back to the
    /// current directory (or `.` if even that is unavailable).
    pub fn from_env() -> Self {
        let root = env::var_os(PROJECT_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(root)
    }

    /// Use a different documentation directory. Relative paths are taken
    /// from the project root.
    pub fn with_docs_dir<P: AsRef<Path>>(mut self, docs_dir: P) -> Self {
        self.docs_dir = self.root.join(docs_dir);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn docs_dir(&self) -> &Path {
        &self.docs_dir
    }

    pub fn claude_dir(&self) -> PathBuf {
        self.root.join(".claude")
    }

    /// JSON Lines log of every summary that needed an update
    pub fn update_log_path(&self) -> PathBuf {
        self.claude_dir().join("logs").join("doc_updates.jsonl")
    }

    /// Optional project rule overrides
    pub fn rules_path(&self) -> PathBuf {
        self.claude_dir().join("doc-rules.toml")
    }
}
