use anyhow::{Context, Result};
use fs2::FileExt;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only JSON Lines log
#[derive(Debug, Clone)]
pub struct UpdateLog {
    path: PathBuf,
}

impl UpdateLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record as a single line.
    ///
    /// The line is formatted up front and written with one `write_all` while
    /// holding an exclusive lock, so concurrent hook runs never interleave.
    pub fn append<T: Serialize>(&self, record: &T) -> Result<()> {
        let mut line =
            serde_json::to_string(record).context("Failed to serialize update log entry")?;
        line.push('\n');

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
        }

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open update log: {}", self.path.display()))?;

        file.lock_exclusive()
            .with_context(|| format!("Failed to lock update log: {}", self.path.display()))?;
        let written = file.write_all(line.as_bytes());
        if let Err(e) = FileExt::unlock(&file) {
            tracing::debug!("Failed to unlock update log {}: {e}", self.path.display());
        }

        written.with_context(|| format!("Failed to append to update log: {}", self.path.display()))
    }
}
