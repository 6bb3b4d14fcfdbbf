pub mod project;
pub mod update_log;

pub use project::{ProjectDir, DEFAULT_DOCS_DIR, PROJECT_DIR_ENV};
pub use update_log::UpdateLog;
