//! Claude Code hook handling.
//!
//! Claude Code invokes `docwatch` after Write, Edit, MultiEdit, NotebookEdit
//! and TodoWrite tool calls, passing a JSON payload on stdin:
//!
//! ```json
//! {"toolName": "Edit", "toolInput": {"file_path": "app/api/users/route.ts", "new_string": "..."}}
//! ```
//!
//! - [`event`] turns the payload into a [`ToolEvent`]
//! - [`runner`] classifies it, appends the update log and prints the report

pub mod event;
pub mod runner;

pub use event::{EditTool, HookInput, TodoItem, ToolEvent};
pub use runner::{run, HookReport, HookSettings};
