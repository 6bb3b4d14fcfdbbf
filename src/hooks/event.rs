//! Tool event parsing.
//!
//! Hook payloads are loosely shaped: fields vary by tool and may be missing.
//! Parsing never fails hard. Anything unreadable degrades to "no signal".

use serde::Deserialize;
use serde_json::{Map, Value};

/// Raw hook payload as delivered on stdin
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HookInput {
    /// Name of the tool that ran (e.g. "Edit", "TodoWrite")
    pub tool_name: String,
    /// Tool-specific input fields
    pub tool_input: Value,
}

impl HookInput {
    /// Read `toolName`/`toolInput`, falling back to Claude Code's
    /// `tool_name`/`tool_input`. Fields of the wrong type read as empty.
    pub fn from_map(obj: &Map<String, Value>) -> Self {
        let tool_name = obj
            .get("toolName")
            .or_else(|| obj.get("tool_name"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let tool_input = obj
            .get("toolInput")
            .or_else(|| obj.get("tool_input"))
            .cloned()
            .unwrap_or_default();

        Self {
            tool_name,
            tool_input,
        }
    }
}

/// Which edit-like tool produced a file change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTool {
    Write,
    Edit,
    MultiEdit,
}

impl EditTool {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "Write" => Some(EditTool::Write),
            "Edit" => Some(EditTool::Edit),
            "MultiEdit" => Some(EditTool::MultiEdit),
            _ => None,
        }
    }
}

/// A single entry from a TodoWrite list
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TodoItem {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub content: String,
}

impl TodoItem {
    pub fn is_completed(&self) -> bool {
        self.status == "completed"
    }
}

/// A classified tool event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolEvent {
    /// Write / Edit / MultiEdit on a file
    FileEdit {
        tool: EditTool,
        file_path: Option<String>,
        new_content: Option<String>,
    },
    /// Notebook cell edit. Tracked, never content-scanned.
    NotebookEdit { notebook_path: Option<String> },
    /// Todo list update
    TodoWrite { todos: Vec<TodoItem> },
    /// Any tool we don't inspect
    Other { tool_name: String },
}

impl ToolEvent {
    /// Parse a hook payload.
    ///
    /// Returns `None` when the payload is not a JSON object or is an empty
    /// object, which callers treat as "nothing to do".
    pub fn parse(raw: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(raw).ok()?;
        let obj = value.as_object()?;
        if obj.is_empty() {
            return None;
        }

        Some(Self::from_input(HookInput::from_map(obj)))
    }

    /// Classify an already-deserialised payload by tool name
    pub fn from_input(input: HookInput) -> Self {
        let fields = &input.tool_input;

        if let Some(tool) = EditTool::from_name(&input.tool_name) {
            return ToolEvent::FileEdit {
                tool,
                file_path: non_empty_str(fields, "file_path"),
                new_content: new_content(fields),
            };
        }

        match input.tool_name.as_str() {
            "NotebookEdit" => ToolEvent::NotebookEdit {
                notebook_path: non_empty_str(fields, "notebook_path"),
            },
            "TodoWrite" => ToolEvent::TodoWrite {
                todos: todo_items(fields),
            },
            _ => ToolEvent::Other {
                tool_name: input.tool_name,
            },
        }
    }

    /// The file or notebook this event touched, if any
    pub fn touched_path(&self) -> Option<&str> {
        match self {
            ToolEvent::FileEdit { file_path, .. } => file_path.as_deref(),
            ToolEvent::NotebookEdit { notebook_path } => notebook_path.as_deref(),
            _ => None,
        }
    }
}

fn non_empty_str(fields: &Value, key: &str) -> Option<String> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// New text carried by an edit: `new_string` for Edit, `content` for Write,
/// or every `edits[].new_string` joined by newlines for MultiEdit.
fn new_content(fields: &Value) -> Option<String> {
    if let Some(s) = fields.get("new_string").and_then(Value::as_str) {
        return Some(s.to_string());
    }
    if let Some(s) = fields.get("content").and_then(Value::as_str) {
        return Some(s.to_string());
    }

    let edits = fields.get("edits")?.as_array()?;
    let parts: Vec<&str> = edits
        .iter()
        .filter_map(|e| e.get("new_string").and_then(Value::as_str))
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("\n"))
    }
}

fn todo_items(fields: &Value) -> Vec<TodoItem> {
    let Some(items) = fields.get("todos").and_then(Value::as_array) else {
        return Vec::new();
    };

    // Skip malformed entries individually so one bad item doesn't hide the rest
    items
        .iter()
        .filter_map(|item| serde_json::from_value(item.clone()).ok())
        .collect()
}
