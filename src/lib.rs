//! Documentation staleness detection for Claude Code tool events.
//!
//! `docwatch` runs as a `PostToolUse` hook. It reads one tool event from
//! stdin, matches the edited path and new content against rule tables, and
//! reports which documentation files probably need a CREATE or UPDATE pass.

pub mod classify;
pub mod commands;
pub mod fs;
pub mod hooks;
pub mod rules;
pub mod templates;
