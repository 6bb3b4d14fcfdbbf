//! CLI command implementations

pub mod hook;
pub mod rules;
pub mod template;
