//! Emoji Guard - Claude Code emoji hook.
//!
//! A Rust-based PreToolUse hook for Claude Code that blocks colorful emojis
//! from being written to Python and Markdown files, while letting monochrome
//! symbols like ✓ × → • through.

pub mod analysis;
pub mod audit;
pub mod classify;
pub mod config;
pub mod decision;
pub mod input;
pub mod output;
pub mod symbols;

pub use analysis::{analyze, analyze_write};
pub use classify::{classify, FileKind};
pub use config::{CompiledConfig, Config};
pub use decision::{Decision, Offense};
pub use input::{HookInput, WriteRequest};
pub use output::format_response;
