//! Audit logging for hook decisions.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::decision::Decision;
use crate::input::HookInput;

/// An audit log entry.
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    /// Timestamp of the event.
    pub timestamp: DateTime<Utc>,
    /// Session ID if available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Tool that was invoked.
    pub tool: String,
    /// Target file, or `<unknown>`.
    pub file_path: String,
    /// Whether the write was blocked.
    pub blocked: bool,
    /// Rule that triggered the block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    /// Reason for blocking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Number of offending characters.
    #[serde(skip_serializing_if = "is_zero")]
    pub offenses: usize,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

impl AuditEntry {
    /// Create a new audit entry from hook input and decision.
    pub fn new(input: &HookInput, decision: &Decision) -> Self {
        let (rule, reason) = match decision {
            Decision::Allow => (None, None),
            Decision::Block(info) => (Some(info.rule.clone()), Some(info.reason.clone())),
        };

        Self {
            timestamp: Utc::now(),
            session_id: input.session_id.clone(),
            tool: input.tool_name.clone(),
            file_path: input
                .file_path()
                .filter(|p| !p.is_empty())
                .unwrap_or("<unknown>")
                .to_string(),
            blocked: decision.is_blocked(),
            rule,
            reason,
            offenses: decision.offenses().len(),
        }
    }
}

/// Audit logger for writing entries to a file.
pub struct AuditLogger {
    file: File,
}

impl AuditLogger {
    /// Open or create an audit log file.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }

    /// Write an audit entry to the log.
    pub fn log(&mut self, entry: &AuditEntry) -> std::io::Result<()> {
        let json = serde_json::to_string(entry)?;
        writeln!(self.file, "{}", json)?;
        self.file.flush()
    }

    /// Log a decision for an input.
    pub fn log_decision(&mut self, input: &HookInput, decision: &Decision) -> std::io::Result<()> {
        let entry = AuditEntry::new(input, decision);
        self.log(&entry)
    }
}
