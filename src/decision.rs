//! Decision types for hook responses.

use serde::Serialize;

/// The result of checking content about to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Allow the write to proceed.
    Allow,
    /// Block the write with a reason.
    Block(BlockInfo),
}

/// A single disallowed character found in the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Offense {
    /// The offending character.
    pub character: char,
    /// 0-based code point index into the scanned content.
    pub position: usize,
}

/// Information about why a write was blocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockInfo {
    /// Human-readable reason for blocking.
    pub reason: String,
    /// The rule that triggered the block.
    pub rule: String,
    /// Offending characters in left-to-right order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub offenses: Vec<Offense>,
    /// Optional details (e.g., target file).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl BlockInfo {
    pub fn new(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            reason: reason.into(),
            offenses: Vec::new(),
            details: None,
        }
    }

    pub fn with_offenses(mut self, offenses: Vec<Offense>) -> Self {
        self.offenses = offenses;
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Distinct offending characters in first-seen order, at most `max`.
    pub fn examples(&self, max: usize) -> Vec<char> {
        let mut seen = Vec::new();
        for offense in &self.offenses {
            if seen.len() >= max {
                break;
            }
            if !seen.contains(&offense.character) {
                seen.push(offense.character);
            }
        }
        seen
    }
}

impl Decision {
    /// Create an allow decision.
    pub fn allow() -> Self {
        Decision::Allow
    }

    /// Check if this is a block decision.
    pub fn is_blocked(&self) -> bool {
        matches!(self, Decision::Block(_))
    }

    /// Get the block info if blocked.
    pub fn block_info(&self) -> Option<&BlockInfo> {
        match self {
            Decision::Block(info) => Some(info),
            Decision::Allow => None,
        }
    }

    /// Offenses carried by a block, empty for allow.
    pub fn offenses(&self) -> &[Offense] {
        match self {
            Decision::Block(info) => &info.offenses,
            Decision::Allow => &[],
        }
    }
}
