//! Response formatting for hook output.

use crate::decision::{BlockInfo, Decision};
use serde::Serialize;

/// Remediation text appended to every block.
pub const GUIDANCE: &str = "Python and Markdown files should not contain colorful emojis for professional code standards. Simple symbols like ✓ × → • are allowed. Please remove the colorful emojis and try again.";

/// JSON response for denied writes (Claude Code hook format).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DenyResponse {
    pub hook_specific_output: HookSpecificOutput,
}

/// The hook-specific output for PreToolUse hooks.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    /// Must be "PreToolUse" for this hook type.
    pub hook_event_name: &'static str,
    /// "deny" stops the write without failing the session.
    pub permission_decision: &'static str,
    /// Message shown to the model and the user.
    pub permission_decision_reason: String,
}

/// Format a decision as JSON for stdout. `None` means allow silently.
pub fn format_response(decision: &Decision) -> Option<String> {
    match decision {
        Decision::Allow => None,
        Decision::Block(info) => Some(format_deny_json(info)),
    }
}

fn deny_reason(info: &BlockInfo) -> String {
    let mut reason = info.reason.clone();
    if let Some(details) = &info.details {
        reason.push_str(&format!(" ({})", details));
    }
    reason.push_str("\n\n");
    reason.push_str(GUIDANCE);
    reason
}

fn format_deny_json(info: &BlockInfo) -> String {
    let response = DenyResponse {
        hook_specific_output: HookSpecificOutput {
            hook_event_name: "PreToolUse",
            permission_decision: "deny",
            permission_decision_reason: deny_reason(info),
        },
    };
    // Serializing plain strings cannot fail; fall back to a minimal deny.
    serde_json::to_string(&response).unwrap_or_else(|_| {
        r#"{"hookSpecificOutput":{"hookEventName":"PreToolUse","permissionDecision":"deny","permissionDecisionReason":"Colorful emojis detected"}}"#
            .to_string()
    })
}
