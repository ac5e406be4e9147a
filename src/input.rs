//! Input parsing for Claude Code hook invocations.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when parsing hook input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("field '{0}' must be {1}")]
    InvalidField(&'static str, &'static str),
}

/// The raw input from Claude Code's PreToolUse hook.
#[derive(Debug, Clone, Deserialize)]
pub struct HookInput {
    /// The tool being invoked (e.g., "Write", "Edit").
    pub tool_name: String,

    /// The tool's input parameters as raw JSON.
    #[serde(default)]
    pub tool_input: Value,

    /// Current working directory (optional).
    #[serde(default)]
    pub cwd: Option<String>,

    /// Session ID for audit logging (optional).
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Tools whose input carries file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteTool {
    Write,
    Edit,
    MultiEdit,
}

impl WriteTool {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Write" => Some(WriteTool::Write),
            "Edit" => Some(WriteTool::Edit),
            "MultiEdit" => Some(WriteTool::MultiEdit),
            _ => None,
        }
    }
}

/// A file path and the new text a write tool is about to put there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRequest {
    /// Which tool produced the request.
    pub tool: WriteTool,
    /// The file being written.
    pub target_path: String,
    /// The text to check.
    pub content: String,
}

impl HookInput {
    /// Parse from JSON string.
    pub fn parse(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Extract the write request, if this tool writes file content.
    ///
    /// Missing fields read as empty strings; fields of the wrong type are
    /// input errors.
    pub fn write_request(&self) -> Result<Option<WriteRequest>, InputError> {
        let Some(tool) = WriteTool::from_name(&self.tool_name) else {
            return Ok(None);
        };
        if !matches!(self.tool_input, Value::Object(_) | Value::Null) {
            return Err(InputError::InvalidField("tool_input", "an object"));
        }

        let target_path = self.string_field("file_path")?.to_string();
        let content = match tool {
            WriteTool::Write => self.string_field("content")?.to_string(),
            WriteTool::Edit => self.string_field("new_string")?.to_string(),
            WriteTool::MultiEdit => self.multi_edit_content()?,
        };

        Ok(Some(WriteRequest {
            tool,
            target_path,
            content,
        }))
    }

    /// Get the primary path being written (for any file-based tool).
    pub fn file_path(&self) -> Option<&str> {
        self.tool_input.get("file_path").and_then(|v| v.as_str())
    }

    fn string_field(&self, name: &'static str) -> Result<&str, InputError> {
        optional_str(&self.tool_input, name)
    }

    /// Non-empty `new_string`s of every edit, joined with a space.
    fn multi_edit_content(&self) -> Result<String, InputError> {
        let edits = match self.tool_input.get("edits") {
            None | Some(Value::Null) => return Ok(String::new()),
            Some(Value::Array(edits)) => edits,
            Some(_) => return Err(InputError::InvalidField("edits", "an array")),
        };

        let mut parts = Vec::with_capacity(edits.len());
        for edit in edits {
            if !edit.is_object() {
                return Err(InputError::InvalidField("edits", "an array of objects"));
            }
            let new_string = optional_str(edit, "new_string")?;
            if !new_string.is_empty() {
                parts.push(new_string);
            }
        }
        Ok(parts.join(" "))
    }
}

fn optional_str<'a>(value: &'a Value, name: &'static str) -> Result<&'a str, InputError> {
    match value.get(name) {
        None | Some(Value::Null) => Ok(""),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(InputError::InvalidField(name, "a string")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> Option<WriteRequest> {
        HookInput::parse(json).unwrap().write_request().unwrap()
    }

    #[test]
    fn test_parse_write_input() {
        let req = request(
            r#"{"tool_name":"Write","tool_input":{"file_path":"a.py","content":"Hello World"}}"#,
        )
        .unwrap();
        assert_eq!(req.tool, WriteTool::Write);
        assert_eq!(req.target_path, "a.py");
        assert_eq!(req.content, "Hello World");
    }

    #[test]
    fn test_parse_edit_input() {
        let req = request(
            r#"{"tool_name":"Edit","tool_input":{"file_path":"a.md","old_string":"x","new_string":"Updated code"}}"#,
        )
        .unwrap();
        assert_eq!(req.tool, WriteTool::Edit);
        assert_eq!(req.content, "Updated code");
    }

    #[test]
    fn test_parse_multi_edit_joins_non_empty() {
        let req = request(
            r#"{"tool_name":"MultiEdit","tool_input":{"file_path":"a.py","edits":[
                {"new_string":"First edit"},
                {"new_string":""},
                {"new_string":"Third edit"}
            ]}}"#,
        )
        .unwrap();
        assert_eq!(req.content, "First edit Third edit");
    }

    #[test]
    fn test_multi_edit_empty_edits() {
        let req =
            request(r#"{"tool_name":"MultiEdit","tool_input":{"file_path":"a.py","edits":[]}}"#)
                .unwrap();
        assert_eq!(req.content, "");
    }

    #[test]
    fn test_missing_fields_are_empty() {
        for tool in ["Write", "Edit", "MultiEdit"] {
            let json = format!(r#"{{"tool_name":"{tool}","tool_input":{{}}}}"#);
            let req = request(&json).unwrap();
            assert_eq!(req.target_path, "");
            assert_eq!(req.content, "");
        }
    }

    #[test]
    fn test_missing_tool_input() {
        let req = request(r#"{"tool_name":"Write"}"#).unwrap();
        assert_eq!(req.content, "");
    }

    #[test]
    fn test_other_tool_has_no_request() {
        assert!(request(r#"{"tool_name":"Read","tool_input":{"file_path":"a.py"}}"#).is_none());
        assert!(request(r#"{"tool_name":"Bash","tool_input":{"command":"ls"}}"#).is_none());
    }

    #[test]
    fn test_parse_with_cwd_and_session() {
        let json = r#"{"tool_name":"Write","tool_input":{},"cwd":"/home/user","session_id":"abc"}"#;
        let input = HookInput::parse(json).unwrap();
        assert_eq!(input.cwd, Some("/home/user".to_string()));
        assert_eq!(input.session_id, Some("abc".to_string()));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            HookInput::parse("not valid json"),
            Err(InputError::Json(_))
        ));
        assert!(HookInput::parse("").is_err());
        assert!(HookInput::parse("[]").is_err());
    }

    #[test]
    fn test_missing_tool_name() {
        assert!(HookInput::parse(r#"{"tool_input":{}}"#).is_err());
    }

    #[test]
    fn test_tool_input_must_be_object() {
        for tool_input in [r#""🚀""#, r#"[{"file_path":"a.py","content":"🚀"}]"#, "42", "true"] {
            let json = format!(r#"{{"tool_name":"Write","tool_input":{tool_input}}}"#);
            let input = HookInput::parse(&json).unwrap();
            assert!(
                matches!(
                    input.write_request(),
                    Err(InputError::InvalidField("tool_input", _))
                ),
                "{tool_input} should be rejected"
            );
        }
    }

    #[test]
    fn test_non_object_tool_input_ignored_for_other_tools() {
        let input = HookInput::parse(r#"{"tool_name":"Bash","tool_input":"ls"}"#).unwrap();
        assert!(input.write_request().unwrap().is_none());
    }

    #[test]
    fn test_wrong_field_types() {
        let input =
            HookInput::parse(r#"{"tool_name":"Write","tool_input":{"content":42}}"#).unwrap();
        assert!(matches!(
            input.write_request(),
            Err(InputError::InvalidField("content", _))
        ));

        let input =
            HookInput::parse(r#"{"tool_name":"MultiEdit","tool_input":{"edits":"x"}}"#).unwrap();
        assert!(matches!(
            input.write_request(),
            Err(InputError::InvalidField("edits", _))
        ));
    }
}
