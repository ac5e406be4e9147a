//! Colorful emoji classification.

use std::fmt;
use std::path::Path;

use crate::decision::{BlockInfo, Decision, Offense};
use crate::symbols::is_offending;

/// Rule name reported on emoji blocks.
pub const EMOJI_RULE: &str = "emoji.colorful";

/// File kinds the check distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Python,
    Markdown,
    Other,
}

const PYTHON_EXTENSIONS: &[&str] = &["py"];
const MARKDOWN_EXTENSIONS: &[&str] = &["md", "mdx"];

impl FileKind {
    /// Detect the kind of a path from its extension (case-insensitive).
    pub fn from_path(path: &str) -> Self {
        Self::from_path_with(path, &[], &[])
    }

    /// Like [`FileKind::from_path`], with extra extensions per kind.
    pub fn from_path_with(path: &str, extra_python: &[String], extra_markdown: &[String]) -> Self {
        let Some(ext) = extension(path) else {
            return FileKind::Other;
        };
        let listed = |builtin: &[&str], extra: &[String]| {
            builtin.iter().any(|e| *e == ext) || extra.iter().any(|e| normalize_extension(e) == ext)
        };
        if listed(PYTHON_EXTENSIONS, extra_python) {
            FileKind::Python
        } else if listed(MARKDOWN_EXTENSIONS, extra_markdown) {
            FileKind::Markdown
        } else {
            FileKind::Other
        }
    }

    /// Whether content for this kind is scanned at all.
    pub fn is_checked(self) -> bool {
        !matches!(self, FileKind::Other)
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Python => f.write_str("Python"),
            FileKind::Markdown => f.write_str("Markdown"),
            FileKind::Other => f.write_str("other"),
        }
    }
}

fn extension(path: &str) -> Option<String> {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
}

/// Accepts both "pyi" and ".pyi" in config.
pub fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_lowercase()
}

/// Scan content for offending characters.
///
/// Scanning is per code point: an emoji followed by a skin-tone modifier is
/// two offenses, and a trailing variation selector (U+FE0F) is ignored.
pub fn find_offenses(content: &str) -> Vec<Offense> {
    content
        .chars()
        .enumerate()
        .filter(|&(_, c)| is_offending(c))
        .map(|(position, character)| Offense {
            character,
            position,
        })
        .collect()
}

/// Classify content about to be written to a file of the given kind.
pub fn classify(content: &str, kind: FileKind) -> Decision {
    if !kind.is_checked() {
        return Decision::allow();
    }

    let offenses = find_offenses(content);
    if offenses.is_empty() {
        return Decision::allow();
    }

    let listing = offenses
        .iter()
        .map(|o| format!("'{}' at position {}", o.character, o.position))
        .collect::<Vec<_>>()
        .join(", ");
    let noun = if offenses.len() == 1 { "emoji" } else { "emojis" };
    let reason = format!(
        "found {} colorful {}: {}",
        offenses.len(),
        noun,
        listing
    );

    Decision::Block(BlockInfo::new(EMOJI_RULE, reason).with_offenses(offenses))
}
