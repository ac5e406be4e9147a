//! Write, Edit and MultiEdit content analysis.

use crate::classify::classify;
use crate::config::CompiledConfig;
use crate::decision::Decision;
use crate::input::WriteRequest;

/// Analyze content a write tool is about to put in a file.
pub fn analyze_write(request: &WriteRequest, config: &CompiledConfig) -> Decision {
    let path = &request.target_path;

    // 1. Excluded paths are never checked
    if config.is_excluded(path).is_some() {
        return Decision::allow();
    }

    // 2. Only Python and Markdown files are in scope
    let kind = config.file_kind(path);

    // 3. Scan content
    let Decision::Block(mut info) = classify(&request.content, kind) else {
        return Decision::allow();
    };

    let examples = info.examples(config.raw.max_examples);
    let examples = if examples.is_empty() {
        "detected".to_string()
    } else {
        examples
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    };

    let listing = std::mem::replace(
        &mut info.reason,
        format!("Colorful emojis detected in {kind} file '{path}': {examples}"),
    );
    Decision::Block(info.with_details(listing))
}
