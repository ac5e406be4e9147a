//! Tool analysis entry points.

mod write;

pub use write::analyze_write;

use crate::config::CompiledConfig;
use crate::decision::Decision;
use crate::input::{HookInput, InputError};

/// Analyze a hook invocation. Tools that don't write content are allowed.
pub fn analyze(input: &HookInput, config: &CompiledConfig) -> Result<Decision, InputError> {
    if !config.raw.enabled {
        return Ok(Decision::allow());
    }
    Ok(match input.write_request()? {
        Some(request) => analyze_write(&request, config),
        None => Decision::allow(),
    })
}
