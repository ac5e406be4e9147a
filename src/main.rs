//! Emoji Guard - Claude Code emoji hook entry point.

use emoji_guard::analysis::analyze;
use emoji_guard::audit::AuditLogger;
use emoji_guard::config::Config;
use emoji_guard::input::{HookInput, InputError};
use emoji_guard::output::format_response;

use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Read JSON from stdin
    let hook_input = match read_input() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Load and compile config
    let cwd = hook_input.cwd.as_deref().map(Path::new);
    let compiled = match Config::load(cwd).and_then(Config::compile) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let decision = match analyze(&hook_input, &compiled) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Audit logging (if enabled); failures never change the decision
    if let Some(path) = compiled.audit_path()
        && let Ok(mut logger) = AuditLogger::open(path)
    {
        let _ = logger.log_decision(&hook_input, &decision);
    }

    // Blocks go to stdout as JSON so the host reads them; exit stays 0
    if let Some(json) = format_response(&decision) {
        println!("{}", json);
    }
    ExitCode::SUCCESS
}

fn read_input() -> Result<HookInput, InputError> {
    let mut input_str = String::new();
    io::stdin().read_to_string(&mut input_str)?;
    HookInput::parse(&input_str)
}
