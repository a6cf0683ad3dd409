use serde::Serialize;
use serde_json::Value;
use std::panic::Location;
use std::process::Command;

/// Callsite that produced a result block.
#[derive(Debug, Serialize)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

/// Provenance block attached to every JSON result.
#[derive(Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub version: &'static str,
    pub callsite: Callsite,
    pub params: Value,
}

/// Describe the current build and the parameters of this invocation.
#[track_caller]
pub fn provenance(params: Value) -> Provenance {
    let callsite = Location::caller();
    Provenance {
        code_rev: current_git_rev(),
        version: ombb::VERSION,
        callsite: Callsite {
            file: callsite.file(),
            line: callsite.line(),
        },
        params,
    }
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".to_string())
}
