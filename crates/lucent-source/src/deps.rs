//! Required external toolchain checks.
//!
//! The pipeline shells out to these tools; none are installed
//! automatically. The check reports every missing tool, not just the first.

use which::which;

/// Tools the build pipeline depends on, with operator-facing names.
pub const REQUIRED_TOOLS: &[(&str, &str)] = &[
    ("python3", "Python 3"),
    ("git", "Git"),
    ("rustc", "Rust"),
    ("cargo", "Cargo"),
];

/// True when `bin` resolves on PATH.
pub fn tool_available(bin: &str) -> bool {
    which(bin).is_ok()
}

/// Display names of every required tool absent from PATH. Empty means the
/// environment is ready.
pub fn missing_tools() -> Vec<&'static str> {
    missing_from(REQUIRED_TOOLS)
}

fn missing_from<'a>(tools: &[(&'a str, &'a str)]) -> Vec<&'a str> {
    tools
        .iter()
        .filter(|(bin, _)| !tool_available(bin))
        .map(|(_, name)| *name)
        .collect()
}
