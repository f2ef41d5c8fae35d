//! Styled status output shared by every command.
//!
//! One severity per function; errors go to stderr so scripts can separate
//! them from progress output.

use console::style;

const RULE_WIDTH: usize = 60;

/// Section banner around a phase of the workflow.
pub fn heading(text: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("\n{}", style(&rule).magenta().bold());
    println!("{}", style(text).magenta().bold());
    println!("{}\n", style(&rule).magenta().bold());
}

pub fn success(text: &str) {
    println!("{} {}", style("✓").green().bold(), text);
}

pub fn error(text: &str) {
    eprintln!("{} {}", style("✗").red().bold(), text);
}

pub fn info(text: &str) {
    println!("{} {}", style("ℹ").cyan(), text);
}

pub fn warn(text: &str) {
    println!("{} {}", style("⚠").yellow().bold(), text);
}
