//! Child-process helpers.
//!
//! Two modes cover every external invocation the pipeline makes: streamed
//! (the operator's terminal is attached, output appears in real time) and
//! captured (quiet on success, stderr surfaced in the error on failure).
//! Both block until the child exits; nothing here installs timeouts.

use std::process::Command;

use crate::{Error, Result};

/// Run a command with the operator's terminal attached. Ok only on exit
/// status zero.
pub fn run_streamed(mut cmd: Command) -> Result<()> {
    let program = display_name(&cmd);
    tracing::debug!("running (streamed) {cmd:?}");

    let status = cmd.status().map_err(|source| Error::Spawn {
        program: program.clone(),
        source,
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::CommandFailed { program, status })
    }
}

/// Run a command to completion with output captured. On failure the child's
/// stderr is carried in the error.
pub fn run_captured(mut cmd: Command) -> Result<()> {
    let program = display_name(&cmd);
    tracing::debug!("running (captured) {cmd:?}");

    let output = cmd.output().map_err(|source| Error::Spawn {
        program: program.clone(),
        source,
    })?;

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    let detail = if stderr.is_empty() {
        output.status.to_string()
    } else {
        stderr
    };
    Err(Error::CommandOutput { program, detail })
}

fn display_name(cmd: &Command) -> String {
    cmd.get_program().to_string_lossy().into_owned()
}
