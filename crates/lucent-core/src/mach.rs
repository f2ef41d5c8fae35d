//! Thin wrapper over Mozilla's `mach` build driver.
//!
//! Every consequential operation (dependency bootstrap, compilation,
//! packaging, the fallback run) is delegated to mach inside the fetched
//! source tree. This wrapper only assembles the invocations.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::process;
use crate::Result;

pub struct Mach {
    source_dir: PathBuf,
}

impl Mach {
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new("./mach");
        cmd.current_dir(&self.source_dir).args(args);
        cmd
    }

    /// `mach bootstrap`: installs the Firefox build prerequisites,
    /// non-interactively. Output streams to the terminal.
    pub fn bootstrap(&self) -> Result<()> {
        process::run_streamed(self.command(&[
            "bootstrap",
            "--application-choice=browser",
            "--no-interactive",
        ]))
    }

    /// `mach build`: compiles the browser, streaming combined output in
    /// real time. Blocks until the build finishes.
    pub fn build(&self) -> Result<()> {
        process::run_streamed(self.command(&["build"]))
    }

    /// `mach package`: creates the distribution package.
    pub fn package(&self) -> Result<()> {
        process::run_captured(self.command(&["package"]))
    }

    /// `mach run --profile <dir>`: the fallback launch path when the
    /// compiled executable is not where we expect it.
    pub fn run(&self, profile: &Path) -> Result<()> {
        let mut cmd = self.command(&["run", "--profile"]);
        cmd.arg(profile);
        process::run_streamed(cmd)
    }
}
