//! Launches the compiled browser as a detached process.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::{Error, Result};

pub struct BrowserLauncher {
    executable: PathBuf,
    profile: PathBuf,
}

impl BrowserLauncher {
    pub fn new(executable: impl Into<PathBuf>, profile: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            profile: profile.into(),
        }
    }

    /// Spawn the browser and return immediately. The child is not waited
    /// on or health-checked; the operator owns it from here.
    pub fn launch(&self) -> Result<()> {
        tracing::debug!("launching {}", self.executable.display());
        Command::new(&self.executable)
            .args(self.build_args())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(drop)
            .map_err(|e| {
                Error::Launch(format!(
                    "could not start {}: {e}",
                    self.executable.display()
                ))
            })
    }

    /// `--profile` keeps browsing state in our assembled profile;
    /// `--no-remote` stops the launch from being swallowed by an already
    /// running instance.
    fn build_args(&self) -> Vec<String> {
        vec![
            "--profile".to_string(),
            self.profile.display().to_string(),
            "--no-remote".to_string(),
        ]
    }
}
