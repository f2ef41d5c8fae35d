//! `lucent run`: launch the built browser with the Lucent profile.
//!
//! The profile is reassembled from templates on every launch. If the
//! compiled executable is missing from the build tree the command falls
//! back to `mach run`, which can locate the binary itself.

use std::path::PathBuf;

use anyhow::{Result, bail};

use lucent_browser::{BrowserFinder, BrowserLauncher, ProfileBuilder};
use lucent_core::mach::Mach;
use lucent_core::platform::Platform;
use lucent_core::term;
use lucent_core::workspace::Workspace;

pub fn execute(workspace: &Workspace) -> Result<()> {
    term::heading("Launching Lucent Browser");

    let build_dir = workspace.build_dir();
    if !build_dir.exists() {
        term::error("Build directory not found!");
        term::info("Please run `lucent build` first.");
        bail!("build directory not found at {}", build_dir.display());
    }

    let profile = setup_profile(workspace)?;

    let finder = BrowserFinder::new(&build_dir, Platform::current());
    match finder.find() {
        Some(executable) => {
            term::success(&format!("Found browser at: {}", executable.display()));
            term::info(&format!("Using profile: {}", profile.display()));
            term::info("Starting Lucent Browser...");
            BrowserLauncher::new(executable, profile).launch()?;
            term::success("Lucent Browser launched!");
            term::info("Enjoy your translucent browsing experience!");
        }
        None => {
            term::error(&format!(
                "Browser executable not found at {}",
                finder.expected_path().display()
            ));
            term::info("Build may have failed or is incomplete.");
            term::info("Attempting to run with ./mach run...");
            Mach::new(workspace.source_dir())
                .run(&profile)
                .inspect_err(|_| {
                    term::error("mach run failed");
                })?;
        }
    }
    Ok(())
}

/// Assemble the profile and report which templates made it in.
fn setup_profile(workspace: &Workspace) -> Result<PathBuf> {
    let written = ProfileBuilder::new(workspace).assemble()?;
    tracing::debug!("profile assembled with {} template(s)", written.len());
    for file in &written {
        match file.file_name().and_then(|n| n.to_str()) {
            Some("user.js") => term::success("Copied privacy configuration"),
            Some("userChrome.css") => term::success("Copied UI transparency styles"),
            Some("userContent.css") => term::success("Copied content transparency styles"),
            _ => {}
        }
    }
    Ok(workspace.profile_dir())
}
