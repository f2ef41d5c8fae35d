//! `lucent build`: drive mach to compile and package the browser.

use std::fs;
use std::time::{Duration, Instant};

use anyhow::{Result, bail};

use lucent_core::mach::Mach;
use lucent_core::platform::Platform;
use lucent_core::prompt::Prompter;
use lucent_core::term;
use lucent_core::workspace::Workspace;

pub fn execute(workspace: &Workspace, prompter: &mut dyn Prompter) -> Result<()> {
    term::heading("Lucent Browser Build System");

    term::info("What would you like to do?");
    println!("  1. Build browser");
    println!("  2. Build and package");
    println!("  3. Clean build (remove obj-lucent)");

    match prompter.choose("\nEnter choice (1-3): ", 3)? {
        Some(1) => {
            build_browser(workspace)?;
            term::heading("Build Complete!");
            term::success("Lucent Browser has been built successfully.");
            term::info("Run `lucent run` to launch it.");
        }
        Some(2) => {
            build_browser(workspace)?;
            package_browser(workspace)?;
            term::heading("Build and Package Complete!");
            term::success("Lucent Browser is ready for distribution.");
        }
        Some(3) => clean_build(workspace, prompter)?,
        _ => {
            term::error("Invalid choice");
            bail!("invalid menu choice");
        }
    }
    Ok(())
}

/// Compile the browser with `mach build`, streaming its output and timing
/// the run. Preconditions (tree and mozconfig) are checked up front so each
/// failure mode gets its own message before mach is ever spawned.
fn build_browser(workspace: &Workspace) -> Result<()> {
    term::heading("Building Lucent Browser");

    let source_dir = workspace.source_dir();
    if !source_dir.exists() {
        term::error("Firefox source not found!");
        term::info("Please run `lucent setup` first.");
        bail!("source tree not found at {}", source_dir.display());
    }
    if !workspace.mozconfig().exists() {
        term::error("mozconfig not found!");
        term::info("Run `lucent setup` to copy the build configuration into the tree.");
        bail!("mozconfig not found in the source tree");
    }

    if Platform::current().uses_build_shell() {
        term::info("On Windows, run this in the MozillaBuild shell:");
        term::info(&format!("  cd {}", source_dir.display()));
        term::info("  ./mach build");
        term::warn("Cannot automate the build on Windows. Please run it manually.");
        return Ok(());
    }

    term::info("Starting build process...");
    term::warn("This will take 1-2 hours depending on your hardware.");
    term::info("You can safely minimize this window and do other work.");

    let started = Instant::now();
    term::info("Executing: ./mach build");
    match Mach::new(&source_dir).build() {
        Ok(()) => {
            term::success(&format!(
                "Build completed successfully in {}!",
                format_elapsed(started.elapsed())
            ));
            Ok(())
        }
        Err(e) => {
            term::error(&format!("Build failed: {e}"));
            Err(e.into())
        }
    }
}

/// Run `mach package` and point the operator at the artifacts.
fn package_browser(workspace: &Workspace) -> Result<()> {
    term::heading("Packaging Lucent Browser");

    if Platform::current().uses_build_shell() {
        term::info("To package on Windows, run in the MozillaBuild shell:");
        term::info("  ./mach package");
        return Ok(());
    }

    term::info("Creating package...");
    match Mach::new(workspace.source_dir()).package() {
        Ok(()) => {
            term::success("Package created successfully");
            term::info(&format!(
                "Package location: {}",
                workspace.dist_dir().display()
            ));
            Ok(())
        }
        Err(e) => {
            term::error(&format!("Packaging failed: {e}"));
            Err(e.into())
        }
    }
}

/// Delete the build output directory after an explicit `yes`.
fn clean_build(workspace: &Workspace, prompter: &mut dyn Prompter) -> Result<()> {
    term::warn("This will delete the build directory.");
    if !prompter.confirm_word("Are you sure?")? {
        term::info("Clean aborted; build directory left untouched.");
        return Ok(());
    }

    let build_dir = workspace.build_dir();
    if build_dir.exists() {
        fs::remove_dir_all(&build_dir)?;
        term::success("Build directory cleaned");
    } else {
        term::info("Build directory doesn't exist");
    }
    Ok(())
}

/// `H:MM:SS`, matching how long builds are usually quoted.
fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
