//! `lucent setup`: prepare the environment for building Lucent Browser.
//!
//! Four sequential steps, each fatal on failure: toolchain check, source
//! fetch, build-environment preparation, patch application. Coordination
//! with the other commands is purely through the filesystem.

use std::fs;
use std::time::Duration;

use anyhow::{Result, bail};
use indicatif::ProgressBar;

use lucent_core::mach::Mach;
use lucent_core::platform::Platform;
use lucent_core::prompt::Prompter;
use lucent_core::term;
use lucent_core::workspace::Workspace;
use lucent_source::fetch::FetchStrategy;
use lucent_source::{deps, fetch, patches};

pub fn execute(workspace: &Workspace, prompter: &mut dyn Prompter) -> Result<()> {
    tracing::debug!("project root: {}", workspace.root().display());

    term::heading("Lucent Browser Setup");
    term::info("This prepares your environment for building Lucent Browser.");

    check_dependencies(Platform::current())?;
    fetch_source(workspace, prompter)?;
    prepare_build_environment(workspace)?;
    apply_patches(workspace)?;

    term::heading("Setup Complete!");
    term::success("Your build environment is ready.");
    term::info("Next steps:");
    term::info("  1. lucent build   (compilation takes 1-2 hours)");
    term::info("  2. lucent run");
    Ok(())
}

/// Report every required tool missing from PATH, then print installation
/// guidance for the operator's platform. Nothing is installed here.
fn check_dependencies(platform: Platform) -> Result<()> {
    term::heading("Checking Dependencies");

    let mut missing = Vec::new();
    for (bin, name) in deps::REQUIRED_TOOLS {
        if deps::tool_available(bin) {
            term::success(&format!("{name} is installed"));
        } else {
            term::error(&format!("{name} is NOT installed"));
            missing.push(*name);
        }
    }

    if missing.is_empty() {
        return Ok(());
    }

    term::error(&format!("Missing dependencies: {}", missing.join(", ")));
    term::info("Please install the missing dependencies before continuing.");
    match platform {
        Platform::Windows => {
            term::info("For Windows, install:");
            term::info("  1. Visual Studio 2022 (Community Edition)");
            term::info("  2. Rust: https://rustup.rs");
            term::info("  3. Git: https://git-scm.com");
            term::info("  4. MozillaBuild: https://ftp.mozilla.org/pub/mozilla/libraries/win32/MozillaBuildSetup-Latest.exe");
        }
        Platform::Linux => {
            term::info("For Ubuntu/Debian:");
            term::info("  sudo apt install python3 git rustc cargo");
        }
        Platform::MacOs => {
            term::info("For macOS:");
            term::info("  Install Xcode Command Line Tools");
            term::info("  brew install python rust");
        }
    }

    bail!("missing dependencies: {}", missing.join(", "));
}

/// Fetch the pinned Firefox source, preferring a Mercurial clone and
/// falling back to the release tarball. An existing checkout is reused
/// unless the operator asks for a fresh copy.
fn fetch_source(workspace: &Workspace, prompter: &mut dyn Prompter) -> Result<()> {
    term::heading("Downloading Firefox Source Code");

    let source_dir = workspace.source_dir();
    if source_dir.exists() {
        term::info(&format!(
            "Firefox source already exists at {}",
            source_dir.display()
        ));
        if !prompter.confirm("Download fresh copy?")? {
            term::info("Reusing the existing checkout.");
            return Ok(());
        }
        fs::remove_dir_all(&source_dir)?;
    }

    match fetch::strategy() {
        Ok(FetchStrategy::Clone) => {
            term::info("Cloning the Firefox ESR repository...");
            term::info("This will take some time (several GB)...");
            let spinner = spinner(&format!("Cloning {}", fetch::MERCURIAL_REPO));
            let cloned = fetch::clone_source(&source_dir);
            spinner.finish_and_clear();
            cloned?;
            term::success("Firefox source cloned successfully");
        }
        Ok(FetchStrategy::Tarball) => {
            term::info("Mercurial not found, downloading tarball instead...");
            term::info("Note: for development, consider installing Mercurial (hg).");
            let tarball = workspace.root().join(fetch::tarball_name());
            let spinner = spinner(&format!("Downloading {}", fetch::tarball_name()));
            let downloaded = fetch::download_source(&source_dir, &tarball);
            spinner.finish_and_clear();
            downloaded?;
            term::success("Source code downloaded and extracted");
        }
        Err(e) => {
            term::error("No fetch strategy available: install Mercurial (hg) or curl.");
            return Err(e.into());
        }
    }
    Ok(())
}

/// Copy the mozconfig template into the tree and run mach bootstrap.
fn prepare_build_environment(workspace: &Workspace) -> Result<()> {
    term::heading("Setting Up Build Environment");

    let source_dir = workspace.source_dir();
    if !source_dir.exists() {
        term::error("Firefox source not found. Run the download step first.");
        bail!("source tree not found at {}", source_dir.display());
    }

    term::info("Copying mozconfig...");
    let template = workspace.mozconfig_template();
    if !template.exists() {
        term::error(&format!(
            "mozconfig template not found at {}",
            template.display()
        ));
        bail!("mozconfig template missing");
    }
    fs::copy(&template, workspace.mozconfig())?;
    term::success("mozconfig copied");

    term::info("Bootstrapping build environment...");
    term::info("This will install additional dependencies...");
    if Platform::current().uses_build_shell() {
        term::info("Run this in the MozillaBuild shell: ./mach bootstrap");
    } else {
        Mach::new(&source_dir).bootstrap().inspect_err(|_| {
            term::error("Bootstrap failed");
        })?;
        term::success("Build environment bootstrapped");
    }

    term::success("Build environment setup complete");
    Ok(())
}

/// Apply local patches in filename order, stopping at the first failure.
/// No patches is the trivial-success case.
fn apply_patches(workspace: &Workspace) -> Result<()> {
    term::heading("Applying Lucent Patches");

    let found = patches::patch_files(&workspace.patches_dir())?;
    if found.is_empty() {
        term::info("No patches found, skipping...");
        return Ok(());
    }

    for patch in &found {
        let name = patch
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        term::info(&format!("Applying {name}..."));
        patches::apply(&workspace.source_dir(), patch).inspect_err(|_| {
            term::error(&format!("Failed to apply {name}"));
        })?;
        term::success(&format!("Applied {name}"));
    }

    term::success("All patches applied");
    Ok(())
}

fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(120));
    bar
}
