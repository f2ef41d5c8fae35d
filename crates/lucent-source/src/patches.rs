//! Local patch application over the fetched tree.
//!
//! Patches are applied one at a time with `git apply`; the first failure
//! stops the run and already-applied patches stay applied.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use lucent_core::process;

use crate::{Error, Result};

/// The `*.patch` files in `dir`, ordered lexicographically by filename so
/// application order is deterministic. A missing directory is an empty set.
pub fn patch_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut patches: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "patch"))
        .collect();
    patches.sort();
    Ok(patches)
}

/// Apply one patch with the source tree as working directory.
pub fn apply(source_dir: &Path, patch: &Path) -> Result<()> {
    let name = patch
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| patch.display().to_string());

    // git runs inside the tree, so the patch path must stay valid from there
    let patch = patch.canonicalize()?;

    let mut cmd = Command::new("git");
    cmd.current_dir(source_dir).arg("apply").arg(&patch);
    process::run_captured(cmd).map_err(|source| Error::Patch { name, source })
}
