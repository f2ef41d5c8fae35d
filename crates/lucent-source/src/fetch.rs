//! Source tree acquisition.
//!
//! Strategy is a priority fallback: a Mercurial clone of the pinned ESR
//! repository when `hg` is installed, otherwise the release tarball via
//! curl + tar. Both leave the tree rooted directly at the destination so
//! `mach` sits at its top level.

use std::fs;
use std::path::Path;
use std::process::Command;

use lucent_core::process;

use crate::{deps, Error, Result};

/// Pinned upstream release. ESR for stability.
pub const FIREFOX_VERSION: &str = "115.6.0esr";

/// Mercurial repository for the pinned ESR line.
pub const MERCURIAL_REPO: &str = "https://hg.mozilla.org/releases/mozilla-esr115";

/// Release tarball for the pinned version.
pub fn source_url() -> String {
    format!(
        "https://archive.mozilla.org/pub/firefox/releases/{FIREFOX_VERSION}/source/firefox-{FIREFOX_VERSION}.source.tar.xz"
    )
}

/// Filename the tarball is downloaded under before extraction.
pub fn tarball_name() -> String {
    format!("firefox-{FIREFOX_VERSION}.source.tar.xz")
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FetchStrategy {
    /// `hg clone` of the pinned repository.
    Clone,
    /// Download and extract the release tarball.
    Tarball,
}

/// Pick the fetch strategy from what is installed. Mercurial wins when
/// present; curl is the fallback.
pub fn strategy() -> Result<FetchStrategy> {
    if deps::tool_available("hg") {
        Ok(FetchStrategy::Clone)
    } else if deps::tool_available("curl") {
        Ok(FetchStrategy::Tarball)
    } else {
        Err(Error::NoFetchStrategy)
    }
}

/// Clone the pinned repository into `dest`. Blocks until the clone
/// finishes; several GB of history come down.
pub fn clone_source(dest: &Path) -> Result<()> {
    let mut cmd = Command::new("hg");
    cmd.arg("clone").arg(MERCURIAL_REPO).arg(dest);
    process::run_captured(cmd)?;
    Ok(())
}

/// Download the release tarball to `tarball`, extract it into `dest`, and
/// delete the archive.
pub fn download_source(dest: &Path, tarball: &Path) -> Result<()> {
    tracing::debug!("downloading {}", source_url());
    let mut curl = Command::new("curl");
    curl.args(["-L", "-f", "-s", "-S", "-o"])
        .arg(tarball)
        .arg(source_url());
    process::run_captured(curl).map_err(|e| Error::Download(e.to_string()))?;

    extract(tarball, dest)?;
    fs::remove_file(tarball)?;
    Ok(())
}

/// Unpack `tarball` into `dest`, stripping the archive's single top-level
/// directory so the tree roots at `dest` itself.
fn extract(tarball: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest)?;
    let mut tar = Command::new("tar");
    tar.arg("-xJf")
        .arg(tarball)
        .arg("-C")
        .arg(dest)
        .arg("--strip-components=1");
    process::run_captured(tar)?;
    Ok(())
}
