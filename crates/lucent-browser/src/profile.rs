//! Assembles the Lucent runtime profile from template files.
//!
//! The profile is rebuilt on every launch: templates overwrite whatever is
//! already there, and a template missing from the repo is skipped rather
//! than treated as an error. Assembling twice with unchanged templates
//! yields a byte-identical profile.

use std::fs;
use std::path::PathBuf;

use lucent_core::workspace::Workspace;

use crate::Result;

pub struct ProfileBuilder<'a> {
    workspace: &'a Workspace,
}

impl<'a> ProfileBuilder<'a> {
    pub fn new(workspace: &'a Workspace) -> Self {
        Self { workspace }
    }

    /// Ensure the profile directory tree exists and copy every available
    /// template over it. Returns the destination files actually written.
    pub fn assemble(&self) -> Result<Vec<PathBuf>> {
        let profile = self.workspace.profile_dir();
        let chrome = profile.join("chrome");
        fs::create_dir_all(&chrome)?;

        let copies = [
            (self.workspace.user_js_template(), profile.join("user.js")),
            (
                self.workspace.user_chrome_template(),
                chrome.join("userChrome.css"),
            ),
            (
                self.workspace.user_content_template(),
                chrome.join("userContent.css"),
            ),
        ];

        let mut written = Vec::new();
        for (src, dst) in copies {
            if src.exists() {
                fs::copy(&src, &dst)?;
                written.push(dst);
            } else {
                tracing::debug!("template {} not present, skipping", src.display());
            }
        }
        Ok(written)
    }
}
