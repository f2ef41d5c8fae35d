//! The fixed filesystem layout shared by the setup, build, and run commands.
//!
//! Everything is addressed relative to a single project root: the fetched
//! Firefox tree, the templates the tool copies into it, and the runtime
//! profile. The commands never coordinate directly, only through the
//! presence of these paths on disk.

use std::path::{Path, PathBuf};

/// Directory the Firefox checkout is fetched into.
pub const SOURCE_DIR: &str = "firefox-source";

/// Build output directory created by mach inside the source tree.
pub const OBJ_DIR: &str = "obj-lucent";

/// Runtime profile directory assembled on each launch.
pub const PROFILE_DIR: &str = "lucent-profile";

#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The fetched Firefox source tree.
    pub fn source_dir(&self) -> PathBuf {
        self.root.join(SOURCE_DIR)
    }

    /// The build configuration inside the source tree. Its presence gates
    /// the build command.
    pub fn mozconfig(&self) -> PathBuf {
        self.source_dir().join("mozconfig")
    }

    /// Build output directory. Its presence gates the run command.
    pub fn build_dir(&self) -> PathBuf {
        self.source_dir().join(OBJ_DIR)
    }

    /// Where mach drops packaged artifacts.
    pub fn dist_dir(&self) -> PathBuf {
        self.build_dir().join("dist")
    }

    pub fn mozconfig_template(&self) -> PathBuf {
        self.root.join("configs").join("mozconfig")
    }

    pub fn user_js_template(&self) -> PathBuf {
        self.root.join("configs").join("user.js")
    }

    pub fn user_chrome_template(&self) -> PathBuf {
        self.root.join("chrome").join("userChrome.css")
    }

    pub fn user_content_template(&self) -> PathBuf {
        self.root.join("chrome").join("userContent.css")
    }

    /// Local patch set applied over the fetched tree.
    pub fn patches_dir(&self) -> PathBuf {
        self.root.join("patches")
    }

    pub fn profile_dir(&self) -> PathBuf {
        self.root.join(PROFILE_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_rooted() {
        let ws = Workspace::new("/work/lucent");
        assert_eq!(ws.source_dir(), PathBuf::from("/work/lucent/firefox-source"));
        assert_eq!(
            ws.build_dir(),
            PathBuf::from("/work/lucent/firefox-source/obj-lucent")
        );
        assert_eq!(
            ws.mozconfig(),
            PathBuf::from("/work/lucent/firefox-source/mozconfig")
        );
        assert_eq!(ws.profile_dir(), PathBuf::from("/work/lucent/lucent-profile"));
    }

    #[test]
    fn test_templates_live_outside_the_source_tree() {
        let ws = Workspace::new(".");
        assert!(!ws.mozconfig_template().starts_with(ws.source_dir()));
        assert!(!ws.user_js_template().starts_with(ws.source_dir()));
        assert!(!ws.patches_dir().starts_with(ws.source_dir()));
    }
}
