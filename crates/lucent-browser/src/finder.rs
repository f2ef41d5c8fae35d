//! Locates the compiled browser executable inside the build output tree.

use std::path::{Path, PathBuf};

use lucent_core::platform::Platform;

/// Resolves the platform-specific executable location beneath the build
/// output directory.
pub struct BrowserFinder {
    build_dir: PathBuf,
    platform: Platform,
}

impl BrowserFinder {
    pub fn new(build_dir: impl Into<PathBuf>, platform: Platform) -> Self {
        Self {
            build_dir: build_dir.into(),
            platform,
        }
    }

    /// Relative executable location beneath the build output directory.
    /// Each platform packages the binary differently: a flat `dist/bin`
    /// tree on Linux and Windows, an application bundle on macOS.
    pub fn relative_path(platform: Platform) -> PathBuf {
        match platform {
            Platform::Linux => ["dist", "bin", "firefox"].iter().collect(),
            Platform::MacOs => ["dist", "Lucent.app", "Contents", "MacOS", "firefox"]
                .iter()
                .collect(),
            Platform::Windows => ["dist", "bin", "firefox.exe"].iter().collect(),
        }
    }

    /// Where this build should have put the browser binary.
    pub fn expected_path(&self) -> PathBuf {
        self.build_dir.join(Self::relative_path(self.platform))
    }

    /// The executable, if it exists at the expected location.
    pub fn find(&self) -> Option<PathBuf> {
        let path = self.expected_path();
        path.exists().then_some(path)
    }

    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_each_platform_has_a_distinct_shape() {
        let linux = BrowserFinder::relative_path(Platform::Linux);
        let macos = BrowserFinder::relative_path(Platform::MacOs);
        let windows = BrowserFinder::relative_path(Platform::Windows);

        assert_ne!(linux, macos);
        assert_ne!(linux, windows);
        assert_ne!(macos, windows);
    }

    #[test]
    fn test_linux_path_is_dist_bin_firefox() {
        let finder = BrowserFinder::new("/b/obj-lucent", Platform::Linux);
        assert_eq!(
            finder.expected_path(),
            Path::new("/b/obj-lucent").join("dist").join("bin").join("firefox")
        );
    }

    #[test]
    fn test_macos_path_goes_through_the_app_bundle() {
        let path = BrowserFinder::relative_path(Platform::MacOs);
        let components: Vec<_> = path
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            components,
            ["dist", "Lucent.app", "Contents", "MacOS", "firefox"]
        );
    }

    #[test]
    fn test_windows_binary_has_the_exe_suffix() {
        let path = BrowserFinder::relative_path(Platform::Windows);
        assert_eq!(path.file_name().unwrap(), "firefox.exe");
    }

    #[test]
    fn test_find_requires_the_file_to_exist() {
        let dir = tempfile::tempdir().unwrap();
        let finder = BrowserFinder::new(dir.path(), Platform::Linux);
        assert!(finder.find().is_none());

        let exe = finder.expected_path();
        fs::create_dir_all(exe.parent().unwrap()).unwrap();
        fs::write(&exe, "").unwrap();
        assert_eq!(finder.find(), Some(exe));
    }
}
