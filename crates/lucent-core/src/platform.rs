//! Host platform model.
//!
//! The three supported platforms differ in two ways: where the compiled
//! browser lands inside the build output directory, and whether mach can be
//! driven directly (Windows builds happen inside the MozillaBuild shell, so
//! the tool prints instructions there instead of spawning mach).

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Linux
        }
    }

    /// True when mach must be run manually inside the MozillaBuild shell.
    pub fn uses_build_shell(self) -> bool {
        matches!(self, Self::Windows)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::MacOs => "macos",
            Self::Windows => "windows",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
