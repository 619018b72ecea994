//! Host platform table
//!
//! One exhaustive mapping from the host OS to every platform-specific piece
//! of the bootstrap: bootstrap script name, vcpkg executable name, and
//! invocation style.

/// Detected host platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host {
    /// Windows - batch bootstrap script, .exe suffix, shell-mediated
    Windows,
    /// Everything else - shell bootstrap script, executed directly
    Unix,
}

impl Host {
    /// Detect the current host
    pub fn current() -> Self {
        match std::env::consts::OS {
            "windows" => Host::Windows,
            _ => Host::Unix,
        }
    }

    /// File name of the vcpkg executable the bootstrap script produces
    pub fn vcpkg_exe(self) -> &'static str {
        match self {
            Host::Windows => "vcpkg.exe",
            Host::Unix => "vcpkg",
        }
    }

    /// File name of the vcpkg bootstrap script
    pub fn bootstrap_script(self) -> &'static str {
        match self {
            Host::Windows => "bootstrap-vcpkg.bat",
            Host::Unix => "bootstrap-vcpkg.sh",
        }
    }

    /// Whether the bootstrap script needs a shell to run it
    ///
    /// Batch files are not executable images; `cmd /C` runs them. Shell
    /// scripts carry a shebang and run directly.
    pub fn shell_mediated(self) -> bool {
        matches!(self, Host::Windows)
    }

    /// Human-readable platform name
    pub fn name(self) -> &'static str {
        match self {
            Host::Windows => "Windows",
            Host::Unix => "Unix",
        }
    }
}
