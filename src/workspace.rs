//! Repository layout and bootstrap planning
//!
//! `Workspace` resolves the paths the bootstrap touches; `BootstrapPlan`
//! derives the skip-or-execute decision for each conditional stage from
//! filesystem probes, once, before any command runs.

use crate::config::Config;
use crate::toolchain::Host;
use std::path::{Path, PathBuf};

/// Paths inside the repository being bootstrapped
///
/// The build and vcpkg directories are kept as configured (normally
/// relative names like `build`), so echoed command lines stay short;
/// filesystem probes join them onto the root.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    build_dir: PathBuf,
    vcpkg_dir: PathBuf,
}

impl Workspace {
    pub fn at(root: PathBuf, config: &Config) -> Self {
        Self {
            build_dir: config.build.dir.clone(),
            vcpkg_dir: config.vcpkg.dir.clone(),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute build output directory
    pub fn build_dir(&self) -> PathBuf {
        self.root.join(&self.build_dir)
    }

    /// Build directory exactly as configured, for command lines
    pub fn build_dir_arg(&self) -> &Path {
        &self.build_dir
    }

    /// Absolute vendored vcpkg directory
    pub fn vcpkg_dir(&self) -> PathBuf {
        self.root.join(&self.vcpkg_dir)
    }

    /// Marker proving the vcpkg submodule is checked out
    pub fn vcpkg_marker(&self) -> PathBuf {
        self.vcpkg_dir().join("README.md")
    }

    /// Platform-specific vcpkg executable produced by its bootstrap script
    pub fn vcpkg_exe(&self, host: Host) -> PathBuf {
        self.vcpkg_dir().join(host.vcpkg_exe())
    }

    /// Toolchain file handed to the CMake configure step
    pub fn toolchain_file(&self) -> PathBuf {
        self.vcpkg_dir()
            .join("scripts")
            .join("buildsystems")
            .join("vcpkg.cmake")
    }

    /// Marker proving a prior configure ran in the build directory
    pub fn cache_marker(&self) -> PathBuf {
        self.build_dir().join("CMakeCache.txt")
    }
}

/// Skip-or-execute decisions for the conditional bootstrap stages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapPlan {
    /// vcpkg marker absent: the submodule needs fetching
    pub fetch_submodule: bool,
    /// vcpkg executable absent: its bootstrap script needs to run
    pub bootstrap_vcpkg: bool,
    /// Build cache present but stale: the build tree must be deleted
    pub clear_build_tree: bool,
}

impl BootstrapPlan {
    pub fn assess(ws: &Workspace, host: Host) -> Self {
        Self {
            fetch_submodule: !ws.vcpkg_marker().exists(),
            bootstrap_vcpkg: !ws.vcpkg_exe(host).exists(),
            clear_build_tree: cache_is_stale(&ws.cache_marker(), &ws.toolchain_file()),
        }
    }

    /// True when every stage can be skipped
    pub fn is_noop(&self) -> bool {
        !self.fetch_submodule && !self.bootstrap_vcpkg && !self.clear_build_tree
    }
}

/// Decide whether an existing build cache must be thrown away
///
/// Stale means: the marker exists but its recorded toolchain file entry is
/// absent, unreadable, or different from the one this run configures with.
/// A matching cache is current and the build tree survives, which keeps a
/// second run of the bootstrap free of destructive work.
fn cache_is_stale(marker: &Path, expected_toolchain: &Path) -> bool {
    let content = match std::fs::read_to_string(marker) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return false,
        Err(_) => return true,
    };

    match cached_toolchain(&content) {
        Some(recorded) => !paths_equivalent(&recorded, expected_toolchain),
        None => true,
    }
}

/// Extract the CMAKE_TOOLCHAIN_FILE entry from CMakeCache.txt content
///
/// Cache entries are `KEY:TYPE=VALUE` lines.
fn cached_toolchain(cache: &str) -> Option<String> {
    cache.lines().find_map(|line| {
        let (key, value) = line.split_once('=')?;
        let name = key.split(':').next()?;
        (name == "CMAKE_TOOLCHAIN_FILE").then(|| value.trim().to_string())
    })
}

/// Compare a cache-recorded path with an expected one
///
/// CMake writes forward slashes even on Windows; compare separator-blind.
fn paths_equivalent(recorded: &str, expected: &Path) -> bool {
    let normalize = |s: &str| s.replace('\\', "/");
    normalize(recorded) == normalize(&expected.display().to_string())
}
