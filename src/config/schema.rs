//! Configuration schema for rtype-setup
//!
//! Stored at `~/.config/rtype-setup/config.toml`, optionally overlaid by a
//! project-local `.rtype-setup.toml`.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Build tree settings
    pub build: BuildConfig,

    /// Vendored dependency manager settings
    pub vcpkg: VcpkgConfig,
}

/// Build tree configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Build output directory, relative to the repository root
    pub dir: PathBuf,

    /// CMake build type
    #[serde(rename = "type")]
    pub build_type: BuildType,

    /// Parallel build jobs (unset means the host's processor count)
    pub jobs: Option<usize>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("build"),
            build_type: BuildType::Debug,
            jobs: None,
        }
    }
}

/// Vendored vcpkg checkout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VcpkgConfig {
    /// vcpkg submodule directory, relative to the repository root
    pub dir: PathBuf,
}

impl Default for VcpkgConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("vcpkg"),
        }
    }
}

/// CMake build type, passed to both the configure and the build step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum BuildType {
    #[default]
    Debug,
    Release,
    RelWithDebInfo,
    MinSizeRel,
}

impl BuildType {
    /// The exact spelling CMake expects
    pub fn as_cmake(self) -> &'static str {
        match self {
            BuildType::Debug => "Debug",
            BuildType::Release => "Release",
            BuildType::RelWithDebInfo => "RelWithDebInfo",
            BuildType::MinSizeRel => "MinSizeRel",
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_cmake())
    }
}
