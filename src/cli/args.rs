//! CLI argument definitions using clap derive

use crate::config::BuildType;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// rtype-setup - development environment bootstrap for the R-Type Engine
///
/// Initializes the vcpkg submodule, bootstraps the vcpkg executable, and
/// configures and compiles the engine. Invoking with no arguments runs the
/// full bootstrap against the current directory.
#[derive(Parser, Debug)]
#[command(name = "rtype-setup")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute (defaults to bootstrap)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "RTYPE_SETUP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip project-local .rtype-setup.toml discovery
    #[arg(long, global = true)]
    pub no_local: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bootstrap the development environment and compile (the default)
    Bootstrap(BootstrapArgs),

    /// Report toolchain and repository health
    Status,

    /// Remove the build output directory
    Clean(CleanArgs),

    /// Create a project-local .rtype-setup.toml config
    Init(InitArgs),
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Bootstrap(BootstrapArgs::default())
    }
}

/// Arguments for the bootstrap command
#[derive(Parser, Debug, Default)]
pub struct BootstrapArgs {
    /// CMake build type (overrides config)
    #[arg(short = 't', long, value_enum)]
    pub build_type: Option<BuildType>,

    /// Parallel build jobs (overrides config; defaults to processor count)
    #[arg(short, long)]
    pub jobs: Option<usize>,
}

/// Arguments for the clean command
#[derive(Parser, Debug)]
pub struct CleanArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the init command
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Overwrite an existing .rtype-setup.toml
    #[arg(short, long)]
    pub force: bool,

    /// Target directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,
}
