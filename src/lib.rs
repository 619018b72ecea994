//! rtype-setup - development environment bootstrap for the R-Type Engine
//!
//! Orchestrates git, the vcpkg bootstrap script, and CMake to take a fresh
//! checkout to a compiled state. Idempotent: each stage is skipped when its
//! filesystem marker says the work is already done.

pub mod cli;
pub mod config;
pub mod error;
pub mod exec;
pub mod toolchain;
pub mod ui;
pub mod workspace;

pub use error::{SetupError, SetupResult};
