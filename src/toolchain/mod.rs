//! External build toolchain wrappers
//!
//! Thin, fatal-on-failure wrappers around the tools the bootstrap drives:
//! git for the submodule checkout, the vcpkg bootstrap script, and cmake
//! for configuration and compilation.

pub mod cmake;
pub mod git;
mod host;
pub mod vcpkg;

pub use host::Host;
