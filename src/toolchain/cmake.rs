//! CMake configure and build invocations
//!
//! Always manual flags: explicit source/build dirs and toolchain file at
//! configure time, explicit `--config`/`--parallel` at build time. No
//! preset detection, one deterministic invocation on every host.

use crate::config::BuildType;
use crate::error::SetupResult;
use crate::exec::{self, CommandLine};
use crate::workspace::Workspace;

/// Generate the build tree
///
/// Source dir is `.` (the command runs in the repository root); the
/// toolchain file points CMake at the vcpkg-provided libraries.
pub async fn configure(ws: &Workspace, build_type: BuildType) -> SetupResult<()> {
    exec::run(
        &CommandLine::new("cmake")
            .args(["-S", "."])
            .arg("-B")
            .arg(ws.build_dir_arg().display().to_string())
            .arg(format!("-DCMAKE_BUILD_TYPE={}", build_type.as_cmake()))
            .arg(format!(
                "-DCMAKE_TOOLCHAIN_FILE={}",
                ws.toolchain_file().display()
            ))
            .cwd(ws.root()),
    )
    .await
}

/// Drive compilation of the generated build tree
///
/// `--config` matters only on multi-config generators and is ignored
/// elsewhere; `--parallel` is the only parallelism this tool ever requests.
pub async fn build(ws: &Workspace, build_type: BuildType, jobs: usize) -> SetupResult<()> {
    exec::run(
        &CommandLine::new("cmake")
            .arg("--build")
            .arg(ws.build_dir_arg().display().to_string())
            .args(["--config", build_type.as_cmake()])
            .arg("--parallel")
            .arg(jobs.to_string())
            .cwd(ws.root()),
    )
    .await
}

/// Parallelism hint when neither a flag nor the config names one
pub fn default_jobs() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
