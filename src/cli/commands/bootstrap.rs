//! Bootstrap command - take a fresh checkout to a compiled state
//!
//! A strict linear sequence of stages. Conditional stages are skipped when
//! their filesystem marker says the work is already done; every other
//! failure aborts immediately, except the stale-cache cleanup which only
//! warns.

use crate::cli::args::BootstrapArgs;
use crate::config::Config;
use crate::error::{SetupError, SetupResult};
use crate::toolchain::{cmake, git, vcpkg, Host};
use crate::ui::{self, UiContext};
use crate::workspace::{BootstrapPlan, Workspace};
use tracing::{debug, info, warn};

/// Execute the bootstrap command
pub async fn execute(args: BootstrapArgs, config: &Config) -> SetupResult<()> {
    let ctx = UiContext::detect();
    ui::intro(&ctx, "R-Type Engine Bootstrap");

    let root = std::env::current_dir()
        .map_err(|e| SetupError::io("getting current directory", e))?;
    let ws = Workspace::at(root, config);
    let host = Host::current();

    let build_type = args.build_type.unwrap_or(config.build.build_type);
    let jobs = args
        .jobs
        .or(config.build.jobs)
        .unwrap_or_else(cmake::default_jobs);
    info!("build type {build_type}, {jobs} jobs");

    let plan = BootstrapPlan::assess(&ws, host);
    debug!(?plan, "assessed repository state");

    // 1. Dependency-manager acquisition
    if plan.fetch_submodule {
        ui::section(&ctx, "Initializing vcpkg submodule...");
        git::submodule_update(ws.root()).await?;
        ui::step_ok(&ctx, "vcpkg submodule initialized");
    } else {
        ui::step_ok_detail(&ctx, "vcpkg submodule", "already initialized");
    }

    // 2. Dependency-manager bootstrap
    if plan.bootstrap_vcpkg {
        ui::section(
            &ctx,
            &format!("Bootstrapping vcpkg with {}...", host.bootstrap_script()),
        );
        vcpkg::bootstrap(&ws.vcpkg_dir(), host).await?;
        ui::step_ok(&ctx, "vcpkg bootstrapped");
    } else {
        ui::step_ok_detail(&ctx, "vcpkg executable", "already built");
    }

    // 3. Stale-cache cleanup, the only non-fatal stage
    if plan.clear_build_tree {
        ui::section(&ctx, "Stale CMake cache detected, removing build directory...");
        match tokio::fs::remove_dir_all(ws.build_dir()).await {
            Ok(()) => ui::step_ok(&ctx, "Build directory removed"),
            Err(e) => {
                warn!(dir = %ws.build_dir().display(), error = %e, "could not remove build directory");
                ui::step_warn_detail(&ctx, "Could not remove build directory", &e.to_string());
            }
        }
    }

    // 4. Directory preparation
    tokio::fs::create_dir_all(ws.build_dir())
        .await
        .map_err(|e| SetupError::io(format!("creating {}", ws.build_dir().display()), e))?;

    // 5. Build configuration
    ui::section(&ctx, "Configuring CMake...");
    cmake::configure(&ws, build_type).await?;

    // 6. Compilation
    ui::section(&ctx, "Building targets...");
    cmake::build(&ws, build_type, jobs).await?;

    // 7. Success report
    let lib_dir = ws.build_dir_arg().join("lib");
    let bin_dir = ws.build_dir_arg().join("bin");
    ui::step_info(
        &ctx,
        &format!("Core library compiled in '{}'", lib_dir.display()),
    );
    ui::step_info(
        &ctx,
        &format!(
            "Executables will appear in '{}' once client/ or server/ sources are built",
            bin_dir.display()
        ),
    );
    ui::outro_success(&ctx, "Bootstrap complete");

    Ok(())
}
