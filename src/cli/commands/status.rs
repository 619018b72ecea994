//! Status command - read-only toolchain and repository health report

use crate::config::Config;
use crate::error::{SetupError, SetupResult};
use crate::exec;
use crate::toolchain::Host;
use crate::ui::{self, UiContext};
use crate::workspace::Workspace;

/// Execute the status command
///
/// Reports, never mutates. A missing tool shows as a warning but the
/// command itself still succeeds; the report is the product.
pub async fn execute(config: &Config) -> SetupResult<()> {
    let ctx = UiContext::detect();
    ui::intro(&ctx, "R-Type Engine Environment Status");

    let host = Host::current();
    ui::section(&ctx, "Platform");
    ui::step_ok_detail(&ctx, host.name(), std::env::consts::OS);

    ui::section(&ctx, "Toolchain");
    let mut ready = true;
    ready &= report_tool(&ctx, "git", "Install git").await;
    ready &= report_tool(&ctx, "cmake", "Install CMake 3.21 or newer").await;

    let root = std::env::current_dir()
        .map_err(|e| SetupError::io("getting current directory", e))?;
    let ws = Workspace::at(root, config);

    ui::section(&ctx, "Repository");
    if ws.vcpkg_marker().exists() {
        ui::step_ok_detail(&ctx, "vcpkg submodule", "initialized");
    } else {
        ready = false;
        ui::step_warn_hint(&ctx, "vcpkg submodule not initialized", "run: rtype-setup");
    }

    if ws.vcpkg_exe(host).exists() {
        ui::step_ok_detail(&ctx, "vcpkg executable", host.vcpkg_exe());
    } else {
        ready = false;
        ui::step_warn_hint(&ctx, "vcpkg not bootstrapped", "run: rtype-setup");
    }

    if ws.cache_marker().exists() {
        ui::step_ok_detail(
            &ctx,
            "build tree",
            &format!("configured in '{}'", ws.build_dir_arg().display()),
        );
    } else {
        ready = false;
        ui::step_warn_hint(&ctx, "build tree not configured", "run: rtype-setup");
    }

    if ready {
        ui::outro_success(&ctx, "Environment ready");
    } else {
        ui::outro_warn(&ctx, "Environment incomplete - run 'rtype-setup' to bootstrap");
    }

    Ok(())
}

async fn report_tool(ctx: &UiContext, name: &str, hint: &str) -> bool {
    match exec::version_line(name).await {
        Some(version) => {
            ui::step_ok_detail(ctx, name, &version);
            true
        }
        None => {
            ui::step_warn_hint(ctx, &format!("{} not found", name), hint);
            false
        }
    }
}
