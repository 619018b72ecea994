//! Clean command - remove the build output directory

use crate::cli::args::CleanArgs;
use crate::config::Config;
use crate::error::{SetupError, SetupResult};
use crate::ui::{self, UiContext};
use crate::workspace::Workspace;

/// Execute the clean command
pub async fn execute(args: CleanArgs, config: &Config) -> SetupResult<()> {
    let ctx = UiContext::detect();

    let root = std::env::current_dir()
        .map_err(|e| SetupError::io("getting current directory", e))?;
    let ws = Workspace::at(root, config);
    let build_dir = ws.build_dir();

    if !build_dir.exists() {
        ui::step_ok_detail(&ctx, "Nothing to clean", &build_dir.display().to_string());
        return Ok(());
    }

    if !ui::confirm_inline(&ctx, &format!("Remove {}?", build_dir.display()), args.yes) {
        ui::remark(&ctx, "Aborted");
        return Ok(());
    }

    tokio::fs::remove_dir_all(&build_dir)
        .await
        .map_err(|e| SetupError::io(format!("removing {}", build_dir.display()), e))?;

    ui::step_ok_detail(&ctx, "Removed", &build_dir.display().to_string());
    Ok(())
}
