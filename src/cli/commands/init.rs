//! Init command - create a project-local .rtype-setup.toml

use crate::cli::args::InitArgs;
use crate::config::LOCAL_CONFIG_NAME;
use crate::error::{SetupError, SetupResult};
use crate::ui::{self, UiContext};
use tokio::fs;

/// Template for project-local config
const INIT_TEMPLATE: &str = r#"# R-Type Engine build configuration
# Settings here override the global config (~/.config/rtype-setup/config.toml)

[build]
# dir = "build"
# type = "Debug"          # Debug, Release, RelWithDebInfo, MinSizeRel
# jobs = 8

[vcpkg]
# dir = "vcpkg"
"#;

/// Execute the init command
pub async fn execute(args: InitArgs) -> SetupResult<()> {
    let ctx = UiContext::detect();

    let target_dir = match args.path {
        Some(ref p) => p.clone(),
        None => std::env::current_dir()
            .map_err(|e| SetupError::io("getting current directory", e))?,
    };

    let config_path = target_dir.join(LOCAL_CONFIG_NAME);

    if config_path.exists() && !args.force {
        return Err(SetupError::User(format!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        )));
    }

    if !target_dir.exists() {
        fs::create_dir_all(&target_dir)
            .await
            .map_err(|e| SetupError::io(format!("creating directory {}", target_dir.display()), e))?;
    }

    fs::write(&config_path, INIT_TEMPLATE)
        .await
        .map_err(|e| SetupError::io(format!("writing {}", config_path.display()), e))?;

    ui::step_ok_detail(
        &ctx,
        "Created project config",
        &config_path.display().to_string(),
    );

    Ok(())
}
