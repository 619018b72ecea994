//! rtype-setup - R-Type Engine development environment bootstrap
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use rtype_setup::cli::{commands, Cli, Commands};
use rtype_setup::config::ConfigManager;
use rtype_setup::error::{SetupError, SetupResult};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run() -> SetupResult<()> {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("rtype_setup=warn"),
        1 => EnvFilter::new("rtype_setup=info"),
        _ => EnvFilter::new("rtype_setup=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // No subcommand means a full bootstrap
    let command = cli.command.unwrap_or_default();

    // Init command doesn't need config loading
    let command = match command {
        Commands::Init(args) => return commands::init(args).await,
        other => other,
    };

    // Load configuration
    let config_manager = match cli.config {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new(),
    };

    // Find local config unless --no-local is set
    let local_config_path = if cli.no_local {
        debug!("local config discovery disabled (--no-local)");
        None
    } else {
        let cwd = std::env::current_dir()
            .map_err(|e| SetupError::io("getting current directory", e))?;
        let found = ConfigManager::find_local_config(&cwd);
        if let Some(ref path) = found {
            debug!("found local config: {}", path.display());
        }
        found
    };

    let config = config_manager
        .load_merged(local_config_path.as_deref())
        .await?;

    // Dispatch to command
    match command {
        Commands::Init(_) => unreachable!("init handled above"),
        Commands::Bootstrap(args) => commands::bootstrap(args, &config).await,
        Commands::Status => commands::status(&config).await,
        Commands::Clean(args) => commands::clean(args, &config).await,
    }
}
