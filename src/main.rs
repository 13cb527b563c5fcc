use std::process::ExitCode;

use clap::Parser;
use tracing::{error, warn};

use actor_roster_lib::cli::Cli;
use actor_roster_lib::commands::{self, CommandContext};
use actor_roster_lib::infrastructure::{ConfigManager, init_logging_with_config};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // Logging may not be installed yet
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let manager = match &cli.config {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new()?,
    };
    let loaded = manager.load_config().await?;
    init_logging_with_config(&loaded.config.logging)?;
    if let Some(recovery) = &loaded.recovery {
        recovery.log();
    }

    let context = CommandContext::open(&loaded.config.database).await?;

    match context.dispatch(cli.command).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            if e.is_terminal() {
                warn!("Command rejected: {}", e);
            } else {
                error!("Command failed: {}", e);
            }
            Ok(ExitCode::from(commands::exit_code(&e)))
        }
    }
}
