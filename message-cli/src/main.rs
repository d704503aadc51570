//! msgstore CLI: get, list, post, edit and delete messages. Config from env and optional CLI args.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use message_cli::{execute, exit_code, init_tracing, AppConfig, Cli, OutputFormat};
use message_store::MessageStore;
use tracing::error;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.database_url)?;
    init_tracing(&config.log_file)
        .with_context(|| format!("Open log file {}", config.log_file))?;

    let store = MessageStore::connect(&config.database_url)
        .await
        .with_context(|| format!("Connect to {}", config.database_url))?;

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Table
    };

    let mut stdout = std::io::stdout().lock();
    // Logged once here; anyhow would print a returned error a second time.
    if let Err(e) = execute(&store, cli.command, format, &mut stdout).await {
        error!("{:#}", e);
        return Ok(ExitCode::from(exit_code(&e)));
    }

    Ok(ExitCode::SUCCESS)
}
