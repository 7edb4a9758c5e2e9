//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `whois_history` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All API functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use whois_history::cli::{Cli, Command};
use whois_history::initialization::init_logger_with;
use whois_history::ApiClient;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine: the key may come from the flag or the environment
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = cli.config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let client = ApiClient::from_config(&config).context("Failed to initialize API client")?;

    match run(&client, &cli).await {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("whois_history error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Executes the selected subcommand and renders its result for stdout.
async fn run(client: &ApiClient, cli: &Cli) -> Result<String> {
    let lookup = cli.lookup();
    let options = lookup.search_options();

    match &cli.command {
        Command::Preview(_) => {
            let count = client
                .preview(&lookup.domain_name, &options)
                .await
                .with_context(|| format!("Preview failed for {}", lookup.domain_name))?;
            Ok(count.to_string())
        }
        Command::Purchase(_) => {
            let records = client
                .purchase(&lookup.domain_name, &options)
                .await
                .with_context(|| format!("Purchase failed for {}", lookup.domain_name))?;
            serde_json::to_string_pretty(&records).context("Failed to serialize records")
        }
    }
}
