//! Storefront CLI binary.
//!
//! This binary provides command-line access to the catalog:
//! - Browse and edit it in a terminal UI
//! - List, refresh, add to and prune it from scripts
//! - Print the top-rated chart
//!
//! The exit status is non-zero when any fetch or snapshot write failed.

use clap::Parser;
use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, handle_command, init_logging};

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = storefront::StorefrontConfig::load(cli.config.as_deref())?;

    // The TUI owns the terminal, so its logs go to a file
    let log_dir = match cli.command {
        Commands::Tui => Some(config.data_dir()?),
        _ => None,
    };
    let _log_guard = init_logging(cli.verbose, log_dir.as_deref())?;

    let failures = handle_command(cli.command, &config).await?;
    if failures > 0 {
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
