//! Rewind - tic-tac-toe with time travel in the terminal.

use anyhow::Result;
use clap::Parser;
use rewind_tui::cli::Cli;
use rewind_tui::config::TuiConfig;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(&cli.config)?.with_overrides(&cli);

    rewind_tui::logging::init(&config)?;
    info!(config = ?config, "Configuration loaded");

    rewind_tui::run(&config)
}
