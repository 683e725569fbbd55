//! Command-line interface for rewind.

use clap::Parser;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a move history you can jump back into
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional; defaults apply if missing)
    #[arg(short, long, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. "debug" or "rewind_tictactoe=trace"
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Start with the move list newest first
    #[arg(long)]
    pub descending: bool,
}
