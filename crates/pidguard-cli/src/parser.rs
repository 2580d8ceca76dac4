//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;
use pidguard_core::LOCK_DIR_ENV;

use crate::commands::Commands;

/// Single-instance guard for processes, backed by PID files.
#[derive(Parser)]
#[command(name = "pidguard")]
#[command(about = "Run commands as the single live instance of a named lock")]
#[command(version)]
pub struct Cli {
    /// Directory holding `<name>.pid` records
    #[arg(long = "lock-dir", env = LOCK_DIR_ENV, global = true)]
    pub lock_dir: Option<PathBuf>,

    /// Replace records after the liveness check instead of creating them exclusively
    #[arg(long, global = true)]
    pub overwrite: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}
