//! Command implementations for the roster processor CLI
//!
//! Main command execution logic, progress reporting and error handling for
//! the CLI interface. Each command is implemented in its own module.

pub mod blacklist;
pub mod export;
pub mod inspect;
pub mod shared;

// Re-export the main types and functions for backward compatibility
pub use shared::PipelineStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the roster processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `export`: full pipeline ending in a rendered roster workbook
/// - `inspect`: source summary without output files
/// - `blacklist`: export of unattended/invalid rows
pub async fn run(args: Args) -> Result<PipelineStats> {
    match args.get_command() {
        Commands::Export(export_args) => export::run_export(export_args).await,
        Commands::Inspect(inspect_args) => inspect::run_inspect(inspect_args).await,
        Commands::Blacklist(blacklist_args) => blacklist::run_blacklist(blacklist_args).await,
    }
}
