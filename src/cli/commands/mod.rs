//! Command implementations for the participant extractor CLI
//!
//! Each command lives in its own module; shared logging and reporting
//! helpers are in `shared`.

pub mod extract;
pub mod sheets;
pub mod shared;

pub use shared::RunSummary;

use crate::Result;
use crate::cli::args::Commands;

/// Dispatch to the handler for the given subcommand
pub async fn run(command: Commands) -> Result<RunSummary> {
    match command {
        Commands::Extract(extract_args) => extract::run_extract(extract_args).await,
        Commands::Sheets(sheets_args) => sheets::run_sheets(sheets_args).await,
    }
}
