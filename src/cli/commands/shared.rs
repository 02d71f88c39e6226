//! Shared components for CLI commands
//!
//! Logging setup, progress spinner and terminal output used by more than
//! one command.

use crate::models::ParticipantRecord;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Outcome of a command, for the exit path in `main`
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of participant records written
    pub records_written: usize,
    /// File written, if the command writes one
    pub output_path: Option<PathBuf>,
    /// Wall time of the command
    pub elapsed: Duration,
}

/// Set up structured logging.
///
/// `RUST_LOG` takes precedence over the level derived from CLI flags.
pub fn setup_logging(log_level: &str, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ppl_extractor={}", log_level)));

    // try_init: a second command in the same process (tests) keeps the first subscriber
    let result = if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if result.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}

/// Spinner shown while the workbook is decoded and processed
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Render records as an aligned text table
pub fn format_records_table(records: &[ParticipantRecord]) -> String {
    const HEADERS: [&str; 4] = ["Helmet", "Last Name", "First Name", "Club"];

    let rows: Vec<[String; 4]> = records
        .iter()
        .map(|record| {
            [
                record.helmet.to_string(),
                record.last_name.clone(),
                record.first_name.clone(),
                record.club.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: [&str; 4]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_line(HEADERS)];
    lines.push(format_line(widths.map(|width| "-".repeat(width)).each_ref().map(String::as_str)));
    for row in &rows {
        lines.push(format_line(row.each_ref().map(String::as_str)));
    }
    lines.join("\n")
}

/// Print the records table to stdout
pub fn print_records(records: &[ParticipantRecord]) {
    if records.is_empty() {
        println!("{}", "No participant records extracted".bright_yellow());
        return;
    }
    println!();
    println!("{}", format_records_table(records));
    println!();
}
