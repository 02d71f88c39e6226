//! Extract command implementation
//!
//! Runs the extraction pipeline on a background thread, forwards its
//! diagnostics to the log and prints a summary of the written file.

use super::shared::{RunSummary, create_spinner, print_records, setup_logging};
use crate::cli::args::ExtractArgs;
use crate::extraction::{Extraction, Extractor};
use crate::workbook::CalamineReader;
use crate::Result;
use colored::*;
use indicatif::HumanDuration;
use std::time::Instant;
use tracing::{debug, info};

/// Extract command runner
///
/// 1. Set up logging and validate arguments
/// 2. Read, extract and write on a blocking worker thread
/// 3. Report diagnostics and the result
pub async fn run_extract(args: ExtractArgs) -> Result<RunSummary> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet);
    info!("Starting participant extraction");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = args.to_config();
    debug!("Extraction configuration: {:?}", config);

    let spinner = args
        .show_progress()
        .then(|| create_spinner(&format!("Reading {}", args.input.display())));

    let input = args.input.clone();
    let result = tokio::task::spawn_blocking(move || {
        Extractor::new(CalamineReader, config).run(&input)
    })
    .await;

    if let Some(spinner) = &spinner {
        spinner.finish_and_clear();
    }

    let extraction = match result? {
        Ok(extraction) => extraction,
        Err(error) => {
            for diagnostic in error.diagnostics() {
                diagnostic.emit();
            }
            return Err(error);
        }
    };
    for diagnostic in &extraction.diagnostics {
        diagnostic.emit();
    }

    let summary = RunSummary {
        records_written: extraction.records.len(),
        output_path: extraction.output_path.clone(),
        elapsed: start_time.elapsed(),
    };

    if args.show_progress() {
        report(&extraction, &summary);
    }
    if args.show {
        print_records(&extraction.records);
    }

    Ok(summary)
}

/// Print the human-readable outcome
fn report(extraction: &Extraction, summary: &RunSummary) {
    let file_name = summary
        .output_path
        .as_ref()
        .and_then(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    println!(
        "{} Created {} with {} entries",
        "✓".bright_green().bold(),
        file_name.bright_white().bold(),
        summary.records_written.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Sheet:".bright_cyan(),
        extraction.sheet_name
    );
    match extraction.header_row {
        Some(row) => println!("  {} row {}", "Header:".bright_cyan(), row + 1),
        None => println!(
            "  {} {}",
            "Header:".bright_cyan(),
            "not detected, first row used".bright_yellow()
        ),
    }
    if let Some(path) = &summary.output_path {
        println!("  {} {}", "Output:".bright_cyan(), path.display());
    }
    println!(
        "  {} {}",
        "Time:".bright_cyan(),
        HumanDuration(summary.elapsed)
    );
}
