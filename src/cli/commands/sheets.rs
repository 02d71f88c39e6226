//! Sheets command implementation
//!
//! Lists the sheets of a workbook, marks the one extraction would use when
//! no sheet is requested, and shows where a header row was detected.

use super::shared::{RunSummary, setup_logging};
use crate::cli::args::SheetsArgs;
use crate::extraction::header_locator::find_header_row;
use crate::extraction::sheet_selector::default_sheet_name;
use crate::workbook::{CalamineReader, Workbook, WorkbookReader};
use crate::{Error, Result};
use colored::*;
use std::time::Instant;
use tracing::info;

/// Sheets command runner
pub async fn run_sheets(args: SheetsArgs) -> Result<RunSummary> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), false);
    args.validate()?;

    let input = args.input.clone();
    let workbook =
        tokio::task::spawn_blocking(move || CalamineReader.read(&input)).await??;

    if workbook.is_empty() {
        return Err(Error::no_sheets_found(workbook.source()));
    }
    info!("Workbook has {} sheets", workbook.sheets().len());

    println!(
        "{} {}",
        "Sheets in".bright_green().bold(),
        args.input.display()
    );
    for line in describe_sheets(&workbook) {
        println!("{}", line);
    }

    Ok(RunSummary {
        elapsed: start_time.elapsed(),
        ..Default::default()
    })
}

/// One line per sheet: position, name, header location, default marker
pub fn describe_sheets(workbook: &Workbook) -> Vec<String> {
    let default_name = default_sheet_name(workbook);

    workbook
        .sheets()
        .iter()
        .enumerate()
        .map(|(index, sheet)| {
            let header = match find_header_row(sheet) {
                Some(row) => format!("header at row {}", row + 1),
                None => "no header detected".to_string(),
            };
            let marker = if default_name == Some(sheet.name()) {
                " (default)"
            } else {
                ""
            };
            format!(
                "  {}. {} [{} rows, {}]{}",
                index + 1,
                sheet.name(),
                sheet.row_count(),
                header,
                marker
            )
        })
        .collect()
}
