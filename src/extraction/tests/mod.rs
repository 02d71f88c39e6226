//! Test utilities for the extraction pipeline
//!
//! Builds synthetic in-memory sheets and workbooks so each stage can be
//! exercised without touching real spreadsheet files.

use crate::workbook::{Sheet, Workbook};

// Test modules
mod column_resolver_tests;
mod table_tests;

/// Header row using the names most organizers use
pub const STANDARD_HEADER: &[&str] = &["Helmet", "Last Name", "First Name", "Club"];

/// Sheet with a standard header in row 0 followed by `rows`
pub fn standard_sheet(name: &str, rows: &[&[&str]]) -> Sheet {
    let mut all_rows: Vec<&[&str]> = vec![STANDARD_HEADER];
    all_rows.extend_from_slice(rows);
    Sheet::from_rows(name, &all_rows)
}

/// Workbook containing empty sheets with the given names
pub fn named_workbook(names: &[&str]) -> Workbook {
    Workbook::new(
        names
            .iter()
            .map(|name| Sheet::from_rows(*name, &[]))
            .collect(),
    )
}

/// The "Club Results" sheet: title, blank row, aliased header, three data rows
pub fn club_results_sheet() -> Sheet {
    Sheet::from_rows(
        "Club Results",
        &[
            &["Regional Cup 2024 - Round 3", "", "", ""],
            &["", "", "", ""],
            &["Helmet #", "Surname", "Given Name", "Team"],
            &["12", "Smith", "Anna", "Nordic Club"],
            &["", "", "", ""],
            &["DNF", "Jones", "Ben", "Alpine Team"],
            &["  7 ", " Lee ", " Kim ", " Racing Club "],
        ],
    )
}

/// Workbook with sheets "Info", "Club Results" and "Raw"
pub fn club_results_workbook() -> Workbook {
    Workbook::new(vec![
        Sheet::from_rows("Info", &[&["Event", "Regional Cup"], &["Date", "2024-03-02"]]),
        club_results_sheet(),
        Sheet::from_rows("Raw", &[&["dump"]]),
    ])
}
