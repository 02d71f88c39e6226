//! Header row detection by fuzzy keyword matching.
//!
//! Event workbooks often carry titles, dates or blank rows above the real
//! header. Each of the first few rows is scored by how many of the four
//! keyword groups (helmet, last name, first name, club) appear somewhere in
//! its cells; the first row reaching the threshold is the header.

use crate::constants::{
    DEFAULT_HEADER_MATCH_THRESHOLD, DEFAULT_HEADER_SCAN_ROWS, header_keywords,
};
use crate::workbook::Sheet;
use tracing::{debug, trace};

/// Scoring parameters for header detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLocator {
    scan_rows: usize,
    threshold: usize,
}

impl Default for HeaderLocator {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER_SCAN_ROWS, DEFAULT_HEADER_MATCH_THRESHOLD)
    }
}

impl HeaderLocator {
    pub fn new(scan_rows: usize, threshold: usize) -> Self {
        Self {
            scan_rows,
            threshold,
        }
    }

    pub fn scan_rows(&self) -> usize {
        self.scan_rows
    }

    /// Zero-based index of the first row scoring at least the threshold
    pub fn find_header_row(&self, sheet: &Sheet) -> Option<usize> {
        let rows_to_check = self.scan_rows.min(sheet.row_count());

        for row_index in 0..rows_to_check {
            let score = score_row(sheet.row(row_index));
            trace!("Row {} of '{}' scored {}/4", row_index, sheet.name(), score);

            if score >= self.threshold {
                debug!(
                    "Header row of '{}' detected at index {} ({}/4 keyword groups)",
                    sheet.name(),
                    row_index,
                    score
                );
                return Some(row_index);
            }
        }

        debug!(
            "No header row in first {} rows of '{}'",
            rows_to_check,
            sheet.name()
        );
        None
    }
}

/// Find the header row with the default bound (20 rows) and threshold (3 of 4)
pub fn find_header_row(sheet: &Sheet) -> Option<usize> {
    HeaderLocator::default().find_header_row(sheet)
}

/// Number of keyword groups (0-4) with at least one hit among the cells
pub fn score_row(cells: &[String]) -> usize {
    let values: Vec<String> = cells
        .iter()
        .map(|cell| cell.trim())
        .filter(|cell| !cell.is_empty())
        .map(str::to_lowercase)
        .collect();

    header_keywords::GROUPS
        .iter()
        .filter(|patterns| {
            values
                .iter()
                .any(|value| patterns.iter().any(|pattern| value.contains(pattern)))
        })
        .count()
}
