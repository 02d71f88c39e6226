//! Turning a raw sheet grid into a table with named columns.

use crate::constants::SYNTHETIC_COLUMN_PREFIX;
use crate::workbook::Sheet;
use tracing::debug;

/// Named columns plus data rows, every row exactly `columns.len()` long
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl NormalizedTable {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Build a table using `header_row` as column names and every later row as
/// data. Without a usable header row the first row of the sheet is used.
///
/// Rows are not filtered here; blank and partial rows pass through, padded
/// with empty strings to the column count.
pub fn normalize(sheet: &Sheet, header_row: Option<usize>) -> NormalizedTable {
    let header_index = match header_row {
        Some(index) if index < sheet.row_count() => index,
        Some(index) => {
            debug!(
                "Header index {} outside '{}' ({} rows), using first row",
                index,
                sheet.name(),
                sheet.row_count()
            );
            0
        }
        None => 0,
    };

    if sheet.row_count() == 0 {
        return NormalizedTable::default();
    }

    let column_count = sheet.column_count();

    let columns = (0..column_count)
        .map(|column| {
            let name = sheet.cell(header_index, column).trim();
            if name.is_empty() {
                format!("{}{}", SYNTHETIC_COLUMN_PREFIX, column + 1)
            } else {
                name.to_string()
            }
        })
        .collect();

    let rows = ((header_index + 1)..sheet.row_count())
        .map(|row| {
            (0..column_count)
                .map(|column| sheet.cell(row, column).to_string())
                .collect()
        })
        .collect();

    NormalizedTable { columns, rows }
}
