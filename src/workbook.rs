//! Workbook access behind a narrow grid-of-strings interface.
//!
//! The extraction pipeline only ever sees [`Workbook`] and [`Sheet`]: ordered,
//! named grids of string cells. Decoding a real spreadsheet file into that
//! shape is the job of a [`WorkbookReader`]; [`CalamineReader`] is the
//! production implementation, tests build grids in memory.

use crate::{Error, Result};
use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;
use tracing::{debug, trace};

/// A single named grid of string cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    name: String,
    rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Build a sheet from string slices, mostly useful for tests
    pub fn from_rows(name: impl Into<String>, rows: &[&[&str]]) -> Self {
        let rows = rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();
        Self::new(name, rows)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Cell value, or `""` when the position lies outside the stored row
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Raw cells of one row, possibly shorter than `column_count()`
    pub fn row(&self, row: usize) -> &[String] {
        self.rows.get(row).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Ordered collection of sheets decoded from one file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workbook {
    source: String,
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// Build an in-memory workbook
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self::with_source("<memory>", sheets)
    }

    /// Build a workbook remembering where it was read from
    pub fn with_source(source: impl Into<String>, sheets: Vec<Sheet>) -> Self {
        Self {
            source: source.into(),
            sheets,
        }
    }

    /// Path (or label) the workbook was decoded from
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(Sheet::name).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

/// Source of decoded workbooks
pub trait WorkbookReader {
    fn read(&self, path: &Path) -> Result<Workbook>;
}

/// Reads `.xls`, `.xlsx`, `.xlsm`, `.xlsb` and `.ods` files through calamine
#[derive(Debug, Clone, Copy, Default)]
pub struct CalamineReader;

impl WorkbookReader for CalamineReader {
    fn read(&self, path: &Path) -> Result<Workbook> {
        if !path.is_file() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let mut workbook = open_workbook_auto(path)
            .map_err(|e| Error::workbook_read(path.display().to_string(), e))?;

        let sheet_names = workbook.sheet_names().to_vec();
        let mut sheets = Vec::with_capacity(sheet_names.len());

        for sheet_name in sheet_names {
            let range = workbook
                .worksheet_range(&sheet_name)
                .map_err(|e| Error::workbook_read(path.display().to_string(), e))?;

            let rows = range_to_rows(&range);
            trace!(
                "Decoded sheet '{}' with {} rows from {}",
                sheet_name,
                rows.len(),
                path.display()
            );
            sheets.push(Sheet::new(sheet_name, rows));
        }

        debug!("Read {} sheets from {}", sheets.len(), path.display());
        Ok(Workbook::with_source(path.display().to_string(), sheets))
    }
}

/// Convert a calamine range into absolute rows.
///
/// calamine trims leading empty rows and columns; they are restored here so
/// row indexes match the sheet as the user sees it.
fn range_to_rows(range: &calamine::Range<Data>) -> Vec<Vec<String>> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };
    let leading_cols = start_col as usize;

    let mut rows: Vec<Vec<String>> = vec![Vec::new(); start_row as usize];
    for row in range.rows() {
        let mut cells = vec![String::new(); leading_cols];
        cells.extend(row.iter().map(cell_to_string));
        rows.push(cells);
    }
    rows
}

/// Render a decoded cell as text.
///
/// Whole floats lose their fractional part so a helmet typed as `12`
/// reads back as `"12"`, not `"12.0"`.
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(_) | Data::Empty => String::new(),
    }
}
