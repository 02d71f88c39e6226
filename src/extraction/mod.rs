//! Participant extraction pipeline
//!
//! Stages, each a pure function of the previous stage's output:
//!
//! 1. [`sheet_selector`] picks the sheet
//! 2. [`header_locator`] finds the header row below any preamble
//! 3. [`table`] builds a named-column table (first row as fallback header)
//! 4. [`column_resolver`] binds helmet/last/first/club via alias lists
//! 5. [`record_extractor`] filters rows and parses helmet numbers
//!
//! [`Extractor`] wires the stages together with a [`WorkbookReader`] and the
//! delimited writer, collecting [`Diagnostic`]s along the way.

pub mod column_resolver;
pub mod diagnostics;
pub mod header_locator;
pub mod record_extractor;
pub mod sheet_selector;
pub mod table;

#[cfg(test)]
mod tests;

pub use column_resolver::{BoundColumns, ColumnBinding, resolve_columns};
pub use diagnostics::{Diagnostic, SelectionReason};
pub use header_locator::{HeaderLocator, find_header_row};
pub use record_extractor::{RowOutcome, extract};
pub use sheet_selector::{SheetSelection, select_sheet};
pub use table::{NormalizedTable, normalize};

use crate::config::ExtractConfig;
use crate::models::ParticipantRecord;
use crate::workbook::{Workbook, WorkbookReader};
use crate::writer::DelimitedWriter;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Result of a successful extraction
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Accepted records in sheet order
    pub records: Vec<ParticipantRecord>,
    /// Name of the sheet the records came from
    pub sheet_name: String,
    /// Zero-based header row, `None` when the first-row fallback was used
    pub header_row: Option<usize>,
    /// Informational events, in pipeline order
    pub diagnostics: Vec<Diagnostic>,
    /// File written, when the run included the write stage
    pub output_path: Option<PathBuf>,
}

impl Extraction {
    /// True when the header row was not confirmed by keyword matching
    pub fn is_degraded(&self) -> bool {
        self.header_row.is_none()
    }
}

/// Runs the full read → extract → write pipeline
#[derive(Debug, Clone)]
pub struct Extractor<R: WorkbookReader> {
    reader: R,
    config: ExtractConfig,
}

impl<R: WorkbookReader> Extractor<R> {
    pub fn new(reader: R, config: ExtractConfig) -> Self {
        Self { reader, config }
    }

    /// Read `input`, extract records and write them to the configured output.
    ///
    /// The source is fully read and processed before the destination is
    /// touched; on any error the destination is left as it was.
    pub fn run(&self, input: &Path) -> Result<Extraction> {
        self.config.validate()?;

        let workbook = self.reader.read(input)?;
        let mut extraction = self.extract_workbook(&workbook)?;
        drop(workbook);

        let output_path = self.config.resolved_output_path();
        DelimitedWriter::new(&output_path, self.config.encoding).write(&extraction.records)?;

        info!(
            "Wrote {} records to {}",
            extraction.records.len(),
            output_path.display()
        );
        extraction.output_path = Some(output_path);
        Ok(extraction)
    }

    /// Read `input` and extract records without writing anything
    pub fn extract_file(&self, input: &Path) -> Result<Extraction> {
        self.config.validate()?;
        let workbook = self.reader.read(input)?;
        self.extract_workbook(&workbook)
    }

    /// Run the in-memory stages over an already decoded workbook
    pub fn extract_workbook(&self, workbook: &Workbook) -> Result<Extraction> {
        let mut diagnostics = Vec::new();

        let requested = self.config.sheet_name.as_deref();
        let selection = select_sheet(workbook, requested)?;
        if let Some(requested) = requested {
            if selection.reason != SelectionReason::Requested {
                diagnostics.push(Diagnostic::RequestedSheetMissing {
                    requested: requested.to_string(),
                });
            }
        }
        diagnostics.push(Diagnostic::SheetSelected {
            name: selection.sheet.name().to_string(),
            reason: selection.reason,
        });

        let locator = HeaderLocator::new(
            self.config.header_scan_rows,
            self.config.header_match_threshold,
        );
        let header_row = locator.find_header_row(selection.sheet);
        diagnostics.push(match header_row {
            Some(row) => Diagnostic::HeaderFound { row },
            None => Diagnostic::HeaderFallback {
                scanned_rows: locator.scan_rows().min(selection.sheet.row_count()),
            },
        });

        let table = normalize(selection.sheet, header_row);
        debug!(
            "Normalized '{}': {} columns, {} data rows",
            selection.sheet.name(),
            table.column_count(),
            table.row_count()
        );

        let binding = resolve_columns(&table);
        let Some(columns) = binding.complete() else {
            return Err(Error::missing_columns(
                binding.missing(),
                table.columns().to_vec(),
                diagnostics,
            ));
        };

        let column_name = |index: usize| table.columns()[index].clone();
        diagnostics.push(Diagnostic::ColumnsBound {
            helmet: column_name(columns.helmet),
            last_name: column_name(columns.last_name),
            first_name: column_name(columns.first_name),
            club: column_name(columns.club),
        });

        let records = extract(&table, &columns);

        Ok(Extraction {
            records,
            sheet_name: selection.sheet.name().to_string(),
            header_row,
            diagnostics,
            output_path: None,
        })
    }
}
