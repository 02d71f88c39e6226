//! Advisory messages describing how an extraction was carried out.
//!
//! The pipeline collects these instead of logging directly, so every caller
//! (library user or CLI) gets the same record of which heuristics fired.

use std::fmt;
use tracing::{info, warn};

/// How the sheet was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionReason {
    /// Exact match of the requested name
    Requested,
    /// First sheet whose name contains "club"
    ContainsClub,
    /// Nothing better available: first sheet in the workbook
    FirstSheet,
}

impl fmt::Display for SelectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionReason::Requested => f.write_str("requested by name"),
            SelectionReason::ContainsClub => f.write_str("name contains 'club'"),
            SelectionReason::FirstSheet => f.write_str("first sheet in workbook"),
        }
    }
}

/// One informational event from an extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The requested sheet name does not exist; heuristics were used instead
    RequestedSheetMissing { requested: String },
    SheetSelected {
        name: String,
        reason: SelectionReason,
    },
    /// Zero-based index of the detected header row
    HeaderFound { row: usize },
    /// No header row detected; the first row was used (degraded confidence)
    HeaderFallback { scanned_rows: usize },
    ColumnsBound {
        helmet: String,
        last_name: String,
        first_name: String,
        club: String,
    },
}

impl Diagnostic {
    /// True for events signalling a fallback path
    pub fn is_fallback(&self) -> bool {
        matches!(
            self,
            Diagnostic::RequestedSheetMissing { .. }
                | Diagnostic::HeaderFallback { .. }
                | Diagnostic::SheetSelected {
                    reason: SelectionReason::FirstSheet,
                    ..
                }
        )
    }

    /// Forward to the tracing subscriber
    pub fn emit(&self) {
        if self.is_fallback() {
            warn!("{}", self);
        } else {
            info!("{}", self);
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::RequestedSheetMissing { requested } => write!(
                f,
                "Sheet '{requested}' not found, falling back to sheet heuristics"
            ),
            Diagnostic::SheetSelected { name, reason } => {
                write!(f, "Using sheet '{name}' ({reason})")
            }
            Diagnostic::HeaderFound { row } => {
                write!(f, "Header row found at row {}", row + 1)
            }
            Diagnostic::HeaderFallback { scanned_rows } => write!(
                f,
                "No header row found in the first {scanned_rows} rows, using row 1 as header (degraded confidence)"
            ),
            Diagnostic::ColumnsBound {
                helmet,
                last_name,
                first_name,
                club,
            } => write!(
                f,
                "Columns bound: helmet='{helmet}', last name='{last_name}', first name='{first_name}', club='{club}'"
            ),
        }
    }
}
