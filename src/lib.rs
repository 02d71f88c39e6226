//! PPL Extractor Library
//!
//! A Rust library for pulling participant records (helmet number, last name,
//! first name, club) out of event spreadsheets whose layout varies from one
//! organizer to the next, and writing them as a Lynx `.ppl` participant file.
//!
//! This library provides tools for:
//! - Choosing the relevant sheet of a workbook
//! - Locating the header row below titles and preamble rows
//! - Resolving columns through ordered alias tables
//! - Filtering blank, incomplete and invalid rows
//! - Writing the delimited output atomically in the encoding Lynx expects

pub mod config;
pub mod constants;
pub mod extraction;
pub mod models;
pub mod workbook;
pub mod writer;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::ExtractConfig;
pub use extraction::{Diagnostic, Extraction, Extractor};
pub use models::{Field, OutputEncoding, ParticipantRecord};
pub use workbook::{CalamineReader, Sheet, Workbook, WorkbookReader};

/// Result type alias for the participant extractor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for extraction operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Source spreadsheet does not exist or is not a file
    #[error("File '{path}' not found")]
    FileNotFound { path: String },

    /// Source spreadsheet exists but could not be decoded
    #[error("Failed to read workbook '{path}': {message}")]
    WorkbookRead {
        path: String,
        message: String,
        #[source]
        source: calamine::Error,
    },

    /// Workbook decoded to zero sheets
    #[error("No sheets found in workbook '{path}'")]
    NoSheetsFound { path: String },

    /// One or more semantic fields could not be bound to a column.
    ///
    /// Carries the diagnostics collected up to the failure so fallbacks that
    /// led here (missing sheet, no header row) stay visible to the caller.
    #[error(
        "Missing required columns: {}. Available columns: {}{}",
        join_fields(.missing),
        .available.join(", "),
        header_fallback_note(.diagnostics)
    )]
    MissingColumns {
        missing: Vec<crate::models::Field>,
        available: Vec<String>,
        diagnostics: Vec<Diagnostic>,
    },

    /// Destination could not be created or written
    #[error("Failed to write '{path}'")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Record serialization failed
    #[error("CSV serialization error")]
    Csv {
        #[source]
        source: csv::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Background extraction task failed
    #[error("Extraction task failed: {message}")]
    Task { message: String },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

fn join_fields(fields: &[crate::models::Field]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

fn header_fallback_note(diagnostics: &[Diagnostic]) -> &'static str {
    let fell_back = diagnostics
        .iter()
        .any(|diagnostic| matches!(diagnostic, Diagnostic::HeaderFallback { .. }));
    if fell_back {
        " (no header row detected; the first row was used as header)"
    } else {
        ""
    }
}

impl Error {
    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a workbook decoding error with context
    pub fn workbook_read(path: impl Into<String>, source: calamine::Error) -> Self {
        Self::WorkbookRead {
            path: path.into(),
            message: source.to_string(),
            source,
        }
    }

    /// Create a no sheets found error
    pub fn no_sheets_found(path: impl Into<String>) -> Self {
        Self::NoSheetsFound { path: path.into() }
    }

    /// Create a missing columns error
    pub fn missing_columns(
        missing: Vec<crate::models::Field>,
        available: Vec<String>,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        Self::MissingColumns {
            missing,
            available,
            diagnostics,
        }
    }

    /// Create a write error with context
    pub fn write(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a task failure error
    pub fn task(message: impl Into<String>) -> Self {
        Self::Task {
            message: message.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

impl Error {
    /// Diagnostics gathered before the failure, empty for most errors
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::MissingColumns { diagnostics, .. } => diagnostics,
            _ => &[],
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::Csv { source: error }
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(error: tokio::task::JoinError) -> Self {
        Self::Task {
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Field;

    #[test]
    fn test_missing_columns_message_lists_fields_and_columns() {
        let error = Error::missing_columns(
            vec![Field::Helmet, Field::Club],
            vec!["Bib".to_string(), "Surname".to_string()],
            Vec::new(),
        );

        assert_eq!(
            error.to_string(),
            "Missing required columns: Helmet/Number, Club. Available columns: Bib, Surname"
        );
    }

    #[test]
    fn test_missing_columns_message_notes_header_fallback() {
        let error = Error::missing_columns(
            vec![Field::Helmet],
            vec!["3".to_string(), "Berg".to_string()],
            vec![Diagnostic::HeaderFallback { scanned_rows: 2 }],
        );

        assert_eq!(error.diagnostics().len(), 1);
        assert!(
            error
                .to_string()
                .ends_with("(no header row detected; the first row was used as header)")
        );
    }

    #[test]
    fn test_file_not_found_message() {
        let error = Error::file_not_found("entries.xlsx");
        assert_eq!(error.to_string(), "File 'entries.xlsx' not found");
    }

    #[test]
    fn test_write_error_keeps_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = Error::write("/readonly/Lynx.ppl", io);

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/readonly/Lynx.ppl"));
    }
}
