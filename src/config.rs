//! Configuration for an extraction run.
//!
//! Options come from the command line layered over defaults; there are no
//! configuration files.

use crate::constants::{
    DEFAULT_HEADER_MATCH_THRESHOLD, DEFAULT_HEADER_SCAN_ROWS, DEFAULT_OUTPUT_FILE_NAME,
};
use crate::models::OutputEncoding;
use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Options controlling a single extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Sheet to read; falls back to heuristics when absent or not found
    pub sheet_name: Option<String>,

    /// Destination file, or a directory to place `Lynx.ppl` in
    pub output_path: PathBuf,

    /// Text encoding of the written file
    pub encoding: OutputEncoding,

    /// Number of rows searched from the top of the sheet for the header
    pub header_scan_rows: usize,

    /// Keyword groups (out of four) a row must hit to count as the header
    pub header_match_threshold: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            sheet_name: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE_NAME),
            encoding: OutputEncoding::default(),
            header_scan_rows: DEFAULT_HEADER_SCAN_ROWS,
            header_match_threshold: DEFAULT_HEADER_MATCH_THRESHOLD,
        }
    }
}

impl ExtractConfig {
    /// Set the requested sheet name
    pub fn with_sheet_name(mut self, sheet_name: Option<String>) -> Self {
        self.sheet_name = sheet_name;
        self
    }

    /// Set the output destination
    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    /// Set the output encoding
    pub fn with_encoding(mut self, encoding: OutputEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Check option values for consistency
    pub fn validate(&self) -> Result<()> {
        if self.header_scan_rows == 0 {
            return Err(Error::configuration(
                "Header scan rows must be greater than 0".to_string(),
            ));
        }

        if !(1..=4).contains(&self.header_match_threshold) {
            return Err(Error::configuration(format!(
                "Header match threshold must be between 1 and 4, got {}",
                self.header_match_threshold
            )));
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(Error::configuration(
                "Output path must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Final destination file: directories get `Lynx.ppl` appended
    pub fn resolved_output_path(&self) -> PathBuf {
        resolve_output_path(&self.output_path)
    }
}

fn resolve_output_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(DEFAULT_OUTPUT_FILE_NAME)
    } else {
        path.to_path_buf()
    }
}
