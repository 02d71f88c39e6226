//! Application constants for the participant extractor
//!
//! This module contains the lookup tables that drive header detection and
//! column resolution, plus default values used throughout the application.

// =============================================================================
// Sheet Selection
// =============================================================================

/// Sheet names containing this substring (case-insensitive) are preferred
pub const PREFERRED_SHEET_KEYWORD: &str = "club";

// =============================================================================
// Header Detection
// =============================================================================

/// Only this many rows from the top of a sheet are searched for the header
pub const DEFAULT_HEADER_SCAN_ROWS: usize = 20;

/// Number of keyword groups a row must hit to be accepted as the header
pub const DEFAULT_HEADER_MATCH_THRESHOLD: usize = 3;

/// Lowercase substrings that identify a header cell, one group per field.
///
/// Groups are listed in field order: helmet, last name, first name, club.
pub mod header_keywords {
    pub const HELMET: &[&str] = &["helmet", "number", "#"];
    pub const LAST_NAME: &[&str] = &["last", "surname"];
    pub const FIRST_NAME: &[&str] = &["first", "given"];
    pub const CLUB: &[&str] = &["club", "team", "organization"];

    /// All groups, in field order
    pub const GROUPS: &[&[&str]] = &[HELMET, LAST_NAME, FIRST_NAME, CLUB];
}

// =============================================================================
// Column Resolution
// =============================================================================

/// Accepted column names per field, matched case-insensitively.
///
/// Order is significant: the first alias found among the columns wins.
pub mod column_aliases {
    pub const HELMET: &[&str] = &["Helmet", "Helmet Number", "Helmet #", "Number"];
    pub const LAST_NAME: &[&str] = &["Last Name", "LastName", "Last", "Surname"];
    pub const FIRST_NAME: &[&str] = &["First Name", "FirstName", "First", "Given Name"];
    pub const CLUB: &[&str] = &["Club", "Club Name", "Team", "Organization"];
}

/// Prefix for synthesized names of blank header cells (`Column1`, `Column2`, ...)
pub const SYNTHETIC_COLUMN_PREFIX: &str = "Column";

// =============================================================================
// Output
// =============================================================================

/// File name written when only an output directory is given
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "Lynx.ppl";

/// Spreadsheet extensions the decoder understands
pub const SUPPORTED_EXTENSIONS: &[&str] = &["xls", "xlsx", "xlsm", "xlsb", "ods"];
