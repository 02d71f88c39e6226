//! Core data structures shared across the extraction pipeline.
//!
//! Defines the semantic fields the pipeline looks for, the participant
//! record it produces, and the output text encodings it can write.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four semantic fields located in every source sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Helmet,
    LastName,
    FirstName,
    Club,
}

impl Field {
    /// All fields in output order
    pub const ALL: [Field; 4] = [
        Field::Helmet,
        Field::LastName,
        Field::FirstName,
        Field::Club,
    ];

    /// Human-readable label used in error reports
    pub fn label(&self) -> &'static str {
        match self {
            Field::Helmet => "Helmet/Number",
            Field::LastName => "Last Name",
            Field::FirstName => "First Name",
            Field::Club => "Club",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single accepted participant row.
///
/// Field order matters: the delimited writer serializes the struct as-is,
/// so the declaration order is the column order of the output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    pub helmet: i32,
    pub last_name: String,
    pub first_name: String,
    pub club: String,
}

impl ParticipantRecord {
    pub fn new(
        helmet: i32,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        club: impl Into<String>,
    ) -> Self {
        Self {
            helmet,
            last_name: last_name.into(),
            first_name: first_name.into(),
            club: club.into(),
        }
    }
}

/// Text encoding of the written participant file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputEncoding {
    /// UTF-16 little-endian with a `FF FE` byte-order mark (what Lynx expects)
    #[default]
    #[value(name = "utf16le")]
    Utf16Le,
    /// UTF-8 with an `EF BB BF` byte-order mark
    #[value(name = "utf8")]
    Utf8,
}

impl OutputEncoding {
    /// Byte-order mark written at the start of the file
    pub fn bom(&self) -> &'static [u8] {
        match self {
            OutputEncoding::Utf16Le => &[0xFF, 0xFE],
            OutputEncoding::Utf8 => &[0xEF, 0xBB, 0xBF],
        }
    }

    /// Encode text (without BOM) into output bytes
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            OutputEncoding::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            OutputEncoding::Utf8 => text.as_bytes().to_vec(),
        }
    }
}

impl fmt::Display for OutputEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputEncoding::Utf16Le => f.write_str("UTF-16LE"),
            OutputEncoding::Utf8 => f.write_str("UTF-8"),
        }
    }
}
