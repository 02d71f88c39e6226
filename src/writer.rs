//! Delimited writer for Lynx participant files.
//!
//! Records are written as `helmet,last name,first name,club` lines with
//! standard CSV quoting and no header line. Lynx reads `.ppl` files as
//! UTF-16LE with a byte-order mark, which is the default encoding here.
//!
//! The destination is replaced atomically: output goes to a temporary file
//! in the same directory and is renamed over the target once complete.

use crate::models::{OutputEncoding, ParticipantRecord};
use crate::{Error, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Writes participant records to a single destination file
#[derive(Debug, Clone)]
pub struct DelimitedWriter {
    output_path: PathBuf,
    encoding: OutputEncoding,
}

impl DelimitedWriter {
    pub fn new(output_path: impl Into<PathBuf>, encoding: OutputEncoding) -> Self {
        Self {
            output_path: output_path.into(),
            encoding,
        }
    }

    /// Serialize and write all records, returning the number of bytes written
    pub fn write(&self, records: &[ParticipantRecord]) -> Result<usize> {
        let bytes = render(records, self.encoding)?;
        let path_label = self.output_path.display().to_string();

        let directory = match self.output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp_file = create_temp_file(directory, &self.output_path)
            .map_err(|e| Error::write(&path_label, e))?;
        temp_file
            .write_all(&bytes)
            .and_then(|_| temp_file.as_file().sync_all())
            .map_err(|e| Error::write(&path_label, e))?;
        temp_file
            .persist(&self.output_path)
            .map_err(|e| Error::write(&path_label, e.error))?;

        debug!(
            "Wrote {} records ({} bytes, {}) to {}",
            records.len(),
            bytes.len(),
            self.encoding,
            path_label
        );
        Ok(bytes.len())
    }
}

/// Temporary sibling of `destination` carrying the permissions the final
/// file should have.
///
/// An existing destination keeps its mode. A new file gets the same mode a
/// plain create would give it (0o666 filtered by the umask), not the
/// owner-only mode of a default temp file.
fn create_temp_file(directory: &Path, destination: &Path) -> std::io::Result<NamedTempFile> {
    let existing = std::fs::metadata(destination)
        .ok()
        .map(|metadata| metadata.permissions());

    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let temp_file = builder.tempfile_in(directory)?;

    if let Some(permissions) = existing {
        temp_file.as_file().set_permissions(permissions)?;
    }
    Ok(temp_file)
}

/// Write records to `path`, truncating whatever was there
pub fn write_records(
    records: &[ParticipantRecord],
    path: &Path,
    encoding: OutputEncoding,
) -> Result<usize> {
    DelimitedWriter::new(path, encoding).write(records)
}

/// Full file contents: BOM followed by the encoded CSV text
pub fn render(records: &[ParticipantRecord], encoding: OutputEncoding) -> Result<Vec<u8>> {
    let text = to_csv_text(records)?;

    let mut bytes = encoding.bom().to_vec();
    bytes.extend(encoding.encode(&text));
    Ok(bytes)
}

fn to_csv_text(records: &[ParticipantRecord]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    for record in records {
        writer.serialize(record)?;
    }

    let buffer = writer
        .into_inner()
        .map_err(|e| Error::write("<buffer>", e.into_error()))?;

    // csv only emits what it was given, and every field started as a String
    String::from_utf8(buffer)
        .map_err(|e| Error::write("<buffer>", std::io::Error::other(e)))
}
