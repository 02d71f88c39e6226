//! Command-line argument definitions for the participant extractor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::ExtractConfig;
use crate::constants::{DEFAULT_OUTPUT_FILE_NAME, SUPPORTED_EXTENSIONS};
use crate::models::OutputEncoding;
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the participant extractor
///
/// Reads an event spreadsheet of unknown layout and writes the participant
/// list (helmet, last name, first name, club) as a Lynx `.ppl` file.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ppl-extractor",
    version,
    about = "Extract participant lists from event spreadsheets into Lynx .ppl files",
    long_about = "Locates the participant sheet, header row and columns of an event spreadsheet \
                  without relying on fixed positions, then writes helmet number, last name, \
                  first name and club for every complete row as a Lynx .ppl participant file."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Extract participants from a spreadsheet into a .ppl file
    Extract(ExtractArgs),
    /// List the sheets of a spreadsheet and the one picked by default
    Sheets(SheetsArgs),
}

/// Arguments for the extract command
#[derive(Debug, Clone, Parser)]
pub struct ExtractArgs {
    /// Spreadsheet to read (.xls, .xlsx, .xlsm, .xlsb or .ods)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Sheet to read
    ///
    /// If omitted or not present in the workbook, the first sheet whose name
    /// contains "club" is used, otherwise the first sheet.
    #[arg(short = 's', long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// Output file or directory
    ///
    /// When a directory is given, Lynx.ppl is written inside it.
    /// Defaults to ./Lynx.ppl
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output file or directory (default: ./Lynx.ppl)"
    )]
    pub output: Option<PathBuf>,

    /// Text encoding of the output file
    #[arg(
        long = "encoding",
        value_enum,
        default_value = "utf16le",
        help = "Output encoding; Lynx expects utf16le"
    )]
    pub encoding: OutputEncoding,

    /// Print the extracted records after writing
    #[arg(long = "show", help = "Print the extracted records")]
    pub show: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the sheets command
#[derive(Debug, Clone, Parser)]
pub struct SheetsArgs {
    /// Spreadsheet to inspect
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl ExtractArgs {
    /// Validate the extract command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input(&self.input)?;

        if let Some(sheet) = &self.sheet {
            if sheet.trim().is_empty() {
                return Err(Error::configuration(
                    "Sheet name must not be empty".to_string(),
                ));
            }
        }

        if let Some(output) = &self.output {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Build the run configuration from these arguments
    pub fn to_config(&self) -> ExtractConfig {
        ExtractConfig::default()
            .with_sheet_name(self.sheet.clone())
            .with_output_path(
                self.output
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE_NAME)),
            )
            .with_encoding(self.encoding)
    }

    /// Get log level based on verbosity and quiet flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            log_level(self.verbose)
        }
    }

    /// Check if we should show progress and the summary (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl SheetsArgs {
    /// Validate the sheets command arguments
    pub fn validate(&self) -> Result<()> {
        validate_input(&self.input)
    }

    /// Get log level based on verbosity
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose)
    }
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Check the input exists, then that its extension is one a spreadsheet
/// decoder understands.
fn validate_input(input: &std::path::Path) -> Result<()> {
    if !input.is_file() {
        return Err(Error::file_not_found(input.display().to_string()));
    }

    let extension = input
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);

    match extension {
        Some(ext) if SUPPORTED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(Error::configuration(format!(
            "Unsupported input file '{}'. Expected one of: {}",
            input.display(),
            SUPPORTED_EXTENSIONS.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn extract_args(input: impl Into<PathBuf>) -> ExtractArgs {
        ExtractArgs {
            input: input.into(),
            sheet: None,
            output: None,
            encoding: OutputEncoding::Utf16Le,
            show: false,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_parse_extract_command() {
        let args = Args::try_parse_from([
            "ppl-extractor",
            "extract",
            "results.xlsx",
            "--sheet",
            "Club Results",
            "-o",
            "out.ppl",
            "--encoding",
            "utf8",
            "-vv",
        ])
        .unwrap();

        match args.command {
            Some(Commands::Extract(extract)) => {
                assert_eq!(extract.input, PathBuf::from("results.xlsx"));
                assert_eq!(extract.sheet.as_deref(), Some("Club Results"));
                assert_eq!(extract.output, Some(PathBuf::from("out.ppl")));
                assert_eq!(extract.encoding, OutputEncoding::Utf8);
                assert_eq!(extract.get_log_level(), "debug");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_default_encoding_is_utf16le() {
        let args = Args::try_parse_from(["ppl-extractor", "extract", "results.xls"]).unwrap();
        match args.command {
            Some(Commands::Extract(extract)) => {
                assert_eq!(extract.encoding, OutputEncoding::Utf16Le)
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from(["ppl-extractor", "extract", "a.xlsx", "-q", "-v"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_command_is_allowed() {
        let args = Args::try_parse_from(["ppl-extractor"]).unwrap();
        assert!(args.command.is_none());
    }

    #[test]
    fn test_log_levels() {
        let mut args = extract_args("a.xlsx");
        assert_eq!(args.get_log_level(), "warn");
        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");
        args.verbose = 5;
        assert_eq!(args.get_log_level(), "trace");
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
        assert!(!args.show_progress());
    }

    /// Create an empty file named `name` so existence checks pass
    fn touch(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, b"").unwrap();
        path
    }

    #[test]
    fn test_validate_rejects_unknown_extension() {
        let temp_dir = TempDir::new().unwrap();

        for name in ["entries.csv", "entries"] {
            let result = extract_args(touch(&temp_dir, name)).validate();
            assert!(matches!(result, Err(Error::Configuration { .. })), "{name}");
        }
        assert!(extract_args(touch(&temp_dir, "ENTRIES.XLSX")).validate().is_ok());
        assert!(extract_args(touch(&temp_dir, "entries.ods")).validate().is_ok());
    }

    #[test]
    fn test_validate_reports_missing_input_as_not_found() {
        let temp_dir = TempDir::new().unwrap();

        for name in ["absent.xlsx", "absent.csv", "absent"] {
            let result = extract_args(temp_dir.path().join(name)).validate();
            assert!(matches!(result, Err(Error::FileNotFound { .. })), "{name}");
        }

        let sheets = SheetsArgs {
            input: temp_dir.path().join("absent.xls"),
            verbose: 0,
        };
        assert!(matches!(sheets.validate(), Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_validate_rejects_missing_output_directory() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = extract_args(touch(&temp_dir, "entries.xlsx"));

        args.output = Some(temp_dir.path().join("missing").join("Lynx.ppl"));
        assert!(args.validate().is_err());

        args.output = Some(temp_dir.path().join("Lynx.ppl"));
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_sheet_name() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = extract_args(touch(&temp_dir, "entries.xlsx"));
        args.sheet = Some("  ".to_string());
        assert!(matches!(args.validate(), Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_to_config() {
        let mut args = extract_args("entries.xlsx");
        args.sheet = Some("Clubs".to_string());
        args.encoding = OutputEncoding::Utf8;

        let config = args.to_config();

        assert_eq!(config.sheet_name.as_deref(), Some("Clubs"));
        assert_eq!(config.output_path, PathBuf::from("Lynx.ppl"));
        assert_eq!(config.encoding, OutputEncoding::Utf8);
        assert_eq!(config.header_scan_rows, 20);
    }
}
