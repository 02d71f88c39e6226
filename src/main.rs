use anyhow::Context;
use clap::Parser;
use ppl_extractor::cli::args::{Args, Commands};
use ppl_extractor::cli::commands;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let input = match &command {
        Commands::Extract(extract) => extract.input.display().to_string(),
        Commands::Sheets(sheets) => sheets.input.display().to_string(),
    };

    let result = runtime.block_on(async {
        // The output file is only replaced after a complete run, so an
        // interrupted run leaves the destination as it was.
        tokio::select! {
            result = commands::run(command) => result,
            _ = tokio::signal::ctrl_c() => {
                eprintln!("\nReceived CTRL+C, stopping...");
                Err(ppl_extractor::Error::processing_interrupted(
                    "Extraction interrupted by user",
                ))
            }
        }
    });

    match result.with_context(|| format!("Could not process '{}'", input)) {
        Ok(_summary) => {
            // Success - the command has already reported its result
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("PPL Extractor - Event Spreadsheet to Lynx Participant File");
    println!("===========================================================");
    println!();
    println!("Reads an event spreadsheet with any layout, finds the participant");
    println!("sheet, header row and columns, and writes a Lynx .ppl file.");
    println!();
    println!("USAGE:");
    println!("    ppl-extractor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    extract     Extract participants into a .ppl file (main command)");
    println!("    sheets      List sheets and show which one is used by default");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Extract using the default sheet, writing ./Lynx.ppl:");
    println!("    ppl-extractor extract results.xlsx");
    println!();
    println!("    # Pick a sheet and an output directory:");
    println!("    ppl-extractor extract results.xls --sheet \"Club Results\" -o /path/to/lynx");
    println!();
    println!("    # Inspect the workbook first:");
    println!("    ppl-extractor sheets results.xlsx");
    println!();
    println!("For detailed help on any command, use:");
    println!("    ppl-extractor <COMMAND> --help");
}
