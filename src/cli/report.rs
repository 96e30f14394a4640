//! Report formatting and printing utilities.
//!
//! Everything here goes to stderr except the `init` confirmation, since stdout
//! carries the catalog itself.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::ExtractSummary;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the outcome of a command.
pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Extract(summary) => {
            if verbose {
                print_extract_summary_to(summary, &mut io::stderr().lock());
            }
        }
        CommandSummary::Init(summary) => print_init_to(summary, &mut io::stdout().lock()),
    }
}

pub fn print_extract_summary_to<W: Write>(summary: &ExtractSummary, writer: &mut W) {
    let msg = format!(
        "Extracted {} {} from {} {}",
        summary.entries,
        if summary.entries == 1 { "message" } else { "messages" },
        summary.files,
        if summary.files == 1 { "file" } else { "files" }
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

pub fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            io::stderr().lock(),
            "{} {} already exists",
            "error:".bold().red(),
            CONFIG_FILE_NAME
        );
    }
}

/// Tell the user where settings came from.
pub fn print_config_source(from_file: bool) {
    print_config_source_to(from_file, &mut io::stderr().lock());
}

pub fn print_config_source_to<W: Write>(from_file: bool, writer: &mut W) {
    let msg = if from_file {
        format!("using {}", CONFIG_FILE_NAME)
    } else {
        format!("no {} found, using defaults", CONFIG_FILE_NAME)
    };
    let _ = writeln!(writer, "{} {}", "note:".bold().cyan(), msg);
}

pub fn print_warning(message: &str) {
    let _ = writeln!(
        io::stderr().lock(),
        "{} {}",
        "warning:".bold().yellow(),
        message
    );
}
