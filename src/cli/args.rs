//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Extract translatable strings into a gettext catalog template
//! - `init`: Initialize glot-extract configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ExtractCommand {
    /// Files or directories to extract from
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Translation function name (overrides config file)
    #[arg(short, long, env = "GLOT_EXTRACT_FUNCTION")]
    pub function: Option<String>,

    /// Custom regular expression used instead of the function call matcher
    #[arg(long)]
    pub pattern: Option<String>,

    /// Capture group of --pattern that holds the literal
    #[arg(long, requires = "pattern")]
    pub capture_index: Option<usize>,

    /// Only extract files whose name matches this glob (repeatable)
    #[arg(long = "include")]
    pub includes: Vec<String>,

    /// Skip files whose name matches this glob, replacing the defaults (repeatable)
    #[arg(long = "ignore")]
    pub ignores: Vec<String>,

    /// Skip directories whose name matches this glob, replacing the defaults (repeatable)
    #[arg(long = "ignore-dir")]
    pub ignore_dirs: Vec<String>,

    /// Write the catalog to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translatable strings into a gettext catalog template
    Extract(ExtractCommand),
    /// Initialize a new .glotextractrc.json configuration file
    Init,
}
