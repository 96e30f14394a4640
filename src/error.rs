//! Error types for the extraction pipeline.

use std::{io, path::PathBuf};

use thiserror::Error;

/// An error that aborts extraction of a root path.
///
/// Every variant that originates from I/O carries the offending path. The
/// underlying cause is exposed through `source()`, so callers print the full
/// chain (e.g. with anyhow's `{:#}`).
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The path does not exist or its metadata cannot be read.
    #[error("Cannot access {}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file could not be opened or failed mid-read.
    #[error("Cannot read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Directory enumeration failed.
    #[error("Cannot list {}", path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file run was cancelled before it finished, e.g. on runtime shutdown.
    #[error("Extraction of {} was cancelled", path.display())]
    Cancelled { path: PathBuf },

    /// The catalog could not be written.
    #[error("Cannot write catalog")]
    Output {
        #[source]
        source: io::Error,
    },

    /// Invalid extraction settings (pattern, capture index, filter globs).
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
