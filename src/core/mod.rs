//! Core extraction engine.
//!
//! ## Module Structure
//!
//! - `matcher`: Finds translatable literals in a single line
//! - `line_extractor`: Applies the matcher to every line of a file
//! - `filter`: File and directory name filters
//! - `listing`: Streams eligible files below a directory
//! - `tracker`: Completion bookkeeping for a directory traversal
//! - `traversal`: Fan-out/fan-in of file runs for a root path
//! - `pipeline`: Drives traversal into a catalog writer
//! - `entry`: Locations, entries and per-line groups

pub mod entry;
pub mod filter;
pub mod line_extractor;
pub mod listing;
pub mod matcher;
pub mod pipeline;
pub mod tracker;
pub mod traversal;

pub use entry::{CatalogEntry, EntryGroup, SourceLocation};
pub use pipeline::{ExtractSummary, extract_catalog, extract_to_string};
pub use traversal::{RootSummary, traverse_root};
