//! Glot Extract - gettext template extraction without a parser
//!
//! Glot Extract is a CLI tool and library that finds string literals passed to
//! a translation function (`_('Save')` by default) and writes them out as a
//! gettext catalog template with `#: file:line` references.
//!
//! ## Module Structure
//!
//! - `catalog`: Catalog header and entry formatting
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and compiled extraction settings
//! - `core`: Extraction engine (matcher, per-file extraction, traversal)
//! - `error`: Extraction error types
//! - `utils`: Shared utility functions

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;
