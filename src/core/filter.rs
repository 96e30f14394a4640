//! File and directory name filters applied while listing a directory.

use glob::Pattern;

use crate::error::{ExtractError, Result};

/// File names skipped by default: dotfiles and common binary archives/images.
pub const DEFAULT_IGNORES: &[&str] = &[".*", "*.png", "*.jpg", "*.gif", "*.zip", "*.gz"];

/// Directory names skipped by default.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[".*", "node_modules", "coverage"];

/// Compiled name filters.
///
/// Globs are matched against the entry's file name only, not its full path.
#[derive(Debug, Clone)]
pub struct PathFilter {
    includes: Vec<Pattern>,
    ignores: Vec<Pattern>,
    ignore_dirs: Vec<Pattern>,
}

impl PathFilter {
    pub fn new(includes: &[String], ignores: &[String], ignore_dirs: &[String]) -> Result<Self> {
        Ok(Self {
            includes: compile(includes, "includes")?,
            ignores: compile(ignores, "ignores")?,
            ignore_dirs: compile(ignore_dirs, "ignoreDirs")?,
        })
    }

    /// A file passes when it matches an include glob (or none are set) and
    /// no ignore glob.
    pub fn accepts_file(&self, name: &str) -> bool {
        let included = self.includes.is_empty() || self.includes.iter().any(|p| p.matches(name));
        included && !self.ignores.iter().any(|p| p.matches(name))
    }

    pub fn accepts_dir(&self, name: &str) -> bool {
        !self.ignore_dirs.iter().any(|p| p.matches(name))
    }
}

impl Default for PathFilter {
    fn default() -> Self {
        Self {
            includes: Vec::new(),
            ignores: DEFAULT_IGNORES.iter().filter_map(|p| Pattern::new(p).ok()).collect(),
            ignore_dirs: DEFAULT_IGNORE_DIRS
                .iter()
                .filter_map(|p| Pattern::new(p).ok())
                .collect(),
        }
    }
}

fn compile(patterns: &[String], field: &str) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| {
                ExtractError::Config(format!(
                    "invalid glob pattern in '{}': \"{}\" ({})",
                    field, p, e
                ))
            })
        })
        .collect()
}
