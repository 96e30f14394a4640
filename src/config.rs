use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{
    filter::{DEFAULT_IGNORE_DIRS, DEFAULT_IGNORES, PathFilter},
    matcher::{DEFAULT_CAPTURE_INDEX, DEFAULT_FUNCTION_NAME, LiteralMatcher},
};
use crate::error::ExtractError;
use crate::utils::relative_path;

pub const CONFIG_FILE_NAME: &str = ".glotextractrc.json";

/// Settings as written in `.glotextractrc.json`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_function_name")]
    pub function_name: String,
    /// Custom regular expression replacing the built-in call matcher.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default = "default_capture_index")]
    pub capture_index: usize,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default = "default_ignore_dirs")]
    pub ignore_dirs: Vec<String>,
}

fn default_function_name() -> String {
    DEFAULT_FUNCTION_NAME.to_string()
}

fn default_capture_index() -> usize {
    DEFAULT_CAPTURE_INDEX
}

fn default_ignores() -> Vec<String> {
    DEFAULT_IGNORES.iter().map(|s| s.to_string()).collect()
}

fn default_ignore_dirs() -> Vec<String> {
    DEFAULT_IGNORE_DIRS.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            function_name: default_function_name(),
            pattern: None,
            capture_index: default_capture_index(),
            includes: Vec::new(),
            ignores: default_ignores(),
            ignore_dirs: default_ignore_dirs(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the custom pattern, its capture index or any
    /// filter glob is invalid.
    pub fn validate(&self) -> Result<()> {
        ExtractionConfig::from_config(self, Path::new(""))?;
        Ok(())
    }
}

/// Compiled, read-only settings for one extraction run.
///
/// Shared behind an `Arc` by every concurrent file run.
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    pub function_name: String,
    pub matcher: LiteralMatcher,
    pub filter: PathFilter,
    /// Directory locations are reported relative to.
    pub base_dir: PathBuf,
}

impl ExtractionConfig {
    /// Defaults: `_` calls, default filters.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            function_name: DEFAULT_FUNCTION_NAME.to_string(),
            matcher: LiteralMatcher::default(),
            filter: PathFilter::default(),
            base_dir: base_dir.into(),
        }
    }

    pub fn from_config(config: &Config, base_dir: &Path) -> std::result::Result<Self, ExtractError> {
        Ok(Self {
            function_name: config.function_name.clone(),
            matcher: LiteralMatcher::new(
                &config.function_name,
                config.pattern.as_deref(),
                config.capture_index,
            )?,
            filter: PathFilter::new(&config.includes, &config.ignores, &config.ignore_dirs)?,
            base_dir: base_dir.to_path_buf(),
        })
    }

    /// Location path for a file, as printed in `#:` comments.
    pub fn display_path(&self, path: &Path) -> String {
        relative_path(&self.base_dir, path)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
