use std::{env, sync::Arc};

use anyhow::{Context, Result};
use tokio::io::{AsyncWrite, BufWriter};
use tracing::debug;

use super::super::{args::ExtractCommand, report};
use super::CommandResult;
use crate::{
    catalog::CatalogWriter,
    config::{Config, ConfigLoadResult, ExtractionConfig, load_config},
    core::{ExtractSummary, extract_catalog},
};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to resolve current directory")?;
    let ConfigLoadResult { config, from_file } = load_config(&cwd)?;

    if cmd.verbose {
        report::print_config_source(from_file);
    }

    let config = apply_overrides(config, &cmd);
    let extraction = Arc::new(ExtractionConfig::from_config(&config, &cwd)?);
    debug!(
        function = %extraction.function_name,
        custom_pattern = config.pattern.is_some(),
        roots = cmd.paths.len(),
        "starting extraction"
    );

    let summary = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(&cmd, extraction))?;

    Ok(CommandResult::extracted(summary))
}

async fn run(cmd: &ExtractCommand, config: Arc<ExtractionConfig>) -> Result<ExtractSummary> {
    match &cmd.output {
        Some(path) => {
            let file = tokio::fs::File::create(path)
                .await
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            write_to(file, cmd, config).await
        }
        None => write_to(tokio::io::stdout(), cmd, config).await,
    }
}

async fn write_to<W: AsyncWrite + Unpin>(
    out: W,
    cmd: &ExtractCommand,
    config: Arc<ExtractionConfig>,
) -> Result<ExtractSummary> {
    let mut writer = CatalogWriter::new(BufWriter::new(out));
    let summary = extract_catalog(&cmd.paths, config, &mut writer).await?;

    if cmd.verbose && summary.files == 0 {
        report::print_warning("No eligible files found");
    }

    Ok(summary)
}

/// Command-line flags win over the config file. Filter lists given on the
/// command line replace the configured lists entirely.
fn apply_overrides(mut config: Config, cmd: &ExtractCommand) -> Config {
    if let Some(function) = &cmd.function {
        config.function_name = function.clone();
        if cmd.pattern.is_none() {
            config.pattern = None;
        }
    }
    if let Some(pattern) = &cmd.pattern {
        config.pattern = Some(pattern.clone());
    }
    if let Some(index) = cmd.capture_index {
        config.capture_index = index;
    }
    if !cmd.includes.is_empty() {
        config.includes = cmd.includes.clone();
    }
    if !cmd.ignores.is_empty() {
        config.ignores = cmd.ignores.clone();
    }
    if !cmd.ignore_dirs.is_empty() {
        config.ignore_dirs = cmd.ignore_dirs.clone();
    }
    config
}
