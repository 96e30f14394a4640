//! Per-file extraction: reads a file line by line and yields one
//! [`EntryGroup`] per line that contains translatable literals.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::{
    fs::File,
    io::{AsyncBufReadExt, AsyncRead, BufReader, Lines},
};

use super::{
    entry::{EntryGroup, SourceLocation},
    matcher::{FindLiterals, Literal},
};
use crate::{
    config::ExtractionConfig,
    error::{ExtractError, Result},
};

/// Lazy, pull-based extraction over the lines of one source.
///
/// Line splitting accepts both `\n` and `\r\n`. Line numbers start at 1 and
/// advance for every line read, matched or not.
pub struct LineExtractor<R> {
    lines: Lines<BufReader<R>>,
    path: PathBuf,
    display_path: String,
    config: Arc<ExtractionConfig>,
    line_number: usize,
}

impl LineExtractor<File> {
    pub async fn open(path: &Path, config: Arc<ExtractionConfig>) -> Result<Self> {
        let file = File::open(path).await.map_err(|source| ExtractError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(file, path, config))
    }
}

impl<R: AsyncRead + Unpin> LineExtractor<R> {
    pub fn new(reader: R, path: &Path, config: Arc<ExtractionConfig>) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
            path: path.to_path_buf(),
            display_path: config.display_path(path),
            config,
            line_number: 0,
        }
    }

    /// Next line group, or `None` at end of input.
    pub async fn next_group(&mut self) -> Result<Option<EntryGroup>> {
        while let Some(line) = self.next_line().await? {
            self.line_number += 1;

            let texts: Vec<String> = self
                .config
                .matcher
                .find_literals(&line)
                .iter()
                .map(Literal::normalized)
                .collect();

            if !texts.is_empty() {
                return Ok(Some(EntryGroup {
                    location: SourceLocation::new(self.display_path.clone(), self.line_number),
                    texts,
                }));
            }
        }
        Ok(None)
    }

    /// Drain the remaining groups.
    pub async fn collect(mut self) -> Result<Vec<EntryGroup>> {
        let mut groups = Vec::new();
        while let Some(group) = self.next_group().await? {
            groups.push(group);
        }
        Ok(groups)
    }

    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line_number
    }

    async fn next_line(&mut self) -> Result<Option<String>> {
        self.lines
            .next_line()
            .await
            .map_err(|source| ExtractError::Read {
                path: self.path.clone(),
                source,
            })
    }
}
