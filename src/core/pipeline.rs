//! End-to-end extraction: roots in, catalog text out.

use std::{path::PathBuf, sync::Arc};

use tokio::{io::AsyncWrite, sync::mpsc};
use tracing::debug;

use super::traversal::traverse_root;
use crate::{
    catalog::CatalogWriter,
    config::ExtractionConfig,
    error::{ExtractError, Result},
};

/// Line groups buffered between the traversal and the catalog writer.
const GROUP_BUFFER: usize = 32;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExtractSummary {
    pub roots: usize,
    pub files: usize,
    pub entries: usize,
}

/// Extract every root into `writer`, one header per root.
///
/// Roots are processed in order. The writer is flushed after each root
/// completes, so on failure only the output of earlier roots is guaranteed
/// to be written. The first failing root stops the run.
pub async fn extract_catalog<W: AsyncWrite + Unpin>(
    roots: &[PathBuf],
    config: Arc<ExtractionConfig>,
    writer: &mut CatalogWriter<W>,
) -> Result<ExtractSummary> {
    let mut summary = ExtractSummary::default();

    for root in roots {
        writer.write_header().await?;

        let (tx, rx) = mpsc::channel(GROUP_BUFFER);
        let traversal = traverse_root(root, Arc::clone(&config), tx);
        let writing = async {
            // Owned here so a write failure closes the channel and stops the traversal.
            let mut rx = rx;
            while let Some(group) = rx.recv().await {
                writer.write_group(&group).await?;
            }
            Ok::<_, ExtractError>(())
        };

        let (traversed, written) = tokio::join!(traversal, writing);
        let root_summary = traversed?;
        written?;
        writer.flush().await?;

        debug!(root = %root.display(), files = root_summary.files, "root done");
        summary.roots += 1;
        summary.files += root_summary.files;
    }

    summary.entries = writer.entry_count();
    Ok(summary)
}

/// Extract into an in-memory catalog.
pub async fn extract_to_string(
    roots: &[PathBuf],
    config: Arc<ExtractionConfig>,
) -> Result<(String, ExtractSummary)> {
    let mut writer = CatalogWriter::new(Vec::new());
    let summary = extract_catalog(roots, config, &mut writer).await?;
    let text = String::from_utf8_lossy(&writer.into_inner()).into_owned();
    Ok((text, summary))
}
