//! Traversal aggregator: fans extraction out over every file of a root and
//! fans the resulting line groups back into a single stream.
//!
//! ## Scheduling
//!
//! Discovered files are queued and started in discovery order, at most
//! `MAX_OPEN_FILES` at a time. Each run gets a small bounded channel and the
//! aggregator forwards groups from the oldest run first, so later runs work
//! ahead until their buffer is full and the output is the same on every run.
//! The listing pauses while `MAX_QUEUED_FILES` paths wait for a run. A slow
//! consumer stalls the aggregator on `sink.send`, which in turn stalls the
//! file runs.
//!
//! ## Completion and failure
//!
//! A root resolves exactly once: `traverse_root` returns when the listing has
//! ended, every file task has finished and every buffered group was
//! forwarded, or with the first error observed. Returning drops the
//! `JoinSet`, which aborts any file task still running, and the listing
//! receiver, which stops the walker.

use std::{
    collections::VecDeque,
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::{sync::mpsc, task::JoinSet};
use tracing::debug;

use super::{
    entry::EntryGroup, line_extractor::LineExtractor, listing::spawn_listing,
    tracker::CompletionTracker,
};
use crate::{
    config::ExtractionConfig,
    error::{ExtractError, Result},
};

/// Line groups buffered per in-flight file.
const FILE_BUFFER: usize = 16;

/// File runs that may hold an open file at the same time.
const MAX_OPEN_FILES: usize = 32;

/// Listed files waiting for a run before the listing is paused.
const MAX_QUEUED_FILES: usize = 256;

/// What a finished root produced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RootSummary {
    pub files: usize,
}

/// Extract every eligible file below `root` (or `root` itself if it is a file)
/// into `sink`.
///
/// If the receiving end of `sink` is dropped, extraction stops early and
/// returns successfully.
pub async fn traverse_root(
    root: &Path,
    config: Arc<ExtractionConfig>,
    sink: mpsc::Sender<EntryGroup>,
) -> Result<RootSummary> {
    let metadata = tokio::fs::metadata(root)
        .await
        .map_err(|source| ExtractError::Stat {
            path: root.to_path_buf(),
            source,
        })?;

    if metadata.is_file() {
        extract_file(root, config, &sink).await?;
        Ok(RootSummary { files: 1 })
    } else if metadata.is_dir() {
        traverse_directory(root, config, &sink).await
    } else {
        debug!(root = %root.display(), "skipping special file");
        Ok(RootSummary::default())
    }
}

/// Run the line extractor over one file, forwarding each group to `sink`.
pub async fn extract_file(
    path: &Path,
    config: Arc<ExtractionConfig>,
    sink: &mpsc::Sender<EntryGroup>,
) -> Result<()> {
    debug!(path = %path.display(), "extracting file");

    let mut extractor = LineExtractor::open(path, config).await?;
    while let Some(group) = extractor.next_group().await? {
        if sink.send(group).await.is_err() {
            debug!(path = %path.display(), "sink closed, stopping file");
            break;
        }
    }

    debug!(path = %path.display(), lines = extractor.lines_read(), "file done");
    Ok(())
}

async fn traverse_directory(
    root: &Path,
    config: Arc<ExtractionConfig>,
    sink: &mpsc::Sender<EntryGroup>,
) -> Result<RootSummary> {
    let mut listing = spawn_listing(root.to_path_buf(), config.filter.clone());
    let mut tracker = CompletionTracker::new();
    let mut runs: JoinSet<Result<()>> = JoinSet::new();
    let mut queued: VecDeque<PathBuf> = VecDeque::new();
    let mut pending: VecDeque<(PathBuf, mpsc::Receiver<EntryGroup>)> = VecDeque::new();

    loop {
        // Runs start in discovery order, so the front of `pending` always has one.
        while pending.len() < MAX_OPEN_FILES {
            let Some(path) = queued.pop_front() else {
                break;
            };
            pending.push_back(start_run(&mut runs, path, &config));
        }

        tokio::select! {
            biased;

            Some(joined) = runs.join_next(), if !runs.is_empty() => {
                match joined {
                    Ok(Ok(())) => {
                        if tracker.child_finished() && pending.is_empty() {
                            break;
                        }
                    }
                    Ok(Err(err)) => {
                        debug!(root = %root.display(), error = %err, "aborting traversal");
                        return Err(err);
                    }
                    Err(join_err) if join_err.is_panic() => {
                        std::panic::resume_unwind(join_err.into_panic());
                    }
                    Err(_) => {
                        debug!(root = %root.display(), "file run cancelled");
                        return Err(ExtractError::Cancelled {
                            path: root.to_path_buf(),
                        });
                    }
                }
            }

            group = recv_front(&mut pending), if !pending.is_empty() => {
                match group {
                    Some(group) => {
                        if sink.send(group).await.is_err() {
                            debug!(root = %root.display(), "sink closed, stopping traversal");
                            return Ok(RootSummary { files: tracker.discovered() });
                        }
                    }
                    None => {
                        if let Some((path, _)) = pending.pop_front() {
                            debug!(path = %path.display(), "file drained");
                        }
                        if tracker.is_complete() && pending.is_empty() {
                            break;
                        }
                    }
                }
            }

            listed = listing.recv(), if !tracker.is_listing_done() && queued.len() < MAX_QUEUED_FILES => {
                match listed {
                    Some(Ok(path)) => {
                        tracker.child_discovered();
                        queued.push_back(path);
                    }
                    Some(Err(err)) => {
                        debug!(root = %root.display(), error = %err, "aborting traversal");
                        return Err(err);
                    }
                    None => {
                        debug!(
                            root = %root.display(),
                            files = tracker.discovered(),
                            in_flight = tracker.in_flight(),
                            "listing done"
                        );
                        if tracker.listing_finished() && pending.is_empty() {
                            break;
                        }
                    }
                }
            }

            else => break,
        }
    }

    Ok(RootSummary {
        files: tracker.discovered(),
    })
}

fn start_run(
    runs: &mut JoinSet<Result<()>>,
    path: PathBuf,
    config: &Arc<ExtractionConfig>,
) -> (PathBuf, mpsc::Receiver<EntryGroup>) {
    let (tx, rx) = mpsc::channel(FILE_BUFFER);
    let file_config = Arc::clone(config);
    let file_path = path.clone();
    runs.spawn(async move { extract_file(&file_path, file_config, &tx).await });
    (path, rx)
}

/// Receive from the oldest in-flight file. `None` means that file's run has
/// dropped its sender and everything it sent was received.
async fn recv_front(
    pending: &mut VecDeque<(PathBuf, mpsc::Receiver<EntryGroup>)>,
) -> Option<EntryGroup> {
    match pending.front_mut() {
        Some((_, rx)) => rx.recv().await,
        None => std::future::pending().await,
    }
}
